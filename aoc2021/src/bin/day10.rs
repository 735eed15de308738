use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 10)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

enum Check {
    Corrupted(char),
    Incomplete(Vec<char>),
}

fn check(line: &str) -> Check {
    let mut stack = vec![];

    for c in line.trim().chars() {
        match c {
            '(' => stack.push(')'),
            '[' => stack.push(']'),
            '{' => stack.push('}'),
            '<' => stack.push('>'),
            _ => {
                if stack.pop() != Some(c) {
                    return Check::Corrupted(c);
                }
            }
        }
    }

    stack.reverse();
    Check::Incomplete(stack)
}

fn solve(input: &str) -> u64 {
    input
        .trim()
        .lines()
        .map(|line| match check(line) {
            Check::Corrupted(')') => 3,
            Check::Corrupted(']') => 57,
            Check::Corrupted('}') => 1197,
            Check::Corrupted('>') => 25137,
            _ => 0,
        })
        .sum()
}

fn bonus(input: &str) -> u64 {
    let mut scores = input
        .trim()
        .lines()
        .filter_map(|line| match check(line) {
            Check::Incomplete(missing) => Some(missing.into_iter().fold(0, |score, c| {
                score * 5
                    + match c {
                        ')' => 1,
                        ']' => 2,
                        '}' => 3,
                        _ => 4,
                    }
            })),
            Check::Corrupted(_) => None,
        })
        .collect::<Vec<u64>>();

    scores.sort_unstable();
    scores[scores.len() / 2]
}

#[test]
fn test() {
    let example_input = "
[({(<(())[]>[[{[]{<()<>>
[(()[<>])]({[<{<<[]>>(
{([(<{}[<>[]}>{[]{[(<()>
(((({<>}<{<{<>}{[]{[]{}
[[<[([]))<([[{}[[()]]]
[{[{({}]{}}([{[{{{}}([]
{<[[]]>}<{[{[{[]{()[[[]
[<(<(<(<{}))><([]([]()
<{([([[(<>()){}]>(<<{{
<{([{{}}[<[[[<>{}]]]>[]]
";

    assert_eq!(solve(example_input), 26397);
    assert_eq!(bonus(example_input), 288957);
}
