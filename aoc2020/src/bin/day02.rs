use aoc_harness::time;
use regex::Regex;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 2)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

struct Policy<'a> {
    a: usize,
    b: usize,
    letter: char,
    password: &'a str,
}

fn parse(input: &str) -> Vec<Policy> {
    let re = Regex::new(r"^(\d+)-(\d+) (\w): (\w+)$").unwrap();

    input
        .trim()
        .lines()
        .map(|line| {
            let caps = re.captures(line.trim()).unwrap();
            Policy {
                a: caps[1].parse().unwrap(),
                b: caps[2].parse().unwrap(),
                letter: caps[3].chars().next().unwrap(),
                password: caps.get(4).unwrap().as_str(),
            }
        })
        .collect()
}

fn solve(input: &str) -> usize {
    parse(input)
        .into_iter()
        .filter(|p| {
            let hits = p.password.chars().filter(|&c| c == p.letter).count();
            p.a <= hits && hits <= p.b
        })
        .count()
}

// positions are 1-based, exactly one of them must hold the letter
fn bonus(input: &str) -> usize {
    parse(input)
        .into_iter()
        .filter(|p| {
            let at = |i: usize| p.password.chars().nth(i - 1) == Some(p.letter);
            at(p.a) != at(p.b)
        })
        .count()
}

#[test]
fn test() {
    let example_input = "
1-3 a: abcde
1-3 b: cdefg
2-9 c: ccccccccc
";

    assert_eq!(solve(example_input), 2);
    assert_eq!(bonus(example_input), 1);
}
