use aoc_harness::time;
use cached::proc_macro::cached;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 21)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

type Pos = (i32, i32);

const NUMERIC: [&str; 4] = ["789", "456", "123", " 0A"];
const DIRECTIONAL: [&str; 2] = [" ^A", "<v>"];

fn locate(pad: &[&str], key: char) -> Pos {
    pad.iter()
        .enumerate()
        .find_map(|(y, row)| row.find(key).map(|x| (x as i32, y as i32)))
        .unwrap()
}

/// Button presses on the next keypad out that move from `a` to `b` and
/// press it, going horizontal-first or vertical-first while avoiding the gap.
fn moves(pad: &[&str], a: char, b: char) -> Vec<String> {
    let ((x1, y1), (x2, y2)) = (locate(pad, a), locate(pad, b));
    let gap = locate(pad, ' ');

    let horizontal = (if x2 > x1 { ">" } else { "<" }).repeat(x1.abs_diff(x2) as usize);
    let vertical = (if y2 > y1 { "v" } else { "^" }).repeat(y1.abs_diff(y2) as usize);

    let mut options = vec![];
    if (x2, y1) != gap {
        options.push(format!("{horizontal}{vertical}A"));
    }
    if (x1, y2) != gap {
        options.push(format!("{vertical}{horizontal}A"));
    }
    options
}

#[cached]
fn directional_cost(a: char, b: char, robots: usize) -> u64 {
    moves(&DIRECTIONAL, a, b)
        .iter()
        .map(|seq| sequence_cost(seq, robots - 1))
        .min()
        .unwrap()
}

/// Presses needed by the human to get `seq` typed `robots` keypads further in.
fn sequence_cost(seq: &str, robots: usize) -> u64 {
    if robots == 0 {
        return seq.len() as u64;
    }

    std::iter::once('A')
        .chain(seq.chars())
        .zip(seq.chars())
        .map(|(a, b)| directional_cost(a, b, robots))
        .sum()
}

fn complexity(input: &str, robots: usize) -> u64 {
    input
        .trim()
        .lines()
        .map(|code| {
            let code = code.trim();
            let presses: u64 = std::iter::once('A')
                .chain(code.chars())
                .zip(code.chars())
                .map(|(a, b)| {
                    moves(&NUMERIC, a, b)
                        .iter()
                        .map(|seq| sequence_cost(seq, robots))
                        .min()
                        .unwrap()
                })
                .sum();

            presses * code[..code.len() - 1].parse::<u64>().unwrap()
        })
        .sum()
}

fn solve(input: &str) -> u64 {
    complexity(input, 2)
}

fn bonus(input: &str) -> u64 {
    complexity(input, 25)
}

#[test]
fn test() {
    let example_input = "
029A
980A
179A
456A
379A
";

    assert_eq!(solve(example_input), 126384);
    assert_eq!(bonus(example_input), 154115708116294);
}
