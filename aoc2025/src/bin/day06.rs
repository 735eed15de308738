use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 6)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

fn apply(op: char, nums: impl Iterator<Item = u64>) -> u64 {
    match op {
        '+' => nums.sum(),
        '*' => nums.product(),
        _ => unreachable!(),
    }
}

/// Number rows and the operator row, with the column alignment intact.
fn parse(input: &str) -> (Vec<&str>, Vec<char>) {
    let mut lines = input.trim_matches('\n').lines().collect::<Vec<_>>();
    let ops = lines
        .pop()
        .unwrap()
        .split_whitespace()
        .map(|op| op.chars().next().unwrap())
        .collect();

    (lines, ops)
}

fn solve(input: &str) -> u64 {
    let (rows, ops) = parse(input);
    let rows = rows
        .iter()
        .map(|row| {
            row.split_whitespace()
                .map(|n| n.parse().unwrap())
                .collect::<Vec<u64>>()
        })
        .collect::<Vec<_>>();

    ops.iter()
        .enumerate()
        .map(|(i, &op)| apply(op, rows.iter().map(|row| row[i])))
        .sum()
}

/// Each column, read top to bottom, is one number; blank columns separate
/// the problems.
fn bonus(input: &str) -> u64 {
    let (rows, ops) = parse(input);
    let width = rows.iter().map(|row| row.len()).max().unwrap();

    let columns = (0..width)
        .map(|x| {
            let digits = rows
                .iter()
                .filter_map(|row| row.as_bytes().get(x))
                .filter(|c| c.is_ascii_digit())
                .map(|&c| c as char)
                .collect::<String>();
            digits.parse::<u64>().ok()
        })
        .collect::<Vec<_>>();

    columns
        .split(Option::is_none)
        .zip(&ops)
        .map(|(nums, &op)| apply(op, nums.iter().flatten().copied()))
        .sum()
}

#[test]
fn test() {
    let example_input = [
        "123 328  51 64 ",
        " 45 64  387 23 ",
        "  6 98  215 314",
        "*   +   *   +  ",
    ]
    .join("\n");

    assert_eq!(solve(&example_input), 4277556);
    assert_eq!(bonus(&example_input), 3263827);
}
