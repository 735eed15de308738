use aoc_harness::time;
use itertools::Itertools;

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

fn parse(input: &str) -> Vec<Vec<i32>> {
    input
        .trim()
        .lines()
        .map(|line| {
            line.split_whitespace()
                .map(|n| n.parse().unwrap())
                .collect()
        })
        .collect()
}

fn is_safe(levels: &[i32]) -> bool {
    let diffs = levels
        .iter()
        .tuple_windows()
        .map(|(a, b)| b - a)
        .collect::<Vec<_>>();

    diffs.iter().all(|d| (1..=3).contains(d)) || diffs.iter().all(|d| (-3..=-1).contains(d))
}

fn solve(input: &str) -> usize {
    parse(input).iter().filter(|r| is_safe(r)).count()
}

fn bonus(input: &str) -> usize {
    parse(input)
        .iter()
        .filter(|report| {
            (0..report.len()).any(|skip| {
                let mut dampened = report.to_vec();
                dampened.remove(skip);
                is_safe(&dampened)
            })
        })
        .count()
}

#[test]
fn test() {
    let example_input = "
7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

    assert_eq!(solve(example_input), 2);
    assert_eq!(bonus(example_input), 4);
}
