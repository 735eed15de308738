use aoc_harness::time;
use itertools::Itertools;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 1)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

fn parse(input: &str) -> Vec<i64> {
    input
        .trim()
        .lines()
        .map(|line| line.trim().parse::<i64>().unwrap())
        .collect()
}

fn find_product(entries: &[i64], k: usize) -> i64 {
    entries
        .iter()
        .combinations(k)
        .find(|combo| combo.iter().copied().sum::<i64>() == 2020)
        .unwrap()
        .into_iter()
        .product()
}

fn solve(input: &str) -> i64 {
    find_product(&parse(input), 2)
}

fn bonus(input: &str) -> i64 {
    find_product(&parse(input), 3)
}

#[test]
fn test() {
    let example_input = "
1721
979
366
299
675
1456
";

    assert_eq!(solve(example_input), 514579);
    assert_eq!(bonus(example_input), 241861950);
}
