use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 7)?;

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
        .split(',')
        .map(|n| n.parse().unwrap())
        .collect()
}

// both cost functions are convex, so scanning every target is plenty
fn cheapest(crabs: &[i64], cost: impl Fn(i64) -> i64) -> i64 {
    let lo = *crabs.iter().min().unwrap();
    let hi = *crabs.iter().max().unwrap();

    (lo..=hi)
        .map(|target| crabs.iter().map(|&c| cost((c - target).abs())).sum())
        .min()
        .unwrap()
}

fn solve(input: &str) -> i64 {
    cheapest(&parse(input), |d| d)
}

fn bonus(input: &str) -> i64 {
    cheapest(&parse(input), |d| d * (d + 1) / 2)
}

#[test]
fn test() {
    assert_eq!(solve("16,1,2,0,4,2,7,1,2,14"), 37);
    assert_eq!(bonus("16,1,2,0,4,2,7,1,2,14"), 168);
}
