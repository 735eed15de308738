use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 9)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

fn extrapolate(values: &[i64]) -> i64 {
    if values.iter().all(|&v| v == 0) {
        return 0;
    }

    let diffs = values.windows(2).map(|w| w[1] - w[0]).collect::<Vec<_>>();
    values[values.len() - 1] + extrapolate(&diffs)
}

fn histories(input: &str) -> Vec<Vec<i64>> {
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

fn solve(input: &str) -> i64 {
    histories(input).iter().map(|h| extrapolate(h)).sum()
}

/// Going backwards is going forwards through the reversed history.
fn bonus(input: &str) -> i64 {
    histories(input)
        .into_iter()
        .map(|mut h| {
            h.reverse();
            extrapolate(&h)
        })
        .sum()
}

#[test]
fn test() {
    let example_input = "
0 3 6 9 12 15
1 3 6 10 15 21
10 13 16 21 30 45
";

    assert_eq!(solve(example_input), 114);
    assert_eq!(bonus(example_input), 2);
}
