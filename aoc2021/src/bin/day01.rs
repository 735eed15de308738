use aoc_harness::time;

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

fn parse(input: &str) -> Vec<u32> {
    input
        .trim()
        .lines()
        .map(|line| line.trim().parse().unwrap())
        .collect()
}

// comparing sums of windows of `size` only needs their outer elements
fn increases(depths: &[u32], size: usize) -> usize {
    depths
        .windows(size + 1)
        .filter(|w| w[size] > w[0])
        .count()
}

fn solve(input: &str) -> usize {
    increases(&parse(input), 1)
}

fn bonus(input: &str) -> usize {
    increases(&parse(input), 3)
}

#[test]
fn test() {
    let example_input = "
199
200
208
210
200
207
240
269
260
263
";

    assert_eq!(solve(example_input), 7);
    assert_eq!(bonus(example_input), 5);
}
