use aoc_harness::time;
use fxhash::FxHashMap;

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

fn parse(input: &str) -> (Vec<u32>, Vec<u32>) {
    input
        .trim()
        .lines()
        .map(|line| {
            let mut it = line.split_whitespace().map(|n| n.parse::<u32>().unwrap());
            (it.next().unwrap(), it.next().unwrap())
        })
        .unzip()
}

fn solve(input: &str) -> u32 {
    let (mut left, mut right) = parse(input);
    left.sort_unstable();
    right.sort_unstable();

    left.iter().zip(&right).map(|(a, b)| a.abs_diff(*b)).sum()
}

fn bonus(input: &str) -> u32 {
    let (left, right) = parse(input);

    let mut counts: FxHashMap<u32, u32> = FxHashMap::default();
    for n in right {
        *counts.entry(n).or_default() += 1;
    }

    left.iter()
        .map(|n| n * counts.get(n).copied().unwrap_or(0))
        .sum()
}

#[test]
fn test() {
    let example_input = "
3   4
4   3
2   5
1   3
3   9
3   3
";

    assert_eq!(solve(example_input), 11);
    assert_eq!(bonus(example_input), 31);
}
