use aoc_harness::time;
use fxhash::{FxHashMap, FxHashSet};

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 22)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

fn next(mut secret: u64) -> u64 {
    secret = (secret ^ (secret << 6)) % 16777216;
    secret = (secret ^ (secret >> 5)) % 16777216;
    (secret ^ (secret << 11)) % 16777216
}

fn parse(input: &str) -> Vec<u64> {
    input
        .trim()
        .lines()
        .map(|l| l.trim().parse().unwrap())
        .collect()
}

fn solve(input: &str) -> u64 {
    parse(input)
        .into_iter()
        .map(|s| (0..2000).fold(s, |s, _| next(s)))
        .sum()
}

fn bonus(input: &str) -> u64 {
    let mut bananas: FxHashMap<[i8; 4], u64> = FxHashMap::default();

    for mut secret in parse(input) {
        let mut prices = vec![(secret % 10) as i8];
        for _ in 0..2000 {
            secret = next(secret);
            prices.push((secret % 10) as i8);
        }

        // a monkey sells at the first occurrence of the sequence only
        let mut seen = FxHashSet::default();
        for w in prices.windows(5) {
            let changes = [w[1] - w[0], w[2] - w[1], w[3] - w[2], w[4] - w[3]];
            if seen.insert(changes) {
                *bananas.entry(changes).or_default() += w[4] as u64;
            }
        }
    }

    bananas.into_values().max().unwrap()
}

#[test]
fn test() {
    assert_eq!(next(123), 15887950);
    assert_eq!(solve("1\n10\n100\n2024"), 37327623);
    assert_eq!(bonus("1\n2\n3\n2024"), 23);
}
