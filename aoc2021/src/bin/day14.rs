use aoc_harness::time;
use fxhash::FxHashMap;
use itertools::{Itertools, MinMaxResult};

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 14)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

/// Only pair counts are tracked; the polymer itself grows exponentially.
fn polymerize(input: &str, steps: usize) -> u64 {
    let (template, rules) = input.trim().split_once("\n\n").unwrap();
    let template = template.trim().as_bytes();

    let rules: FxHashMap<(u8, u8), u8> = rules
        .lines()
        .map(|line| {
            let (pair, insert) = line.trim().split_once(" -> ").unwrap();
            let pair = pair.as_bytes();
            ((pair[0], pair[1]), insert.as_bytes()[0])
        })
        .collect();

    let mut pairs: FxHashMap<(u8, u8), u64> = FxHashMap::default();
    for (&a, &b) in template.iter().tuple_windows() {
        *pairs.entry((a, b)).or_default() += 1;
    }

    for _ in 0..steps {
        let mut next: FxHashMap<(u8, u8), u64> = FxHashMap::default();
        for ((a, b), n) in pairs {
            match rules.get(&(a, b)) {
                Some(&c) => {
                    *next.entry((a, c)).or_default() += n;
                    *next.entry((c, b)).or_default() += n;
                }
                None => *next.entry((a, b)).or_default() += n,
            }
        }
        pairs = next;
    }

    // every element is the first of some pair, except the very last one
    let mut counts: FxHashMap<u8, u64> = FxHashMap::default();
    for ((a, _), n) in pairs {
        *counts.entry(a).or_default() += n;
    }
    *counts.entry(*template.last().unwrap()).or_default() += 1;

    match counts.values().minmax() {
        MinMaxResult::MinMax(min, max) => max - min,
        _ => 0,
    }
}

fn solve(input: &str) -> u64 {
    polymerize(input, 10)
}

fn bonus(input: &str) -> u64 {
    polymerize(input, 40)
}

#[test]
fn test() {
    let example_input = "
NNCB

CH -> B
HH -> N
CB -> H
NH -> C
HB -> C
HC -> B
HN -> C
NN -> C
BH -> H
NC -> B
NB -> B
BN -> B
BB -> N
BC -> B
CC -> N
CN -> C
";

    assert_eq!(solve(example_input), 1588);
    assert_eq!(bonus(example_input), 2188189693529);
}
