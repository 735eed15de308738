use aoc_harness::time;
use itertools::Itertools;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 3)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

fn items(s: &str) -> u64 {
    s.bytes().fold(0, |set, b| {
        let priority = match b {
            b'a'..=b'z' => b - b'a' + 1,
            _ => b - b'A' + 27,
        };
        set | 1 << priority
    })
}

fn priority(set: u64) -> u32 {
    set.trailing_zeros()
}

fn solve(input: &str) -> u32 {
    input
        .trim()
        .lines()
        .map(|line| {
            let line = line.trim();
            let (a, b) = line.split_at(line.len() / 2);
            priority(items(a) & items(b))
        })
        .sum()
}

fn bonus(input: &str) -> u32 {
    input
        .trim()
        .lines()
        .map(|line| items(line.trim()))
        .tuples()
        .map(|(a, b, c)| priority(a & b & c))
        .sum()
}

#[test]
fn test() {
    let example_input = "
vJrwpWtwJgWrhcsFMMfFFhFp
jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
PmmdzqPrVvPwwTWBwg
wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
ttgJtRGJQctTZtZT
CrZsJsPPZsGzwwsLwLmpwMDw
";

    assert_eq!(solve(example_input), 157);
    assert_eq!(bonus(example_input), 70);
}
