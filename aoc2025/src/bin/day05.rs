use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 5)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

type Range = (u64, u64);

fn parse(input: &str) -> (Vec<Range>, Vec<u64>) {
    let (ranges, ids) = input.trim().split_once("\n\n").unwrap();

    (
        ranges
            .lines()
            .map(|line| {
                let (lo, hi) = line.trim().split_once('-').unwrap();
                (lo.parse().unwrap(), hi.parse().unwrap())
            })
            .collect(),
        ids.lines().map(|l| l.trim().parse().unwrap()).collect(),
    )
}

/// Sorted, disjoint, inclusive ranges covering the same ids.
fn merge(mut ranges: Vec<Range>) -> Vec<Range> {
    ranges.sort_unstable();

    let mut merged: Vec<Range> = vec![];
    for (lo, hi) in ranges {
        match merged.last_mut() {
            Some(last) if lo <= last.1 + 1 => last.1 = last.1.max(hi),
            _ => merged.push((lo, hi)),
        }
    }
    merged
}

fn solve(input: &str) -> usize {
    let (ranges, ids) = parse(input);
    let ranges = merge(ranges);

    ids.iter()
        .filter(|&&id| ranges.iter().any(|&(lo, hi)| lo <= id && id <= hi))
        .count()
}

fn bonus(input: &str) -> u64 {
    let (ranges, _) = parse(input);

    merge(ranges).iter().map(|(lo, hi)| hi - lo + 1).sum()
}

#[test]
fn test() {
    let example_input = "
3-5
10-14
16-20
12-18

1
5
8
11
17
32
";

    assert_eq!(solve(example_input), 3);
    assert_eq!(bonus(example_input), 14);
}
