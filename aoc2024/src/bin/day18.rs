use std::collections::VecDeque;

use aoc_harness::time;
use fxhash::FxHashSet;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 18)?;

    time(|| {
        println!("First part: {}", solve(&input, 71, 1024));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input, 71));
    });

    Ok(())
}

type Pos = (i32, i32);

fn parse(input: &str) -> Vec<Pos> {
    input
        .trim()
        .lines()
        .map(|line| {
            let (x, y) = line.trim().split_once(',').unwrap();
            (x.parse().unwrap(), y.parse().unwrap())
        })
        .collect()
}

/// Steps from the top left to the bottom right corner of a `size` square.
fn shortest(corrupted: &FxHashSet<Pos>, size: i32) -> Option<usize> {
    let mut seen = FxHashSet::from_iter([(0, 0)]);
    let mut queue = VecDeque::from([((0, 0), 0)]);

    while let Some(((x, y), steps)) = queue.pop_front() {
        if (x, y) == (size - 1, size - 1) {
            return Some(steps);
        }

        for next in [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)] {
            let inside = next.0 >= 0 && next.1 >= 0 && next.0 < size && next.1 < size;
            if inside && !corrupted.contains(&next) && seen.insert(next) {
                queue.push_back((next, steps + 1));
            }
        }
    }

    None
}

fn solve(input: &str, size: i32, count: usize) -> usize {
    let bytes = parse(input);
    shortest(&bytes[..count].iter().copied().collect(), size).unwrap()
}

fn bonus(input: &str, size: i32) -> String {
    let bytes = parse(input);

    // smallest number of fallen bytes that cuts off the exit
    let (mut lo, mut hi) = (0, bytes.len());
    while lo < hi {
        let mid = (lo + hi) / 2;
        if shortest(&bytes[..=mid].iter().copied().collect(), size).is_some() {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    let (x, y) = bytes[lo];
    format!("{x},{y}")
}

#[test]
fn test() {
    let example_input = "
5,4
4,2
4,5
3,0
2,1
6,3
2,4
1,5
0,6
3,3
2,6
5,1
1,2
5,5
2,5
6,5
1,4
0,4
6,4
1,1
6,1
1,0
0,5
1,6
2,0
";

    assert_eq!(solve(example_input, 7, 12), 22);
    assert_eq!(bonus(example_input, 7), "6,1");
}
