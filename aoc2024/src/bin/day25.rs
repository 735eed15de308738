use aoc_harness::time;
use itertools::Itertools;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 25)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    Ok(())
}

/// Locks and keys as bitmasks of their filled cells; a key fits a lock
/// when no cell is filled in both.
fn parse(input: &str) -> (Vec<u64>, Vec<u64>) {
    input
        .trim()
        .split("\n\n")
        .map(|block| {
            let mask = block
                .split_whitespace()
                .flat_map(str::bytes)
                .fold(0u64, |mask, c| mask << 1 | (c == b'#') as u64);
            (block.trim_start().starts_with('#'), mask)
        })
        .partition_map(|(is_lock, mask)| {
            if is_lock {
                itertools::Either::Left(mask)
            } else {
                itertools::Either::Right(mask)
            }
        })
}

fn solve(input: &str) -> usize {
    let (locks, keys) = parse(input);

    locks
        .iter()
        .cartesian_product(&keys)
        .filter(|&(lock, key)| lock & key == 0)
        .count()
}

#[test]
fn test() {
    let example_input = "
#####
.####
.####
.####
.#.#.
.#...
.....

#####
##.##
.#.##
...##
...#.
...#.
.....

.....
#....
#....
#...#
#.#.#
#.###
#####

.....
.....
#.#..
###..
###.#
###.#
#####

.....
.....
.....
#....
#.#..
#.#.#
#####
";

    assert_eq!(solve(example_input), 3);
}
