use aoc_harness::time;
use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 17)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

type Cube = [i32; 4];

fn parse(input: &str) -> FxHashSet<Cube> {
    input
        .trim()
        .lines()
        .enumerate()
        .flat_map(|(y, line)| {
            line.trim()
                .chars()
                .enumerate()
                .filter(|&(_, c)| c == '#')
                .map(move |(x, _)| [x as i32, y as i32, 0, 0])
        })
        .collect()
}

/// Offsets to every neighbour, only moving along the first `dims` axes.
fn offsets(dims: usize) -> Vec<Cube> {
    (0..4)
        .map(|axis| if axis < dims { -1..=1 } else { 0..=0 })
        .multi_cartesian_product()
        .filter(|d| d.iter().any(|&c| c != 0))
        .map(|d| [d[0], d[1], d[2], d[3]])
        .collect()
}

fn cycle(active: &FxHashSet<Cube>, offsets: &[Cube]) -> FxHashSet<Cube> {
    let mut counts: FxHashMap<Cube, usize> = FxHashMap::default();

    for cube in active {
        for d in offsets {
            let n = [cube[0] + d[0], cube[1] + d[1], cube[2] + d[2], cube[3] + d[3]];
            *counts.entry(n).or_default() += 1;
        }
    }

    counts
        .into_iter()
        .filter(|(cube, n)| *n == 3 || (*n == 2 && active.contains(cube)))
        .map(|(cube, _)| cube)
        .collect()
}

fn boot(input: &str, dims: usize) -> usize {
    let offsets = offsets(dims);
    let mut active = parse(input);

    for _ in 0..6 {
        active = cycle(&active, &offsets);
    }

    active.len()
}

fn solve(input: &str) -> usize {
    boot(input, 3)
}

fn bonus(input: &str) -> usize {
    boot(input, 4)
}

#[test]
fn test() {
    assert_eq!(offsets(3).len(), 26);
    assert_eq!(offsets(4).len(), 80);

    let example_input = "
.#.
..#
###
";

    assert_eq!(solve(example_input), 112);
    assert_eq!(bonus(example_input), 848);
}
