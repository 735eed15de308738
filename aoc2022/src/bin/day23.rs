use aoc_harness::time;
use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 23)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

type Elf = (i32, i32);

fn parse(input: &str) -> FxHashSet<Elf> {
    input
        .trim()
        .lines()
        .enumerate()
        .flat_map(|(y, line)| {
            line.trim()
                .chars()
                .enumerate()
                .filter(|&(_, c)| c == '#')
                .map(move |(x, _)| (x as i32, y as i32))
        })
        .collect()
}

/// Each direction to consider, with the three cells that must be free.
const PROPOSALS: [((i32, i32), [(i32, i32); 3]); 4] = [
    ((0, -1), [(-1, -1), (0, -1), (1, -1)]),
    ((0, 1), [(-1, 1), (0, 1), (1, 1)]),
    ((-1, 0), [(-1, -1), (-1, 0), (-1, 1)]),
    ((1, 0), [(1, -1), (1, 0), (1, 1)]),
];

/// Runs one round; returns whether any elf moved.
fn round(elves: &mut FxHashSet<Elf>, round: usize) -> bool {
    let free = |(x, y): Elf, (dx, dy): (i32, i32)| !elves.contains(&(x + dx, y + dy));

    let mut proposed: FxHashMap<Elf, Vec<Elf>> = FxHashMap::default();
    for &elf in elves.iter() {
        let alone = (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&d| d != (0, 0))
            .all(|d| free(elf, d));
        if alone {
            continue;
        }

        let choice = (0..4)
            .map(|i| PROPOSALS[(round + i) % 4])
            .find(|(_, checks)| checks.iter().all(|&d| free(elf, d)));

        if let Some(((dx, dy), _)) = choice {
            proposed.entry((elf.0 + dx, elf.1 + dy)).or_default().push(elf);
        }
    }

    let mut moved = false;
    for (target, from) in proposed {
        if let [elf] = from[..] {
            elves.remove(&elf);
            elves.insert(target);
            moved = true;
        }
    }

    moved
}

fn solve(input: &str) -> i32 {
    let mut elves = parse(input);
    for r in 0..10 {
        round(&mut elves, r);
    }

    let (min_x, max_x) = elves.iter().map(|e| e.0).minmax().into_option().unwrap();
    let (min_y, max_y) = elves.iter().map(|e| e.1).minmax().into_option().unwrap();

    (max_x - min_x + 1) * (max_y - min_y + 1) - elves.len() as i32
}

fn bonus(input: &str) -> usize {
    let mut elves = parse(input);
    (0..).find(|&r| !round(&mut elves, r)).unwrap() + 1
}

#[test]
fn test() {
    let example_input = "
....#..
..###.#
#...#.#
.#...##
#.###..
##.#.##
.#..#..
";

    assert_eq!(solve(example_input), 110);
    assert_eq!(bonus(example_input), 20);
}
