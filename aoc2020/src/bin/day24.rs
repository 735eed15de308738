use aoc_harness::time;
use fxhash::{FxHashMap, FxHashSet};

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 24)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input, 100));
    });

    Ok(())
}

// axial coordinates (q, r)
type Hex = (i32, i32);

const NEIGHBOURS: [Hex; 6] = [(1, 0), (-1, 0), (0, 1), (-1, 1), (1, -1), (0, -1)];

fn walk(line: &str) -> Hex {
    let mut chars = line.trim().chars();
    let (mut q, mut r) = (0, 0);

    while let Some(c) = chars.next() {
        let (dq, dr) = match c {
            'e' => (1, 0),
            'w' => (-1, 0),
            's' => match chars.next() {
                Some('e') => (0, 1),
                Some('w') => (-1, 1),
                _ => unreachable!(),
            },
            'n' => match chars.next() {
                Some('e') => (1, -1),
                Some('w') => (0, -1),
                _ => unreachable!(),
            },
            _ => unreachable!(),
        };

        q += dq;
        r += dr;
    }

    (q, r)
}

fn flip(input: &str) -> FxHashSet<Hex> {
    let mut black = FxHashSet::default();

    for tile in input.trim().lines().map(walk) {
        if !black.remove(&tile) {
            black.insert(tile);
        }
    }

    black
}

fn day(black: &FxHashSet<Hex>) -> FxHashSet<Hex> {
    let mut counts: FxHashMap<Hex, usize> = FxHashMap::default();

    for &(q, r) in black {
        for (dq, dr) in NEIGHBOURS {
            *counts.entry((q + dq, r + dr)).or_default() += 1;
        }
    }

    counts
        .into_iter()
        .filter(|(tile, n)| *n == 2 || (*n == 1 && black.contains(tile)))
        .map(|(tile, _)| tile)
        .collect()
}

fn solve(input: &str) -> usize {
    flip(input).len()
}

fn bonus(input: &str, days: usize) -> usize {
    (0..days).fold(flip(input), |black, _| day(&black)).len()
}

#[test]
fn test() {
    assert_eq!(walk("esew"), (0, 1));
    assert_eq!(walk("nwwswee"), (0, 0));

    // two adjacent black tiles, the last two lines cancel out
    let example_input = "
esew
nwwswee
e
e
";

    assert_eq!(solve(example_input), 2);
    assert_eq!(bonus(example_input, 1), 4);
}
