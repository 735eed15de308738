use aoc_harness::time;
use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 8)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

type Pos = (i32, i32);

struct City {
    w: i32,
    h: i32,
    antennas: FxHashMap<u8, Vec<Pos>>,
}

impl City {
    fn parse(input: &str) -> Self {
        let grid: Vec<&[u8]> = input.trim().lines().map(|l| l.trim().as_bytes()).collect();
        let mut antennas: FxHashMap<u8, Vec<Pos>> = FxHashMap::default();

        for (y, row) in grid.iter().enumerate() {
            for (x, &c) in row.iter().enumerate() {
                if c != b'.' {
                    antennas.entry(c).or_default().push((x as i32, y as i32));
                }
            }
        }

        City {
            w: grid[0].len() as i32,
            h: grid.len() as i32,
            antennas,
        }
    }

    fn contains(&self, (x, y): Pos) -> bool {
        x >= 0 && y >= 0 && x < self.w && y < self.h
    }

    fn antinodes(&self, harmonics: bool) -> usize {
        let mut found = FxHashSet::default();

        for positions in self.antennas.values() {
            for (&a, &b) in positions.iter().tuple_combinations() {
                for (from, (dx, dy)) in [(a, (a.0 - b.0, a.1 - b.1)), (b, (b.0 - a.0, b.1 - a.1))] {
                    if harmonics {
                        let mut at = from;
                        while self.contains(at) {
                            found.insert(at);
                            at = (at.0 + dx, at.1 + dy);
                        }
                    } else {
                        let at = (from.0 + dx, from.1 + dy);
                        if self.contains(at) {
                            found.insert(at);
                        }
                    }
                }
            }
        }

        found.len()
    }
}

fn solve(input: &str) -> usize {
    City::parse(input).antinodes(false)
}

fn bonus(input: &str) -> usize {
    City::parse(input).antinodes(true)
}

#[test]
fn test() {
    let example_input = "
............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............
";

    assert_eq!(solve(example_input), 14);
    assert_eq!(bonus(example_input), 34);
}
