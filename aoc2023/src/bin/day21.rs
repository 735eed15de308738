use std::collections::VecDeque;

use aoc_harness::time;
use fxhash::FxHashSet;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 21)?;

    time(|| {
        println!("First part: {}", solve(&input, 64));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input, 26501365));
    });

    Ok(())
}

struct Garden {
    rocks: Vec<Vec<bool>>,
    start: (i64, i64),
    size: i64,
}

fn parse(input: &str) -> Garden {
    let lines = input.trim().lines().map(str::trim).collect::<Vec<_>>();

    let start = lines
        .iter()
        .enumerate()
        .find_map(|(y, line)| line.find('S').map(|x| (x as i64, y as i64)))
        .unwrap();

    Garden {
        rocks: lines
            .iter()
            .map(|line| line.chars().map(|c| c == '#').collect())
            .collect(),
        start,
        size: lines.len() as i64,
    }
}

impl Garden {
    fn is_rock(&self, (x, y): (i64, i64), tiled: bool) -> bool {
        if tiled {
            return self.rocks[y.rem_euclid(self.size) as usize][x.rem_euclid(self.size) as usize];
        }

        if x < 0 || y < 0 || x >= self.size || y >= self.size {
            return true;
        }
        self.rocks[y as usize][x as usize]
    }

    /// Plots where the elf can stand after exactly `steps` steps: those
    /// reached in at most that many steps, with the same parity.
    fn reachable(&self, steps: usize, tiled: bool) -> usize {
        let mut seen = FxHashSet::from_iter([self.start]);
        let mut todo = VecDeque::from([(self.start, 0)]);
        let mut count = 0;

        while let Some(((x, y), dist)) = todo.pop_front() {
            if dist % 2 == steps % 2 {
                count += 1;
            }

            if dist == steps {
                continue;
            }

            for p in [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)] {
                if !self.is_rock(p, tiled) && seen.insert(p) {
                    todo.push_back((p, dist + 1));
                }
            }
        }

        count
    }
}

fn solve(input: &str, steps: usize) -> usize {
    parse(input).reachable(steps, false)
}

/// The value at `n` of the quadratic through `(0, f[0])`, `(1, f[1])`, `(2, f[2])`.
fn extrapolate(f: [usize; 3], n: usize) -> usize {
    let first = f[1] - f[0];
    let second = f[2] + f[0] - 2 * f[1];
    f[0] + n * first + n * n.saturating_sub(1) / 2 * second
}

/// The start row and column are free of rocks, and the garden is square, so
/// the reach grows by whole tiles every `size` steps: the counts at
/// `rest`, `rest + size`, `rest + 2 * size` fix a quadratic in the number of
/// tiles crossed.
fn bonus(input: &str, steps: usize) -> usize {
    let garden = parse(input);
    let size = garden.size as usize;
    let rest = steps % size;

    let f = [0, 1, 2].map(|i| garden.reachable(rest + i * size, true));
    extrapolate(f, steps / size)
}

#[test]
fn test() {
    let example_input = "
...........
.....###.#.
.###.##..#.
..#.#...#..
....#.#....
.##..S####.
.##..#...#.
.......##..
.##.#.####.
.##..##.##.
...........
";

    assert_eq!(solve(example_input, 6), 16);

    let garden = parse(example_input);
    assert_eq!(garden.reachable(10, true), 50);
    assert_eq!(garden.reachable(50, true), 1594);
    assert_eq!(garden.reachable(100, true), 6536);

    // 3n² + 2n + 5
    assert_eq!(extrapolate([5, 10, 21], 10), 325);

    // the sample's start row is blocked, so check the tile sampling on a
    // garden with open middle lines
    let open_lines = "
.....
.#...
..S..
...#.
.....
";

    let garden = parse(open_lines);
    assert_eq!(bonus(open_lines, 17), 292);
    assert_eq!(bonus(open_lines, 17), garden.reachable(17, true));
    assert_eq!(bonus(open_lines, 23), garden.reachable(23, true));
}
