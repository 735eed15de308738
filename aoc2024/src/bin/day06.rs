use aoc_harness::time;
use fxhash::FxHashSet;
use rayon::prelude::*;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 6)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

type Pos = (i32, i32);

struct Lab {
    w: i32,
    h: i32,
    obstacles: FxHashSet<Pos>,
    guard: Pos,
}

impl Lab {
    fn parse(input: &str) -> Self {
        let grid: Vec<&[u8]> = input.trim().lines().map(|l| l.trim().as_bytes()).collect();
        let mut obstacles = FxHashSet::default();
        let mut guard = (0, 0);

        for (y, row) in grid.iter().enumerate() {
            for (x, &c) in row.iter().enumerate() {
                match c {
                    b'#' => {
                        obstacles.insert((x as i32, y as i32));
                    }
                    b'^' => guard = (x as i32, y as i32),
                    _ => {}
                }
            }
        }

        Lab {
            w: grid[0].len() as i32,
            h: grid.len() as i32,
            obstacles,
            guard,
        }
    }

    fn contains(&self, (x, y): Pos) -> bool {
        x >= 0 && y >= 0 && x < self.w && y < self.h
    }

    /// Walks the guard until she leaves the lab, returning the visited
    /// positions, or `None` if she ends up walking in circles.
    fn patrol(&self, extra: Option<Pos>) -> Option<FxHashSet<Pos>> {
        let mut seen = FxHashSet::default();
        let (mut pos, mut dir) = (self.guard, (0, -1));

        while self.contains(pos) {
            if !seen.insert((pos, dir)) {
                return None;
            }

            let next = (pos.0 + dir.0, pos.1 + dir.1);
            if self.obstacles.contains(&next) || Some(next) == extra {
                dir = (-dir.1, dir.0);
            } else {
                pos = next;
            }
        }

        Some(seen.into_iter().map(|(pos, _)| pos).collect())
    }
}

fn solve(input: &str) -> usize {
    Lab::parse(input).patrol(None).unwrap().len()
}

fn bonus(input: &str) -> usize {
    let lab = Lab::parse(input);
    let path = lab.patrol(None).unwrap();

    path.par_iter()
        .filter(|&&pos| pos != lab.guard && lab.patrol(Some(pos)).is_none())
        .count()
}

#[test]
fn test() {
    let example_input = "
....#.....
.........#
..........
..#.......
.......#..
..........
.#..^.....
........#.
#.........
......#...
";

    assert_eq!(solve(example_input), 41);
    assert_eq!(bonus(example_input), 6);
}
