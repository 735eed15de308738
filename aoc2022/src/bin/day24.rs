use aoc_harness::time;
use fxhash::FxHashSet;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 24)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

struct Valley {
    width: i32,
    height: i32,
    blizzards: Vec<((i32, i32), (i32, i32))>,
}

/// Positions are inside the walls: `(0, 0)` is the top-left open cell, the
/// entrance is `(0, -1)` and the exit `(width - 1, height)`.
fn parse(input: &str) -> Valley {
    let lines = input.trim().lines().map(str::trim).collect::<Vec<_>>();
    let height = lines.len() as i32 - 2;
    let width = lines[0].len() as i32 - 2;

    let mut blizzards = vec![];
    for (y, line) in lines[1..lines.len() - 1].iter().enumerate() {
        for (x, c) in line[1..line.len() - 1].chars().enumerate() {
            let dir = match c {
                '>' => (1, 0),
                '<' => (-1, 0),
                'v' => (0, 1),
                '^' => (0, -1),
                _ => continue,
            };
            blizzards.push(((x as i32, y as i32), dir));
        }
    }

    Valley {
        width,
        height,
        blizzards,
    }
}

impl Valley {
    fn blocked_at(&self, minute: i32) -> FxHashSet<(i32, i32)> {
        self.blizzards
            .iter()
            .map(|&((x, y), (dx, dy))| {
                (
                    (x + dx * minute).rem_euclid(self.width),
                    (y + dy * minute).rem_euclid(self.height),
                )
            })
            .collect()
    }

    /// Breadth-first over every reachable position per minute; returns the
    /// minute of arrival.
    fn cross(&self, from: (i32, i32), to: (i32, i32), start: i32) -> i32 {
        let mut positions = FxHashSet::default();
        positions.insert(from);

        for minute in start + 1.. {
            let blocked = self.blocked_at(minute);
            let mut next = FxHashSet::default();

            for &(x, y) in &positions {
                for (dx, dy) in [(0, 0), (1, 0), (-1, 0), (0, 1), (0, -1)] {
                    let p = (x + dx, y + dy);
                    if p == to {
                        return minute;
                    }

                    let inside = p.0 >= 0 && p.0 < self.width && p.1 >= 0 && p.1 < self.height;
                    if (inside && !blocked.contains(&p)) || p == from {
                        next.insert(p);
                    }
                }
            }

            positions = next;
        }

        unreachable!()
    }
}

fn solve(input: &str) -> i32 {
    let valley = parse(input);
    valley.cross((0, -1), (valley.width - 1, valley.height), 0)
}

fn bonus(input: &str) -> i32 {
    let valley = parse(input);
    let (entrance, exit) = ((0, -1), (valley.width - 1, valley.height));

    let there = valley.cross(entrance, exit, 0);
    let back = valley.cross(exit, entrance, there);
    valley.cross(entrance, exit, back)
}

#[test]
fn test() {
    let example_input = "
#.######
#>>.<^<#
#.<..<<#
#>v.><>#
#<^v^^>#
######.#
";

    assert_eq!(solve(example_input), 18);
    assert_eq!(bonus(example_input), 54);
}
