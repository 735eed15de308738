use std::collections::BinaryHeap;

use aoc_harness::time;
use fxhash::FxHashSet;

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

type Grid = Vec<Vec<u32>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Axis {
    Horizontal,
    Vertical,
}

/// A crucible that just stopped at `head` after moving along `axis`; it has
/// to turn before moving again.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Path {
    head: (usize, usize),
    axis: Axis,
    heat_loss: u32,
}

impl PartialOrd for Path {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Path {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.heat_loss.cmp(&other.heat_loss).reverse()
    }
}

impl Path {
    /// Every way to turn and then move between `min` and `max` blocks.
    fn next(&self, grid: &Grid, min: usize, max: usize) -> Vec<Path> {
        let h = grid.len() as isize;
        let w = grid[0].len() as isize;

        let (dirs, axis) = match self.axis {
            Axis::Horizontal => ([(0, -1), (0, 1)], Axis::Vertical),
            Axis::Vertical => ([(-1, 0), (1, 0)], Axis::Horizontal),
        };

        let mut next = vec![];
        for (dx, dy) in dirs {
            let (mut x, mut y) = (self.head.0 as isize, self.head.1 as isize);
            let mut heat_loss = self.heat_loss;

            for steps in 1..=max {
                x += dx;
                y += dy;
                if x < 0 || y < 0 || x >= w || y >= h {
                    break;
                }

                heat_loss += grid[y as usize][x as usize];
                if steps >= min {
                    next.push(Path {
                        head: (x as usize, y as usize),
                        axis,
                        heat_loss,
                    });
                }
            }
        }

        next
    }
}

fn least_heat_loss(input: &str, min: usize, max: usize) -> u32 {
    let grid: Grid = input
        .trim()
        .lines()
        .map(|line| line.trim().chars().map(|c| c.to_digit(10).unwrap()).collect())
        .collect();

    let target = (grid[0].len() - 1, grid.len() - 1);
    let mut seen = FxHashSet::default();
    let mut paths = BinaryHeap::new();

    for axis in [Axis::Horizontal, Axis::Vertical] {
        paths.push(Path {
            head: (0, 0),
            axis,
            heat_loss: 0,
        });
    }

    while let Some(at) = paths.pop() {
        if at.head == target {
            return at.heat_loss;
        }

        if !seen.insert((at.head, at.axis)) {
            continue;
        }

        paths.extend(at.next(&grid, min, max));
    }

    unreachable!()
}

fn solve(input: &str) -> u32 {
    least_heat_loss(input, 1, 3)
}

fn bonus(input: &str) -> u32 {
    least_heat_loss(input, 4, 10)
}

#[test]
fn test() {
    let example_input = "
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533
";

    assert_eq!(solve(example_input), 102);
    assert_eq!(bonus(example_input), 94);

    let example_input = "
111111111111
999999999991
999999999991
999999999991
999999999991
";

    assert_eq!(bonus(example_input), 71);
}
