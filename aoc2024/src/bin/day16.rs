use std::{cmp::Reverse, collections::BinaryHeap};

use aoc_harness::time;
use fxhash::{FxHashMap, FxHashSet};

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 16)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

type Pos = (i32, i32);
type State = (Pos, usize);

const DIRS: [Pos; 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

struct Maze {
    walls: FxHashSet<Pos>,
    start: Pos,
    end: Pos,
}

impl Maze {
    fn parse(input: &str) -> Self {
        let mut walls = FxHashSet::default();
        let (mut start, mut end) = ((0, 0), (0, 0));

        for (y, line) in input.trim().lines().enumerate() {
            for (x, c) in line.trim().chars().enumerate() {
                let p = (x as i32, y as i32);
                match c {
                    '#' => {
                        walls.insert(p);
                    }
                    'S' => start = p,
                    'E' => end = p,
                    _ => {}
                }
            }
        }

        Maze { walls, start, end }
    }

    /// Dijkstra over (tile, facing). Going `backwards` walks moves in reverse.
    fn scores(&self, from: &[State], backwards: bool) -> FxHashMap<State, usize> {
        let mut best = FxHashMap::default();
        let mut queue = BinaryHeap::from_iter(from.iter().map(|&s| Reverse((0, s))));

        while let Some(Reverse((score, (pos, dir)))) = queue.pop() {
            if best.contains_key(&(pos, dir)) {
                continue;
            }
            best.insert((pos, dir), score);

            let (dx, dy) = DIRS[dir];
            let ahead = if backwards {
                (pos.0 - dx, pos.1 - dy)
            } else {
                (pos.0 + dx, pos.1 + dy)
            };

            if !self.walls.contains(&ahead) {
                queue.push(Reverse((score + 1, (ahead, dir))));
            }
            queue.push(Reverse((score + 1000, (pos, (dir + 1) % 4))));
            queue.push(Reverse((score + 1000, (pos, (dir + 3) % 4))));
        }

        best
    }

    fn lowest(&self, scores: &FxHashMap<State, usize>) -> usize {
        (0..4)
            .filter_map(|d| scores.get(&(self.end, d)))
            .copied()
            .min()
            .unwrap()
    }
}

fn solve(input: &str) -> usize {
    let maze = Maze::parse(input);
    maze.lowest(&maze.scores(&[(maze.start, 0)], false))
}

fn bonus(input: &str) -> usize {
    let maze = Maze::parse(input);
    let forward = maze.scores(&[(maze.start, 0)], false);
    let lowest = maze.lowest(&forward);

    let ends = (0..4).map(|d| (maze.end, d)).collect::<Vec<_>>();
    let backward = maze.scores(&ends, true);

    forward
        .iter()
        .filter(|(state, score)| backward.get(*state).map(|b| *score + b) == Some(lowest))
        .map(|((pos, _), _)| pos)
        .collect::<FxHashSet<_>>()
        .len()
}

#[test]
fn test() {
    let first = "
###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############
";

    let second = "
#################
#...#...#...#..E#
#.#.#.#.#.#.#.#.#
#.#.#.#...#...#.#
#.#.#.#.###.#.#.#
#...#.#.#.....#.#
#.#.#.#.#.#####.#
#.#...#.#.#.....#
#.#.#####.#.###.#
#.#.#.......#...#
#.#.###.#####.###
#.#.#...#.....#.#
#.#.#.#####.###.#
#.#.#.........#.#
#.#.#.#########.#
#S#.............#
#################
";

    assert_eq!(solve(first), 7036);
    assert_eq!(bonus(first), 45);
    assert_eq!(solve(second), 11048);
    assert_eq!(bonus(second), 64);
}
