use aoc_harness::time;
use fxhash::FxHashMap;

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

type Pos = (usize, usize);

struct Trails {
    grid: Vec<Vec<u8>>,
    start: Pos,
    end: Pos,
}

impl Trails {
    fn parse(input: &str) -> Self {
        let grid: Vec<Vec<u8>> = input
            .trim()
            .lines()
            .map(|line| line.trim().bytes().collect())
            .collect();

        let h = grid.len();
        let w = grid[0].len();

        Trails {
            grid,
            start: (1, 0),
            end: (w - 2, h - 1),
        }
    }

    fn neighbours(&self, (x, y): Pos, slippery: bool) -> Vec<Pos> {
        let here = self.grid[y][x];
        let mut next = vec![];

        for (dx, dy, slope) in [(1, 0, b'>'), (0, 1, b'v'), (-1, 0, b'<'), (0, -1, b'^')] {
            if slippery && here != b'.' && here != slope {
                continue;
            }

            let (nx, ny) = (x as i32 + dx, y as i32 + dy);
            if nx < 0 || ny < 0 {
                continue;
            }

            let (nx, ny) = (nx as usize, ny as usize);
            match self.grid.get(ny).and_then(|row| row.get(nx)) {
                None | Some(b'#') => {}
                Some(&c) if slippery && c != b'.' && c != slope => {}
                Some(_) => next.push((nx, ny)),
            }
        }

        next
    }

    fn is_junction(&self, pos: Pos) -> bool {
        pos == self.start || pos == self.end || self.neighbours(pos, false).len() > 2
    }

    /// Collapses the corridors into a weighted graph between junctions.
    fn graph(&self, slippery: bool) -> (Vec<Vec<(usize, usize)>>, usize, usize) {
        let mut index = FxHashMap::default();
        for y in 0..self.grid.len() {
            for x in 0..self.grid[0].len() {
                if self.grid[y][x] != b'#' && self.is_junction((x, y)) {
                    let n = index.len();
                    index.insert((x, y), n);
                }
            }
        }

        let mut edges = vec![vec![]; index.len()];
        for (&from, &i) in &index {
            for first in self.neighbours(from, slippery) {
                let (mut prev, mut at, mut len) = (from, first, 1);

                loop {
                    if let Some(&j) = index.get(&at) {
                        edges[i].push((j, len));
                        break;
                    }

                    let Some(next) = self
                        .neighbours(at, slippery)
                        .into_iter()
                        .find(|&n| n != prev)
                    else {
                        break;
                    };

                    (prev, at, len) = (at, next, len + 1);
                }
            }
        }

        (edges, index[&self.start], index[&self.end])
    }

    fn longest_hike(&self, slippery: bool) -> usize {
        let (edges, start, end) = self.graph(slippery);
        longest(&edges, start, end, 1 << start).unwrap_or(0)
    }
}

fn longest(edges: &[Vec<(usize, usize)>], at: usize, end: usize, seen: u64) -> Option<usize> {
    if at == end {
        return Some(0);
    }

    edges[at]
        .iter()
        .filter(|&&(next, _)| seen & (1 << next) == 0)
        .filter_map(|&(next, len)| longest(edges, next, end, seen | (1 << next)).map(|n| n + len))
        .max()
}

fn solve(input: &str) -> usize {
    Trails::parse(input).longest_hike(true)
}

fn bonus(input: &str) -> usize {
    Trails::parse(input).longest_hike(false)
}

#[test]
fn test() {
    let example_input = "
#.#####################
#.......#########...###
#######.#########.#.###
###.....#.>.>.###.#.###
###v#####.#v#.###.#.###
###.>...#.#.#.....#...#
###v###.#.#.#########.#
###...#.#.#.......#...#
#####.#.#.#######.#.###
#.....#.#.#.......#...#
#.#####.#.#.#########v#
#.#...#...#...###...>.#
#.#.#v#######v###.###v#
#...#.>.#...>.>.#.###.#
#####v#.#.###v#.#.###.#
#.....#...#...#.#.#...#
#.#########.###.#.#.###
#...###...#...#...#.###
###.###.#.###v#####v###
#...#...#.#.>.>.#.>.###
#.###.###.#.###.#.#v###
#.....###...###...#...#
#####################.#
    ";

    assert_eq!(solve(example_input), 94);
    assert_eq!(bonus(example_input), 154);
}
