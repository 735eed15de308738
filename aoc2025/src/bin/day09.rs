use aoc_harness::time;
use fxhash::FxHashMap;
use itertools::Itertools;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 9)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

type Pos = (u64, u64);

fn parse(input: &str) -> Vec<Pos> {
    input
        .trim()
        .lines()
        .map(|line| {
            let (x, y) = line.trim().split_once(',').unwrap();
            (x.parse().unwrap(), y.parse().unwrap())
        })
        .collect()
}

fn area(a: Pos, b: Pos) -> u64 {
    (a.0.abs_diff(b.0) + 1) * (a.1.abs_diff(b.1) + 1)
}

fn solve(input: &str) -> u64 {
    parse(input)
        .into_iter()
        .tuple_combinations()
        .map(|(a, b)| area(a, b))
        .max()
        .unwrap()
}

/// Maps each distinct coordinate to an odd index, leaving an even index
/// for the gap on either side.
fn compress(values: impl Iterator<Item = u64>) -> FxHashMap<u64, usize> {
    values
        .sorted_unstable()
        .dedup()
        .enumerate()
        .map(|(i, v)| (v, 2 * i + 1))
        .collect()
}

/// The red tiles on a compressed grid, with the loop between them drawn
/// in. Counts the cells outside the loop, prefix-summed so any rectangle
/// can be checked at once.
struct Floor {
    cx: FxHashMap<u64, usize>,
    cy: FxHashMap<u64, usize>,
    outside: Vec<Vec<usize>>,
}

impl Floor {
    fn new(red: &[Pos]) -> Self {
        let cx = compress(red.iter().map(|p| p.0));
        let cy = compress(red.iter().map(|p| p.1));
        let (w, h) = (2 * cx.len() + 1, 2 * cy.len() + 1);

        let mut edge = vec![vec![false; w]; h];
        for (&a, &b) in red.iter().circular_tuple_windows() {
            let (x1, x2) = (cx[&a.0].min(cx[&b.0]), cx[&a.0].max(cx[&b.0]));
            let (y1, y2) = (cy[&a.1].min(cy[&b.1]), cy[&a.1].max(cy[&b.1]));
            for row in &mut edge[y1..=y2] {
                row[x1..=x2].fill(true);
            }
        }

        let mut out = vec![vec![false; w]; h];
        out[0][0] = true;
        let mut todo = vec![(0usize, 0usize)];
        while let Some((x, y)) = todo.pop() {
            let neighbours = [
                (x + 1, y),
                (x.wrapping_sub(1), y),
                (x, y + 1),
                (x, y.wrapping_sub(1)),
            ];
            for (nx, ny) in neighbours {
                if nx < w && ny < h && !out[ny][nx] && !edge[ny][nx] {
                    out[ny][nx] = true;
                    todo.push((nx, ny));
                }
            }
        }

        let mut outside = vec![vec![0; w + 1]; h + 1];
        for y in 0..h {
            for x in 0..w {
                outside[y + 1][x + 1] =
                    outside[y][x + 1] + outside[y + 1][x] - outside[y][x] + out[y][x] as usize;
            }
        }

        Floor { cx, cy, outside }
    }

    fn covers(&self, a: Pos, b: Pos) -> bool {
        let (x1, x2) = (self.cx[&a.0].min(self.cx[&b.0]), self.cx[&a.0].max(self.cx[&b.0]));
        let (y1, y2) = (self.cy[&a.1].min(self.cy[&b.1]), self.cy[&a.1].max(self.cy[&b.1]));

        let o = &self.outside;
        o[y2 + 1][x2 + 1] + o[y1][x1] == o[y1][x2 + 1] + o[y2 + 1][x1]
    }
}

fn bonus(input: &str) -> u64 {
    let red = parse(input);
    let floor = Floor::new(&red);

    red.iter()
        .tuple_combinations()
        .filter(|&(&a, &b)| floor.covers(a, b))
        .map(|(&a, &b)| area(a, b))
        .max()
        .unwrap()
}

#[test]
fn test() {
    let example_input = "
7,1
11,1
11,7
9,7
9,5
2,5
2,3
7,3
";

    assert_eq!(solve(example_input), 50);
    assert_eq!(bonus(example_input), 24);
}
