use std::iter::once;

use aoc_harness::time;
use rayon::prelude::*;

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

type Dir = usize;

const UP: Dir = 0;
const RIGHT: Dir = 1;
const DOWN: Dir = 2;
const LEFT: Dir = 3;

type Beam = ((usize, usize), Dir);

/// The contraption, surrounded by a border of `X` where beams leave.
struct Contraption {
    grid: Vec<Vec<char>>,
    h: usize,
    w: usize,
}

impl Contraption {
    fn new(input: &str) -> Self {
        let lines = input.trim().lines().map(str::trim).collect::<Vec<_>>();
        let w = lines[0].len() + 2;

        let grid = once(vec!['X'; w])
            .chain(lines.iter().map(|line| {
                once('X').chain(line.chars()).chain(once('X')).collect()
            }))
            .chain(once(vec!['X'; w]))
            .collect::<Vec<_>>();

        Contraption {
            h: grid.len(),
            w,
            grid,
        }
    }

    fn next(&self, ((x, y), dir): Beam) -> Vec<Beam> {
        let step = |dir: Dir| -> Beam {
            match dir {
                UP => ((x, y - 1), UP),
                RIGHT => ((x + 1, y), RIGHT),
                DOWN => ((x, y + 1), DOWN),
                _ => ((x - 1, y), LEFT),
            }
        };

        match (self.grid[y][x], dir) {
            ('X', _) => vec![],
            ('\\', UP) | ('/', DOWN) => vec![step(LEFT)],
            ('\\', DOWN) | ('/', UP) => vec![step(RIGHT)],
            ('\\', LEFT) | ('/', RIGHT) => vec![step(UP)],
            ('\\', RIGHT) | ('/', LEFT) => vec![step(DOWN)],
            ('|', RIGHT | LEFT) => vec![step(UP), step(DOWN)],
            ('-', UP | DOWN) => vec![step(LEFT), step(RIGHT)],
            _ => vec![step(dir)],
        }
    }

    fn energized(&self, start: Beam) -> usize {
        let mut seen = vec![[false; 4]; self.w * self.h];
        let mut todo = vec![start];

        while let Some(beam) = todo.pop() {
            let ((x, y), dir) = beam;
            let visited = &mut seen[y * self.w + x][dir];
            if *visited {
                continue;
            }
            *visited = true;
            todo.extend(self.next(beam));
        }

        (0..self.h)
            .flat_map(|y| (0..self.w).map(move |x| (x, y)))
            .filter(|&(x, y)| self.grid[y][x] != 'X' && seen[y * self.w + x].contains(&true))
            .count()
    }

    fn entries(&self) -> Vec<Beam> {
        let (h, w) = (self.h, self.w);

        (1..h - 1)
            .flat_map(|y| [((1, y), RIGHT), ((w - 2, y), LEFT)])
            .chain((1..w - 1).flat_map(|x| [((x, 1), DOWN), ((x, h - 2), UP)]))
            .collect()
    }
}

fn solve(input: &str) -> usize {
    Contraption::new(input).energized(((1, 1), RIGHT))
}

fn bonus(input: &str) -> usize {
    let contraption = Contraption::new(input);

    contraption
        .entries()
        .into_par_iter()
        .map(|beam| contraption.energized(beam))
        .max()
        .unwrap()
}

#[test]
fn test() {
    let example_input = r"
.|...\....
|.-.\.....
.....|-...
........|.
..........
.........\
..../.\\..
.-.-/..|..
.|....-|.\
..//.|....
";

    assert_eq!(solve(example_input), 46);
    assert_eq!(bonus(example_input), 51);
}
