use std::collections::VecDeque;

use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 22)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

/// Facings in the order the password counts them: right, down, left, up.
const DIRS: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

enum Instr {
    Walk(usize),
    Turn(char),
}

struct Board {
    grid: Vec<Vec<u8>>,
    path: Vec<Instr>,
}

fn parse(input: &str) -> Board {
    let (map, path) = input.trim_matches('\n').trim_end().split_once("\n\n").unwrap();

    let width = map.lines().map(str::len).max().unwrap();
    let grid = map
        .lines()
        .map(|line| {
            let mut row = line.as_bytes().to_vec();
            row.resize(width, b' ');
            row
        })
        .collect();

    let mut instructions = vec![];
    let mut n = 0;
    for c in path.trim().chars() {
        match c.to_digit(10) {
            Some(d) => n = n * 10 + d as usize,
            None => {
                instructions.push(Instr::Walk(n));
                instructions.push(Instr::Turn(c));
                n = 0;
            }
        }
    }
    instructions.push(Instr::Walk(n));

    Board {
        grid,
        path: instructions,
    }
}

impl Board {
    fn tile(&self, x: isize, y: isize) -> u8 {
        if x < 0 || y < 0 {
            return b' ';
        }
        self.grid
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(b' ')
    }

    /// Follows the path; `wrap` says where a step off the map lands.
    fn walk<F>(&self, wrap: F) -> usize
    where
        F: Fn(usize, usize, usize) -> (usize, usize, usize),
    {
        let mut y = 0;
        let mut x = self.grid[0].iter().position(|&c| c == b'.').unwrap();
        let mut dir = 0;

        for instr in &self.path {
            match instr {
                Instr::Turn('R') => dir = (dir + 1) % 4,
                Instr::Turn(_) => dir = (dir + 3) % 4,
                Instr::Walk(n) => {
                    for _ in 0..*n {
                        let (dx, dy) = DIRS[dir];
                        let (nx, ny) = (x as isize + dx, y as isize + dy);

                        let next = match self.tile(nx, ny) {
                            b' ' => wrap(x, y, dir),
                            _ => (nx as usize, ny as usize, dir),
                        };

                        if self.grid[next.1][next.0] == b'#' {
                            break;
                        }
                        (x, y, dir) = next;
                    }
                }
            }
        }

        1000 * (y + 1) + 4 * (x + 1) + dir
    }
}

fn solve(input: &str) -> usize {
    let board = parse(input);
    let h = board.grid.len() as isize;
    let w = board.grid[0].len() as isize;

    board.walk(|x, y, dir| {
        let (dx, dy) = DIRS[dir];
        let (mut x, mut y) = (x as isize, y as isize);
        loop {
            x = (x + dx).rem_euclid(w);
            y = (y + dy).rem_euclid(h);
            if board.tile(x, y) != b' ' {
                return (x as usize, y as usize, dir);
            }
        }
    })
}

type V3 = [i32; 3];

fn neg(v: V3) -> V3 {
    v.map(|c| -c)
}

fn dot(a: V3, b: V3) -> i32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// A face of the folded cube: its corner on the net, and which way its
/// outward normal, its rightward and its downward directions point in space.
#[derive(Debug, Clone, Copy)]
struct Face {
    x0: usize,
    y0: usize,
    n: V3,
    r: V3,
    d: V3,
}

/// Folds the net by walking it from the first face, rolling the frame over
/// each edge crossed.
fn fold(grid: &[Vec<u8>], size: usize) -> Vec<Face> {
    let (h, w) = (grid.len() / size, grid[0].len() / size);
    let on_net = |fx: usize, fy: usize| fx < w && fy < h && grid[fy * size][fx * size] != b' ';

    let first = (0..w).find(|&fx| on_net(fx, 0)).unwrap();
    let mut faces = vec![Face {
        x0: first * size,
        y0: 0,
        n: [0, 0, 1],
        r: [1, 0, 0],
        d: [0, 1, 0],
    }];
    let mut queue = VecDeque::from([faces[0]]);

    while let Some(f) = queue.pop_front() {
        let (fx, fy) = (f.x0 / size, f.y0 / size);
        let neighbours = [
            (fx + 1, fy, f.r, neg(f.n), f.d),
            (fx.wrapping_sub(1), fy, neg(f.r), f.n, f.d),
            (fx, fy + 1, f.d, f.r, neg(f.n)),
            (fx, fy.wrapping_sub(1), neg(f.d), f.r, f.n),
        ];

        for (gx, gy, n, r, d) in neighbours {
            if on_net(gx, gy) && !faces.iter().any(|g| g.x0 == gx * size && g.y0 == gy * size) {
                let g = Face {
                    x0: gx * size,
                    y0: gy * size,
                    n,
                    r,
                    d,
                };
                faces.push(g);
                queue.push_back(g);
            }
        }
    }

    faces
}

fn bonus(input: &str) -> usize {
    let board = parse(input);
    let cells = board.grid.iter().flatten().filter(|&&c| c != b' ').count();
    let size = ((cells / 6) as f64).sqrt().round() as usize;
    let faces = fold(&board.grid, size);
    let s = size as i32;

    board.walk(|x, y, dir| {
        let f = faces
            .iter()
            .find(|f| (f.x0..f.x0 + size).contains(&x) && (f.y0..f.y0 + size).contains(&y))
            .unwrap();

        // cell centres in doubled coordinates, the cube spanning -size..=size
        let (lx, ly) = ((x - f.x0) as i32, (y - f.y0) as i32);
        let exit = [f.r, f.d, neg(f.r), neg(f.d)][dir];
        let p: V3 = std::array::from_fn(|i| {
            f.n[i] * s + f.r[i] * (2 * lx + 1 - s) + f.d[i] * (2 * ly + 1 - s) + exit[i] - f.n[i]
        });

        let g = faces.iter().find(|g| g.n == exit).unwrap();
        let heading = neg(f.n);
        let dir = [g.r, g.d, neg(g.r), neg(g.d)]
            .iter()
            .position(|&v| v == heading)
            .unwrap();

        let gx = (dot(p, g.r) + s - 1) / 2;
        let gy = (dot(p, g.d) + s - 1) / 2;
        (g.x0 + gx as usize, g.y0 + gy as usize, dir)
    })
}

#[test]
fn test() {
    let example_input = "
        ...#
        .#..
        #...
        ....
...#.......#
........#...
..#....#....
..........#.
        ...#....
        .....#..
        .#......
        ......#.

10R5L5R10L4R5L5
";

    assert_eq!(solve(example_input), 6032);
    assert_eq!(bonus(example_input), 5031);
}
