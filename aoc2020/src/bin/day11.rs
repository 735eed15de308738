use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 11)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

const DIRS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

type Grid = Vec<Vec<char>>;

fn parse(input: &str) -> Grid {
    input
        .trim()
        .lines()
        .map(|line| line.trim().chars().collect())
        .collect()
}

/// For every seat, the seats it looks at. With `line_of_sight`, floor is
/// skipped until a seat (or the edge) is reached.
fn neighbours(grid: &Grid, line_of_sight: bool) -> Vec<Vec<usize>> {
    let h = grid.len() as i32;
    let w = grid[0].len() as i32;

    let mut result = vec![vec![]; (h * w) as usize];

    for y in 0..h {
        for x in 0..w {
            if grid[y as usize][x as usize] == '.' {
                continue;
            }

            for (dx, dy) in DIRS {
                let (mut nx, mut ny) = (x + dx, y + dy);
                while nx >= 0 && nx < w && ny >= 0 && ny < h {
                    if grid[ny as usize][nx as usize] != '.' {
                        result[(y * w + x) as usize].push((ny * w + nx) as usize);
                        break;
                    }

                    if !line_of_sight {
                        break;
                    }

                    nx += dx;
                    ny += dy;
                }
            }
        }
    }

    result
}

fn stabilize(grid: &Grid, line_of_sight: bool, tolerance: usize) -> usize {
    let adj = neighbours(grid, line_of_sight);
    let mut state = grid.concat();

    loop {
        let mut changed = false;
        let next = state
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                let occupied = adj[i].iter().filter(|&&j| state[j] == '#').count();
                match c {
                    'L' if occupied == 0 => {
                        changed = true;
                        '#'
                    }
                    '#' if occupied >= tolerance => {
                        changed = true;
                        'L'
                    }
                    c => c,
                }
            })
            .collect::<Vec<_>>();

        if !changed {
            return state.iter().filter(|&&c| c == '#').count();
        }

        state = next;
    }
}

fn solve(input: &str) -> usize {
    stabilize(&parse(input), false, 4)
}

fn bonus(input: &str) -> usize {
    stabilize(&parse(input), true, 5)
}

#[test]
fn test() {
    let example_input = "
L.LL.LL.LL
LLLLLLL.LL
L.L.L..L..
LLLL.LL.LL
L.LL.LL.LL
L.LLLLL.LL
..L.L.....
LLLLLLLLLL
L.LLLLLL.L
L.LLLLL.LL
";

    assert_eq!(solve(example_input), 37);
    assert_eq!(bonus(example_input), 26);
}
