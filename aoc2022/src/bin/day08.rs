use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 8)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

type Grid = Vec<Vec<u8>>;

const DIRS: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

fn parse(input: &str) -> Grid {
    input
        .trim()
        .lines()
        .map(|line| line.trim().bytes().collect())
        .collect()
}

/// The trees seen looking from `(x, y)` in direction `(dx, dy)`, nearest first.
fn sightline(grid: &Grid, (x, y): (usize, usize), (dx, dy): (isize, isize)) -> Vec<u8> {
    let mut trees = vec![];
    let (mut x, mut y) = (x as isize + dx, y as isize + dy);

    while y >= 0 && x >= 0 && (y as usize) < grid.len() && (x as usize) < grid[0].len() {
        trees.push(grid[y as usize][x as usize]);
        x += dx;
        y += dy;
    }

    trees
}

fn solve(input: &str) -> usize {
    let grid = parse(input);

    (0..grid.len())
        .flat_map(|y| (0..grid[0].len()).map(move |x| (x, y)))
        .filter(|&(x, y)| {
            DIRS.iter().any(|&d| {
                sightline(&grid, (x, y), d)
                    .iter()
                    .all(|&t| t < grid[y][x])
            })
        })
        .count()
}

fn bonus(input: &str) -> usize {
    let grid = parse(input);

    (0..grid.len())
        .flat_map(|y| (0..grid[0].len()).map(move |x| (x, y)))
        .map(|(x, y)| {
            DIRS.iter()
                .map(|&d| {
                    let line = sightline(&grid, (x, y), d);
                    match line.iter().position(|&t| t >= grid[y][x]) {
                        Some(i) => i + 1,
                        None => line.len(),
                    }
                })
                .product::<usize>()
        })
        .max()
        .unwrap()
}

#[test]
fn test() {
    let example_input = "
30373
25512
65332
33549
35390
";

    assert_eq!(solve(example_input), 21);
    assert_eq!(bonus(example_input), 8);
}
