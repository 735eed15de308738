use aoc_harness::time;
use fxhash::FxHashSet;

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

type Grid = Vec<Vec<u32>>;

fn parse(input: &str) -> Grid {
    input
        .trim()
        .lines()
        .map(|line| line.trim().chars().map(|c| c.to_digit(10).unwrap()).collect())
        .collect()
}

fn neighbours(grid: &Grid, (x, y): (usize, usize)) -> impl Iterator<Item = (usize, usize)> {
    let h = grid.len();
    let w = grid[0].len();

    [(0, -1), (1, 0), (0, 1), (-1, 0)]
        .into_iter()
        .map(move |(dx, dy)| (x as isize + dx, y as isize + dy))
        .filter(move |&(nx, ny)| nx >= 0 && ny >= 0 && (nx as usize) < w && (ny as usize) < h)
        .map(|(nx, ny)| (nx as usize, ny as usize))
}

fn low_points(grid: &Grid) -> Vec<(usize, usize)> {
    let mut lows = vec![];
    for y in 0..grid.len() {
        for x in 0..grid[0].len() {
            if neighbours(grid, (x, y)).all(|(nx, ny)| grid[ny][nx] > grid[y][x]) {
                lows.push((x, y));
            }
        }
    }
    lows
}

fn solve(input: &str) -> u32 {
    let grid = parse(input);

    low_points(&grid)
        .into_iter()
        .map(|(x, y)| grid[y][x] + 1)
        .sum()
}

fn basin_size(grid: &Grid, low: (usize, usize)) -> usize {
    let mut seen = FxHashSet::default();
    let mut stack = vec![low];

    while let Some(pos) = stack.pop() {
        if !seen.insert(pos) {
            continue;
        }

        for (nx, ny) in neighbours(grid, pos) {
            if grid[ny][nx] != 9 && !seen.contains(&(nx, ny)) {
                stack.push((nx, ny));
            }
        }
    }

    seen.len()
}

fn bonus(input: &str) -> usize {
    let grid = parse(input);

    let mut sizes = low_points(&grid)
        .into_iter()
        .map(|low| basin_size(&grid, low))
        .collect::<Vec<_>>();

    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes.iter().take(3).product()
}

#[test]
fn test() {
    let example_input = "
2199943210
3987894921
9856789892
8767896789
9899965678
";

    assert_eq!(solve(example_input), 15);
    assert_eq!(bonus(example_input), 1134);
}
