use aoc_harness::time;
use fxhash::FxHashMap;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 14)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

type Grid = Vec<Vec<u8>>;

#[derive(Clone, Copy)]
enum Tilt {
    North,
    West,
    South,
    East,
}

/// Rolls every round rock as far as it goes. Each lane (a column for
/// north/south, a row for west/east) is scanned from the side the rocks
/// roll towards, remembering the next free slot.
fn tilt(grid: &mut Grid, dir: Tilt) {
    let h = grid.len();
    let w = grid[0].len();

    let (lanes, len) = match dir {
        Tilt::North | Tilt::South => (w, h),
        Tilt::West | Tilt::East => (h, w),
    };

    let cell = |lane: usize, i: usize| -> (usize, usize) {
        match dir {
            Tilt::North => (i, lane),
            Tilt::South => (h - 1 - i, lane),
            Tilt::West => (lane, i),
            Tilt::East => (lane, w - 1 - i),
        }
    };

    for lane in 0..lanes {
        let mut free = 0;
        for i in 0..len {
            let (y, x) = cell(lane, i);
            match grid[y][x] {
                b'#' => free = i + 1,
                b'O' => {
                    grid[y][x] = b'.';
                    let (fy, fx) = cell(lane, free);
                    grid[fy][fx] = b'O';
                    free += 1;
                }
                _ => {}
            }
        }
    }
}

fn spin(grid: &mut Grid) {
    for dir in [Tilt::North, Tilt::West, Tilt::South, Tilt::East] {
        tilt(grid, dir);
    }
}

fn load(grid: &Grid) -> usize {
    grid.iter()
        .rev()
        .enumerate()
        .map(|(y, row)| (y + 1) * row.iter().filter(|&&c| c == b'O').count())
        .sum()
}

fn parse(input: &str) -> Grid {
    input
        .trim()
        .lines()
        .map(|line| line.trim().bytes().collect())
        .collect()
}

fn solve(input: &str) -> usize {
    let mut grid = parse(input);
    tilt(&mut grid, Tilt::North);
    load(&grid)
}

fn bonus(input: &str) -> usize {
    let mut grid = parse(input);
    let total = 1000000000;

    let mut seen: FxHashMap<Grid, usize> = FxHashMap::default();
    let mut i = 0;

    while i < total {
        if let Some(&prev) = seen.get(&grid) {
            let period = i - prev;
            for _ in 0..(total - i) % period {
                spin(&mut grid);
            }
            break;
        }

        seen.insert(grid.clone(), i);
        spin(&mut grid);
        i += 1;
    }

    load(&grid)
}

#[test]
fn test() {
    let example_input = "
O....#....
O.OO#....#
.....##...
OO.#O....O
.O.....O#.
O.#..O.#.#
..O..#O..O
.......O..
#....###..
#OO..#....
";

    assert_eq!(solve(example_input), 136);
    assert_eq!(bonus(example_input), 64);
}
