use aoc_harness::time;
use fxhash::FxHashMap;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 3)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

struct Number {
    value: u32,
    row: usize,
    cols: (usize, usize),
}

fn numbers(grid: &[&[u8]]) -> Vec<Number> {
    let mut found = vec![];

    for (row, line) in grid.iter().enumerate() {
        let mut col = 0;
        while col < line.len() {
            if !line[col].is_ascii_digit() {
                col += 1;
                continue;
            }

            let start = col;
            let mut value = 0;
            while col < line.len() && line[col].is_ascii_digit() {
                value = value * 10 + (line[col] - b'0') as u32;
                col += 1;
            }

            found.push(Number {
                value,
                row,
                cols: (start, col - 1),
            });
        }
    }

    found
}

/// The symbols around a number, with their positions.
fn adjacent_symbols(grid: &[&[u8]], n: &Number) -> Vec<(u8, (usize, usize))> {
    let mut symbols = vec![];

    for y in n.row.saturating_sub(1)..=(n.row + 1).min(grid.len() - 1) {
        let line = grid[y];
        for x in n.cols.0.saturating_sub(1)..=(n.cols.1 + 1).min(line.len() - 1) {
            let c = line[x];
            if c != b'.' && !c.is_ascii_digit() {
                symbols.push((c, (x, y)));
            }
        }
    }

    symbols
}

fn grid(input: &str) -> Vec<&[u8]> {
    input.trim().lines().map(|l| l.trim().as_bytes()).collect()
}

fn solve(input: &str) -> u32 {
    let grid = grid(input);

    numbers(&grid)
        .iter()
        .filter(|n| !adjacent_symbols(&grid, n).is_empty())
        .map(|n| n.value)
        .sum()
}

fn bonus(input: &str) -> u32 {
    let grid = grid(input);

    let mut gears: FxHashMap<(usize, usize), Vec<u32>> = FxHashMap::default();
    for n in numbers(&grid) {
        for (c, pos) in adjacent_symbols(&grid, &n) {
            if c == b'*' {
                gears.entry(pos).or_default().push(n.value);
            }
        }
    }

    gears
        .values()
        .filter(|parts| parts.len() == 2)
        .map(|parts| parts[0] * parts[1])
        .sum()
}

#[test]
fn test() {
    let example_input = "
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

    assert_eq!(solve(example_input), 4361);
    assert_eq!(bonus(example_input), 467835);
}
