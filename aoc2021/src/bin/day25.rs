use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 25)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    Ok(())
}

/// Moves one herd; returns whether anything moved.
fn step(grid: &mut Vec<Vec<u8>>, herd: u8, (dx, dy): (usize, usize)) -> bool {
    let h = grid.len();
    let w = grid[0].len();

    let moves = (0..h)
        .flat_map(|y| (0..w).map(move |x| (x, y)))
        .filter(|&(x, y)| grid[y][x] == herd && grid[(y + dy) % h][(x + dx) % w] == b'.')
        .collect::<Vec<_>>();

    for &(x, y) in &moves {
        grid[y][x] = b'.';
        grid[(y + dy) % h][(x + dx) % w] = herd;
    }

    !moves.is_empty()
}

fn solve(input: &str) -> usize {
    let mut grid = input
        .trim()
        .lines()
        .map(|line| line.trim().bytes().collect::<Vec<_>>())
        .collect::<Vec<_>>();

    (1..)
        .find(|_| {
            let east = step(&mut grid, b'>', (1, 0));
            let south = step(&mut grid, b'v', (0, 1));
            !east && !south
        })
        .unwrap()
}

#[test]
fn test() {
    let example_input = "
v...>>.vv>
.vv>>.vv..
>>.>v>...v
>>v>>.>.v.
v>v.vv.v..
>.>>..v...
.vv..>.>v.
v.v..>>v.v
....v..v.>
";

    assert_eq!(solve(example_input), 58);
}
