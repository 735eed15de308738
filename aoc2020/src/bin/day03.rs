use aoc_harness::time;

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

fn trees_on_slope(grid: &[Vec<bool>], right: usize, down: usize) -> usize {
    let w = grid[0].len();

    grid.iter()
        .step_by(down)
        .enumerate()
        .filter(|(i, row)| row[(i * right) % w])
        .count()
}

fn parse(input: &str) -> Vec<Vec<bool>> {
    input
        .trim()
        .lines()
        .map(|line| line.trim().chars().map(|c| c == '#').collect())
        .collect()
}

fn solve(input: &str) -> usize {
    trees_on_slope(&parse(input), 3, 1)
}

fn bonus(input: &str) -> usize {
    let grid = parse(input);

    [(1, 1), (3, 1), (5, 1), (7, 1), (1, 2)]
        .into_iter()
        .map(|(right, down)| trees_on_slope(&grid, right, down))
        .product()
}

#[test]
fn test() {
    let example_input = "
..##.......
#...#...#..
.#....#..#.
..#.#...#.#
.#...##..#.
..#.##.....
.#.#.#....#
.#........#
#.##...#...
#...##....#
.#..#...#.#
";

    assert_eq!(solve(example_input), 7);
    assert_eq!(bonus(example_input), 336);
}
