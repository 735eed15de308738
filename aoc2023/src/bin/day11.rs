use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 11)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input, 1000000));
    });

    Ok(())
}

/// Sum of pairwise distances along one axis, where every empty row (or
/// column) counts `factor` times.
fn axis_distances(counts: &[usize], factor: usize) -> usize {
    let mut total = 0;
    let (mut seen, mut seen_pos_sum, mut pos) = (0, 0, 0);

    for &n in counts {
        total += n * (seen * pos - seen_pos_sum);
        seen += n;
        seen_pos_sum += n * pos;
        pos += if n == 0 { factor } else { 1 };
    }

    total
}

fn bonus(input: &str, factor: usize) -> usize {
    let grid: Vec<&[u8]> = input.trim().lines().map(|l| l.trim().as_bytes()).collect();

    let rows: Vec<usize> = grid
        .iter()
        .map(|row| row.iter().filter(|&&c| c == b'#').count())
        .collect();

    let cols: Vec<usize> = (0..grid[0].len())
        .map(|x| grid.iter().filter(|row| row[x] == b'#').count())
        .collect();

    axis_distances(&rows, factor) + axis_distances(&cols, factor)
}

fn solve(input: &str) -> usize {
    bonus(input, 2)
}

#[test]
fn test() {
    let example_input = "
...#......
.......#..
#.........
..........
......#...
.#........
.........#
..........
.......#..
#...#.....
";

    assert_eq!(solve(example_input), 374);
    assert_eq!(bonus(example_input, 10), 1030);
    assert_eq!(bonus(example_input, 100), 8410);
}
