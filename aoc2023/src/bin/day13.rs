use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 13)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

fn parse(input: &str) -> Vec<Vec<Vec<u8>>> {
    input
        .trim()
        .split("\n\n")
        .map(|block| block.lines().map(|l| l.trim().bytes().collect()).collect())
        .collect()
}

/// Finds the horizontal mirror line (rows above it) at which the two halves
/// differ in exactly `smudges` cells.
fn mirror_row(pattern: &[Vec<u8>], smudges: usize) -> Option<usize> {
    (1..pattern.len()).find(|&r| {
        let diff: usize = pattern[..r]
            .iter()
            .rev()
            .zip(&pattern[r..])
            .map(|(a, b)| a.iter().zip(b).filter(|(x, y)| x != y).count())
            .sum();
        diff == smudges
    })
}

fn transpose(pattern: &[Vec<u8>]) -> Vec<Vec<u8>> {
    (0..pattern[0].len())
        .map(|x| pattern.iter().map(|row| row[x]).collect())
        .collect()
}

fn summarize(input: &str, smudges: usize) -> usize {
    parse(input)
        .iter()
        .map(|pattern| match mirror_row(pattern, smudges) {
            Some(r) => 100 * r,
            None => mirror_row(&transpose(pattern), smudges).unwrap(),
        })
        .sum()
}

fn solve(input: &str) -> usize {
    summarize(input, 0)
}

fn bonus(input: &str) -> usize {
    summarize(input, 1)
}

#[test]
fn test() {
    let example_input = "
#.##..##.
..#.##.#.
##......#
##......#
..#.##.#.
..##..##.
#.#.##.#.

#...##..#
#....#..#
..##..###
#####.##.
#####.##.
..##..###
#....#..#
";

    assert_eq!(solve(example_input), 405);
    assert_eq!(bonus(example_input), 400);
}
