use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 4)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

struct Puzzle(Vec<Vec<u8>>);

impl Puzzle {
    fn parse(input: &str) -> Self {
        Puzzle(
            input
                .trim()
                .lines()
                .map(|l| l.trim().bytes().collect())
                .collect(),
        )
    }

    fn get(&self, x: i32, y: i32) -> u8 {
        if x < 0 || y < 0 {
            return b'.';
        }

        self.0
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(b'.')
    }

    fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..self.0.len() as i32).flat_map(move |y| (0..self.0[0].len() as i32).map(move |x| (x, y)))
    }
}

fn solve(input: &str) -> usize {
    let puzzle = Puzzle::parse(input);

    let dirs = [(1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (-1, -1), (0, -1), (1, -1)];

    puzzle
        .cells()
        .map(|(x, y)| {
            dirs.iter()
                .filter(|(dx, dy)| {
                    b"XMAS"
                        .iter()
                        .enumerate()
                        .all(|(i, &c)| puzzle.get(x + dx * i as i32, y + dy * i as i32) == c)
                })
                .count()
        })
        .sum()
}

fn bonus(input: &str) -> usize {
    let puzzle = Puzzle::parse(input);

    let is_mas = |a: u8, b: u8| (a, b) == (b'M', b'S') || (a, b) == (b'S', b'M');

    puzzle
        .cells()
        .filter(|&(x, y)| {
            puzzle.get(x, y) == b'A'
                && is_mas(puzzle.get(x - 1, y - 1), puzzle.get(x + 1, y + 1))
                && is_mas(puzzle.get(x + 1, y - 1), puzzle.get(x - 1, y + 1))
        })
        .count()
}

#[test]
fn test() {
    let example_input = "
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

    assert_eq!(solve(example_input), 18);
    assert_eq!(bonus(example_input), 9);
}
