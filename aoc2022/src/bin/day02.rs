use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 2)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

/// Rock, paper and scissors as 0, 1 and 2: each shape beats the one before it.
fn parse(input: &str) -> Vec<(u32, u32)> {
    input
        .trim()
        .lines()
        .map(|line| {
            let b = line.trim().as_bytes();
            ((b[0] - b'A') as u32, (b[2] - b'X') as u32)
        })
        .collect()
}

fn score(theirs: u32, mine: u32) -> u32 {
    let outcome = (mine + 4 - theirs) % 3; // 0 lose, 1 draw, 2 win
    mine + 1 + outcome * 3
}

fn solve(input: &str) -> u32 {
    parse(input).into_iter().map(|(t, m)| score(t, m)).sum()
}

fn bonus(input: &str) -> u32 {
    parse(input)
        .into_iter()
        .map(|(t, outcome)| score(t, (t + outcome + 2) % 3))
        .sum()
}

#[test]
fn test() {
    let example_input = "
A Y
B X
C Z
";

    assert_eq!(solve(example_input), 15);
    assert_eq!(bonus(example_input), 12);
}
