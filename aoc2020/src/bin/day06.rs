use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 6)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

// one bit per question, one mask per person
fn groups(input: &str) -> Vec<Vec<u32>> {
    input
        .trim()
        .split("\n\n")
        .map(|group| {
            group
                .lines()
                .map(|person| {
                    person
                        .trim()
                        .bytes()
                        .fold(0, |mask, b| mask | (1 << (b - b'a')))
                })
                .collect()
        })
        .collect()
}

fn solve(input: &str) -> u32 {
    groups(input)
        .into_iter()
        .map(|g| g.into_iter().fold(0, |a, b| a | b).count_ones())
        .sum()
}

fn bonus(input: &str) -> u32 {
    groups(input)
        .into_iter()
        .map(|g| g.into_iter().fold(u32::MAX, |a, b| a & b).count_ones())
        .sum()
}

#[test]
fn test() {
    let example_input = "
abc

a
b
c

ab
ac

a
a
a
a

b
";

    assert_eq!(solve(example_input), 11);
    assert_eq!(bonus(example_input), 6);
}
