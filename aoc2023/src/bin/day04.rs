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

fn matches(input: &str) -> Vec<usize> {
    input
        .trim()
        .lines()
        .map(|line| {
            let (_, numbers) = line.split_once(':').unwrap();
            let (winning, have) = numbers.split_once('|').unwrap();
            let winning = winning.split_whitespace().collect::<Vec<_>>();

            have.split_whitespace()
                .filter(|n| winning.contains(n))
                .count()
        })
        .collect()
}

fn solve(input: &str) -> u32 {
    matches(input)
        .into_iter()
        .filter(|&m| m > 0)
        .map(|m| 1 << (m - 1))
        .sum()
}

fn bonus(input: &str) -> usize {
    let matches = matches(input);
    let mut copies = vec![1; matches.len()];

    for (i, &m) in matches.iter().enumerate() {
        for j in i + 1..=(i + m).min(matches.len() - 1) {
            copies[j] += copies[i];
        }
    }

    copies.iter().sum()
}

#[test]
fn test() {
    let example_input = "
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
";

    assert_eq!(solve(example_input), 13);
    assert_eq!(bonus(example_input), 30);
}
