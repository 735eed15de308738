use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 8)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

fn solve(input: &str) -> usize {
    input
        .trim()
        .lines()
        .flat_map(|line| line.split_once(" | ").unwrap().1.split_whitespace())
        .filter(|digit| matches!(digit.len(), 2 | 3 | 4 | 7))
        .count()
}

/// Summing, over a digit's lit segments, how often each segment is lit
/// across all ten patterns gives a number unique to that digit, whatever
/// the wiring.
fn decode(line: &str) -> usize {
    let (patterns, output) = line.split_once(" | ").unwrap();

    let mut frequency = [0; 7];
    for c in patterns.bytes().filter(|b| b.is_ascii_lowercase()) {
        frequency[(c - b'a') as usize] += 1;
    }

    output.split_whitespace().fold(0, |n, digit| {
        let fingerprint = digit
            .bytes()
            .map(|c| frequency[(c - b'a') as usize])
            .sum::<usize>();

        let d = match fingerprint {
            42 => 0,
            17 => 1,
            34 => 2,
            39 => 3,
            30 => 4,
            37 => 5,
            41 => 6,
            25 => 7,
            49 => 8,
            45 => 9,
            _ => unreachable!(),
        };

        n * 10 + d
    })
}

fn bonus(input: &str) -> usize {
    input.trim().lines().map(decode).sum()
}

#[test]
fn test() {
    let example_input =
        "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf";

    assert_eq!(solve(example_input), 0);
    assert_eq!(bonus(example_input), 5353);

    let easy = "be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb | fdgacbe cefdb cefbgd gcbe";
    assert_eq!(solve(easy), 2);
    assert_eq!(bonus(easy), 8394);
}
