use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 1)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

const SPELLED: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// The digit starting at the beginning of `s`, if any.
fn digit_at(s: &str, spelled: bool) -> Option<u32> {
    let first = s.chars().next()?;
    if let Some(d) = first.to_digit(10) {
        return Some(d);
    }

    if !spelled {
        return None;
    }

    SPELLED
        .iter()
        .position(|word| s.starts_with(word))
        .map(|i| i as u32 + 1)
}

fn calibration(line: &str, spelled: bool) -> u32 {
    let mut digits = (0..line.len()).filter_map(|i| digit_at(&line[i..], spelled));
    let first = digits.next().unwrap();
    let last = digits.last().unwrap_or(first);

    first * 10 + last
}

fn solve(input: &str) -> u32 {
    input
        .trim()
        .lines()
        .map(|line| calibration(line.trim(), false))
        .sum()
}

fn bonus(input: &str) -> u32 {
    input
        .trim()
        .lines()
        .map(|line| calibration(line.trim(), true))
        .sum()
}

#[test]
fn test() {
    let example_input = "
1abc2
pqr3stu8vwx
a1b2c3d4e5f
treb7uchet
";

    assert_eq!(solve(example_input), 142);

    let example_input = "
two1nine
eightwothree
abcone2threexyz
xtwone3four
4nineeightseven2
zoneight234
7pqrstsixteen
";

    assert_eq!(bonus(example_input), 281);
}
