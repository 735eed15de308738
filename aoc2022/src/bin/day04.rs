use aoc_harness::time;
use regex::Regex;

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

fn parse(input: &str) -> Vec<[u32; 4]> {
    let re = Regex::new(r"^(\d+)-(\d+),(\d+)-(\d+)$").unwrap();

    input
        .trim()
        .lines()
        .map(|line| {
            let caps = re.captures(line.trim()).unwrap();
            [1, 2, 3, 4].map(|i| caps[i].parse().unwrap())
        })
        .collect()
}

fn solve(input: &str) -> usize {
    parse(input)
        .into_iter()
        .filter(|&[a, b, c, d]| (a <= c && d <= b) || (c <= a && b <= d))
        .count()
}

fn bonus(input: &str) -> usize {
    parse(input)
        .into_iter()
        .filter(|&[a, b, c, d]| a <= d && c <= b)
        .count()
}

#[test]
fn test() {
    let example_input = "
2-4,6-8
2-3,4-5
5-7,7-9
2-8,3-7
6-6,4-6
2-6,4-8
";

    assert_eq!(solve(example_input), 2);
    assert_eq!(bonus(example_input), 4);
}
