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

fn calories(input: &str) -> Vec<u32> {
    let mut elves = input
        .trim()
        .split("\n\n")
        .map(|elf| elf.lines().map(|n| n.trim().parse::<u32>().unwrap()).sum::<u32>())
        .collect::<Vec<_>>();

    elves.sort_unstable_by(|a, b| b.cmp(a));
    elves
}

fn solve(input: &str) -> u32 {
    calories(input)[0]
}

fn bonus(input: &str) -> u32 {
    calories(input).iter().take(3).sum()
}

#[test]
fn test() {
    let example_input = "
1000
2000
3000

4000

5000
6000

7000
8000
9000

10000
";

    assert_eq!(solve(example_input), 24000);
    assert_eq!(bonus(example_input), 45000);
}
