use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 19)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

fn parse(input: &str) -> (Vec<&str>, Vec<&str>) {
    let (towels, designs) = input.trim().split_once("\n\n").unwrap();

    (
        towels.split(", ").map(str::trim).collect(),
        designs.lines().map(str::trim).collect(),
    )
}

fn arrangements(towels: &[&str], design: &str) -> u64 {
    // ways[i] = number of ways to make the first i stripes
    let mut ways = vec![0u64; design.len() + 1];
    ways[0] = 1;

    for i in 0..design.len() {
        if ways[i] == 0 {
            continue;
        }
        for towel in towels {
            if design[i..].starts_with(towel) {
                ways[i + towel.len()] += ways[i];
            }
        }
    }

    ways[design.len()]
}

fn solve(input: &str) -> usize {
    let (towels, designs) = parse(input);

    designs
        .iter()
        .filter(|d| arrangements(&towels, d) > 0)
        .count()
}

fn bonus(input: &str) -> u64 {
    let (towels, designs) = parse(input);

    designs.iter().map(|d| arrangements(&towels, d)).sum()
}

#[test]
fn test() {
    let example_input = "
r, wr, b, g, bwu, rb, gb, br

brwrr
bggr
gbbr
rrbgbr
ubwu
bwurrg
brgr
bbrgwb
";

    assert_eq!(solve(example_input), 6);
    assert_eq!(bonus(example_input), 16);
}
