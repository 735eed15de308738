use aoc_harness::time;
use regex::Regex;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 3)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

fn multiply(input: &str, conditionals: bool) -> u64 {
    let re = Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)").unwrap();
    let mut enabled = true;
    let mut sum = 0;

    for cap in re.captures_iter(input) {
        match &cap[0] {
            "do()" => enabled = true,
            "don't()" => enabled = !conditionals,
            _ if enabled => sum += cap[1].parse::<u64>().unwrap() * cap[2].parse::<u64>().unwrap(),
            _ => {}
        }
    }

    sum
}

fn solve(input: &str) -> u64 {
    multiply(input, false)
}

fn bonus(input: &str) -> u64 {
    multiply(input, true)
}

#[test]
fn test() {
    assert_eq!(
        solve("xmul(2,4)%&mul[3,7]!@^do_not_mul(5,5)+mul(32,64]then(mul(11,8)mul(8,5))"),
        161
    );

    assert_eq!(
        bonus("xmul(2,4)&mul[3,7]!^don't()_mul(5,5)+mul(32,64](mul(11,8)undo()?mul(8,5))"),
        48
    );
}
