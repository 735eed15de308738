use aoc_harness::time;
use cached::proc_macro::cached;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 11)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

#[cached]
fn stones_after(stone: u64, blinks: usize) -> u64 {
    if blinks == 0 {
        return 1;
    }

    if stone == 0 {
        return stones_after(1, blinks - 1);
    }

    let digits = stone.ilog10() + 1;
    if digits % 2 == 0 {
        let half = 10u64.pow(digits / 2);
        stones_after(stone / half, blinks - 1) + stones_after(stone % half, blinks - 1)
    } else {
        stones_after(stone * 2024, blinks - 1)
    }
}

fn blink(input: &str, blinks: usize) -> u64 {
    input
        .split_whitespace()
        .map(|n| stones_after(n.parse().unwrap(), blinks))
        .sum()
}

fn solve(input: &str) -> u64 {
    blink(input, 25)
}

fn bonus(input: &str) -> u64 {
    blink(input, 75)
}

#[test]
fn test() {
    assert_eq!(blink("125 17", 6), 22);
    assert_eq!(solve("125 17"), 55312);
    assert_eq!(bonus("125 17"), 65601038650482);
}
