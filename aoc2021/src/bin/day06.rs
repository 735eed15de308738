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

// fish are only counted per timer value
fn simulate(input: &str, days: usize) -> u64 {
    let mut timers = [0u64; 9];
    for t in input.trim().split(',') {
        timers[t.parse::<usize>().unwrap()] += 1;
    }

    for _ in 0..days {
        timers.rotate_left(1);
        timers[6] += timers[8];
    }

    timers.iter().sum()
}

fn solve(input: &str) -> u64 {
    simulate(input, 80)
}

fn bonus(input: &str) -> u64 {
    simulate(input, 256)
}

#[test]
fn test() {
    assert_eq!(simulate("3,4,3,1,2", 18), 26);
    assert_eq!(solve("3,4,3,1,2"), 5934);
    assert_eq!(bonus("3,4,3,1,2"), 26984457539);
}
