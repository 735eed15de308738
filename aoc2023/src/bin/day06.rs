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

/// Hold times that beat the record: `t * (time - t) > record`.
fn ways_to_win(time: u64, record: u64) -> u64 {
    let disc = ((time * time - 4 * record) as f64).sqrt();
    let mut lo = ((time as f64 - disc) / 2.0).floor() as u64;
    let mut hi = ((time as f64 + disc) / 2.0).ceil() as u64;

    // nudge past float error onto the first and last winning holds
    while lo * (time - lo) <= record {
        lo += 1;
    }
    while hi * (time - hi.min(time)) <= record {
        hi -= 1;
    }

    hi - lo + 1
}

fn numbers(line: &str) -> Vec<u64> {
    line.split_whitespace()
        .skip(1)
        .map(|n| n.parse().unwrap())
        .collect()
}

fn solve(input: &str) -> u64 {
    let (times, records) = input.trim().split_once('\n').unwrap();

    numbers(times)
        .into_iter()
        .zip(numbers(records))
        .map(|(t, r)| ways_to_win(t, r))
        .product()
}

fn bonus(input: &str) -> u64 {
    let (times, records) = input.trim().split_once('\n').unwrap();
    let joined = |line: &str| {
        line.split_once(':')
            .unwrap()
            .1
            .split_whitespace()
            .collect::<String>()
            .parse::<u64>()
            .unwrap()
    };

    ways_to_win(joined(times), joined(records))
}

#[test]
fn test() {
    let example_input = "
Time:      7  15   30
Distance:  9  40  200
";

    assert_eq!(solve(example_input), 288);
    assert_eq!(bonus(example_input), 71503);
}
