use std::cmp::Ordering;

use aoc_harness::time;
use itertools::Itertools;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 9)?;

    time(|| {
        println!("First part: {}", solve(&input, 25));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input, 25));
    });

    Ok(())
}

fn parse(input: &str) -> Vec<u64> {
    input
        .trim()
        .lines()
        .map(|line| line.trim().parse().unwrap())
        .collect()
}

fn first_invalid(nums: &[u64], preamble: usize) -> u64 {
    nums.windows(preamble + 1)
        .find(|w| {
            let (&target, lead) = w.split_last().unwrap();
            !lead
                .iter()
                .tuple_combinations()
                .any(|(a, b)| a != b && a + b == target)
        })
        .map(|w| w[preamble])
        .unwrap()
}

fn solve(input: &str, preamble: usize) -> u64 {
    first_invalid(&parse(input), preamble)
}

// sliding window, all numbers are positive
fn bonus(input: &str, preamble: usize) -> u64 {
    let nums = parse(input);
    let target = first_invalid(&nums, preamble);

    let (mut lo, mut hi, mut sum) = (0, 0, 0u64);

    loop {
        match sum.cmp(&target) {
            Ordering::Less => {
                sum += nums[hi];
                hi += 1;
            }
            Ordering::Greater => {
                sum -= nums[lo];
                lo += 1;
            }
            Ordering::Equal if hi - lo >= 2 => {
                let range = &nums[lo..hi];
                return range.iter().min().unwrap() + range.iter().max().unwrap();
            }
            Ordering::Equal => {
                sum += nums[hi];
                hi += 1;
            }
        }
    }
}

#[test]
fn test() {
    let example_input = "
35
20
15
25
47
40
62
55
65
95
102
117
150
182
127
219
299
277
309
576
";

    assert_eq!(solve(example_input, 5), 127);
    assert_eq!(bonus(example_input, 5), 62);
}
