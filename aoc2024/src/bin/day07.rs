use aoc_harness::time;
use rayon::prelude::*;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 7)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

fn parse(input: &str) -> Vec<(u64, Vec<u64>)> {
    input
        .trim()
        .lines()
        .map(|line| {
            let (target, nums) = line.trim().split_once(": ").unwrap();
            (
                target.parse().unwrap(),
                nums.split(' ').map(|n| n.parse().unwrap()).collect(),
            )
        })
        .collect()
}

/// Works backwards from the target, undoing the last operator.
fn solvable(target: u64, nums: &[u64], concat: bool) -> bool {
    let (&last, rest) = nums.split_last().unwrap();
    if rest.is_empty() {
        return target == last;
    }

    if target > last && solvable(target - last, rest, concat) {
        return true;
    }

    if target % last == 0 && solvable(target / last, rest, concat) {
        return true;
    }

    if concat {
        let pow = 10u64.pow(last.to_string().len() as u32);
        if target > last && target % pow == last && solvable(target / pow, rest, concat) {
            return true;
        }
    }

    false
}

fn calibrate(input: &str, concat: bool) -> u64 {
    parse(input)
        .par_iter()
        .filter(|(target, nums)| solvable(*target, nums, concat))
        .map(|(target, _)| target)
        .sum()
}

fn solve(input: &str) -> u64 {
    calibrate(input, false)
}

fn bonus(input: &str) -> u64 {
    calibrate(input, true)
}

#[test]
fn test() {
    let example_input = "
190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20
";

    assert_eq!(solve(example_input), 3749);
    assert_eq!(bonus(example_input), 11387);
}
