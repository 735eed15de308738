use aoc_harness::time;

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

fn parse(input: &str) -> (Vec<u32>, usize) {
    let lines = input.trim().lines().map(str::trim).collect::<Vec<_>>();
    let width = lines[0].len();
    let nums = lines
        .iter()
        .map(|line| u32::from_str_radix(line, 2).unwrap())
        .collect();

    (nums, width)
}

fn ones_at(nums: &[u32], bit: usize) -> usize {
    nums.iter().filter(|&&n| n >> bit & 1 == 1).count()
}

fn solve(input: &str) -> u32 {
    let (nums, width) = parse(input);

    let gamma = (0..width)
        .filter(|&bit| ones_at(&nums, bit) * 2 > nums.len())
        .fold(0, |g, bit| g | 1 << bit);
    let epsilon = !gamma & ((1 << width) - 1);

    gamma * epsilon
}

/// Keeps filtering on the most common bit (ties go to 1), or on the least
/// common one (ties go to 0), from the left, until one number remains.
fn rating(nums: &[u32], width: usize, most_common: bool) -> u32 {
    let mut remaining = nums.to_vec();

    for bit in (0..width).rev() {
        if remaining.len() == 1 {
            break;
        }

        let ones = ones_at(&remaining, bit);
        let majority = (ones * 2 >= remaining.len()) as u32;
        let keep = if most_common { majority } else { 1 - majority };

        remaining.retain(|n| n >> bit & 1 == keep);
    }

    remaining[0]
}

fn bonus(input: &str) -> u32 {
    let (nums, width) = parse(input);
    rating(&nums, width, true) * rating(&nums, width, false)
}

#[test]
fn test() {
    let example_input = "
00100
11110
10110
10111
10101
01111
00111
11100
10000
11001
00010
01010
";

    assert_eq!(solve(example_input), 198);
    assert_eq!(bonus(example_input), 230);
}
