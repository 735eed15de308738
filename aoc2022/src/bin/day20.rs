use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 20)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

fn decrypt(input: &str, key: i64, rounds: usize) -> i64 {
    let numbers = input
        .trim()
        .lines()
        .map(|n| n.trim().parse::<i64>().unwrap() * key)
        .collect::<Vec<_>>();

    // positions of the original indices in the mixed list
    let mut order = (0..numbers.len()).collect::<Vec<_>>();
    let cycle = numbers.len() as i64 - 1;

    for _ in 0..rounds {
        for (i, &n) in numbers.iter().enumerate() {
            let at = order.iter().position(|&j| j == i).unwrap();
            order.remove(at);
            let to = (at as i64 + n).rem_euclid(cycle) as usize;
            order.insert(to, i);
        }
    }

    let zero = numbers.iter().position(|&n| n == 0).unwrap();
    let at = order.iter().position(|&j| j == zero).unwrap();

    [1000, 2000, 3000]
        .iter()
        .map(|offset| numbers[order[(at + offset) % order.len()]])
        .sum()
}

fn solve(input: &str) -> i64 {
    decrypt(input, 1, 1)
}

fn bonus(input: &str) -> i64 {
    decrypt(input, 811589153, 10)
}

#[test]
fn test() {
    let example_input = "1\n2\n-3\n3\n-2\n0\n4";

    assert_eq!(solve(example_input), 3);
    assert_eq!(bonus(example_input), 1623178306);
}
