use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 10)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

// outlet, sorted adapters, device
fn chain(input: &str) -> Vec<u64> {
    let mut joltages = input
        .trim()
        .lines()
        .map(|line| line.trim().parse::<u64>().unwrap())
        .collect::<Vec<_>>();

    joltages.push(0);
    joltages.sort();
    joltages.push(joltages.last().unwrap() + 3);
    joltages
}

fn solve(input: &str) -> usize {
    let mut diffs = [0; 4];
    for w in chain(input).windows(2) {
        diffs[(w[1] - w[0]) as usize] += 1;
    }

    diffs[1] * diffs[3]
}

fn bonus(input: &str) -> u64 {
    let joltages = chain(input);
    let mut ways = vec![0u64; joltages.len()];
    ways[0] = 1;

    for i in 1..joltages.len() {
        ways[i] = (i.saturating_sub(3)..i)
            .filter(|&j| joltages[i] - joltages[j] <= 3)
            .map(|j| ways[j])
            .sum();
    }

    *ways.last().unwrap()
}

#[test]
fn test() {
    let example_input = "16\n10\n15\n5\n1\n11\n7\n19\n6\n12\n4";

    assert_eq!(solve(example_input), 35);
    assert_eq!(bonus(example_input), 8);

    let example_input_2 = "
28
33
18
42
31
14
46
20
48
47
24
23
49
45
19
38
39
11
1
32
25
35
8
17
7
9
4
2
34
10
3
";

    assert_eq!(solve(example_input_2), 220);
    assert_eq!(bonus(example_input_2), 19208);
}
