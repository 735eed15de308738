use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 23)?;

    time(|| {
        println!("First part: {}", solve(&input, 100));
    });

    time(|| {
        // ±300ms
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

/// `next[label]` is the label of the cup clockwise of `label`.
fn play(labels: &[usize], total: usize, moves: usize) -> Vec<usize> {
    let mut order = labels.to_vec();
    order.extend(labels.len() + 1..=total);

    let mut next = vec![0; total + 1];
    for (i, &cup) in order.iter().enumerate() {
        next[cup] = order[(i + 1) % order.len()];
    }

    let mut current = order[0];

    for _ in 0..moves {
        let a = next[current];
        let b = next[a];
        let c = next[b];
        next[current] = next[c];

        let mut dest = current;
        loop {
            dest = if dest == 1 { total } else { dest - 1 };
            if dest != a && dest != b && dest != c {
                break;
            }
        }

        next[c] = next[dest];
        next[dest] = a;
        current = next[current];
    }

    next
}

fn parse(input: &str) -> Vec<usize> {
    input
        .trim()
        .chars()
        .map(|c| c.to_digit(10).unwrap() as usize)
        .collect()
}

fn solve(input: &str, moves: usize) -> String {
    let labels = parse(input);
    let next = play(&labels, labels.len(), moves);

    let mut result = String::new();
    let mut cup = next[1];
    while cup != 1 {
        result.push_str(&cup.to_string());
        cup = next[cup];
    }

    result
}

fn bonus(input: &str) -> usize {
    let next = play(&parse(input), 1_000_000, 10_000_000);
    next[1] * next[next[1]]
}

#[test]
fn test() {
    assert_eq!(solve("389125467", 10), "92658374");
    assert_eq!(solve("389125467", 100), "67384529");
    assert_eq!(bonus("389125467"), 149245887792);
}
