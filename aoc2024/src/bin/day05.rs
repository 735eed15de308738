use std::cmp::Ordering;

use aoc_harness::time;
use fxhash::FxHashSet;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 5)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

struct Queue {
    rules: FxHashSet<(u32, u32)>,
    updates: Vec<Vec<u32>>,
}

impl Queue {
    fn parse(input: &str) -> Self {
        let (rules, updates) = input.trim().split_once("\n\n").unwrap();

        Queue {
            rules: rules
                .lines()
                .map(|line| {
                    let (a, b) = line.trim().split_once('|').unwrap();
                    (a.parse().unwrap(), b.parse().unwrap())
                })
                .collect(),
            updates: updates
                .lines()
                .map(|line| line.trim().split(',').map(|n| n.parse().unwrap()).collect())
                .collect(),
        }
    }

    fn order(&self, a: &u32, b: &u32) -> Ordering {
        if self.rules.contains(&(*a, *b)) {
            Ordering::Less
        } else if self.rules.contains(&(*b, *a)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn is_ordered(&self, update: &[u32]) -> bool {
        update
            .windows(2)
            .all(|w| self.order(&w[0], &w[1]) != Ordering::Greater)
    }
}

fn solve(input: &str) -> u32 {
    let queue = Queue::parse(input);

    queue
        .updates
        .iter()
        .filter(|u| queue.is_ordered(u))
        .map(|u| u[u.len() / 2])
        .sum()
}

fn bonus(input: &str) -> u32 {
    let queue = Queue::parse(input);

    queue
        .updates
        .iter()
        .filter(|u| !queue.is_ordered(u))
        .map(|u| {
            let mut u = u.clone();
            u.sort_by(|a, b| queue.order(a, b));
            u[u.len() / 2]
        })
        .sum()
}

#[test]
fn test() {
    let example_input = "
47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";

    assert_eq!(solve(example_input), 143);
    assert_eq!(bonus(example_input), 123);
}
