use aoc_harness::time;
use itertools::Itertools;

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

#[derive(Debug, Clone)]
enum Op {
    Add(u64),
    Mul(u64),
    Square,
}

#[derive(Debug, Clone)]
struct Monkey {
    items: Vec<u64>,
    op: Op,
    divisor: u64,
    if_true: usize,
    if_false: usize,
}

fn last_number(line: &str) -> u64 {
    line.split_whitespace().last().unwrap().parse().unwrap()
}

fn parse(input: &str) -> Vec<Monkey> {
    input
        .trim()
        .split("\n\n")
        .map(|block| {
            let lines = block.lines().map(str::trim).collect_vec();

            let items = lines[1]
                .trim_start_matches("Starting items: ")
                .split(", ")
                .map(|n| n.parse().unwrap())
                .collect();

            let op = match lines[2]
                .trim_start_matches("Operation: new = old ")
                .split_once(' ')
                .unwrap()
            {
                ("*", "old") => Op::Square,
                ("*", n) => Op::Mul(n.parse().unwrap()),
                (_, n) => Op::Add(n.parse().unwrap()),
            };

            Monkey {
                items,
                op,
                divisor: last_number(lines[3]),
                if_true: last_number(lines[4]) as usize,
                if_false: last_number(lines[5]) as usize,
            }
        })
        .collect()
}

fn monkey_business(input: &str, rounds: usize, relief: bool) -> u64 {
    let mut monkeys = parse(input);
    let modulus: u64 = monkeys.iter().map(|m| m.divisor).product();
    let mut inspected = vec![0u64; monkeys.len()];

    for _ in 0..rounds {
        for i in 0..monkeys.len() {
            let items = std::mem::take(&mut monkeys[i].items);
            inspected[i] += items.len() as u64;

            for item in items {
                let mut worry = match monkeys[i].op {
                    Op::Add(n) => item + n,
                    Op::Mul(n) => item * n,
                    Op::Square => item * item,
                };

                if relief {
                    worry /= 3;
                } else {
                    worry %= modulus;
                }

                let target = if worry % monkeys[i].divisor == 0 {
                    monkeys[i].if_true
                } else {
                    monkeys[i].if_false
                };
                monkeys[target].items.push(worry);
            }
        }
    }

    inspected.sort_unstable_by(|a, b| b.cmp(a));
    inspected[0] * inspected[1]
}

fn solve(input: &str) -> u64 {
    monkey_business(input, 20, true)
}

fn bonus(input: &str) -> u64 {
    monkey_business(input, 10000, false)
}

#[test]
fn test() {
    let example_input = "
Monkey 0:
  Starting items: 79, 98
  Operation: new = old * 19
  Test: divisible by 23
    If true: throw to monkey 2
    If false: throw to monkey 3

Monkey 1:
  Starting items: 54, 65, 75, 74
  Operation: new = old + 6
  Test: divisible by 19
    If true: throw to monkey 2
    If false: throw to monkey 0

Monkey 2:
  Starting items: 79, 60, 97
  Operation: new = old * old
  Test: divisible by 13
    If true: throw to monkey 1
    If false: throw to monkey 3

Monkey 3:
  Starting items: 74
  Operation: new = old + 3
  Test: divisible by 17
    If true: throw to monkey 0
    If false: throw to monkey 1
";

    assert_eq!(solve(example_input), 10605);
    assert_eq!(bonus(example_input), 2713310158);
}
