use aoc_harness::time;
use regex::Regex;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 13)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

struct Machine {
    a: (i64, i64),
    b: (i64, i64),
    prize: (i64, i64),
}

fn parse(input: &str) -> Vec<Machine> {
    let re = Regex::new(r"\d+").unwrap();

    input
        .trim()
        .split("\n\n")
        .map(|block| {
            let n = re
                .find_iter(block)
                .map(|m| m.as_str().parse().unwrap())
                .collect::<Vec<i64>>();

            Machine {
                a: (n[0], n[1]),
                b: (n[2], n[3]),
                prize: (n[4], n[5]),
            }
        })
        .collect()
}

impl Machine {
    /// Cramer's rule; only whole numbers of presses count.
    fn tokens(&self, offset: i64) -> Option<i64> {
        let (px, py) = (self.prize.0 + offset, self.prize.1 + offset);
        let det = self.a.0 * self.b.1 - self.a.1 * self.b.0;
        if det == 0 {
            return None;
        }

        let a = px * self.b.1 - py * self.b.0;
        let b = self.a.0 * py - self.a.1 * px;
        if a % det != 0 || b % det != 0 || a / det < 0 || b / det < 0 {
            return None;
        }

        Some(3 * (a / det) + b / det)
    }
}

fn solve(input: &str) -> i64 {
    parse(input).iter().filter_map(|m| m.tokens(0)).sum()
}

fn bonus(input: &str) -> i64 {
    parse(input)
        .iter()
        .filter_map(|m| m.tokens(10000000000000))
        .sum()
}

#[test]
fn test() {
    let example_input = "
Button A: X+94, Y+34
Button B: X+22, Y+67
Prize: X=8400, Y=5400

Button A: X+26, Y+66
Button B: X+67, Y+21
Prize: X=12748, Y=12176

Button A: X+17, Y+86
Button B: X+84, Y+37
Prize: X=7870, Y=6450

Button A: X+69, Y+23
Button B: X+27, Y+71
Prize: X=18641, Y=10279
";

    assert_eq!(solve(example_input), 480);
    assert_eq!(bonus(example_input), 875318608908);
}
