use aoc_harness::time;
use itertools::Itertools;
use regex::Regex;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 17)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

fn shr(a: u64, n: u64) -> u64 {
    if n >= 64 {
        0
    } else {
        a >> n
    }
}

#[derive(Debug, Clone)]
struct Computer {
    regs: [u64; 3],
    program: Vec<u64>,
}

impl Computer {
    fn parse(input: &str) -> Self {
        let nums = Regex::new(r"\d+")
            .unwrap()
            .find_iter(input)
            .map(|m| m.as_str().parse().unwrap())
            .collect::<Vec<u64>>();

        Computer {
            regs: [nums[0], nums[1], nums[2]],
            program: nums[3..].to_vec(),
        }
    }

    fn run(&self, a: u64) -> Vec<u64> {
        let [mut a, mut b, mut c] = [a, self.regs[1], self.regs[2]];
        let mut ip = 0;
        let mut out = vec![];

        while ip + 1 < self.program.len() {
            let (op, literal) = (self.program[ip], self.program[ip + 1]);
            let combo = match literal {
                0..=3 => literal,
                4 => a,
                5 => b,
                6 => c,
                _ => 0,
            };

            ip += 2;
            match op {
                0 => a = shr(a, combo),
                1 => b ^= literal,
                2 => b = combo % 8,
                3 if a != 0 => ip = literal as usize,
                3 => {}
                4 => b ^= c,
                5 => out.push(combo % 8),
                6 => b = shr(a, combo),
                7 => c = shr(a, combo),
                _ => unreachable!(),
            }
        }

        out
    }
}

fn solve(input: &str) -> String {
    let computer = Computer::parse(input);
    computer.run(computer.regs[0]).iter().join(",")
}

/// The program consumes A three bits per output digit, so build A up from
/// the most significant bits, matching the program's tail one digit at a
/// time.
fn bonus(input: &str) -> u64 {
    let computer = Computer::parse(input);
    let n = computer.program.len();
    let mut candidates = vec![0];

    for i in (0..n).rev() {
        candidates = candidates
            .iter()
            .flat_map(|&a| (0..8).map(move |k| a * 8 + k))
            .filter(|&a| computer.run(a) == computer.program[i..])
            .collect();
    }

    candidates.into_iter().min().unwrap()
}

#[test]
fn test() {
    let example_input = "
Register A: 729
Register B: 0
Register C: 0

Program: 0,1,5,4,3,0
";

    assert_eq!(solve(example_input), "4,6,3,5,6,3,5,2,1,0");

    let quine = "
Register A: 2024
Register B: 0
Register C: 0

Program: 0,3,5,4,3,0
";

    assert_eq!(bonus(quine), 117440);
}
