use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 8)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Acc,
    Jmp,
    Nop,
}

fn parse(input: &str) -> Vec<(Op, i64)> {
    input
        .trim()
        .lines()
        .map(|line| {
            let (op, arg) = line.trim().split_once(' ').unwrap();
            let op = match op {
                "acc" => Op::Acc,
                "jmp" => Op::Jmp,
                "nop" => Op::Nop,
                _ => unreachable!(),
            };

            (op, arg.parse::<i64>().unwrap())
        })
        .collect()
}

/// Runs until an instruction is about to execute a second time (`Err`), or
/// the program counter steps just past the end (`Ok`).
fn run(program: &[(Op, i64)]) -> Result<i64, i64> {
    let mut executed = vec![false; program.len()];
    let mut acc = 0;
    let mut pc = 0i64;

    loop {
        if pc == program.len() as i64 {
            return Ok(acc);
        }

        if pc < 0 || pc > program.len() as i64 || executed[pc as usize] {
            return Err(acc);
        }

        executed[pc as usize] = true;

        match program[pc as usize] {
            (Op::Acc, n) => {
                acc += n;
                pc += 1;
            }
            (Op::Jmp, n) => pc += n,
            (Op::Nop, _) => pc += 1,
        }
    }
}

fn solve(input: &str) -> i64 {
    run(&parse(input)).unwrap_err()
}

fn bonus(input: &str) -> i64 {
    let mut program = parse(input);

    for i in 0..program.len() {
        let original = program[i].0;
        program[i].0 = match original {
            Op::Jmp => Op::Nop,
            Op::Nop => Op::Jmp,
            Op::Acc => continue,
        };

        if let Ok(acc) = run(&program) {
            return acc;
        }

        program[i].0 = original;
    }

    unreachable!("no single patch terminates")
}

#[test]
fn test() {
    let example_input = "
nop +0
acc +1
jmp +4
acc +3
jmp -3
acc -99
acc +1
jmp -4
acc +6
";

    assert_eq!(solve(example_input), 5);
    assert_eq!(bonus(example_input), 8);
}
