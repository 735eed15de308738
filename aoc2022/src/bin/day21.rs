use aoc_harness::time;
use fxhash::FxHashMap;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 21)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

enum Job<'a> {
    Number(i64),
    Op(&'a str, char, &'a str),
}

type Monkeys<'a> = FxHashMap<&'a str, Job<'a>>;

fn parse(input: &str) -> Monkeys {
    input
        .trim()
        .lines()
        .map(|line| {
            let (name, job) = line.trim().split_once(": ").unwrap();
            let job = match job.split_whitespace().collect::<Vec<_>>()[..] {
                [a, op, b] => Job::Op(a, op.chars().next().unwrap(), b),
                _ => Job::Number(job.parse().unwrap()),
            };
            (name, job)
        })
        .collect()
}

fn apply(op: char, a: i64, b: i64) -> i64 {
    match op {
        '+' => a + b,
        '-' => a - b,
        '*' => a * b,
        _ => a / b,
    }
}

/// The value a monkey yells, or `None` when it depends on `humn`.
fn yell(monkeys: &Monkeys, name: &str, human_unknown: bool) -> Option<i64> {
    if human_unknown && name == "humn" {
        return None;
    }

    match monkeys[name] {
        Job::Number(n) => Some(n),
        Job::Op(a, op, b) => Some(apply(
            op,
            yell(monkeys, a, human_unknown)?,
            yell(monkeys, b, human_unknown)?,
        )),
    }
}

/// What `humn` must yell so that `name` yells `target`.
fn solve_for_human(monkeys: &Monkeys, name: &str, target: i64) -> i64 {
    if name == "humn" {
        return target;
    }

    let Job::Op(a, op, b) = monkeys[name] else {
        unreachable!()
    };

    match (yell(monkeys, a, true), yell(monkeys, b, true)) {
        (None, Some(b)) => {
            let a_target = match op {
                '+' => target - b,
                '-' => target + b,
                '*' => target / b,
                _ => target * b,
            };
            solve_for_human(monkeys, a, a_target)
        }
        (Some(a), None) => {
            let b_target = match op {
                '+' => target - a,
                '-' => a - target,
                '*' => target / a,
                _ => a / target,
            };
            solve_for_human(monkeys, b, b_target)
        }
        _ => unreachable!(),
    }
}

fn solve(input: &str) -> i64 {
    yell(&parse(input), "root", false).unwrap()
}

fn bonus(input: &str) -> i64 {
    let monkeys = parse(input);
    let Job::Op(a, _, b) = monkeys["root"] else {
        unreachable!()
    };

    match (yell(&monkeys, a, true), yell(&monkeys, b, true)) {
        (None, Some(target)) => solve_for_human(&monkeys, a, target),
        (Some(target), None) => solve_for_human(&monkeys, b, target),
        _ => unreachable!(),
    }
}

#[test]
fn test() {
    let example_input = "
root: pppw + sjmn
dbpl: 5
cczh: sllz + lgvd
zczc: 2
ptdq: humn - dvpt
dvpt: 3
lfqf: 4
humn: 5
ljgn: 2
sjmn: drzm * dbpl
sllz: 4
pppw: cczh / lfqf
lgvd: ljgn * ptdq
drzm: hmdt - zczc
hmdt: 32
";

    assert_eq!(solve(example_input), 152);
    assert_eq!(bonus(example_input), 301);
}
