use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 2)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

enum Command {
    Forward(i64),
    Down(i64),
    Up(i64),
}

impl From<&str> for Command {
    fn from(line: &str) -> Self {
        let (op, amount) = line.trim().split_once(' ').unwrap();
        let amount = amount.parse().unwrap();

        match op {
            "forward" => Command::Forward(amount),
            "down" => Command::Down(amount),
            "up" => Command::Up(amount),
            _ => unreachable!(),
        }
    }
}

fn commands(input: &str) -> impl Iterator<Item = Command> + '_ {
    input.trim().lines().map(Command::from)
}

fn solve(input: &str) -> i64 {
    let (pos, depth) = commands(input).fold((0, 0), |(pos, depth), cmd| match cmd {
        Command::Forward(n) => (pos + n, depth),
        Command::Down(n) => (pos, depth + n),
        Command::Up(n) => (pos, depth - n),
    });

    pos * depth
}

fn bonus(input: &str) -> i64 {
    let (pos, depth, _) = commands(input).fold((0, 0, 0), |(pos, depth, aim), cmd| match cmd {
        Command::Forward(n) => (pos + n, depth + aim * n, aim),
        Command::Down(n) => (pos, depth, aim + n),
        Command::Up(n) => (pos, depth, aim - n),
    });

    pos * depth
}

#[test]
fn test() {
    let example_input = "
forward 5
down 5
forward 8
up 3
down 8
forward 2
";

    assert_eq!(solve(example_input), 150);
    assert_eq!(bonus(example_input), 900);
}
