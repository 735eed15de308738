use aoc_harness::time;

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

struct Move {
    count: usize,
    from: usize,
    to: usize,
}

fn parse(input: &str) -> (Vec<Vec<char>>, Vec<Move>) {
    let (drawing, moves) = input.trim_matches('\n').split_once("\n\n").unwrap();

    let mut lines = drawing.lines().rev();
    let n = lines.next().unwrap().split_whitespace().count();

    let mut stacks = vec![vec![]; n];
    for line in lines {
        let line = line.as_bytes();
        for (i, stack) in stacks.iter_mut().enumerate() {
            match line.get(1 + 4 * i) {
                Some(&c) if c.is_ascii_uppercase() => stack.push(c as char),
                _ => {}
            }
        }
    }

    let moves = moves
        .lines()
        .map(|line| {
            let n = line
                .split_whitespace()
                .filter_map(|w| w.parse().ok())
                .collect::<Vec<usize>>();

            Move {
                count: n[0],
                from: n[1] - 1,
                to: n[2] - 1,
            }
        })
        .collect();

    (stacks, moves)
}

fn operate(input: &str, in_bulk: bool) -> String {
    let (mut stacks, moves) = parse(input);

    for Move { count, from, to } in moves {
        let at = stacks[from].len() - count;
        let mut crates = stacks[from].split_off(at);
        if !in_bulk {
            crates.reverse();
        }
        stacks[to].extend(crates);
    }

    stacks.iter().filter_map(|s| s.last()).collect()
}

fn solve(input: &str) -> String {
    operate(input, false)
}

fn bonus(input: &str) -> String {
    operate(input, true)
}

#[test]
fn test() {
    let example_input = [
        "    [D]    ",
        "[N] [C]    ",
        "[Z] [M] [P]",
        " 1   2   3 ",
        "",
        "move 1 from 2 to 1",
        "move 3 from 1 to 3",
        "move 2 from 2 to 1",
        "move 1 from 1 to 2",
    ]
    .join("\n");

    assert_eq!(solve(&example_input), "CMZ");
    assert_eq!(bonus(&example_input), "MCD");
}
