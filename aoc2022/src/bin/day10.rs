use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 10)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus:\n{}", bonus(&input));
    });

    Ok(())
}

/// The value of X during each cycle, starting at cycle 1.
fn register(input: &str) -> Vec<i64> {
    let mut x = 1;
    let mut during = vec![];

    for line in input.trim().lines() {
        match line.trim().split_once(' ') {
            Some(("addx", n)) => {
                during.extend([x, x]);
                x += n.parse::<i64>().unwrap();
            }
            _ => during.push(x),
        }
    }

    during
}

fn solve(input: &str) -> i64 {
    let x = register(input);

    (20..=220)
        .step_by(40)
        .map(|cycle| cycle as i64 * x[cycle - 1])
        .sum()
}

fn bonus(input: &str) -> String {
    register(input)
        .chunks(40)
        .take(6)
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(col, &x)| if (col as i64 - x).abs() <= 1 { '#' } else { '.' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test() {
    assert_eq!(register("noop\naddx 3\naddx -5"), vec![1, 1, 1, 4, 4]);

    let idle = "noop\n".repeat(240);
    assert_eq!(solve(&idle), 720);
    assert_eq!(
        bonus(&idle),
        vec![format!("###{}", ".".repeat(37)); 6].join("\n")
    );

    let climbing = "addx 2\n".repeat(120);
    assert_eq!(solve(&climbing), 113680);
}
