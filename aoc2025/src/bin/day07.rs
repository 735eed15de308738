use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 7)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

/// Sends the beam down the manifold, returning how often it was split and
/// in how many timelines it reaches the bottom.
fn run(input: &str) -> (usize, u64) {
    let rows = input
        .trim()
        .lines()
        .map(|l| l.trim().as_bytes())
        .collect::<Vec<_>>();

    let mut timelines = vec![0u64; rows[0].len()];
    let start = rows[0].iter().position(|&c| c == b'S').unwrap();
    timelines[start] = 1;

    let mut splits = 0;
    for row in &rows[1..] {
        let mut next = vec![0u64; timelines.len()];
        for (x, &n) in timelines.iter().enumerate() {
            if n == 0 {
                continue;
            }

            if row[x] == b'^' {
                splits += 1;
                if x > 0 {
                    next[x - 1] += n;
                }
                if x + 1 < next.len() {
                    next[x + 1] += n;
                }
            } else {
                next[x] += n;
            }
        }
        timelines = next;
    }

    (splits, timelines.iter().sum())
}

fn solve(input: &str) -> usize {
    run(input).0
}

fn bonus(input: &str) -> u64 {
    run(input).1
}

#[test]
fn test() {
    let example_input = "
.......S.......
...............
.......^.......
...............
......^.^......
...............
.....^.^.^.....
...............
....^.^...^....
...............
...^.^...^.^...
...............
..^...^.....^..
...............
.^.^.^.^.^...^.
...............
";

    assert_eq!(solve(example_input), 21);
    assert_eq!(bonus(example_input), 40);
}
