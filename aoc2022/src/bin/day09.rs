use aoc_harness::time;
use fxhash::FxHashSet;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 9)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

fn simulate(input: &str, knots: usize) -> usize {
    let mut rope = vec![(0i32, 0i32); knots];
    let mut visited = FxHashSet::default();
    visited.insert((0, 0));

    for line in input.trim().lines() {
        let (dir, n) = line.trim().split_once(' ').unwrap();
        let (dx, dy) = match dir {
            "U" => (0, -1),
            "D" => (0, 1),
            "L" => (-1, 0),
            _ => (1, 0),
        };

        for _ in 0..n.parse::<usize>().unwrap() {
            rope[0].0 += dx;
            rope[0].1 += dy;

            for i in 1..knots {
                let (hx, hy) = rope[i - 1];
                let (tx, ty) = &mut rope[i];
                if (hx - *tx).abs() > 1 || (hy - *ty).abs() > 1 {
                    *tx += (hx - *tx).signum();
                    *ty += (hy - *ty).signum();
                }
            }

            visited.insert(rope[knots - 1]);
        }
    }

    visited.len()
}

fn solve(input: &str) -> usize {
    simulate(input, 2)
}

fn bonus(input: &str) -> usize {
    simulate(input, 10)
}

#[test]
fn test() {
    let example_input = "
R 4
U 4
L 3
D 1
R 4
D 1
L 5
R 2
";

    assert_eq!(solve(example_input), 13);
    assert_eq!(bonus(example_input), 1);

    let larger = "
R 5
U 8
L 8
D 3
R 17
D 10
L 25
U 20
";

    assert_eq!(bonus(larger), 36);
}
