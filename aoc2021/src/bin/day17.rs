use aoc_harness::time;
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

struct Target {
    x: (i32, i32),
    y: (i32, i32),
}

fn parse(input: &str) -> Target {
    let n = Regex::new(r"-?\d+")
        .unwrap()
        .find_iter(input)
        .map(|m| m.as_str().parse().unwrap())
        .collect::<Vec<i32>>();

    Target {
        x: (n[0], n[1]),
        y: (n[2], n[3]),
    }
}

/// Highest point of the trajectory, if it ever ends up inside the target.
fn launch(target: &Target, (mut vx, mut vy): (i32, i32)) -> Option<i32> {
    let (mut x, mut y, mut top) = (0, 0, 0);

    while x <= target.x.1 && y >= target.y.0 {
        x += vx;
        y += vy;
        top = top.max(y);

        if (target.x.0..=target.x.1).contains(&x) && (target.y.0..=target.y.1).contains(&y) {
            return Some(top);
        }

        vx -= vx.signum();
        vy -= 1;
    }

    None
}

fn hits(target: &Target) -> Vec<i32> {
    let bound = target.y.0.abs().max(target.y.1.abs());

    (0..=target.x.1)
        .flat_map(|vx| (-bound..=bound).map(move |vy| (vx, vy)))
        .filter_map(|v| launch(target, v))
        .collect()
}

fn solve(input: &str) -> i32 {
    hits(&parse(input)).into_iter().max().unwrap()
}

fn bonus(input: &str) -> usize {
    hits(&parse(input)).len()
}

#[test]
fn test() {
    let example_input = "target area: x=20..30, y=-10..-5";

    assert_eq!(solve(example_input), 45);
    assert_eq!(bonus(example_input), 112);
}
