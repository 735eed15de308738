use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 12)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

fn parse(input: &str) -> Vec<(char, i32)> {
    input
        .trim()
        .lines()
        .map(|line| {
            let line = line.trim();
            (line.chars().next().unwrap(), line[1..].parse().unwrap())
        })
        .collect()
}

// (east, north), counter-clockwise quarter turns
fn rotate_left((e, n): (i32, i32), degrees: i32) -> (i32, i32) {
    (0..(degrees / 90).rem_euclid(4)).fold((e, n), |(e, n), _| (-n, e))
}

/// `target` is what N/E/S/W move: the ship itself, or its waypoint.
fn navigate(input: &str, waypoint: (i32, i32), move_waypoint: bool) -> i32 {
    let mut ship = (0, 0);
    let mut wp = waypoint;

    for (action, value) in parse(input) {
        let target = if move_waypoint { &mut wp } else { &mut ship };

        match action {
            'N' => target.1 += value,
            'S' => target.1 -= value,
            'E' => target.0 += value,
            'W' => target.0 -= value,
            'L' => wp = rotate_left(wp, value),
            'R' => wp = rotate_left(wp, -value),
            'F' => {
                ship.0 += wp.0 * value;
                ship.1 += wp.1 * value;
            }
            _ => unreachable!(),
        }
    }

    ship.0.abs() + ship.1.abs()
}

fn solve(input: &str) -> i32 {
    // heading east, as a unit "waypoint"
    navigate(input, (1, 0), false)
}

fn bonus(input: &str) -> i32 {
    navigate(input, (10, 1), true)
}

#[test]
fn test() {
    let example_input = "
F10
N3
F7
R90
F11
";

    assert_eq!(solve(example_input), 25);
    assert_eq!(bonus(example_input), 286);
}
