use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 18)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

type Dir = (i64, i64);

const UP: Dir = (0, -1);
const RIGHT: Dir = (1, 0);
const DOWN: Dir = (0, 1);
const LEFT: Dir = (-1, 0);

/// Twice the signed area of a polygon given by its corners.
fn double_area(poly: &[(i64, i64)]) -> i64 {
    poly.iter()
        .zip(poly.iter().cycle().skip(1))
        .map(|(a, b)| a.0 * b.1 - b.0 * a.1)
        .sum()
}

/// Cubic metres dug out, counting the trench itself: the interior points
/// (by Pick's theorem) plus the boundary points.
fn lagoon(plan: impl Iterator<Item = (Dir, i64)>) -> i64 {
    let (mut x, mut y) = (0, 0);
    let mut corners = vec![];
    let mut boundary = 0;

    for ((dx, dy), steps) in plan {
        x += dx * steps;
        y += dy * steps;
        boundary += steps;
        corners.push((x, y));
    }

    let area = double_area(&corners).abs() / 2;
    area + boundary / 2 + 1
}

fn solve(input: &str) -> i64 {
    lagoon(input.trim().lines().map(|line| {
        let mut parts = line.split_whitespace();
        let dir = match parts.next().unwrap() {
            "U" => UP,
            "R" => RIGHT,
            "D" => DOWN,
            _ => LEFT,
        };
        (dir, parts.next().unwrap().parse().unwrap())
    }))
}

fn bonus(input: &str) -> i64 {
    lagoon(input.trim().lines().map(|line| {
        let colour = line.split_whitespace().last().unwrap();
        let hex = colour.trim_matches(|c| c == '(' || c == ')' || c == '#');
        let steps = i64::from_str_radix(&hex[0..5], 16).unwrap();
        let dir = match &hex[5..6] {
            "0" => RIGHT,
            "1" => DOWN,
            "2" => LEFT,
            _ => UP,
        };
        (dir, steps)
    }))
}

#[test]
fn test() {
    let example_input = "
R 6 (#70c710)
D 5 (#0dc571)
L 2 (#5713f0)
D 2 (#d2c081)
R 2 (#59c680)
D 2 (#411b91)
L 5 (#8ceee2)
U 2 (#caa173)
L 1 (#1b58a2)
U 2 (#caa171)
R 2 (#7807d2)
U 3 (#a77fa3)
L 2 (#015232)
U 2 (#7a21e3)
";

    assert_eq!(solve(example_input), 62);
    assert_eq!(bonus(example_input), 952408144115);

    assert_eq!(double_area(&[(0, 0), (2, 0), (2, 2), (0, 2)]), 8);
}
