use aoc_harness::time;
use fxhash::FxHashMap;

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

type Line = ((i32, i32), (i32, i32));

fn parse(input: &str) -> Vec<Line> {
    let point = |s: &str| -> (i32, i32) {
        let (x, y) = s.trim().split_once(',').unwrap();
        (x.parse().unwrap(), y.parse().unwrap())
    };

    input
        .trim()
        .lines()
        .map(|line| {
            let (a, b) = line.split_once(" -> ").unwrap();
            (point(a), point(b))
        })
        .collect()
}

fn overlaps(input: &str, diagonals: bool) -> usize {
    let mut covered: FxHashMap<(i32, i32), usize> = FxHashMap::default();

    for ((x1, y1), (x2, y2)) in parse(input) {
        if !diagonals && x1 != x2 && y1 != y2 {
            continue;
        }

        let (dx, dy) = ((x2 - x1).signum(), (y2 - y1).signum());
        let steps = (x2 - x1).abs().max((y2 - y1).abs());

        for i in 0..=steps {
            *covered.entry((x1 + i * dx, y1 + i * dy)).or_default() += 1;
        }
    }

    covered.values().filter(|&&n| n >= 2).count()
}

fn solve(input: &str) -> usize {
    overlaps(input, false)
}

fn bonus(input: &str) -> usize {
    overlaps(input, true)
}

#[test]
fn test() {
    let example_input = "
0,9 -> 5,9
8,0 -> 0,8
9,4 -> 3,4
2,2 -> 2,1
7,0 -> 7,4
6,4 -> 2,0
0,9 -> 2,9
3,4 -> 1,4
0,0 -> 8,8
5,5 -> 8,2
";

    assert_eq!(solve(example_input), 5);
    assert_eq!(bonus(example_input), 12);
}
