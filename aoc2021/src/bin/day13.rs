use aoc_harness::time;
use fxhash::FxHashSet;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 13)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus:\n{}", bonus(&input));
    });

    Ok(())
}

enum Fold {
    X(i32),
    Y(i32),
}

fn parse(input: &str) -> (FxHashSet<(i32, i32)>, Vec<Fold>) {
    let (dots, folds) = input.trim().split_once("\n\n").unwrap();

    let dots = dots
        .lines()
        .map(|line| {
            let (x, y) = line.trim().split_once(',').unwrap();
            (x.parse().unwrap(), y.parse().unwrap())
        })
        .collect();

    let folds = folds
        .lines()
        .map(|line| {
            let (axis, at) = line.trim().trim_start_matches("fold along ").split_once('=').unwrap();
            let at = at.parse().unwrap();
            match axis {
                "x" => Fold::X(at),
                _ => Fold::Y(at),
            }
        })
        .collect();

    (dots, folds)
}

fn fold(dots: &FxHashSet<(i32, i32)>, fold: &Fold) -> FxHashSet<(i32, i32)> {
    dots.iter()
        .map(|&(x, y)| match *fold {
            Fold::X(at) if x > at => (2 * at - x, y),
            Fold::Y(at) if y > at => (x, 2 * at - y),
            _ => (x, y),
        })
        .collect()
}

fn solve(input: &str) -> usize {
    let (dots, folds) = parse(input);
    fold(&dots, &folds[0]).len()
}

/// The folded sheet, drawn with `#` and `.`.
fn bonus(input: &str) -> String {
    let (dots, folds) = parse(input);
    let dots = folds.iter().fold(dots, |dots, f| fold(&dots, f));

    let w = dots.iter().map(|d| d.0).max().unwrap();
    let h = dots.iter().map(|d| d.1).max().unwrap();

    (0..=h)
        .map(|y| {
            (0..=w)
                .map(|x| if dots.contains(&(x, y)) { '#' } else { '.' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test() {
    let example_input = "
6,10
0,14
9,10
0,3
10,4
4,11
6,0
6,12
4,1
0,13
10,12
3,4
3,0
8,4
1,10
2,14
8,10
9,0

fold along y=7
fold along x=5
";

    assert_eq!(solve(example_input), 17);
    assert_eq!(
        bonus(example_input),
        "#####
#...#
#...#
#...#
#####"
    );
}
