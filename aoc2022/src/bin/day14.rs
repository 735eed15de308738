use aoc_harness::time;
use fxhash::FxHashSet;
use itertools::Itertools;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 14)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

struct Cave {
    blocked: FxHashSet<(i32, i32)>,
    lowest_rock: i32,
}

fn parse(input: &str) -> Cave {
    let mut blocked = FxHashSet::default();

    for line in input.trim().lines() {
        let corners = line
            .trim()
            .split(" -> ")
            .map(|p| {
                let (x, y) = p.split_once(',').unwrap();
                (x.parse::<i32>().unwrap(), y.parse::<i32>().unwrap())
            })
            .collect_vec();

        for (&(x1, y1), &(x2, y2)) in corners.iter().tuple_windows() {
            for x in x1.min(x2)..=x1.max(x2) {
                for y in y1.min(y2)..=y1.max(y2) {
                    blocked.insert((x, y));
                }
            }
        }
    }

    let lowest_rock = blocked.iter().map(|&(_, y)| y).max().unwrap();
    Cave {
        blocked,
        lowest_rock,
    }
}

/// Drops one unit of sand from the source, returning where it comes to rest.
/// Without a floor, `None` means it fell into the abyss.
fn drop_sand(cave: &Cave, floor: bool) -> Option<(i32, i32)> {
    let (mut x, mut y) = (500, 0);

    loop {
        if y == cave.lowest_rock + 1 {
            return if floor { Some((x, y)) } else { None };
        }

        match [x, x - 1, x + 1]
            .into_iter()
            .find(|&nx| !cave.blocked.contains(&(nx, y + 1)))
        {
            Some(nx) => {
                x = nx;
                y += 1;
            }
            None => return Some((x, y)),
        }
    }
}

fn solve(input: &str) -> usize {
    let mut cave = parse(input);
    let mut rested = 0;

    while let Some(p) = drop_sand(&cave, false) {
        cave.blocked.insert(p);
        rested += 1;
    }

    rested
}

fn bonus(input: &str) -> usize {
    let mut cave = parse(input);
    let mut rested = 0;

    loop {
        let p = drop_sand(&cave, true).unwrap();
        cave.blocked.insert(p);
        rested += 1;

        if p == (500, 0) {
            return rested;
        }
    }
}

#[test]
fn test() {
    let example_input = "
498,4 -> 498,6 -> 496,6
503,4 -> 502,4 -> 502,9 -> 494,9
";

    assert_eq!(solve(example_input), 24);
    assert_eq!(bonus(example_input), 93);
}
