use aoc_harness::time;
use fxhash::FxHashSet;
use regex::Regex;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 14)?;

    time(|| {
        println!("First part: {}", solve(&input, 101, 103));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input, 101, 103));
    });

    Ok(())
}

#[derive(Debug, Clone, Copy)]
struct Robot {
    p: (i64, i64),
    v: (i64, i64),
}

impl Robot {
    fn at(&self, t: i64, w: i64, h: i64) -> (i64, i64) {
        (
            (self.p.0 + self.v.0 * t).rem_euclid(w),
            (self.p.1 + self.v.1 * t).rem_euclid(h),
        )
    }
}

fn parse(input: &str) -> Vec<Robot> {
    let re = Regex::new(r"p=(-?\d+),(-?\d+) v=(-?\d+),(-?\d+)").unwrap();

    re.captures_iter(input)
        .map(|cap| {
            let n = |i: usize| cap[i].parse::<i64>().unwrap();
            Robot {
                p: (n(1), n(2)),
                v: (n(3), n(4)),
            }
        })
        .collect()
}

fn solve(input: &str, w: i64, h: i64) -> usize {
    let mut quadrants = [0; 4];

    for robot in parse(input) {
        let (x, y) = robot.at(100, w, h);
        if x == w / 2 || y == h / 2 {
            continue;
        }
        quadrants[(x > w / 2) as usize + 2 * (y > h / 2) as usize] += 1;
    }

    quadrants.iter().product()
}

/// The picture shows up the first time no two robots share a tile.
fn bonus(input: &str, w: i64, h: i64) -> i64 {
    let robots = parse(input);

    (0..w * h)
        .find(|&t| {
            let mut seen = FxHashSet::default();
            robots.iter().all(|r| seen.insert(r.at(t, w, h)))
        })
        .unwrap()
}

#[test]
fn test() {
    let example_input = "
p=0,4 v=3,-3
p=6,3 v=-1,-3
p=10,3 v=-1,2
p=2,0 v=2,-1
p=0,0 v=1,3
p=3,0 v=-2,-2
p=7,6 v=-1,-3
p=3,0 v=-1,-2
p=9,3 v=2,3
p=7,3 v=-1,2
p=2,4 v=2,-3
p=9,5 v=-3,-3
";

    assert_eq!(solve(example_input, 11, 7), 12);
    assert_eq!(bonus(example_input, 11, 7), 1);
}
