use aoc_harness::time;
use rayon::prelude::*;
use regex::Regex;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 15)?;

    time(|| {
        println!("First part: {}", solve(&input, 2000000));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input, 4000000));
    });

    Ok(())
}

struct Sensor {
    pos: (i64, i64),
    beacon: (i64, i64),
    range: i64,
}

fn parse(input: &str) -> Vec<Sensor> {
    let re = Regex::new(r"-?\d+").unwrap();

    input
        .trim()
        .lines()
        .map(|line| {
            let n = re
                .find_iter(line)
                .map(|m| m.as_str().parse().unwrap())
                .collect::<Vec<i64>>();

            Sensor {
                pos: (n[0], n[1]),
                beacon: (n[2], n[3]),
                range: (n[0] - n[2]).abs() + (n[1] - n[3]).abs(),
            }
        })
        .collect()
}

/// The merged, inclusive x ranges the sensors cover on row `y`.
fn coverage(sensors: &[Sensor], y: i64) -> Vec<(i64, i64)> {
    let mut ranges = sensors
        .iter()
        .filter_map(|s| {
            let reach = s.range - (s.pos.1 - y).abs();
            (reach >= 0).then_some((s.pos.0 - reach, s.pos.0 + reach))
        })
        .collect::<Vec<_>>();

    ranges.sort_unstable();

    let mut merged: Vec<(i64, i64)> = vec![];
    for (lo, hi) in ranges {
        match merged.last_mut() {
            Some(last) if lo <= last.1 + 1 => last.1 = last.1.max(hi),
            _ => merged.push((lo, hi)),
        }
    }

    merged
}

fn solve(input: &str, row: i64) -> i64 {
    let sensors = parse(input);

    let covered: i64 = coverage(&sensors, row)
        .iter()
        .map(|(lo, hi)| hi - lo + 1)
        .sum();

    let mut beacons = sensors
        .iter()
        .map(|s| s.beacon)
        .filter(|b| b.1 == row)
        .collect::<Vec<_>>();
    beacons.sort_unstable();
    beacons.dedup();

    covered - beacons.len() as i64
}

fn bonus(input: &str, limit: i64) -> i64 {
    let sensors = parse(input);

    let (x, y) = (0..=limit)
        .into_par_iter()
        .find_map_any(|y| {
            let mut x = 0;
            for (lo, hi) in coverage(&sensors, y) {
                if lo > x {
                    break;
                }
                x = x.max(hi + 1);
            }
            (x <= limit).then_some((x, y))
        })
        .unwrap();

    x * 4000000 + y
}

#[test]
fn test() {
    let example_input = "
Sensor at x=2, y=18: closest beacon is at x=-2, y=15
Sensor at x=9, y=16: closest beacon is at x=10, y=16
Sensor at x=13, y=2: closest beacon is at x=15, y=3
Sensor at x=12, y=14: closest beacon is at x=10, y=16
Sensor at x=10, y=20: closest beacon is at x=10, y=16
Sensor at x=14, y=17: closest beacon is at x=10, y=16
Sensor at x=8, y=7: closest beacon is at x=2, y=10
Sensor at x=2, y=0: closest beacon is at x=2, y=10
Sensor at x=0, y=11: closest beacon is at x=2, y=10
Sensor at x=20, y=14: closest beacon is at x=25, y=17
Sensor at x=17, y=20: closest beacon is at x=21, y=22
Sensor at x=16, y=7: closest beacon is at x=15, y=3
Sensor at x=14, y=3: closest beacon is at x=15, y=3
Sensor at x=20, y=1: closest beacon is at x=15, y=3
";

    assert_eq!(solve(example_input, 10), 26);
    assert_eq!(bonus(example_input, 20), 56000011);
}
