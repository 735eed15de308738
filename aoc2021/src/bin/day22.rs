use aoc_harness::time;
use regex::Regex;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 22)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

#[derive(Debug, Clone, Copy)]
struct Cuboid {
    min: [i64; 3],
    max: [i64; 3],
}

impl Cuboid {
    fn intersect(&self, other: &Cuboid) -> Option<Cuboid> {
        let mut min = [0; 3];
        let mut max = [0; 3];
        for i in 0..3 {
            min[i] = self.min[i].max(other.min[i]);
            max[i] = self.max[i].min(other.max[i]);
            if min[i] > max[i] {
                return None;
            }
        }
        Some(Cuboid { min, max })
    }

    fn volume(&self) -> i64 {
        (0..3).map(|i| self.max[i] - self.min[i] + 1).product()
    }
}

fn parse(input: &str) -> Vec<(bool, Cuboid)> {
    let re = Regex::new(r"-?\d+").unwrap();

    input
        .trim()
        .lines()
        .map(|line| {
            let n = re
                .find_iter(line)
                .map(|m| m.as_str().parse().unwrap())
                .collect::<Vec<i64>>();

            let cuboid = Cuboid {
                min: [n[0], n[2], n[4]],
                max: [n[1], n[3], n[5]],
            };

            (line.trim().starts_with("on"), cuboid)
        })
        .collect()
}

/// Every step adds its cuboid (when on) and cancels what it overlaps with a
/// cuboid of opposite sign, so the signed volumes always sum to what is lit.
fn reboot(steps: impl Iterator<Item = (bool, Cuboid)>) -> i64 {
    let mut signed: Vec<(i64, Cuboid)> = vec![];

    for (on, cuboid) in steps {
        let overlaps = signed
            .iter()
            .filter_map(|(sign, c)| c.intersect(&cuboid).map(|i| (-sign, i)))
            .collect::<Vec<_>>();

        signed.extend(overlaps);
        if on {
            signed.push((1, cuboid));
        }
    }

    signed.iter().map(|(sign, c)| sign * c.volume()).sum()
}

fn solve(input: &str) -> i64 {
    let region = Cuboid {
        min: [-50; 3],
        max: [50; 3],
    };

    reboot(
        parse(input)
            .into_iter()
            .filter_map(|(on, c)| c.intersect(&region).map(|c| (on, c))),
    )
}

fn bonus(input: &str) -> i64 {
    reboot(parse(input).into_iter())
}

#[test]
fn test() {
    let example_input = "
on x=10..12,y=10..12,z=10..12
on x=11..13,y=11..13,z=11..13
off x=9..11,y=9..11,z=9..11
on x=10..10,y=10..10,z=10..10
";

    assert_eq!(solve(example_input), 39);
    assert_eq!(bonus(example_input), 39);

    let wide = "
on x=-100..100,y=0..0,z=0..0
off x=-10..-1,y=-5..5,z=-5..5
";

    assert_eq!(solve(wide), 91);
    assert_eq!(bonus(wide), 191);
}
