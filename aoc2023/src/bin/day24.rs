use aoc_harness::time;
use rayon::prelude::*;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 24)?;

    time(|| {
        println!(
            "First part: {}",
            solve(&input, 200000000000000.0, 400000000000000.0)
        );
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

type V3 = (i128, i128, i128);

#[derive(Debug, Clone, Copy)]
struct Hailstone {
    pos: V3,
    vel: V3,
}

fn parse(input: &str) -> Vec<Hailstone> {
    let parse_vec = |s: &str| {
        let mut it = s.split(',').map(|s| s.trim().parse::<i128>().unwrap());
        (it.next().unwrap(), it.next().unwrap(), it.next().unwrap())
    };

    input
        .trim()
        .lines()
        .map(|line| {
            let (pos, vel) = line.split_once(" @ ").unwrap();
            Hailstone {
                pos: parse_vec(pos),
                vel: parse_vec(vel),
            }
        })
        .collect()
}

fn cross((ax, ay): (i128, i128), (bx, by): (i128, i128)) -> i128 {
    ax * by - ay * bx
}

fn solve(input: &str, min: f64, max: f64) -> usize {
    let hailstones = parse(input);
    let mut num_found = 0;

    for (i, a) in hailstones.iter().enumerate() {
        for b in &hailstones[i + 1..] {
            let va = (a.vel.0, a.vel.1);
            let vb = (b.vel.0, b.vel.1);
            let d = cross(va, vb);
            if d == 0 {
                // parallel
                continue;
            }

            let dp = (b.pos.0 - a.pos.0, b.pos.1 - a.pos.1);
            let t = cross(dp, vb) as f64 / d as f64;
            let s = cross(dp, va) as f64 / d as f64;
            if t < 0.0 || s < 0.0 {
                continue;
            }

            let x = a.pos.0 as f64 + t * a.vel.0 as f64;
            let y = a.pos.1 as f64 + t * a.vel.1 as f64;
            if min <= x && x <= max && min <= y && y <= max {
                num_found += 1;
            }
        }
    }

    num_found
}

/// With the rock's horizontal velocity fixed, every hailstone's path
/// relative to the rock passes through the rock's starting point. Try each
/// candidate velocity and check that this holds exactly, then recover the
/// vertical component from the two hit times.
fn throw(hailstones: &[Hailstone], (vx, vy): (i128, i128)) -> Option<V3> {
    let rel = |h: &Hailstone| (h.vel.0 - vx, h.vel.1 - vy);

    let a = &hailstones[0];
    let da = rel(a);
    let (b, db, d) = hailstones[1..]
        .iter()
        .map(|b| (b, rel(b), cross(da, rel(b))))
        .find(|&(_, _, d)| d != 0)?;

    let dp = (b.pos.0 - a.pos.0, b.pos.1 - a.pos.1);
    let (tn, sn) = (cross(dp, db), cross(dp, da));
    if tn % d != 0 || sn % d != 0 {
        return None;
    }

    let (t, s) = (tn / d, sn / d);
    let (px, py) = (a.pos.0 + t * da.0, a.pos.1 + t * da.1);

    let on_line = |h: &Hailstone| cross((px - h.pos.0, py - h.pos.1), rel(h)) == 0;
    if t == s || !hailstones.iter().all(on_line) {
        return None;
    }

    let num = a.pos.2 + t * a.vel.2 - b.pos.2 - s * b.vel.2;
    if num % (t - s) != 0 {
        return None;
    }

    let vz = num / (t - s);
    let pz = a.pos.2 + t * (a.vel.2 - vz);

    let hits = |h: &Hailstone| {
        let (dx, dy) = rel(h);
        let time = if dx != 0 {
            ((px - h.pos.0) % dx == 0).then(|| (px - h.pos.0) / dx)
        } else if dy != 0 {
            ((py - h.pos.1) % dy == 0).then(|| (py - h.pos.1) / dy)
        } else {
            return true;
        };

        time.map_or(false, |time| pz + time * vz == h.pos.2 + time * h.vel.2)
    };

    hailstones.iter().all(hits).then_some((px, py, pz))
}

const MAX_SPEED: i64 = 500;

fn bonus(input: &str) -> i128 {
    let hailstones = parse(input);

    let (x, y, z) = (-MAX_SPEED..=MAX_SPEED)
        .into_par_iter()
        .find_map_any(|vx| {
            (-MAX_SPEED..=MAX_SPEED).find_map(|vy| throw(&hailstones, (vx as i128, vy as i128)))
        })
        .unwrap();

    x + y + z
}

#[test]
fn test() {
    let example_input = "
19, 13, 30 @ -2,  1, -2
18, 19, 22 @ -1, -1, -2
20, 25, 34 @ -2, -2, -4
12, 31, 28 @ -1, -2, -1
20, 19, 15 @  1, -5, -3
";

    assert_eq!(solve(example_input, 7.0, 27.0), 2);
    assert_eq!(bonus(example_input), 47);
}
