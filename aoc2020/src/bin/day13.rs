use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 13)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

/// Bus ids with their offset in the schedule, skipping the `x`s.
fn buses(schedule: &str) -> Vec<(i128, i128)> {
    schedule
        .trim()
        .split(',')
        .enumerate()
        .filter(|&(_, id)| id != "x")
        .map(|(offset, id)| (offset as i128, id.parse().unwrap()))
        .collect()
}

fn solve(input: &str) -> i128 {
    let (depart, schedule) = input.trim().split_once('\n').unwrap();
    let depart = depart.trim().parse::<i128>().unwrap();

    buses(schedule)
        .into_iter()
        .map(|(_, id)| ((id - depart % id) % id, id))
        .min()
        .map(|(wait, id)| wait * id)
        .unwrap()
}

fn mod_inverse(a: i128, m: i128) -> i128 {
    let (mut old_r, mut r) = (a.rem_euclid(m), m);
    let (mut old_s, mut s) = (1i128, 0i128);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }

    old_s.rem_euclid(m)
}

// t ≡ -offset (mod id) for every bus; the ids are pairwise coprime
fn earliest_alignment(buses: &[(i128, i128)]) -> i128 {
    let product = buses.iter().map(|&(_, id)| id).product::<i128>();

    buses
        .iter()
        .map(|&(offset, id)| {
            let rest = product / id;
            (-offset).rem_euclid(id) * rest * mod_inverse(rest, id)
        })
        .sum::<i128>()
        .rem_euclid(product)
}

fn bonus(input: &str) -> i128 {
    let schedule = input.trim().lines().last().unwrap();
    earliest_alignment(&buses(schedule))
}

#[test]
fn test() {
    let example_input = "
939
7,13,x,x,59,x,31,19
";

    assert_eq!(solve(example_input), 295);
    assert_eq!(bonus(example_input), 1068781);

    assert_eq!(earliest_alignment(&buses("17,x,13,19")), 3417);
    assert_eq!(earliest_alignment(&buses("67,7,59,61")), 754018);
    assert_eq!(earliest_alignment(&buses("1789,37,47,1889")), 1202161486);
}
