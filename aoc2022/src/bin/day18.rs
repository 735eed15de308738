use aoc_harness::time;
use fxhash::FxHashSet;

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

type Cube = (i32, i32, i32);

fn parse(input: &str) -> FxHashSet<Cube> {
    input
        .trim()
        .lines()
        .map(|line| {
            let n = line
                .trim()
                .split(',')
                .map(|n| n.parse().unwrap())
                .collect::<Vec<i32>>();
            (n[0], n[1], n[2])
        })
        .collect()
}

fn sides((x, y, z): Cube) -> [Cube; 6] {
    [
        (x - 1, y, z),
        (x + 1, y, z),
        (x, y - 1, z),
        (x, y + 1, z),
        (x, y, z - 1),
        (x, y, z + 1),
    ]
}

fn solve(input: &str) -> usize {
    let cubes = parse(input);

    cubes
        .iter()
        .flat_map(|&c| sides(c))
        .filter(|side| !cubes.contains(side))
        .count()
}

fn bonus(input: &str) -> usize {
    let cubes = parse(input);

    let lo = cubes.iter().map(|c| c.0.min(c.1).min(c.2)).min().unwrap() - 1;
    let hi = cubes.iter().map(|c| c.0.max(c.1).max(c.2)).max().unwrap() + 1;
    let inside = |v: i32| (lo..=hi).contains(&v);

    // flood the air around the droplet, counting the faces it bumps into
    let mut outside = FxHashSet::default();
    let mut stack = vec![(lo, lo, lo)];
    let mut faces = 0;

    while let Some(c) = stack.pop() {
        if !outside.insert(c) {
            continue;
        }

        for n in sides(c) {
            if !inside(n.0) || !inside(n.1) || !inside(n.2) {
                continue;
            }

            if cubes.contains(&n) {
                faces += 1;
            } else if !outside.contains(&n) {
                stack.push(n);
            }
        }
    }

    faces
}

#[test]
fn test() {
    assert_eq!(solve("1,1,1\n2,1,1"), 10);

    let example_input = "
2,2,2
1,2,2
3,2,2
2,1,2
2,3,2
2,2,1
2,2,3
2,2,4
2,2,6
1,2,5
3,2,5
2,1,5
2,3,5
";

    assert_eq!(solve(example_input), 64);
    assert_eq!(bonus(example_input), 58);
}
