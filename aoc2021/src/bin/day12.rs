use aoc_harness::time;
use fxhash::FxHashMap;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 12)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

type Caves<'a> = FxHashMap<&'a str, Vec<&'a str>>;

fn parse(input: &str) -> Caves {
    let mut caves: Caves = FxHashMap::default();
    for line in input.trim().lines() {
        let (a, b) = line.trim().split_once('-').unwrap();
        caves.entry(a).or_default().push(b);
        caves.entry(b).or_default().push(a);
    }
    caves
}

fn is_small(cave: &str) -> bool {
    cave.chars().all(|c| c.is_ascii_lowercase())
}

fn count_paths<'a>(
    caves: &Caves<'a>,
    at: &'a str,
    path: &mut Vec<&'a str>,
    twice_left: bool,
) -> usize {
    if at == "end" {
        return 1;
    }

    let mut total = 0;
    for &next in &caves[at] {
        if next == "start" {
            continue;
        }

        let revisit = is_small(next) && path.contains(&next);
        if revisit && !twice_left {
            continue;
        }

        path.push(next);
        total += count_paths(caves, next, path, twice_left && !revisit);
        path.pop();
    }

    total
}

fn solve(input: &str) -> usize {
    count_paths(&parse(input), "start", &mut vec!["start"], false)
}

fn bonus(input: &str) -> usize {
    count_paths(&parse(input), "start", &mut vec!["start"], true)
}

#[test]
fn test() {
    let example_input = "
start-A
start-b
A-c
A-b
b-d
A-end
b-end
";

    assert_eq!(solve(example_input), 10);
    assert_eq!(bonus(example_input), 36);

    let larger = "
dc-end
HN-start
start-kj
dc-start
dc-HN
LN-dc
HN-end
kj-sa
kj-HN
kj-dc
";

    assert_eq!(solve(larger), 19);
    assert_eq!(bonus(larger), 103);
}
