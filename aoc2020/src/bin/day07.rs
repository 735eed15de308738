use aoc_harness::time;
use fxhash::{FxHashMap, FxHashSet};
use regex::Regex;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 7)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

type Rules<'a> = FxHashMap<&'a str, Vec<(usize, &'a str)>>;

fn parse(input: &str) -> Rules {
    let re = Regex::new(r"(\d+) (\w+ \w+) bags?").unwrap();

    input
        .trim()
        .lines()
        .map(|line| {
            let (outer, inner) = line.trim().split_once(" bags contain ").unwrap();
            let contents = re
                .captures_iter(inner)
                .map(|caps| {
                    let n = caps[1].parse::<usize>().unwrap();
                    (n, caps.get(2).unwrap().as_str())
                })
                .collect::<Vec<_>>();

            (outer, contents)
        })
        .collect()
}

fn solve(input: &str) -> usize {
    let rules = parse(input);

    let mut containers: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
    for (&outer, contents) in &rules {
        for &(_, inner) in contents {
            containers.entry(inner).or_default().push(outer);
        }
    }

    let mut seen = FxHashSet::default();
    let mut todo = vec!["shiny gold"];

    while let Some(bag) = todo.pop() {
        for &outer in containers.get(bag).into_iter().flatten() {
            if seen.insert(outer) {
                todo.push(outer);
            }
        }
    }

    seen.len()
}

fn count_inside<'a>(
    rules: &Rules<'a>,
    bag: &'a str,
    memo: &mut FxHashMap<&'a str, usize>,
) -> usize {
    if let Some(&n) = memo.get(bag) {
        return n;
    }

    let n = rules[bag]
        .iter()
        .map(|&(k, inner)| k * (1 + count_inside(rules, inner, memo)))
        .sum();

    memo.insert(bag, n);
    n
}

fn bonus(input: &str) -> usize {
    let rules = parse(input);
    count_inside(&rules, "shiny gold", &mut FxHashMap::default())
}

#[test]
fn test() {
    let example_input = "
light red bags contain 1 bright white bag, 2 muted yellow bags.
dark orange bags contain 3 bright white bags, 4 muted yellow bags.
bright white bags contain 1 shiny gold bag.
muted yellow bags contain 2 shiny gold bags, 9 faded blue bags.
shiny gold bags contain 1 dark olive bag, 2 vibrant plum bags.
dark olive bags contain 3 faded blue bags, 4 dotted black bags.
vibrant plum bags contain 5 faded blue bags, 6 dotted black bags.
faded blue bags contain no other bags.
dotted black bags contain no other bags.
";

    assert_eq!(solve(example_input), 4);
    assert_eq!(bonus(example_input), 32);

    let example_input_2 = "
shiny gold bags contain 2 dark red bags.
dark red bags contain 2 dark orange bags.
dark orange bags contain 2 dark yellow bags.
dark yellow bags contain 2 dark green bags.
dark green bags contain 2 dark blue bags.
dark blue bags contain 2 dark violet bags.
dark violet bags contain no other bags.
";

    assert_eq!(bonus(example_input_2), 126);
}
