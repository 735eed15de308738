use std::ops::RangeInclusive;

use aoc_harness::time;
use fxhash::FxHashMap;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 16)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

struct Field<'a> {
    name: &'a str,
    ranges: [RangeInclusive<u64>; 2],
}

impl Field<'_> {
    fn accepts(&self, value: u64) -> bool {
        self.ranges.iter().any(|r| r.contains(&value))
    }
}

struct Notes<'a> {
    fields: Vec<Field<'a>>,
    mine: Vec<u64>,
    nearby: Vec<Vec<u64>>,
}

fn parse_ticket(line: &str) -> Vec<u64> {
    line.trim()
        .split(',')
        .map(|n| n.parse().unwrap())
        .collect()
}

fn parse(input: &str) -> Notes {
    let mut sections = input.trim().split("\n\n");

    let parse_range = |s: &str| {
        let (lo, hi) = s.trim().split_once('-').unwrap();
        lo.parse::<u64>().unwrap()..=hi.parse::<u64>().unwrap()
    };

    let fields = sections
        .next()
        .unwrap()
        .lines()
        .map(|line| {
            let (name, ranges) = line.trim().split_once(": ").unwrap();
            let (a, b) = ranges.split_once(" or ").unwrap();
            Field {
                name,
                ranges: [parse_range(a), parse_range(b)],
            }
        })
        .collect();

    let mine = parse_ticket(sections.next().unwrap().lines().nth(1).unwrap());

    let nearby = sections
        .next()
        .unwrap()
        .lines()
        .skip(1)
        .map(parse_ticket)
        .collect();

    Notes {
        fields,
        mine,
        nearby,
    }
}

fn solve(input: &str) -> u64 {
    let notes = parse(input);

    notes
        .nearby
        .iter()
        .flatten()
        .filter(|&&v| !notes.fields.iter().any(|f| f.accepts(v)))
        .sum()
}

/// My ticket, keyed by field name, once every field has found its column.
fn resolve_fields(input: &str) -> FxHashMap<&str, u64> {
    let notes = parse(input);

    let valid = notes
        .nearby
        .iter()
        .filter(|t| t.iter().all(|&v| notes.fields.iter().any(|f| f.accepts(v))))
        .collect::<Vec<_>>();

    // candidates[f] = columns field f could be
    let mut candidates = notes
        .fields
        .iter()
        .map(|f| {
            (0..notes.mine.len())
                .filter(|&col| valid.iter().all(|t| f.accepts(t[col])))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let mut resolved = FxHashMap::default();

    while let Some(f) = candidates.iter().position(|c| c.len() == 1) {
        let col = candidates[f][0];
        resolved.insert(notes.fields[f].name, notes.mine[col]);

        for c in candidates.iter_mut() {
            c.retain(|&other| other != col);
        }
    }

    resolved
}

fn bonus(input: &str) -> u64 {
    resolve_fields(input)
        .into_iter()
        .filter(|(name, _)| name.starts_with("departure"))
        .map(|(_, value)| value)
        .product()
}

#[test]
fn test() {
    let example_input = "
class: 1-3 or 5-7
row: 6-11 or 33-44
seat: 13-40 or 45-50

your ticket:
7,1,14

nearby tickets:
7,3,47
40,4,50
55,2,20
38,6,12
";

    assert_eq!(solve(example_input), 71);

    let example_input_2 = "
class: 0-1 or 4-19
row: 0-5 or 8-19
seat: 0-13 or 16-19

your ticket:
11,12,13

nearby tickets:
3,9,18
15,1,5
5,14,9
";

    let fields = resolve_fields(example_input_2);
    assert_eq!(fields["class"], 12);
    assert_eq!(fields["row"], 11);
    assert_eq!(fields["seat"], 13);
}
