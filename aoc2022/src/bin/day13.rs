use std::cmp::Ordering;

use aoc_harness::time;
use itertools::Itertools;

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

#[derive(Debug, Clone, PartialEq, Eq)]
enum Packet {
    Int(u32),
    List(Vec<Packet>),
}

impl Ord for Packet {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Packet::Int(a), Packet::Int(b)) => a.cmp(b),
            (Packet::List(a), Packet::List(b)) => a.cmp(b),
            (Packet::Int(a), list) => Packet::List(vec![Packet::Int(*a)]).cmp(list),
            (list, Packet::Int(b)) => list.cmp(&Packet::List(vec![Packet::Int(*b)])),
        }
    }
}

impl PartialOrd for Packet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn parse_packet(s: &[u8], i: &mut usize) -> Packet {
    if s[*i] == b'[' {
        *i += 1;
        let mut items = vec![];
        while s[*i] != b']' {
            items.push(parse_packet(s, i));
            if s[*i] == b',' {
                *i += 1;
            }
        }
        *i += 1;
        return Packet::List(items);
    }

    let mut n = 0;
    while s[*i].is_ascii_digit() {
        n = n * 10 + (s[*i] - b'0') as u32;
        *i += 1;
    }
    Packet::Int(n)
}

fn packets(input: &str) -> Vec<Packet> {
    input
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| parse_packet(line.as_bytes(), &mut 0))
        .collect()
}

fn solve(input: &str) -> usize {
    packets(input)
        .iter()
        .tuples()
        .enumerate()
        .filter(|(_, (a, b))| a < b)
        .map(|(i, _)| i + 1)
        .sum()
}

fn bonus(input: &str) -> usize {
    let dividers = packets("[[2]]\n[[6]]");
    let mut all = packets(input);
    all.extend(dividers.iter().cloned());
    all.sort();

    dividers
        .iter()
        .map(|d| all.iter().position(|p| p == d).unwrap() + 1)
        .product()
}

#[test]
fn test() {
    let example_input = "
[1,1,3,1,1]
[1,1,5,1,1]

[[1],[2,3,4]]
[[1],4]

[9]
[[8,7,6]]

[[4,4],4,4]
[[4,4],4,4,4]

[7,7,7,7]
[7,7,7]

[]
[3]

[[[]]]
[[]]

[1,[2,[3,[4,[5,6,7]]]],8,9]
[1,[2,[3,[4,[5,6,0]]]],8,9]
";

    assert_eq!(solve(example_input), 13);
    assert_eq!(bonus(example_input), 140);
}
