use aoc_harness::time;
use fxhash::FxHashMap;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 19)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

#[derive(Debug, Clone)]
enum Rule {
    Char(u8),
    Alt(Vec<Vec<usize>>),
}

fn parse_rule(s: &str) -> Rule {
    if let Some(quoted) = s.strip_prefix('"') {
        Rule::Char(quoted.as_bytes()[0])
    } else {
        Rule::Alt(
            s.split('|')
                .map(|seq| {
                    seq.split_whitespace()
                        .map(|n| n.parse().unwrap())
                        .collect()
                })
                .collect(),
        )
    }
}

fn parse(input: &str) -> (FxHashMap<usize, Rule>, Vec<&str>) {
    let (rules, messages) = input.trim().split_once("\n\n").unwrap();

    let rules = rules
        .lines()
        .map(|line| {
            let (id, rule) = line.trim().split_once(": ").unwrap();
            (id.parse().unwrap(), parse_rule(rule))
        })
        .collect();

    (rules, messages.lines().map(str::trim).collect())
}

/// All positions where matching `id` starting at `pos` could end. Rules
/// that loop still terminate because every step consumes a character.
fn ends(rules: &FxHashMap<usize, Rule>, id: usize, msg: &[u8], pos: usize) -> Vec<usize> {
    match &rules[&id] {
        Rule::Char(c) => {
            if msg.get(pos) == Some(c) {
                vec![pos + 1]
            } else {
                vec![]
            }
        }
        Rule::Alt(alternatives) => alternatives
            .iter()
            .flat_map(|seq| {
                seq.iter().fold(vec![pos], |positions, &sub| {
                    positions
                        .into_iter()
                        .flat_map(|p| ends(rules, sub, msg, p))
                        .collect()
                })
            })
            .collect(),
    }
}

fn count_matching(rules: &FxHashMap<usize, Rule>, messages: &[&str]) -> usize {
    messages
        .iter()
        .filter(|msg| ends(rules, 0, msg.as_bytes(), 0).contains(&msg.len()))
        .count()
}

fn solve(input: &str) -> usize {
    let (rules, messages) = parse(input);
    count_matching(&rules, &messages)
}

fn bonus(input: &str) -> usize {
    let (mut rules, messages) = parse(input);

    rules.insert(8, parse_rule("42 | 42 8"));
    rules.insert(11, parse_rule("42 31 | 42 11 31"));

    count_matching(&rules, &messages)
}

#[test]
fn test() {
    let example_input = r#"
0: 4 1 5
1: 2 3 | 3 2
2: 4 4 | 5 5
3: 4 5 | 5 4
4: "a"
5: "b"

ababbb
bababa
abbbab
aaabbb
aaaabbb
"#;

    assert_eq!(solve(example_input), 2);

    // 0 = 42+ then 42{n} 31{n}, so a^n b^m with n > m >= 1 once looping
    let looping = r#"
0: 8 11
8: 42
11: 42 31
42: "a"
31: "b"

aab
aaab
aabb
aaabb
ab
"#;

    assert_eq!(solve(looping), 1);
    assert_eq!(bonus(looping), 3);
}
