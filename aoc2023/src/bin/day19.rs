use aoc_harness::time;
use fxhash::FxHashMap;
use regex::Regex;

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

/// Ratings indexed by category: x, m, a, s.
type Part = [u64; 4];

#[derive(Debug, Clone, Copy)]
enum Cond {
    Less(usize, u64),
    Greater(usize, u64),
}

#[derive(Debug, Clone)]
struct Rule<'a> {
    cond: Option<Cond>,
    target: &'a str,
}

type Workflows<'a> = FxHashMap<&'a str, Vec<Rule<'a>>>;

fn category(c: &str) -> usize {
    "xmas".find(c).unwrap()
}

fn parse(input: &str) -> (Workflows, Vec<Part>) {
    let rule_re = Regex::new(r"^([xmas])([<>])(\d+):(\w+)$").unwrap();
    let part_re = Regex::new(r"x=(\d+),m=(\d+),a=(\d+),s=(\d+)").unwrap();

    let (workflows, parts) = input.trim().split_once("\n\n").unwrap();

    let workflows = workflows
        .lines()
        .map(|line| {
            let (name, rules) = line.trim().split_once('{').unwrap();
            let rules = rules
                .trim_end_matches('}')
                .split(',')
                .map(|rule| match rule_re.captures(rule) {
                    Some(c) => {
                        let cat = category(c.get(1).unwrap().as_str());
                        let val = c[3].parse().unwrap();
                        Rule {
                            cond: Some(if &c[2] == "<" {
                                Cond::Less(cat, val)
                            } else {
                                Cond::Greater(cat, val)
                            }),
                            target: c.get(4).unwrap().as_str(),
                        }
                    }
                    None => Rule {
                        cond: None,
                        target: rule,
                    },
                })
                .collect();
            (name, rules)
        })
        .collect();

    let parts = parts
        .lines()
        .map(|line| {
            let c = part_re.captures(line).unwrap();
            [1, 2, 3, 4].map(|i| c[i].parse().unwrap())
        })
        .collect();

    (workflows, parts)
}

fn accepted(workflows: &Workflows, part: &Part) -> bool {
    let mut at = "in";

    while at != "A" && at != "R" {
        at = workflows[at]
            .iter()
            .find(|rule| match rule.cond {
                Some(Cond::Less(cat, val)) => part[cat] < val,
                Some(Cond::Greater(cat, val)) => part[cat] > val,
                None => true,
            })
            .unwrap()
            .target;
    }

    at == "A"
}

fn solve(input: &str) -> u64 {
    let (workflows, parts) = parse(input);

    parts
        .iter()
        .filter(|part| accepted(&workflows, part))
        .map(|part| part.iter().sum::<u64>())
        .sum()
}

/// Inclusive rating ranges per category.
type Ranges = [(u64, u64); 4];

/// How many rating combinations within `ranges` end up accepted when they
/// enter workflow `at`.
fn count_accepted(workflows: &Workflows, at: &str, mut ranges: Ranges) -> u64 {
    match at {
        "A" => return ranges.iter().map(|(lo, hi)| hi - lo + 1).product(),
        "R" => return 0,
        _ => {}
    }

    let mut total = 0;

    for rule in &workflows[at] {
        let Some(cond) = rule.cond else {
            return total + count_accepted(workflows, rule.target, ranges);
        };

        // split the ranges into the part the rule matches and the rest
        let (cat, matched, rest) = match cond {
            Cond::Less(cat, val) => (cat, (ranges[cat].0, val - 1), (val, ranges[cat].1)),
            Cond::Greater(cat, val) => (cat, (val + 1, ranges[cat].1), (ranges[cat].0, val)),
        };

        let matched = (matched.0.max(ranges[cat].0), matched.1.min(ranges[cat].1));
        if matched.0 <= matched.1 {
            let mut sub = ranges;
            sub[cat] = matched;
            total += count_accepted(workflows, rule.target, sub);
        }

        let rest = (rest.0.max(ranges[cat].0), rest.1.min(ranges[cat].1));
        if rest.0 > rest.1 {
            return total;
        }
        ranges[cat] = rest;
    }

    total
}

fn bonus(input: &str) -> u64 {
    let (workflows, _) = parse(input);
    count_accepted(&workflows, "in", [(1, 4000); 4])
}

#[test]
fn test() {
    let example_input = "
px{a<2006:qkq,m>2090:A,rfg}
pv{a>1716:R,A}
lnx{m>1548:A,A}
rfg{s<537:gd,x>2440:R,A}
qs{s>3448:A,lnx}
qkq{x<1416:A,crn}
crn{x>2662:A,R}
in{s<1351:px,qqz}
qqz{s>2770:qs,m<1801:hdj,R}
gd{a>3333:R,R}
hdj{m>838:A,pv}

{x=787,m=2655,a=1222,s=2876}
{x=1679,m=44,a=2067,s=496}
{x=2036,m=264,a=79,s=2244}
{x=2461,m=1339,a=466,s=291}
{x=2127,m=1623,a=2188,s=1013}
";

    assert_eq!(solve(example_input), 19114);
    assert_eq!(bonus(example_input), 167409079868000);
}
