use aoc_harness::time;
use fxhash::FxHashMap;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 8)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

struct Network<'a> {
    instructions: &'a [u8],
    nodes: FxHashMap<&'a str, (&'a str, &'a str)>,
}

fn parse(input: &str) -> Network {
    let (instructions, nodes) = input.trim().split_once("\n\n").unwrap();

    let nodes = nodes
        .lines()
        .map(|line| {
            let (name, next) = line.trim().split_once(" = ").unwrap();
            let (l, r) = next
                .trim_matches(|c| c == '(' || c == ')')
                .split_once(", ")
                .unwrap();
            (name, (l, r))
        })
        .collect();

    Network {
        instructions: instructions.trim().as_bytes(),
        nodes,
    }
}

impl Network<'_> {
    fn steps(&self, start: &str, done: impl Fn(&str) -> bool) -> usize {
        let mut at = start;

        for (i, &turn) in self.instructions.iter().cycle().enumerate() {
            if done(at) {
                return i;
            }

            let (l, r) = self.nodes[at];
            at = if turn == b'L' { l } else { r };
        }

        unreachable!()
    }
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

fn solve(input: &str) -> usize {
    parse(input).steps("AAA", |n| n == "ZZZ")
}

/// Every ghost's walk turns out to loop back to its `Z` node with the same
/// period as the first arrival.
fn bonus(input: &str) -> usize {
    let net = parse(input);

    net.nodes
        .keys()
        .filter(|n| n.ends_with('A'))
        .map(|start| net.steps(start, |n| n.ends_with('Z')))
        .fold(1, |acc, n| acc / gcd(acc, n) * n)
}

#[test]
fn test() {
    let example_input = "
RL

AAA = (BBB, CCC)
BBB = (DDD, EEE)
CCC = (ZZZ, GGG)
DDD = (DDD, DDD)
EEE = (EEE, EEE)
GGG = (GGG, GGG)
ZZZ = (ZZZ, ZZZ)
";

    assert_eq!(solve(example_input), 2);

    let example_input = "
LLR

AAA = (BBB, BBB)
BBB = (AAA, ZZZ)
ZZZ = (ZZZ, ZZZ)
";

    assert_eq!(solve(example_input), 6);

    let example_input = "
LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
22A = (22B, XXX)
22B = (22C, 22C)
22C = (22Z, 22Z)
22Z = (22B, 22B)
XXX = (XXX, XXX)
";

    assert_eq!(bonus(example_input), 6);
}
