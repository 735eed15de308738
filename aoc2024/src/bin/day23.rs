use aoc_harness::time;
use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 23)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

type Network<'a> = FxHashMap<&'a str, FxHashSet<&'a str>>;

fn parse(input: &str) -> Network {
    let mut network: Network = FxHashMap::default();

    for line in input.trim().lines() {
        let (a, b) = line.trim().split_once('-').unwrap();
        network.entry(a).or_default().insert(b);
        network.entry(b).or_default().insert(a);
    }

    network
}

fn solve(input: &str) -> usize {
    let network = parse(input);

    network
        .keys()
        .tuple_combinations()
        .filter(|&(a, b, c)| {
            [a, b, c].iter().any(|n| n.starts_with('t'))
                && network[a].contains(b)
                && network[b].contains(c)
                && network[a].contains(c)
        })
        .count()
}

/// Bron-Kerbosch with pivoting.
fn largest_clique<'a>(
    network: &Network<'a>,
    r: Vec<&'a str>,
    mut p: FxHashSet<&'a str>,
    mut x: FxHashSet<&'a str>,
    best: &mut Vec<&'a str>,
) {
    if p.is_empty() && x.is_empty() {
        if r.len() > best.len() {
            *best = r;
        }
        return;
    }

    let pivot = p.union(&x).max_by_key(|v| network[*v].len()).copied().unwrap();

    for v in p.clone() {
        if network[pivot].contains(v) {
            continue;
        }

        let mut r2 = r.clone();
        r2.push(v);
        let neighbours = &network[v];
        largest_clique(
            network,
            r2,
            p.intersection(neighbours).copied().collect(),
            x.intersection(neighbours).copied().collect(),
            best,
        );

        p.remove(v);
        x.insert(v);
    }
}

fn bonus(input: &str) -> String {
    let network = parse(input);
    let mut best = vec![];

    largest_clique(
        &network,
        vec![],
        network.keys().copied().collect(),
        FxHashSet::default(),
        &mut best,
    );

    best.sort_unstable();
    best.join(",")
}

#[test]
fn test() {
    let example_input = "
kh-tc
qp-kh
de-cg
ka-co
yn-aq
qp-ub
cg-tb
vc-aq
tb-ka
wh-tc
yn-cg
kh-ub
ta-co
de-co
tc-td
tb-wq
wh-td
ta-ka
td-qp
aq-cg
wq-ub
ub-vc
de-ta
wq-aq
wq-vc
wh-yn
ka-de
kh-ta
co-tc
wh-qp
tb-vc
td-yn
";

    assert_eq!(solve(example_input), 7);
    assert_eq!(bonus(example_input), "co,de,ka,ta");
}
