use aoc_harness::time;
use fxhash::FxHashMap;
use regex::Regex;

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

/// Only the valves worth opening (plus the start), with travel times between
/// them already worked out.
struct Network {
    flow: Vec<u32>,
    dist: Vec<Vec<u32>>,
    start: usize,
}

fn parse(input: &str) -> Network {
    let re = Regex::new(r"Valve (\w+) has flow rate=(\d+); tunnels? leads? to valves? (.+)").unwrap();

    let valves = input
        .trim()
        .lines()
        .map(|line| {
            let caps = re.captures(line.trim()).unwrap();
            let name = caps.get(1).unwrap().as_str();
            let flow = caps[2].parse::<u32>().unwrap();
            let tunnels = caps.get(3).unwrap().as_str().split(", ").collect::<Vec<_>>();
            (name, flow, tunnels)
        })
        .collect::<Vec<_>>();

    let index: FxHashMap<&str, usize> = valves
        .iter()
        .enumerate()
        .map(|(i, (name, _, _))| (*name, i))
        .collect();

    // floyd-warshall
    let n = valves.len();
    let mut dist = vec![vec![u32::MAX / 2; n]; n];
    for (i, (_, _, tunnels)) in valves.iter().enumerate() {
        dist[i][i] = 0;
        for t in tunnels {
            dist[i][index[t]] = 1;
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                dist[i][j] = dist[i][j].min(dist[i][k] + dist[k][j]);
            }
        }
    }

    let keep = (0..n)
        .filter(|&i| valves[i].1 > 0 || valves[i].0 == "AA")
        .collect::<Vec<_>>();

    Network {
        flow: keep.iter().map(|&i| valves[i].1).collect(),
        dist: keep
            .iter()
            .map(|&i| keep.iter().map(|&j| dist[i][j]).collect())
            .collect(),
        start: keep.iter().position(|&i| valves[i].0 == "AA").unwrap(),
    }
}

/// For every set of opened valves reachable in time, the most pressure that
/// opening exactly that set releases.
fn explore(
    net: &Network,
    at: usize,
    time: u32,
    opened: u64,
    released: u32,
    best: &mut FxHashMap<u64, u32>,
) {
    let entry = best.entry(opened).or_default();
    *entry = (*entry).max(released);

    for next in 0..net.flow.len() {
        if net.flow[next] == 0 || opened & 1 << next != 0 {
            continue;
        }

        let cost = net.dist[at][next] + 1;
        if cost >= time {
            continue;
        }

        let left = time - cost;
        let released = released + left * net.flow[next];
        explore(net, next, left, opened | 1 << next, released, best);
    }
}

fn best_per_set(input: &str, time: u32) -> FxHashMap<u64, u32> {
    let net = parse(input);
    let mut best = FxHashMap::default();
    explore(&net, net.start, time, 0, 0, &mut best);
    best
}

fn solve(input: &str) -> u32 {
    best_per_set(input, 30).into_values().max().unwrap()
}

fn bonus(input: &str) -> u32 {
    let best = best_per_set(input, 26).into_iter().collect::<Vec<_>>();

    let mut most = 0;
    for (i, &(mine, a)) in best.iter().enumerate() {
        for &(theirs, b) in &best[i..] {
            if mine & theirs == 0 {
                most = most.max(a + b);
            }
        }
    }
    most
}

#[test]
fn test() {
    let example_input = "
Valve AA has flow rate=0; tunnels lead to valves DD, II, BB
Valve BB has flow rate=13; tunnels lead to valves CC, AA
Valve CC has flow rate=2; tunnels lead to valves DD, BB
Valve DD has flow rate=20; tunnels lead to valves CC, AA, EE
Valve EE has flow rate=3; tunnels lead to valves FF, DD
Valve FF has flow rate=0; tunnels lead to valves EE, GG
Valve GG has flow rate=0; tunnels lead to valves FF, HH
Valve HH has flow rate=22; tunnel leads to valve GG
Valve II has flow rate=0; tunnels lead to valves AA, JJ
Valve JJ has flow rate=21; tunnel leads to valve II
";

    assert_eq!(solve(example_input), 1651);
    assert_eq!(bonus(example_input), 1707);
}
