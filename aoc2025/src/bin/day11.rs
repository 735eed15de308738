use aoc_harness::time;
use fxhash::FxHashMap;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 11)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

type Graph<'a> = FxHashMap<&'a str, Vec<&'a str>>;

fn parse(input: &str) -> Graph {
    input
        .trim()
        .lines()
        .map(|line| {
            let (from, to) = line.trim().split_once(": ").unwrap();
            (from, to.split_whitespace().collect())
        })
        .collect()
}

/// Number of paths from `from` to `to`, memoised per starting device.
fn paths<'a>(
    graph: &Graph<'a>,
    from: &'a str,
    to: &str,
    memo: &mut FxHashMap<&'a str, u64>,
) -> u64 {
    if from == to {
        return 1;
    }

    if let Some(&n) = memo.get(from) {
        return n;
    }

    let n = graph
        .get(from)
        .map(|outs| outs.iter().map(|&next| paths(graph, next, to, memo)).sum())
        .unwrap_or(0);

    memo.insert(from, n);
    n
}

fn count<'a>(graph: &Graph<'a>, route: &[&'a str]) -> u64 {
    route
        .windows(2)
        .map(|leg| paths(graph, leg[0], leg[1], &mut FxHashMap::default()))
        .product()
}

fn solve(input: &str) -> u64 {
    count(&parse(input), &["you", "out"])
}

fn bonus(input: &str) -> u64 {
    let graph = parse(input);

    count(&graph, &["svr", "dac", "fft", "out"]) + count(&graph, &["svr", "fft", "dac", "out"])
}

#[test]
fn test() {
    let first = "
aaa: you hhh
you: bbb ccc
bbb: ddd eee
ccc: ddd eee fff
ddd: ggg
eee: out
fff: out
ggg: out
hhh: ccc fff iii
iii: out
";

    let second = "
svr: aaa bbb
aaa: fft
fft: ccc
bbb: tty
tty: ccc
ccc: ddd eee
ddd: hub
hub: fff
eee: dac
dac: fff
fff: ggg hhh
ggg: out
hhh: out
";

    assert_eq!(solve(first), 5);
    assert_eq!(bonus(second), 2);
}
