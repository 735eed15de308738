use aoc_harness::time;
use itertools::Itertools;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 8)?;

    time(|| {
        println!("First part: {}", solve(&input, 1000));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

type Pos = (i64, i64, i64);

fn parse(input: &str) -> Vec<Pos> {
    input
        .trim()
        .lines()
        .map(|line| {
            line.trim()
                .split(',')
                .map(|n| n.parse::<i64>().unwrap())
                .collect_tuple()
                .unwrap()
        })
        .collect()
}

/// All pairs of junction boxes, closest first.
fn links(boxes: &[Pos]) -> Vec<(usize, usize)> {
    let dist = |a: Pos, b: Pos| (a.0 - b.0).pow(2) + (a.1 - b.1).pow(2) + (a.2 - b.2).pow(2);

    (0..boxes.len())
        .tuple_combinations()
        .sorted_by_cached_key(|&(i, j)| dist(boxes[i], boxes[j]))
        .collect()
}

struct Circuits {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl Circuits {
    fn new(n: usize) -> Self {
        Circuits {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            self.parent[i] = self.find(self.parent[i]);
        }
        self.parent[i]
    }

    fn join(&mut self, a: usize, b: usize) {
        let (a, b) = (self.find(a), self.find(b));
        if a == b {
            return;
        }

        let (big, small) = if self.size[a] >= self.size[b] { (a, b) } else { (b, a) };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        self.count -= 1;
    }
}

fn solve(input: &str, connections: usize) -> usize {
    let boxes = parse(input);
    let mut circuits = Circuits::new(boxes.len());

    for (a, b) in links(&boxes).into_iter().take(connections) {
        circuits.join(a, b);
    }

    (0..boxes.len())
        .filter(|&i| circuits.parent[i] == i)
        .map(|i| circuits.size[i])
        .sorted_unstable_by(|a, b| b.cmp(a))
        .take(3)
        .product()
}

fn bonus(input: &str) -> i64 {
    let boxes = parse(input);
    let mut circuits = Circuits::new(boxes.len());

    for (a, b) in links(&boxes) {
        circuits.join(a, b);
        if circuits.count == 1 {
            return boxes[a].0 * boxes[b].0;
        }
    }

    unreachable!()
}

#[test]
fn test() {
    let example_input = "
162,817,812
57,618,57
906,360,560
592,479,940
352,342,300
466,668,158
542,29,236
431,825,988
739,650,466
52,470,668
216,146,977
819,987,18
117,168,530
805,96,715
346,949,466
970,615,88
941,993,340
862,61,35
984,92,344
425,690,689
";

    assert_eq!(solve(example_input, 10), 40);
    assert_eq!(bonus(example_input), 25272);
}
