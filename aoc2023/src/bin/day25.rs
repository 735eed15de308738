use std::collections::VecDeque;

use aoc_harness::time;
use fxhash::FxHashMap;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 25)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    Ok(())
}

struct Graph {
    edges: Vec<Vec<usize>>,
}

impl Graph {
    fn parse(input: &str) -> Self {
        let mut index: FxHashMap<&str, usize> = FxHashMap::default();
        let mut edges: Vec<Vec<usize>> = vec![];

        let mut id = |name, edges: &mut Vec<Vec<usize>>| {
            *index.entry(name).or_insert_with(|| {
                edges.push(vec![]);
                edges.len() - 1
            })
        };

        for line in input.trim().lines() {
            let (source, dests) = line.trim().split_once(": ").unwrap();
            let a = id(source, &mut edges);
            for dest in dests.split_whitespace() {
                let b = id(dest, &mut edges);
                edges[a].push(b);
                edges[b].push(a);
            }
        }

        Graph { edges }
    }

    /// Finds an augmenting path from `s` to `t` and pushes one unit of
    /// flow along it. Returns the nodes reachable from `s` if there is none.
    fn augment(
        &self,
        flow: &mut FxHashMap<(usize, usize), i32>,
        s: usize,
        t: usize,
    ) -> Result<(), Vec<bool>> {
        let mut prev = vec![None; self.edges.len()];
        let mut seen = vec![false; self.edges.len()];
        seen[s] = true;

        let mut queue = VecDeque::from([s]);
        while let Some(a) = queue.pop_front() {
            if a == t {
                break;
            }

            for &b in &self.edges[a] {
                let residual = 1 - flow.get(&(a, b)).copied().unwrap_or(0);
                if !seen[b] && residual > 0 {
                    seen[b] = true;
                    prev[b] = Some(a);
                    queue.push_back(b);
                }
            }
        }

        if !seen[t] {
            return Err(seen);
        }

        let mut at = t;
        while let Some(a) = prev[at] {
            *flow.entry((a, at)).or_default() += 1;
            *flow.entry((at, a)).or_default() -= 1;
            at = a;
        }

        Ok(())
    }

    /// Splits the graph by cutting exactly `cut` wires, returning the sizes
    /// of both halves.
    fn split(&self, cut: usize) -> Option<(usize, usize)> {
        let n = self.edges.len();

        (1..n).find_map(|t| {
            let mut flow = FxHashMap::default();
            for _ in 0..cut {
                if self.augment(&mut flow, 0, t).is_err() {
                    return None;
                }
            }

            let side = self.augment(&mut flow, 0, t).err()?;
            let size = side.iter().filter(|&&b| b).count();
            Some((size, n - size))
        })
    }
}

fn solve(input: &str) -> usize {
    let (a, b) = Graph::parse(input).split(3).unwrap();
    a * b
}

#[test]
fn test() {
    let example_input = "
jqt: rhn xhk nvd
rsh: frs pzl lsr
xhk: hfx
cmg: qnr nvd lhk bvb
rhn: xhk bvb hfx
bvb: xhk hfx
pzl: lsr hfx nvd
qnr: nvd
ntq: jqt hfx bvb xhk
nvd: lhk
lsr: lhk
rzs: qnr cmg lsr rsh
frs: qnr lhk lsr
";

    assert_eq!(solve(example_input), 54);
}
