use aoc_harness::time;
use rayon::prelude::*;
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

const ORE: usize = 0;
const CLAY: usize = 1;
const OBSIDIAN: usize = 2;
const GEODE: usize = 3;

/// `costs[robot][resource]`
#[derive(Debug)]
struct Blueprint {
    id: u32,
    costs: [[u32; 4]; 4],
}

fn parse(input: &str) -> Vec<Blueprint> {
    let re = Regex::new(r"\d+").unwrap();

    input
        .trim()
        .split("Blueprint")
        .filter(|b| !b.trim().is_empty())
        .map(|b| {
            let n = re
                .find_iter(b)
                .map(|m| m.as_str().parse().unwrap())
                .collect::<Vec<u32>>();

            Blueprint {
                id: n[0],
                costs: [
                    [n[1], 0, 0, 0],
                    [n[2], 0, 0, 0],
                    [n[3], n[4], 0, 0],
                    [n[5], 0, n[6], 0],
                ],
            }
        })
        .collect()
}

struct Search<'a> {
    blueprint: &'a Blueprint,
    max_useful: [u32; 4],
    best: u32,
}

impl Search<'_> {
    /// Branches on which robot to build next, waiting as long as needed.
    fn run(&mut self, time: u32, robots: [u32; 4], stock: [u32; 4]) {
        let idle = stock[GEODE] + robots[GEODE] * time;
        self.best = self.best.max(idle);

        // even building a geode robot every remaining minute can't win
        if idle + time * time.saturating_sub(1) / 2 <= self.best {
            return;
        }

        for robot in [GEODE, OBSIDIAN, CLAY, ORE] {
            if robots[robot] >= self.max_useful[robot] {
                continue;
            }

            let cost = self.blueprint.costs[robot];
            let wait = (0..4).try_fold(0, |wait, r| {
                if cost[r] <= stock[r] {
                    Some(wait)
                } else if robots[r] == 0 {
                    None
                } else {
                    Some(wait.max((cost[r] - stock[r]).div_ceil(robots[r])))
                }
            });

            let Some(wait) = wait else { continue };
            if wait + 1 >= time {
                continue;
            }

            let mut next_stock = stock;
            for r in 0..4 {
                next_stock[r] += robots[r] * (wait + 1);
                next_stock[r] -= cost[r];
            }
            let mut next_robots = robots;
            next_robots[robot] += 1;

            self.run(time - wait - 1, next_robots, next_stock);
        }
    }
}

fn max_geodes(blueprint: &Blueprint, time: u32) -> u32 {
    let mut max_useful = [u32::MAX; 4];
    for r in [ORE, CLAY, OBSIDIAN] {
        max_useful[r] = blueprint.costs.iter().map(|c| c[r]).max().unwrap();
    }

    let mut search = Search {
        blueprint,
        max_useful,
        best: 0,
    };
    search.run(time, [1, 0, 0, 0], [0; 4]);
    search.best
}

fn solve(input: &str) -> u32 {
    parse(input)
        .par_iter()
        .map(|b| b.id * max_geodes(b, 24))
        .sum()
}

fn bonus(input: &str) -> u32 {
    parse(input)
        .par_iter()
        .take(3)
        .map(|b| max_geodes(b, 32))
        .product()
}

#[test]
fn test() {
    let example_input = "
Blueprint 1: Each ore robot costs 4 ore. Each clay robot costs 2 ore. Each obsidian robot costs 3 ore and 14 clay. Each geode robot costs 2 ore and 7 obsidian.
Blueprint 2: Each ore robot costs 2 ore. Each clay robot costs 3 ore. Each obsidian robot costs 3 ore and 8 clay. Each geode robot costs 3 ore and 12 obsidian.
";

    assert_eq!(solve(example_input), 33);
    assert_eq!(bonus(example_input), 56 * 62);
}
