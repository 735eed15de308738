use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 5)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

struct Rule {
    dest: u64,
    source: u64,
    len: u64,
}

/// One almanac section, rules sorted by source.
struct Map {
    rules: Vec<Rule>,
}

impl Map {
    fn parse(section: &str) -> Self {
        let mut rules = section
            .lines()
            .skip(1)
            .map(|line| {
                let mut nums = line.split_whitespace().map(|s| s.parse::<u64>().unwrap());
                Rule {
                    dest: nums.next().unwrap(),
                    source: nums.next().unwrap(),
                    len: nums.next().unwrap(),
                }
            })
            .collect::<Vec<_>>();

        rules.sort_by_key(|r| r.source);
        Map { rules }
    }

    /// Maps `n`, also returning how many consecutive numbers from `n` on are
    /// mapped by the same offset.
    fn lookup(&self, n: u64) -> (u64, u64) {
        for rule in &self.rules {
            if n < rule.source {
                return (n, rule.source - n);
            }

            if n < rule.source + rule.len {
                return (rule.dest + (n - rule.source), rule.source + rule.len - n);
            }
        }

        (n, u64::MAX)
    }
}

fn parse(input: &str) -> (Vec<u64>, Vec<Map>) {
    let mut sections = input.trim().split("\n\n");

    let seeds = sections
        .next()
        .unwrap()
        .trim_start_matches("seeds:")
        .split_whitespace()
        .map(|s| s.parse().unwrap())
        .collect();

    (seeds, sections.map(Map::parse).collect())
}

/// The location for `seed`, and how far the seed can grow while every map
/// keeps applying the same offset.
fn locate(maps: &[Map], seed: u64) -> (u64, u64) {
    maps.iter().fold((seed, u64::MAX), |(n, run), map| {
        let (next, r) = map.lookup(n);
        (next, run.min(r))
    })
}

fn solve(input: &str) -> u64 {
    let (seeds, maps) = parse(input);

    seeds
        .into_iter()
        .map(|seed| locate(&maps, seed).0)
        .min()
        .unwrap()
}

fn bonus(input: &str) -> u64 {
    let (seeds, maps) = parse(input);
    let mut lowest = u64::MAX;

    for range in seeds.chunks_exact(2) {
        let (mut seed, end) = (range[0], range[0] + range[1]);

        while seed < end {
            let (location, run) = locate(&maps, seed);
            lowest = lowest.min(location);
            seed = seed.saturating_add(run);
        }
    }

    lowest
}

#[test]
fn test() {
    let example_input = "
seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

    assert_eq!(solve(example_input), 35);
    assert_eq!(bonus(example_input), 46);
}
