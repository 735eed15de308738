use aoc_harness::time;
use fxhash::FxHashSet;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 10)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

struct Map(Vec<Vec<u8>>);

impl Map {
    fn parse(input: &str) -> Self {
        Map(input
            .trim()
            .lines()
            .map(|l| l.trim().bytes().map(|c| c - b'0').collect())
            .collect())
    }

    fn trailheads(&self) -> Vec<(usize, usize)> {
        let mut heads = vec![];
        for (y, row) in self.0.iter().enumerate() {
            for (x, &h) in row.iter().enumerate() {
                if h == 0 {
                    heads.push((x, y));
                }
            }
        }
        heads
    }

    /// All trail ends reachable from `(x, y)`, once per distinct trail.
    fn trails(&self, (x, y): (usize, usize)) -> Vec<(usize, usize)> {
        let h = self.0[y][x];
        if h == 9 {
            return vec![(x, y)];
        }

        let mut ends = vec![];
        for (nx, ny) in [
            (x + 1, y),
            (x, y + 1),
            (x.wrapping_sub(1), y),
            (x, y.wrapping_sub(1)),
        ] {
            if self.0.get(ny).and_then(|row| row.get(nx)) == Some(&(h + 1)) {
                ends.extend(self.trails((nx, ny)));
            }
        }
        ends
    }
}

fn solve(input: &str) -> usize {
    let map = Map::parse(input);

    map.trailheads()
        .into_iter()
        .map(|head| map.trails(head).into_iter().collect::<FxHashSet<_>>().len())
        .sum()
}

fn bonus(input: &str) -> usize {
    let map = Map::parse(input);

    map.trailheads()
        .into_iter()
        .map(|head| map.trails(head).len())
        .sum()
}

#[test]
fn test() {
    let example_input = "
89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732
";

    assert_eq!(solve(example_input), 36);
    assert_eq!(bonus(example_input), 81);
}
