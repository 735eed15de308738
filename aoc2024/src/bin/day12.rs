use aoc_harness::time;
use fxhash::FxHashSet;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 12)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

type Pos = (i32, i32);

struct Garden(Vec<Vec<u8>>);

impl Garden {
    fn parse(input: &str) -> Self {
        Garden(input.trim().lines().map(|l| l.trim().bytes().collect()).collect())
    }

    fn get(&self, (x, y): Pos) -> Option<u8> {
        if x < 0 || y < 0 {
            return None;
        }
        self.0.get(y as usize).and_then(|row| row.get(x as usize)).copied()
    }

    fn regions(&self) -> Vec<FxHashSet<Pos>> {
        let mut seen = FxHashSet::default();
        let mut regions = vec![];

        for y in 0..self.0.len() as i32 {
            for x in 0..self.0[0].len() as i32 {
                if seen.contains(&(x, y)) {
                    continue;
                }

                let plant = self.get((x, y));
                let mut region = FxHashSet::default();
                let mut todo = vec![(x, y)];

                while let Some(p) = todo.pop() {
                    if self.get(p) != plant || !region.insert(p) {
                        continue;
                    }
                    todo.extend([(p.0 + 1, p.1), (p.0 - 1, p.1), (p.0, p.1 + 1), (p.0, p.1 - 1)]);
                }

                seen.extend(region.iter().copied());
                regions.push(region);
            }
        }

        regions
    }
}

fn perimeter(region: &FxHashSet<Pos>) -> usize {
    region
        .iter()
        .map(|&(x, y)| {
            [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]
                .iter()
                .filter(|&n| !region.contains(n))
                .count()
        })
        .sum()
}

/// A region has as many sides as it has corners.
fn sides(region: &FxHashSet<Pos>) -> usize {
    region
        .iter()
        .map(|&(x, y)| {
            [(1, 1), (1, -1), (-1, 1), (-1, -1)]
                .iter()
                .filter(|&&(dx, dy)| {
                    let a = region.contains(&(x + dx, y));
                    let b = region.contains(&(x, y + dy));
                    let c = region.contains(&(x + dx, y + dy));
                    (!a && !b) || (a && b && !c)
                })
                .count()
        })
        .sum()
}

fn solve(input: &str) -> usize {
    Garden::parse(input)
        .regions()
        .iter()
        .map(|r| r.len() * perimeter(r))
        .sum()
}

fn bonus(input: &str) -> usize {
    Garden::parse(input)
        .regions()
        .iter()
        .map(|r| r.len() * sides(r))
        .sum()
}

#[test]
fn test() {
    let small = "
AAAA
BBCD
BBCC
EEEC
";

    let large = "
RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE
";

    assert_eq!(solve(small), 140);
    assert_eq!(bonus(small), 80);
    assert_eq!(solve(large), 1930);
    assert_eq!(bonus(large), 1206);
}
