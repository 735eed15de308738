use aoc_harness::time;

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

struct Cavern {
    energy: Vec<Vec<u8>>,
}

impl Cavern {
    fn parse(input: &str) -> Self {
        Cavern {
            energy: input
                .trim()
                .lines()
                .map(|line| line.trim().bytes().map(|b| b - b'0').collect())
                .collect(),
        }
    }

    /// Returns how many octopuses flashed.
    fn step(&mut self) -> usize {
        let h = self.energy.len() as i32;
        let w = self.energy[0].len() as i32;

        let mut flashing = vec![];
        for y in 0..h {
            for x in 0..w {
                self.energy[y as usize][x as usize] += 1;
                if self.energy[y as usize][x as usize] == 10 {
                    flashing.push((x, y));
                }
            }
        }

        let mut flashed = 0;
        while let Some((x, y)) = flashing.pop() {
            flashed += 1;
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let (nx, ny) = (x + dx, y + dy);
                    if (dx, dy) == (0, 0) || nx < 0 || ny < 0 || nx >= w || ny >= h {
                        continue;
                    }

                    let e = &mut self.energy[ny as usize][nx as usize];
                    *e += 1;
                    if *e == 10 {
                        flashing.push((nx, ny));
                    }
                }
            }
        }

        for row in self.energy.iter_mut() {
            for e in row.iter_mut().filter(|e| **e > 9) {
                *e = 0;
            }
        }

        flashed
    }
}

fn solve(input: &str) -> usize {
    let mut cavern = Cavern::parse(input);
    (0..100).map(|_| cavern.step()).sum()
}

fn bonus(input: &str) -> usize {
    let mut cavern = Cavern::parse(input);
    let total = cavern.energy.len() * cavern.energy[0].len();

    (1..).find(|_| cavern.step() == total).unwrap()
}

#[test]
fn test() {
    let example_input = "
5483143223
2745854711
5264556173
6141336146
6357385478
4167524645
2176841721
6882881134
4846848554
5283751526
";

    assert_eq!(solve(example_input), 1656);
    assert_eq!(bonus(example_input), 195);
}
