use aoc_harness::time;
use fxhash::FxHashMap;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 17)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

/// Rock shapes as rows from the bottom up, bit `i` being column `i`, already
/// shifted so their left edge is two units from the left wall.
const ROCKS: [&[u8]; 5] = [
    &[0b0111100],
    &[0b0001000, 0b0011100, 0b0001000],
    &[0b0011100, 0b0010000, 0b0010000],
    &[0b0000100, 0b0000100, 0b0000100, 0b0000100],
    &[0b0001100, 0b0001100],
];

const WIDTH: u8 = 7;

struct Chamber {
    rows: Vec<u8>,
}

impl Chamber {
    fn fits(&self, rock: &[u8], y: usize) -> bool {
        rock.iter()
            .enumerate()
            .all(|(i, &r)| self.rows.get(y + i).map_or(true, |&row| row & r == 0))
    }

    fn place(&mut self, rock: &[u8], y: usize) {
        for (i, &r) in rock.iter().enumerate() {
            if y + i >= self.rows.len() {
                self.rows.push(0);
            }
            self.rows[y + i] |= r;
        }
    }

    /// The top rows, enough to recognize a repeating state.
    fn skyline(&self) -> Vec<u8> {
        self.rows.iter().rev().take(32).copied().collect()
    }
}

fn shift(rock: &[u8], jet: u8) -> Option<Vec<u8>> {
    if jet == b'<' {
        rock.iter().all(|r| r & 1 == 0).then(|| rock.iter().map(|r| r >> 1).collect())
    } else {
        rock.iter()
            .all(|r| r & 1 << (WIDTH - 1) == 0)
            .then(|| rock.iter().map(|r| r << 1).collect())
    }
}

fn tower_height(input: &str, count: u64) -> u64 {
    let jets = input.trim().as_bytes();
    let mut chamber = Chamber { rows: vec![] };
    let mut j = 0;

    let mut seen: FxHashMap<(usize, usize, Vec<u8>), (u64, usize)> = FxHashMap::default();
    let mut skipped = 0;
    let mut n = 0;

    while n < count {
        let kind = (n % 5) as usize;
        let mut rock = ROCKS[kind].to_vec();
        let mut y = chamber.rows.len() + 3;

        loop {
            if let Some(pushed) = shift(&rock, jets[j]) {
                if chamber.fits(&pushed, y) {
                    rock = pushed;
                }
            }
            j = (j + 1) % jets.len();

            if y == 0 || !chamber.fits(&rock, y - 1) {
                break;
            }
            y -= 1;
        }

        chamber.place(&rock, y);
        n += 1;

        if skipped == 0 {
            let key = (kind, j, chamber.skyline());
            if let Some(&(prev_n, prev_height)) = seen.get(&key) {
                let period = n - prev_n;
                let cycles = (count - n) / period;
                skipped = cycles * (chamber.rows.len() - prev_height) as u64;
                n += cycles * period;
            } else {
                seen.insert(key, (n, chamber.rows.len()));
            }
        }
    }

    chamber.rows.len() as u64 + skipped
}

fn solve(input: &str) -> u64 {
    tower_height(input, 2022)
}

fn bonus(input: &str) -> u64 {
    tower_height(input, 1000000000000)
}

#[test]
fn test() {
    let example_input = ">>><<><>><<<>><>>><<<>>><<<><<<>><>><<>>";

    assert_eq!(tower_height(example_input, 1), 1);
    assert_eq!(tower_height(example_input, 2), 4);
    assert_eq!(solve(example_input), 3068);
    assert_eq!(bonus(example_input), 1514285714288);
}
