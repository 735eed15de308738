use aoc_harness::time;
use fxhash::FxHashMap;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 14)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

#[derive(Debug, Clone, Copy, Default)]
struct Mask {
    ones: u64,
    zeros: u64,
    floating: u64,
}

impl Mask {
    fn parse(s: &str) -> Self {
        s.bytes().fold(Mask::default(), |m, b| {
            let shifted = Mask {
                ones: m.ones << 1,
                zeros: m.zeros << 1,
                floating: m.floating << 1,
            };

            match b {
                b'1' => Mask {
                    ones: shifted.ones | 1,
                    ..shifted
                },
                b'0' => Mask {
                    zeros: shifted.zeros | 1,
                    ..shifted
                },
                b'X' => Mask {
                    floating: shifted.floating | 1,
                    ..shifted
                },
                _ => unreachable!(),
            }
        })
    }

    /// Every address reachable by choosing each floating bit freely.
    fn addresses(&self, addr: u64) -> impl Iterator<Item = u64> + '_ {
        let base = (addr | self.ones) & !self.floating;

        // enumerate all submasks of `floating`
        let mut sub = Some(self.floating);
        std::iter::from_fn(move || {
            let current = sub?;
            sub = if current == 0 {
                None
            } else {
                Some((current - 1) & self.floating)
            };
            Some(base | current)
        })
    }
}

enum Instr {
    Mask(Mask),
    Write(u64, u64),
}

fn parse(input: &str) -> Vec<Instr> {
    input
        .trim()
        .lines()
        .map(|line| {
            let (lhs, rhs) = line.trim().split_once(" = ").unwrap();
            if lhs == "mask" {
                Instr::Mask(Mask::parse(rhs))
            } else {
                let addr = lhs
                    .trim_start_matches("mem[")
                    .trim_end_matches(']')
                    .parse()
                    .unwrap();
                Instr::Write(addr, rhs.parse().unwrap())
            }
        })
        .collect()
}

fn solve(input: &str) -> u64 {
    let mut mem = FxHashMap::default();
    let mut mask = Mask::default();

    for instr in parse(input) {
        match instr {
            Instr::Mask(m) => mask = m,
            Instr::Write(addr, value) => {
                mem.insert(addr, (value | mask.ones) & !mask.zeros);
            }
        }
    }

    mem.values().sum()
}

fn bonus(input: &str) -> u64 {
    let mut mem = FxHashMap::default();
    let mut mask = Mask::default();

    for instr in parse(input) {
        match instr {
            Instr::Mask(m) => mask = m,
            Instr::Write(addr, value) => {
                for a in mask.addresses(addr) {
                    mem.insert(a, value);
                }
            }
        }
    }

    mem.values().sum()
}

#[test]
fn test() {
    assert_eq!(
        solve(
            "
mask = XXXXXXXXXXXXXXXXXXXXXXXXXXXXX1XXXX0X
mem[8] = 11
mem[7] = 101
mem[8] = 0
"
        ),
        165
    );

    assert_eq!(
        bonus(
            "
mask = 000000000000000000000000000000X1001X
mem[42] = 100
mask = 00000000000000000000000000000000X0XX
mem[26] = 1
"
        ),
        208
    );
}
