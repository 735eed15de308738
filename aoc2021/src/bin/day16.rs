use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 16)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Body {
    Literal(u64),
    Operator(u8, Vec<Packet>),
}

#[derive(Debug, PartialEq, Eq)]
struct Packet {
    version: u8,
    body: Body,
}

impl Packet {
    fn version_sum(&self) -> u64 {
        self.version as u64
            + match &self.body {
                Body::Literal(_) => 0,
                Body::Operator(_, children) => children.iter().map(Packet::version_sum).sum(),
            }
    }

    fn eval(&self) -> u64 {
        let (op, children) = match &self.body {
            Body::Literal(n) => return *n,
            Body::Operator(op, children) => (*op, children),
        };

        let mut values = children.iter().map(Packet::eval);
        match op {
            0 => values.sum(),
            1 => values.product(),
            2 => values.min().unwrap(),
            3 => values.max().unwrap(),
            5..=7 => {
                let (a, b) = (values.next().unwrap(), values.next().unwrap());
                let holds = match op {
                    5 => a > b,
                    6 => a < b,
                    _ => a == b,
                };
                holds as u64
            }
            _ => unreachable!(),
        }
    }
}

struct Bits {
    bits: Vec<bool>,
    pos: usize,
}

impl Bits {
    fn from_hex(hex: &str) -> Self {
        let bits = hex
            .trim()
            .chars()
            .flat_map(|c| {
                let n = c.to_digit(16).unwrap();
                (0..4).rev().map(move |i| n >> i & 1 == 1)
            })
            .collect();

        Bits { bits, pos: 0 }
    }

    fn take(&mut self, n: usize) -> u64 {
        let value = self.bits[self.pos..self.pos + n]
            .iter()
            .fold(0, |acc, &bit| acc << 1 | bit as u64);
        self.pos += n;
        value
    }

    fn packet(&mut self) -> Packet {
        let version = self.take(3) as u8;
        let type_id = self.take(3) as u8;

        if type_id == 4 {
            let mut n = 0;
            loop {
                let more = self.take(1) == 1;
                n = n << 4 | self.take(4);
                if !more {
                    break;
                }
            }

            return Packet {
                version,
                body: Body::Literal(n),
            };
        }

        let mut children = vec![];
        if self.take(1) == 0 {
            let len = self.take(15) as usize;
            let end = self.pos + len;
            while self.pos < end {
                children.push(self.packet());
            }
        } else {
            let count = self.take(11);
            for _ in 0..count {
                children.push(self.packet());
            }
        }

        Packet {
            version,
            body: Body::Operator(type_id, children),
        }
    }
}

fn solve(input: &str) -> u64 {
    Bits::from_hex(input).packet().version_sum()
}

fn bonus(input: &str) -> u64 {
    Bits::from_hex(input).packet().eval()
}

#[test]
fn test() {
    assert_eq!(
        Bits::from_hex("D2FE28").packet(),
        Packet {
            version: 6,
            body: Body::Literal(2021)
        }
    );

    assert_eq!(solve("8A004A801A8002F478"), 16);
    assert_eq!(solve("620080001611562C8802118E34"), 12);
    assert_eq!(solve("C0015000016115A2E0802F182340"), 23);
    assert_eq!(solve("A0016C880162017C3686B18A3D4780"), 31);

    assert_eq!(bonus("C200B40A82"), 3);
    assert_eq!(bonus("04005AC33890"), 54);
    assert_eq!(bonus("880086C3E88112"), 7);
    assert_eq!(bonus("CE00C43D881120"), 9);
    assert_eq!(bonus("D8005AC2A8F0"), 1);
    assert_eq!(bonus("F600BC2D8F"), 0);
    assert_eq!(bonus("9C005AC2F8F0"), 0);
    assert_eq!(bonus("9C0141080250320F1802104A08"), 1);
}
