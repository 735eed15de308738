use aoc_harness::time;
use fxhash::FxHashMap;
use itertools::Itertools;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 24)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    And,
    Or,
    Xor,
}

#[derive(Debug, Clone)]
struct Gate<'a> {
    a: &'a str,
    op: Op,
    b: &'a str,
    out: &'a str,
}

impl Gate<'_> {
    fn has_xy_inputs(&self) -> bool {
        self.a.starts_with(['x', 'y']) && self.b.starts_with(['x', 'y'])
    }

    fn is_first_bit(&self) -> bool {
        self.a.ends_with("00") && self.b.ends_with("00")
    }
}

fn parse(input: &str) -> (FxHashMap<&str, bool>, Vec<Gate>) {
    let (wires, gates) = input.trim().split_once("\n\n").unwrap();

    let wires = wires
        .lines()
        .map(|line| {
            let (name, value) = line.trim().split_once(": ").unwrap();
            (name, value == "1")
        })
        .collect();

    let gates = gates
        .lines()
        .map(|line| {
            let parts = line.split_whitespace().collect::<Vec<_>>();
            Gate {
                a: parts[0],
                op: match parts[1] {
                    "AND" => Op::And,
                    "OR" => Op::Or,
                    "XOR" => Op::Xor,
                    _ => unreachable!(),
                },
                b: parts[2],
                out: parts[4],
            }
        })
        .collect();

    (wires, gates)
}

fn solve(input: &str) -> u64 {
    let (mut wires, gates) = parse(input);

    let mut pending = gates;
    while !pending.is_empty() {
        pending.retain(|g| match (wires.get(g.a), wires.get(g.b)) {
            (Some(&a), Some(&b)) => {
                let value = match g.op {
                    Op::And => a & b,
                    Op::Or => a | b,
                    Op::Xor => a ^ b,
                };
                wires.insert(g.out, value);
                false
            }
            _ => true,
        });
    }

    wires
        .iter()
        .filter(|(name, _)| name.starts_with('z'))
        .sorted()
        .rev()
        .fold(0, |n, (_, &bit)| n << 1 | bit as u64)
}

/// Finds the gates whose outputs break the shape of a ripple-carry adder.
fn bonus(input: &str) -> String {
    let (_, gates) = parse(input);

    let last_z = gates
        .iter()
        .map(|g| g.out)
        .filter(|out| out.starts_with('z'))
        .max()
        .unwrap();

    let feeds = |out: &str, op: Op| {
        gates
            .iter()
            .any(|g| g.op == op && (g.a == out || g.b == out))
    };

    gates
        .iter()
        .filter(|g| {
            let z = g.out.starts_with('z');
            match g.op {
                _ if z && g.op != Op::Xor && g.out != last_z => true,
                Op::Xor if !g.has_xy_inputs() => !z,
                Op::Xor => !g.is_first_bit() && !feeds(g.out, Op::Xor),
                Op::And => !g.is_first_bit() && !feeds(g.out, Op::Or),
                Op::Or => false,
            }
        })
        .map(|g| g.out)
        .sorted()
        .dedup()
        .join(",")
}

#[test]
fn test() {
    let small = "
x00: 1
x01: 1
x02: 1
y00: 0
y01: 1
y02: 0

x00 AND y00 -> z00
x01 XOR y01 -> z01
x02 OR y02 -> z02
";

    assert_eq!(solve(small), 4);

    let larger = "
x00: 1
x01: 0
x02: 1
x03: 1
x04: 0
y00: 1
y01: 1
y02: 1
y03: 1
y04: 1

ntg XOR fgs -> mjb
y02 OR x01 -> tnw
kwq OR kpj -> z05
x00 OR x03 -> fst
tgd XOR rvg -> z01
vdt OR tnw -> bfw
bfw AND frj -> z10
ffh OR nrd -> bqk
y00 AND y03 -> djm
y03 OR y00 -> psh
bqk OR frj -> z08
tnw OR fst -> frj
gnj AND tgd -> z11
bfw XOR mjb -> z00
x03 OR x00 -> vdt
gnj AND wpb -> z02
x04 AND y00 -> kjc
djm OR pbm -> qhw
nrd AND vdt -> hwm
kjc AND fst -> rvg
y04 OR y02 -> fgs
y01 AND x02 -> pbm
ntg OR kjc -> kwq
psh XOR fgs -> tgd
qhw XOR tgd -> z09
pbm OR djm -> kpj
x03 XOR y03 -> ffh
x00 XOR y04 -> ntg
bfw OR bqk -> z06
nrd XOR fgs -> wpb
frj XOR qhw -> z04
bqk OR frj -> z07
y03 OR x01 -> nrd
hwm AND bqk -> z03
tgd XOR rvg -> z12
tnw OR pbm -> gnj
";

    assert_eq!(solve(larger), 2024);

    // a four bit adder with two pairs of outputs swapped
    let adder = "
x00: 0
x01: 0
x02: 0
x03: 0
y00: 0
y01: 0
y02: 0
y03: 0

x00 XOR y00 -> z00
x00 AND y00 -> c00
x01 XOR y01 -> s01
x01 AND y01 -> a01
s01 XOR c00 -> z01
s01 AND c00 -> t01
a01 OR t01 -> c01
x02 XOR y02 -> a02
x02 AND y02 -> s02
s02 XOR c01 -> z02
s02 AND c01 -> t02
a02 OR t02 -> c02
x03 XOR y03 -> s03
x03 AND y03 -> a03
s03 XOR c02 -> t03
s03 AND c02 -> z03
a03 OR t03 -> z04
";

    assert_eq!(bonus(adder), "a02,s02,t03,z03");
}
