use std::collections::VecDeque;

use aoc_harness::time;
use fxhash::FxHashMap;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 20)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

#[derive(Debug)]
enum Kind<'a> {
    Broadcast,
    FlipFlop(bool),
    /// Remembers the last pulse from each of its inputs.
    Conjunction(FxHashMap<&'a str, bool>),
}

struct Module<'a> {
    kind: Kind<'a>,
    dests: Vec<&'a str>,
}

struct Machine<'a> {
    modules: FxHashMap<&'a str, Module<'a>>,
}

/// A pulse from `source` to `dest`, high or low.
type Pulse<'a> = (&'a str, bool, &'a str);

impl<'a> Machine<'a> {
    fn parse(input: &'a str) -> Self {
        let mut modules = FxHashMap::default();

        for line in input.trim().lines() {
            let (name, dests) = line.trim().split_once(" -> ").unwrap();
            let (name, kind) = match name.split_at(1) {
                ("%", rest) => (rest, Kind::FlipFlop(false)),
                ("&", rest) => (rest, Kind::Conjunction(FxHashMap::default())),
                _ => (name, Kind::Broadcast),
            };
            let dests = dests.split(", ").collect::<Vec<_>>();
            modules.insert(name, Module { kind, dests });
        }

        let links = modules
            .iter()
            .flat_map(|(&source, m)| m.dests.iter().map(move |&dest| (source, dest)))
            .collect::<Vec<_>>();

        for (source, dest) in links {
            if let Some(Module {
                kind: Kind::Conjunction(memory),
                ..
            }) = modules.get_mut(dest)
            {
                memory.insert(source, false);
            }
        }

        Machine { modules }
    }

    /// Pushes the button once, returning every pulse sent, in order.
    fn press(&mut self) -> Vec<Pulse<'a>> {
        let mut sent = vec![];
        let mut queue = VecDeque::from([("button", false, "broadcaster")]);

        while let Some(pulse) = queue.pop_front() {
            sent.push(pulse);
            let (source, high, name) = pulse;

            let Some(module) = self.modules.get_mut(name) else {
                continue;
            };

            let out = match &mut module.kind {
                Kind::Broadcast => high,
                Kind::FlipFlop(_) if high => continue,
                Kind::FlipFlop(on) => {
                    *on = !*on;
                    *on
                }
                Kind::Conjunction(memory) => {
                    memory.insert(source, high);
                    !memory.values().all(|&h| h)
                }
            };

            for &dest in &module.dests {
                queue.push_back((name, out, dest));
            }
        }

        sent
    }
}

fn solve(input: &str) -> usize {
    let mut machine = Machine::parse(input);
    let mut counts = [0, 0];

    for _ in 0..1000 {
        for (_, high, _) in machine.press() {
            counts[high as usize] += 1;
        }
    }

    counts[0] * counts[1]
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// `rx` is fed by a single conjunction, which only sends low once all of its
/// inputs last sent high. Each input does so periodically, so the answer is
/// the least common multiple of the press on which each first sends high.
fn bonus(input: &str) -> u64 {
    let mut machine = Machine::parse(input);

    let (&hub, _) = machine
        .modules
        .iter()
        .find(|(_, m)| m.dests.contains(&"rx"))
        .unwrap();

    let Kind::Conjunction(memory) = &machine.modules[hub].kind else {
        unreachable!()
    };
    let mut waiting = memory.keys().copied().collect::<Vec<_>>();
    let mut periods = vec![];

    for presses in 1.. {
        for (source, high, dest) in machine.press() {
            if high && dest == hub && waiting.contains(&source) {
                waiting.retain(|&s| s != source);
                periods.push(presses);
            }
        }

        if waiting.is_empty() {
            break;
        }
    }

    periods.into_iter().fold(1, |acc, p| acc / gcd(acc, p) * p)
}

#[test]
fn test() {
    let example_input = "
broadcaster -> a, b, c
%a -> b
%b -> c
%c -> inv
&inv -> a
";

    assert_eq!(solve(example_input), 32000000);

    let example_input = "
broadcaster -> a
%a -> inv, con
&inv -> b
%b -> con
&con -> output
";

    assert_eq!(solve(example_input), 11687500);

    // two counters, the first completing a cycle every 4 presses, the other every 8
    let example_input = "
broadcaster -> a1, b1
%a1 -> a2
%a2 -> ia
&ia -> hub
%b1 -> b2
%b2 -> b3
%b3 -> ib
&ib -> hub
&hub -> rx
";

    assert_eq!(bonus(example_input), 8);
}
