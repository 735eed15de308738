use aoc_harness::time;
use good_lp::{constraint, microlp, variable, variables, Expression, Solution, SolverModel};

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

#[derive(Debug, Clone)]
struct Machine {
    lights: u32,
    buttons: Vec<Vec<usize>>,
    joltage: Vec<u32>,
}

fn parse(input: &str) -> Vec<Machine> {
    input
        .trim()
        .lines()
        .map(|line| {
            let mut machine = Machine {
                lights: 0,
                buttons: vec![],
                joltage: vec![],
            };

            for part in line.split_whitespace() {
                let inner = &part[1..part.len() - 1];
                match part.as_bytes()[0] {
                    b'[' => {
                        machine.lights = inner
                            .bytes()
                            .enumerate()
                            .filter(|&(_, c)| c == b'#')
                            .fold(0, |mask, (i, _)| mask | 1 << i);
                    }
                    b'(' => machine
                        .buttons
                        .push(inner.split(',').map(|n| n.parse().unwrap()).collect()),
                    b'{' => {
                        machine.joltage = inner.split(',').map(|n| n.parse().unwrap()).collect()
                    }
                    _ => unreachable!(),
                }
            }

            machine
        })
        .collect()
}

impl Machine {
    /// Pressing a button twice undoes it, so look for the smallest subset
    /// of buttons whose toggles add up to the indicator pattern.
    fn fewest_toggles(&self) -> u32 {
        let masks = self
            .buttons
            .iter()
            .map(|b| b.iter().fold(0u32, |mask, &i| mask | 1 << i))
            .collect::<Vec<_>>();

        (0u32..1 << masks.len())
            .filter(|subset| {
                let lit = masks
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| subset & (1 << i) != 0)
                    .fold(0, |lit, (_, m)| lit ^ m);
                lit == self.lights
            })
            .map(u32::count_ones)
            .min()
            .unwrap()
    }

    /// Integer program: minimise total presses such that every counter
    /// reaches its target exactly.
    fn fewest_presses(&self) -> u64 {
        let mut vars = variables!();
        let presses = self
            .buttons
            .iter()
            .map(|_| vars.add(variable().integer().min(0)))
            .collect::<Vec<_>>();

        let total: Expression = presses.iter().copied().sum();
        let mut problem = vars.minimise(total).using(microlp);

        for (counter, &target) in self.joltage.iter().enumerate() {
            let reached: Expression = self
                .buttons
                .iter()
                .zip(&presses)
                .filter(|(button, _)| button.contains(&counter))
                .map(|(_, &v)| v)
                .sum();
            let target = target as f64;
            problem = problem.with(constraint!(reached == target));
        }

        let solution = problem.solve().unwrap();
        presses
            .iter()
            .map(|&v| solution.value(v))
            .sum::<f64>()
            .round() as u64
    }
}

fn solve(input: &str) -> u32 {
    parse(input).iter().map(Machine::fewest_toggles).sum()
}

fn bonus(input: &str) -> u64 {
    parse(input).iter().map(Machine::fewest_presses).sum()
}

#[test]
fn test() {
    let example_input = "
[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}
[...#.] (0,2,3,4) (2,3) (0,4) (0,1,2) (1,2,3,4) {7,5,12,7,2}
[.###.#] (0,1,2,3,4) (0,3,4) (0,1,2,4,5) (1,2) {10,11,11,5,10,5}
";

    assert_eq!(solve(example_input), 7);
    assert_eq!(bonus(example_input), 33);
}
