use aoc_harness::time;
use fxhash::FxHashSet;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 4)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

type Pos = (i32, i32);

fn parse(input: &str) -> FxHashSet<Pos> {
    let mut rolls = FxHashSet::default();
    for (y, line) in input.trim().lines().enumerate() {
        for (x, c) in line.trim().chars().enumerate() {
            if c == '@' {
                rolls.insert((x as i32, y as i32));
            }
        }
    }
    rolls
}

fn accessible(rolls: &FxHashSet<Pos>) -> Vec<Pos> {
    rolls
        .iter()
        .filter(|&&(x, y)| {
            let neighbours = (-1..=1)
                .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
                .filter(|&(dx, dy)| (dx, dy) != (0, 0) && rolls.contains(&(x + dx, y + dy)))
                .count();
            neighbours < 4
        })
        .copied()
        .collect()
}

fn solve(input: &str) -> usize {
    accessible(&parse(input)).len()
}

fn bonus(input: &str) -> usize {
    let mut rolls = parse(input);
    let initial = rolls.len();

    loop {
        let removable = accessible(&rolls);
        if removable.is_empty() {
            break;
        }
        for pos in removable {
            rolls.remove(&pos);
        }
    }

    initial - rolls.len()
}

#[test]
fn test() {
    let example_input = "
..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.
";

    assert_eq!(solve(example_input), 13);
    assert_eq!(bonus(example_input), 43);
}
