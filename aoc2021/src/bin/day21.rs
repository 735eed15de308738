use aoc_harness::time;
use cached::proc_macro::cached;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 21)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

fn parse(input: &str) -> (u64, u64) {
    let mut positions = input
        .trim()
        .lines()
        .map(|line| line.rsplit(' ').next().unwrap().parse().unwrap());

    (positions.next().unwrap(), positions.next().unwrap())
}

fn advance(pos: u64, roll: u64) -> u64 {
    (pos + roll - 1) % 10 + 1
}

fn solve(input: &str) -> u64 {
    let (mut current, mut other) = parse(input);
    let (mut current_score, mut other_score) = (0, 0);
    let mut die = (1..=100u64).cycle();
    let mut rolls = 0;

    loop {
        let roll = die.by_ref().take(3).sum::<u64>();
        rolls += 3;

        current = advance(current, roll);
        current_score += current;
        if current_score >= 1000 {
            return other_score * rolls;
        }

        std::mem::swap(&mut current, &mut other);
        std::mem::swap(&mut current_score, &mut other_score);
    }
}

/// How many of the 27 universes split off by three rolls of the Dirac die
/// produce each total.
const SPLITS: [(u64, u64); 7] = [(3, 1), (4, 3), (5, 6), (6, 7), (7, 6), (8, 3), (9, 1)];

/// Universes in which the player to move wins, and in which the other does.
#[cached]
fn wins(pos: u64, score: u64, other_pos: u64, other_score: u64) -> (u64, u64) {
    if other_score >= 21 {
        return (0, 1);
    }

    SPLITS
        .iter()
        .fold((0, 0), |(mine, theirs), &(roll, universes)| {
            let next = advance(pos, roll);
            let (them, me) = wins(other_pos, other_score, next, score + next);
            (mine + me * universes, theirs + them * universes)
        })
}

fn bonus(input: &str) -> u64 {
    let (a, b) = parse(input);
    let (x, y) = wins(a, 0, b, 0);
    x.max(y)
}

#[test]
fn test() {
    let example_input = "
Player 1 starting position: 4
Player 2 starting position: 8
";

    assert_eq!(solve(example_input), 739785);
    assert_eq!(bonus(example_input), 444356092776315);
}
