use std::collections::VecDeque;

use aoc_harness::time;
use fxhash::FxHashSet;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 22)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

type Deck = VecDeque<u8>;

fn parse(input: &str) -> (Deck, Deck) {
    let (a, b) = input.trim().split_once("\n\n").unwrap();
    let deck = |s: &str| {
        s.lines()
            .skip(1)
            .map(|line| line.trim().parse::<u8>().unwrap())
            .collect::<Deck>()
    };

    (deck(a), deck(b))
}

fn score(deck: &Deck) -> usize {
    deck.iter()
        .rev()
        .enumerate()
        .map(|(i, &card)| (i + 1) * card as usize)
        .sum()
}

fn solve(input: &str) -> usize {
    let (mut a, mut b) = parse(input);

    while !a.is_empty() && !b.is_empty() {
        let x = a.pop_front().unwrap();
        let y = b.pop_front().unwrap();

        if x > y {
            a.extend([x, y]);
        } else {
            b.extend([y, x]);
        }
    }

    score(if a.is_empty() { &b } else { &a })
}

/// Plays a recursive game, returns whether player one won. A configuration
/// seen before within the same game ends it in player one's favour.
fn recursive_combat(a: &mut Deck, b: &mut Deck) -> bool {
    let mut seen = FxHashSet::default();

    while !a.is_empty() && !b.is_empty() {
        if !seen.insert((a.clone(), b.clone())) {
            return true;
        }

        let x = a.pop_front().unwrap();
        let y = b.pop_front().unwrap();

        let a_wins = if a.len() >= x as usize && b.len() >= y as usize {
            let mut sub_a = a.iter().take(x as usize).copied().collect();
            let mut sub_b = b.iter().take(y as usize).copied().collect();
            recursive_combat(&mut sub_a, &mut sub_b)
        } else {
            x > y
        };

        if a_wins {
            a.extend([x, y]);
        } else {
            b.extend([y, x]);
        }
    }

    b.is_empty()
}

fn bonus(input: &str) -> usize {
    let (mut a, mut b) = parse(input);

    if recursive_combat(&mut a, &mut b) {
        score(&a)
    } else {
        score(&b)
    }
}

#[test]
fn test() {
    let example_input = "
Player 1:
9
2
6
3
1

Player 2:
5
8
4
7
10
";

    assert_eq!(solve(example_input), 306);
    assert_eq!(bonus(example_input), 291);

    // would loop forever without the repetition rule
    let looping = "
Player 1:
43
19

Player 2:
2
29
14
";

    let (mut a, mut b) = parse(looping);
    assert!(recursive_combat(&mut a, &mut b));
}
