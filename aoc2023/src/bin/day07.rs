use aoc_harness::time;
use itertools::Itertools;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 7)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

/// Hand strength: the sorted group sizes compare the way hand types rank.
fn kind(cards: &[u8], jokers: bool) -> Vec<usize> {
    let counts = cards.iter().filter(|&&c| !(jokers && c == b'J')).counts();
    let mut groups = counts.into_values().sorted().rev().collect::<Vec<_>>();

    let wild = if jokers {
        cards.iter().filter(|&&c| c == b'J').count()
    } else {
        0
    };

    match groups.first_mut() {
        Some(g) => *g += wild,
        None => groups.push(wild),
    }

    groups
}

fn strength(card: u8, jokers: bool) -> usize {
    let order: &[u8] = if jokers {
        b"J23456789TQKA"
    } else {
        b"23456789TJQKA"
    };
    order.iter().position(|&c| c == card).unwrap()
}

fn winnings(input: &str, jokers: bool) -> usize {
    input
        .trim()
        .lines()
        .map(|line| {
            let (hand, bid) = line.trim().split_once(' ').unwrap();
            let hand = hand.as_bytes();
            let key = (
                kind(hand, jokers),
                hand.iter().map(|&c| strength(c, jokers)).collect::<Vec<_>>(),
            );
            (key, bid.parse::<usize>().unwrap())
        })
        .sorted()
        .enumerate()
        .map(|(rank, (_, bid))| (rank + 1) * bid)
        .sum()
}

fn solve(input: &str) -> usize {
    winnings(input, false)
}

fn bonus(input: &str) -> usize {
    winnings(input, true)
}

#[test]
fn test() {
    let example_input = "
32T3K 765
T55J5 684
KK677 28
KTJJT 220
QQQJA 483
";

    assert_eq!(solve(example_input), 6440);
    assert_eq!(bonus(example_input), 5905);
}
