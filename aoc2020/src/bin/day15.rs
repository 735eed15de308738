use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 15)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        // ±500ms, flat array beats a hash map by a mile here
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

fn play(input: &str, turns: usize) -> u32 {
    let starting = input
        .trim()
        .split(',')
        .map(|n| n.parse::<u32>().unwrap())
        .collect::<Vec<_>>();

    // turn (1-based) on which a number was last spoken, 0 = never
    let size = turns.max(*starting.iter().max().unwrap() as usize + 1);
    let mut last_seen = vec![0u32; size];

    for (i, &n) in starting[..starting.len() - 1].iter().enumerate() {
        last_seen[n as usize] = i as u32 + 1;
    }

    let mut spoken = *starting.last().unwrap();

    for turn in starting.len()..turns {
        let turn = turn as u32;
        let prev = last_seen[spoken as usize];
        last_seen[spoken as usize] = turn;
        spoken = if prev == 0 { 0 } else { turn - prev };
    }

    spoken
}

fn solve(input: &str) -> u32 {
    play(input, 2020)
}

fn bonus(input: &str) -> u32 {
    play(input, 30_000_000)
}

#[test]
fn test() {
    assert_eq!(play("0,3,6", 4), 0);
    assert_eq!(play("0,3,6", 10), 0);
    assert_eq!(solve("0,3,6"), 436);
    assert_eq!(solve("1,3,2"), 1);
    assert_eq!(solve("2,1,3"), 10);
    assert_eq!(solve("3,1,2"), 1836);

    assert_eq!(bonus("0,3,6"), 175594);
}
