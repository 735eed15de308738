use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 5)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

// the row/column partitioning is just a 10-bit binary number
fn seat_id(pass: &str) -> u32 {
    pass.chars().fold(0, |id, c| {
        (id << 1)
            | match c {
                'B' | 'R' => 1,
                'F' | 'L' => 0,
                _ => unreachable!(),
            }
    })
}

fn solve(input: &str) -> u32 {
    input
        .trim()
        .lines()
        .map(|line| seat_id(line.trim()))
        .max()
        .unwrap()
}

fn bonus(input: &str) -> u32 {
    let mut ids = input
        .trim()
        .lines()
        .map(|line| seat_id(line.trim()))
        .collect::<Vec<_>>();

    ids.sort();

    ids.windows(2)
        .find(|w| w[1] == w[0] + 2)
        .map(|w| w[0] + 1)
        .unwrap()
}

#[test]
fn test() {
    assert_eq!(seat_id("FBFBBFFRLR"), 357);
    assert_eq!(seat_id("BFFFBBFRRR"), 567);
    assert_eq!(seat_id("FFFBBBFRRR"), 119);
    assert_eq!(seat_id("BBFFBBFRLL"), 820);

    assert_eq!(
        solve(
            "
FBFBBFFRLR
BFFFBBFRRR
FFFBBBFRRR
BBFFBBFRLL
"
        ),
        820
    );

    // seats 5, 6 and 8 are taken
    assert_eq!(bonus("FFFFFFFRLR\nFFFFFFBLLL\nFFFFFFFRRL"), 7);
}
