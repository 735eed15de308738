use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 6)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

fn marker(input: &str, size: usize) -> usize {
    input
        .trim()
        .as_bytes()
        .windows(size)
        .position(|w| {
            let set = w.iter().fold(0u32, |set, b| set | 1 << (b - b'a'));
            set.count_ones() as usize == size
        })
        .unwrap()
        + size
}

fn solve(input: &str) -> usize {
    marker(input, 4)
}

fn bonus(input: &str) -> usize {
    marker(input, 14)
}

#[test]
fn test() {
    assert_eq!(solve("mjqjpqmgbljsphdztnvjfqwrcgsmlb"), 7);
    assert_eq!(solve("bvwbjplbgvbhsrlpgdmjqwftvncz"), 5);
    assert_eq!(solve("nppdvjthqldpwncqszvftbrmjlhg"), 6);

    assert_eq!(bonus("mjqjpqmgbljsphdztnvjfqwrcgsmlb"), 19);
    assert_eq!(bonus("bvwbjplbgvbhsrlpgdmjqwftvncz"), 23);
}
