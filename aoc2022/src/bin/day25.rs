use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 25)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    Ok(())
}

fn from_snafu(s: &str) -> i64 {
    s.chars().fold(0, |n, c| {
        n * 5
            + match c {
                '=' => -2,
                '-' => -1,
                _ => c.to_digit(10).unwrap() as i64,
            }
    })
}

fn to_snafu(mut n: i64) -> String {
    let mut digits = vec![];
    while n != 0 {
        let (digit, carry) = match n.rem_euclid(5) {
            3 => ('=', 1),
            4 => ('-', 1),
            d => ((b'0' + d as u8) as char, 0),
        };
        digits.push(digit);
        n = n.div_euclid(5) + carry;
    }
    digits.iter().rev().collect()
}

fn solve(input: &str) -> String {
    to_snafu(input.trim().lines().map(|l| from_snafu(l.trim())).sum())
}

#[test]
fn test() {
    assert_eq!(from_snafu("1=-0-2"), 1747);
    assert_eq!(to_snafu(2022), "1=11-2");

    let example_input = "
1=-0-2
12111
2=0=
21
2=01
111
20012
112
1=-1=
1-12
12
1=
122
";

    assert_eq!(solve(example_input), "2=-1=0");
}
