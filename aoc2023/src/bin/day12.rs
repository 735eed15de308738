use aoc_harness::time;
use cached::proc_macro::cached;
use rayon::prelude::*;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 12)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

/// Ways to place the damaged `groups` onto `springs`, where `?` may be
/// either operational or damaged.
#[cached]
fn arrangements(springs: Vec<u8>, groups: Vec<usize>) -> u64 {
    let Some(&first) = groups.first() else {
        return if springs.contains(&b'#') { 0 } else { 1 };
    };

    let needed = groups.iter().sum::<usize>() + groups.len() - 1;
    if springs.len() < needed {
        return 0;
    }

    let skip = || arrangements(springs[1..].to_vec(), groups.clone());

    let place = || {
        let fits = !springs[..first].contains(&b'.') && springs.get(first) != Some(&b'#');
        if !fits {
            return 0;
        }

        let rest = springs.get(first + 1..).unwrap_or_default().to_vec();
        arrangements(rest, groups[1..].to_vec())
    };

    match springs[0] {
        b'.' => skip(),
        b'#' => place(),
        _ => skip() + place(),
    }
}

fn parse(line: &str, copies: usize) -> (Vec<u8>, Vec<usize>) {
    let (springs, groups) = line.trim().split_once(' ').unwrap();

    let springs = vec![springs; copies].join("?").into_bytes();
    let groups = vec![groups; copies]
        .join(",")
        .split(',')
        .map(|n| n.parse().unwrap())
        .collect();

    (springs, groups)
}

fn solve(input: &str) -> u64 {
    input
        .trim()
        .lines()
        .map(|line| {
            let (springs, groups) = parse(line, 1);
            arrangements(springs, groups)
        })
        .sum()
}

fn bonus(input: &str) -> u64 {
    input
        .trim()
        .lines()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|line| {
            let (springs, groups) = parse(line, 5);
            arrangements(springs, groups)
        })
        .sum()
}

#[test]
fn test() {
    let example_input = "
???.### 1,1,3
.??..??...?##. 1,1,3
?#?#?#?#?#?#?#? 1,3,1,6
????.#...#... 4,1,1
????.######..#####. 1,6,5
?###???????? 3,2,1
";

    assert_eq!(solve(example_input), 21);
    assert_eq!(bonus(example_input), 525152);
}
