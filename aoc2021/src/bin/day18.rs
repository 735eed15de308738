use aoc_harness::time;
use itertools::Itertools;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 18)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

/// A snailfish number as its regular numbers from left to right, each with
/// the number of pairs it is nested in.
type Number = Vec<(u32, u8)>;

fn parse(line: &str) -> Number {
    let mut depth = 0;
    let mut number = vec![];

    for c in line.trim().chars() {
        match c {
            '[' => depth += 1,
            ']' => depth -= 1,
            ',' => {}
            _ => number.push((c.to_digit(10).unwrap(), depth)),
        }
    }

    number
}

fn explode(n: &mut Number) -> bool {
    let Some(i) = n.iter().position(|&(_, d)| d > 4) else {
        return false;
    };

    let (left, right) = (n[i].0, n[i + 1].0);
    if i > 0 {
        n[i - 1].0 += left;
    }
    if i + 2 < n.len() {
        n[i + 2].0 += right;
    }

    n.splice(i..i + 2, [(0, 4)]);
    true
}

fn split(n: &mut Number) -> bool {
    let Some(i) = n.iter().position(|&(v, _)| v >= 10) else {
        return false;
    };

    let (v, d) = n[i];
    n.splice(i..=i, [(v / 2, d + 1), ((v + 1) / 2, d + 1)]);
    true
}

fn add(a: &Number, b: &Number) -> Number {
    let mut sum = a
        .iter()
        .chain(b)
        .map(|&(v, d)| (v, d + 1))
        .collect::<Number>();

    while explode(&mut sum) || split(&mut sum) {}

    sum
}

fn magnitude(n: &Number) -> u32 {
    let mut n = n.clone();

    while n.len() > 1 {
        let deepest = n.iter().map(|&(_, d)| d).max().unwrap();
        let i = n.iter().position(|&(_, d)| d == deepest).unwrap();
        let value = 3 * n[i].0 + 2 * n[i + 1].0;
        n.splice(i..i + 2, [(value, deepest - 1)]);
    }

    n[0].0
}

fn solve(input: &str) -> u32 {
    let total = input
        .trim()
        .lines()
        .map(parse)
        .reduce(|a, b| add(&a, &b))
        .unwrap();

    magnitude(&total)
}

fn bonus(input: &str) -> u32 {
    let numbers = input.trim().lines().map(parse).collect_vec();

    numbers
        .iter()
        .permutations(2)
        .map(|pair| magnitude(&add(pair[0], pair[1])))
        .max()
        .unwrap()
}

#[test]
fn test() {
    assert_eq!(magnitude(&parse("[[1,2],[[3,4],5]]")), 143);
    assert_eq!(
        magnitude(&parse("[[[[8,7],[7,7]],[[8,6],[7,7]]],[[[0,7],[6,6]],[8,7]]]")),
        3488
    );
    assert_eq!(solve("[[[[4,3],4],4],[7,[[8,4],9]]]\n[1,1]"), 1384);

    let example_input = "
[[[0,[5,8]],[[1,7],[9,6]]],[[4,[1,2]],[[1,4],2]]]
[[[5,[2,8]],4],[5,[[9,9],0]]]
[6,[[[6,2],[5,6]],[[7,6],[4,7]]]]
[[[6,[0,7]],[0,9]],[4,[9,[9,0]]]]
[[[7,[6,4]],[3,[1,3]]],[[[5,5],1],9]]
[[6,[[7,3],[3,2]]],[[[3,8],[5,7]],4]]
[[[[5,4],[7,7]],8],[[8,3],8]]
[[9,3],[[9,9],[6,[4,9]]]]
[[2,[[7,7],7]],[[5,8],[[9,3],[0,2]]]]
[[[[5,2],5],[8,[3,7]]],[[5,[7,5]],[4,4]]]
";

    assert_eq!(solve(example_input), 4140);
    assert_eq!(bonus(example_input), 3993);
}
