use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 15)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

fn hash(s: &str) -> usize {
    s.bytes().fold(0, |h, c| (h + c as usize) * 17 % 256)
}

fn solve(input: &str) -> usize {
    input.trim().split(',').map(hash).sum()
}

fn bonus(input: &str) -> usize {
    let mut boxes: Vec<Vec<(&str, usize)>> = vec![vec![]; 256];

    for step in input.trim().split(',') {
        if let Some(label) = step.strip_suffix('-') {
            boxes[hash(label)].retain(|&(l, _)| l != label);
        } else {
            let (label, focal) = step.split_once('=').unwrap();
            let focal = focal.parse().unwrap();
            let lenses = &mut boxes[hash(label)];
            match lenses.iter_mut().find(|(l, _)| *l == label) {
                Some(lens) => lens.1 = focal,
                None => lenses.push((label, focal)),
            }
        }
    }

    boxes
        .iter()
        .enumerate()
        .flat_map(|(b, lenses)| {
            lenses
                .iter()
                .enumerate()
                .map(move |(slot, &(_, focal))| (b + 1) * (slot + 1) * focal)
        })
        .sum()
}

#[test]
fn test() {
    assert_eq!(hash("HASH"), 52);

    let example_input = "rn=1,cm-,qp=3,cm=2,qp-,pc=4,ot=9,ab=5,pc-,pc=6,ot=7";

    assert_eq!(solve(example_input), 1320);
    assert_eq!(bonus(example_input), 145);
}
