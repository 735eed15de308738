use aoc_harness::time;
use fxhash::{FxHashMap, FxHashSet};
use tuple::Map;

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

#[derive(Debug, Clone)]
struct Brick {
    zmin: i32,
    height: i32,
    cells: Vec<(i32, i32)>,
}

fn parse(input: &str) -> Vec<Brick> {
    let mut bricks = input
        .trim()
        .lines()
        .map(|line| {
            let ((x1, y1, z1), (x2, y2, z2)) = line.trim().split_once('~').unwrap().map(|s| {
                let c = s
                    .split(',')
                    .map(|n| n.parse::<i32>().unwrap())
                    .collect::<Vec<_>>();
                (c[0], c[1], c[2])
            });

            Brick {
                zmin: z1.min(z2),
                height: (z2 - z1).abs() + 1,
                cells: (x1.min(x2)..=x1.max(x2))
                    .flat_map(|x| (y1.min(y2)..=y1.max(y2)).map(move |y| (x, y)))
                    .collect(),
            }
        })
        .collect::<Vec<_>>();

    bricks.sort_by_key(|b| b.zmin);
    bricks
}

/// Which bricks rest directly on each brick, and which each brick rests on,
/// once everything has settled.
struct Stack {
    above: Vec<FxHashSet<usize>>,
    below: Vec<FxHashSet<usize>>,
}

fn settle(bricks: &[Brick]) -> Stack {
    // top of the pile per column: height and brick
    let mut top: FxHashMap<(i32, i32), (i32, usize)> = FxHashMap::default();
    let mut above = vec![FxHashSet::default(); bricks.len()];
    let mut below = vec![FxHashSet::default(); bricks.len()];

    for (i, brick) in bricks.iter().enumerate() {
        let rest = brick
            .cells
            .iter()
            .filter_map(|c| top.get(c))
            .map(|&(z, _)| z)
            .max()
            .unwrap_or(0);

        for c in &brick.cells {
            if let Some(&(z, j)) = top.get(c) {
                if z == rest {
                    below[i].insert(j);
                    above[j].insert(i);
                }
            }
            top.insert(*c, (rest + brick.height, i));
        }
    }

    Stack { above, below }
}

fn solve(input: &str) -> usize {
    let stack = settle(&parse(input));

    (0..stack.above.len())
        .filter(|&i| stack.above[i].iter().all(|&j| stack.below[j].len() > 1))
        .count()
}

/// How many other bricks fall when brick `i` is taken out.
fn chain_reaction(stack: &Stack, i: usize) -> usize {
    let mut fallen = FxHashSet::from_iter([i]);
    let mut todo = vec![i];

    while let Some(j) = todo.pop() {
        for &k in &stack.above[j] {
            if !fallen.contains(&k) && stack.below[k].iter().all(|b| fallen.contains(b)) {
                fallen.insert(k);
                todo.push(k);
            }
        }
    }

    fallen.len() - 1
}

fn bonus(input: &str) -> usize {
    let stack = settle(&parse(input));

    (0..stack.above.len())
        .map(|i| chain_reaction(&stack, i))
        .sum()
}

#[test]
fn test() {
    let example_input = "
1,0,1~1,2,1
0,0,2~2,0,2
0,2,3~2,2,3
0,0,4~0,2,4
2,0,5~2,2,5
0,1,6~2,1,6
1,1,8~1,1,9
";

    assert_eq!(solve(example_input), 5);
    assert_eq!(bonus(example_input), 7);
}
