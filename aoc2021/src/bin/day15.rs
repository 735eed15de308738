use std::{cmp::Reverse, collections::BinaryHeap};

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

type Grid = Vec<Vec<u32>>;

fn parse(input: &str) -> Grid {
    input
        .trim()
        .lines()
        .map(|line| line.trim().chars().map(|c| c.to_digit(10).unwrap()).collect())
        .collect()
}

fn lowest_risk(grid: &Grid) -> u32 {
    let h = grid.len();
    let w = grid[0].len();

    let mut best = vec![vec![u32::MAX; w]; h];
    let mut queue = BinaryHeap::new();
    best[0][0] = 0;
    queue.push(Reverse((0, 0, 0)));

    while let Some(Reverse((risk, x, y))) = queue.pop() {
        if (x, y) == (w - 1, h - 1) {
            return risk;
        }
        if risk > best[y][x] {
            continue;
        }

        let mut next = vec![];
        if x > 0 {
            next.push((x - 1, y));
        }
        if y > 0 {
            next.push((x, y - 1));
        }
        if x + 1 < w {
            next.push((x + 1, y));
        }
        if y + 1 < h {
            next.push((x, y + 1));
        }

        for (nx, ny) in next {
            let r = risk + grid[ny][nx];
            if r < best[ny][nx] {
                best[ny][nx] = r;
                queue.push(Reverse((r, nx, ny)));
            }
        }
    }

    unreachable!()
}

fn solve(input: &str) -> u32 {
    lowest_risk(&parse(input))
}

fn expand(grid: &Grid) -> Grid {
    let h = grid.len();
    let w = grid[0].len();

    (0..h * 5)
        .map(|y| {
            (0..w * 5)
                .map(|x| {
                    let r = grid[y % h][x % w] + (x / w + y / h) as u32;
                    (r - 1) % 9 + 1
                })
                .collect()
        })
        .collect()
}

fn bonus(input: &str) -> u32 {
    lowest_risk(&expand(&parse(input)))
}

#[test]
fn test() {
    let example_input = "
1163751742
1381373672
2136511328
3694931569
7463417111
1319128137
1359912421
3125421639
1293138521
2311944581
";

    assert_eq!(solve(example_input), 40);
    assert_eq!(bonus(example_input), 315);
}
