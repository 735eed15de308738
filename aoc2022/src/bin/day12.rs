use std::collections::VecDeque;

use aoc_harness::time;

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

struct Heightmap {
    heights: Vec<Vec<u8>>,
    start: (usize, usize),
    end: (usize, usize),
}

fn parse(input: &str) -> Heightmap {
    let mut start = (0, 0);
    let mut end = (0, 0);

    let heights = input
        .trim()
        .lines()
        .enumerate()
        .map(|(y, line)| {
            line.trim()
                .bytes()
                .enumerate()
                .map(|(x, b)| match b {
                    b'S' => {
                        start = (x, y);
                        b'a'
                    }
                    b'E' => {
                        end = (x, y);
                        b'z'
                    }
                    _ => b,
                })
                .collect()
        })
        .collect();

    Heightmap {
        heights,
        start,
        end,
    }
}

/// Walks down from the summit: the distance from every square to `end`.
fn distances_to_end(map: &Heightmap) -> Vec<Vec<Option<usize>>> {
    let h = map.heights.len();
    let w = map.heights[0].len();

    let mut dist = vec![vec![None; w]; h];
    let mut queue = VecDeque::from([(map.end, 0)]);
    dist[map.end.1][map.end.0] = Some(0);

    while let Some(((x, y), d)) = queue.pop_front() {
        let here = map.heights[y][x];
        let candidates = [
            (x.wrapping_sub(1), y),
            (x + 1, y),
            (x, y.wrapping_sub(1)),
            (x, y + 1),
        ];

        for (nx, ny) in candidates {
            if nx >= w || ny >= h || dist[ny][nx].is_some() {
                continue;
            }

            // climbing from (nx, ny) to (x, y) is at most one step up
            if map.heights[ny][nx] + 1 >= here {
                dist[ny][nx] = Some(d + 1);
                queue.push_back(((nx, ny), d + 1));
            }
        }
    }

    dist
}

fn solve(input: &str) -> usize {
    let map = parse(input);
    distances_to_end(&map)[map.start.1][map.start.0].unwrap()
}

fn bonus(input: &str) -> usize {
    let map = parse(input);
    let dist = distances_to_end(&map);

    map.heights
        .iter()
        .flatten()
        .zip(dist.iter().flatten())
        .filter(|(&height, _)| height == b'a')
        .filter_map(|(_, &d)| d)
        .min()
        .unwrap()
}

#[test]
fn test() {
    let example_input = "
Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi
";

    assert_eq!(solve(example_input), 31);
    assert_eq!(bonus(example_input), 29);
}
