use aoc_harness::time;
use rayon::prelude::*;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 20)?;

    time(|| {
        println!("First part: {}", solve(&input, 100));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input, 100));
    });

    Ok(())
}

type Pos = (i32, i32);

/// The racetrack in order from start to end.
fn track(input: &str) -> Vec<Pos> {
    let grid: Vec<&[u8]> = input.trim().lines().map(|l| l.trim().as_bytes()).collect();
    let find = |target: u8| {
        grid.iter()
            .enumerate()
            .find_map(|(y, row)| {
                row.iter()
                    .position(|&c| c == target)
                    .map(|x| (x as i32, y as i32))
            })
            .unwrap()
    };

    let (start, end) = (find(b'S'), find(b'E'));
    let mut path = vec![start];
    let mut prev = start;

    while *path.last().unwrap() != end {
        let (x, y) = *path.last().unwrap();
        let next = [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]
            .into_iter()
            .find(|&(nx, ny)| (nx, ny) != prev && grid[ny as usize][nx as usize] != b'#')
            .unwrap();
        prev = (x, y);
        path.push(next);
    }

    path
}

fn cheats(input: &str, max_cheat: usize, min_saving: usize) -> usize {
    let path = track(input);

    (0..path.len())
        .into_par_iter()
        .map(|i| {
            let (ax, ay) = path[i];
            path.iter()
                .enumerate()
                .skip(i + min_saving)
                .filter(|&(j, &(bx, by))| {
                    let d = (ax.abs_diff(bx) + ay.abs_diff(by)) as usize;
                    d <= max_cheat && j - i >= d + min_saving
                })
                .count()
        })
        .sum()
}

fn solve(input: &str, min_saving: usize) -> usize {
    cheats(input, 2, min_saving)
}

fn bonus(input: &str, min_saving: usize) -> usize {
    cheats(input, 20, min_saving)
}

#[test]
fn test() {
    let example_input = "
###############
#...#...#.....#
#.#.#.#.#.###.#
#S#...#.#.#...#
#######.#.#.###
#######.#.#...#
#######.#.###.#
###..E#...#...#
###.#######.###
#...###...#...#
#.#####.#.###.#
#.#...#.#.#...#
#.#.#.#.#.#.###
#...#...#...###
###############
";

    assert_eq!(solve(example_input, 64), 1);
    assert_eq!(solve(example_input, 20), 5);
    assert_eq!(bonus(example_input, 76), 3);
    assert_eq!(bonus(example_input, 74), 7);
}
