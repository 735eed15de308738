use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 10)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Dir {
    Up,
    Right,
    Down,
    Left,
}

use Dir::*;

impl Dir {
    fn step(self, (y, x): Pos) -> Pos {
        match self {
            Up => (y - 1, x),
            Right => (y, x + 1),
            Down => (y + 1, x),
            Left => (y, x - 1),
        }
    }

    fn opposite(self) -> Dir {
        match self {
            Up => Down,
            Right => Left,
            Down => Up,
            Left => Right,
        }
    }
}

type Pos = (i64, i64);

fn connections(pipe: char) -> &'static [Dir] {
    match pipe {
        '|' => &[Up, Down],
        '-' => &[Left, Right],
        'L' => &[Up, Right],
        'J' => &[Up, Left],
        '7' => &[Down, Left],
        'F' => &[Down, Right],
        _ => &[],
    }
}

/// The tiles of the main loop, in walking order, starting at `S`.
fn main_loop(input: &str) -> Vec<Pos> {
    let grid = input
        .trim()
        .lines()
        .map(|line| line.trim().chars().collect::<Vec<_>>())
        .collect::<Vec<_>>();

    let get = |(y, x): Pos| {
        if y < 0 || x < 0 {
            return '.';
        }
        grid.get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or('.')
    };

    let start = grid
        .iter()
        .enumerate()
        .find_map(|(y, row)| {
            let x = row.iter().position(|&c| c == 'S')?;
            Some((y as i64, x as i64))
        })
        .unwrap();

    // whichever neighbour connects back to the start
    let mut dir = [Up, Right, Down, Left]
        .into_iter()
        .find(|d| connections(get(d.step(start))).contains(&d.opposite()))
        .unwrap();

    let mut trail = vec![start];
    let mut at = dir.step(start);

    while at != start {
        trail.push(at);
        dir = *connections(get(at))
            .iter()
            .find(|&&d| d != dir.opposite())
            .unwrap();
        at = dir.step(at);
    }

    trail
}

fn solve(input: &str) -> i64 {
    main_loop(input).len() as i64 / 2
}

/// Shoelace for the loop's area, then Pick's theorem for the tiles strictly
/// inside it.
fn bonus(input: &str) -> i64 {
    let trail = main_loop(input);
    let n = trail.len();

    let double_area = (0..n)
        .map(|i| {
            let (y1, x1) = trail[i];
            let (y2, x2) = trail[(i + 1) % n];
            x1 * y2 - x2 * y1
        })
        .sum::<i64>()
        .abs();

    double_area / 2 - n as i64 / 2 + 1
}

#[test]
fn test() {
    let example_input = "
..F7.
.FJ|.
SJ.L7
|F--J
LJ...
";

    assert_eq!(solve(example_input), 8);
    assert_eq!(bonus(example_input), 1);

    let example_input = "
...........
.S-------7.
.|F-----7|.
.||.....||.
.||.....||.
.|L-7.F-J|.
.|..|.|..|.
.L--J.L--J.
...........
";

    assert_eq!(solve(example_input), 23);
    assert_eq!(bonus(example_input), 4);

    let example_input = "
.F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...
";

    assert_eq!(solve(example_input), 70);
    assert_eq!(bonus(example_input), 8);
}
