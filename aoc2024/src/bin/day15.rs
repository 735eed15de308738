use aoc_harness::time;
use fxhash::FxHashSet;

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

type Pos = (i32, i32);

struct Warehouse {
    grid: Vec<Vec<u8>>,
    robot: Pos,
}

impl Warehouse {
    fn parse(map: &str, wide: bool) -> Self {
        let mut grid: Vec<Vec<u8>> = map
            .trim()
            .lines()
            .map(|line| -> Vec<u8> {
                let line = line.trim().bytes();
                if !wide {
                    return line.collect();
                }
                line.flat_map(|c| match c {
                    b'O' => *b"[]",
                    b'@' => *b"@.",
                    c => [c, c],
                })
                .collect()
            })
            .collect();

        let mut robot = (0, 0);
        for (y, row) in grid.iter_mut().enumerate() {
            if let Some(x) = row.iter().position(|&c| c == b'@') {
                robot = (x as i32, y as i32);
                row[x] = b'.';
            }
        }

        Warehouse { grid, robot }
    }

    fn get(&self, (x, y): Pos) -> u8 {
        self.grid[y as usize][x as usize]
    }

    fn set(&mut self, (x, y): Pos, c: u8) {
        self.grid[y as usize][x as usize] = c;
    }

    /// Moves the robot, pushing along everything in its way, unless some
    /// box in the pile is up against a wall.
    fn step(&mut self, (dx, dy): Pos) {
        let mut seen = FxHashSet::from_iter([self.robot]);
        let mut todo = vec![self.robot];

        while let Some((x, y)) = todo.pop() {
            let next = (x + dx, y + dy);
            let also = match self.get(next) {
                b'#' => return,
                b'O' => vec![next],
                b'[' => vec![next, (next.0 + 1, next.1)],
                b']' => vec![next, (next.0 - 1, next.1)],
                _ => vec![],
            };

            for p in also {
                if seen.insert(p) {
                    todo.push(p);
                }
            }
        }

        let pushed = seen
            .into_iter()
            .filter(|&p| p != self.robot)
            .map(|p| (p, self.get(p)))
            .collect::<Vec<_>>();

        for &(p, _) in &pushed {
            self.set(p, b'.');
        }
        for &((x, y), c) in &pushed {
            self.set((x + dx, y + dy), c);
        }

        self.robot = (self.robot.0 + dx, self.robot.1 + dy);
    }

    fn gps(&self) -> usize {
        let mut sum = 0;
        for (y, row) in self.grid.iter().enumerate() {
            for (x, &c) in row.iter().enumerate() {
                if c == b'O' || c == b'[' {
                    sum += 100 * y + x;
                }
            }
        }
        sum
    }
}

fn run(input: &str, wide: bool) -> usize {
    let (map, moves) = input.trim().split_once("\n\n").unwrap();
    let mut warehouse = Warehouse::parse(map, wide);

    for c in moves.bytes() {
        let dir = match c {
            b'^' => (0, -1),
            b'v' => (0, 1),
            b'<' => (-1, 0),
            b'>' => (1, 0),
            _ => continue,
        };
        warehouse.step(dir);
    }

    warehouse.gps()
}

fn solve(input: &str) -> usize {
    run(input, false)
}

fn bonus(input: &str) -> usize {
    run(input, true)
}

#[test]
fn test() {
    let small = "
########
#..O.O.#
##@.O..#
#...O..#
#.#.O..#
#...O..#
#......#
########

<^^>>>vv<v>>v<<
";

    let large = "
##########
#..O..O.O#
#......O.#
#.OO..O.O#
#..O@..O.#
#O#..O...#
#O..O..O.#
#.OO.O.OO#
#....O...#
##########

<vv>^<v^>v>^vv^v>v<>v^v<v<^vv<<<^><<><>>v<vvv<>^v^>^<<<><<v<<<v^vv^v>^
vvv<<^>^v^^><<>>><>^<<><^vv^^<>vvv<>><^^v>^>vv<>v<<<<v<^v>^<^^>>>^<v<v
><>vv>v^v^<>><>>>><^^>vv>v<^^^>>v^v^<^^>v^^>v^<^v>v<>>v^v^<v>v^^<^^vv<
<<v<^>>^^^^>>>v^<>vvv^><v<<<>^^^vv^<vvv>^>v<^^^^v<>^>vvvv><>>v^<<^^^^^
^><^><>>><>^^<<^^v>>><^<v>^<vv>>v>>>^v><>^v><<<<v>>v<v<v>vvv>^<><<>^><
^>><>^v<><^vvv<^^<><v<<<<<><^v<<<><<<^^<v<^^^><^>>^<v^><<<^>>^v<v^v<v^
>^>>^v>vv>^<<^v<>><<><<v<<v><>v<^vv<<<>^^v^>^^>>><<^v>>v^v><^^>>^<>vv^
<><^^>^^^<><vvvvv^v<v<<>^v<v>v<<^><<><<><<<^^<<<^<<>><<><^^^>^^<>^>v<>
^^>vv<^v^v<vv>^<><v<^v>^^^>>>^^vvv^>vvv<>>>^<^>>>>>^<<^v>^vvv<>^<><<v>
v^^>>><<^^<>>^v^<v^vv<>v^<<>^<^v^v><^<<<><<^<v><v<>vv>>v><v^<vv<>v^<<^
";

    assert_eq!(solve(small), 2028);
    assert_eq!(solve(large), 10092);
    assert_eq!(bonus(large), 9021);
}
