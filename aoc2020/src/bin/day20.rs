use aoc_harness::time;
use fxhash::FxHashMap;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 20)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

type Grid = Vec<Vec<bool>>;

const MONSTER: [&str; 3] = [
    "                  # ",
    "#    ##    ##    ###",
    " #  #  #  #  #  #   ",
];

#[derive(Debug, Clone)]
struct Tile {
    id: u64,
    grid: Grid,
}

fn parse(input: &str) -> Vec<Tile> {
    input
        .trim()
        .split("\n\n")
        .map(|block| {
            let mut lines = block.trim().lines();
            let id = lines
                .next()
                .unwrap()
                .trim()
                .trim_start_matches("Tile ")
                .trim_end_matches(':')
                .parse()
                .unwrap();

            let grid = lines
                .map(|line| line.trim().chars().map(|c| c == '#').collect())
                .collect();

            Tile { id, grid }
        })
        .collect()
}

// clockwise
fn rotate(g: &Grid) -> Grid {
    let h = g.len();
    (0..g[0].len())
        .map(|x| (0..h).rev().map(|y| g[y][x]).collect())
        .collect()
}

fn orientations(g: &Grid) -> Vec<Grid> {
    let mut all = Vec::with_capacity(8);
    let mut current = g.clone();

    for _ in 0..4 {
        all.push(
            current
                .iter()
                .map(|row| row.iter().rev().copied().collect())
                .collect(),
        );
        let next = rotate(&current);
        all.push(current);
        current = next;
    }

    all
}

fn top(g: &Grid) -> Vec<bool> {
    g[0].clone()
}

fn bottom(g: &Grid) -> Vec<bool> {
    g[g.len() - 1].clone()
}

fn left(g: &Grid) -> Vec<bool> {
    g.iter().map(|row| row[0]).collect()
}

fn right(g: &Grid) -> Vec<bool> {
    g.iter().map(|row| row[row.len() - 1]).collect()
}

/// Same key for an edge and its mirror image.
fn edge_key(edge: &[bool]) -> u32 {
    let forward = edge.iter().fold(0, |n, &b| n << 1 | b as u32);
    let backward = edge.iter().rev().fold(0, |n, &b| n << 1 | b as u32);
    forward.min(backward)
}

fn edge_counts(tiles: &[Tile]) -> FxHashMap<u32, usize> {
    let mut counts = FxHashMap::default();

    for tile in tiles {
        for edge in [top, bottom, left, right].map(|f| f(&tile.grid)) {
            *counts.entry(edge_key(&edge)).or_default() += 1;
        }
    }

    counts
}

fn is_corner(tile: &Tile, counts: &FxHashMap<u32, usize>) -> bool {
    [top, bottom, left, right]
        .into_iter()
        .filter(|f| counts[&edge_key(&f(&tile.grid))] == 1)
        .count()
        == 2
}

fn solve(input: &str) -> u64 {
    let tiles = parse(input);
    let counts = edge_counts(&tiles);

    tiles
        .iter()
        .filter(|t| is_corner(t, &counts))
        .map(|t| t.id)
        .product()
}

/// Lays out all tiles, starting from a corner with its unmatched edges
/// facing up and left, and returns the picture without tile borders.
fn assemble(tiles: &[Tile]) -> Grid {
    let counts = edge_counts(tiles);
    let n = (tiles.len() as f64).sqrt() as usize;

    let corner = tiles.iter().find(|t| is_corner(t, &counts)).unwrap();
    let start = orientations(&corner.grid)
        .into_iter()
        .find(|g| counts[&edge_key(&top(g))] == 1 && counts[&edge_key(&left(g))] == 1)
        .unwrap();

    let mut used = vec![corner.id];
    let mut placed: Vec<Vec<Grid>> = vec![vec![start]];

    for r in 0..n {
        for c in 0..n {
            if r == 0 && c == 0 {
                continue;
            }

            let fits = |g: &Grid| {
                if c > 0 {
                    left(g) == right(&placed[r][c - 1])
                } else {
                    top(g) == bottom(&placed[r - 1][0])
                }
            };

            let (id, g) = tiles
                .iter()
                .filter(|t| !used.contains(&t.id))
                .find_map(|t| {
                    orientations(&t.grid)
                        .into_iter()
                        .find(|g| fits(g))
                        .map(|g| (t.id, g))
                })
                .unwrap();

            used.push(id);
            if c == 0 {
                placed.push(vec![g]);
            } else {
                placed[r].push(g);
            }
        }
    }

    placed
        .iter()
        .flat_map(|row| {
            let size = row[0].len();
            (1..size - 1).map(move |y| {
                row.iter()
                    .flat_map(|g| g[y][1..size - 1].iter().copied())
                    .collect()
            })
        })
        .collect()
}

fn monster_offsets() -> Vec<(usize, usize)> {
    MONSTER
        .iter()
        .enumerate()
        .flat_map(|(y, line)| {
            line.chars()
                .enumerate()
                .filter(|&(_, c)| c == '#')
                .map(move |(x, _)| (y, x))
        })
        .collect()
}

fn roughness(image: &Grid) -> usize {
    let offsets = monster_offsets();
    let total = image.iter().flatten().filter(|&&b| b).count();

    let most_covered = orientations(image)
        .iter()
        .map(|g| {
            let mut covered = vec![vec![false; g[0].len()]; g.len()];
            for y in 0..=(g.len().saturating_sub(MONSTER.len())) {
                for x in 0..=(g[0].len().saturating_sub(MONSTER[0].len())) {
                    let found = offsets
                        .iter()
                        .all(|&(dy, dx)| {
                            g.get(y + dy).and_then(|row| row.get(x + dx)) == Some(&true)
                        });
                    if found {
                        for &(dy, dx) in &offsets {
                            covered[y + dy][x + dx] = true;
                        }
                    }
                }
            }
            covered.iter().flatten().filter(|&&b| b).count()
        })
        .max()
        .unwrap();

    total - most_covered
}

fn bonus(input: &str) -> usize {
    roughness(&assemble(&parse(input)))
}

#[cfg(test)]
fn render(g: &Grid) -> String {
    g.iter()
        .map(|row| row.iter().map(|&b| if b { '#' } else { '.' }).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// A 3x3 jigsaw cut out of one big picture. Every edge carries a unique
/// code (`1xxxxx00`) so that no two edges can be confused, even mirrored.
#[cfg(test)]
fn generated_puzzle() -> (String, Vec<u64>, Grid) {
    const N: usize = 3;
    const STEP: usize = 9;
    let size = N * STEP + 1;

    let mut big = vec![vec![false; size]; size];
    for (y, row) in big.iter_mut().enumerate() {
        for (x, cell) in row.iter_mut().enumerate() {
            *cell = (x * 7 + y * 13 + x * y) % 5 == 0;
        }
    }

    let code = |k: usize| {
        [
            true,
            k & 16 != 0,
            k & 8 != 0,
            k & 4 != 0,
            k & 2 != 0,
            k & 1 != 0,
            false,
            false,
        ]
    };

    let mut k = 0;
    for i in 0..=N {
        for j in 0..N {
            k += 1;
            for (d, b) in code(k).into_iter().enumerate() {
                big[i * STEP][j * STEP + 1 + d] = b;
            }

            k += 1;
            for (d, b) in code(k).into_iter().enumerate() {
                big[j * STEP + 1 + d][i * STEP] = b;
            }
        }
    }

    for i in 0..=N {
        for j in 0..=N {
            big[i * STEP][j * STEP] = false;
        }
    }

    let mut text = vec![];
    let mut corners = vec![];

    for r in (0..N).rev() {
        for c in 0..N {
            let id = 2000 + ((r * N + c) * 7 % 9) as u64 * 13;
            if (r == 0 || r == N - 1) && (c == 0 || c == N - 1) {
                corners.push(id);
            }

            let tile = big[r * STEP..=r * STEP + STEP]
                .iter()
                .map(|row| row[c * STEP..=c * STEP + STEP].to_vec())
                .collect::<Grid>();

            let tile = orientations(&tile).swap_remove((r * 3 + c * 5) % 8);
            text.push(format!("Tile {id}:\n{}", render(&tile)));
        }
    }

    let image = big
        .iter()
        .enumerate()
        .filter(|(y, _)| y % STEP != 0)
        .map(|(_, row)| {
            row.iter()
                .enumerate()
                .filter(|(x, _)| x % STEP != 0)
                .map(|(_, &b)| b)
                .collect()
        })
        .collect();

    (text.join("\n\n"), corners, image)
}

#[test]
fn test() {
    let (input, corners, image) = generated_puzzle();

    assert_eq!(solve(&input), corners.iter().product::<u64>());

    let assembled = assemble(&parse(&input));
    assert_eq!(assembled.len(), 24);
    assert!(orientations(&image).contains(&assembled));

    let mut sea = MONSTER
        .iter()
        .map(|line| line.chars().map(|c| c == '#').collect::<Vec<_>>())
        .collect::<Grid>();
    sea[2][19] = true;
    sea.push(vec![true; 20]);

    assert_eq!(roughness(&sea), 21);
    assert_eq!(roughness(&rotate(&sea)), 21);
}
