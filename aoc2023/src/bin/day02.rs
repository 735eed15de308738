use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 2)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

/// The most cubes of each colour (red, green, blue) shown at once in a game.
fn parse(input: &str) -> Vec<(u32, [u32; 3])> {
    input
        .trim()
        .lines()
        .map(|line| {
            let (game, draws) = line.trim().split_once(": ").unwrap();
            let id = game.trim_start_matches("Game ").parse().unwrap();

            let mut most = [0u32; 3];
            for cubes in draws.split(|c| c == ';' || c == ',') {
                let (n, colour) = cubes.trim().split_once(' ').unwrap();
                let i = match colour {
                    "red" => 0,
                    "green" => 1,
                    _ => 2,
                };
                most[i] = most[i].max(n.parse().unwrap());
            }

            (id, most)
        })
        .collect()
}

fn solve(input: &str) -> u32 {
    parse(input)
        .into_iter()
        .filter(|(_, [r, g, b])| *r <= 12 && *g <= 13 && *b <= 14)
        .map(|(id, _)| id)
        .sum()
}

fn bonus(input: &str) -> u32 {
    parse(input)
        .into_iter()
        .map(|(_, most)| most.iter().product::<u32>())
        .sum()
}

#[test]
fn test() {
    let example_input = "
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

    assert_eq!(solve(example_input), 8);
    assert_eq!(bonus(example_input), 2286);
}
