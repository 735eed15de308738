use aoc_harness::time;

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

struct Image {
    pixels: Vec<Vec<bool>>,
    /// Every pixel outside `pixels`, which may be lit when `lut[0]` is.
    background: bool,
}

impl Image {
    fn get(&self, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 {
            return self.background;
        }

        self.pixels
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(self.background)
    }

    fn enhance(&self, lut: &[bool]) -> Image {
        let h = self.pixels.len() as isize;
        let w = self.pixels[0].len() as isize;

        let pixels = (-1..=h)
            .map(|y| {
                (-1..=w)
                    .map(|x| {
                        let mut index = 0;
                        for dy in -1..=1 {
                            for dx in -1..=1 {
                                index = index << 1 | self.get(x + dx, y + dy) as usize;
                            }
                        }
                        lut[index]
                    })
                    .collect()
            })
            .collect();

        Image {
            pixels,
            background: lut[if self.background { 511 } else { 0 }],
        }
    }

    fn lit(&self) -> usize {
        self.pixels.iter().flatten().filter(|&&p| p).count()
    }
}

fn enhance(input: &str, steps: usize) -> usize {
    let (lut, image) = input.trim().split_once("\n\n").unwrap();

    let lut = lut.trim().chars().map(|c| c == '#').collect::<Vec<_>>();
    let mut image = Image {
        pixels: image
            .lines()
            .map(|line| line.trim().chars().map(|c| c == '#').collect())
            .collect(),
        background: false,
    };

    for _ in 0..steps {
        image = image.enhance(&lut);
    }

    image.lit()
}

fn solve(input: &str) -> usize {
    enhance(input, 2)
}

fn bonus(input: &str) -> usize {
    enhance(input, 50)
}

#[test]
fn test() {
    // every pixel keeps its own value
    let keep = (0..512)
        .map(|i| if i >> 4 & 1 == 1 { '#' } else { '.' })
        .collect::<String>();

    let example_input = format!("{keep}\n\n#..#.\n#....\n##..#\n..#..\n..###");
    assert_eq!(solve(&example_input), 10);
    assert_eq!(bonus(&example_input), 10);

    // an all-dark neighbourhood lights up, an all-lit one goes dark
    let flicker = (0..512)
        .map(|i| match i {
            0 => '#',
            511 => '.',
            _ if i >> 4 & 1 == 1 => '#',
            _ => '.',
        })
        .collect::<String>();

    assert_eq!(enhance(&format!("{flicker}\n\n#"), 1), 1);
    assert_eq!(solve(&format!("{flicker}\n\n#")), 17);
}
