use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 4)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

#[derive(Debug, Clone)]
struct Board {
    numbers: Vec<u32>,
    marked: Vec<bool>,
}

impl Board {
    fn mark(&mut self, n: u32) {
        if let Some(i) = self.numbers.iter().position(|&m| m == n) {
            self.marked[i] = true;
        }
    }

    fn has_bingo(&self) -> bool {
        (0..5).any(|r| (0..5).all(|c| self.marked[r * 5 + c]))
            || (0..5).any(|c| (0..5).all(|r| self.marked[r * 5 + c]))
    }

    fn unmarked_sum(&self) -> u32 {
        self.numbers
            .iter()
            .zip(&self.marked)
            .filter(|(_, &m)| !m)
            .map(|(n, _)| n)
            .sum()
    }
}

fn parse(input: &str) -> (Vec<u32>, Vec<Board>) {
    let mut blocks = input.trim().split("\n\n");

    let draws = blocks
        .next()
        .unwrap()
        .trim()
        .split(',')
        .map(|n| n.parse().unwrap())
        .collect();

    let boards = blocks
        .map(|block| {
            let numbers = block
                .split_whitespace()
                .map(|n| n.parse().unwrap())
                .collect::<Vec<_>>();
            Board {
                marked: vec![false; numbers.len()],
                numbers,
            }
        })
        .collect();

    (draws, boards)
}

/// Scores in the order the boards win.
fn winning_scores(input: &str) -> Vec<u32> {
    let (draws, mut boards) = parse(input);
    let mut scores = vec![];

    for n in draws {
        for board in boards.iter_mut() {
            board.mark(n);
        }

        let (won, playing): (Vec<_>, Vec<_>) = boards.into_iter().partition(|b| b.has_bingo());
        scores.extend(won.iter().map(|b| b.unmarked_sum() * n));
        boards = playing;
    }

    scores
}

fn solve(input: &str) -> u32 {
    winning_scores(input)[0]
}

fn bonus(input: &str) -> u32 {
    *winning_scores(input).last().unwrap()
}

#[test]
fn test() {
    let example_input = "
7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

22 13 17 11  0
 8  2 23  4 24
21  9 14 16  7
 6 10  3 18  5
 1 12 20 15 19

 3 15  0  2 22
 9 18 13 17  5
19  8  7 25 23
20 11 10 24  4
14 21 16 12  6

14 21 17 24  4
10 16 15  9 19
18  8 23 26 20
22 11 13  6  5
 2  0 12  3  7
";

    assert_eq!(solve(example_input), 4512);
    assert_eq!(bonus(example_input), 1924);
}
