use aoc_harness::time;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 18)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Num(u64),
    Add,
    Mul,
    Open,
    Close,
}

fn tokenize(line: &str) -> Vec<Token> {
    line.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '+' => Token::Add,
            '*' => Token::Mul,
            '(' => Token::Open,
            ')' => Token::Close,
            d => Token::Num(d.to_digit(10).unwrap() as u64),
        })
        .collect()
}

/// Precedence climbing over a token stream. `precedence` ranks the binary
/// operators, higher binds tighter.
struct Evaluator<F> {
    tokens: Vec<Token>,
    pos: usize,
    precedence: F,
}

impl<F> Evaluator<F>
where
    F: Fn(Token) -> u8,
{
    fn atom(&mut self) -> u64 {
        let token = self.tokens[self.pos];
        self.pos += 1;

        match token {
            Token::Num(n) => n,
            Token::Open => {
                let value = self.expr(0);
                assert_eq!(self.tokens[self.pos], Token::Close);
                self.pos += 1;
                value
            }
            _ => unreachable!("unexpected {token:?}"),
        }
    }

    fn expr(&mut self, min_prec: u8) -> u64 {
        let mut lhs = self.atom();

        while let Some(&op) = self.tokens.get(self.pos) {
            if !matches!(op, Token::Add | Token::Mul) || (self.precedence)(op) < min_prec {
                break;
            }

            self.pos += 1;
            let rhs = self.expr((self.precedence)(op) + 1);

            lhs = match op {
                Token::Add => lhs + rhs,
                _ => lhs * rhs,
            };
        }

        lhs
    }
}

fn evaluate(line: &str, precedence: impl Fn(Token) -> u8) -> u64 {
    Evaluator {
        tokens: tokenize(line),
        pos: 0,
        precedence,
    }
    .expr(0)
}

fn solve(input: &str) -> u64 {
    input
        .trim()
        .lines()
        .map(|line| evaluate(line, |_| 1))
        .sum()
}

fn bonus(input: &str) -> u64 {
    input
        .trim()
        .lines()
        .map(|line| {
            evaluate(line, |op| match op {
                Token::Add => 2,
                _ => 1,
            })
        })
        .sum()
}

#[test]
fn test() {
    assert_eq!(solve("1 + 2 * 3 + 4 * 5 + 6"), 71);
    assert_eq!(solve("1 + (2 * 3) + (4 * (5 + 6))"), 51);
    assert_eq!(solve("2 * 3 + (4 * 5)"), 26);
    assert_eq!(solve("5 + (8 * 3 + 9 + 3 * 4 * 3)"), 437);
    assert_eq!(solve("5 * 9 * (7 * 3 * 3 + 9 * 3 + (8 + 6 * 4))"), 12240);
    assert_eq!(
        solve("((2 + 4 * 9) * (6 + 9 * 8 + 6) + 6) + 2 + 4 * 2"),
        13632
    );

    assert_eq!(bonus("1 + 2 * 3 + 4 * 5 + 6"), 231);
    assert_eq!(bonus("1 + (2 * 3) + (4 * (5 + 6))"), 51);
    assert_eq!(bonus("2 * 3 + (4 * 5)"), 46);
    assert_eq!(bonus("5 + (8 * 3 + 9 + 3 * 4 * 3)"), 1445);
    assert_eq!(bonus("5 * 9 * (7 * 3 * 3 + 9 * 3 + (8 + 6 * 4))"), 669060);
    assert_eq!(
        bonus("((2 + 4 * 9) * (6 + 9 * 8 + 6) + 6) + 2 + 4 * 2"),
        23340
    );
}
