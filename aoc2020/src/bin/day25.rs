use aoc_harness::time;
use fxhash::FxHashMap;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 25)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    Ok(())
}

const MODULUS: u64 = 20201227;
const SUBJECT: u64 = 7;

fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    let mut result = 1;
    base %= m;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }

    result
}

/// Baby-step giant-step: the `x` with `g^x = h (mod p)`, for prime `p`.
fn discrete_log(g: u64, h: u64, p: u64) -> Option<u64> {
    let m = (p as f64).sqrt().ceil() as u64;

    let mut baby = FxHashMap::default();
    let mut e = 1;
    for j in 0..m {
        baby.entry(e).or_insert(j);
        e = e * g % p;
    }

    // g^-m, by Fermat
    let factor = pow_mod(g, (p - 2) * m % (p - 1), p);

    let mut gamma = h % p;
    for i in 0..m {
        if let Some(&j) = baby.get(&gamma) {
            return Some(i * m + j);
        }
        gamma = gamma * factor % p;
    }

    None
}

fn solve(input: &str) -> u64 {
    let mut keys = input.trim().lines().map(|l| l.trim().parse::<u64>().unwrap());
    let card = keys.next().unwrap();
    let door = keys.next().unwrap();

    let card_loop = discrete_log(SUBJECT, card, MODULUS).unwrap();
    pow_mod(door, card_loop, MODULUS)
}

#[test]
fn test() {
    assert_eq!(discrete_log(SUBJECT, 5764801, MODULUS), Some(8));
    assert_eq!(discrete_log(SUBJECT, 17807724, MODULUS), Some(11));
    assert_eq!(pow_mod(SUBJECT, 8, MODULUS), 5764801);

    assert_eq!(solve("5764801\n17807724"), 14897079);
}
