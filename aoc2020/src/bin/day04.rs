use aoc_harness::time;
use fxhash::FxHashMap;

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

const REQUIRED: [&str; 7] = ["byr", "iyr", "eyr", "hgt", "hcl", "ecl", "pid"];

type Passport<'a> = FxHashMap<&'a str, &'a str>;

fn parse(input: &str) -> Vec<Passport> {
    input
        .trim()
        .split("\n\n")
        .map(|block| {
            block
                .split_whitespace()
                .map(|field| field.split_once(':').unwrap())
                .collect()
        })
        .collect()
}

fn has_required_fields(passport: &Passport) -> bool {
    REQUIRED.iter().all(|key| passport.contains_key(key))
}

fn year_between(s: &str, min: u32, max: u32) -> bool {
    s.len() == 4 && s.parse::<u32>().is_ok_and(|y| min <= y && y <= max)
}

fn field_is_valid(key: &str, value: &str) -> bool {
    match key {
        "byr" => year_between(value, 1920, 2002),
        "iyr" => year_between(value, 2010, 2020),
        "eyr" => year_between(value, 2020, 2030),
        "hgt" => {
            if let Some(cm) = value.strip_suffix("cm") {
                cm.parse::<u32>().is_ok_and(|h| (150..=193).contains(&h))
            } else if let Some(inches) = value.strip_suffix("in") {
                inches.parse::<u32>().is_ok_and(|h| (59..=76).contains(&h))
            } else {
                false
            }
        }
        "hcl" => value.strip_prefix('#').is_some_and(|hex| {
            hex.len() == 6
                && hex
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        }),
        "ecl" => ["amb", "blu", "brn", "gry", "grn", "hzl", "oth"].contains(&value),
        "pid" => value.len() == 9 && value.chars().all(|c| c.is_ascii_digit()),
        "cid" => true,
        _ => false,
    }
}

fn solve(input: &str) -> usize {
    parse(input)
        .iter()
        .filter(|p| has_required_fields(p))
        .count()
}

fn bonus(input: &str) -> usize {
    parse(input)
        .iter()
        .filter(|p| has_required_fields(p) && p.iter().all(|(k, v)| field_is_valid(k, v)))
        .count()
}

#[test]
fn test() {
    let example_input = "
ecl:gry pid:860033327 eyr:2020 hcl:#fffffd
byr:1937 iyr:2017 cid:147 hgt:183cm

iyr:2013 ecl:amb cid:350 eyr:2023 pid:028048884
hcl:#cfa07d byr:1929

hcl:#ae17e1 iyr:2013
eyr:2024
ecl:brn pid:760753108 byr:1931
hgt:179cm

hcl:#cfa07d eyr:2025 pid:166559648
iyr:2011 ecl:brn hgt:59in
";

    assert_eq!(solve(example_input), 2);

    let invalid = "
eyr:1972 cid:100
hcl:#18171d ecl:amb hgt:170 pid:186cm iyr:2018 byr:1926

iyr:2019
hcl:#602927 eyr:1967 hgt:170cm
ecl:grn pid:012533040 byr:1946

hcl:dab227 iyr:2012
ecl:brn hgt:182cm pid:021572410 eyr:2020 byr:1992 cid:277

hgt:59cm ecl:zzz
eyr:2038 hcl:74454a iyr:2023
pid:3556412378 byr:2007
";

    let valid = "
pid:087499704 hgt:74in ecl:grn iyr:2012 eyr:2030 byr:1980
hcl:#623a2f

eyr:2029 ecl:blu cid:129 byr:1989
iyr:2014 pid:896056539 hcl:#a97842 hgt:165cm

hcl:#888785
hgt:164cm byr:2001 iyr:2015 cid:88
pid:545766238 ecl:hzl
eyr:2022

iyr:2010 hgt:158cm hcl:#b6652a ecl:blu byr:1944 eyr:2021 pid:093154719
";

    assert_eq!(bonus(invalid), 0);
    assert_eq!(bonus(valid), 4);
}
