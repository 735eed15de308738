use std::collections::BTreeMap;

use aoc_harness::time;
use fxhash::FxHashSet;
use itertools::Itertools;

fn main() -> anyhow::Result<()> {
    let input = aoc_harness::load(env!("CARGO_MANIFEST_DIR"), 21)?;

    time(|| {
        println!("First part: {}", solve(&input));
    });

    time(|| {
        println!("Bonus: {}", bonus(&input));
    });

    Ok(())
}

struct Food<'a> {
    ingredients: FxHashSet<&'a str>,
    allergens: Vec<&'a str>,
}

fn parse(input: &str) -> Vec<Food> {
    input
        .trim()
        .lines()
        .map(|line| {
            let (ingredients, allergens) = line
                .trim()
                .trim_end_matches(')')
                .split_once(" (contains ")
                .unwrap();

            Food {
                ingredients: ingredients.split_whitespace().collect(),
                allergens: allergens.split(", ").collect(),
            }
        })
        .collect()
}

/// For every allergen, the ingredients present in every food listing it.
fn candidates<'a>(foods: &[Food<'a>]) -> BTreeMap<&'a str, FxHashSet<&'a str>> {
    let mut candidates: BTreeMap<&str, FxHashSet<&str>> = BTreeMap::new();

    for food in foods {
        for &allergen in &food.allergens {
            candidates
                .entry(allergen)
                .and_modify(|c| c.retain(|i| food.ingredients.contains(i)))
                .or_insert_with(|| food.ingredients.clone());
        }
    }

    candidates
}

fn solve(input: &str) -> usize {
    let foods = parse(input);
    let unsafe_ingredients = candidates(&foods)
        .into_values()
        .flatten()
        .collect::<FxHashSet<_>>();

    foods
        .iter()
        .flat_map(|f| &f.ingredients)
        .filter(|i| !unsafe_ingredients.contains(*i))
        .count()
}

fn bonus(input: &str) -> String {
    let foods = parse(input);
    let mut candidates = candidates(&foods);
    let mut dangerous = BTreeMap::new();

    while let Some((&allergen, ingredients)) = candidates.iter().find(|(_, c)| c.len() == 1) {
        let ingredient = *ingredients.iter().next().unwrap();
        dangerous.insert(allergen, ingredient);

        candidates.remove(allergen);
        for c in candidates.values_mut() {
            c.remove(ingredient);
        }
    }

    // BTreeMap keeps them sorted by allergen
    dangerous.values().join(",")
}

#[test]
fn test() {
    let example_input = "
mxmxvkd kfcds sqjhc nhms (contains dairy, fish)
trh fvjkl sbzzf mxmxvkd (contains dairy)
sqjhc fvjkl (contains soy)
sqjhc mxmxvkd sbzzf (contains fish)
";

    assert_eq!(solve(example_input), 5);
    assert_eq!(bonus(example_input), "mxmxvkd,sqjhc,fvjkl");
}
