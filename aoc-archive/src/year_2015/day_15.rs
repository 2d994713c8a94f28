use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 15, tags = ["brute-force"])]
pub struct Solver;

const TEASPOONS: i64 = 100;
const CALORIE_TARGET: i64 = 500;

/// capacity, durability, flavor, texture, calories
type Ingredient = [i64; 5];

impl AocParser for Solver {
    type SharedData<'a> = Vec<Ingredient>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let ingredients = input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|line| {
                let bad = || ParseError::InvalidFormat(line.to_string());
                let (_, properties) = line.split_once(": ").ok_or_else(bad)?;
                let values: Vec<i64> = properties
                    .split(", ")
                    .map(|p| {
                        p.split_whitespace()
                            .nth(1)
                            .and_then(|v| v.parse().ok())
                            .ok_or_else(bad)
                    })
                    .collect::<Result<_, _>>()?;
                values.try_into().map_err(|_| bad())
            })
            .collect::<Result<Vec<_>, _>>()?;
        if ingredients.is_empty() {
            return Err(ParseError::MissingData("no ingredients".to_string()));
        }
        Ok(ingredients)
    }
}

/// Every way to split `total` teaspoons among `slots` ingredients
fn mixtures(slots: usize, total: i64) -> Vec<Vec<i64>> {
    if slots == 1 {
        return vec![vec![total]];
    }
    (0..=total)
        .flat_map(|first| {
            mixtures(slots - 1, total - first).into_iter().map(move |mut rest| {
                rest.push(first);
                rest
            })
        })
        .collect()
}

/// Product of the four non-calorie totals, each clamped at zero, plus the calorie count
fn score(ingredients: &[Ingredient], amounts: &[i64]) -> (i64, i64) {
    let total = |prop: usize| -> i64 {
        ingredients
            .iter()
            .zip(amounts)
            .map(|(ingredient, amount)| ingredient[prop] * amount)
            .sum()
    };
    let product = (0..4).map(|p| total(p).max(0)).product();
    (product, total(4))
}

fn best_cookie(ingredients: &[Ingredient], calories: Option<i64>) -> i64 {
    mixtures(ingredients.len(), TEASPOONS)
        .iter()
        .map(|amounts| score(ingredients, amounts))
        .filter(|&(_, cal)| calories.is_none_or(|target| cal == target))
        .map(|(product, _)| product)
        .max()
        .unwrap_or(0)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(best_cookie(shared, None).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(best_cookie(shared, Some(CALORIE_TARGET)).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_all;

    #[test]
    fn test_example() {
        let input = "\
Butterscotch: capacity -1, durability -2, flavor 6, texture 3, calories 8
Cinnamon: capacity 2, durability 3, flavor -2, texture -1, calories 3";
        assert_eq!(solve_all::<Solver>(input), ["62842880", "57600000"]);
    }

    #[test]
    fn test_mixtures_cover_all_splits() {
        let all = mixtures(3, 4);
        assert_eq!(all.len(), 15);
        assert!(all.iter().all(|m| m.iter().sum::<i64>() == 4));
    }
}
