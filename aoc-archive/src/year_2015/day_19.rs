use crate::utils::math::fisher_yates;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 19, tags = ["strings", "randomized"])]
pub struct Solver;

const ELECTRON: &str = "e";
const MAX_ATTEMPTS: usize = 10_000;
const SHUFFLE_SEED: u64 = 19;

pub struct SharedData<'a> {
    rules: Vec<(&'a str, &'a str)>,
    molecule: &'a str,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut rules = Vec::new();
        let mut molecule = None;
        for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
            match line.split_once(" => ") {
                Some((from, to)) if from != ELECTRON && to.len() <= from.len() => {
                    return Err(ParseError::InvalidFormat(format!(
                        "replacement '{}' does not grow the molecule",
                        line
                    )));
                }
                Some(rule) => rules.push(rule),
                None => molecule = Some(line),
            }
        }
        let molecule = molecule.ok_or_else(|| ParseError::MissingData("no medicine molecule".to_string()))?;
        if rules.is_empty() {
            return Err(ParseError::MissingData("no replacements".to_string()));
        }
        Ok(SharedData { rules, molecule })
    }
}

/// Every molecule reachable by a single replacement
fn single_replacements(rules: &[(&str, &str)], molecule: &str) -> HashSet<String> {
    rules
        .iter()
        .flat_map(|&(from, to)| {
            (0..=molecule.len().saturating_sub(from.len()))
                .filter(move |&i| molecule.is_char_boundary(i) && molecule[i..].starts_with(from))
                .map(move |i| format!("{}{}{}", &molecule[..i], to, &molecule[i + from.len()..]))
        })
        .collect()
}

/// Shrink `molecule` back to `e`, always applying the first rule (in `order`) that fits.
///
/// Returns `None` on a dead end.
fn reduce(order: &[(&str, &str)], molecule: &str) -> Option<usize> {
    let mut current = molecule.to_string();
    let mut steps = 0;
    while current != ELECTRON {
        let (from, to) = order.iter().find(|&&(from, to)| {
            if from == ELECTRON {
                current == to
            } else {
                current.contains(to)
            }
        })?;
        current = current.replacen(to, from, 1);
        steps += 1;
    }
    Some(steps)
}

/// Greedy reduction, longest products first, reshuffling the rule order after each dead end
fn fewest_steps(rules: &[(&str, &str)], molecule: &str) -> Result<usize, SolveError> {
    let mut order = rules.to_vec();
    order.sort_by_key(|&(_, to)| std::cmp::Reverse(to.len()));
    let mut rng = StdRng::seed_from_u64(SHUFFLE_SEED);
    for _ in 0..MAX_ATTEMPTS {
        if let Some(steps) = reduce(&order, molecule) {
            return Ok(steps);
        }
        fisher_yates(&mut order, &mut rng);
    }
    Err(SolveError::SolveFailed(
        format!("could not reduce the molecule after {} attempts", MAX_ATTEMPTS).into(),
    ))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(single_replacements(&shared.rules, shared.molecule).len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        fewest_steps(&shared.rules, shared.molecule).map(|n| n.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_all;

    const RULES: &str = "e => H\ne => O\nH => HO\nH => OH\nO => HH\n\n";

    #[test]
    fn test_examples() {
        assert_eq!(solve_all::<Solver>(&format!("{RULES}HOH")), ["4", "3"]);
        assert_eq!(solve_all::<Solver>(&format!("{RULES}HOHOHO")), ["7", "6"]);
    }

    #[test]
    fn test_overlapping_sites_are_all_replaced() {
        let replaced = single_replacements(&[("HH", "X")], "HHH");
        assert_eq!(replaced, HashSet::from(["XH".to_string(), "HX".to_string()]));
    }

    #[test]
    fn test_non_growing_rule_rejected() {
        assert!(matches!(
            Solver::parse("e => H\nA => A\n\nHA"),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_dead_end_is_reported() {
        let rules = [("e", "A"), ("A", "BB")];
        assert!(fewest_steps(&rules, "C").is_err());
    }
}
