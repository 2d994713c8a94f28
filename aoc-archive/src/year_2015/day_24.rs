use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 24, tags = ["combinatorics"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut weights: Vec<u64> = input
            .split_whitespace()
            .map(|w| {
                w.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("bad package weight '{}'", w)))
            })
            .collect::<Result<_, _>>()?;
        if weights.is_empty() {
            return Err(ParseError::MissingData("no packages".to_string()));
        }
        weights.sort_unstable_by(|a, b| b.cmp(a));
        Ok(weights)
    }
}

/// Whether `packages` can be split into `groups` piles of `target` each
fn can_split(packages: &[u64], groups: usize, target: u64) -> bool {
    if groups == 1 {
        return packages.iter().sum::<u64>() == target;
    }
    (1..=packages.len()).any(|k| {
        packages
            .iter()
            .copied()
            .enumerate()
            .combinations(k)
            .filter(|combo| combo.iter().map(|&(_, w)| w).sum::<u64>() == target)
            .any(|combo| {
                let rest: Vec<u64> = packages
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| !combo.iter().any(|(j, _)| j == i))
                    .map(|(_, &w)| w)
                    .collect();
                can_split(&rest, groups - 1, target)
            })
    })
}

/// Smallest quantum entanglement among the fewest-package passenger groups
pub fn best_entanglement(packages: &[u64], groups: usize) -> Result<u64, SolveError> {
    let total: u64 = packages.iter().sum();
    if groups == 0 || total % groups as u64 != 0 {
        return Err(SolveError::SolveFailed("packages cannot be balanced".into()));
    }
    let target = total / groups as u64;

    let best = (1..=packages.len()).find_map(|k| {
        packages
            .iter()
            .copied()
            .enumerate()
            .combinations(k)
            .filter(|combo| combo.iter().map(|&(_, w)| w).sum::<u64>() == target)
            .map(|combo| {
                let qe = combo
                    .iter()
                    .try_fold(1u64, |acc, &(_, w)| acc.checked_mul(w));
                (qe, combo)
            })
            // Overflowing products sort last
            .sorted_by_key(|(qe, _)| qe.map_or((1, 0), |q| (0, q)))
            .find(|(_, combo)| {
                let rest: Vec<u64> = packages
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| !combo.iter().any(|(j, _)| j == i))
                    .map(|(_, &w)| w)
                    .collect();
                can_split(&rest, groups - 1, target)
            })
            .map(|(qe, _)| qe)
    });

    match best {
        Some(Some(qe)) => Ok(qe),
        Some(None) => Err(SolveError::SolveFailed(
            "quantum entanglement overflows u64".into(),
        )),
        None => Err(SolveError::SolveFailed("packages cannot be balanced".into())),
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        best_entanglement(shared, 3).map(|qe| qe.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        best_entanglement(shared, 4).map(|qe| qe.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_all;

    #[test]
    fn test_example() {
        let input = "1 2 3 4 5 7 8 9 10 11";
        assert_eq!(solve_all::<Solver>(input), ["99", "44"]);
    }

    #[test]
    fn test_unbalanced() {
        assert!(best_entanglement(&[1, 2, 4], 3).is_err());
    }

    #[test]
    fn test_entanglement_overflow_is_an_error() {
        let big = 1u64 << 40;
        let err = best_entanglement(&[big; 6], 3).unwrap_err();
        assert!(err.to_string().contains("overflows"));
    }
}
