use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 20, tags = ["sieve"], input = "33100000")]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = u64;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidFormat(format!("expected a present count, got '{}'", input.trim())))
    }
}

/// Lowest house receiving at least `target` presents.
///
/// Elf `e` visits houses `e, 2e, 3e, ...` (at most `limit` of them) leaving `per_elf * e` presents.
pub fn lowest_house(target: u64, per_elf: u64, limit: Option<usize>) -> Option<usize> {
    // House `target / per_elf` is always enough on its own elf
    let size = usize::try_from(target / per_elf).ok()? + 1;
    let mut houses = vec![0u64; size + 1];
    for elf in 1..=size {
        let visits = (elf..=size).step_by(elf).take(limit.unwrap_or(usize::MAX));
        for house in visits {
            houses[house] += per_elf * elf as u64;
        }
    }
    houses.iter().skip(1).position(|&p| p >= target).map(|i| i + 1)
}

fn answer(found: Option<usize>) -> Result<String, SolveError> {
    found
        .map(|h| h.to_string())
        .ok_or_else(|| SolveError::SolveFailed("no house gets enough presents".into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        answer(lowest_house(*shared, 10, None))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        answer(lowest_house(*shared, 11, Some(50)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_targets() {
        // House 4 gets 70, house 6 gets 120, house 8 gets 150
        assert_eq!(lowest_house(70, 10, None), Some(4));
        assert_eq!(lowest_house(120, 10, None), Some(6));
        assert_eq!(lowest_house(130, 10, None), Some(8));
    }

    #[test]
    fn test_visit_limit() {
        // With one visit each, house n only gets elf n
        assert_eq!(lowest_house(55, 11, Some(1)), Some(5));
    }
}
