use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 18, tags = ["cellular-automaton"])]
pub struct Solver;

impl AocParser for Solver {
    /// `true` marks a trap
    type SharedData<'a> = Vec<bool>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .bytes()
            .map(|b| match b {
                b'^' => Ok(true),
                b'.' => Ok(false),
                other => Err(ParseError::InvalidFormat(format!("unexpected tile '{}'", other as char))),
            })
            .collect()
    }
}

/// Safe tiles across `rows` rows; a tile is a trap exactly when its left and right parents differ
pub fn safe_tiles(first: &[bool], rows: usize) -> usize {
    let mut row = first.to_vec();
    let mut next = vec![false; row.len()];
    let mut safe = 0;
    for _ in 0..rows {
        safe += row.iter().filter(|&&trap| !trap).count();
        for (i, tile) in next.iter_mut().enumerate() {
            let left = i.checked_sub(1).is_some_and(|l| row[l]);
            let right = row.get(i + 1).copied().unwrap_or(false);
            *tile = left != right;
        }
        std::mem::swap(&mut row, &mut next);
    }
    safe
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(safe_tiles(shared, 40).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(safe_tiles(shared, 400_000).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples() {
        assert_eq!(safe_tiles(&Solver::parse("..^^.").unwrap(), 3), 6);
        assert_eq!(safe_tiles(&Solver::parse(".^^.^.^^^^").unwrap(), 10), 38);
    }
}
