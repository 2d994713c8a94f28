use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 2, tags = ["warmup"])]
pub struct Solver;

/// Box dimensions, sorted ascending
#[derive(Debug, Clone, Copy)]
pub struct Present([u64; 3]);

impl Present {
    fn paper(&self) -> u64 {
        let [a, b, c] = self.0;
        2 * (a * b + b * c + a * c) + a * b
    }

    fn ribbon(&self) -> u64 {
        let [a, b, c] = self.0;
        2 * (a + b) + a * b * c
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Present>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|l| !l.trim().is_empty())
            .enumerate()
            .map(|(idx, line)| -> Result<Present, anyhow::Error> {
                let dims: Vec<u64> = line
                    .trim()
                    .split('x')
                    .map(|d| d.parse::<u64>().with_context(|| format!("bad dimension '{}'", d)))
                    .collect::<Result<_, _>>()
                    .with_context(|| format!("line {}", idx + 1))?;
                let mut dims: [u64; 3] = dims
                    .try_into()
                    .map_err(|_| anyhow!("line {}: expected LxWxH", idx + 1))?;
                dims.sort_unstable();
                Ok(Present(dims))
            })
            .collect::<Result<_, _>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(Present::paper).sum::<u64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(Present::ribbon).sum::<u64>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_all;

    #[test]
    fn test_examples() {
        assert_eq!(solve_all::<Solver>("2x3x4"), ["58", "34"]);
        assert_eq!(solve_all::<Solver>("1x1x10"), ["43", "14"]);
        assert_eq!(solve_all::<Solver>("2x3x4\n1x1x10\n"), ["101", "48"]);
    }

    #[test]
    fn test_malformed_line() {
        assert!(Solver::parse("2x3").is_err());
        assert!(Solver::parse("2xax3").is_err());
    }
}
