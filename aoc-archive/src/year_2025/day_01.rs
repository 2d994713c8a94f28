use crate::utils::math::modulo;
use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 1, tags = ["dial", "modular-arithmetic"])]
pub struct Solver;

const DIAL_SIZE: i32 = 100;
const START: i32 = 50;

#[derive(Debug)]
pub struct SharedData {
    rotations: Vec<i32>,
    counts: Option<ZeroCounts>,
}

#[derive(Debug, Clone, Copy)]
pub struct ZeroCounts {
    /// Rotations that leave the dial on 0
    landed: u32,
    /// Clicks that pass or land on 0
    passed: u32,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(idx, line)| -> Result<i32, anyhow::Error> {
                let line = line.trim();
                let sign = match line.as_bytes().first() {
                    Some(b'L') => -1,
                    Some(b'R') => 1,
                    _ => return Err(anyhow!("(line {}) first character needs to be 'L' or 'R'", idx + 1)),
                };
                let clicks: i32 = line[1..]
                    .parse()
                    .map_err(|e| anyhow!("(line {}) {}", idx + 1, e))?;
                if clicks < 0 {
                    return Err(anyhow!("(line {}) rotation must be non-negative", idx + 1));
                }
                Ok(sign * clicks)
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|rotations| SharedData {
                rotations,
                counts: None,
            })
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

/// One pass over the rotations serves both parts
fn zero_counts(shared: &mut SharedData) -> ZeroCounts {
    *shared.counts.get_or_insert_with(|| {
        let (_, landed, passed) = shared.rotations.iter().fold(
            (START, 0u32, 0u32),
            |(dial, mut landed, mut passed), &rotation| {
                let moved = dial + rotation;
                if moved <= 0 && dial != 0 {
                    passed += 1;
                }
                passed += (moved / DIAL_SIZE).unsigned_abs();
                let dial = modulo(moved, DIAL_SIZE);
                if dial == 0 {
                    landed += 1;
                }
                (dial, landed, passed)
            },
        );
        ZeroCounts { landed, passed }
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(zero_counts(shared).landed.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(zero_counts(shared).passed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_all;

    #[test]
    fn test_example() {
        let input = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82";
        assert_eq!(solve_all::<Solver>(input), ["3", "6"]);
    }

    #[test]
    fn test_full_turns_click_every_time() {
        assert_eq!(solve_all::<Solver>("R1000"), ["0", "10"]);
        assert_eq!(solve_all::<Solver>("L50\nL200"), ["2", "3"]);
    }

    #[test]
    fn test_bad_direction() {
        assert!(Solver::parse("X5").is_err());
    }
}
