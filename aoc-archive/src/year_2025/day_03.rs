use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 3, tags = ["greedy"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<u8>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|bank| {
                bank.bytes()
                    .map(|b| match b {
                        b'1'..=b'9' => Ok(b - b'0'),
                        other => Err(ParseError::InvalidFormat(format!(
                            "'{}' is not a battery rating",
                            other as char
                        ))),
                    })
                    .collect()
            })
            .collect()
    }
}

/// Largest number formed by switching on exactly `count` batteries, keeping their order.
///
/// Each digit is the leftmost maximum among positions that still leave room for the rest.
pub fn max_joltage(bank: &[u8], count: usize) -> Option<u64> {
    if bank.len() < count {
        return None;
    }
    let mut start = 0;
    let mut joltage = 0;
    for remaining in (0..count).rev() {
        let window = &bank[start..bank.len() - remaining];
        let (offset, &digit) = window
            .iter()
            .enumerate()
            .rev()
            .max_by_key(|&(_, d)| d)?;
        joltage = joltage * 10 + digit as u64;
        start += offset + 1;
    }
    Some(joltage)
}

fn total_joltage(banks: &[Vec<u8>], count: usize) -> Result<String, SolveError> {
    banks
        .iter()
        .map(|bank| {
            max_joltage(bank, count).ok_or_else(|| {
                SolveError::SolveFailed(format!("a bank has fewer than {} batteries", count).into())
            })
        })
        .sum::<Result<u64, _>>()
        .map(|total| total.to_string())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total_joltage(shared, 2)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        total_joltage(shared, 12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_all;

    const EXAMPLE: &str = "\
987654321111111
811111111111119
234234234234278
818181911112111";

    #[test]
    fn test_example() {
        assert_eq!(solve_all::<Solver>(EXAMPLE), ["357", "3121910778619"]);
    }

    #[test]
    fn test_leftmost_maximum_wins() {
        assert_eq!(max_joltage(&[8, 1, 8, 1, 9], 2), Some(89));
        assert_eq!(max_joltage(&[9, 9, 1], 2), Some(99));
        assert_eq!(max_joltage(&[5], 2), None);
    }
}
