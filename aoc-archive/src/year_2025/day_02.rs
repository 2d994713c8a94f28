use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::ops::RangeInclusive;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 2, tags = ["strings", "ranges"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<RangeInclusive<u64>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .split(',')
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(|range| -> anyhow::Result<RangeInclusive<u64>> {
                let (low, high) = range
                    .split_once('-')
                    .ok_or_else(|| anyhow!("range '{}' has no '-'", range))?;
                let low: u64 = low.parse().with_context(|| format!("bad start in '{}'", range))?;
                let high: u64 = high.parse().with_context(|| format!("bad end in '{}'", range))?;
                anyhow::ensure!(low <= high, "range '{}' runs backwards", range);
                Ok(low..=high)
            })
            .collect::<anyhow::Result<_>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

/// Whether the decimal digits of `id` are one block repeated `times` times
fn repeats(digits: &[u8], times: usize) -> bool {
    let len = digits.len();
    if times < 2 || len % times != 0 {
        return false;
    }
    let block = len / times;
    digits.chunks_exact(block).all(|chunk| chunk == &digits[..block])
}

fn sum_invalid(ranges: &[RangeInclusive<u64>], invalid: impl Fn(&[u8]) -> bool) -> u64 {
    ranges
        .iter()
        .flat_map(|r| r.clone())
        .filter(|id| invalid(id.to_string().as_bytes()))
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_invalid(shared, |d| repeats(d, 2)).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let any_repeat = |d: &[u8]| (2..=d.len()).any(|times| repeats(d, times));
        Ok(sum_invalid(shared, any_repeat).to_string())
    }
}
