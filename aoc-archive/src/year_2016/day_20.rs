use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 20, tags = ["intervals"])]
pub struct Solver;

const MAX_IP: u64 = u32::MAX as u64;

impl AocParser for Solver {
    /// Blocked ranges, sorted and merged
    type SharedData<'a> = Vec<(u64, u64)>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let ranges = input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|line| {
                let bad = || ParseError::InvalidFormat(format!("bad range '{}'", line));
                let (low, high) = line.split_once('-').ok_or_else(bad)?;
                let low: u64 = low.parse().map_err(|_| bad())?;
                let high: u64 = high.parse().map_err(|_| bad())?;
                if low > high {
                    return Err(bad());
                }
                Ok((low, high))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(merge(ranges))
    }
}

/// Sort and coalesce overlapping or touching ranges
pub fn merge(mut ranges: Vec<(u64, u64)>) -> Vec<(u64, u64)> {
    ranges.sort_unstable();
    let mut merged: Vec<(u64, u64)> = Vec::with_capacity(ranges.len());
    for (low, high) in ranges {
        match merged.last_mut() {
            Some(last) if low <= last.1 + 1 => last.1 = last.1.max(high),
            _ => merged.push((low, high)),
        }
    }
    merged
}

/// Gaps between blocked ranges within `0..=max`
fn allowed(blocked: &[(u64, u64)], max: u64) -> impl Iterator<Item = (u64, u64)> + '_ {
    let mut next = 0;
    blocked
        .iter()
        .map(Some)
        .chain(std::iter::once(None))
        .filter_map(move |range| {
            let start = next;
            match range {
                Some(&(low, high)) => {
                    next = next.max(high + 1);
                    (low > start && start <= max).then(|| (start, (low - 1).min(max)))
                }
                None => (start <= max).then_some((start, max)),
            }
        })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        allowed(shared, MAX_IP)
            .next()
            .map(|(low, _)| low.to_string())
            .ok_or_else(|| SolveError::SolveFailed("every address is blocked".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count: u64 = allowed(shared, MAX_IP).map(|(low, high)| high - low + 1).sum();
        Ok(count.to_string())
    }
}
