use crate::utils::dp_cache::{DpCache, HashMapBackend};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 17, tags = ["combinatorics", "memoization"])]
pub struct Solver;

const EGGNOG_LITERS: u32 = 150;

pub struct SharedData {
    /// `by_count[k]` is the number of ways to fill the target exactly with `k` containers
    by_count: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let containers = parse_containers(input)?;
        Ok(SharedData {
            by_count: combinations_by_count(&containers, EGGNOG_LITERS),
        })
    }
}

fn parse_containers(input: &str) -> Result<Vec<u32>, ParseError> {
    input
        .split_whitespace()
        .map(|n| {
            n.parse()
                .map_err(|_| ParseError::InvalidFormat(format!("bad container size '{}'", n)))
        })
        .collect()
}

/// Count subsets of `containers` summing to `target`, grouped by subset size.
///
/// The index `(i, left)` covers containers `i..` that still need to hold `left` liters.
pub fn combinations_by_count(containers: &[u32], target: u32) -> Vec<u64> {
    let n = containers.len();
    let cache = DpCache::new(
        HashMapBackend::new(),
        |&(i, left): &(usize, u32)| {
            if i == n {
                return vec![];
            }
            let mut deps = vec![(i + 1, left)];
            if containers[i] <= left {
                deps.push((i + 1, left - containers[i]));
            }
            deps
        },
        |&(i, left): &(usize, u32), deps: Vec<Vec<u64>>| {
            if i == n {
                return if left == 0 { vec![1] } else { vec![] };
            }
            let mut deps = deps.into_iter();
            let mut counts = deps.next().unwrap_or_default();
            if let Some(taken) = deps.next() {
                if counts.len() < taken.len() + 1 {
                    counts.resize(taken.len() + 1, 0);
                }
                for (k, ways) in taken.into_iter().enumerate() {
                    counts[k + 1] += ways;
                }
            }
            counts
        },
    );
    cache.get(&(0, target))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.by_count.iter().sum::<u64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .by_count
            .iter()
            .find(|&&ways| ways > 0)
            .map(u64::to_string)
            .ok_or_else(|| SolveError::SolveFailed("no combination holds the eggnog".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example() {
        let containers = parse_containers("20\n15\n10\n5\n5").unwrap();
        let by_count = combinations_by_count(&containers, 25);
        assert_eq!(by_count.iter().sum::<u64>(), 4);
        assert_eq!(by_count.iter().find(|&&w| w > 0), Some(&3));
    }

    #[test]
    fn test_unreachable_target() {
        let by_count = combinations_by_count(&[4, 6], 7);
        assert_eq!(by_count.iter().sum::<u64>(), 0);
    }
}
