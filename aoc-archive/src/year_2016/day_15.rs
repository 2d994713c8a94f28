use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 15, tags = ["modular-arithmetic"])]
pub struct Solver;

/// `(positions, position at time 0)`, ordered from the top disc down
type Disc = (u64, u64);

impl AocParser for Solver {
    type SharedData<'a> = Vec<Disc>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let re = Regex::new(r"^Disc #\d+ has (\d+) positions; at time=0, it is at position (\d+)\.$")
            .map_err(|e| ParseError::Other(e.to_string()))?;
        input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|line| {
                let bad = || ParseError::InvalidFormat(line.to_string());
                let caps = re.captures(line).ok_or_else(bad)?;
                let positions: u64 = caps[1].parse().map_err(|_| bad())?;
                let start: u64 = caps[2].parse().map_err(|_| bad())?;
                if positions == 0 {
                    return Err(bad());
                }
                Ok((positions, start))
            })
            .collect()
    }
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// First release time at which the capsule passes every disc.
///
/// Sieves one disc at a time, stepping by the lcm of the sizes already aligned.
pub fn first_drop_time(discs: &[Disc]) -> Option<u64> {
    let mut time = 0;
    let mut step = 1;
    for (depth, &(positions, start)) in discs.iter().enumerate() {
        let aligned = |t: u64| (start + t + depth as u64 + 1) % positions == 0;
        let tries = (0..positions).find(|&k| aligned(time + k * step))?;
        time += tries * step;
        step = step / gcd(step, positions) * positions;
    }
    Some(time)
}

fn answer(discs: &[Disc]) -> Result<String, SolveError> {
    first_drop_time(discs)
        .map(|t| t.to_string())
        .ok_or_else(|| SolveError::SolveFailed("the discs never line up".into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        answer(shared)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut discs = shared.clone();
        discs.push((11, 0));
        answer(&discs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;

    #[test]
    fn test_example() {
        let input = "\
Disc #1 has 5 positions; at time=0, it is at position 4.
Disc #2 has 2 positions; at time=0, it is at position 1.";
        assert_eq!(solve_part::<Solver>(input, 1), "5");
    }

    #[test]
    fn test_incompatible_discs() {
        assert_eq!(first_drop_time(&[(2, 0), (4, 0)]), None);
    }
}
