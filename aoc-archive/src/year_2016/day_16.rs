use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 16, tags = ["strings"], input = "11011110011011101")]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<bool>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .bytes()
            .map(|b| match b {
                b'0' => Ok(false),
                b'1' => Ok(true),
                other => Err(ParseError::InvalidFormat(format!("'{}' is not a bit", other as char))),
            })
            .collect()
    }
}

/// Grow with the modified dragon curve until `len` bits, then fold into the checksum
pub fn dragon_checksum(seed: &[bool], len: usize) -> String {
    let mut data = seed.to_vec();
    while data.len() < len {
        let tail: Vec<bool> = data.iter().rev().map(|b| !b).collect();
        data.push(false);
        data.extend(tail);
    }
    data.truncate(len);

    while data.len() % 2 == 0 && !data.is_empty() {
        data = data.chunks_exact(2).map(|pair| pair[0] == pair[1]).collect();
    }
    data.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

fn fill(seed: &[bool], len: usize) -> Result<String, SolveError> {
    if seed.is_empty() {
        return Err(SolveError::SolveFailed("cannot grow an empty seed".into()));
    }
    Ok(dragon_checksum(seed, len))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        fill(shared, 272)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        fill(shared, 35_651_584)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example() {
        let seed = Solver::parse("10000").unwrap();
        assert_eq!(dragon_checksum(&seed, 20), "01100");
    }

    #[test]
    fn test_checksum_only() {
        let data = Solver::parse("110010110100").unwrap();
        assert_eq!(dragon_checksum(&data, 12), "100");
    }
}
