use crate::utils::hash::hex_into;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 14, tags = ["md5"], input = "zpqevtbw")]
pub struct Solver;

const KEYS_NEEDED: usize = 64;
const LOOKAHEAD: usize = 1000;
const STRETCH: usize = 2016;

impl AocParser for Solver {
    type SharedData<'a> = &'a str;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let salt = input.trim();
        if salt.is_empty() {
            return Err(ParseError::MissingData("empty salt".to_string()));
        }
        Ok(salt)
    }
}

/// What matters about one hash: its first tripled digit and every quintupled digit
#[derive(Debug, Clone, Copy)]
struct Candidate {
    triple: Option<u8>,
    quintuples: u16,
}

fn stretched_hex(salt: &str, index: usize, stretch: usize) -> [u8; 32] {
    let mut hex = [0u8; 32];
    let mut digest = md5::compute(format!("{}{}", salt, index));
    hex_into(&digest.0, &mut hex);
    for _ in 0..stretch {
        digest = md5::compute(hex);
        hex_into(&digest.0, &mut hex);
    }
    hex
}

fn candidate(salt: &str, index: usize, stretch: usize) -> Candidate {
    let hex = stretched_hex(salt, index, stretch);
    let digit = |b: u8| (b as char).to_digit(16).unwrap_or(0) as u8;
    let triple = hex
        .windows(3)
        .find(|w| w[0] == w[1] && w[1] == w[2])
        .map(|w| digit(w[0]));
    let quintuples = hex
        .windows(5)
        .filter(|w| w.iter().all(|&b| b == w[0]))
        .fold(0, |mask, w| mask | 1 << digit(w[0]));
    Candidate { triple, quintuples }
}

/// Index producing the 64th key
pub fn last_key_index(salt: &str, stretch: usize) -> usize {
    let mut hashes: Vec<Candidate> = Vec::new();
    let mut get = |i: usize| {
        while hashes.len() <= i {
            hashes.push(candidate(salt, hashes.len(), stretch));
        }
        hashes[i]
    };

    let mut found = 0;
    let mut index = 0;
    loop {
        if let Some(digit) = get(index).triple
            && (index + 1..=index + LOOKAHEAD).any(|j| get(j).quintuples & (1 << digit) != 0)
        {
            found += 1;
            if found == KEYS_NEEDED {
                return index;
            }
        }
        index += 1;
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(last_key_index(shared, 0).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(last_key_index(shared, STRETCH).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_keys() {
        let first = candidate("abc", 18, 0);
        assert_eq!(first.triple, Some(8));
        assert_eq!(candidate("abc", 39, 0).triple, Some(0xe));
        assert_eq!(last_key_index("abc", 0), 22728);
    }

    #[test]
    fn test_stretched_hash() {
        let hex = stretched_hex("abc", 0, STRETCH);
        assert_eq!(&hex[..6], b"a107ff");
    }
}
