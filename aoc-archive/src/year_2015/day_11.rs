use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 11, tags = ["strings"], input = "hepxcrrq")]
pub struct Solver;

pub struct SharedData {
    password: Vec<u8>,
    /// Part 1 answer; part 2 continues from it
    first: Option<String>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let password = input.trim().as_bytes().to_vec();
        if password.is_empty() || !password.iter().all(u8::is_ascii_lowercase) {
            return Err(ParseError::InvalidFormat(format!(
                "password must be lowercase letters, got '{}'",
                input.trim()
            )));
        }
        Ok(SharedData {
            password,
            first: None,
        })
    }
}

const CONFUSING: &[u8] = b"iol";

/// Increment like a base-26 number; returns false when it wraps all the way round
fn increment(password: &mut [u8]) -> bool {
    for c in password.iter_mut().rev() {
        if *c == b'z' {
            *c = b'a';
        } else {
            *c += 1;
            return true;
        }
    }
    false
}

/// Jump past any confusing letter: bump it and reset everything after it
fn skip_confusing(password: &mut [u8]) {
    if let Some(pos) = password.iter().position(|c| CONFUSING.contains(c)) {
        password[pos] += 1;
        password[pos + 1..].fill(b'a');
    }
}

fn is_valid(password: &[u8]) -> bool {
    let straight = password
        .windows(3)
        .any(|w| w[1] == w[0] + 1 && w[2] == w[1] + 1);
    let confusing = password.iter().any(|c| CONFUSING.contains(c));
    let pairs: HashSet<u8> = password
        .windows(2)
        .filter(|w| w[0] == w[1])
        .map(|w| w[0])
        .collect();
    straight && !confusing && pairs.len() >= 2
}

fn next_password(password: &mut [u8]) -> Result<String, SolveError> {
    loop {
        if !increment(password) {
            return Err(SolveError::SolveFailed("ran out of passwords".into()));
        }
        skip_confusing(password);
        if is_valid(password) {
            return Ok(String::from_utf8_lossy(password).into_owned());
        }
    }
}

fn first_password(shared: &mut SharedData) -> Result<String, SolveError> {
    if let Some(first) = &shared.first {
        return Ok(first.clone());
    }
    let first = next_password(&mut shared.password)?;
    shared.first = Some(first.clone());
    Ok(first)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        first_password(shared)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let first = first_password(shared)?;
        let mut password = first.into_bytes();
        next_password(&mut password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::{solve_all, solve_part};

    #[test]
    fn test_rules() {
        assert!(!is_valid(b"hijklmmn"));
        assert!(!is_valid(b"abbceffg"));
        assert!(!is_valid(b"abbcegjk"));
        assert!(is_valid(b"abcdffaa"));
    }

    #[test]
    fn test_next_password() {
        assert_eq!(solve_part::<Solver>("abcdefgh", 1), "abcdffaa");
        assert_eq!(solve_part::<Solver>("ghijklmn", 1), "ghjaabcc");
    }

    #[test]
    fn test_part_two_continues_from_part_one() {
        let mut shared = Solver::parse("abcdefgh").unwrap();
        let first = <Solver as PartSolver<1>>::solve(&mut shared).unwrap();
        let second = <Solver as PartSolver<2>>::solve(&mut shared).unwrap();
        assert_eq!(first, "abcdffaa");
        assert!(second.as_bytes() > first.as_bytes());
        assert!(is_valid(second.as_bytes()));
    }

    #[test]
    fn test_part_two_alone_matches_chained_run() {
        assert_eq!(solve_all::<Solver>("abcdefgh")[1], solve_part::<Solver>("abcdefgh", 2));
        assert_ne!(solve_part::<Solver>("abcdefgh", 2), "abcdffaa");
    }
}
