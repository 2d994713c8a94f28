use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2015, day = 25, tags = ["modular-arithmetic"])]
pub struct Solver;

const FIRST_CODE: u64 = 20151125;
const MULTIPLIER: u64 = 252533;
const MODULUS: u64 = 33554393;

impl AocParser for Solver {
    type SharedData<'a> = (u64, u64);

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let re = Regex::new(r"row (\d+), column (\d+)").map_err(|e| ParseError::Other(e.to_string()))?;
        let caps = re
            .captures(input)
            .ok_or_else(|| ParseError::MissingData("no row and column in the manual".to_string()))?;
        let num = |i: usize| -> Result<u64, ParseError> {
            caps[i]
                .parse()
                .map_err(|_| ParseError::InvalidFormat(caps[i].to_string()))
        };
        let (row, column) = (num(1)?, num(2)?);
        if row == 0 || column == 0 {
            return Err(ParseError::InvalidFormat("rows and columns start at 1".to_string()));
        }
        Ok((row, column))
    }
}

fn pow_mod(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    let mut result = 1;
    base %= modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % modulus;
        }
        base = base * base % modulus;
        exp >>= 1;
    }
    result
}

/// Code at 1-based `(row, column)` of the diagonally filled grid
pub fn code_at(row: u64, column: u64) -> u64 {
    let diagonal = row + column - 1;
    let position = diagonal * (diagonal - 1) / 2 + column - 1;
    FIRST_CODE * pow_mod(MULTIPLIER, position, MODULUS) % MODULUS
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (row, column) = *shared;
        Ok(code_at(row, column).to_string())
    }
}
