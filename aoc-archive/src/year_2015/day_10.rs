use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 10, tags = ["simulation"], input = "3113322113")]
pub struct Solver;

pub struct SharedData {
    digits: Vec<u8>,
    rounds_done: usize,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let digits: Vec<u8> = input
            .trim()
            .bytes()
            .map(|b| {
                if b.is_ascii_digit() {
                    Ok(b - b'0')
                } else {
                    Err(ParseError::InvalidFormat(format!("'{}' is not a digit", b as char)))
                }
            })
            .collect::<Result<_, _>>()?;
        if digits.is_empty() {
            return Err(ParseError::MissingData("starting sequence".to_string()));
        }
        Ok(SharedData {
            digits,
            rounds_done: 0,
        })
    }
}

fn look_and_say(digits: &[u8]) -> Vec<u8> {
    let mut next = Vec::with_capacity(digits.len() * 2);
    for run in digits.chunk_by(|a, b| a == b) {
        next.push(run.len() as u8);
        next.push(run[0]);
    }
    next
}

/// Advance the shared sequence to `rounds` total rounds; part 2 continues from part 1
fn length_after(shared: &mut SharedData, rounds: usize) -> usize {
    while shared.rounds_done < rounds {
        shared.digits = look_and_say(&shared.digits);
        shared.rounds_done += 1;
    }
    shared.digits.len()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(length_after(shared, 40).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(length_after(shared, 50).to_string())
    }
}
