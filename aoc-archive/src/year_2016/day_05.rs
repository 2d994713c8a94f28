use crate::utils::hash::{leading_zero_nibbles, nibble};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 5, tags = ["md5"], input = "reyedfim")]
pub struct Solver;

const PASSWORD_LEN: usize = 8;

pub struct SharedData {
    /// `(6th, 7th)` hex digits of each interesting hash, in index order
    hits: Vec<(u8, u8)>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let door = input.trim();
        if door.is_empty() {
            return Err(ParseError::MissingData("empty door id".to_string()));
        }
        Ok(SharedData {
            hits: interesting_hashes(door),
        })
    }
}

/// Scan indices until both passwords can be filled
fn interesting_hashes(door: &str) -> Vec<(u8, u8)> {
    let mut hits = Vec::new();
    let mut filled = [false; PASSWORD_LEN];
    let mut index: u64 = 0;

    while hits.len() < PASSWORD_LEN || filled.contains(&false) {
        let digest = md5::compute(format!("{}{}", door, index));
        if leading_zero_nibbles(&digest.0) >= 5 {
            let (sixth, seventh) = (nibble(&digest.0, 5), nibble(&digest.0, 6));
            if let Some(slot) = filled.get_mut(sixth as usize) {
                *slot = true;
            }
            hits.push((sixth, seventh));
        }
        index += 1;
    }
    hits
}

fn hex(n: u8) -> char {
    char::from_digit(n as u32, 16).unwrap_or('?')
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.hits.iter().take(PASSWORD_LEN).map(|&(c, _)| hex(c)).collect())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut password = [None; PASSWORD_LEN];
        for &(position, value) in &shared.hits {
            if let Some(slot) = password.get_mut(position as usize)
                && slot.is_none()
            {
                *slot = Some(hex(value));
            }
        }
        password
            .iter()
            .map(|c| c.ok_or_else(|| SolveError::SolveFailed("password has gaps".into())))
            .collect()
    }
}
