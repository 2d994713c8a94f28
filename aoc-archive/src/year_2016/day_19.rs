use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::VecDeque;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 19, tags = ["josephus"], input = "3004953")]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = usize;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        match input.trim().parse() {
            Ok(0) | Err(_) => Err(ParseError::InvalidFormat(format!(
                "expected a positive number of elves, got '{}'",
                input.trim()
            ))),
            Ok(n) => Ok(n),
        }
    }
}

/// Each elf takes the presents of the elf to its left
pub fn steal_left(elves: usize) -> usize {
    let mut circle: VecDeque<usize> = (1..=elves).collect();
    while circle.len() > 1 {
        circle.rotate_left(1);
        circle.pop_front();
    }
    circle.front().copied().unwrap_or(1)
}

/// Each elf takes the presents of the elf directly across the circle.
///
/// The circle is kept as two halves so the victim is always the front of `right`.
pub fn steal_across(elves: usize) -> usize {
    let mut left: VecDeque<usize> = (1..=elves / 2).collect();
    let mut right: VecDeque<usize> = (elves / 2 + 1..=elves).collect();

    while left.len() + right.len() > 1 {
        right.pop_front();
        if let Some(thief) = left.pop_front() {
            right.push_back(thief);
        }
        if right.len() > left.len() + 1
            && let Some(moved) = right.pop_front()
        {
            left.push_back(moved);
        }
    }
    right.front().or(left.front()).copied().unwrap_or(1)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(steal_left(*shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(steal_across(*shared).to_string())
    }
}
