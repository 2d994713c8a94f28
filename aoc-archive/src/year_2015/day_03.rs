use crate::utils::point::Point;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 3, tags = ["grid"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Point>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .chars()
            .map(|c| match c {
                '^' => Ok(Point::UP),
                'v' => Ok(Point::DOWN),
                '<' => Ok(Point::LEFT),
                '>' => Ok(Point::RIGHT),
                other => Err(ParseError::InvalidFormat(format!("unexpected move '{}'", other))),
            })
            .collect()
    }
}

/// Houses that get at least one present when `carriers` take turns following the moves
fn houses_visited(moves: &[Point], carriers: usize) -> usize {
    let mut positions = vec![Point::ORIGIN; carriers];
    let mut visited = HashSet::from([Point::ORIGIN]);
    for (turn, step) in moves.iter().enumerate() {
        let pos = &mut positions[turn % carriers];
        *pos += *step;
        visited.insert(*pos);
    }
    visited.len()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(houses_visited(shared, 1).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(houses_visited(shared, 2).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_all;

    #[test]
    fn test_examples() {
        assert_eq!(solve_all::<Solver>("^v"), ["2", "3"]);
        assert_eq!(solve_all::<Solver>("^>v<"), ["4", "3"]);
        assert_eq!(solve_all::<Solver>("^v^v^v^v^v"), ["2", "11"]);
    }
}
