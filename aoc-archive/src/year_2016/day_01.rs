use crate::utils::point::Point;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::HashSet;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 1, tags = ["grid", "walking"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<(Turn, i64)>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|step| {
                let bad = || ParseError::InvalidFormat(format!("bad instruction '{}'", step));
                let turn = match step.as_bytes()[0] {
                    b'L' => Turn::Left,
                    b'R' => Turn::Right,
                    _ => return Err(bad()),
                };
                let blocks = step[1..].parse().map_err(|_| bad())?;
                Ok((turn, blocks))
            })
            .collect()
    }
}

/// Every block walked through, in order, starting facing north
fn walk(steps: &[(Turn, i64)]) -> impl Iterator<Item = Point> + '_ {
    let mut facing = Point::UP;
    let mut position = Point::ORIGIN;
    steps.iter().flat_map(move |&(turn, blocks)| {
        facing = match turn {
            Turn::Left => facing.turn_left(),
            Turn::Right => facing.turn_right(),
        };
        let start = position;
        position += facing * blocks;
        let heading = facing;
        (1..=blocks).map(move |i| start + heading * i)
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let end = walk(shared).last().unwrap_or(Point::ORIGIN);
        Ok(end.manhattan().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut visited = HashSet::from([Point::ORIGIN]);
        walk(shared)
            .find(|&p| !visited.insert(p))
            .map(|p| p.manhattan().to_string())
            .ok_or_else(|| SolveError::SolveFailed("no location is visited twice".into()))
    }
}
