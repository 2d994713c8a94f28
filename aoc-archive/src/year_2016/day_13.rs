use crate::utils::point::Point;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::{HashMap, VecDeque};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 13, tags = ["bfs", "maze"], input = "1364")]
pub struct Solver;

const START: Point = Point::new(1, 1);
const TARGET: Point = Point::new(31, 39);
const STEP_BUDGET: usize = 50;

impl AocParser for Solver {
    type SharedData<'a> = i64;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidFormat(format!("bad favorite number '{}'", input.trim())))
    }
}

fn is_open(p: Point, favorite: i64) -> bool {
    let Point { x, y } = p;
    x >= 0 && y >= 0 && (x * x + 3 * x + 2 * x * y + y + y * y + favorite).count_ones() % 2 == 0
}

/// Breadth-first distances from the start, stopping past `limit` steps or at `target`
fn distances(favorite: i64, target: Option<Point>, limit: usize) -> HashMap<Point, usize> {
    let mut dist = HashMap::from([(START, 0)]);
    let mut queue = VecDeque::from([START]);

    while let Some(p) = queue.pop_front() {
        let d = dist[&p];
        if Some(p) == target {
            break;
        }
        if d == limit {
            continue;
        }
        for next in p.neighbours4() {
            if is_open(next, favorite) && !dist.contains_key(&next) {
                dist.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

pub fn steps_to(favorite: i64, target: Point) -> Option<usize> {
    distances(favorite, Some(target), usize::MAX).get(&target).copied()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        steps_to(*shared, TARGET)
            .map(|n| n.to_string())
            .ok_or_else(|| SolveError::SolveFailed("the target is walled off".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(distances(*shared, None, STEP_BUDGET).len().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_maze() {
        let row: String = (0..10)
            .map(|x| if is_open(Point::new(x, 0), 10) { '.' } else { '#' })
            .collect();
        assert_eq!(row, ".#.####.##");
        assert_eq!(steps_to(10, Point::new(7, 4)), Some(11));
    }

    #[test]
    fn test_reach_grows_with_budget() {
        assert_eq!(distances(10, None, 0).len(), 1);
        assert!(distances(10, None, 2).len() > distances(10, None, 1).len());
    }
}
