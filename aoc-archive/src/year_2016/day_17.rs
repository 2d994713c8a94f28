use crate::utils::hash::nibble;
use crate::utils::point::Point;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::VecDeque;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 17, tags = ["bfs", "md5"], input = "rrrbmfta")]
pub struct Solver;

const VAULT: Point = Point::new(3, 3);
const DOORS: [(u8, Point); 4] = [
    (b'U', Point::UP),
    (b'D', Point::DOWN),
    (b'L', Point::LEFT),
    (b'R', Point::RIGHT),
];

/// Every path that reaches the vault, shortest first
pub struct SharedData {
    paths: Vec<String>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let passcode = input.trim();
        if passcode.is_empty() {
            return Err(ParseError::MissingData("empty passcode".to_string()));
        }
        Ok(SharedData {
            paths: vault_paths(passcode),
        })
    }
}

fn in_rooms(p: Point) -> bool {
    (0..4).contains(&p.x) && (0..4).contains(&p.y)
}

/// Breadth-first over (position, path); doors open on `b`..=`f`
fn vault_paths(passcode: &str) -> Vec<String> {
    let mut found = Vec::new();
    let mut queue = VecDeque::from([(Point::ORIGIN, String::new())]);

    while let Some((position, path)) = queue.pop_front() {
        if position == VAULT {
            found.push(path);
            continue;
        }
        let digest = md5::compute(format!("{}{}", passcode, path));
        for (i, &(name, step)) in DOORS.iter().enumerate() {
            let next = position + step;
            if nibble(&digest.0, i) > 0xa && in_rooms(next) {
                let mut next_path = path.clone();
                next_path.push(name as char);
                queue.push_back((next, next_path));
            }
        }
    }
    found
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .paths
            .first()
            .cloned()
            .ok_or_else(|| SolveError::SolveFailed("no path reaches the vault".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .paths
            .last()
            .map(|p| p.len().to_string())
            .ok_or_else(|| SolveError::SolveFailed("no path reaches the vault".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_all;

    #[test]
    fn test_examples() {
        assert_eq!(solve_all::<Solver>("ihgpwlah"), ["DDRRRD", "370"]);
        assert_eq!(solve_all::<Solver>("kglvqrro"), ["DDUDRLRRUDRD", "492"]);
        assert_eq!(solve_all::<Solver>("ulqzkmiv"), ["DRURDRUDDLLDLUURRDULRLDUUDDDRR", "830"]);
    }

    #[test]
    fn test_sealed_vault() {
        assert!(vault_paths("hijkl").is_empty());
    }
}
