use crate::utils::point::Point;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 2, tags = ["grid"])]
pub struct Solver;

const SQUARE_KEYPAD: [&[u8]; 3] = [b"123", b"456", b"789"];
const DIAMOND_KEYPAD: [&[u8]; 5] = [b"  1  ", b" 234 ", b"56789", b" ABC ", b"  D  "];

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<Point>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|line| {
                line.bytes()
                    .map(|b| match b {
                        b'U' => Ok(Point::UP),
                        b'D' => Ok(Point::DOWN),
                        b'L' => Ok(Point::LEFT),
                        b'R' => Ok(Point::RIGHT),
                        other => Err(ParseError::InvalidFormat(format!("unknown move '{}'", other as char))),
                    })
                    .collect()
            })
            .collect()
    }
}

fn key_at(keypad: &[&[u8]], p: Point) -> Option<u8> {
    let row = keypad.get(usize::try_from(p.y).ok()?)?;
    row.get(usize::try_from(p.x).ok()?).copied().filter(|&k| k != b' ')
}

/// Follow each line from the last button pressed, starting on `5`; moves off the pad are ignored
pub fn bathroom_code(keypad: &[&[u8]], lines: &[Vec<Point>]) -> String {
    let mut position = keypad
        .iter()
        .enumerate()
        .find_map(|(y, row)| row.iter().position(|&k| k == b'5').map(|x| Point::new(x as i64, y as i64)))
        .unwrap_or(Point::ORIGIN);

    lines
        .iter()
        .filter_map(|moves| {
            for &step in moves {
                if key_at(keypad, position + step).is_some() {
                    position += step;
                }
            }
            key_at(keypad, position).map(char::from)
        })
        .collect()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(bathroom_code(&SQUARE_KEYPAD, shared))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(bathroom_code(&DIAMOND_KEYPAD, shared))
    }
}
