use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 3, tags = ["geometry"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<[u32; 3]>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|line| {
                let sides: Vec<u32> = line
                    .split_whitespace()
                    .map(|n| n.parse().map_err(|_| ParseError::InvalidFormat(line.to_string())))
                    .collect::<Result<_, _>>()?;
                sides
                    .try_into()
                    .map_err(|_| ParseError::InvalidFormat(format!("expected three sides: '{}'", line)))
            })
            .collect()
    }
}

fn is_triangle(mut sides: [u32; 3]) -> bool {
    sides.sort_unstable();
    sides[0] + sides[1] > sides[2]
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared.iter().filter(|&&t| is_triangle(t)).count();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.len() % 3 != 0 {
            return Err(SolveError::SolveFailed(
                format!("{} rows cannot be read in column groups of three", shared.len()).into(),
            ));
        }
        let count = shared
            .chunks_exact(3)
            .flat_map(|rows| (0..3).map(move |col| [rows[0][col], rows[1][col], rows[2][col]]))
            .filter(|&t| is_triangle(t))
            .count();
        Ok(count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::{solve_all, solve_part};

    #[test]
    fn test_rows_and_columns() {
        let input = "\
101 301 501
102 302 502
103 303 503
201 401 601
202 402 602
203 403 603";
        assert_eq!(solve_all::<Solver>(input), ["3", "6"]);
    }

    #[test]
    fn test_impossible_triangle() {
        assert_eq!(solve_part::<Solver>("5 10 25", 1), "0");
        let mut rows = Solver::parse("5 10 25").unwrap();
        assert!(<Solver as PartSolver<2>>::solve(&mut rows).is_err());
    }
}
