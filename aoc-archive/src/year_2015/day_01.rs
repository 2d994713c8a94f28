use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 1, tags = ["warmup"])]
pub struct Solver;

impl AocParser for Solver {
    /// Floor change for each instruction
    type SharedData<'a> = Vec<i32>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .bytes()
            .map(|b| match b {
                b'(' => Ok(1),
                b')' => Ok(-1),
                other => Err(ParseError::InvalidFormat(format!(
                    "unexpected character '{}'",
                    other as char
                ))),
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i32>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .scan(0, |floor, step| {
                *floor += step;
                Some(*floor)
            })
            .position(|floor| floor < 0)
            .map(|idx| (idx + 1).to_string())
            .ok_or_else(|| SolveError::SolveFailed("Santa never enters the basement".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;

    #[test]
    fn test_final_floor() {
        assert_eq!(solve_part::<Solver>("(())", 1), "0");
        assert_eq!(solve_part::<Solver>("))(((((", 1), "3");
        assert_eq!(solve_part::<Solver>(")())())", 1), "-3");
    }

    #[test]
    fn test_basement_position() {
        assert_eq!(solve_part::<Solver>(")", 2), "1");
        assert_eq!(solve_part::<Solver>("()())", 2), "5");
    }

    #[test]
    fn test_never_basement_fails() {
        let mut shared = Solver::parse("((").unwrap();
        assert!(<Solver as PartSolver<2>>::solve(&mut shared).is_err());
    }
}
