use crate::utils::assembunny::{Instruction, Machine, parse_program};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::ops::ControlFlow;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2016, day = 25, tags = ["assembunny", "interpreter"])]
pub struct Solver;

const A: usize = 0;
/// Outputs that must alternate before the signal counts as a clock
const STABLE_CYCLES: usize = 100;
const MAX_SEED: i64 = 1_000_000;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_program(input)
    }
}

fn is_clock(program: &[Instruction], seed: i64) -> bool {
    let mut emitted = 0;
    let mut alternating = true;
    Machine::new(program.to_vec())
        .with_register(A, seed)
        .run_with_output(|value| {
            if value != (emitted % 2) as i64 {
                alternating = false;
                return ControlFlow::Break(());
            }
            emitted += 1;
            if emitted > STABLE_CYCLES {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
    alternating && emitted > STABLE_CYCLES
}

/// Lowest positive seed for `a` that makes the program emit 0, 1, 0, 1, ...
pub fn lowest_clock_seed(program: &[Instruction]) -> Option<i64> {
    (1..=MAX_SEED).find(|&seed| is_clock(program, seed))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        lowest_clock_seed(shared)
            .map(|a| a.to_string())
            .ok_or_else(|| {
                SolveError::SolveFailed(format!("no seed up to {} produces a clock signal", MAX_SEED).into())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_all;

    #[test]
    fn test_lowest_seed() {
        let input = "cpy a d\ndec d\ncpy d b\nout 0\nout b\njnz 1 -2";
        assert_eq!(solve_all::<Solver>(input), ["2"]);
    }

    #[test]
    fn test_halting_program_is_not_a_clock() {
        let program = parse_program("out 0\nout 1").unwrap();
        assert!(!is_clock(&program, 1));
    }
}
