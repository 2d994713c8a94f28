use crate::utils::assembunny::{Instruction, Machine, parse_program};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 23, tags = ["assembunny", "interpreter"])]
pub struct Solver;

const A: usize = 0;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_program(input)
    }
}

/// Value left in register `a` when the safe program runs with `eggs` in `a`
pub fn safe_value(program: &[Instruction], eggs: i64) -> i64 {
    // tgl rewrites the program, so every run starts from a fresh copy
    let mut machine = Machine::new(program.to_vec()).with_register(A, eggs);
    machine.run();
    machine.register(A)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(safe_value(shared, 7).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(safe_value(shared, 12).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_all;

    #[test]
    fn test_example() {
        let input = "cpy 2 a\ntgl a\ntgl a\ntgl a\ncpy 1 a\ndec a\ndec a";
        assert_eq!(solve_all::<Solver>(input), ["3", "3"]);
    }

    #[test]
    fn test_factorial_shape() {
        // a = a! via the multiply nest, the same shape the real safe program uses
        let program = parse_program(
            "cpy a b\ndec b\ncpy a d\ncpy 0 a\ncpy b c\ninc a\ndec c\njnz c -2\ndec d\njnz d -5\ndec b\ncpy b c\ncpy c d\ndec d\ninc c\njnz d -2\ntgl c\ncpy -16 c\njnz 1 c",
        )
        .unwrap();
        assert_eq!(safe_value(&program, 7), 5040);
    }
}
