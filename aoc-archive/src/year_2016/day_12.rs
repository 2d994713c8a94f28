use crate::utils::assembunny::{Instruction, Machine, parse_program};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 12, tags = ["assembunny", "interpreter"])]
pub struct Solver;

const A: usize = 0;
const C: usize = 2;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_program(input)
    }
}

fn register_a(program: &[Instruction], c: i64) -> String {
    let mut machine = Machine::new(program.to_vec()).with_register(C, c);
    machine.run();
    machine.register(A).to_string()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(register_a(shared, 0))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(register_a(shared, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_all;

    #[test]
    fn test_example() {
        let input = "cpy 41 a\ninc a\ninc a\ndec a\njnz a 2\ndec a";
        assert_eq!(solve_all::<Solver>(input), ["42", "42"]);
    }

    #[test]
    fn test_register_c_seeds_the_loop() {
        let input = "cpy 3 b\njnz c 2\njnz 1 2\ncpy 7 b\ncpy b a";
        assert_eq!(solve_all::<Solver>(input), ["3", "7"]);
    }
}
