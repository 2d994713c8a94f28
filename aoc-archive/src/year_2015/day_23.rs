use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 23, tags = ["interpreter"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Half(usize),
    Triple(usize),
    Increment(usize),
    Jump(i64),
    JumpIfEven(usize, i64),
    JumpIfOne(usize, i64),
}

fn register(token: &str) -> Result<usize, ParseError> {
    match token.trim_end_matches(',') {
        "a" => Ok(0),
        "b" => Ok(1),
        other => Err(ParseError::InvalidFormat(format!("unknown register '{}'", other))),
    }
}

fn offset(token: &str) -> Result<i64, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::InvalidFormat(format!("bad jump offset '{}'", token)))
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|line| {
                let tokens: Vec<&str> = line.split_whitespace().collect();
                match tokens[..] {
                    ["hlf", r] => Ok(Instruction::Half(register(r)?)),
                    ["tpl", r] => Ok(Instruction::Triple(register(r)?)),
                    ["inc", r] => Ok(Instruction::Increment(register(r)?)),
                    ["jmp", o] => Ok(Instruction::Jump(offset(o)?)),
                    ["jie", r, o] => Ok(Instruction::JumpIfEven(register(r)?, offset(o)?)),
                    ["jio", r, o] => Ok(Instruction::JumpIfOne(register(r)?, offset(o)?)),
                    _ => Err(ParseError::InvalidFormat(line.to_string())),
                }
            })
            .collect()
    }
}

/// Run to completion and return the registers
pub fn execute(program: &[Instruction], a: u64) -> [u64; 2] {
    let mut registers = [a, 0];
    let mut pc: i64 = 0;
    while let Some(&instruction) = usize::try_from(pc).ok().and_then(|i| program.get(i)) {
        pc += match instruction {
            Instruction::Half(r) => {
                registers[r] /= 2;
                1
            }
            Instruction::Triple(r) => {
                registers[r] *= 3;
                1
            }
            Instruction::Increment(r) => {
                registers[r] += 1;
                1
            }
            Instruction::Jump(o) => o,
            Instruction::JumpIfEven(r, o) if registers[r] % 2 == 0 => o,
            Instruction::JumpIfOne(r, o) if registers[r] == 1 => o,
            Instruction::JumpIfEven(..) | Instruction::JumpIfOne(..) => 1,
        };
    }
    registers
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(execute(shared, 0)[1].to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(execute(shared, 1)[1].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_all;

    #[test]
    fn test_example() {
        let program = Solver::parse("inc a\njio a, +2\ntpl a\ninc a").unwrap();
        assert_eq!(execute(&program, 0), [2, 0]);
    }

    #[test]
    fn test_answers_read_register_b() {
        let input = "jio a, +3\ninc b\njmp +2\ntpl b\ninc b";
        assert_eq!(solve_all::<Solver>(input), ["2", "1"]);
    }
}
