//! Interpreter for the four-register "assembunny" machine
//!
//! Instructions: `cpy x y`, `inc x`, `dec x`, `jnz x y`, `tgl x`, `out x`.
//! Registers are `a` to `d`. Two loop shapes are recognised and executed in one
//! step: the add loop `inc a / dec c / jnz c -2` and the multiply nest
//! `cpy b c / inc a / dec c / jnz c -2 / dec d / jnz d -5`. They are matched
//! against the current program, so toggled code falls back to plain stepping.

use aoc_solver::ParseError;
use std::ops::ControlFlow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Reg(usize),
    Value(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Cpy(Operand, Operand),
    Inc(Operand),
    Dec(Operand),
    Jnz(Operand, Operand),
    Tgl(Operand),
    Out(Operand),
}

impl Instruction {
    fn toggled(self) -> Self {
        match self {
            Instruction::Inc(x) => Instruction::Dec(x),
            Instruction::Dec(x) | Instruction::Tgl(x) | Instruction::Out(x) => Instruction::Inc(x),
            Instruction::Jnz(x, y) => Instruction::Cpy(x, y),
            Instruction::Cpy(x, y) => Instruction::Jnz(x, y),
        }
    }
}

fn register_index(name: &str) -> Option<usize> {
    match name {
        "a" => Some(0),
        "b" => Some(1),
        "c" => Some(2),
        "d" => Some(3),
        _ => None,
    }
}

fn parse_operand(token: &str) -> Result<Operand, ParseError> {
    if let Some(reg) = register_index(token) {
        return Ok(Operand::Reg(reg));
    }
    token
        .parse()
        .map(Operand::Value)
        .map_err(|_| ParseError::InvalidFormat(format!("bad operand '{}'", token)))
}

pub fn parse_program(input: &str) -> Result<Vec<Instruction>, ParseError> {
    input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .enumerate()
        .map(|(idx, line)| {
            let parts: Vec<&str> = line.split_whitespace().collect();
            let operand = |i: usize| {
                parts
                    .get(i)
                    .ok_or_else(|| {
                        ParseError::MissingData(format!("line {}: missing operand", idx + 1))
                    })
                    .and_then(|t| parse_operand(t))
            };
            match parts[0] {
                "cpy" => Ok(Instruction::Cpy(operand(1)?, operand(2)?)),
                "inc" => Ok(Instruction::Inc(operand(1)?)),
                "dec" => Ok(Instruction::Dec(operand(1)?)),
                "jnz" => Ok(Instruction::Jnz(operand(1)?, operand(2)?)),
                "tgl" => Ok(Instruction::Tgl(operand(1)?)),
                "out" => Ok(Instruction::Out(operand(1)?)),
                other => Err(ParseError::InvalidFormat(format!(
                    "line {}: unknown instruction '{}'",
                    idx + 1,
                    other
                ))),
            }
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct Machine {
    program: Vec<Instruction>,
    registers: [i64; 4],
    pc: i64,
}

impl Machine {
    pub fn new(program: Vec<Instruction>) -> Self {
        Self {
            program,
            registers: [0; 4],
            pc: 0,
        }
    }

    pub fn with_register(mut self, reg: usize, value: i64) -> Self {
        self.registers[reg] = value;
        self
    }

    pub fn register(&self, reg: usize) -> i64 {
        self.registers[reg]
    }

    fn value(&self, operand: Operand) -> i64 {
        match operand {
            Operand::Reg(r) => self.registers[r],
            Operand::Value(v) => v,
        }
    }

    fn fetch(&self, offset: i64) -> Option<Instruction> {
        usize::try_from(self.pc + offset)
            .ok()
            .and_then(|i| self.program.get(i).copied())
    }

    fn window(&self, len: usize) -> Option<&[Instruction]> {
        let start = usize::try_from(self.pc).ok()?;
        self.program.get(start..start + len)
    }

    /// Run until the program counter leaves the program
    pub fn run(&mut self) {
        let _ = self.run_with_output(|_| ControlFlow::Continue(()));
    }

    /// Run, passing each `out` value to `on_out` until it breaks or the program halts.
    ///
    /// Returns `true` when `on_out` stopped the run.
    pub fn run_with_output<F>(&mut self, mut on_out: F) -> bool
    where
        F: FnMut(i64) -> ControlFlow<()>,
    {
        while let Some(instruction) = self.fetch(0) {
            if self.try_multiply() || self.try_add() {
                continue;
            }
            match instruction {
                Instruction::Cpy(src, Operand::Reg(dst)) => self.registers[dst] = self.value(src),
                Instruction::Inc(Operand::Reg(r)) => self.registers[r] += 1,
                Instruction::Dec(Operand::Reg(r)) => self.registers[r] -= 1,
                Instruction::Jnz(cond, offset) => {
                    if self.value(cond) != 0 {
                        self.pc += self.value(offset);
                        continue;
                    }
                }
                Instruction::Tgl(x) => {
                    let target = self.pc + self.value(x);
                    if let Some(slot) = usize::try_from(target)
                        .ok()
                        .and_then(|i| self.program.get_mut(i))
                    {
                        *slot = slot.toggled();
                    }
                }
                Instruction::Out(x) => {
                    let value = self.value(x);
                    self.pc += 1;
                    if on_out(value).is_break() {
                        return true;
                    }
                    continue;
                }
                // Toggling can produce instructions that write to a constant; they are skipped
                _ => {}
            }
            self.pc += 1;
        }
        false
    }

    /// `inc a / dec c / jnz c -2` (or `dec c / inc a / jnz c -2`) becomes `a += c; c = 0`
    fn try_add(&mut self) -> bool {
        let Some(&[first, second, third]) = self.window(3) else {
            return false;
        };
        let (target, counter) = match (first, second) {
            (Instruction::Inc(Operand::Reg(a)), Instruction::Dec(Operand::Reg(c)))
            | (Instruction::Dec(Operand::Reg(c)), Instruction::Inc(Operand::Reg(a))) => (a, c),
            _ => return false,
        };
        if target == counter
            || third != Instruction::Jnz(Operand::Reg(counter), Operand::Value(-2))
            || self.registers[counter] <= 0
        {
            return false;
        }
        self.registers[target] += self.registers[counter];
        self.registers[counter] = 0;
        self.pc += 3;
        true
    }

    /// `cpy b c / inc a / dec c / jnz c -2 / dec d / jnz d -5` becomes `a += b * d; c = d = 0`
    fn try_multiply(&mut self) -> bool {
        let Some(window) = self.window(6) else {
            return false;
        };
        let [
            Instruction::Cpy(src, Operand::Reg(inner)),
            Instruction::Inc(Operand::Reg(target)),
            Instruction::Dec(Operand::Reg(inner2)),
            Instruction::Jnz(Operand::Reg(inner3), Operand::Value(-2)),
            Instruction::Dec(Operand::Reg(outer)),
            Instruction::Jnz(Operand::Reg(outer2), Operand::Value(-5)),
        ] = *window
        else {
            return false;
        };
        let distinct = target != inner && target != outer && inner != outer;
        let reads_loop_register =
            matches!(src, Operand::Reg(r) if r == inner || r == outer || r == target);
        if !distinct
            || reads_loop_register
            || inner != inner2
            || inner != inner3
            || outer != outer2
            || self.value(src) <= 0
            || self.registers[outer] <= 0
        {
            return false;
        }
        self.registers[target] += self.value(src) * self.registers[outer];
        self.registers[inner] = 0;
        self.registers[outer] = 0;
        self.pc += 6;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str) -> Machine {
        let mut machine = Machine::new(parse_program(source).unwrap());
        machine.run();
        machine
    }

    #[test]
    fn test_basic_program() {
        let machine = run("cpy 41 a\ninc a\ninc a\ndec a\njnz a 2\ndec a");
        assert_eq!(machine.register(0), 42);
    }

    #[test]
    fn test_toggle_program() {
        let machine = run("cpy 2 a\ntgl a\ntgl a\ntgl a\ncpy 1 a\ndec a\ndec a");
        assert_eq!(machine.register(0), 3);
    }

    #[test]
    fn test_add_loop_shortcut() {
        let machine = run("cpy 5 c\ncpy 3 a\ninc a\ndec c\njnz c -2");
        assert_eq!(machine.register(0), 8);
        assert_eq!(machine.register(2), 0);
    }

    #[test]
    fn test_multiply_nest_shortcut() {
        let machine = run("cpy 7 d\ncpy 6 b\ncpy b c\ninc a\ndec c\njnz c -2\ndec d\njnz d -5");
        assert_eq!(machine.register(0), 42);
        assert_eq!(machine.register(3), 0);
    }

    #[test]
    fn test_multiply_nest_reading_its_target_is_stepped() {
        // `a` doubles on every outer pass, so this is not `a += a * d`
        let machine = run("cpy 3 a\ncpy 2 d\ncpy a c\ninc a\ndec c\njnz c -2\ndec d\njnz d -5");
        assert_eq!(machine.register(0), 12);
        assert_eq!(machine.register(3), 0);
    }

    #[test]
    fn test_output_stops_on_break() {
        let program = parse_program("cpy 0 a\nout a\ninc a\njnz 1 -2").unwrap();
        let mut seen = Vec::new();
        let stopped = Machine::new(program).run_with_output(|v| {
            seen.push(v);
            if seen.len() == 4 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert!(stopped);
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_unknown_instruction_rejected() {
        assert!(parse_program("mul a b").is_err());
    }
}
