use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 6, tags = ["grid", "regex"])]
pub struct Solver;

const SIDE: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    On,
    Off,
    Toggle,
}

#[derive(Debug, Clone, Copy)]
pub struct Step {
    action: Action,
    from: (usize, usize),
    to: (usize, usize),
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Step>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let re = Regex::new(r"^(turn on|turn off|toggle) (\d+),(\d+) through (\d+),(\d+)$")
            .map_err(|e| ParseError::Other(e.to_string()))?;

        input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|line| {
                let caps = re
                    .captures(line)
                    .ok_or_else(|| ParseError::InvalidFormat(line.to_string()))?;
                let num = |i: usize| -> Result<usize, ParseError> {
                    let n: usize = caps[i]
                        .parse()
                        .map_err(|_| ParseError::InvalidFormat(line.to_string()))?;
                    if n >= SIDE {
                        return Err(ParseError::InvalidFormat(format!("{} is off the grid", n)));
                    }
                    Ok(n)
                };
                let action = match &caps[1] {
                    "turn on" => Action::On,
                    "turn off" => Action::Off,
                    _ => Action::Toggle,
                };
                Ok(Step {
                    action,
                    from: (num(2)?, num(3)?),
                    to: (num(4)?, num(5)?),
                })
            })
            .collect()
    }
}

/// Apply every step to a 1000x1000 grid with `update`, then sum the cells
fn run_lights(steps: &[Step], update: impl Fn(Action, u32) -> u32) -> u64 {
    let mut grid = vec![0u32; SIDE * SIDE];
    for step in steps {
        for y in step.from.1.min(step.to.1)..=step.from.1.max(step.to.1) {
            let row = &mut grid[y * SIDE..(y + 1) * SIDE];
            for cell in &mut row[step.from.0.min(step.to.0)..=step.from.0.max(step.to.0)] {
                *cell = update(step.action, *cell);
            }
        }
    }
    grid.iter().map(|&c| c as u64).sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let lit = run_lights(shared, |action, cell| match action {
            Action::On => 1,
            Action::Off => 0,
            Action::Toggle => 1 - cell,
        });
        Ok(lit.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let brightness = run_lights(shared, |action, cell| match action {
            Action::On => cell + 1,
            Action::Off => cell.saturating_sub(1),
            Action::Toggle => cell + 2,
        });
        Ok(brightness.to_string())
    }
}
