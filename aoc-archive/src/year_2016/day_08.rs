use crate::utils::math::rotate_right;
use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 8, tags = ["simulation", "display"])]
pub struct Solver;

const WIDTH: usize = 50;
const HEIGHT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Rect { width: usize, height: usize },
    RotateRow { row: usize, by: usize },
    RotateColumn { column: usize, by: usize },
}

fn parse_operation(line: &str) -> anyhow::Result<Operation> {
    let num = |s: &str| s.parse::<usize>().with_context(|| format!("bad number '{}'", s));
    if let Some(size) = line.strip_prefix("rect ") {
        let (w, h) = size.split_once('x').ok_or_else(|| anyhow!("expected WxH"))?;
        return Ok(Operation::Rect {
            width: num(w)?,
            height: num(h)?,
        });
    }
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens[..] {
        ["rotate", "row", target, "by", by] => Ok(Operation::RotateRow {
            row: num(target.strip_prefix("y=").ok_or_else(|| anyhow!("expected y="))?)?,
            by: num(by)?,
        }),
        ["rotate", "column", target, "by", by] => Ok(Operation::RotateColumn {
            column: num(target.strip_prefix("x=").ok_or_else(|| anyhow!("expected x="))?)?,
            by: num(by)?,
        }),
        _ => bail!("unknown operation"),
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Screen;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let operations = input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|line| parse_operation(line).with_context(|| format!("in '{}'", line)))
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))?;

        let mut screen = Screen::new(WIDTH, HEIGHT);
        for op in operations {
            screen.apply(op).map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))?;
        }
        Ok(screen)
    }
}

/// Pixel grid, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    rows: Vec<Vec<bool>>,
}

impl Screen {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            rows: vec![vec![false; width]; height],
        }
    }

    fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn apply(&mut self, op: Operation) -> anyhow::Result<()> {
        let (width, height) = (self.width(), self.rows.len());
        match op {
            Operation::Rect { width: w, height: h } => {
                if w > width || h > height {
                    bail!("rect {}x{} does not fit the screen", w, h);
                }
                for row in &mut self.rows[..h] {
                    row[..w].fill(true);
                }
            }
            Operation::RotateRow { row, by } => {
                let row = self.rows.get_mut(row).ok_or_else(|| anyhow!("row {} is off screen", row))?;
                rotate_right(row, by);
            }
            Operation::RotateColumn { column, by } => {
                if column >= width {
                    bail!("column {} is off screen", column);
                }
                let mut pixels: Vec<bool> = self.rows.iter().map(|r| r[column]).collect();
                rotate_right(&mut pixels, by);
                for (row, pixel) in self.rows.iter_mut().zip(pixels) {
                    row[column] = pixel;
                }
            }
        }
        Ok(())
    }

    pub fn lit(&self) -> usize {
        self.rows.iter().flatten().filter(|&&p| p).count()
    }

    /// `#` for lit pixels, `.` for dark, one line per row
    pub fn render(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.iter().map(|&p| if p { '#' } else { '.' }).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.lit().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(format!("\n{}", shared.render()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example() {
        let mut screen = Screen::new(7, 3);
        for line in ["rect 3x2", "rotate column x=1 by 1", "rotate row y=0 by 4", "rotate column x=1 by 1"] {
            screen.apply(parse_operation(line).unwrap()).unwrap();
        }
        assert_eq!(screen.render(), ".#..#.#\n#.#....\n.#.....");
        assert_eq!(screen.lit(), 6);
    }

    #[test]
    fn test_oversized_rect_rejected() {
        assert!(matches!(Solver::parse("rect 51x1"), Err(ParseError::InvalidFormat(_))));
    }
}
