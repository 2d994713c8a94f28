use crate::utils::grid::Grid;
use crate::utils::point::Point;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2025, day = 4, tags = ["grid"])]
pub struct Solver;

/// A roll can be reached by a forklift when fewer than this many rolls surround it
const CROWDED: usize = 4;

impl AocParser for Solver {
    type SharedData<'a> = Grid<bool>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse(input, |b| match b {
            b'@' => Some(true),
            b'.' => Some(false),
            _ => None,
        })
    }
}

fn accessible(grid: &Grid<bool>) -> Vec<Point> {
    grid.iter()
        .filter(|&(_, &roll)| roll)
        .map(|(p, _)| p)
        .filter(|p| {
            p.neighbours8()
                .filter(|&n| grid.get(n).copied().unwrap_or(false))
                .count()
                < CROWDED
        })
        .collect()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(accessible(shared).len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut grid = shared.clone();
        let mut removed = 0;
        loop {
            let batch = accessible(&grid);
            if batch.is_empty() {
                break;
            }
            removed += batch.len();
            for p in batch {
                if let Some(cell) = grid.get_mut(p) {
                    *cell = false;
                }
            }
        }
        Ok(removed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_all;

    #[test]
    fn test_example() {
        let input = "\
..@@.@@@@.
@@@.@@@.@.
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.";
        assert_eq!(solve_all::<Solver>(input), ["13", "43"]);
    }
}
