use crate::utils::grid::Grid;
use crate::utils::point::Point;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 18, tags = ["grid", "cellular-automaton"])]
pub struct Solver;

const STEPS: usize = 100;

impl AocParser for Solver {
    type SharedData<'a> = Grid<bool>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse(input, |b| match b {
            b'#' => Some(true),
            b'.' => Some(false),
            _ => None,
        })
    }
}

fn corners(grid: &Grid<bool>) -> [Point; 4] {
    let (w, h) = (grid.width() as i64 - 1, grid.height() as i64 - 1);
    [Point::new(0, 0), Point::new(w, 0), Point::new(0, h), Point::new(w, h)]
}

fn light_corners(grid: &mut Grid<bool>) {
    for corner in corners(grid) {
        if let Some(cell) = grid.get_mut(corner) {
            *cell = true;
        }
    }
}

fn step(grid: &Grid<bool>) -> Grid<bool> {
    let mut next = grid.clone();
    for (p, &on) in grid.iter() {
        let lit = p
            .neighbours8()
            .filter(|&n| grid.get(n).copied().unwrap_or(false))
            .count();
        if let Some(cell) = next.get_mut(p) {
            *cell = matches!((on, lit), (true, 2) | (_, 3));
        }
    }
    next
}

/// Lights on after `steps` generations, optionally with the four corners stuck on
pub fn animate(grid: &Grid<bool>, steps: usize, stuck_corners: bool) -> usize {
    let mut grid = grid.clone();
    if stuck_corners {
        light_corners(&mut grid);
    }
    for _ in 0..steps {
        grid = step(&grid);
        if stuck_corners {
            light_corners(&mut grid);
        }
    }
    grid.count(|&on| on)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(animate(shared, STEPS, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(animate(shared, STEPS, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
.#.#.#
...##.
#....#
..#...
#.#..#
####..";

    #[test]
    fn test_example() {
        let grid = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(animate(&grid, 4, false), 4);
        assert_eq!(animate(&grid, 5, true), 17);
    }
}
