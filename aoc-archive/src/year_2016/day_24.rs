use crate::utils::grid::Grid;
use crate::utils::point::Point;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::collections::VecDeque;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 24, tags = ["bfs", "tsp", "bitmask"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Wall,
    Open,
    Target(u8),
}

/// Shortest distances between every pair of numbered locations; `None` when unreachable
pub struct SharedData {
    distances: Vec<Vec<Option<usize>>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input, |b| match b {
            b'#' => Some(Tile::Wall),
            b'.' => Some(Tile::Open),
            b'0'..=b'9' => Some(Tile::Target(b - b'0')),
            _ => None,
        })?;

        let mut targets: Vec<(u8, Point)> = grid
            .iter()
            .filter_map(|(p, t)| match t {
                Tile::Target(n) => Some((*n, p)),
                _ => None,
            })
            .collect();
        targets.sort_unstable();
        if targets.first().map(|&(n, _)| n) != Some(0) {
            return Err(ParseError::MissingData("the map has no location 0".to_string()));
        }

        let distances = targets
            .iter()
            .map(|&(_, from)| {
                let reach = bfs(&grid, from);
                targets.iter().map(|&(_, to)| reach.get(to).copied().flatten()).collect()
            })
            .collect();
        Ok(SharedData { distances })
    }
}

fn bfs(grid: &Grid<Tile>, start: Point) -> Grid<Option<usize>> {
    let mut dist = Grid::new(grid.width(), grid.height(), None);
    if let Some(cell) = dist.get_mut(start) {
        *cell = Some(0);
    }
    let mut queue = VecDeque::from([(start, 0)]);
    while let Some((p, d)) = queue.pop_front() {
        for next in p.neighbours4() {
            let open = grid.get(next).is_some_and(|&t| t != Tile::Wall);
            if let Some(cell) = dist.get_mut(next)
                && open
                && cell.is_none()
            {
                *cell = Some(d + 1);
                queue.push_back((next, d + 1));
            }
        }
    }
    dist
}

/// Held-Karp over visited-set bitmasks, starting at location 0
pub fn shortest_tour(distances: &[Vec<Option<usize>>], return_home: bool) -> Option<usize> {
    let n = distances.len();
    let full = (1usize << n) - 1;
    let mut best = vec![vec![None::<usize>; n]; 1 << n];
    best[1][0] = Some(0);

    for mask in 1..=full {
        for last in 0..n {
            let Some(cost) = best[mask][last] else {
                continue;
            };
            for next in (0..n).filter(|&k| mask & (1 << k) == 0) {
                let Some(step) = distances[last][next] else {
                    continue;
                };
                let slot = &mut best[mask | 1 << next][next];
                if slot.is_none_or(|c| cost + step < c) {
                    *slot = Some(cost + step);
                }
            }
        }
    }

    (0..n)
        .filter_map(|last| {
            let cost = best[full][last]?;
            if return_home {
                Some(cost + distances[last][0]?)
            } else {
                Some(cost)
            }
        })
        .min()
}

fn answer(found: Option<usize>) -> Result<String, SolveError> {
    found
        .map(|n| n.to_string())
        .ok_or_else(|| SolveError::SolveFailed("some locations cannot be reached".into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        answer(shortest_tour(&shared.distances, false))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        answer(shortest_tour(&shared.distances, true))
    }
}
