use crate::utils::grid::Grid;
use crate::utils::point::Point;
use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;
use std::collections::{HashSet, VecDeque};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 22, tags = ["grid", "bfs"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Node {
    size: u32,
    used: u32,
}

impl Node {
    fn avail(&self) -> u32 {
        self.size - self.used
    }
}

fn parse_cluster(input: &str) -> anyhow::Result<Grid<Node>> {
    let re = Regex::new(r"node-x(\d+)-y(\d+)\s+(\d+)T\s+(\d+)T")?;
    let nodes = input
        .lines()
        .filter(|l| l.starts_with("/dev/grid"))
        .map(|line| -> anyhow::Result<(Point, Node)> {
            let caps = re.captures(line).ok_or_else(|| anyhow!("unrecognised node '{}'", line))?;
            let num = |i: usize| caps[i].parse::<u32>().with_context(|| format!("in '{}'", line));
            let node = Node {
                size: num(3)?,
                used: num(4)?,
            };
            anyhow::ensure!(node.used <= node.size, "node uses more than its size: '{}'", line);
            Ok((Point::new(num(1)?.into(), num(2)?.into()), node))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let width = nodes.iter().map(|(p, _)| p.x + 1).max().ok_or_else(|| anyhow!("no nodes"))?;
    let height = nodes.iter().map(|(p, _)| p.y + 1).max().unwrap_or(0);
    let mut grid = Grid::new(width as usize, height as usize, Node::default());
    for (p, node) in nodes {
        if let Some(cell) = grid.get_mut(p) {
            *cell = node;
        }
    }
    Ok(grid)
}

impl AocParser for Solver {
    type SharedData<'a> = Grid<Node>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_cluster(input).map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

/// Pairs (A, B), A != B, where A holds data that fits in B's free space
fn viable_pairs(grid: &Grid<Node>) -> usize {
    let nodes: Vec<(Point, &Node)> = grid.iter().collect();
    nodes
        .iter()
        .filter(|(_, a)| a.used > 0)
        .map(|(pa, a)| {
            nodes
                .iter()
                .filter(|(pb, b)| pa != pb && a.used <= b.avail())
                .count()
        })
        .sum()
}

/// Walk the empty node next to the goal (top-right), then shuffle the goal left along row 0.
///
/// Each further step left costs five moves: the goal steps once and the hole loops round it.
fn fewest_moves(grid: &Grid<Node>) -> anyhow::Result<usize> {
    let (hole, empty) = grid
        .iter()
        .find(|(_, n)| n.used == 0)
        .ok_or_else(|| anyhow!("no empty node"))?;
    let goal = Point::new(grid.width() as i64 - 1, 0);
    if goal.x == 0 {
        return Ok(0);
    }
    let beside_goal = goal + Point::LEFT;

    let mut seen = HashSet::from([hole]);
    let mut queue = VecDeque::from([(hole, 0)]);
    while let Some((p, steps)) = queue.pop_front() {
        if p == beside_goal {
            return Ok(steps + 1 + 5 * (goal.x as usize - 1));
        }
        for next in p.neighbours4() {
            let movable = grid.get(next).is_some_and(|n| n.used <= empty.size);
            if movable && next != goal && seen.insert(next) {
                queue.push_back((next, steps + 1));
            }
        }
    }
    Err(anyhow!("the empty node cannot reach the goal data"))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(viable_pairs(shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        fewest_moves(shared)
            .map(|n| n.to_string())
            .map_err(|e| SolveError::SolveFailed(e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_all;

    const EXAMPLE: &str = "\
root@ebhq-gridcenter# df -h
Filesystem            Size  Used  Avail  Use%
/dev/grid/node-x0-y0   10T    8T     2T   80%
/dev/grid/node-x0-y1   11T    6T     5T   54%
/dev/grid/node-x0-y2   32T   28T     4T   87%
/dev/grid/node-x1-y0    9T    7T     2T   77%
/dev/grid/node-x1-y1    8T    0T     8T    0%
/dev/grid/node-x1-y2   11T    7T     4T   63%
/dev/grid/node-x2-y0   10T    6T     4T   60%
/dev/grid/node-x2-y1    9T    8T     1T   88%
/dev/grid/node-x2-y2    9T    6T     3T   66%";

    #[test]
    fn test_example() {
        assert_eq!(solve_all::<Solver>(EXAMPLE), ["7", "7"]);
    }
}
