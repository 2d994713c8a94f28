use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use std::collections::HashMap;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 9, tags = ["permutations"])]
pub struct Solver;

pub struct SharedData {
    /// Route length of every complete path, computed once for both parts
    route_lengths: Vec<u32>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut cities: HashMap<&str, usize> = HashMap::new();
        let mut edges = Vec::new();

        for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let (pair, distance) = line
                .split_once(" = ")
                .ok_or_else(|| ParseError::InvalidFormat(line.to_string()))?;
            let (from, to) = pair
                .split_once(" to ")
                .ok_or_else(|| ParseError::InvalidFormat(line.to_string()))?;
            let distance: u32 = distance
                .parse()
                .map_err(|_| ParseError::InvalidFormat(line.to_string()))?;
            let next = cities.len();
            let from = *cities.entry(from).or_insert(next);
            let next = cities.len();
            let to = *cities.entry(to).or_insert(next);
            edges.push((from, to, distance));
        }

        if cities.is_empty() {
            return Err(ParseError::MissingData("no routes".to_string()));
        }

        let n = cities.len();
        let mut dist = vec![vec![None; n]; n];
        for (a, b, d) in edges {
            dist[a][b] = Some(d);
            dist[b][a] = Some(d);
        }

        let route_lengths = (0..n)
            .permutations(n)
            .filter_map(|route| {
                route
                    .iter()
                    .tuple_windows()
                    .map(|(&a, &b)| dist[a][b])
                    .sum::<Option<u32>>()
            })
            .collect();

        Ok(SharedData { route_lengths })
    }
}

fn no_route() -> SolveError {
    SolveError::SolveFailed("no route visits every city".into())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let shortest = shared.route_lengths.iter().min().ok_or_else(no_route)?;
        Ok(shortest.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let longest = shared.route_lengths.iter().max().ok_or_else(no_route)?;
        Ok(longest.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_all;

    #[test]
    fn test_example() {
        let input = "London to Dublin = 464\nLondon to Belfast = 518\nDublin to Belfast = 141";
        assert_eq!(solve_all::<Solver>(input), ["605", "982"]);
    }
}
