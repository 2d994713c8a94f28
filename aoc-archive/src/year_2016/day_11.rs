use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use regex::Regex;
use std::collections::{HashMap, HashSet, VecDeque};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(
    year = 2016,
    day = 11,
    tags = ["bfs", "search"],
    input = "The first floor contains a promethium generator and a promethium-compatible microchip.
The second floor contains a cobalt generator, a curium generator, a ruthenium generator, and a plutonium generator.
The third floor contains a cobalt-compatible microchip, a curium-compatible microchip, a ruthenium-compatible microchip, and a plutonium-compatible microchip.
The fourth floor contains nothing relevant."
)]
pub struct Solver;

const FLOORS: u8 = 4;

/// Elevator floor plus `(generator floor, microchip floor)` per element.
///
/// Pairs are kept sorted: elements are interchangeable, so states that differ
/// only by naming are the same state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Facility {
    elevator: u8,
    pairs: Vec<(u8, u8)>,
}

impl Facility {
    fn new(elevator: u8, mut pairs: Vec<(u8, u8)>) -> Self {
        pairs.sort_unstable();
        Self { elevator, pairs }
    }

    /// No microchip shares a floor with a foreign generator unless its own is there too
    fn is_safe(&self) -> bool {
        self.pairs.iter().all(|&(generator, chip)| {
            generator == chip || !self.pairs.iter().any(|&(g, _)| g == chip)
        })
    }

    fn is_done(&self) -> bool {
        self.pairs.iter().all(|&(g, m)| g == FLOORS - 1 && m == FLOORS - 1)
    }

    /// Item slots on the elevator's floor: `2 * pair` for generators, `2 * pair + 1` for chips
    fn movable(&self) -> Vec<usize> {
        self.pairs
            .iter()
            .enumerate()
            .flat_map(|(i, &(g, m))| [(2 * i, g), (2 * i + 1, m)])
            .filter(|&(_, floor)| floor == self.elevator)
            .map(|(slot, _)| slot)
            .collect()
    }

    fn next_states(&self) -> Vec<Facility> {
        let items = self.movable();
        let loads = items
            .iter()
            .map(|&i| vec![i])
            .chain(items.iter().copied().tuple_combinations().map(|(a, b)| vec![a, b]));
        let floors = [self.elevator.checked_sub(1), Some(self.elevator + 1).filter(|&f| f < FLOORS)];

        loads
            .cartesian_product(floors.into_iter().flatten())
            .map(|(load, floor)| {
                let mut pairs = self.pairs.clone();
                for slot in load {
                    let pair = &mut pairs[slot / 2];
                    if slot % 2 == 0 {
                        pair.0 = floor;
                    } else {
                        pair.1 = floor;
                    }
                }
                Facility::new(floor, pairs)
            })
            .filter(Facility::is_safe)
            .collect()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Facility;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let item = Regex::new(r"(\w+)(-compatible microchip| generator)").map_err(|e| ParseError::Other(e.to_string()))?;
        let mut generators: HashMap<&str, u8> = HashMap::new();
        let mut chips: HashMap<&str, u8> = HashMap::new();

        let lines: Vec<&str> = input.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if lines.len() > FLOORS as usize {
            return Err(ParseError::InvalidFormat(format!("expected at most {} floors", FLOORS)));
        }
        for (floor, line) in lines.into_iter().enumerate() {
            for caps in item.captures_iter(line) {
                let (Some(element), Some(kind)) = (caps.get(1), caps.get(2)) else {
                    continue;
                };
                let map = if kind.as_str() == " generator" { &mut generators } else { &mut chips };
                map.insert(element.as_str(), floor as u8);
            }
        }

        let pairs = generators
            .iter()
            .map(|(element, &g)| {
                chips
                    .get(element)
                    .map(|&m| (g, m))
                    .ok_or_else(|| ParseError::MissingData(format!("no microchip for {}", element)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if pairs.len() != chips.len() {
            return Err(ParseError::MissingData("a microchip has no generator".to_string()));
        }
        Ok(Facility::new(0, pairs))
    }
}

/// Fewest elevator trips to bring everything to the top floor
pub fn fewest_steps(start: &Facility) -> Option<usize> {
    let mut queue = VecDeque::from([(start.clone(), 0)]);
    let mut seen = HashSet::from([start.clone()]);

    while let Some((facility, steps)) = queue.pop_front() {
        if facility.is_done() {
            return Some(steps);
        }
        for next in facility.next_states() {
            if seen.insert(next.clone()) {
                queue.push_back((next, steps + 1));
            }
        }
    }
    None
}

fn answer(found: Option<usize>) -> Result<String, SolveError> {
    found
        .map(|n| n.to_string())
        .ok_or_else(|| SolveError::SolveFailed("everything cannot reach the top floor".into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        answer(fewest_steps(shared))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Elerium and dilithium pairs turn up on the first floor
        let mut pairs = shared.pairs.clone();
        pairs.extend([(0, 0), (0, 0)]);
        answer(fewest_steps(&Facility::new(shared.elevator, pairs)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;

    const EXAMPLE: &str = "\
The first floor contains a hydrogen-compatible microchip and a lithium-compatible microchip.
The second floor contains a hydrogen generator.
The third floor contains a lithium generator.
The fourth floor contains nothing relevant.";

    #[test]
    fn test_example() {
        assert_eq!(solve_part::<Solver>(EXAMPLE, 1), "11");
    }

    #[test]
    fn test_parse_normalises_pairs() {
        let facility = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(facility, Facility::new(0, vec![(2, 0), (1, 0)]));
        assert_eq!(facility.pairs, vec![(1, 0), (2, 0)]);
    }

    #[test]
    fn test_fried_chip_is_unsafe() {
        assert!(!Facility::new(0, vec![(0, 1), (1, 1)]).is_safe());
        assert!(Facility::new(0, vec![(1, 1), (0, 0)]).is_safe());
    }
}
