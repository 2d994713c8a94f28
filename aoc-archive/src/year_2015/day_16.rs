use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::cmp::Ordering;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 16, tags = ["matching"])]
pub struct Solver;

/// What the MFCSAM read off the gift
const TICKER_TAPE: [(&str, u32); 10] = [
    ("children", 3),
    ("cats", 7),
    ("samoyeds", 2),
    ("pomeranians", 3),
    ("akitas", 0),
    ("vizslas", 0),
    ("goldfish", 5),
    ("trees", 3),
    ("cars", 2),
    ("perfumes", 1),
];

pub struct Sue<'a> {
    number: u32,
    things: Vec<(&'a str, u32)>,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Sue<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|line| {
                let bad = || ParseError::InvalidFormat(line.to_string());
                let (name, things) = line.split_once(": ").ok_or_else(bad)?;
                let number = name
                    .strip_prefix("Sue ")
                    .and_then(|n| n.parse().ok())
                    .ok_or_else(bad)?;
                let things = things
                    .split(", ")
                    .map(|pair| {
                        let (key, value) = pair.split_once(": ").ok_or_else(bad)?;
                        Ok((key, value.trim().parse().map_err(|_| bad())?))
                    })
                    .collect::<Result<_, ParseError>>()?;
                Ok(Sue { number, things })
            })
            .collect()
    }
}

fn find_sue(sues: &[Sue<'_>], matches: impl Fn(&str, u32, u32) -> bool) -> Result<String, SolveError> {
    sues.iter()
        .find(|sue| {
            sue.things.iter().all(|&(key, remembered)| {
                TICKER_TAPE
                    .iter()
                    .find(|(k, _)| *k == key)
                    .is_some_and(|&(_, reading)| matches(key, remembered, reading))
            })
        })
        .map(|sue| sue.number.to_string())
        .ok_or_else(|| SolveError::SolveFailed("no Sue matches the readings".into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        find_sue(shared, |_, remembered, reading| remembered == reading)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        find_sue(shared, |key, remembered, reading| {
            let expected = match key {
                "cats" | "trees" => Ordering::Greater,
                "pomeranians" | "goldfish" => Ordering::Less,
                _ => Ordering::Equal,
            };
            remembered.cmp(&reading) == expected
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_all;

    #[test]
    fn test_exact_and_ranged_readings() {
        let input = "\
Sue 1: cats: 7, trees: 3, cars: 2
Sue 2: cats: 8, trees: 4, goldfish: 2
Sue 3: akitas: 1, perfumes: 1, vizslas: 0";
        assert_eq!(solve_all::<Solver>(input), ["1", "2"]);
    }

    #[test]
    fn test_no_match() {
        let mut sues = Solver::parse("Sue 1: cars: 9").unwrap();
        assert!(<Solver as PartSolver<1>>::solve(&mut sues).is_err());
    }
}
