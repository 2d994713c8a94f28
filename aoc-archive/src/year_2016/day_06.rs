use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 6, tags = ["strings", "frequency"])]
pub struct Solver;

/// Letter counts per message column, sorted most common first
pub struct SharedData {
    columns: Vec<Vec<(u8, usize)>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let messages: Vec<&[u8]> = input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::as_bytes)
            .collect();
        let width = messages
            .first()
            .map(|m| m.len())
            .ok_or_else(|| ParseError::MissingData("no messages".to_string()))?;
        if messages.iter().any(|m| m.len() != width) {
            return Err(ParseError::InvalidFormat("messages differ in length".to_string()));
        }

        let columns = (0..width)
            .map(|col| {
                messages
                    .iter()
                    .map(|m| m[col])
                    .counts()
                    .into_iter()
                    .sorted_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)))
                    .collect()
            })
            .collect();
        Ok(SharedData { columns })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .columns
            .iter()
            .filter_map(|c| c.first())
            .map(|&(b, _)| b as char)
            .collect())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .columns
            .iter()
            .filter_map(|c| c.last())
            .map(|&(b, _)| b as char)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_all;

    #[test]
    fn test_example() {
        let input = "\
eedadn
drvtee
eandsr
raavrd
atevrs
tsrnev
sdttsa
rasrtv
nssdts
ntnada
svetve
tesnvt
vntsnd
vrdear
dvrsen
enarar";
        assert_eq!(solve_all::<Solver>(input), ["easter", "advent"]);
    }
}
