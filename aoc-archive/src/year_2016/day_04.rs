use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use std::cmp::Reverse;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 4, tags = ["strings", "cipher"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room<'a> {
    name: &'a str,
    sector: u32,
    checksum: &'a str,
}

impl Room<'_> {
    /// Five most common letters, ties broken alphabetically
    fn expected_checksum(&self) -> String {
        self.name
            .chars()
            .filter(char::is_ascii_lowercase)
            .counts()
            .into_iter()
            .sorted_by_key(|&(c, n)| (Reverse(n), c))
            .take(5)
            .map(|(c, _)| c)
            .collect()
    }

    fn is_real(&self) -> bool {
        self.expected_checksum() == self.checksum
    }

    fn decrypt(&self) -> String {
        let shift = (self.sector % 26) as u8;
        self.name
            .bytes()
            .map(|b| match b {
                b'-' => ' ',
                b => ((b - b'a' + shift) % 26 + b'a') as char,
            })
            .collect()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Room<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|line| {
                let bad = || ParseError::InvalidFormat(line.to_string());
                let (rest, checksum) = line
                    .strip_suffix(']')
                    .and_then(|l| l.split_once('['))
                    .ok_or_else(bad)?;
                let (name, sector) = rest.rsplit_once('-').ok_or_else(bad)?;
                if !name.bytes().all(|b| b == b'-' || b.is_ascii_lowercase()) {
                    return Err(bad());
                }
                Ok(Room {
                    name,
                    sector: sector.parse().map_err(|_| bad())?,
                    checksum,
                })
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared.iter().filter(|r| r.is_real()).map(|r| r.sector).sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .filter(|r| r.is_real())
            .find(|r| r.decrypt().contains("northpole"))
            .map(|r| r.sector.to_string())
            .ok_or_else(|| SolveError::SolveFailed("no room stores North Pole objects".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;

    #[test]
    fn test_checksums() {
        let input = "\
aaaaa-bbb-z-y-x-123[abxyz]
a-b-c-d-e-f-g-h-987[abcde]
not-a-real-room-404[oarel]
totally-real-room-200[decoy]";
        assert_eq!(solve_part::<Solver>(input, 1), "1514");
    }

    #[test]
    fn test_decrypt() {
        let rooms = Solver::parse("qzmt-zixmtkozy-ivhz-343[zimth]").unwrap();
        assert_eq!(rooms[0].decrypt(), "very encrypted name");
    }
}
