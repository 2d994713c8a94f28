use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 7, tags = ["strings"])]
pub struct Solver;

/// An address split into the parts outside and inside square brackets
#[derive(Debug, Default)]
pub struct Address<'a> {
    supernets: Vec<&'a [u8]>,
    hypernets: Vec<&'a [u8]>,
}

fn has_abba(part: &[u8]) -> bool {
    part.windows(4)
        .any(|w| w[0] != w[1] && w[0] == w[3] && w[1] == w[2])
}

fn abas(part: &[u8]) -> impl Iterator<Item = (u8, u8)> + '_ {
    part.windows(3)
        .filter(|w| w[0] != w[1] && w[0] == w[2])
        .map(|w| (w[0], w[1]))
}

impl Address<'_> {
    pub fn supports_tls(&self) -> bool {
        self.supernets.iter().any(|p| has_abba(p)) && !self.hypernets.iter().any(|p| has_abba(p))
    }

    pub fn supports_ssl(&self) -> bool {
        self.supernets.iter().flat_map(|p| abas(p)).any(|(a, b)| {
            self.hypernets
                .iter()
                .any(|h| h.windows(3).any(|w| w == [b, a, b]))
        })
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Address<'a>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|line| {
                let mut address = Address::default();
                let mut inside = false;
                for part in line.split(['[', ']']) {
                    let bucket = if inside { &mut address.hypernets } else { &mut address.supernets };
                    bucket.push(part.as_bytes());
                    inside = !inside;
                }
                if !inside {
                    return Err(ParseError::InvalidFormat(format!("unbalanced brackets in '{}'", line)));
                }
                Ok(address)
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|a| a.supports_tls()).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|a| a.supports_ssl()).count().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;

    #[test]
    fn test_tls() {
        let input = "abba[mnop]qrst\nabcd[bddb]xyyx\naaaa[qwer]tyui\nioxxoj[asdfgh]zxcvbn";
        assert_eq!(solve_part::<Solver>(input, 1), "2");
    }

    #[test]
    fn test_ssl() {
        let input = "aba[bab]xyz\nxyx[xyx]xyx\naaa[kek]eke\nzazbz[bzb]cdb";
        assert_eq!(solve_part::<Solver>(input, 2), "3");
    }
}
