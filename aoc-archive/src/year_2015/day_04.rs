use crate::utils::hash::leading_zero_nibbles;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 4, tags = ["md5", "brute-force"], input = "ckczppom")]
pub struct Solver;

pub struct SharedData<'a> {
    key: &'a str,
    five_zeroes: Option<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let key = input.trim();
        if key.is_empty() {
            return Err(ParseError::MissingData("secret key".to_string()));
        }
        Ok(SharedData {
            key,
            five_zeroes: None,
        })
    }
}

/// Lowest number `n >= start` such that MD5(key + n) starts with `zeroes` zero hex digits
fn mine(key: &str, zeroes: u32, start: u64) -> Result<u64, SolveError> {
    let mut prefix = md5::Context::new();
    prefix.consume(key.as_bytes());

    (start..=u64::MAX)
        .find(|n| {
            let mut ctx = prefix.clone();
            ctx.consume(n.to_string().as_bytes());
            leading_zero_nibbles(&ctx.compute().0) >= zeroes
        })
        .ok_or_else(|| {
            SolveError::SolveFailed(
                format!("No long value was found that produces {} leading zeroes", zeroes).into(),
            )
        })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let n = mine(shared.key, 5, 1)?;
        shared.five_zeroes = Some(n);
        Ok(n.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Six zeroes imply five, so the search can resume from part 1
        let start = shared.five_zeroes.unwrap_or(1);
        Ok(mine(shared.key, 6, start)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_part;

    #[test]
    fn test_examples() {
        assert_eq!(solve_part::<Solver>("abcdef", 1), "609043");
        assert_eq!(solve_part::<Solver>("pqrstuv\n", 1), "1048970");
    }

    #[test]
    fn test_search_respects_start() {
        assert_eq!(mine("abcdef", 5, 609043).unwrap(), 609043);
        assert!(mine("abcdef", 5, 609044).unwrap() > 609043);
    }
}
