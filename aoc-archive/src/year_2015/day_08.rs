use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 8, tags = ["strings"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|l| {
                if l.len() >= 2 && l.starts_with('"') && l.ends_with('"') {
                    Ok(l)
                } else {
                    Err(ParseError::InvalidFormat(format!("not a string literal: {}", l)))
                }
            })
            .collect()
    }
}

/// Characters the literal holds once its escapes are decoded
fn decoded_len(literal: &str) -> usize {
    let inner = &literal.as_bytes()[1..literal.len() - 1];
    let mut count = 0;
    let mut i = 0;
    while i < inner.len() {
        i += match (inner[i], inner.get(i + 1)) {
            (b'\\', Some(b'x')) => 4,
            (b'\\', Some(_)) => 2,
            _ => 1,
        };
        count += 1;
    }
    count
}

/// Length of the literal after escaping it again and wrapping it in quotes
fn encoded_len(literal: &str) -> usize {
    2 + literal
        .bytes()
        .map(|b| if b == b'"' || b == b'\\' { 2 } else { 1 })
        .sum::<usize>()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let diff: usize = shared.iter().map(|l| l.len() - decoded_len(l)).sum();
        Ok(diff.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let diff: usize = shared.iter().map(|l| encoded_len(l) - l.len()).sum();
        Ok(diff.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve_all;

    const EXAMPLE: &str = r#"""
"abc"
"aaa\"aaa"
"\x27""#;

    #[test]
    fn test_lengths() {
        assert_eq!(decoded_len(r#""aaa\"aaa""#), 7);
        assert_eq!(decoded_len(r#""\x27""#), 1);
        assert_eq!(encoded_len(r#""""#), 6);
        assert_eq!(encoded_len(r#""\x27""#), 11);
    }

    #[test]
    fn test_example() {
        assert_eq!(solve_all::<Solver>(EXAMPLE), ["12", "19"]);
    }
}
