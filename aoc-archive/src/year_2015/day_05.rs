use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 5, tags = ["strings"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input.lines().map(str::trim).filter(|l| !l.is_empty()).collect())
    }
}

fn is_nice(word: &str) -> bool {
    let bytes = word.as_bytes();
    let vowels = bytes.iter().filter(|b| b"aeiou".contains(b)).count();
    let has_double = bytes.windows(2).any(|w| w[0] == w[1]);
    let has_forbidden = ["ab", "cd", "pq", "xy"].iter().any(|f| word.contains(f));
    vowels >= 3 && has_double && !has_forbidden
}

fn is_nice_v2(word: &str) -> bool {
    let bytes = word.as_bytes();
    // A pair that appears again at least two positions later cannot overlap
    let repeated_pair = (0..bytes.len().saturating_sub(1))
        .any(|i| bytes[i + 2..].windows(2).any(|w| w == &bytes[i..i + 2]));
    let sandwich = bytes.windows(3).any(|w| w[0] == w[2]);
    repeated_pair && sandwich
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|w| is_nice(w)).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|w| is_nice_v2(w)).count().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_rules() {
        assert!(is_nice("ugknbfddgicrmopn"));
        assert!(is_nice("aaa"));
        assert!(!is_nice("jchzalrnumimnmhp"));
        assert!(!is_nice("haegwjzuvuyypxyu"));
        assert!(!is_nice("dvszwmarrgswjxmb"));
    }

    #[test]
    fn test_nice_v2_rules() {
        assert!(is_nice_v2("qjhvhtzxzqqjkmpb"));
        assert!(is_nice_v2("xxyxx"));
        assert!(!is_nice_v2("uurcxstgmygtbstg"));
        assert!(!is_nice_v2("ieodomkazucvgmuy"));
        assert!(!is_nice_v2("aaa"));
    }
}
