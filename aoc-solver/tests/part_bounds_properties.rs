//! Property tests for part range validation

use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Puzzle with a configurable number of parts that echoes the part it was asked for
struct EchoPuzzle<const N: u8>;

impl<const N: u8> AocParser for EchoPuzzle<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for EchoPuzzle<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{}", part))
    }
}

fn checked(parts: u8, part: u8) -> Result<String, SolveError> {
    match parts {
        1 => EchoPuzzle::<1>::solve_part_checked_range(&mut (), part),
        2 => EchoPuzzle::<2>::solve_part_checked_range(&mut (), part),
        _ => EchoPuzzle::<3>::solve_part_checked_range(&mut (), part),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Parts outside `1..=PARTS` are rejected with the offending part number
    #[test]
    fn prop_out_of_range_rejected(parts in 1u8..=3, part in 0u8..=255) {
        let result = checked(parts, part);

        if part == 0 || part > parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "Expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{}", part));
        }
    }

    /// In range, the checked call gives exactly what `solve_part` gives
    #[test]
    fn prop_valid_range_delegates(part in 1u8..=2) {
        let checked = EchoPuzzle::<2>::solve_part_checked_range(&mut (), part).unwrap();
        let direct = EchoPuzzle::<2>::solve_part(&mut (), part).unwrap();
        prop_assert_eq!(checked, direct);
    }
}

#[test]
fn test_part_zero_rejected() {
    let result = EchoPuzzle::<2>::solve_part_checked_range(&mut (), 0);
    assert!(matches!(result, Err(SolveError::PartOutOfRange(0))));
}

#[test]
fn test_single_part_puzzle_rejects_part_two() {
    let result = EchoPuzzle::<1>::solve_part_checked_range(&mut (), 2);
    assert!(matches!(result, Err(SolveError::PartOutOfRange(2))));
}
