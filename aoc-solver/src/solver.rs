//! Parser and solver traits

use crate::error::{ParseError, SolveError};

/// Parses raw puzzle input into the data every part works on.
///
/// `SharedData` may borrow from the input (`&'a str`, `Vec<&'a str>`) or own
/// it outright. Parts receive it mutably, so one part may leave results behind
/// for the next one.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// assert_eq!(Depths::parse("1\n2").unwrap(), vec![1, 2]);
/// ```
pub trait AocParser {
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// The const generic keeps each part in its own impl block, so a missing part
/// is a compile error in the derived [`Solver`] rather than a runtime surprise.
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete puzzle: parsing plus a fixed number of parts.
///
/// Normally derived with `#[derive(AocSolver)]`, which dispatches each part to
/// the matching [`PartSolver`] impl.
pub trait Solver: AocParser {
    /// Number of parts this puzzle has
    const PARTS: u8;

    /// Solve one part
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - No solver exists for this part
    /// * `Err(SolveError::SolveFailed)` - The puzzle logic failed
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`], but rejects parts outside `1..=PARTS` first.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
