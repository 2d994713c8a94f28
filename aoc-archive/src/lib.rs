//! Archived Advent of Code solutions
//!
//! One module per puzzle, grouped by year. Every puzzle derives `AocSolver`
//! and `AutoRegisterSolver`, so linking this crate is enough for the runner
//! to find it.

pub mod utils;
pub mod year_2015;
pub mod year_2016;
pub mod year_2025;
