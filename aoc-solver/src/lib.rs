//! Puzzle framework for the Advent of Code archive
//!
//! Every archived puzzle follows the same pipeline: read the input, parse it once,
//! solve each part against the parsed data, then report the answers. This crate
//! owns the middle of that pipeline.
//!
//! # Overview
//!
//! - [`AocParser`] turns raw input into a puzzle-specific `SharedData`
//! - [`PartSolver<N>`] solves part `N` against that data
//! - [`Solver`] ties the parts together (usually derived with [`AocSolver`])
//! - [`SolverPlugin`] plus [`AutoRegisterSolver`] make a puzzle discoverable
//! - [`SolverRegistryBuilder`] collects plugins into a [`SolverRegistry`]
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Floors;
//!
//! impl AocParser for Floors {
//!     type SharedData<'a> = &'a str;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         Ok(input.trim())
//!     }
//! }
//!
//! impl PartSolver<1> for Floors {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         let up = shared.matches('(').count() as i64;
//!         let down = shared.matches(')').count() as i64;
//!         Ok((up - down).to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Floors {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.len().to_string())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register_solver(&Floors, 2015, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2015, 1, "(()(()(").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "3");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    BASE_YEAR, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, RegisterableSolver, SolverFactory,
    SolverFactoryStorage, SolverPlugin, SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Used by the derive macros
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
