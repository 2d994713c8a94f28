//! Error types for the CLI

use thiserror::Error;

/// Errors that abort the whole run
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Solver error: {0}")]
    Solver(#[from] aoc_solver::SolverError),

    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of a single puzzle; reported and skipped
#[derive(Error, Debug)]
pub enum RunError {
    #[error("no input file at {path} and no embedded input")]
    MissingInput { path: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Solver(#[from] aoc_solver::SolverError),

    #[error("panicked: {0}")]
    Panicked(String),
}
