//! Memoizing evaluator for values that depend on other values
//!
//! A [`DpProblem`] names the dependencies of an index and combines their
//! values; [`DpCache`] resolves dependencies recursively and computes each
//! index at most once.
//!
//! **The dependency graph must be acyclic.** A cycle recurses until the stack
//! overflows.
//!
//! # Example
//!
//! ```rust
//! use aoc_archive::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
//!
//! /// Number of ways to climb `n` stairs taking 1 or 2 at a time
//! struct Stairs;
//!
//! impl DpProblem<u32, u64> for Stairs {
//!     fn deps(&self, n: &u32) -> Vec<u32> {
//!         if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
//!     }
//!     fn compute(&self, _n: &u32, deps: Vec<u64>) -> u64 {
//!         if deps.is_empty() { 1 } else { deps[0] + deps[1] }
//!     }
//! }
//!
//! let cache = DpCache::with_problem(HashMapBackend::new(), Stairs);
//! assert_eq!(cache.get(&10), 89);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend};
pub use cache::DpCache;
pub use problem::{ClosureProblem, DpProblem};

#[cfg(test)]
mod tests;
