//! Helpers shared between puzzles

pub mod assembunny;
pub mod dp_cache;
pub mod grid;
pub mod hash;
pub mod math;
pub mod point;

#[cfg(test)]
pub(crate) mod testing;
