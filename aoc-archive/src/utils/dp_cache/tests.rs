//! Tests for the DP cache module.

use std::cell::Cell;
use std::rc::Rc;

use super::*;

/// Lattice paths from (0, 0) to (r, c) moving down or right
struct GridPaths;

impl DpProblem<(u32, u32), u64> for GridPaths {
    fn deps(&self, &(r, c): &(u32, u32)) -> Vec<(u32, u32)> {
        match (r, c) {
            (0, 0) => vec![],
            (0, c) => vec![(0, c - 1)],
            (r, 0) => vec![(r - 1, 0)],
            (r, c) => vec![(r - 1, c), (r, c - 1)],
        }
    }

    fn compute(&self, _index: &(u32, u32), deps: Vec<u64>) -> u64 {
        if deps.is_empty() { 1 } else { deps.iter().sum() }
    }
}

#[test]
fn test_grid_paths() {
    let cache = DpCache::with_problem(HashMapBackend::new(), GridPaths);
    assert_eq!(cache.get(&(4, 4)), 70);
    assert_eq!(cache.get(&(16, 16)), 601_080_390);
}

#[test]
fn test_diamond_computes_shared_dependency_once() {
    struct Diamond {
        count: Rc<Cell<u32>>,
    }

    impl DpProblem<u8, i32> for Diamond {
        fn deps(&self, n: &u8) -> Vec<u8> {
            match *n {
                0 => vec![1, 2],
                1 | 2 => vec![3],
                _ => vec![],
            }
        }

        fn compute(&self, n: &u8, deps: Vec<i32>) -> i32 {
            self.count.set(self.count.get() + 1);
            match *n {
                0 => deps[0] + deps[1],
                1 => deps[0] * 2,
                2 => deps[0] * 3,
                _ => 10,
            }
        }
    }

    let count = Rc::new(Cell::new(0));
    let cache = DpCache::with_problem(
        HashMapBackend::new(),
        Diamond {
            count: Rc::clone(&count),
        },
    );

    assert_eq!(cache.get(&0), 50);
    assert_eq!(count.get(), 4);

    // Cached: no recomputation
    assert_eq!(cache.get(&1), 20);
    assert_eq!(count.get(), 4);
    assert_eq!(cache.into_backend().len(), 4);
}

#[test]
fn test_closure_problem_with_string_keys() {
    let cache = DpCache::new(
        HashMapBackend::new(),
        |name: &String| match name.as_str() {
            "total" => vec!["left".to_string(), "right".to_string()],
            _ => vec![],
        },
        |name: &String, deps: Vec<u32>| match name.as_str() {
            "left" => 3,
            "right" => 4,
            _ => deps.iter().sum(),
        },
    );

    assert_eq!(cache.get(&"total".to_string()), 7);
}
