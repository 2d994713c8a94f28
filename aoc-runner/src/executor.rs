//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::RunError;
use crate::inputs::InputStore;
use aoc_solver::{DynSolver, SolverError, SolverRegistry};
use chrono::TimeDelta;
use std::any::Any;
use std::ops::RangeInclusive;
use std::panic::{self, AssertUnwindSafe};

/// Work item representing a solver to execute
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
    pub embedded_input: Option<&'static str>,
}

/// Answer to a single part
pub struct PartResult {
    pub answer: String,
    pub solve_duration: TimeDelta,
}

/// Parsed and solved puzzle
pub struct PuzzleRun {
    pub parse_duration: TimeDelta,
    pub parts: Vec<PartResult>,
}

/// Outcome of one puzzle; failures never stop the batch
pub struct PuzzleResult {
    pub year: u16,
    pub day: u8,
    pub outcome: Result<PuzzleRun, RunError>,
}

/// Runs every selected puzzle in year/day order
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: InputStore::new(config.input_dir.clone()),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .storage()
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
                embedded_input: info.input,
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and the solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Run every work item, handing each result to `on_result` as soon as it is ready
    pub fn execute<F>(&self, work_items: &[WorkItem], mut on_result: F) -> Vec<PuzzleResult>
    where
        F: FnMut(&PuzzleResult),
    {
        work_items
            .iter()
            .map(|work| {
                let result = self.run_puzzle(work);
                on_result(&result);
                result
            })
            .collect()
    }

    /// Read, parse and solve one puzzle, turning panics into [`RunError::Panicked`]
    pub fn run_puzzle(&self, work: &WorkItem) -> PuzzleResult {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.solve(work)))
            .unwrap_or_else(|payload| Err(RunError::Panicked(panic_message(payload.as_ref()))));

        PuzzleResult {
            year: work.year,
            day: work.day,
            outcome,
        }
    }

    fn solve(&self, work: &WorkItem) -> Result<PuzzleRun, RunError> {
        let input = self.inputs.load(work.year, work.day, work.embedded_input)?;
        let mut solver = self.registry.create_solver(work.year, work.day, &input)?;

        let parts = work
            .parts
            .clone()
            .map(|part| solve_part(&mut *solver, part))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PuzzleRun {
            parse_duration: solver.parse_duration(),
            parts,
        })
    }
}

fn solve_part(solver: &mut dyn DynSolver, part: u8) -> Result<PartResult, RunError> {
    let result = solver.solve(part).map_err(SolverError::from)?;
    Ok(PartResult {
        solve_duration: result.duration(),
        answer: result.answer,
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Counts characters, but refuses to handle an input containing `!`
    #[derive(AocSolver)]
    #[aoc_solver(max_parts = 2)]
    struct Fragile;

    impl AocParser for Fragile {
        type SharedData<'a> = &'a str;

        fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
            Ok(input.trim())
        }
    }

    impl PartSolver<1> for Fragile {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            if shared.contains('!') {
                panic!("exclamation overload");
            }
            Ok(shared.len().to_string())
        }
    }

    impl PartSolver<2> for Fragile {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            if shared.is_empty() {
                return Err(SolveError::SolveFailed("nothing to count".into()));
            }
            Ok(shared.chars().filter(|c| c.is_ascii_digit()).count().to_string())
        }
    }

    fn executor(dir: &Path, part_filter: Option<u8>) -> Executor {
        let registry = SolverRegistryBuilder::new()
            .register_solver(&Fragile, 2015, 1)
            .unwrap()
            .register_solver(&Fragile, 2015, 2)
            .unwrap()
            .register_factory(2016, 3, 2, Some("abc123"), |input: &str| {
                Ok(Box::new(aoc_solver::SolverInstance::<Fragile>::new(2016, 3, input)?))
            })
            .unwrap()
            .build();

        Executor {
            registry,
            inputs: InputStore::new(dir.to_path_buf()),
            year_filter: None,
            day_filter: None,
            part_filter,
        }
    }

    fn write_input(dir: &Path, year: u16, day: u8, content: &str) {
        let store = InputStore::new(dir.to_path_buf());
        let path = store.input_path(year, day);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_work_items_in_order_with_part_filter() {
        let temp = TempDir::new().unwrap();
        let exec = executor(temp.path(), Some(2));
        let items = exec.collect_work_items();

        let keys: Vec<_> = items.iter().map(|w| (w.year, w.day)).collect();
        assert_eq!(keys, vec![(2015, 1), (2015, 2), (2016, 3)]);
        assert!(items.iter().all(|w| w.parts == (2..=2)));
        assert_eq!(items[2].embedded_input, Some("abc123"));
    }

    #[test]
    fn test_failures_do_not_stop_the_batch() {
        let temp = TempDir::new().unwrap();
        write_input(temp.path(), 2015, 1, "boom!\n");
        let exec = executor(temp.path(), None);

        let mut seen = Vec::new();
        let results = exec.execute(&exec.collect_work_items(), |r| seen.push((r.year, r.day)));

        assert_eq!(seen, vec![(2015, 1), (2015, 2), (2016, 3)]);
        assert!(matches!(results[0].outcome, Err(RunError::Panicked(ref m)) if m == "exclamation overload"));
        assert!(matches!(results[1].outcome, Err(RunError::MissingInput { .. })));

        let run = results[2].outcome.as_ref().unwrap();
        let answers: Vec<_> = run.parts.iter().map(|p| p.answer.as_str()).collect();
        assert_eq!(answers, vec!["6", "3"]);
    }

    #[test]
    fn test_solve_error_is_reported() {
        let temp = TempDir::new().unwrap();
        write_input(temp.path(), 2015, 2, "\n");
        let exec = executor(temp.path(), Some(2));
        let item = exec
            .collect_work_items()
            .into_iter()
            .find(|w| w.day == 2)
            .unwrap();

        let result = exec.run_puzzle(&item);
        let err = result.outcome.err().unwrap();
        assert!(matches!(err, RunError::Solver(SolverError::SolveError(_))));
        assert!(err.to_string().contains("nothing to count"));
    }
}
