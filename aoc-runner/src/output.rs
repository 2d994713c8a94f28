//! Output formatting for puzzle results

use crate::executor::{PuzzleResult, PuzzleRun};
use chrono::TimeDelta;
use itertools::Itertools;

/// Output formatter for puzzle results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &PuzzleResult) {
        match &result.outcome {
            Ok(run) if self.quiet => {
                for part in &run.parts {
                    println!("{}", part.answer);
                }
            }
            Ok(run) => println!("{}", format_sentence(result.year, result.day, run)),
            Err(e) => eprintln!("Error when running {} day {:02}: {}", result.year, result.day, e),
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[PuzzleResult]) {
        if self.quiet {
            return;
        }

        let (runs, failures): (Vec<&PuzzleRun>, Vec<_>) =
            results.iter().partition_map(|r| match &r.outcome {
                Ok(run) => itertools::Either::Left(run),
                Err(_) => itertools::Either::Right((r.year, r.day)),
            });

        let total_parse_time: TimeDelta = runs.iter().map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = runs
            .iter()
            .flat_map(|r| r.parts.iter().map(|p| p.solve_duration))
            .sum();

        println!();
        println!("--- Summary ---");
        println!("Puzzles: {} solved, {} failed", runs.len(), failures.len());
        if !failures.is_empty() {
            println!(
                "Failed: {}",
                failures
                    .iter()
                    .map(|(year, day)| format!("{}/{:02}", year, day))
                    .join(", ")
            );
        }
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

/// `The solution to 2015 day 01 is 74 and 1795 (parse: .., solve: ..)`
fn format_sentence(year: u16, day: u8, run: &PuzzleRun) -> String {
    let answers = run.parts.iter().map(|p| p.answer.as_str()).join(" and ");
    let solve_time = run
        .parts
        .iter()
        .map(|p| format_duration(p.solve_duration))
        .join(" + ");
    format!(
        "The solution to {} day {:02} is {} (parse: {}, solve: {})",
        year,
        day,
        answers,
        format_duration(run.parse_duration),
        solve_time
    )
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    TimeDelta::from_std(d).map_or_else(|_| "N/A".to_string(), format_duration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::PartResult;
    use proptest::prelude::*;

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-20)), "-20µs");
    }

    #[test]
    fn test_sentence() {
        let run = PuzzleRun {
            parse_duration: TimeDelta::microseconds(12),
            parts: vec![
                PartResult {
                    answer: "74".to_string(),
                    solve_duration: TimeDelta::microseconds(3),
                },
                PartResult {
                    answer: "1795".to_string(),
                    solve_duration: TimeDelta::microseconds(4),
                },
            ],
        };
        assert_eq!(
            format_sentence(2015, 1, &run),
            "The solution to 2015 day 01 is 74 and 1795 (parse: 12µs, solve: 3µs + 4µs)"
        );
    }

    proptest! {
        #[test]
        fn prop_format_duration_has_unit(micros in 0i64..10_000_000_000) {
            let s = format_duration(TimeDelta::microseconds(micros));
            prop_assert!(s.ends_with("µs") || s.ends_with("ms") || s.ends_with('s'));
            prop_assert!(!s.starts_with('-'));
        }
    }
}
