//! AOC runner - runs the archived Advent of Code solutions

mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

// Link the archive so its solver plugins are registered
use aoc_archive as _;

use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use executor::Executor;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;
    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }
    if !config.quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let formatter = OutputFormatter::new(config.quiet);
    let results = executor.execute(&work_items, |result| formatter.print_result(result));
    formatter.print_summary(&results);

    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, error::CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_plugins_registered() {
        let registry = build_registry(&[]).unwrap();
        let storage = registry.storage();
        for (year, days) in [(2015, 25), (2016, 25), (2025, 4)] {
            for day in 1..=days {
                assert!(storage.contains(year, day), "{} day {} missing", year, day);
            }
        }
        assert_eq!(storage.len(), 54);
    }

    #[test]
    fn test_tag_filter_requires_all_tags() {
        let registry = build_registry(&["warmup".to_string()]).unwrap();
        assert!(registry.storage().contains(2015, 1));
        let none = build_registry(&["warmup".to_string(), "no-such-tag".to_string()]).unwrap();
        assert!(none.storage().is_empty());
    }
}
