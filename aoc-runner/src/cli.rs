//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code archive runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run the archived Advent of Code solutions", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding `{year}/DayNN-input.txt` files
    #[arg(long, env = "AOC_INPUT_DIR", default_value = "lib")]
    pub input_dir: PathBuf,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["aoc"]).unwrap();
        assert_eq!(args.year, None);
        assert!(args.tags.is_empty());
        assert!(!args.quiet);
    }

    #[test]
    fn test_filters_and_tags() {
        let args =
            Args::try_parse_from(["aoc", "-y", "2016", "-d", "5", "-p", "2", "-t", "md5,brute"])
                .unwrap();
        assert_eq!(args.year, Some(2016));
        assert_eq!(args.day, Some(5));
        assert_eq!(args.part, Some(2));
        assert_eq!(args.tags, vec!["md5", "brute"]);
    }

    #[test]
    fn test_day_out_of_range_rejected() {
        assert!(Args::try_parse_from(["aoc", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--part", "3"]).is_err());
    }
}
