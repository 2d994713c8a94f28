//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Root of the input files
    pub input_dir: PathBuf,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        if args.input_dir.as_os_str().is_empty() {
            return Err(CliError::Config("input directory must not be empty".to_string()));
        }

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: expand_tilde(&args.input_dir, dirs::home_dir()),
            quiet: args.quiet,
        })
    }
}

/// Expand a leading `~` to `home`
fn expand_tilde(path: &Path, home: Option<PathBuf>) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(home) = home
    {
        if path_str == "~" {
            return home;
        }
        if let Some(rest) = path_str.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_tilde() {
        let home = Some(PathBuf::from("/home/elf"));
        assert_eq!(
            expand_tilde(Path::new("~/aoc/lib"), home.clone()),
            PathBuf::from("/home/elf/aoc/lib")
        );
        assert_eq!(expand_tilde(Path::new("~"), home.clone()), PathBuf::from("/home/elf"));
        assert_eq!(expand_tilde(Path::new("lib"), home), PathBuf::from("lib"));
        assert_eq!(expand_tilde(Path::new("~/lib"), None), PathBuf::from("~/lib"));
    }

    #[test]
    fn test_input_dir_uses_home_dir() {
        use clap::Parser;

        let args = Args::try_parse_from(["aoc", "--input-dir", "~/puzzles"]).unwrap();
        let config = Config::from_args(args).unwrap();
        match dirs::home_dir() {
            Some(home) => assert_eq!(config.input_dir, home.join("puzzles")),
            None => assert_eq!(config.input_dir, PathBuf::from("~/puzzles")),
        }
    }
}
