//! Puzzle input lookup

use crate::error::RunError;
use std::borrow::Cow;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// File-based puzzle inputs
///
/// Directory structure: `{base_dir}/{year}/Day{day:02}-input.txt`
pub struct InputStore {
    base_dir: PathBuf,
}

impl InputStore {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.base_dir
            .join(year.to_string())
            .join(format!("Day{:02}-input.txt", day))
    }

    /// Read the input file, falling back to `embedded` when the file does not exist
    pub fn load(
        &self,
        year: u16,
        day: u8,
        embedded: Option<&'static str>,
    ) -> Result<Cow<'static, str>, RunError> {
        let path = self.input_path(year, day);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Cow::Owned(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                embedded.map(Cow::Borrowed).ok_or_else(|| RunError::MissingInput {
                    path: path.display().to_string(),
                })
            }
            Err(source) => Err(RunError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let store = InputStore::new(PathBuf::from("lib"));
        assert_eq!(
            store.input_path(2015, 3),
            PathBuf::from("lib").join("2015").join("Day03-input.txt")
        );
        assert!(store.input_path(2016, 25).ends_with("2016/Day25-input.txt"));
    }

    #[test]
    fn test_file_takes_precedence_over_embedded() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        fs::create_dir_all(temp.path().join("2016")).unwrap();
        fs::write(store.input_path(2016, 5), "abc\n").unwrap();

        assert_eq!(store.load(2016, 5, Some("reyedfim")).unwrap(), "abc\n");
        assert_eq!(store.load(2016, 6, Some("embedded")).unwrap(), "embedded");
    }

    #[test]
    fn test_missing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        let err = store.load(2015, 1, None).unwrap_err();
        assert!(matches!(err, RunError::MissingInput { .. }));
        assert!(err.to_string().contains("Day01-input.txt"));
    }
}
