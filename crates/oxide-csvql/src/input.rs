//! Reading statement files.

use std::io::Read;
use std::path::Path;

use crate::error::{CliError, Result};

/// Reads the whole file at `path`, or stdin when `path` is `-`.
///
/// # Errors
///
/// Returns `CliError::ReadInput` if the source cannot be read.
pub fn read_source(path: &Path) -> Result<String> {
    let read = if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).map(|_| text)
    } else {
        std::fs::read_to_string(path)
    };
    read.map_err(|source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Splits a file into statements: one per non-blank line, paired with its
/// one-based line number.
pub fn statements(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| (i + 1, line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statements_skip_blank_lines() {
        let text = "SELECT a FROM 't'\n\n   \nDELETE FROM 't' WHERE a = '1'\n";
        let lines: Vec<_> = statements(text).collect();
        assert_eq!(
            lines,
            vec![
                (1, "SELECT a FROM 't'"),
                (4, "DELETE FROM 't' WHERE a = '1'"),
            ]
        );
    }

    #[test]
    fn test_statements_empty_file() {
        assert_eq!(statements("").count(), 0);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_source(Path::new("/nonexistent/statements.sql")).unwrap_err();
        assert!(matches!(err, CliError::ReadInput { .. }));
    }
}
