//! In-place text substitution used to patch build files

use std::fs;
use std::path::Path;

use crate::error::{Result, read_failed, write_failed};

/// Turn the two-character sequence `\n` into a newline, so multi-line
/// patterns can be passed as a single shell argument
pub fn unescape_newlines(pattern: &str) -> String {
    pattern.replace("\\n", "\n")
}

/// Replace every occurrence of `find` with `replacement` in the file at
/// `path`. Both patterns are unescaped first. Returns the number of
/// replacements made; the file is only rewritten when there was a match.
pub fn replace_in_file(path: &Path, find: &str, replacement: &str) -> Result<usize> {
    let find = unescape_newlines(find);
    let replacement = unescape_newlines(replacement);

    let text = fs::read_to_string(path).map_err(|e| read_failed(path, e))?;
    if find.is_empty() {
        return Ok(0);
    }

    let count = text.matches(find.as_str()).count();
    if count > 0 {
        fs::write(path, text.replace(&find, &replacement)).map_err(|e| write_failed(path, e))?;
    }

    tracing::debug!("replaced {} occurrence(s) in {}", count, path.display());
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PyFrameworksError;
    use tempfile::TempDir;

    #[test]
    fn test_unescape_newlines() {
        assert_eq!(unescape_newlines("a\\nb"), "a\nb");
        assert_eq!(unescape_newlines("plain"), "plain");
    }

    #[test]
    fn test_replace_all_occurrences() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("setup.cfg");
        fs::write(&file, "cc = gcc\nld = gcc\n").unwrap();

        let count = replace_in_file(&file, "gcc", "clang").unwrap();

        assert_eq!(count, 2);
        assert_eq!(fs::read_to_string(&file).unwrap(), "cc = clang\nld = clang\n");
    }

    #[test]
    fn test_replace_multiline_pattern() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("Makefile");
        fs::write(&file, "all:\n\tbuild\ninstall:\n").unwrap();

        replace_in_file(&file, "all:\\n\\tbuild", "all:\\n\\tbuild --ios").unwrap();

        // Only \n is unescaped, the tab escape stays literal and does not match
        assert_eq!(fs::read_to_string(&file).unwrap(), "all:\n\tbuild\ninstall:\n");

        replace_in_file(&file, "all:\\n", "default:\\n").unwrap();
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "default:\n\tbuild\ninstdefault:\n"
        );
    }

    #[test]
    fn test_replace_returns_match_count() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("Makefile");
        fs::write(&file, "all:\n\tbuild\nclean:\n").unwrap();

        assert_eq!(replace_in_file(&file, "all:\\n", "default:\\n").unwrap(), 1);
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "default:\n\tbuild\nclean:\n"
        );
    }

    #[test]
    fn test_no_match_leaves_file_untouched() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("a.txt");
        fs::write(&file, "unchanged").unwrap();
        assert_eq!(replace_in_file(&file, "missing", "x").unwrap(), 0);
        assert_eq!(fs::read_to_string(&file).unwrap(), "unchanged");
    }

    #[test]
    fn test_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        let err = replace_in_file(&temp.path().join("nope"), "a", "b").unwrap_err();
        assert!(matches!(err, PyFrameworksError::FileReadFailed { .. }));
    }
}
