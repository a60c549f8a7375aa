//! Temporary files that never land under the current working directory
//! (e.g. when TMPDIR=tmp or TMPDIR=./tmp).

use std::env;
use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use crate::error::{Result, write_failed};

/// Returns a directory path suitable for creating temporary files.
/// Never returns a relative path.
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            env::var("TEMP")
                .or_else(|_| env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    }
}

/// Write `contents` to a new temporary file named `pip_requires*.txt`.
///
/// The file is deleted when the returned handle is dropped.
pub fn write_requirements(contents: &str) -> Result<NamedTempFile> {
    let base = temp_dir_base();
    let mut file = tempfile::Builder::new()
        .prefix("pip_requires")
        .suffix(".txt")
        .tempfile_in(&base)
        .map_err(|e| write_failed(&base, e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| write_failed(file.path(), e))?;
    file.flush().map_err(|e| write_failed(file.path(), e))?;
    Ok(file)
}
