//! Common file system operations with unified error handling

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PyFrameworksError, Result, remove_failed, write_failed};

/// Remove a file, symlink or directory tree if anything exists at `path`.
///
/// Returns whether something was removed.
pub fn remove_path(path: &Path) -> Result<bool> {
    let Ok(metadata) = fs::symlink_metadata(path) else {
        return Ok(false);
    };

    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    result.map_err(|e| remove_failed(path, e))?;
    Ok(true)
}

/// Create a directory and its parents
pub fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| write_failed(path, e))
}

/// Copy a file into `dir`, keeping its file name. Returns the new path.
pub fn copy_into(file: &Path, dir: &Path) -> Result<PathBuf> {
    let file_name = file.file_name().ok_or_else(|| PyFrameworksError::FileNotFound {
        path: file.display().to_string(),
    })?;
    let destination = dir.join(file_name);
    fs::copy(file, &destination).map_err(|e| PyFrameworksError::CopyFailed {
        from: file.display().to_string(),
        to: destination.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(destination)
}

/// Move `from` to `to`, replacing nothing; the destination must not exist
pub fn move_path(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|e| PyFrameworksError::CopyFailed {
        from: from.display().to_string(),
        to: to.display().to_string(),
        reason: e.to_string(),
    })
}

/// Create a symlink at `link` pointing at `target` through a path relative
/// to the link's directory.
///
/// `target` must live below the link's directory, which holds for every
/// link inside a framework bundle.
pub fn relative_symlink(target: &Path, link: &Path) -> Result<()> {
    let symlink_error = |reason: String| PyFrameworksError::SymlinkFailed {
        link: link.display().to_string(),
        target: target.display().to_string(),
        reason,
    };

    let link_dir = link
        .parent()
        .ok_or_else(|| symlink_error("link has no parent directory".to_string()))?;
    create_dir_all(link_dir)?;

    let relative = target
        .strip_prefix(link_dir)
        .map_err(|_| symlink_error("target is outside the link's directory".to_string()))?;

    symlink(relative, link).map_err(|e| symlink_error(e.to_string()))
}

#[cfg(unix)]
fn symlink(original: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(original, link)
}

#[cfg(not(unix))]
fn symlink(_original: &Path, _link: &Path) -> std::io::Result<()> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "symbolic links are only created on unix hosts",
    ))
}
