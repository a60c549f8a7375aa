//! Error types and handling for pyframeworks
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pyframeworks operations
#[derive(Error, Diagnostic, Debug)]
pub enum PyFrameworksError {
    // Configuration errors
    #[error("Missing required environment variable: {name}")]
    #[diagnostic(
        code(pyframeworks::config::missing_environment),
        help("Export {name} before running, it is normally provided by the build system")
    )]
    MissingEnvironment { name: String },

    #[error("Invalid Python version: '{version}'")]
    #[diagnostic(
        code(pyframeworks::config::invalid_python_version),
        help("Pass a dotted version such as 3.11")
    )]
    InvalidPythonVersion { version: String },

    // Bundle errors
    #[error("Bundle '{name}' would be produced by both {first} and {second}")]
    #[diagnostic(
        code(pyframeworks::bundle::duplicate),
        help("Rename one of the extension modules or drop --top-level")
    )]
    DuplicateBundle {
        name: String,
        first: String,
        second: String,
    },

    #[error("Failed to create symlink {link} -> {target}: {reason}")]
    #[diagnostic(code(pyframeworks::bundle::symlink_failed))]
    SymlinkFailed {
        link: String,
        target: String,
        reason: String,
    },

    // External tool errors
    #[error("Failed to run '{program}': {reason}")]
    #[diagnostic(
        code(pyframeworks::tool::spawn_failed),
        help("Check that the tool is installed and on PATH, or pass its location explicitly")
    )]
    ToolSpawnFailed { program: String, reason: String },

    #[error("'{program}' exited with {status}: {stderr}")]
    #[diagnostic(code(pyframeworks::tool::failed))]
    ToolFailed {
        program: String,
        status: String,
        stderr: String,
    },

    // Python environment errors
    #[error("Unexpected virtual environment layout: {message}")]
    #[diagnostic(code(pyframeworks::deps::venv_layout))]
    VenvLayout { message: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(pyframeworks::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(pyframeworks::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(pyframeworks::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to copy {from} to {to}: {reason}")]
    #[diagnostic(code(pyframeworks::fs::copy_failed))]
    CopyFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("Failed to remove {path}: {reason}")]
    #[diagnostic(code(pyframeworks::fs::remove_failed))]
    RemoveFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(pyframeworks::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for PyFrameworksError {
    fn from(err: std::io::Error) -> Self {
        PyFrameworksError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for PyFrameworksError {
    fn from(err: walkdir::Error) -> Self {
        PyFrameworksError::IoError {
            message: err.to_string(),
        }
    }
}

/// Creates a missing-environment error
pub fn missing_environment(name: impl Into<String>) -> PyFrameworksError {
    PyFrameworksError::MissingEnvironment { name: name.into() }
}

/// Creates a file read error from a path and its cause
pub fn read_failed(path: &std::path::Path, err: impl std::fmt::Display) -> PyFrameworksError {
    PyFrameworksError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a file write error from a path and its cause
pub fn write_failed(path: &std::path::Path, err: impl std::fmt::Display) -> PyFrameworksError {
    PyFrameworksError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates a removal error from a path and its cause
pub fn remove_failed(path: &std::path::Path, err: impl std::fmt::Display) -> PyFrameworksError {
    PyFrameworksError::RemoveFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PyFrameworksError>;
