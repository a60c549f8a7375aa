//! Test fixtures and utilities for reducing test setup duplication.
//!
//! - [`BuildTree`]: a temporary build root with fake extension binaries
//! - [`RecordingTools`]: a [`BinaryTools`] that records calls instead of
//!   running `otool`, `insert_dylib` and `codesign`

#![allow(clippy::expect_used)]

use std::cell::RefCell;
use std::path::Path;

use tempfile::TempDir;

use crate::error::Result;
use crate::tools::{BinaryTools, ToolOutput};

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(crate::temp::temp_dir_base()).expect("Failed to create temp directory")
}

/// Temporary build root holding fake extension modules
pub struct BuildTree {
    temp: TempDir,
}

impl BuildTree {
    #[must_use]
    pub fn new() -> Self {
        Self {
            temp: create_temp_dir(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Write a fake Mach-O binary at `relative`, creating parent directories
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn extension(&self, relative: &str) {
        let path = self.temp.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, format!("fake mach-o {}", relative))
            .expect("Failed to write extension");
    }
}

impl Default for BuildTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Fake binary tools recording `<tool> [dylib] <binary>` for every call
#[derive(Default)]
pub struct RecordingTools {
    calls: RefCell<Vec<String>>,
    load_commands: String,
    fail: bool,
}

impl RecordingTools {
    /// Tools whose load-command listing prints `stdout`
    #[must_use]
    pub fn with_load_commands(stdout: &str) -> Self {
        Self {
            load_commands: stdout.to_string(),
            ..Self::default()
        }
    }

    /// Tools that exit with status 1 on every call
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Calls made so far
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, program: &str, args: Vec<String>, stdout: &str) -> Result<ToolOutput> {
        let mut line = vec![program.to_string()];
        line.extend(args.iter().cloned());
        self.calls.borrow_mut().push(line.join(" "));

        Ok(ToolOutput {
            program: program.to_string(),
            args,
            code: Some(i32::from(self.fail)),
            success: !self.fail,
            stdout: stdout.to_string(),
            stderr: if self.fail {
                "simulated failure".to_string()
            } else {
                String::new()
            },
        })
    }
}

impl BinaryTools for RecordingTools {
    fn load_commands(&self, binary: &Path) -> Result<ToolOutput> {
        self.record(
            "otool",
            vec![binary.display().to_string()],
            &self.load_commands,
        )
    }

    fn insert_dylib(&self, dylib: &str, binary: &Path) -> Result<ToolOutput> {
        self.record(
            "insert_dylib",
            vec![dylib.to_string(), binary.display().to_string()],
            "",
        )
    }

    fn remove_signature(&self, binary: &Path) -> Result<ToolOutput> {
        self.record("codesign", vec![binary.display().to_string()], "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_tree_writes_nested_extension() {
        let tree = BuildTree::new();
        tree.extension("pkg/sub/mod.abi3.so");
        assert!(tree.root().join("pkg/sub/mod.abi3.so").is_file());
    }

    #[test]
    fn test_recording_tools_records_calls() {
        let tools = RecordingTools::default();
        let output = tools.remove_signature(Path::new("/x/mod.so")).unwrap();
        assert!(output.success);
        assert_eq!(tools.calls(), vec!["codesign /x/mod.so"]);
    }

    #[test]
    fn test_failing_tools_fail() {
        let tools = RecordingTools::failing();
        let output = tools.load_commands(Path::new("/x/mod.so")).unwrap();
        assert!(!output.success);
        assert_eq!(output.code, Some(1));
    }
}
