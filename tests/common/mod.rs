//! Common test utilities for pyframeworks integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;
use walkdir::WalkDir;

/// A project directory holding submodule build trees
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the project root (parent of the submodules)
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Write a fake compiled extension under `<submodule>/build/`
    #[allow(dead_code)]
    pub fn extension(&self, submodule: &str, relative: &str) -> PathBuf {
        self.write_file(
            &format!("{}/build/{}", submodule, relative),
            &format!("binary {}", relative),
        )
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Directory used as an absolute destination in tests
    #[allow(dead_code)]
    pub fn out_dir(&self) -> PathBuf {
        self.path.join("out")
    }
}

/// Command for the real binary with a complete build environment and
/// no-op binary tools
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated, dead_code)]
pub fn pyframeworks_cmd() -> Command {
    let mut cmd = Command::cargo_bin("pyframeworks").unwrap();
    cmd.env("MINIMUM_OS_VERSION", "13.0")
        .env("INFO_PLATFORM_NAME", "iPhoneOS")
        .env("PLATFORM", "iphoneos")
        .env("ARCHITECTURE", "arm64")
        .env_remove("MAC_CATALYST")
        .env_remove("S")
        .env_remove("PYFRAMEWORKS_PROJECT_ROOT")
        .env_remove("PYFRAMEWORKS_FRAMEWORKS_ROOT")
        .env_remove("RUST_LOG")
        .env("PYFRAMEWORKS_OTOOL", "true")
        .env("PYFRAMEWORKS_INSERT_DYLIB", "true")
        .env("PYFRAMEWORKS_CODESIGN", "true");
    cmd
}

/// Hash of every path and file content under `root`, symlinks by target
#[allow(dead_code)]
pub fn tree_hash(root: &Path) -> String {
    let mut hasher = blake3::Hasher::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.expect("Failed to walk tree");
        let relative = entry.path().strip_prefix(root).unwrap();
        hasher.update(relative.to_string_lossy().as_bytes());
        hasher.update(b"\0");
        if entry.path_is_symlink() {
            let target = std::fs::read_link(entry.path()).unwrap();
            hasher.update(b"link:");
            hasher.update(target.to_string_lossy().as_bytes());
        } else if entry.file_type().is_file() {
            hasher.update(&std::fs::read(entry.path()).unwrap());
        }
        hasher.update(b"\0");
    }
    hasher.finalize().to_hex().to_string()
}

/// Names of the entries directly inside `dir`, sorted
#[allow(dead_code)]
pub fn dir_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
