//! Extension discovery in a build tree
//!
//! Walk errors (a directory removed while walking, a symlink loop, an
//! unreadable directory) do not stop discovery. Each one is collected as a
//! [`WalkDiagnostic`] and its subtree is skipped.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::artifact::ExtensionArtifact;

/// A non-fatal problem met while walking the build tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkDiagnostic {
    pub path: Option<PathBuf>,
    pub message: String,
}

/// Everything found under a build root
#[derive(Debug, Default)]
pub struct Discovery {
    pub artifacts: Vec<ExtensionArtifact>,
    pub diagnostics: Vec<WalkDiagnostic>,
}

/// Find every file below `root` whose name ends in `suffix`.
///
/// Entries are visited in file-name order so bundle creation is
/// deterministic. A missing root yields an empty discovery.
pub fn discover_extensions(root: &Path, suffix: &str) -> Discovery {
    let mut discovery = Discovery::default();
    if !root.is_dir() {
        return discovery;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let diagnostic = WalkDiagnostic {
                    path: err.path().map(Path::to_path_buf),
                    message: err.to_string(),
                };
                tracing::warn!("invalid directory: {}", diagnostic.message);
                discovery.diagnostics.push(diagnostic);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        if !entry.file_name().to_string_lossy().ends_with(suffix) {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_path_buf();
        discovery
            .artifacts
            .push(ExtensionArtifact::new(entry.path().to_path_buf(), relative));
    }

    discovery
}
