//! Path resolution for the `frameworks` command
//!
//! A submodule's extensions are built into `<project-root>/<submodule>/build`,
//! usually inside a `lib.<build-identifier>*` directory. Frameworks are
//! written to `<frameworks-root>/<PLATFORM>.<ARCHITECTURE>/<destination>`
//! unless an explicit destination path is given.

use std::fs;
use std::path::{Path, PathBuf};

use super::BuildEnvironment;
use crate::error::Result;

/// Locate the directory holding a submodule's built extensions.
///
/// Returns `None` when the submodule has no build tree, which callers treat
/// as nothing to do.
pub fn resolve_build_root(
    project_root: &Path,
    submodule: &str,
    build_identifier: Option<&str>,
) -> Option<PathBuf> {
    let build_dir = project_root.join(submodule).join("build");
    if !build_dir.is_dir() {
        return None;
    }

    let Some(identifier) = build_identifier else {
        return Some(build_dir);
    };

    let prefix = format!("lib.{}", identifier);
    let mut candidates: Vec<PathBuf> = fs::read_dir(&build_dir)
        .ok()?
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().starts_with(&prefix))
        .map(|entry| entry.path())
        .collect();
    candidates.sort();

    // No matching lib directory leaves the build tree itself as the root
    Some(candidates.into_iter().next().unwrap_or(build_dir))
}

/// Resolved destination and the names whose bundles survive pruning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkPaths {
    /// Directory receiving the `.framework` bundles
    pub destination: PathBuf,
    /// Bundle name prefixes kept by stale-bundle pruning
    pub requested_names: Vec<String>,
}

impl FrameworkPaths {
    /// Resolve where frameworks go and which existing bundles to keep.
    ///
    /// With `absolute_path` the destination argument is used as given.
    /// Otherwise it is placed under the platform directory of
    /// `frameworks_root`, which requires `PLATFORM` and `ARCHITECTURE`.
    pub fn resolve(
        destination: &str,
        absolute_path: bool,
        frameworks_root: &Path,
        submodule: &str,
        extra_names: &[String],
        env: &BuildEnvironment,
    ) -> Result<Self> {
        let destination_path = if absolute_path {
            PathBuf::from(destination)
        } else {
            frameworks_root
                .join(env.platform_directory()?)
                .join(destination)
        };

        let destination_name = Path::new(destination)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        let mut requested_names: Vec<String> = Vec::new();
        for name in std::iter::once(submodule.to_string())
            .chain(destination_name)
            .chain(extra_names.iter().cloned())
        {
            if !requested_names.contains(&name) {
                requested_names.push(name);
            }
        }

        Ok(Self {
            destination: destination_path,
            requested_names,
        })
    }
}
