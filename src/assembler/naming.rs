//! Bundle naming
//!
//! Pure functions from an artifact's relative path to the name of the
//! framework wrapping it. No file system access happens here.

use std::path::{Component, Path};

use super::artifact::CompatibilityTag;

/// Extension of every bundle directory
pub const BUNDLE_EXTENSION: &str = "framework";

/// Ordered segments identifying one bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleName {
    segments: Vec<String>,
}

impl BundleName {
    #[cfg(test)]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Directory name, e.g. `pkg-mod-cp311.framework`
    pub fn dir_name(&self) -> String {
        format!("{}.{}", self.segments.join("-"), BUNDLE_EXTENSION)
    }

    /// Identifier suffix safe for a reverse-DNS bundle id, e.g. `pkgmodcp311`
    pub fn identifier(&self) -> String {
        self.segments
            .concat()
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect()
    }
}

/// Name the bundle for an artifact.
///
/// The segments are the artifact's parent directories relative to the
/// build root, then the module name, then the tag. `top_level` drops the
/// first directory segment; an artifact directly under the root has none
/// to drop and keeps its module segment, so root-level bundles stay distinct
/// instead of all collapsing to `<tag>.framework`.
pub fn bundle_name(
    relative_path: &Path,
    module_name: &str,
    tag: &CompatibilityTag,
    top_level: bool,
) -> BundleName {
    let mut directories: Vec<String> = relative_path
        .parent()
        .map(|parent| {
            parent
                .components()
                .filter_map(|c| match c {
                    Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default();

    if top_level && !directories.is_empty() {
        directories.remove(0);
    }

    let mut segments = directories;
    segments.push(module_name.to_string());
    segments.push(tag.to_string());

    BundleName { segments }
}

/// Prefix of a bundle directory name used when pruning, e.g. `numpy`
/// for `numpy.framework`
pub fn bundle_prefix(dir_name: &str) -> &str {
    dir_name.split('.').next().unwrap_or(dir_name)
}

/// Whether a directory entry name looks like a bundle
pub fn is_bundle_dir_name(name: &str) -> bool {
    Path::new(name)
        .extension()
        .is_some_and(|ext| ext == BUNDLE_EXTENSION)
}
