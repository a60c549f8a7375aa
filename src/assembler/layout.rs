//! Versioned bundle layout
//!
//! Mac Catalyst frameworks keep their contents in `Versions/A` and expose
//! them at the bundle root through symlinks:
//!
//! ```text
//! mod-cp311.framework/
//!     Versions/A/mod.cpython-311-darwin.so
//!     Versions/A/Resources/Info.plist
//!     Versions/Current -> A
//!     mod.cpython-311-darwin.so -> Versions/Current/mod.cpython-311-darwin.so
//!     Resources -> Versions/Current/Resources
//! ```

use std::path::Path;

use super::plist::INFO_PLIST;
use crate::common::fs::{create_dir_all, move_path, relative_symlink};
use crate::error::Result;

const VERSIONS_DIR: &str = "Versions";
const VERSION_NAME: &str = "A";
const CURRENT_NAME: &str = "Current";
const RESOURCES_DIR: &str = "Resources";

/// Move a flat bundle's binary and Info.plist into `Versions/A` and link
/// them back into the bundle root
pub fn apply_versioned_layout(bundle: &Path, executable: &str) -> Result<()> {
    let versions = bundle.join(VERSIONS_DIR);
    let current = versions.join(VERSION_NAME);
    let resources = current.join(RESOURCES_DIR);
    create_dir_all(&resources)?;

    move_path(&bundle.join(INFO_PLIST), &resources.join(INFO_PLIST))?;
    move_path(&bundle.join(executable), &current.join(executable))?;

    let current_alias = versions.join(CURRENT_NAME);
    relative_symlink(&current, &current_alias)?;
    relative_symlink(&current_alias.join(executable), &bundle.join(executable))?;
    relative_symlink(
        &current_alias.join(RESOURCES_DIR),
        &bundle.join(RESOURCES_DIR),
    )?;

    tracing::debug!("applied versioned layout to {}", bundle.display());
    Ok(())
}
