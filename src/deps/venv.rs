//! Flattening a virtual environment into a plain site directory
//!
//! After pip has installed into the venv, the packages are moved from
//! `lib/<python>/site-packages` up to the site root and the venv scaffolding
//! (`lib`, `include`, `pyvenv.cfg`, activation scripts and interpreter
//! links) is removed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::common::fs::{move_path, remove_path};
use crate::error::{PyFrameworksError, Result, read_failed};

const SITE_PACKAGES: &str = "site-packages";

/// Directory pip installed into: `lib/<python>`, or its `site-packages`
/// child when that is its only entry
pub fn installed_packages_dir(site: &Path, python_name: &str) -> Result<PathBuf> {
    let lib = site.join("lib").join(python_name);
    if !lib.is_dir() {
        return Err(PyFrameworksError::VenvLayout {
            message: format!("{} does not exist", lib.display()),
        });
    }

    let entries = list_names(&lib)?;
    if entries == [SITE_PACKAGES] {
        Ok(lib.join(SITE_PACKAGES))
    } else {
        Ok(lib)
    }
}

/// Move installed packages to the site root and delete venv scaffolding.
///
/// Returns the names of the packages moved.
pub fn flatten(site: &Path, python_name: &str) -> Result<Vec<String>> {
    let packages_dir = installed_packages_dir(site, python_name)?;

    let mut moved = Vec::new();
    for name in list_names(&packages_dir)? {
        let target = site.join(&name);
        remove_path(&target)?;
        move_path(&packages_dir.join(&name), &target)?;
        moved.push(name);
    }

    for scaffolding in ["lib", "lib64", "include", "pyvenv.cfg"] {
        remove_path(&site.join(scaffolding))?;
    }

    let bin = site.join("bin");
    if bin.is_dir() {
        for name in list_names(&bin)? {
            if name.to_lowercase().starts_with("activate") || name.starts_with("python") {
                remove_path(&bin.join(name))?;
            }
        }
    }

    tracing::debug!("flattened {} packages into {}", moved.len(), site.display());
    Ok(moved)
}

fn list_names(dir: &Path) -> Result<Vec<String>> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .map_err(|e| read_failed(dir, e))?
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    Ok(names)
}
