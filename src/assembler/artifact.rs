//! Extension artifacts and their Python compatibility tags

use std::fmt;
use std::path::PathBuf;

use crate::error::{PyFrameworksError, Result};

/// Tag rendered for the stable ABI
pub const STABLE_TAG: &str = "abi3";

/// Python version requested on the command line, e.g. `3.11`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonVersion {
    digits: String,
}

impl PythonVersion {
    pub fn parse(version: &str) -> Result<Self> {
        let valid = !version.is_empty()
            && version.chars().all(|c| c.is_ascii_digit() || c == '.')
            && version.chars().any(|c| c.is_ascii_digit());
        if !valid {
            return Err(PyFrameworksError::InvalidPythonVersion {
                version: version.to_string(),
            });
        }

        Ok(Self {
            digits: version.replace('.', ""),
        })
    }

    /// Tag that version-specific artifacts must carry, e.g. `cp311`
    pub fn tag(&self) -> CompatibilityTag {
        CompatibilityTag::CPython(self.digits.clone())
    }

    /// Name of the embedded interpreter framework, e.g. `Python311`
    pub fn framework_name(&self) -> String {
        format!("Python{}", self.digits)
    }

    /// Runtime-path reference extensions must link against
    pub fn runtime_reference(&self) -> String {
        let name = self.framework_name();
        format!("@rpath/{}.framework/{}", name, name)
    }
}

/// Binary interface an extension module was built for
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CompatibilityTag {
    /// Stable ABI, loadable by any supported interpreter
    Stable,
    /// Built for one CPython version, holding its digits (`311`)
    CPython(String),
}

impl CompatibilityTag {
    /// Classify an extension by file name.
    ///
    /// `mod.cpython-311-darwin.so` is `cp311`; names without a
    /// hyphenated marker in their second dot segment (`mod.abi3.so`,
    /// `mod.so`) are stable.
    pub fn from_file_name(file_name: &str) -> Self {
        file_name
            .split('.')
            .nth(1)
            .and_then(|segment| segment.split('-').nth(1))
            .map_or(Self::Stable, |marker| Self::CPython(marker.to_string()))
    }

    /// Whether an artifact with this tag is processed for `requested`
    pub fn is_compatible_with(&self, requested: &PythonVersion) -> bool {
        match self {
            Self::Stable => true,
            tag => *tag == requested.tag(),
        }
    }
}

impl fmt::Display for CompatibilityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stable => f.write_str(STABLE_TAG),
            Self::CPython(digits) => write!(f, "cp{}", digits),
        }
    }
}

/// A compiled extension module found under the build root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionArtifact {
    /// Location on disk
    pub path: PathBuf,
    /// Location relative to the build root
    pub relative_path: PathBuf,
    /// File name, used as the framework executable
    pub file_name: String,
    /// File name up to the first dot
    pub module_name: String,
    pub tag: CompatibilityTag,
}

impl ExtensionArtifact {
    pub fn new(path: PathBuf, relative_path: PathBuf) -> Self {
        let file_name = relative_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let module_name = file_name
            .split('.')
            .next()
            .unwrap_or_default()
            .to_string();
        let tag = CompatibilityTag::from_file_name(&file_name);

        Self {
            path,
            relative_path,
            file_name,
            module_name,
            tag,
        }
    }
}
