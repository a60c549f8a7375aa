//! Build environment handed over by the surrounding build system
//!
//! The values are read once, when the CLI starts a command, and passed
//! down explicitly. Nothing below the command layer reads the process
//! environment.

use crate::error::{Result, missing_environment};

/// Variable selecting the `lib.<S>*` build subdirectory
pub const BUILD_IDENTIFIER_VAR: &str = "S";
/// Variable holding the `MinimumOSVersion` written to every Info.plist
pub const MINIMUM_OS_VERSION_VAR: &str = "MINIMUM_OS_VERSION";
/// Variable holding the `CFBundleSupportedPlatforms` entry
pub const PLATFORM_NAME_VAR: &str = "INFO_PLATFORM_NAME";
/// Platform half of the default `<PLATFORM>.<ARCHITECTURE>` destination
pub const PLATFORM_VAR: &str = "PLATFORM";
/// Architecture half of the default `<PLATFORM>.<ARCHITECTURE>` destination
pub const ARCHITECTURE_VAR: &str = "ARCHITECTURE";
/// Presence-checked flag switching on the versioned bundle layout
pub const MAC_CATALYST_VAR: &str = "MAC_CATALYST";

/// Values provided by the build system through environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildEnvironment {
    /// Selects the `lib.<id>*` subdirectory of a submodule's build tree.
    /// When absent the build tree itself is scanned.
    pub build_identifier: Option<String>,
    /// Written as `MinimumOSVersion`
    pub minimum_os_version: String,
    /// Written as the only `CFBundleSupportedPlatforms` entry
    pub platform_name: String,
    /// Only needed for the default destination path
    pub platform: Option<String>,
    /// Only needed for the default destination path
    pub architecture: Option<String>,
    /// Use the `Versions/A` layout with symlinks
    pub mac_catalyst: bool,
}

impl BuildEnvironment {
    /// Read the build environment from the current process
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the build environment through an arbitrary lookup function
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| lookup(name).ok_or_else(|| missing_environment(name));

        Ok(Self {
            build_identifier: lookup(BUILD_IDENTIFIER_VAR).filter(|s| !s.is_empty()),
            minimum_os_version: required(MINIMUM_OS_VERSION_VAR)?,
            platform_name: required(PLATFORM_NAME_VAR)?,
            platform: lookup(PLATFORM_VAR),
            architecture: lookup(ARCHITECTURE_VAR),
            mac_catalyst: lookup(MAC_CATALYST_VAR).is_some(),
        })
    }

    /// `<PLATFORM>.<ARCHITECTURE>`, the directory grouping default destinations
    pub fn platform_directory(&self) -> Result<String> {
        let platform = self
            .platform
            .as_deref()
            .ok_or_else(|| missing_environment(PLATFORM_VAR))?;
        let architecture = self
            .architecture
            .as_deref()
            .ok_or_else(|| missing_environment(ARCHITECTURE_VAR))?;
        Ok(format!("{}.{}", platform, architecture))
    }
}
