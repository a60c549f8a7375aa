use clap::Parser;
use std::path::PathBuf;

use crate::assembler::{DEFAULT_BUNDLE_ID_PREFIX, DEFAULT_EXTENSION_SUFFIX};

/// Arguments for the frameworks command
#[derive(Parser, Debug)]
#[command(after_help = "ENVIRONMENT:\n  \
                   MINIMUM_OS_VERSION   MinimumOSVersion written to Info.plist (required)\n  \
                   INFO_PLATFORM_NAME   CFBundleSupportedPlatforms entry (required)\n  \
                   PLATFORM             Platform part of the default destination\n  \
                   ARCHITECTURE         Architecture part of the default destination\n  \
                   S                    Selects the build/lib.<S>* directory\n  \
                   MAC_CATALYST         When set, use the Versions/A layout with symlinks\n\n\
                   EXAMPLES:\n  \
                   Bundle numpy for Python 3.11:\n    pyframeworks frameworks 3.11 numpy Numpy\n\n\
                   Write to an explicit directory and keep scipy bundles:\n    \
                   pyframeworks frameworks 3.11 numpy out/Frameworks --absolute-path scipy")]
pub struct FrameworksArgs {
    /// Python version the extensions must target (e.g. 3.11)
    pub python_version: String,

    /// Submodule whose build tree holds the extensions (e.g. numpy)
    pub submodule: String,

    /// Destination directory name under the platform build directory, or a
    /// path with --absolute-path
    pub destination: String,

    /// Additional bundle names kept when pruning stale bundles
    pub keep: Vec<String>,

    /// Drop the first directory segment from bundle names
    #[arg(long)]
    pub top_level: bool,

    /// Treat the destination as a path instead of a name
    #[arg(long)]
    pub absolute_path: bool,

    /// Directory containing the submodules
    #[arg(long, value_name = "DIR", env = "PYFRAMEWORKS_PROJECT_ROOT")]
    pub project_root: Option<PathBuf>,

    /// Base of default destinations (defaults to <project-root>/../build)
    #[arg(long, value_name = "DIR", env = "PYFRAMEWORKS_FRAMEWORKS_ROOT")]
    pub frameworks_root: Option<PathBuf>,

    /// File suffix identifying compiled extension modules
    #[arg(long, default_value = DEFAULT_EXTENSION_SUFFIX)]
    pub suffix: String,

    /// Reverse-DNS prefix of bundle identifiers
    #[arg(long, default_value = DEFAULT_BUNDLE_ID_PREFIX)]
    pub bundle_id_prefix: String,

    /// Fail on the first otool/insert_dylib/codesign failure
    #[arg(long)]
    pub strict: bool,

    /// Load-command inspection tool
    #[arg(long, value_name = "PATH", env = "PYFRAMEWORKS_OTOOL", default_value = "otool")]
    pub otool: PathBuf,

    /// Load-command insertion tool
    #[arg(
        long,
        value_name = "PATH",
        env = "PYFRAMEWORKS_INSERT_DYLIB",
        default_value = "insert_dylib"
    )]
    pub insert_dylib: PathBuf,

    /// Code signing tool
    #[arg(
        long,
        value_name = "PATH",
        env = "PYFRAMEWORKS_CODESIGN",
        default_value = "codesign"
    )]
    pub codesign: PathBuf,
}
