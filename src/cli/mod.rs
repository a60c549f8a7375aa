//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - frameworks: Framework assembly arguments
//! - install_deps: Dependency installer arguments
//! - replace: Text replacement arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod frameworks;
pub mod install_deps;
pub mod replace;

pub use completions::CompletionsArgs;
pub use frameworks::FrameworksArgs;
pub use install_deps::InstallDepsArgs;
pub use replace::ReplaceArgs;

/// pyframeworks - Python extension framework packager
///
/// Wrap compiled Python extension modules into framework bundles for embedding in apps.
#[derive(Parser, Debug)]
#[command(
    name = "pyframeworks",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Packages compiled Python extension modules into framework bundles",
    long_about = "pyframeworks wraps every compiled extension module of a Python package build \
                  into its own .framework bundle, linked against the embedded interpreter and \
                  ready to be signed inside an app. It also installs isolated dependencies and \
                  patches build files.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  pyframeworks frameworks 3.11 numpy Numpy          \x1b[90m# Bundle numpy for Python 3.11\x1b[0m\n   \
                  pyframeworks install-deps site python3.11 install six\n   \
                  pyframeworks replace setup.py 'gcc' 'clang'\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Assemble extension modules into framework bundles
    Frameworks(FrameworksArgs),

    /// Install Python packages into an isolated site directory
    InstallDeps(InstallDepsArgs),

    /// Replace text in a file
    Replace(ReplaceArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
