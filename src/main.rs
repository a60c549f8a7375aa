//! pyframeworks - Python extension framework packager
//!
//! Build-time tooling that wraps compiled Python extension modules into
//! framework bundles for embedding an interpreter in an app, plus helpers
//! for isolated dependency installation and build file patching.

use clap::Parser;

mod assembler;
mod cli;
mod commands;
mod common;
mod config;
mod deps;
mod error;
mod logging;
mod replace;
mod temp;
#[cfg(test)]
mod test_fixtures;
mod tools;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init_cli_logger(cli.verbose);

    let result = match cli.command {
        Commands::Frameworks(args) => commands::frameworks::run(args),
        Commands::InstallDeps(args) => commands::install_deps::run(args),
        Commands::Replace(args) => commands::replace::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(help) = miette::Diagnostic::help(&e) {
            eprintln!("  help: {}", help);
        }
        std::process::exit(1);
    }
}
