use clap::Parser;
use std::path::PathBuf;

/// Arguments for the install-deps command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install a package:\n    pyframeworks install-deps build/site python3.11 install six\n\n\
                   Install the requirements of a built package:\n    \
                   pyframeworks install-deps build/site python3.11 install -r pkg.egg-info/requires.txt")]
pub struct InstallDepsArgs {
    /// Site directory receiving the packages (becomes a temporary venv)
    pub site: PathBuf,

    /// Python interpreter used to create the venv
    pub python: PathBuf,

    /// Arguments passed to `python -m pip`. Paths ending in /requires.txt or
    /// /METADATA are converted to plain requirement files
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub pip_args: Vec<String>,
}
