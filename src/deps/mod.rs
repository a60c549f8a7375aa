//! Isolated dependency installation
//!
//! Installs Python packages with pip into a throwaway virtual environment,
//! then flattens the environment so the site directory holds nothing but
//! the installed packages (and their console scripts).

pub mod requirements;
pub mod venv;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{PyFrameworksError, Result, read_failed};
use crate::tools;

pub use requirements::rewrite_pip_args;

/// Outcome of one installation
#[derive(Debug, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Interpreter inside the created venv
    pub venv_python: PathBuf,
    /// Entries moved into the site directory; empty when pip was not run
    pub packages: Vec<String>,
}

/// Create a venv at `site` with `python`, and if `pip_args` is non-empty
/// run pip with them and flatten the result into `site`
pub fn install(site: &Path, python: &Path, pip_args: &[String]) -> Result<InstallReport> {
    let python_name = python
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| PyFrameworksError::FileNotFound {
            path: python.display().to_string(),
        })?;

    let site = &std::path::absolute(site).map_err(|e| read_failed(site, e))?;

    tracing::info!("creating virtual environment at {}", site.display());
    tools::run(python, [OsStr::new("-m"), OsStr::new("venv"), site.as_os_str()])?
        .into_result()?;

    let venv_python = site.join("bin").join(&python_name);
    let mut report = InstallReport {
        venv_python: venv_python.clone(),
        packages: Vec::new(),
    };

    if pip_args.is_empty() {
        return Ok(report);
    }

    let rewritten = rewrite_pip_args(pip_args)?;
    let mut pip = Command::new(&venv_python);
    pip.env("PYTHONPATH", site);
    let mut args = vec!["-m".to_string(), "pip".to_string()];
    args.extend(rewritten.args.iter().cloned());

    tracing::info!("running pip {}", rewritten.args.join(" "));
    let output = tools::run_command(pip, &args)?.into_result()?;
    tracing::debug!("{}", output.stdout.trim_end());
    drop(rewritten);

    report.packages = venv::flatten(site, &python_name)?;
    Ok(report)
}
