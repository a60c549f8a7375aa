//! External tool invocation
//!
//! This module handles:
//! - Running external programs and capturing their exit status and output
//! - The three binary-editing operations the assembler needs, behind the
//!   [`BinaryTools`] trait so any toolchain exposing them can be substituted

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{PyFrameworksError, Result};

/// Captured result of one external program run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    /// Program as it was invoked
    pub program: String,
    /// Arguments passed to the program
    pub args: Vec<String>,
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
    /// Whether the program exited successfully
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    /// Convert an unsuccessful run into a `ToolFailed` error
    pub fn into_result(self) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(PyFrameworksError::ToolFailed {
                status: self.status_description(),
                stderr: self.stderr.trim().to_string(),
                program: self.program,
            })
        }
    }

    /// Human readable exit status
    pub fn status_description(&self) -> String {
        match self.code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        }
    }

    /// Program and arguments joined for logging
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Run a program to completion, capturing its output.
///
/// Fails only when the program cannot be started; a non-zero exit is
/// reported through [`ToolOutput::success`].
pub fn run<I, S>(program: &Path, args: I) -> Result<ToolOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    run_command(Command::new(program), args)
}

/// Like [`run`], on a pre-configured command (environment, working directory)
pub fn run_command<I, S>(mut command: Command, args: I) -> Result<ToolOutput>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let args: Vec<String> = args
        .into_iter()
        .map(|a| a.as_ref().to_string_lossy().into_owned())
        .collect();
    let program = command.get_program().to_string_lossy().into_owned();

    let output = command
        .args(&args)
        .output()
        .map_err(|e| PyFrameworksError::ToolSpawnFailed {
            program: program.clone(),
            reason: e.to_string(),
        })?;

    let output = ToolOutput {
        program,
        args,
        code: output.status.code(),
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };
    tracing::debug!("{} -> {}", output.command_line(), output.status_description());
    Ok(output)
}

/// Binary-editing operations used while assembling frameworks
pub trait BinaryTools {
    /// Print the load commands of a Mach-O binary
    fn load_commands(&self, binary: &Path) -> Result<ToolOutput>;

    /// Add `dylib` as a dependency of `binary`, editing it in place and
    /// answering every prompt with yes
    fn insert_dylib(&self, dylib: &str, binary: &Path) -> Result<ToolOutput>;

    /// Remove any code signature from `binary`
    fn remove_signature(&self, binary: &Path) -> Result<ToolOutput>;
}

/// [`BinaryTools`] backed by `otool`, `insert_dylib` and `codesign`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemTools {
    pub otool: PathBuf,
    pub insert_dylib: PathBuf,
    pub codesign: PathBuf,
}

impl Default for SystemTools {
    fn default() -> Self {
        Self {
            otool: PathBuf::from("otool"),
            insert_dylib: PathBuf::from("insert_dylib"),
            codesign: PathBuf::from("codesign"),
        }
    }
}

impl BinaryTools for SystemTools {
    fn load_commands(&self, binary: &Path) -> Result<ToolOutput> {
        run(&self.otool, [OsStr::new("-l"), binary.as_os_str()])
    }

    fn insert_dylib(&self, dylib: &str, binary: &Path) -> Result<ToolOutput> {
        run(
            &self.insert_dylib,
            [
                OsStr::new(dylib),
                OsStr::new("--inplace"),
                OsStr::new("--all-yes"),
                binary.as_os_str(),
            ],
        )
    }

    fn remove_signature(&self, binary: &Path) -> Result<ToolOutput> {
        run(
            &self.codesign,
            [OsStr::new("--remove-signature"), binary.as_os_str()],
        )
    }
}
