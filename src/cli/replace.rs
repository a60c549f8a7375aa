use clap::Parser;
use std::path::PathBuf;

/// Arguments for the replace command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Patch a compiler name:\n    pyframeworks replace setup.cfg gcc clang\n\n\
                   Use \\n for newlines in either pattern:\n    pyframeworks replace Makefile 'all:\\n' 'default:\\n'")]
pub struct ReplaceArgs {
    /// File to edit in place
    pub file: PathBuf,

    /// Text to find; `\n` stands for a newline
    #[arg(allow_hyphen_values = true)]
    pub find: String,

    /// Replacement text; `\n` stands for a newline
    #[arg(allow_hyphen_values = true)]
    pub replace: String,
}
