//! Replace command implementation

use crate::cli::ReplaceArgs;
use crate::error::Result;
use crate::replace::replace_in_file;

/// Run replace command
pub fn run(args: ReplaceArgs) -> Result<()> {
    let count = replace_in_file(&args.file, &args.find, &args.replace)?;
    tracing::info!("{} replacement(s) in {}", count, args.file.display());
    Ok(())
}
