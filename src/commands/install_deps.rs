//! Install-deps command implementation

use crate::cli::InstallDepsArgs;
use crate::deps;
use crate::error::Result;

/// Run install-deps command
pub fn run(args: InstallDepsArgs) -> Result<()> {
    let report = deps::install(&args.site, &args.python, &args.pip_args)?;
    if args.pip_args.is_empty() {
        tracing::info!(
            "created {} without installing packages",
            args.site.display()
        );
    } else {
        tracing::info!(
            "installed {} entries into {}",
            report.packages.len(),
            args.site.display()
        );
    }
    Ok(())
}
