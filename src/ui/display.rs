//! Display functions for assembler results
//!
//! Bundle paths go to stdout, one per line, so build scripts can consume
//! them. Everything else is a styled summary on stderr.

use console::Style;

use crate::assembler::AssembleReport;

/// Print every written bundle path on its own line
pub fn display_bundle_paths(report: &AssembleReport) {
    for bundle in &report.bundles {
        println!("{}", bundle.display());
    }
}

/// Print a one-line summary plus any problems worth a second look
pub fn display_summary(report: &AssembleReport) {
    eprintln!("{}", summary_line(report));

    let warning = Style::new().for_stderr().yellow();
    for failure in &report.tool_failures {
        eprintln!(
            "  {} {} ({}): {}",
            warning.apply_to("warning:"),
            failure.bundle.display(),
            failure.step,
            failure.message
        );
    }
    for diagnostic in &report.diagnostics {
        let path = diagnostic
            .path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        eprintln!(
            "  {} skipped {}: {}",
            warning.apply_to("warning:"),
            path,
            diagnostic.message
        );
    }
}

fn summary_line(report: &AssembleReport) -> String {
    let mut parts = vec![format!(
        "{} {}",
        Style::new().for_stderr().bold().green().apply_to(report.bundles.len()),
        plural(report.bundles.len(), "framework", "frameworks")
    )];
    if !report.skipped.is_empty() {
        parts.push(format!("{} skipped", report.skipped.len()));
    }
    if !report.pruned.is_empty() {
        parts.push(format!("{} pruned", report.pruned.len()));
    }
    if !report.tool_failures.is_empty() {
        parts.push(format!(
            "{}",
            Style::new().for_stderr().yellow().apply_to(format!(
                "{} tool {}",
                report.tool_failures.len(),
                plural(report.tool_failures.len(), "failure", "failures")
            ))
        ));
    }
    parts.join(", ")
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
