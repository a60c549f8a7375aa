//! Frameworks command implementation
//!
//! Builds the explicit configuration (environment, paths, tools) once and
//! hands it to the assembler.

use console::Term;

use crate::assembler::{self, AssembleOptions, AssembleReport, PythonVersion};
use crate::cli::FrameworksArgs;
use crate::config::{BuildEnvironment, FrameworkPaths, resolve_build_root};
use crate::error::Result;
use crate::tools::SystemTools;
use crate::ui::display::{display_bundle_paths, display_summary};
use crate::ui::{ProgressReporter, progress_reporter};

/// Run frameworks command
pub fn run(args: FrameworksArgs) -> Result<()> {
    let env = BuildEnvironment::from_env()?;
    let mut progress = progress_reporter(Term::stderr().is_term());
    let report = run_with_env(&args, &env, progress.as_mut())?;

    display_bundle_paths(&report);
    display_summary(&report);
    Ok(())
}

/// Assemble frameworks for `args` with an already-read build environment
pub fn run_with_env(
    args: &FrameworksArgs,
    env: &BuildEnvironment,
    progress: &mut dyn ProgressReporter,
) -> Result<AssembleReport> {
    let python_version = PythonVersion::parse(&args.python_version)?;

    let project_root = match &args.project_root {
        Some(root) => root.clone(),
        None => std::env::current_dir()?,
    };
    let frameworks_root = args
        .frameworks_root
        .clone()
        .unwrap_or_else(|| project_root.join("..").join("build"));

    let paths = FrameworkPaths::resolve(
        &args.destination,
        args.absolute_path,
        &frameworks_root,
        &args.submodule,
        &args.keep,
        env,
    )?;

    let build_root = resolve_build_root(
        &project_root,
        &args.submodule,
        env.build_identifier.as_deref(),
    );
    match &build_root {
        Some(root) => tracing::info!("assembling extensions from {}", root.display()),
        None => tracing::info!(
            "{} has no build tree under {}",
            args.submodule,
            project_root.display()
        ),
    }

    let options = AssembleOptions {
        top_level: args.top_level,
        platform_variant: env.mac_catalyst,
        strict_tools: args.strict,
        extension_suffix: args.suffix.clone(),
        bundle_id_prefix: args.bundle_id_prefix.clone(),
        ..AssembleOptions::new(&env.minimum_os_version, &env.platform_name)
    };
    let tools = SystemTools {
        otool: args.otool.clone(),
        insert_dylib: args.insert_dylib.clone(),
        codesign: args.codesign.clone(),
    };

    assembler::assemble(
        build_root.as_deref(),
        &python_version,
        &paths.destination,
        &paths.requested_names,
        &options,
        &tools,
        progress,
    )
}
