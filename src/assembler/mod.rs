//! Framework assembly
//!
//! Wraps every compiled extension module of a build tree into its own
//! `.framework` bundle so it can be embedded and signed inside an app:
//!
//! 1. Prune stale bundles from the destination
//! 2. Discover extensions and drop those built for another Python
//! 3. Per extension: write Info.plist, copy the binary, link it against the
//!    embedded interpreter, strip its signature, optionally version the layout

pub mod artifact;
pub mod discovery;
pub mod layout;
pub mod naming;
pub mod plist;

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

pub use artifact::{CompatibilityTag, ExtensionArtifact, PythonVersion};
pub use discovery::{Discovery, WalkDiagnostic, discover_extensions};
pub use naming::{BundleName, bundle_name};

use crate::common::fs::{copy_into, create_dir_all, remove_path};
use crate::error::{PyFrameworksError, Result, write_failed};
use crate::tools::{BinaryTools, ToolOutput};
use crate::ui::ProgressReporter;
use plist::{INFO_PLIST, InfoPlist};

/// Default file suffix of compiled extension modules
pub const DEFAULT_EXTENSION_SUFFIX: &str = ".so";
/// Default reverse-DNS prefix of bundle identifiers
pub const DEFAULT_BUNDLE_ID_PREFIX: &str = "ch.ada.Pyto";

/// Options controlling one assembler run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembleOptions {
    /// Drop the first directory segment from bundle names
    pub top_level: bool,
    /// Use the `Versions/A` layout with symlinks
    pub platform_variant: bool,
    /// Abort on the first external tool failure instead of reporting it
    pub strict_tools: bool,
    pub extension_suffix: String,
    pub bundle_id_prefix: String,
    pub minimum_os_version: String,
    pub platform_name: String,
}

impl AssembleOptions {
    pub fn new(minimum_os_version: impl Into<String>, platform_name: impl Into<String>) -> Self {
        Self {
            top_level: false,
            platform_variant: false,
            strict_tools: false,
            extension_suffix: DEFAULT_EXTENSION_SUFFIX.to_string(),
            bundle_id_prefix: DEFAULT_BUNDLE_ID_PREFIX.to_string(),
            minimum_os_version: minimum_os_version.into(),
            platform_name: platform_name.into(),
        }
    }
}

/// External tool step applied to each copied binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolStep {
    InspectLoadCommands,
    InsertDylib,
    RemoveSignature,
}

impl fmt::Display for ToolStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InspectLoadCommands => f.write_str("inspect load commands"),
            Self::InsertDylib => f.write_str("insert dylib"),
            Self::RemoveSignature => f.write_str("remove signature"),
        }
    }
}

/// A tool step that could not be run or exited unsuccessfully
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolFailure {
    pub bundle: PathBuf,
    pub step: ToolStep,
    pub message: String,
}

/// An artifact left out because it targets another Python
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedArtifact {
    pub path: PathBuf,
    pub tag: CompatibilityTag,
}

/// Outcome of one assembler run
#[derive(Debug, Default)]
pub struct AssembleReport {
    /// Bundles written, in processing order
    pub bundles: Vec<PathBuf>,
    pub skipped: Vec<SkippedArtifact>,
    /// Stale bundles removed before processing
    pub pruned: Vec<PathBuf>,
    pub diagnostics: Vec<WalkDiagnostic>,
    pub tool_failures: Vec<ToolFailure>,
}

/// Assemble one framework bundle per compatible extension under `root`.
///
/// `root` is `None` when the submodule has no build tree; the destination
/// is still created and pruned. Bundles whose name prefix is not in
/// `requested_names` are removed from `destination` before anything is
/// written.
pub fn assemble(
    root: Option<&Path>,
    python_version: &PythonVersion,
    destination: &Path,
    requested_names: &[String],
    options: &AssembleOptions,
    tools: &dyn BinaryTools,
    progress: &mut dyn ProgressReporter,
) -> Result<AssembleReport> {
    create_dir_all(destination)?;

    let mut report = AssembleReport {
        pruned: prune_stale_bundles(destination, requested_names)?,
        ..AssembleReport::default()
    };

    let discovery = match root {
        Some(root) => discover_extensions(root, &options.extension_suffix),
        None => {
            tracing::info!("no build tree, nothing to assemble");
            Discovery::default()
        }
    };
    report.diagnostics = discovery.diagnostics;

    progress.start(discovery.artifacts.len() as u64);
    let mut produced: HashMap<String, PathBuf> = HashMap::new();

    for artifact in &discovery.artifacts {
        progress.update_artifact(&artifact.relative_path.to_string_lossy());

        if !artifact.tag.is_compatible_with(python_version) {
            tracing::debug!(
                "skipping {} built for {}",
                artifact.relative_path.display(),
                artifact.tag
            );
            report.skipped.push(SkippedArtifact {
                path: artifact.path.clone(),
                tag: artifact.tag.clone(),
            });
            progress.inc_artifact();
            continue;
        }

        let name = bundle_name(
            &artifact.relative_path,
            &artifact.module_name,
            &artifact.tag,
            options.top_level,
        );
        let dir_name = name.dir_name();
        if let Some(first) = produced.get(&dir_name) {
            progress.abandon();
            return Err(PyFrameworksError::DuplicateBundle {
                name: dir_name,
                first: first.display().to_string(),
                second: artifact.relative_path.display().to_string(),
            });
        }
        produced.insert(dir_name, artifact.relative_path.clone());

        let built = build_bundle(
            artifact,
            &name,
            python_version,
            destination,
            options,
            tools,
            &mut report,
        );
        match built {
            Ok(bundle) => report.bundles.push(bundle),
            Err(err) => {
                progress.abandon();
                return Err(err);
            }
        }
        progress.inc_artifact();
    }

    progress.finish();
    Ok(report)
}

/// Remove every bundle in `destination` whose name prefix (up to the first
/// dot) is not one of `requested_names`. Returns the removed paths.
pub fn prune_stale_bundles(destination: &Path, requested_names: &[String]) -> Result<Vec<PathBuf>> {
    let listing = fs::read_dir(destination)
        .map_err(|e| crate::error::read_failed(destination, e))?
        .map(|entry| entry.map(|entry| entry.path()));
    let entries = readable_entries(destination, listing);

    let mut pruned = Vec::new();
    for path in entries {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        if !naming::is_bundle_dir_name(&name) {
            continue;
        }
        let prefix = naming::bundle_prefix(&name);
        if requested_names.iter().any(|requested| requested == prefix) {
            continue;
        }

        tracing::debug!("pruning stale bundle {}", path.display());
        remove_path(&path)?;
        pruned.push(path);
    }

    Ok(pruned)
}

/// Sorted entry paths, warning about and skipping entries that could not be read
fn readable_entries<I>(dir: &Path, listing: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = std::io::Result<PathBuf>>,
{
    let mut entries: Vec<PathBuf> = listing
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(err) => {
                tracing::warn!("unreadable entry in {}: {}", dir.display(), err);
                None
            }
        })
        .collect();
    entries.sort();
    entries
}

fn build_bundle(
    artifact: &ExtensionArtifact,
    name: &BundleName,
    python_version: &PythonVersion,
    destination: &Path,
    options: &AssembleOptions,
    tools: &dyn BinaryTools,
    report: &mut AssembleReport,
) -> Result<PathBuf> {
    let bundle = destination.join(name.dir_name());
    remove_path(&bundle)?;
    create_dir_all(&bundle)?;

    let identifier = format!("{}.{}", options.bundle_id_prefix, name.identifier());
    let info = InfoPlist {
        executable: &artifact.file_name,
        identifier: &identifier,
        name: &artifact.module_name,
        minimum_os_version: &options.minimum_os_version,
        platform_name: &options.platform_name,
    };
    let info_path = bundle.join(INFO_PLIST);
    fs::write(&info_path, info.render()).map_err(|e| write_failed(&info_path, e))?;

    let binary = copy_into(&artifact.path, &bundle)?;
    tracing::debug!("copied {} into {}", artifact.file_name, bundle.display());

    let mut steps = ToolSteps {
        bundle: &bundle,
        strict: options.strict_tools,
        failures: &mut report.tool_failures,
    };

    let reference = python_version.runtime_reference();
    let load_commands =
        steps.check(ToolStep::InspectLoadCommands, tools.load_commands(&binary))?;
    let already_linked = load_commands
        .is_some_and(|output| output.stdout.contains(&format!("name {}", reference)));
    if already_linked {
        tracing::debug!("{} already links {}", artifact.file_name, reference);
    } else {
        steps.check(ToolStep::InsertDylib, tools.insert_dylib(&reference, &binary))?;
    }

    steps.check(ToolStep::RemoveSignature, tools.remove_signature(&binary))?;

    if options.platform_variant {
        layout::apply_versioned_layout(&bundle, &artifact.file_name)?;
    }

    Ok(bundle)
}

/// Records tool failures for one bundle, or turns them into errors when strict
struct ToolSteps<'a> {
    bundle: &'a Path,
    strict: bool,
    failures: &'a mut Vec<ToolFailure>,
}

impl ToolSteps<'_> {
    fn check(&mut self, step: ToolStep, result: Result<ToolOutput>) -> Result<Option<ToolOutput>> {
        let error = match result.and_then(ToolOutput::into_result) {
            Ok(output) => return Ok(Some(output)),
            Err(err) => err,
        };

        if self.strict {
            return Err(error);
        }

        tracing::warn!("{} failed for {}: {}", step, self.bundle.display(), error);
        self.failures.push(ToolFailure {
            bundle: self.bundle.to_path_buf(),
            step,
            message: error.to_string(),
        });
        Ok(None)
    }
}
