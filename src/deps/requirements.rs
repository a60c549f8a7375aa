//! Requirement lists extracted from package metadata
//!
//! pip cannot read `requires.txt` (egg-info) or `METADATA` (dist-info)
//! directly, so arguments naming those files are rewritten to a plain
//! requirements file first.

use std::fs;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Result, read_failed};
use crate::temp::write_requirements;

const REQUIRES_TXT_SUFFIX: &str = "/requires.txt";
const METADATA_SUFFIX: &str = "/METADATA";
const REQUIRES_DIST: &str = "Requires-Dist:";

/// Metadata format recognised in a pip argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataKind {
    /// setuptools `*.egg-info/requires.txt`
    RequiresTxt,
    /// wheel `*.dist-info/METADATA`
    Metadata,
}

impl MetadataKind {
    /// Recognise an argument by its path suffix
    pub fn detect(argument: &str) -> Option<Self> {
        if argument.ends_with(REQUIRES_TXT_SUFFIX) {
            Some(Self::RequiresTxt)
        } else if argument.ends_with(METADATA_SUFFIX) {
            Some(Self::Metadata)
        } else {
            None
        }
    }

    /// Extract a pip requirements list from file contents
    pub fn requirements(self, contents: &str) -> String {
        match self {
            Self::RequiresTxt => unconditional_requires(contents),
            Self::Metadata => requires_dist(contents),
        }
    }
}

/// Lines of a `requires.txt` before its first `[extra]` section
pub fn unconditional_requires(contents: &str) -> String {
    contents
        .split('\n')
        .take_while(|line| !line.starts_with('['))
        .map(|line| format!("{}\n", line))
        .collect()
}

/// `Requires-Dist` values of a `METADATA` file without environment markers
pub fn requires_dist(contents: &str) -> String {
    contents
        .split('\n')
        .filter_map(|line| line.strip_prefix(REQUIRES_DIST))
        .map(|dep| dep.strip_prefix(' ').unwrap_or(dep))
        .filter(|dep| !dep.contains(';'))
        .map(|dep| format!("{}\n", dep))
        .collect()
}

/// pip arguments with metadata files replaced by temporary requirement files
#[derive(Debug)]
pub struct RewrittenArgs {
    pub args: Vec<String>,
    /// Keeps the temporary files alive until pip has run
    pub temp_files: Vec<NamedTempFile>,
}

/// Replace every `requires.txt` / `METADATA` argument with a requirements
/// file pip understands
pub fn rewrite_pip_args(args: &[String]) -> Result<RewrittenArgs> {
    let mut rewritten = RewrittenArgs {
        args: Vec::with_capacity(args.len()),
        temp_files: Vec::new(),
    };

    for argument in args {
        let Some(kind) = MetadataKind::detect(argument) else {
            rewritten.args.push(argument.clone());
            continue;
        };

        let path = Path::new(argument);
        let contents = fs::read_to_string(path).map_err(|e| read_failed(path, e))?;
        let file = write_requirements(&kind.requirements(&contents))?;
        tracing::debug!("rewrote {} to {}", argument, file.path().display());
        rewritten.args.push(file.path().display().to_string());
        rewritten.temp_files.push(file);
    }

    Ok(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_detect_metadata_kind() {
        assert_eq!(
            MetadataKind::detect("pkg.egg-info/requires.txt"),
            Some(MetadataKind::RequiresTxt)
        );
        assert_eq!(
            MetadataKind::detect("/x/pkg-1.0.dist-info/METADATA"),
            Some(MetadataKind::Metadata)
        );
        assert_eq!(MetadataKind::detect("requires.txt"), None);
        assert_eq!(MetadataKind::detect("-r"), None);
    }

    #[test]
    fn test_unconditional_requires_stops_at_extras() {
        let contents = "numpy>=1.21\nscipy\n\n[test]\npytest\n";
        assert_eq!(unconditional_requires(contents), "numpy>=1.21\nscipy\n\n");
    }

    #[test]
    fn test_unconditional_requires_without_extras() {
        assert_eq!(unconditional_requires("six"), "six\n");
    }

    #[test]
    fn test_requires_dist_skips_markers() {
        let contents = "Metadata-Version: 2.1\n\
                        Name: example\n\
                        Requires-Dist: numpy (>=1.21)\n\
                        Requires-Dist:packaging\n\
                        Requires-Dist: pytest ; extra == 'test'\n\
                        Requires-Dist: tomli; python_version < \"3.11\"\n\
                        \n\
                        Requires-Dist: not-a-header-in-body\n";
        assert_eq!(
            requires_dist(contents),
            "numpy (>=1.21)\npackaging\nnot-a-header-in-body\n"
        );
    }

    #[test]
    fn test_rewrite_pip_args_replaces_metadata_files() {
        let temp = TempDir::new().unwrap();
        let info = temp.path().join("pkg.egg-info");
        std::fs::create_dir(&info).unwrap();
        let requires = info.join("requires.txt");
        std::fs::write(&requires, "attrs\n[dev]\nblack\n").unwrap();

        let args = vec![
            "install".to_string(),
            "-r".to_string(),
            requires.display().to_string(),
        ];
        let rewritten = rewrite_pip_args(&args).unwrap();

        assert_eq!(&rewritten.args[..2], ["install", "-r"]);
        assert_ne!(rewritten.args[2], requires.display().to_string());
        assert_eq!(
            std::fs::read_to_string(&rewritten.args[2]).unwrap(),
            "attrs\n"
        );
        assert_eq!(rewritten.temp_files.len(), 1);
    }

    #[test]
    fn test_rewrite_pip_args_missing_file_fails() {
        let args = vec!["/nonexistent/pkg.dist-info/METADATA".to_string()];
        assert!(rewrite_pip_args(&args).is_err());
    }
}
