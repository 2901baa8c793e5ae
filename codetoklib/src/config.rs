//! Analysis configuration and startup validation.

use std::collections::BTreeSet;
use std::path::PathBuf;

use glob::Pattern;

use crate::error::CodetokError;
use crate::Result;

/// Directory names never descended into.
const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
    ".next",
    "node_modules",
    ".git",
    "__pycache__",
    "dist",
    "build",
    ".turbo",
    "out",
    ".venv",
    "venv",
    ".env",
    "env",
    ".pytest_cache",
    ".mypy_cache",
    ".tox",
    "coverage",
    ".coverage",
    ".nyc_output",
    "logs",
    "log",
    "tmp",
    "temp",
    ".tmp",
    ".temp",
    ".DS_Store",
    ".idea",
    ".vscode",
    ".cache",
    "cache",
    "vendor",
    "target",
    "bin",
    "obj",
];

/// Hard cap on the default worker count.
const MAX_DEFAULT_WORKERS: usize = 32;

/// Configuration for one analysis run.
///
/// Invalid configuration is the only fatal error class: `validate` runs
/// before any file is touched and a failure aborts the run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root path to analyze
    pub root: PathBuf,
    /// Path for the JSON report
    pub output_file: PathBuf,
    /// Suppress the console summary
    pub json_only: bool,
    /// Directory names to skip during traversal
    pub exclude_dirs: BTreeSet<String>,
    /// If set, only these extensions are analyzed
    pub include_extensions: Option<BTreeSet<String>>,
    /// Glob patterns matched against file names to exclude
    pub exclude_patterns: Vec<String>,
    /// Honor the root .gitignore during discovery
    pub respect_gitignore: bool,
    /// Process files on a worker pool
    pub parallel: bool,
    /// Emit periodic progress messages
    pub progress: bool,
    /// Worker pool size
    pub max_workers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_file: PathBuf::from("codebase_analysis.json"),
            json_only: false,
            exclude_dirs: DEFAULT_EXCLUDE_DIRS.iter().map(|s| s.to_string()).collect(),
            include_extensions: None,
            exclude_patterns: Vec::new(),
            respect_gitignore: true,
            parallel: true,
            progress: true,
            max_workers: default_workers(),
        }
    }
}

/// Default worker count: host concurrency plus a little headroom for
/// I/O-bound work, capped.
pub fn default_workers() -> usize {
    MAX_DEFAULT_WORKERS.min(num_cpus::get() + 4)
}

impl Config {
    /// Validate startup configuration. Fatal on a nonexistent root, a
    /// zero worker count, or an unparseable exclude pattern.
    pub fn validate(&self) -> Result<()> {
        if !self.root.exists() {
            return Err(CodetokError::PathNotFound(self.root.clone()));
        }
        if self.max_workers < 1 {
            return Err(CodetokError::InvalidWorkerCount(self.max_workers));
        }
        self.compiled_exclude_patterns()?;
        Ok(())
    }

    /// Compile the exclude globs, surfacing bad patterns as config errors.
    pub fn compiled_exclude_patterns(&self) -> Result<Vec<Pattern>> {
        self.exclude_patterns
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).map_err(|e| CodetokError::InvalidGlob {
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.parallel);
        assert!(config.respect_gitignore);
        assert!(config.exclude_dirs.contains("node_modules"));
        assert!(config.exclude_dirs.contains(".git"));
        assert!(config.max_workers >= 1 && config.max_workers <= 32);
        assert_eq!(config.output_file, PathBuf::from("codebase_analysis.json"));
    }

    #[test]
    fn test_validate_missing_root() {
        let config = Config {
            root: PathBuf::from("/nonexistent/path/for/codetok"),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CodetokError::PathNotFound(_))
        ));
    }

    #[test]
    fn test_validate_zero_workers() {
        let dir = tempdir().unwrap();
        let config = Config {
            root: dir.path().to_path_buf(),
            max_workers: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CodetokError::InvalidWorkerCount(0))
        ));
    }

    #[test]
    fn test_validate_bad_glob() {
        let dir = tempdir().unwrap();
        let config = Config {
            root: dir.path().to_path_buf(),
            exclude_patterns: vec!["[invalid".to_string()],
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CodetokError::InvalidGlob { .. })
        ));
    }

    #[test]
    fn test_validate_ok() {
        let dir = tempdir().unwrap();
        let config = Config {
            root: dir.path().to_path_buf(),
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }
}
