//! Analysis pipeline: discover, collect, aggregate.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{info, warn};

use crate::aggregate;
use crate::collector;
use crate::config::Config;
use crate::discover;
use crate::error::CodetokError;
use crate::registry::Category;
use crate::stats::{CategoryStats, FileRecord};
use crate::tokens::TokenCounter;
use crate::Result;

/// Drives a full analysis run over one root directory.
pub struct Analyzer {
    config: Config,
    counter: TokenCounter,
}

impl Analyzer {
    /// Build an analyzer, validating configuration up front. Construction
    /// fails only on bad configuration; a missing token encoding degrades
    /// to zero counts.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let counter = TokenCounter::new();
        if !counter.is_enabled() {
            warn!("token counts will be reported as 0 for this run");
        }
        Ok(Self { config, counter })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the pipeline: discover eligible files, collect per-file stats,
    /// and aggregate into the four fixed categories.
    pub fn analyze(&self) -> Result<BTreeMap<Category, CategoryStats>> {
        info!(root = %self.config.root.display(), "starting analysis");
        let files = discover::discover_files(&self.config)?;
        info!(files = files.len(), "discovered files to analyze");

        let records = self.process(&files)?;
        Ok(aggregate::aggregate(records))
    }

    /// Collect stats for every discovered file, in input order.
    ///
    /// Parallel and sequential modes produce identical results: workers
    /// only vary wall-clock time, never output.
    fn process(&self, files: &[PathBuf]) -> Result<Vec<FileRecord>> {
        if self.config.parallel && files.len() > 1 {
            self.process_parallel(files)
        } else {
            Ok(self.process_sequential(files))
        }
    }

    fn process_sequential(&self, files: &[PathBuf]) -> Vec<FileRecord> {
        let mut records = Vec::with_capacity(files.len());
        for (i, path) in files.iter().enumerate() {
            records.push(collector::collect(path, &self.config.root, &self.counter));
            if self.config.progress && (i + 1) % 10 == 0 {
                info!(processed = i + 1, total = files.len(), "progress");
            }
        }
        records
    }

    fn process_parallel(&self, files: &[PathBuf]) -> Result<Vec<FileRecord>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.max_workers)
            .build()
            .map_err(|e| CodetokError::WorkerPool(e.to_string()))?;

        let root: &Path = &self.config.root;
        let counter = &self.counter;
        let records = pool.install(|| {
            files
                .par_iter()
                .map(|path| collector::collect(path, root, counter))
                .collect()
        });
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn seed_tree(root: &Path) {
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("src/main.py"), "# entry\nprint('hi')\n\n").unwrap();
        fs::write(root.join("src/util.rs"), "fn x() {}\n// helper\n").unwrap();
        fs::write(root.join("README.md"), "# Readme\n\nwords\n").unwrap();
        fs::write(root.join("config.toml"), "[pkg]\nname = \"x\"\n").unwrap();
        fs::write(root.join("blob.bin"), "ignored\n").unwrap();
    }

    fn analyzer_for(root: &Path, parallel: bool) -> Analyzer {
        let config = Config {
            root: root.to_path_buf(),
            parallel,
            progress: false,
            ..Config::default()
        };
        Analyzer::new(config).unwrap()
    }

    #[test]
    fn test_analyze_categorizes_files() {
        let dir = tempdir().unwrap();
        seed_tree(dir.path());

        let categories = analyzer_for(dir.path(), false).analyze().unwrap();
        assert_eq!(categories[&Category::Code].total_files, 2);
        assert_eq!(categories[&Category::Documentation].total_files, 1);
        assert_eq!(categories[&Category::Config].total_files, 1);
        assert_eq!(categories[&Category::Other].total_files, 0);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let dir = tempdir().unwrap();
        seed_tree(dir.path());
        for i in 0..20 {
            fs::write(
                dir.path().join(format!("gen{i}.py")),
                format!("# file {i}\nvalue = {i}\n"),
            )
            .unwrap();
        }

        let sequential = analyzer_for(dir.path(), false).analyze().unwrap();
        let parallel = analyzer_for(dir.path(), true).analyze().unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let config = Config {
            root: PathBuf::from("/nonexistent/codetok/root"),
            ..Config::default()
        };
        assert!(matches!(
            Analyzer::new(config),
            Err(CodetokError::PathNotFound(_))
        ));
    }

    #[test]
    fn test_empty_root_yields_empty_categories() {
        let dir = tempdir().unwrap();
        let categories = analyzer_for(dir.path(), true).analyze().unwrap();
        assert_eq!(categories.len(), 4);
        for stats in categories.values() {
            assert_eq!(stats.total_files, 0);
        }
    }
}
