//! JSON report assembly and serialization.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::registry::{self, Category};
use crate::stats::CategoryStats;
use crate::tokens::TOKENIZER_NAME;
use crate::Result;

/// Full analysis report, serialized as the JSON output file.
#[derive(Debug, Serialize, Deserialize)]
pub struct Report {
    /// Local time of report creation, RFC 3339
    pub timestamp: String,
    pub analysis_info: AnalysisInfo,
    pub summary: Summary,
    /// Keyed by stable category key, in category order
    pub categories: BTreeMap<String, CategoryReport>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisInfo {
    pub tokenizer: String,
    pub excluded_directories: Vec<String>,
}

/// Whole-run totals across every category.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total_files: u64,
    pub total_lines: u64,
    pub total_sloc: u64,
    pub total_comments: u64,
    pub total_blank: u64,
    pub total_tokens: u64,
    pub total_size_bytes: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryReport {
    pub icon: String,
    pub total_files: u64,
    pub total_lines: u64,
    pub total_sloc: u64,
    pub total_comments: u64,
    pub total_blank: u64,
    pub total_tokens: u64,
    pub total_size_bytes: u64,
    pub avg_lines_per_file: f64,
    pub avg_tokens_per_file: f64,
    pub extension_breakdown: BTreeMap<String, ExtensionBreakdown>,
    pub files: Vec<FileEntry>,
}

/// Per-extension rollup within a category.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtensionBreakdown {
    pub name: String,
    pub files: u64,
    pub lines: u64,
    pub tokens: u64,
    pub size_bytes: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: String,
    pub extension: String,
    pub extension_name: String,
    pub lines_total: u64,
    pub lines_code: u64,
    pub lines_comments: u64,
    pub lines_blank: u64,
    pub tokens: u64,
    pub size_bytes: u64,
}

impl Report {
    /// Assemble the report from aggregated category stats.
    pub fn build(categories: &BTreeMap<Category, CategoryStats>, config: &Config) -> Self {
        let mut summary = Summary::default();
        for stats in categories.values() {
            summary.total_files += stats.total_files;
            summary.total_lines += stats.total_lines;
            summary.total_sloc += stats.total_sloc;
            summary.total_comments += stats.total_comments;
            summary.total_blank += stats.total_blank;
            summary.total_tokens += stats.total_tokens;
            summary.total_size_bytes += stats.total_size_bytes;
        }

        let category_reports = categories
            .iter()
            .map(|(category, stats)| (category.key().to_string(), category_report(stats)))
            .collect();

        Self {
            timestamp: chrono::Local::now().to_rfc3339(),
            analysis_info: AnalysisInfo {
                tokenizer: TOKENIZER_NAME.to_string(),
                excluded_directories: config.exclude_dirs.iter().cloned().collect(),
            },
            summary,
            categories: category_reports,
        }
    }

    /// Serialize to pretty-printed JSON and write it to `output_file`.
    pub fn write(&self, output_file: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        fs::write(output_file, json)?;
        Ok(())
    }
}

fn category_report(stats: &CategoryStats) -> CategoryReport {
    let mut breakdown: BTreeMap<String, ExtensionBreakdown> = BTreeMap::new();
    for file in &stats.files {
        let entry = breakdown
            .entry(file.extension.clone())
            .or_insert_with(|| ExtensionBreakdown {
                name: registry::display_name(&file.extension).to_string(),
                files: 0,
                lines: 0,
                tokens: 0,
                size_bytes: 0,
            });
        entry.files += 1;
        entry.lines += file.lines_total;
        entry.tokens += file.tokens;
        entry.size_bytes += file.size_bytes;
    }

    CategoryReport {
        icon: stats.icon.clone(),
        total_files: stats.total_files,
        total_lines: stats.total_lines,
        total_sloc: stats.total_sloc,
        total_comments: stats.total_comments,
        total_blank: stats.total_blank,
        total_tokens: stats.total_tokens,
        total_size_bytes: stats.total_size_bytes,
        avg_lines_per_file: stats.avg_lines_per_file(),
        avg_tokens_per_file: stats.avg_tokens_per_file(),
        extension_breakdown: breakdown,
        files: stats
            .files
            .iter()
            .map(|f| FileEntry {
                path: f.path.display().to_string(),
                extension: f.extension.clone(),
                extension_name: registry::display_name(&f.extension).to_string(),
                lines_total: f.lines_total,
                lines_code: f.lines_code,
                lines_comments: f.lines_comments,
                lines_blank: f.lines_blank,
                tokens: f.tokens,
                size_bytes: f.size_bytes,
            })
            .collect(),
    }
}
