//! Core data structures for per-file and per-category statistics.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::registry::Category;

/// Statistics for a single analyzed file.
///
/// Created once by the stat collector and never mutated afterwards.
/// `lines_code + lines_comments + lines_blank == lines_total` except when
/// line-splitting and the lexer walk disagree at an unterminated final
/// line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path relative to the scan root
    pub path: PathBuf,
    /// Lowercase extension including the leading dot; empty if none
    pub extension: String,
    /// Total lines in the file
    pub lines_total: u64,
    /// Source lines of code (SLOC)
    pub lines_code: u64,
    /// Comment lines
    pub lines_comments: u64,
    /// Blank lines
    pub lines_blank: u64,
    /// Sub-word token count (0 when the tokenizer is unavailable)
    pub tokens: u64,
    /// File size in bytes
    pub size_bytes: u64,
}

impl FileRecord {
    /// Record for an unreadable file: every numeric field zero, the
    /// extension still derived from the name.
    pub fn zeroed(path: PathBuf, extension: String) -> Self {
        Self {
            path,
            extension,
            lines_total: 0,
            lines_code: 0,
            lines_comments: 0,
            lines_blank: 0,
            tokens: 0,
            size_bytes: 0,
        }
    }
}

/// Aggregated statistics for one category of files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
    /// Display name, e.g. "Code Files"
    pub name: String,
    /// Cosmetic icon for console output
    pub icon: String,
    /// Member records, in aggregation input order
    pub files: Vec<FileRecord>,
    pub total_files: u64,
    pub total_lines: u64,
    pub total_sloc: u64,
    pub total_comments: u64,
    pub total_blank: u64,
    pub total_tokens: u64,
    pub total_size_bytes: u64,
}

impl CategoryStats {
    /// Build stats for a category from its member records, summing every
    /// numeric field.
    pub fn new(category: Category, files: Vec<FileRecord>) -> Self {
        let mut stats = Self {
            name: category.display_name().to_string(),
            icon: category.icon().to_string(),
            total_files: files.len() as u64,
            total_lines: 0,
            total_sloc: 0,
            total_comments: 0,
            total_blank: 0,
            total_tokens: 0,
            total_size_bytes: 0,
            files,
        };
        for f in &stats.files {
            stats.total_lines += f.lines_total;
            stats.total_sloc += f.lines_code;
            stats.total_comments += f.lines_comments;
            stats.total_blank += f.lines_blank;
            stats.total_tokens += f.tokens;
            stats.total_size_bytes += f.size_bytes;
        }
        stats
    }

    /// Mean lines per file; 0 for an empty category.
    pub fn avg_lines_per_file(&self) -> f64 {
        if self.total_files > 0 {
            self.total_lines as f64 / self.total_files as f64
        } else {
            0.0
        }
    }

    /// Mean tokens per file; 0 for an empty category.
    pub fn avg_tokens_per_file(&self) -> f64 {
        if self.total_files > 0 {
            self.total_tokens as f64 / self.total_files as f64
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(ext: &str, lines: u64, tokens: u64) -> FileRecord {
        FileRecord {
            path: PathBuf::from(format!("f{ext}")),
            extension: ext.to_string(),
            lines_total: lines,
            lines_code: lines,
            lines_comments: 0,
            lines_blank: 0,
            tokens,
            size_bytes: lines * 10,
        }
    }

    #[test]
    fn test_zeroed_record() {
        let r = FileRecord::zeroed(PathBuf::from("locked.py"), ".py".to_string());
        assert_eq!(r.extension, ".py");
        assert_eq!(r.lines_total, 0);
        assert_eq!(r.tokens, 0);
        assert_eq!(r.size_bytes, 0);
    }

    #[test]
    fn test_category_stats_sums() {
        let stats = CategoryStats::new(
            Category::Code,
            vec![record(".py", 10, 40), record(".rs", 30, 160)],
        );
        assert_eq!(stats.total_files, 2);
        assert_eq!(stats.total_lines, 40);
        assert_eq!(stats.total_sloc, 40);
        assert_eq!(stats.total_tokens, 200);
        assert_eq!(stats.total_size_bytes, 400);
        assert_eq!(stats.avg_lines_per_file(), 20.0);
        assert_eq!(stats.avg_tokens_per_file(), 100.0);
    }

    #[test]
    fn test_empty_category_averages_are_zero() {
        let stats = CategoryStats::new(Category::Other, Vec::new());
        assert_eq!(stats.total_files, 0);
        assert_eq!(stats.avg_lines_per_file(), 0.0);
        assert_eq!(stats.avg_tokens_per_file(), 0.0);
    }
}
