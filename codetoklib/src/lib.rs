//! # codetoklib
//!
//! A codebase analysis library that counts lines of code and LLM tokens.
//!
//! ## Overview
//!
//! Unlike plain LOC counters, this library also measures how "big" a
//! codebase is to a large language model: every analyzed file gets a
//! sub-word token count using the `cl100k_base` encoding (GPT-4 /
//! GPT-3.5-turbo compatible) alongside the usual line breakdown:
//!
//! - **Code**: Source lines of code (SLOC)
//! - **Comments**: Comment lines
//! - **Blank**: Whitespace-only lines
//!
//! Files are grouped into four fixed categories (code, documentation,
//! configuration, other) by extension, and per-category totals feed both
//! the console summary and the JSON report.
//!
//! ## Features
//!
//! - **Two-tier line classification**: A lexical tokenizer for languages
//!   with a registered lexer, and a comment-prefix heuristic for the rest
//! - **Token counting**: Deterministic `cl100k_base` counts per file
//! - **Parallel processing**: Worker-pool file processing with identical
//!   output to the sequential path
//! - **Filtering**: Excluded directory names, root `.gitignore`,
//!   include-extension and glob exclude filters
//!
//! ## Example
//!
//! ```rust
//! use codetoklib::{Analyzer, Config};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // Set up a temporary project
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("main.py"), "# entry\nprint('hi')\n").unwrap();
//! fs::write(dir.path().join("README.md"), "# My project\n").unwrap();
//!
//! let config = Config {
//!     root: dir.path().to_path_buf(),
//!     ..Config::default()
//! };
//! let analyzer = Analyzer::new(config).unwrap();
//! let categories = analyzer.analyze().unwrap();
//!
//! use codetoklib::Category;
//! assert_eq!(categories[&Category::Code].total_files, 1);
//! assert_eq!(categories[&Category::Documentation].total_files, 1);
//! ```

pub mod aggregate;
pub mod analyzer;
pub mod classify;
pub mod collector;
pub mod config;
pub mod discover;
pub mod error;
pub mod lexer;
pub mod registry;
pub mod report;
pub mod stats;
pub mod tokens;

pub use aggregate::aggregate;
pub use analyzer::Analyzer;
pub use classify::{classify_lines, classify_lines_with, LineBreakdown};
pub use collector::collect;
pub use config::{default_workers, Config};
pub use discover::discover_files;
pub use error::CodetokError;
pub use registry::{category_of, display_name, extension_of, Category};
pub use report::{Report, Summary};
pub use stats::{CategoryStats, FileRecord};
pub use tokens::{TokenCounter, TOKENIZER_NAME};

/// Result type for codetoklib operations
pub type Result<T> = std::result::Result<T, CodetokError>;
