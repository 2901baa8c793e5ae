//! Error types for codetoklib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during codebase analysis.
///
/// Per-file problems (unreadable files, lexer hiccups) are recovered
/// inside the pipeline and never surface here; only startup-time
/// configuration problems abort a run.
#[derive(Error, Debug)]
pub enum CodetokError {
    /// Analysis root does not exist
    #[error("analysis path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Worker count must be at least 1
    #[error("max_workers must be at least 1, got {0}")]
    InvalidWorkerCount(usize),

    /// Failed to build the worker pool
    #[error("failed to build worker pool: {0}")]
    WorkerPool(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
