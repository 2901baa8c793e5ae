//! Line classification: code / comment / blank counts for one file.
//!
//! Two tiers. The lexical tier walks a token stream from [`crate::lexer`]
//! and assigns one classification per physical line; it is used whenever a
//! lexer exists for the extension. The heuristic tier is a per-line prefix
//! check used for everything else and as the fallback when lexing fails.
//!
//! The heuristic tier never tracks multi-line comment state: only the
//! opening line of a `/* ... */` block matches the prefix rules, so the
//! interior lines of such a block count as code. This is a known,
//! deliberately preserved limitation; downstream consumers depend on the
//! resulting counts.

use std::collections::HashMap;

use tracing::warn;

use crate::lexer::{self, LexError, TokenKind};
use crate::registry;

/// Per-file line classification counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineBreakdown {
    /// Source lines of code
    pub code: u64,
    /// Comment lines
    pub comments: u64,
    /// Whitespace-only lines
    pub blank: u64,
}

/// Which classification tier to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strategy {
    Lexical,
    Heuristic,
}

/// Pick a tier from the extension and the lexical capability flag.
fn select_strategy(extension: &str, lexical_enabled: bool) -> Strategy {
    if lexical_enabled && lexer::has_lexer(extension) {
        Strategy::Lexical
    } else {
        Strategy::Heuristic
    }
}

/// Classify content into code/comment/blank line counts.
///
/// Pure: the same content and extension always produce the same counts.
pub fn classify_lines(content: &str, extension: &str) -> LineBreakdown {
    classify_lines_with(content, extension, true)
}

/// Classify with the lexical tier explicitly enabled or disabled.
///
/// Disabling the lexical tier models an environment without the tokenizing
/// capability; the heuristic tier alone still produces a valid triple.
pub fn classify_lines_with(content: &str, extension: &str, lexical_enabled: bool) -> LineBreakdown {
    match select_strategy(extension, lexical_enabled) {
        Strategy::Lexical => match classify_lexical(content, extension) {
            Ok(breakdown) => breakdown,
            Err(err) => {
                warn!(extension, %err, "lexer failed, falling back to heuristic detection");
                classify_heuristic(content, extension)
            }
        },
        Strategy::Heuristic => classify_heuristic(content, extension),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Code,
    Comment,
    Blank,
}

/// Lexical tier: walk the token stream and classify each physical line.
///
/// A token's text may span several lines; each line portion is judged on
/// its own. Non-blank portions overwrite earlier classifications for the
/// same line (last token wins), blank portions only fill lines nothing
/// else claimed. Lines in the raw line count that the walk never visited
/// are counted as blank.
fn classify_lexical(content: &str, extension: &str) -> Result<LineBreakdown, LexError> {
    let tokens = lexer::tokenize(content, extension)?;
    let raw_lines = content.lines().count();

    let mut line_kinds: HashMap<usize, LineKind> = HashMap::new();
    let mut current_line = 1usize;

    for token in &tokens {
        for part in token.text.split_inclusive('\n') {
            let stripped = part.trim();
            if stripped.is_empty() {
                line_kinds.entry(current_line).or_insert(LineKind::Blank);
            } else if token.kind == TokenKind::Comment {
                line_kinds.insert(current_line, LineKind::Comment);
            } else {
                line_kinds.insert(current_line, LineKind::Code);
            }
            if part.ends_with('\n') {
                current_line += 1;
            }
        }
    }

    let mut breakdown = LineBreakdown::default();
    for kind in line_kinds.values() {
        match kind {
            LineKind::Code => breakdown.code += 1,
            LineKind::Comment => breakdown.comments += 1,
            LineKind::Blank => breakdown.blank += 1,
        }
    }

    // Lines the token walk never reached count as blank, clamped at zero.
    let blank = breakdown.blank as i64 + raw_lines as i64 - line_kinds.len() as i64;
    breakdown.blank = blank.max(0) as u64;

    Ok(breakdown)
}

/// Heuristic tier: fixed prefix rules per extension, one line at a time.
fn classify_heuristic(content: &str, extension: &str) -> LineBreakdown {
    let mut breakdown = LineBreakdown::default();
    let prefix = registry::comment_prefix(extension);

    for line in content.lines() {
        let stripped = line.trim();

        if stripped.is_empty() {
            breakdown.blank += 1;
        } else if prefix.is_some_and(|p| stripped.starts_with(p)) {
            breakdown.comments += 1;
        } else if extension == ".py"
            && (stripped.starts_with("\"\"\"") || stripped.starts_with("'''"))
        {
            breakdown.comments += 1;
        } else if matches!(extension, ".html" | ".htm" | ".xml") && stripped.starts_with("<!--") {
            breakdown.comments += 1;
        } else if matches!(extension, ".css" | ".scss") && stripped.starts_with("/*") {
            breakdown.comments += 1;
        } else {
            // Documentation formats have no comment concept; prose is code.
            breakdown.code += 1;
        }
    }

    breakdown
}
