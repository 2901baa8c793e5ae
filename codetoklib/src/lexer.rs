//! Comment-aware lexical tokenizer for the lexical classification tier.
//!
//! `tokenize` splits file content into a flat sequence of `(kind, text)`
//! tokens that cover the input verbatim: concatenating every token's text
//! reproduces the content exactly. The scanner only needs to tell comments
//! apart from everything else, so the grammar per language family is
//! deliberately small: line comments, block comments (nested for Rust),
//! string literals (so comment markers inside strings are not miscounted),
//! and Python triple-quoted strings.
//!
//! String tokens classify as code downstream: a docstring is a string
//! literal, not a comment.

use thiserror::Error;

/// Lexer failure for a single file. Recoverable: callers fall back to the
/// heuristic tier.
#[derive(Error, Debug)]
pub enum LexError {
    /// No lexer registered for this extension
    #[error("no lexer registered for extension '{0}'")]
    UnsupportedExtension(String),
}

/// Token classification, a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Line or block comment, including its delimiters
    Comment,
    /// String literal, including its quotes
    Str,
    /// Anything else: code, whitespace, punctuation
    Other,
}

/// One lexed token, borrowing from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

/// Comment and string syntax for one language family.
struct LexerSpec {
    line_comments: &'static [&'static str],
    block_comments: &'static [(&'static str, &'static str)],
    /// Block comments may nest (Rust)
    nested_blocks: bool,
    quotes: &'static [char],
    /// Triple-quoted strings (Python)
    triple_quotes: bool,
}

static C_FAMILY: LexerSpec = LexerSpec {
    line_comments: &["//"],
    block_comments: &[("/*", "*/")],
    nested_blocks: false,
    quotes: &['"', '\''],
    triple_quotes: false,
};

static RUST: LexerSpec = LexerSpec {
    line_comments: &["//"],
    block_comments: &[("/*", "*/")],
    nested_blocks: true,
    // Single quotes skipped: lifetimes would read as unterminated chars
    quotes: &['"'],
    triple_quotes: false,
};

static PYTHON: LexerSpec = LexerSpec {
    line_comments: &["#"],
    block_comments: &[],
    nested_blocks: false,
    quotes: &['"', '\''],
    triple_quotes: true,
};

static HASH_LINE: LexerSpec = LexerSpec {
    line_comments: &["#"],
    block_comments: &[],
    nested_blocks: false,
    quotes: &['"', '\''],
    triple_quotes: false,
};

static PHP: LexerSpec = LexerSpec {
    line_comments: &["//", "#"],
    block_comments: &[("/*", "*/")],
    nested_blocks: false,
    quotes: &['"', '\''],
    triple_quotes: false,
};

static SQL: LexerSpec = LexerSpec {
    line_comments: &["--"],
    block_comments: &[("/*", "*/")],
    nested_blocks: false,
    quotes: &['\''],
    triple_quotes: false,
};

static MARKUP: LexerSpec = LexerSpec {
    line_comments: &[],
    block_comments: &[("<!--", "-->")],
    nested_blocks: false,
    quotes: &[],
    triple_quotes: false,
};

static CSS: LexerSpec = LexerSpec {
    line_comments: &[],
    block_comments: &[("/*", "*/")],
    nested_blocks: false,
    quotes: &['"', '\''],
    triple_quotes: false,
};

static SCSS: LexerSpec = LexerSpec {
    line_comments: &["//"],
    block_comments: &[("/*", "*/")],
    nested_blocks: false,
    quotes: &['"', '\''],
    triple_quotes: false,
};

fn spec_for(extension: &str) -> Option<&'static LexerSpec> {
    match extension {
        ".js" | ".jsx" | ".ts" | ".tsx" | ".java" | ".cpp" | ".c" | ".h" | ".cs" | ".go"
        | ".swift" | ".kt" => Some(&C_FAMILY),
        ".rs" => Some(&RUST),
        ".py" => Some(&PYTHON),
        ".sh" | ".rb" => Some(&HASH_LINE),
        ".php" => Some(&PHP),
        ".sql" => Some(&SQL),
        ".html" | ".htm" => Some(&MARKUP),
        ".css" => Some(&CSS),
        ".scss" => Some(&SCSS),
        _ => None,
    }
}

/// Whether a lexer exists for this extension.
pub fn has_lexer(extension: &str) -> bool {
    spec_for(extension).is_some()
}

/// Tokenize content for the given extension.
///
/// The returned tokens cover the content verbatim and in document order.
pub fn tokenize<'a>(content: &'a str, extension: &str) -> Result<Vec<Token<'a>>, LexError> {
    let spec =
        spec_for(extension).ok_or_else(|| LexError::UnsupportedExtension(extension.to_string()))?;

    let mut tokens = Vec::new();
    let mut run_start = 0;
    let mut i = 0;

    while i < content.len() {
        let rest = &content[i..];

        if spec.triple_quotes {
            if let Some(delim) = ["\"\"\"", "'''"].iter().find(|d| rest.starts_with(**d)) {
                flush_run(content, &mut tokens, run_start, i);
                let end = scan_triple(content, i, delim);
                tokens.push(Token {
                    kind: TokenKind::Str,
                    text: &content[i..end],
                });
                i = end;
                run_start = i;
                continue;
            }
        }

        if spec.line_comments.iter().any(|p| rest.starts_with(p)) {
            flush_run(content, &mut tokens, run_start, i);
            let end = rest.find('\n').map_or(content.len(), |off| i + off);
            tokens.push(Token {
                kind: TokenKind::Comment,
                text: &content[i..end],
            });
            i = end;
            run_start = i;
            continue;
        }

        if let Some((open, close)) = spec
            .block_comments
            .iter()
            .find(|(open, _)| rest.starts_with(open))
        {
            flush_run(content, &mut tokens, run_start, i);
            let end = scan_block(content, i, open, close, spec.nested_blocks);
            tokens.push(Token {
                kind: TokenKind::Comment,
                text: &content[i..end],
            });
            i = end;
            run_start = i;
            continue;
        }

        // i < len and on a char boundary, so rest is non-empty
        let c = rest.chars().next().unwrap();
        if spec.quotes.contains(&c) {
            flush_run(content, &mut tokens, run_start, i);
            let end = scan_string(content, i, c);
            tokens.push(Token {
                kind: TokenKind::Str,
                text: &content[i..end],
            });
            i = end;
            run_start = i;
            continue;
        }

        i += c.len_utf8();
    }

    flush_run(content, &mut tokens, run_start, content.len());
    Ok(tokens)
}

fn flush_run<'a>(content: &'a str, tokens: &mut Vec<Token<'a>>, start: usize, end: usize) {
    if start < end {
        tokens.push(Token {
            kind: TokenKind::Other,
            text: &content[start..end],
        });
    }
}

/// Consume a triple-quoted string starting at `start`. Unterminated
/// strings run to end of input.
fn scan_triple(content: &str, start: usize, delim: &str) -> usize {
    let body = start + delim.len();
    match content[body..].find(delim) {
        Some(off) => body + off + delim.len(),
        None => content.len(),
    }
}

/// Consume a block comment starting at `start`, honoring nesting when
/// enabled. Unterminated comments run to end of input.
fn scan_block(content: &str, start: usize, open: &str, close: &str, nested: bool) -> usize {
    let mut i = start + open.len();
    let mut depth = 1;
    while i < content.len() {
        let rest = &content[i..];
        if rest.starts_with(close) {
            depth -= 1;
            i += close.len();
            if depth == 0 {
                return i;
            }
        } else if nested && rest.starts_with(open) {
            depth += 1;
            i += open.len();
        } else {
            i += rest.chars().next().map_or(1, |c| c.len_utf8());
        }
    }
    content.len()
}

/// Consume a string literal starting at the opening quote. Backslash
/// escapes are honored; an unterminated string ends at the newline so a
/// stray quote cannot swallow the rest of the file.
fn scan_string(content: &str, start: usize, quote: char) -> usize {
    let mut chars = content[start..].char_indices().skip(1);
    while let Some((off, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '\n' => return start + off,
            c if c == quote => return start + off + c.len_utf8(),
            _ => {}
        }
    }
    content.len()
}
