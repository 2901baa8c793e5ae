//! LLM token counting via the cl100k_base encoding.

use tiktoken_rs::CoreBPE;
use tracing::warn;

/// Name of the encoding, reported in the JSON output.
pub const TOKENIZER_NAME: &str = "cl100k_base";

/// Counts sub-word tokens with the cl100k_base encoding (GPT-4 /
/// GPT-3.5-turbo compatible).
///
/// Availability is decided once at construction for the whole run: if the
/// encoding cannot be loaded the counter is disabled and every count is 0.
/// The counter is read-only after construction and safe to share across
/// worker threads.
pub struct TokenCounter {
    bpe: Option<CoreBPE>,
}

impl TokenCounter {
    /// Load the encoding. On failure the counter degrades to always-zero;
    /// this is logged once, not per file.
    pub fn new() -> Self {
        match tiktoken_rs::cl100k_base() {
            Ok(bpe) => Self { bpe: Some(bpe) },
            Err(err) => {
                warn!(%err, "token encoding unavailable, token counting disabled");
                Self { bpe: None }
            }
        }
    }

    /// A counter that always returns 0, for environments without the
    /// encoding resource.
    pub fn disabled() -> Self {
        Self { bpe: None }
    }

    /// Whether the encoding loaded.
    pub fn is_enabled(&self) -> bool {
        self.bpe.is_some()
    }

    /// Count tokens in `content`. Deterministic for given text; 0 when
    /// the counter is disabled.
    pub fn count(&self, content: &str) -> u64 {
        match &self.bpe {
            Some(bpe) => bpe.encode_ordinary(content).len() as u64,
            None => 0,
        }
    }
}

impl Default for TokenCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_basic() {
        let counter = TokenCounter::new();
        if !counter.is_enabled() {
            return;
        }
        let count = counter.count("Hello, world!");
        assert!(count > 0 && count < 10);
        assert_eq!(counter.count(""), 0);
    }

    #[test]
    fn test_count_is_deterministic() {
        let counter = TokenCounter::new();
        let text = "fn main() { println!(\"hi\"); }";
        assert_eq!(counter.count(text), counter.count(text));
    }

    #[test]
    fn test_disabled_counter_returns_zero() {
        let counter = TokenCounter::disabled();
        assert!(!counter.is_enabled());
        assert_eq!(counter.count("some content"), 0);
    }
}
