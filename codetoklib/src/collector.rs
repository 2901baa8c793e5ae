//! Per-file stat collection: read, classify, tokenize, measure.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::classify;
use crate::registry;
use crate::stats::FileRecord;
use crate::tokens::TokenCounter;

/// Collect statistics for one file. Never fails: any read error produces
/// a zeroed record (extension still derived from the name) and a warning.
pub fn collect(path: &Path, root: &Path, counter: &TokenCounter) -> FileRecord {
    let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();
    let extension = registry::extension_of(path);

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(path = %path.display(), %err, "failed to read file");
            return FileRecord::zeroed(relative, extension);
        }
    };

    let size_bytes = bytes.len() as u64;
    let content = decode(bytes);

    let lines_total = count_lines(&content);
    let breakdown = classify::classify_lines(&content, &extension);
    let tokens = counter.count(&content);

    FileRecord {
        path: relative,
        extension,
        lines_total,
        lines_code: breakdown.code,
        lines_comments: breakdown.comments,
        lines_blank: breakdown.blank,
        tokens,
        size_bytes,
    }
}

/// Decode file bytes as text: UTF-8 first, Latin-1 as the fallback.
/// Latin-1 maps every byte, so decoding never aborts.
fn decode(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err.into_bytes().iter().map(|&b| b as char).collect(),
    }
}

/// Count newline-delimited segments. A trailing newline does not produce
/// an extra empty segment: `"a\nb"` and `"a\nb\n"` are both 2 lines.
fn count_lines(content: &str) -> u64 {
    content.lines().count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn collect_at(dir: &Path, name: &str, contents: &[u8]) -> FileRecord {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        collect(&path, dir, &TokenCounter::disabled())
    }

    #[test]
    fn test_empty_file() {
        let dir = tempdir().unwrap();
        let record = collect_at(dir.path(), "empty.py", b"");

        assert_eq!(record.extension, ".py");
        assert_eq!(record.lines_total, 0);
        assert_eq!(record.lines_code, 0);
        assert_eq!(record.lines_comments, 0);
        assert_eq!(record.lines_blank, 0);
        assert_eq!(record.tokens, 0);
        assert_eq!(record.size_bytes, 0);
    }

    #[test]
    fn test_python_file() {
        let dir = tempdir().unwrap();
        let record = collect_at(dir.path(), "hello.py", b"# comment\nprint('hi')\n");

        assert_eq!(record.lines_total, 2);
        assert_eq!(record.lines_code, 1);
        assert_eq!(record.lines_comments, 1);
        assert_eq!(record.lines_blank, 0);
        assert_eq!(record.size_bytes, 22);
        assert_eq!(record.path, Path::new("hello.py"));
    }

    #[test]
    fn test_line_count_trailing_newline_semantics() {
        let dir = tempdir().unwrap();
        let with = collect_at(dir.path(), "a.txt", b"a\nb\n");
        let without = collect_at(dir.path(), "b.txt", b"a\nb");
        assert_eq!(with.lines_total, 2);
        assert_eq!(without.lines_total, 2);
    }

    #[test]
    fn test_latin1_fallback() {
        let dir = tempdir().unwrap();
        // "café" in Latin-1: 0xe9 is not valid UTF-8
        let record = collect_at(dir.path(), "note.txt", b" caf\xe9 ");

        assert_eq!(record.lines_total, 1);
        assert_eq!(record.lines_code, 1);
        assert_eq!(record.size_bytes, 6);
    }

    #[test]
    fn test_missing_file_yields_zeroed_record() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gone.py");
        let record = collect(&path, dir.path(), &TokenCounter::disabled());

        assert_eq!(record.extension, ".py");
        assert_eq!(record.lines_total, 0);
        assert_eq!(record.lines_code, 0);
        assert_eq!(record.tokens, 0);
        assert_eq!(record.size_bytes, 0);
        assert_eq!(record.path, Path::new("gone.py"));
    }

    #[test]
    fn test_record_invariant_holds() {
        let dir = tempdir().unwrap();
        let record = collect_at(
            dir.path(),
            "mixed.rs",
            b"// header\n\nfn main() {\n    // inner\n}\n",
        );
        assert_eq!(
            record.lines_code + record.lines_comments + record.lines_blank,
            record.lines_total
        );
    }
}
