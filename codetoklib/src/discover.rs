//! File discovery: directory walk with exclusion and eligibility filters.

use std::path::PathBuf;

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use walkdir::WalkDir;

use crate::config::Config;
use crate::registry;
use crate::Result;

/// Discover the files eligible for analysis under the configured root.
///
/// Skips excluded directories entirely, honors the root `.gitignore` when
/// configured, applies the include-extension and exclude-pattern filters,
/// and keeps only extensions present in the registry. The result is
/// sorted for deterministic output.
pub fn discover_files(config: &Config) -> Result<Vec<PathBuf>> {
    let exclude_patterns = config.compiled_exclude_patterns()?;
    let gitignore = if config.respect_gitignore {
        load_gitignore(config)
    } else {
        None
    };

    let mut files = Vec::new();

    let walker = WalkDir::new(&config.root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            if entry.file_type().is_dir() {
                let name = entry.file_name().to_str().unwrap_or("");
                return !config.exclude_dirs.contains(name);
            }
            true
        });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();

        if let Some(gitignore) = &gitignore {
            let relative = path.strip_prefix(&config.root).unwrap_or(path);
            if gitignore.matched(relative, false).is_ignore() {
                continue;
            }
        }

        let extension = registry::extension_of(path);
        if let Some(include) = &config.include_extensions {
            if !include.contains(&extension) {
                continue;
            }
        }

        let name = entry.file_name().to_str().unwrap_or("");
        if exclude_patterns.iter().any(|p| p.matches(name)) {
            continue;
        }

        if registry::is_supported(&extension) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

/// Load the root-level .gitignore, if present.
fn load_gitignore(config: &Config) -> Option<Gitignore> {
    let path = config.root.join(".gitignore");
    if !path.exists() {
        return None;
    }
    let mut builder = GitignoreBuilder::new(&config.root);
    builder.add(path);
    builder.build().ok()
}
