//! Extension registry: category membership and language names.
//!
//! Three disjoint tables map lowercase dotted extensions to human-readable
//! language/format names. Their union doubles as the set of extensions
//! eligible for analysis. Lookup priority is fixed: code, then
//! documentation, then configuration; anything else is "other".

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Code file extensions and their language names.
pub const CODE_EXTENSIONS: &[(&str, &str)] = &[
    (".py", "Python"),
    (".js", "JavaScript"),
    (".jsx", "React JSX"),
    (".ts", "TypeScript"),
    (".tsx", "TypeScript JSX"),
    (".html", "HTML"),
    (".htm", "HTML"),
    (".css", "CSS"),
    (".scss", "SCSS"),
    (".java", "Java"),
    (".cpp", "C++"),
    (".c", "C"),
    (".h", "Header"),
    (".cs", "C#"),
    (".php", "PHP"),
    (".rb", "Ruby"),
    (".go", "Go"),
    (".rs", "Rust"),
    (".swift", "Swift"),
    (".kt", "Kotlin"),
    (".sql", "SQL"),
    (".sh", "Shell Script"),
];

/// Documentation file extensions and their format names.
pub const DOCUMENTATION_EXTENSIONS: &[(&str, &str)] = &[
    (".md", "Markdown"),
    (".txt", "Plain Text"),
    (".rst", "reStructuredText"),
    (".adoc", "AsciiDoc"),
    (".tex", "LaTeX"),
];

/// Configuration file extensions and their type names.
pub const CONFIG_EXTENSIONS: &[(&str, &str)] = &[
    (".json", "JSON"),
    (".yaml", "YAML"),
    (".yml", "YAML"),
    (".toml", "TOML"),
    (".ini", "INI"),
    (".xml", "XML"),
    (".env", "Environment"),
    (".gitignore", "Git Ignore"),
    (".dockerignore", "Docker Ignore"),
];

/// Single-line comment prefixes for the heuristic classification tier.
///
/// Extensions absent from this table have no recognized line-comment
/// syntax under the heuristic tier; their non-blank lines count as code
/// unless one of the special-cased prefixes applies.
const SINGLE_LINE_COMMENTS: &[(&str, &str)] = &[
    (".py", "#"),
    (".js", "//"),
    (".jsx", "//"),
    (".ts", "//"),
    (".tsx", "//"),
    (".java", "//"),
    (".cpp", "//"),
    (".c", "//"),
    (".h", "//"),
    (".cs", "//"),
    (".php", "//"),
    (".go", "//"),
    (".rs", "//"),
    (".swift", "//"),
    (".sql", "--"),
    (".sh", "#"),
];

/// One of the four fixed file categories.
///
/// Ordering matches the lookup priority and the report layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Source code
    Code,
    /// Prose documentation
    Documentation,
    /// Configuration and data files
    Config,
    /// Everything else
    Other,
}

impl Category {
    /// All categories in report order.
    pub const ALL: [Category; 4] = [
        Category::Code,
        Category::Documentation,
        Category::Config,
        Category::Other,
    ];

    /// Stable key used in the JSON report.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Code => "code",
            Category::Documentation => "documentation",
            Category::Config => "config",
            Category::Other => "other",
        }
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Code => "Code Files",
            Category::Documentation => "Documentation Files",
            Category::Config => "Configuration Files",
            Category::Other => "Other Files",
        }
    }

    /// Cosmetic icon for console output.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Code => "\u{1f4bb}",
            Category::Documentation => "\u{1f4da}",
            Category::Config => "\u{2699}\u{fe0f}",
            Category::Other => "\u{1f4e6}",
        }
    }
}

fn table_lookup(table: &[(&str, &'static str)], extension: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, name)| *name)
}

/// Categorize an extension, in fixed priority order.
pub fn category_of(extension: &str) -> Category {
    if table_lookup(CODE_EXTENSIONS, extension).is_some() {
        Category::Code
    } else if table_lookup(DOCUMENTATION_EXTENSIONS, extension).is_some() {
        Category::Documentation
    } else if table_lookup(CONFIG_EXTENSIONS, extension).is_some() {
        Category::Config
    } else {
        Category::Other
    }
}

/// Human-readable name for an extension, searching the three registries
/// in priority order. Unknown extensions fall back to the extension itself.
pub fn display_name(extension: &str) -> &str {
    table_lookup(CODE_EXTENSIONS, extension)
        .or_else(|| table_lookup(DOCUMENTATION_EXTENSIONS, extension))
        .or_else(|| table_lookup(CONFIG_EXTENSIONS, extension))
        .unwrap_or(extension)
}

/// Whether an extension is eligible for analysis (present in any registry).
pub fn is_supported(extension: &str) -> bool {
    category_of(extension) != Category::Other
}

/// Whether an extension belongs to the documentation registry.
pub fn is_documentation(extension: &str) -> bool {
    table_lookup(DOCUMENTATION_EXTENSIONS, extension).is_some()
}

/// Single-line comment prefix for the heuristic tier, if one is registered.
pub fn comment_prefix(extension: &str) -> Option<&'static str> {
    SINGLE_LINE_COMMENTS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, prefix)| *prefix)
}

/// All supported extensions across the three registries.
pub fn all_extensions() -> impl Iterator<Item = &'static str> {
    CODE_EXTENSIONS
        .iter()
        .chain(DOCUMENTATION_EXTENSIONS)
        .chain(CONFIG_EXTENSIONS)
        .map(|(ext, _)| *ext)
}

/// Derive the lowercase dotted extension from a file path.
///
/// Matches suffix semantics: the extension includes the leading dot,
/// dotfiles like `.gitignore` have no extension, and a name without a
/// dot (or ending in one) yields the empty string.
pub fn extension_of(path: &Path) -> String {
    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(n) => n,
        None => return String::new(),
    };
    match name.rfind('.') {
        Some(idx) if idx > 0 && idx < name.len() - 1 => name[idx..].to_lowercase(),
        _ => String::new(),
    }
}
