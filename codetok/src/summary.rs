//! Console summary output.

use std::collections::BTreeMap;

use codetoklib::{Category, CategoryStats, TOKENIZER_NAME};
use console::Style;

/// Format a count with thousand separators.
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a byte count as a human-readable size.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    const GB: u64 = 1024 * 1024 * 1024;
    if bytes < KB {
        format!("{bytes} B")
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else if bytes < GB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    }
}

struct Styles {
    header: Style,
    section: Style,
    label: Style,
    value: Style,
    warning: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            header: Style::new().magenta().bold(),
            section: Style::new().blue().bold(),
            label: Style::new().cyan().bold(),
            value: Style::new().green(),
            warning: Style::new().yellow(),
        }
    }

    fn header(&self, icon: &str, text: &str) {
        let line = "\u{2550}".repeat(80);
        println!("\n{}", self.header.apply_to(&line));
        println!("{}", self.header.apply_to(format!("{icon} {}", text.to_uppercase())));
        println!("{}", self.header.apply_to(&line));
    }

    fn section(&self, icon: &str, text: &str) {
        let line = "\u{2500}".repeat(60);
        println!("\n{}", self.section.apply_to(&line));
        println!("{}", self.section.apply_to(format!("{icon} {text}")));
        println!("{}", self.section.apply_to(&line));
    }

    fn stat(&self, icon: &str, label: &str, value: &str) {
        println!(
            "  {} {}",
            self.label.apply_to(format!("{icon} {label}:")),
            self.value.apply_to(value)
        );
    }

    fn warning(&self, text: &str) {
        println!("{}", self.warning.apply_to(format!("\u{26a0}\u{fe0f} {text}")));
    }
}

/// Print the full console summary: token distribution first, then the
/// overall and per-category breakdowns.
pub fn print_summary(categories: &BTreeMap<Category, CategoryStats>) {
    let styles = Styles::new();
    print_token_analysis(&styles, categories);
    print_detailed_analysis(&styles, categories);
}

fn print_token_analysis(styles: &Styles, categories: &BTreeMap<Category, CategoryStats>) {
    styles.header("\u{1f524}", "Token Analysis Report");

    let total_tokens: u64 = categories.values().map(|c| c.total_tokens).sum();
    println!(
        "\u{2139}\u{fe0f} Tokenizer: {TOKENIZER_NAME} (GPT-4/GPT-3.5-turbo compatible)"
    );

    styles.section("\u{1f4c8}", "Token Distribution by Category");
    for stats in categories.values() {
        if stats.total_files == 0 {
            continue;
        }
        let percentage = if total_tokens > 0 {
            stats.total_tokens as f64 / total_tokens as f64 * 100.0
        } else {
            0.0
        };
        styles.stat(
            &stats.icon,
            &stats.name,
            &format!(
                "{} tokens ({percentage:.1}%)",
                format_number(stats.total_tokens)
            ),
        );
    }
}

fn print_detailed_analysis(styles: &Styles, categories: &BTreeMap<Category, CategoryStats>) {
    styles.header("\u{1f4ca}", "Detailed Category Analysis");

    let total_files: u64 = categories.values().map(|c| c.total_files).sum();
    let total_lines: u64 = categories.values().map(|c| c.total_lines).sum();
    let total_sloc: u64 = categories.values().map(|c| c.total_sloc).sum();
    let total_tokens: u64 = categories.values().map(|c| c.total_tokens).sum();
    let total_size: u64 = categories.values().map(|c| c.total_size_bytes).sum();

    styles.section("\u{1f3af}", "Overall Summary");
    styles.stat("\u{1f4c4}", "Total Files", &format_number(total_files));
    styles.stat("\u{1f4cf}", "Total Lines", &format_number(total_lines));
    styles.stat("\u{1f4bb}", "Source Lines (SLOC)", &format_number(total_sloc));
    styles.stat("\u{1f524}", "Total Tokens", &format_number(total_tokens));
    styles.stat("\u{1f4be}", "Total Size", &format_size(total_size));
    if total_lines > 0 {
        styles.stat(
            "\u{1f4c8}",
            "Average Tokens per Line",
            &format!("{:.2}", total_tokens as f64 / total_lines as f64),
        );
    }

    for stats in categories.values() {
        print_category(styles, stats);
    }
}

fn print_category(styles: &Styles, stats: &CategoryStats) {
    if stats.total_files == 0 {
        styles.warning(&format!("No {} found.", stats.name.to_lowercase()));
        return;
    }

    styles.section(&stats.icon, &stats.name.to_uppercase());

    styles.stat("\u{1f4c4}", "Total Files", &format_number(stats.total_files));
    styles.stat("\u{1f4cf}", "Total Lines", &format_number(stats.total_lines));
    styles.stat("\u{1f4bb}", "Source Lines (SLOC)", &format_number(stats.total_sloc));
    styles.stat("\u{1f4da}", "Comment Lines", &format_number(stats.total_comments));
    styles.stat("\u{1f4e6}", "Blank Lines", &format_number(stats.total_blank));
    styles.stat("\u{1f524}", "Total Tokens", &format_number(stats.total_tokens));
    styles.stat("\u{1f4be}", "Total Size", &format_size(stats.total_size_bytes));
    styles.stat(
        "\u{1f4c8}",
        "Avg Lines per File",
        &format!("{:.1}", stats.avg_lines_per_file()),
    );
    styles.stat(
        "\u{1f4c8}",
        "Avg Tokens per File",
        &format!("{:.1}", stats.avg_tokens_per_file()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    }
}
