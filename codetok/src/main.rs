//! # codetok
//!
//! A CLI tool for analyzing a codebase's size in lines and LLM tokens.
//!
//! ## Overview
//!
//! codetok is built on top of codetoklib and provides a command-line
//! interface for codebase analysis. Every eligible file is classified
//! into code, comment, and blank lines, token-counted with the
//! `cl100k_base` encoding, and grouped into one of four categories
//! (code, documentation, configuration, other). Results go to a console
//! summary and a JSON report file.
//!
//! ## Usage
//!
//! ```bash
//! # Analyze the current directory
//! codetok
//!
//! # Analyze a specific directory with a custom report path
//! codetok --path /path/to/project --output report.json
//!
//! # Only write the JSON report
//! codetok --json-only
//!
//! # Restrict to certain extensions, exclude test files
//! codetok --include-extensions .py --include-extensions .js \
//!         --exclude-patterns "*test*"
//!
//! # Limit worker count or disable parallelism entirely
//! codetok --max-workers 4
//! codetok --no-parallel
//! ```

mod summary;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use codetoklib::{default_workers, Analyzer, Config, Report};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("codetok")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Analyze a codebase for SLOC, comments, blank lines, and LLM tokens")
        .arg(
            Arg::new("path")
                .short('p')
                .long("path")
                .default_value(".")
                .help("Path to the root of the codebase"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .default_value("codebase_analysis.json")
                .help("Output JSON file for the detailed report"),
        )
        .arg(
            Arg::new("json-only")
                .long("json-only")
                .action(ArgAction::SetTrue)
                .help("Only write the JSON report, suppress the console summary"),
        )
        .arg(
            Arg::new("include-extensions")
                .long("include-extensions")
                .action(ArgAction::Append)
                .help("Only include files with these extensions (e.g. .py .js)"),
        )
        .arg(
            Arg::new("exclude-patterns")
                .long("exclude-patterns")
                .action(ArgAction::Append)
                .help("Exclude files matching these glob patterns (e.g. *test*)"),
        )
        .arg(
            Arg::new("no-gitignore")
                .long("no-gitignore")
                .action(ArgAction::SetTrue)
                .help("Do not honor the root .gitignore during discovery"),
        )
        .arg(
            Arg::new("no-parallel")
                .long("no-parallel")
                .action(ArgAction::SetTrue)
                .help("Disable parallel processing"),
        )
        .arg(
            Arg::new("no-progress")
                .long("no-progress")
                .action(ArgAction::SetTrue)
                .help("Disable progress messages"),
        )
        .arg(
            Arg::new("max-workers")
                .long("max-workers")
                .value_parser(clap::value_parser!(usize))
                .help("Maximum number of parallel workers (default: system-dependent)"),
        )
}

/// Build the analysis config from parsed arguments
fn build_config(matches: &ArgMatches) -> Config {
    let include_extensions = matches
        .get_many::<String>("include-extensions")
        .map(|values| values.map(|e| normalize_extension(e)).collect());

    let exclude_patterns = matches
        .get_many::<String>("exclude-patterns")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    Config {
        root: PathBuf::from(matches.get_one::<String>("path").map(String::as_str).unwrap_or(".")),
        output_file: PathBuf::from(
            matches
                .get_one::<String>("output")
                .map(String::as_str)
                .unwrap_or("codebase_analysis.json"),
        ),
        json_only: matches.get_flag("json-only"),
        include_extensions,
        exclude_patterns,
        respect_gitignore: !matches.get_flag("no-gitignore"),
        parallel: !matches.get_flag("no-parallel"),
        progress: !matches.get_flag("no-progress"),
        max_workers: matches
            .get_one::<usize>("max-workers")
            .copied()
            .unwrap_or_else(default_workers),
        ..Config::default()
    }
}

/// Extensions on the command line may come with or without the dot.
fn normalize_extension(ext: &str) -> String {
    let ext = ext.to_lowercase();
    if ext.starts_with('.') {
        ext
    } else {
        format!(".{ext}")
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let config = build_config(matches);
    let analyzer = Analyzer::new(config)?;
    let categories = analyzer.analyze()?;

    if !analyzer.config().json_only {
        summary::print_summary(&categories);
    }

    let report = Report::build(&categories, analyzer.config());
    report.write(&analyzer.config().output_file)?;
    println!(
        "Report saved to {}",
        analyzer.config().output_file.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = build_command().get_matches();
    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
