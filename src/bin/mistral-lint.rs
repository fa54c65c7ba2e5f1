use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

use mistral_lint::{Diagnostic, validate_document};

const EXTENSIONS: [&str; 3] = ["yaml", "yml", "mistral"];

#[derive(Parser)]
#[command(name = "mistral-lint")]
#[command(about = "Lint Mistral v2 workflow definitions and their YAQL expressions", long_about = None)]
struct Cli {
    /// Files or directories to lint (directories are scanned one level deep)
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Only report files with errors
    #[arg(short, long)]
    strict: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Debug logging when RUST_LOG is unset
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// JSON output entry for `--format json`
#[derive(Serialize)]
struct FileReport {
    file: String,
    diagnostics: Vec<Diagnostic>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut failed = false;
    let mut files = Vec::new();
    for path in &cli.paths {
        if !path.exists() {
            eprintln!("File not found: {}", path.display());
            failed = true;
            continue;
        }
        files.extend(collect_files(path));
    }
    debug!(count = files.len(), "collected files");

    let mut reports = Vec::new();
    for file in files {
        let text = match std::fs::read_to_string(&file)
            .with_context(|| format!("Failed to read {}", file.display()))
        {
            Ok(text) => text,
            Err(e) => {
                eprintln!("{:#}", e);
                failed = true;
                continue;
            }
        };
        let diagnostics = validate_document(&text);
        failed |= !diagnostics.is_empty();

        if cli.format == Format::Text {
            print_text(&file, &diagnostics, cli.strict);
        }
        reports.push(FileReport {
            file: file.display().to_string(),
            diagnostics,
        });
    }

    if cli.format == Format::Json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

/// A file as given, or the matching files directly inside a directory.
fn collect_files(path: &Path) -> Vec<PathBuf> {
    if !path.is_dir() {
        return vec![path.to_path_buf()];
    }
    WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && has_lint_extension(entry.path()))
        .map(|entry| entry.into_path())
        .collect()
}

fn has_lint_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

fn print_text(file: &Path, diagnostics: &[Diagnostic], strict: bool) {
    if diagnostics.is_empty() {
        if !strict {
            println!("✔ {} OK", file.display());
        }
        return;
    }

    eprintln!("✖ {} - {} error(s)", file.display(), diagnostics.len());
    for d in diagnostics {
        eprintln!("  [{}] {}", d.start(), d.message());
    }
}
