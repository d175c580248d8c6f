//! The Nuevo compiler CLI.
//!
//! Provides the `nuevoc` command with the following subcommands:
//!
//! - `nuevoc tokenize <file>` - Scan a Nuevo source file and print its tokens
//!
//! Options:
//! - `--json` - Output tokens and diagnostics as JSON (one object per line)
//! - `--no-color` - Disable colorized output

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use nuevo_common::error::LexError;
use nuevo_common::span::LineIndex;
use nuevo_common::token::Token;
use nuevo_lexer::Tokenizer;

#[derive(Parser)]
#[command(name = "nuevoc", version, about = "The Nuevo compiler")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a Nuevo source file and print the resulting token stream
    Tokenize {
        /// Path to the source file
        file: PathBuf,

        /// Output tokens and diagnostics as JSON (one object per line) instead of human-readable format
        #[arg(long)]
        json: bool,

        /// Disable colorized output
        #[arg(long = "no-color")]
        no_color: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tokenize { file, json, no_color } => {
            if let Err(e) = tokenize_file(&file, json, no_color) {
                if json {
                    // In JSON mode, emit the final error as JSON too.
                    let msg = serde_json::json!({
                        "severity": "error",
                        "message": e
                    });
                    eprintln!("{}", msg);
                } else {
                    eprintln!("error: {}", e);
                }
                process::exit(1);
            }
        }
    }
}

/// Execute the tokenize pipeline: read the file, scan it, print the tokens.
fn tokenize_file(path: &Path, json: bool, no_color: bool) -> Result<(), String> {
    if !path.exists() {
        return Err(format!("Source file '{}' does not exist", path.display()));
    }

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>");
    eprintln!("Starting compilation of {}", file_name);

    let source = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?;

    let index = LineIndex::new(&source);
    match Tokenizer::tokenize(&source) {
        Ok(tokens) => {
            for token in &tokens {
                if json {
                    println!("{}", token_json(token, &index));
                } else {
                    println!("{}", render_token(token, &index));
                }
            }
            Ok(())
        }
        Err(error) => {
            report_error(&error, &source, path, &index, json, no_color);
            Err("Tokenization failed due to the error above.".to_string())
        }
    }
}

/// Human-readable one-line form of a token, e.g. `Identifier "precio" @ 1:1`.
fn render_token(token: &Token, index: &LineIndex) -> String {
    let (line, col) = index.line_col(token.span.start);
    if token.kind.is_literal() {
        format!("{:?} {:?} @ {}:{}", token.kind, token.text, line, col)
    } else {
        format!("{:?} @ {}:{}", token.kind, line, col)
    }
}

/// JSON object form of a token (one per line in `--json` mode).
fn token_json(token: &Token, index: &LineIndex) -> String {
    let (line, col) = index.line_col(token.span.start);
    serde_json::json!({
        "kind": &token.kind,
        "text": &token.text,
        "span": token.span,
        "line": line,
        "column": col
    })
    .to_string()
}

/// Report a scan failure.
///
/// When `json` is true, outputs one JSON object to stderr. Otherwise renders
/// a colorized (or colorless) source-anchored report.
fn report_error(
    error: &LexError,
    source: &str,
    path: &Path,
    index: &LineIndex,
    json: bool,
    no_color: bool,
) {
    let file_name = path.display().to_string();
    let (line, col) = index.line_col(error.span.start);
    let start = error.span.start as usize;
    let end = (error.span.end as usize).max(start + 1);

    if json {
        let json_diag = serde_json::json!({
            "code": "L0001",
            "severity": "error",
            "kind": &error.kind,
            "message": error.to_string(),
            "file": file_name,
            "span": error.span,
            "line": line,
            "column": col
        });
        eprintln!("{}", json_diag);
    } else {
        use ariadne::{Config, Label, Report, ReportKind, Source};
        let config = if no_color {
            Config::default().with_color(false)
        } else {
            Config::default()
        };
        let _ = Report::<std::ops::Range<usize>>::build(ReportKind::Error, start..end)
            .with_message(format!("{} at {}:{}", error, line, col))
            .with_config(config)
            .with_label(Label::new(start..end).with_message(error.to_string()))
            .finish()
            .eprint(Source::from(source));
    }
}
