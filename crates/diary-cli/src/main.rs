//! Diary CLI - Journal mood signals
//!
//! Usage:
//!   diary analyze "text"              Analyze a piece of text
//!   diary analyze --file entry.txt    Analyze a file (or pipe text on stdin)
//!   diary notes --file notes.json     Analyze every note in a journal export
//!   diary lexicon show                List the active lexicon

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Logs go to stderr so JSON output on stdout stays clean
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let lexicon = cli.lexicon.as_deref();

    match cli.command {
        Commands::Analyze { text, file, format } => {
            commands::cmd_analyze(lexicon, text, file.as_deref(), &format)
        }
        Commands::Notes {
            file,
            format,
            limit,
        } => commands::cmd_notes(lexicon, &file, &format, limit),
        Commands::Lexicon { action } => match action {
            None | Some(LexiconAction::Show) => commands::cmd_lexicon_show(lexicon),
            Some(LexiconAction::Path) => commands::cmd_lexicon_path(),
        },
    }
}
