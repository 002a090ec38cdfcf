//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Diary - Private journaling with local mood signals
#[derive(Parser)]
#[command(name = "diary")]
#[command(about = "Journal mood signals computed locally, no network calls", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Lexicon file to use instead of the override or built-in words
    ///
    /// By default the lexicon is read from the data directory
    /// (see `diary lexicon path`) and falls back to the built-in word lists.
    #[arg(long, global = true)]
    pub lexicon: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze the mood of a piece of text
    ///
    /// Text is taken from the argument, then --file, then stdin.
    Analyze {
        /// Text to analyze
        text: Option<String>,

        /// Read the text from a file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Analyze every note in a journal export (newest first)
    Notes {
        /// Journal export file (JSON array of notes)
        #[arg(short, long)]
        file: PathBuf,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Only analyze the N most recent notes
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Inspect the mood lexicon
    Lexicon {
        #[command(subcommand)]
        action: Option<LexiconAction>,
    },
}

#[derive(Subcommand)]
pub enum LexiconAction {
    /// List the active positive and stress words
    Show,
    /// Show the path where a lexicon override should be placed
    Path,
}
