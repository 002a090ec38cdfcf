//! Shared command utilities
//!
//! This module contains:
//! - `load_analyzer` - Build the mood analyzer from the active lexicon
//! - `OutputFormat` - Parsed `--format` value

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use diary_core::{Lexicon, MoodAnalyzer};

/// Load the lexicon (explicit path, override, or built-in) and wrap it in an analyzer
pub fn load_analyzer(lexicon_path: Option<&Path>) -> Result<MoodAnalyzer> {
    let lexicon = Lexicon::load(lexicon_path).context("Failed to load lexicon")?;
    tracing::debug!(
        source = %lexicon.source(),
        positive = lexicon.positive_words().len(),
        stress = lexicon.stress_words().len(),
        "Lexicon ready"
    );
    Ok(MoodAnalyzer::new(lexicon))
}

/// Output format for analysis commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Unknown format: {}. Available: text, json", s),
        }
    }
}
