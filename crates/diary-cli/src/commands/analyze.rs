//! Analyze command implementation

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use diary_core::MoodInsight;

use super::{load_analyzer, OutputFormat};

/// Resolve the text to analyze: argument, then file, then stdin
pub fn read_input(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read text from stdin")?;
    Ok(buf)
}

/// Render an insight for the terminal: badge, two bullet lists, fine print
pub fn render_insight(insight: &MoodInsight) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "🧠 Mood: {} ({} confidence)\n",
        insight.label, insight.confidence
    ));

    out.push_str("\nSignals:\n");
    for signal in &insight.signals {
        out.push_str(&format!("  • {}\n", signal));
    }

    out.push_str("\nSuggestions:\n");
    for suggestion in &insight.suggestions {
        out.push_str(&format!("  • {}\n", suggestion));
    }

    out.push_str(&format!("\n{}\n", insight.disclaimer));
    out
}

pub fn cmd_analyze(
    lexicon: Option<&Path>,
    text: Option<String>,
    file: Option<&Path>,
    format: &str,
) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let analyzer = load_analyzer(lexicon)?;
    let input = read_input(text, file)?;

    let insight = analyzer.analyze(&input);

    match format {
        OutputFormat::Text => print!("{}", render_insight(&insight)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&insight)
                .context("Failed to serialize insight to JSON")?;
            println!("{}", json);
        }
    }

    Ok(())
}
