//! Lexicon-related command implementations

use std::path::Path;

use anyhow::{Context, Result};
use diary_core::{default_lexicon_path, Lexicon};

/// Render the active lexicon as two word lists
pub fn render_lexicon(lexicon: &Lexicon) -> String {
    let mut out = String::new();
    out.push_str(&format!("Lexicon source: {}\n", lexicon.source()));

    out.push_str(&format!(
        "\nPositive ({}):\n  {}\n",
        lexicon.positive_words().len(),
        lexicon.positive_words().join(", ")
    ));
    out.push_str(&format!(
        "\nStress ({}):\n  {}\n",
        lexicon.stress_words().len(),
        lexicon.stress_words().join(", ")
    ));
    out
}

/// List the active lexicon and where it came from
pub fn cmd_lexicon_show(lexicon_path: Option<&Path>) -> Result<()> {
    let lexicon = Lexicon::load(lexicon_path).context("Failed to load lexicon")?;
    print!("{}", render_lexicon(&lexicon));

    println!();
    println!("To customize the lexicon:");
    println!("  1. Copy config/lexicon.toml to the override path (diary lexicon path)");
    println!("  2. Edit the word lists (set extend = true to keep the built-in words)");
    println!("  3. Or pass --lexicon PATH for a one-off run");

    Ok(())
}

/// Show the path where a lexicon override should be placed
pub fn cmd_lexicon_path() -> Result<()> {
    match default_lexicon_path() {
        Some(path) => {
            println!("{}", path.display());

            if !path.exists() {
                eprintln!();
                eprintln!("Note: No override file exists yet; the built-in lexicon is used.");
            }
        }
        None => {
            eprintln!("Could not determine lexicon override path.");
            eprintln!("The data directory is not available on this system.");
        }
    }

    Ok(())
}
