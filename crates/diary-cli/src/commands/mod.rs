//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Shared utilities (load_analyzer, output format)
//! - `analyze` - Analyze a single piece of text
//! - `notes` - Analyze a journal export
//! - `lexicon` - Lexicon inspection commands

pub mod analyze;
pub mod core;
pub mod lexicon;
pub mod notes;

// Re-export command functions for main.rs
pub use analyze::*;
pub use self::core::*;
pub use lexicon::*;
pub use notes::*;

/// Truncate a string to a maximum number of characters, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
