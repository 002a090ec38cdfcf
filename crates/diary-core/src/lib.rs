//! Diary Core Library
//!
//! Shared functionality for the diary journaling tool:
//! - Local mood signals for journal text (keyword lexicons, no network)
//! - Lexicon configuration with user overrides
//! - Read-only access to journal exports

pub mod error;
pub mod mood;
pub mod notes;

pub use error::{Error, Result};
pub use mood::{
    default_lexicon_path, Confidence, Lexicon, LexiconSource, MoodAnalyzer, MoodInsight,
    MoodLabel, SignalCounts, DISCLAIMER,
};
pub use notes::{has_written_on, load_notes, parse_notes, Note};
