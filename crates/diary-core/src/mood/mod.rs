//! Mood signals - local, keyword-based reading of journal text
//!
//! The analyzer scans an entry for whole-word hits from two lexicons
//! (positive and stress vocabulary) and turns the counts into a coarse
//! insight. It never calls out to a model and keeps no state, so callers can
//! run it on every edit.
//!
//! ## Classification
//!
//! - **Confidence** from total hits: 6+ high, 3+ medium, otherwise low
//! - **Label**, first match wins:
//!   - 2+ positive and no stress: Positive
//!   - 2+ stress and no positive: Stressed
//!   - at least one of each: Mixed
//!   - anything else (including a single cue): Neutral
//!
//! ## Usage
//!
//! ```rust
//! use diary_core::mood::{MoodAnalyzer, MoodLabel};
//!
//! let analyzer = MoodAnalyzer::default();
//! let insight = analyzer.analyze("Proud and grateful after a great run.");
//! assert_eq!(insight.label, MoodLabel::Positive);
//! ```

pub mod analyzer;
pub mod lexicon;
pub mod types;

pub use analyzer::{suggestions_for, MoodAnalyzer};
pub use lexicon::{default_lexicon_path, Lexicon, LexiconSource};
pub use types::{Confidence, MoodInsight, MoodLabel, SignalCounts, DISCLAIMER};
