//! Core types for mood signals

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fine print attached to every insight
pub const DISCLAIMER: &str = "This is a lightweight demo signal, not medical advice or diagnosis.";

/// Coarse emotional tone of a journal entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoodLabel {
    /// Several positive cues and no stress cues
    Positive,
    /// Not enough evidence either way
    Neutral,
    /// Both positive and stress cues
    Mixed,
    /// Several stress cues and no positive cues
    Stressed,
}

impl MoodLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLabel::Positive => "Positive",
            MoodLabel::Neutral => "Neutral",
            MoodLabel::Mixed => "Mixed",
            MoodLabel::Stressed => "Stressed",
        }
    }

    pub fn all() -> &'static [MoodLabel] {
        &[
            MoodLabel::Positive,
            MoodLabel::Neutral,
            MoodLabel::Mixed,
            MoodLabel::Stressed,
        ]
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MoodLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "positive" => Ok(MoodLabel::Positive),
            "neutral" => Ok(MoodLabel::Neutral),
            "mixed" => Ok(MoodLabel::Mixed),
            "stressed" => Ok(MoodLabel::Stressed),
            _ => Err(format!("Unknown mood label: {}", s)),
        }
    }
}

/// How much keyword evidence backs a label (not a probability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Total hits at or above which confidence is medium
    pub const MEDIUM_THRESHOLD: usize = 3;
    /// Total hits at or above which confidence is high
    pub const HIGH_THRESHOLD: usize = 6;

    /// Classify from the total number of lexicon hits
    pub fn from_total(total: usize) -> Self {
        if total >= Self::HIGH_THRESHOLD {
            Confidence::High
        } else if total >= Self::MEDIUM_THRESHOLD {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Confidence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Confidence::Low),
            "medium" => Ok(Confidence::Medium),
            "high" => Ok(Confidence::High),
            _ => Err(format!("Unknown confidence: {}", s)),
        }
    }
}

/// Raw hit counts per lexicon
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalCounts {
    pub positive: usize,
    pub stress: usize,
}

impl SignalCounts {
    pub fn total(&self) -> usize {
        self.positive + self.stress
    }

    /// Label decision; the first matching rule wins
    pub fn label(&self) -> MoodLabel {
        if self.positive >= 2 && self.stress == 0 {
            MoodLabel::Positive
        } else if self.stress >= 2 && self.positive == 0 {
            MoodLabel::Stressed
        } else if self.positive > 0 && self.stress > 0 {
            MoodLabel::Mixed
        } else {
            MoodLabel::Neutral
        }
    }

    /// Human-readable evidence lines, never empty
    pub fn signals(&self) -> Vec<String> {
        let mut signals = Vec::with_capacity(2);
        if self.positive > 0 {
            signals.push(format!("Positive signals: {}", self.positive));
        }
        if self.stress > 0 {
            signals.push(format!("Stress signals: {}", self.stress));
        }
        if signals.is_empty() {
            signals.push("No strong signals detected".to_string());
        }
        signals
    }
}

/// Mood insight for one piece of text at one point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodInsight {
    pub label: MoodLabel,
    pub confidence: Confidence,
    /// Evidence found in the text (e.g., "Positive signals: 3")
    pub signals: Vec<String>,
    /// Reflection prompts chosen by label
    pub suggestions: Vec<String>,
    pub disclaimer: String,
}
