//! Mood analyzer - keyword signals to a mood insight

use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

use super::lexicon::Lexicon;
use super::types::{Confidence, MoodInsight, MoodLabel, SignalCounts, DISCLAIMER};

/// Reflection prompts per label
mod suggestions {
    pub const EMPTY: &[&str] = &[
        "Write one sentence about what happened today.",
        "Add one thing you’re grateful for.",
    ];
    pub const STRESSED: &[&str] = &[
        "Try a 2-minute reset: inhale 4, hold 4, exhale 6.",
        "Write the smallest next step you can do today.",
        "Name one thing you can control right now.",
    ];
    pub const POSITIVE: &[&str] = &[
        "Capture what worked so you can repeat it.",
        "Write one thank-you note (even if you don’t send it).",
    ];
    pub const MIXED: &[&str] = &[
        "Separate facts from feelings: what happened vs. what it meant.",
        "Write one lesson and one win from today.",
    ];
    pub const NEUTRAL: &[&str] = &[
        "Write one highlight and one challenge from today.",
        "Add a small goal for tomorrow.",
    ];
}

/// Split text into word tokens
///
/// A token is a maximal run of `[A-Za-z0-9_]`, the same characters a `\b`
/// word boundary separates, so "happiness" never yields "happy" while
/// "(happy!)" does. Callers lowercase first.
pub(crate) fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"[A-Za-z0-9_]+").expect("valid regex"))
        .find_iter(text)
        .map(|m| m.as_str())
}

/// Suggestions shown for a label
pub fn suggestions_for(label: MoodLabel) -> &'static [&'static str] {
    match label {
        MoodLabel::Stressed => suggestions::STRESSED,
        MoodLabel::Positive => suggestions::POSITIVE,
        MoodLabel::Mixed => suggestions::MIXED,
        MoodLabel::Neutral => suggestions::NEUTRAL,
    }
}

/// Strip surrounding whitespace, including a byte-order mark
fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

fn to_owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

/// Classifies journal text into a coarse mood using only local keyword matching
///
/// Analysis is pure: no I/O, no state between calls, and every input string
/// (empty, huge, full of regex metacharacters) yields a well-formed insight.
#[derive(Debug, Clone, Default)]
pub struct MoodAnalyzer {
    lexicon: Lexicon,
}

impl MoodAnalyzer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Count positive and stress hits (whole words, case-insensitive)
    pub fn count_signals(&self, text: &str) -> SignalCounts {
        let lower = trim_text(text).to_lowercase();
        let tokens: Vec<&str> = tokenize(&lower).collect();
        self.lexicon.count(&tokens)
    }

    /// Analyze the current text of an entry
    pub fn analyze(&self, text: &str) -> MoodInsight {
        if trim_text(text).is_empty() {
            return MoodInsight {
                label: MoodLabel::Neutral,
                confidence: Confidence::Low,
                signals: vec!["No text yet".to_string()],
                suggestions: to_owned(suggestions::EMPTY),
                disclaimer: DISCLAIMER.to_string(),
            };
        }

        let counts = self.count_signals(text);
        let label = counts.label();
        let confidence = Confidence::from_total(counts.total());

        trace!(
            positive = counts.positive,
            stress = counts.stress,
            label = label.as_str(),
            confidence = confidence.as_str(),
            "Mood analysis complete"
        );

        MoodInsight {
            label,
            confidence,
            signals: counts.signals(),
            suggestions: to_owned(suggestions_for(label)),
            disclaimer: DISCLAIMER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> MoodAnalyzer {
        MoodAnalyzer::default()
    }

    #[test]
    fn test_empty_input() {
        for text in ["", "   ", "\n\t  \r\n", "\u{feff}", " \u{feff}\n"] {
            let insight = analyzer().analyze(text);
            assert_eq!(insight.label, MoodLabel::Neutral);
            assert_eq!(insight.confidence, Confidence::Low);
            assert_eq!(insight.signals, vec!["No text yet"]);
            assert_eq!(insight.suggestions.len(), 2);
            assert_eq!(
                insight.suggestions[0],
                "Write one sentence about what happened today."
            );
            assert_eq!(insight.disclaimer, DISCLAIMER);
        }
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        let insight = analyzer().analyze("\u{feff}calm and relaxed");
        assert_eq!(insight.label, MoodLabel::Positive);
        assert_eq!(insight.signals, vec!["Positive signals: 2"]);
    }

    #[test]
    fn test_no_signals() {
        let insight = analyzer().analyze("Went to the store and bought bread.");
        assert_eq!(insight.label, MoodLabel::Neutral);
        assert_eq!(insight.confidence, Confidence::Low);
        assert_eq!(insight.signals, vec!["No strong signals detected"]);
        assert_eq!(
            insight.suggestions,
            vec![
                "Write one highlight and one challenge from today.",
                "Add a small goal for tomorrow.",
            ]
        );
    }

    #[test]
    fn test_word_boundaries() {
        let a = analyzer();
        assert_eq!(a.count_signals("pure happiness").positive, 0);
        assert_eq!(a.count_signals("unhappy").positive, 0);
        assert_eq!(a.count_signals("Happy").positive, 1);
        assert_eq!(a.count_signals("HAPPY!").positive, 1);
        assert_eq!(a.count_signals("(happy), 'happy' happy.").positive, 3);
        assert_eq!(a.count_signals("happy_hour").positive, 0);
    }

    #[test]
    fn test_counting() {
        let insight = analyzer().analyze("happy happy happy sad");
        let counts = analyzer().count_signals("happy happy happy sad");

        assert_eq!(counts.positive, 3);
        assert_eq!(counts.stress, 1);
        assert_eq!(insight.confidence, Confidence::Medium);
        assert_eq!(insight.label, MoodLabel::Mixed);
        assert_eq!(
            insight.signals,
            vec!["Positive signals: 3", "Stress signals: 1"]
        );
    }

    #[test]
    fn test_label_table() {
        let a = analyzer();

        assert_eq!(
            a.analyze("Great day, felt proud and grateful.").label,
            MoodLabel::Positive
        );
        assert_eq!(
            a.analyze("So tired and worried about tomorrow.").label,
            MoodLabel::Stressed
        );
        assert_eq!(
            a.analyze("Happy with the demo but anxious about the review.")
                .label,
            MoodLabel::Mixed
        );
        assert_eq!(
            a.analyze("I felt happy today.").label,
            MoodLabel::Neutral
        );
        assert_eq!(a.analyze("A bit sad.").label, MoodLabel::Neutral);
    }

    #[test]
    fn test_suggestions_by_label() {
        let a = analyzer();

        let stressed = a.analyze("anxious, stressed, overwhelmed");
        assert_eq!(stressed.suggestions.len(), 3);
        assert_eq!(
            stressed.suggestions[0],
            "Try a 2-minute reset: inhale 4, hold 4, exhale 6."
        );

        let positive = a.analyze("calm and relaxed");
        assert_eq!(
            positive.suggestions,
            vec![
                "Capture what worked so you can repeat it.",
                "Write one thank-you note (even if you don’t send it).",
            ]
        );

        let mixed = a.analyze("good but sad");
        assert_eq!(
            mixed.suggestions[1],
            "Write one lesson and one win from today."
        );
    }

    #[test]
    fn test_confidence_levels() {
        let a = analyzer();
        assert_eq!(a.analyze("good great").confidence, Confidence::Low);
        assert_eq!(a.analyze("good great love").confidence, Confidence::Medium);
        assert_eq!(
            a.analyze("good great love win calm").confidence,
            Confidence::Medium
        );
        assert_eq!(
            a.analyze("good great love win calm proud").confidence,
            Confidence::High
        );
        assert_eq!(
            a.analyze("good good good good good sad sad sad sad sad")
                .confidence,
            Confidence::High
        );
    }

    #[test]
    fn test_regex_metacharacters_in_input() {
        let a = analyzer();
        let text = r".*+?^$(){}|[]\ happy [happy] (sad|good) \b";
        let insight = a.analyze(text);
        let counts = a.count_signals(text);

        assert_eq!(counts.positive, 3);
        assert_eq!(counts.stress, 1);
        assert_eq!(insight.label, MoodLabel::Mixed);

        let only_meta = a.analyze(r".*+?^$(){}|[]\");
        assert_eq!(only_meta.signals, vec!["No strong signals detected"]);
    }

    #[test]
    fn test_unicode_input() {
        let a = analyzer();
        let insight = a.analyze("Ça va. Très happy 😊 — grateful!");
        assert_eq!(insight.label, MoodLabel::Positive);

        let insight = a.analyze("今日は疲れた");
        assert_eq!(insight.label, MoodLabel::Neutral);
        assert_eq!(insight.signals, vec!["No strong signals detected"]);
    }

    #[test]
    fn test_custom_lexicon() {
        let lexicon = Lexicon::new(["sunny"], ["rainy", "gloomy"]).unwrap();
        let a = MoodAnalyzer::new(lexicon);

        assert_eq!(a.analyze("Rainy and gloomy").label, MoodLabel::Stressed);
        // Built-in words no longer count
        assert_eq!(a.count_signals("happy happy").positive, 0);
    }

    #[test]
    fn test_deterministic() {
        let a = analyzer();
        let text = "Proud of the win, tired though.";
        assert_eq!(a.analyze(text), a.analyze(text));
    }
}
