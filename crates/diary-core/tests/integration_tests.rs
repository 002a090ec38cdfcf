//! Integration tests for diary-core
//!
//! These tests exercise the full lexicon → analyzer → insight workflow.

use std::fs;

use diary_core::{
    has_written_on, load_notes, Confidence, Lexicon, LexiconSource, MoodAnalyzer, MoodLabel,
    DISCLAIMER,
};

/// Journal export with one entry per label, oldest first
fn journal_export() -> &'static str {
    r#"[
  {"id": "n1", "title": "Monday", "content": "Tired and anxious. Panic before the call.", "createdAt": 1767600000000, "updatedAt": 1767600000000},
  {"id": "n2", "title": "Tuesday", "content": "Great run, felt proud and calm.", "createdAt": 1767686400000, "updatedAt": 1767686400000},
  {"id": "n3", "title": "Wednesday", "content": "Good news at work but still worried.", "createdAt": 1767772800000, "updatedAt": 1767772800000},
  {"id": "n4", "title": "Thursday", "content": "Groceries, laundry, emails.", "createdAt": 1767859200000, "updatedAt": 1767859200000},
  {"id": "broken", "content": "missing timestamps"}
]"#
}

// =============================================================================
// Analyzer Properties
// =============================================================================

#[test]
fn test_totality_on_awkward_inputs() {
    let analyzer = MoodAnalyzer::default();
    let long = "happy ".repeat(50_000) + &"sad ".repeat(10);
    let inputs = [
        "",
        " ",
        r".*+?^$(){}|[]\",
        "\\bhappy\\b",
        "\u{0}\u{feff}\u{200b}",
        "🙂🙃😭",
        long.as_str(),
    ];

    for input in inputs {
        let insight = analyzer.analyze(input);
        assert!(!insight.signals.is_empty());
        assert!((2..=3).contains(&insight.suggestions.len()));
        assert_eq!(insight.disclaimer, DISCLAIMER);
    }

    let insight = analyzer.analyze(&long);
    assert_eq!(insight.label, MoodLabel::Mixed);
    assert_eq!(insight.confidence, Confidence::High);
    assert_eq!(
        insight.signals,
        vec!["Positive signals: 50000", "Stress signals: 10"]
    );
}

#[test]
fn test_whitespace_matches_empty() {
    let analyzer = MoodAnalyzer::default();
    assert_eq!(analyzer.analyze(""), analyzer.analyze("   "));
    assert_eq!(analyzer.analyze("").signals, vec!["No text yet"]);
}

#[test]
fn test_insight_json_shape() {
    let insight = MoodAnalyzer::default().analyze("happy happy happy sad");
    let json = serde_json::to_value(&insight).unwrap();

    assert_eq!(json["label"], "Mixed");
    assert_eq!(json["confidence"], "medium");
    assert_eq!(json["signals"][0], "Positive signals: 3");
    assert_eq!(json["signals"][1], "Stress signals: 1");
    assert_eq!(json["suggestions"].as_array().unwrap().len(), 2);
    assert_eq!(json["disclaimer"], DISCLAIMER);
}

// =============================================================================
// Lexicon Files
// =============================================================================

#[test]
fn test_lexicon_file_drives_analysis() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexicon.toml");
    fs::write(
        &path,
        r#"
[positive]
words = ["sunny", "cozy"]

[stress]
words = ["deadline", "burned out"]
extend = true
"#,
    )
    .unwrap();

    let lexicon = Lexicon::load(Some(&path)).unwrap();
    assert!(matches!(lexicon.source(), LexiconSource::Explicit(_)));
    let analyzer = MoodAnalyzer::new(lexicon);

    let insight = analyzer.analyze("Sunny walk, cozy evening.");
    assert_eq!(insight.label, MoodLabel::Positive);

    // Built-in positive words were replaced
    assert_eq!(analyzer.analyze("happy great").label, MoodLabel::Neutral);

    // Built-in stress words were kept alongside the additions
    let insight = analyzer.analyze("Deadline again, totally burned out and sad.");
    assert_eq!(insight.label, MoodLabel::Stressed);
    assert_eq!(insight.signals, vec!["Stress signals: 3"]);
    assert_eq!(insight.confidence, Confidence::Medium);
}

#[test]
fn test_invalid_lexicon_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexicon.toml");
    fs::write(&path, "[positive]\nwords = [\"--\"]\n").unwrap();

    let err = Lexicon::load(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("no word characters"));
}

// =============================================================================
// Journal Exports
// =============================================================================

#[test]
fn test_analyze_journal_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.json");
    fs::write(&path, journal_export()).unwrap();

    let notes = load_notes(&path).unwrap();
    assert_eq!(notes.len(), 4);
    assert_eq!(notes[0].id, "n4");

    let analyzer = MoodAnalyzer::default();
    let labels: Vec<MoodLabel> = notes
        .iter()
        .map(|n| analyzer.analyze(&n.content).label)
        .collect();

    assert_eq!(
        labels,
        vec![
            MoodLabel::Neutral,
            MoodLabel::Mixed,
            MoodLabel::Positive,
            MoodLabel::Stressed,
        ]
    );

    let newest = notes[0].updated_at_local().unwrap().date_naive();
    assert!(has_written_on(&notes, newest));
}
