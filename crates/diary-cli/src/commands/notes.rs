//! Journal export command implementations

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, TimeZone};
use diary_core::{has_written_on, load_notes, MoodAnalyzer, MoodInsight, MoodLabel, Note};
use serde::Serialize;

use super::{load_analyzer, truncate, OutputFormat};

/// One analyzed note
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteMood {
    pub id: String,
    pub title: String,
    pub updated_at: i64,
    pub insight: MoodInsight,
}

/// Analyze notes in the given (newest-first) order, optionally keeping only the first `limit`
pub fn analyze_notes(
    analyzer: &MoodAnalyzer,
    notes: &[Note],
    limit: Option<usize>,
) -> Vec<NoteMood> {
    notes
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|note| NoteMood {
            id: note.id.clone(),
            title: note.display_title().to_string(),
            updated_at: note.updated_at,
            insight: analyzer.analyze(&note.content),
        })
        .collect()
}

/// Count notes per label, in label order
pub fn tally_labels(rows: &[NoteMood]) -> Vec<(MoodLabel, usize)> {
    MoodLabel::all()
        .iter()
        .map(|label| {
            let count = rows.iter().filter(|r| r.insight.label == *label).count();
            (*label, count)
        })
        .collect()
}

/// Render the notes table, label summary and the daily nudge
pub fn render_notes(rows: &[NoteMood], total: usize, wrote_today: bool) -> String {
    let mut out = String::new();

    if total == 0 {
        out.push_str("📓 No notes found.\n");
    } else {
        out.push_str(&format!("📓 {} notes (showing {})\n\n", total, rows.len()));
        out.push_str(&format!(
            "{:<16}  {:<30}  {:<8}  {}\n",
            "UPDATED", "TITLE", "MOOD", "CONFIDENCE"
        ));
        out.push_str(&format!("{}\n", "-".repeat(70)));

        for row in rows {
            let updated = Local
                .timestamp_millis_opt(row.updated_at)
                .single()
                .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "-".to_string());
            out.push_str(&format!(
                "{:<16}  {:<30}  {:<8}  {}\n",
                updated,
                truncate(&row.title, 30),
                row.insight.label.as_str(),
                row.insight.confidence.as_str()
            ));
        }

        let summary: Vec<String> = tally_labels(rows)
            .into_iter()
            .map(|(label, count)| format!("{} {}", label, count))
            .collect();
        out.push_str(&format!("\nSummary: {}\n", summary.join(" · ")));
    }

    if !wrote_today {
        out.push_str("\n✍️  You haven’t written today. One sentence is enough.\n");
    }

    out
}

pub fn cmd_notes(
    lexicon: Option<&Path>,
    file: &Path,
    format: &str,
    limit: Option<usize>,
) -> Result<()> {
    let format: OutputFormat = format.parse()?;
    let analyzer = load_analyzer(lexicon)?;

    let notes = load_notes(file)
        .with_context(|| format!("Failed to load journal export: {}", file.display()))?;
    tracing::debug!(count = notes.len(), "Loaded notes");

    let rows = analyze_notes(&analyzer, &notes, limit);

    match format {
        OutputFormat::Text => {
            let today: NaiveDate = Local::now().date_naive();
            let wrote_today = has_written_on(&notes, today);
            print!("{}", render_notes(&rows, notes.len(), wrote_today));
        }
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(&rows).context("Failed to serialize notes to JSON")?;
            println!("{}", json);
        }
    }

    Ok(())
}
