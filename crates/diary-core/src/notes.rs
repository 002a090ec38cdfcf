//! Journal exports (read-only)
//!
//! The diary app keeps notes as a JSON array of
//! `{id, title, content, createdAt, updatedAt}` objects with millisecond
//! timestamps. Loading is lenient: malformed entries are skipped rather than
//! failing the whole file, and the result is ordered newest first.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::Result;

/// A journal note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Milliseconds since the Unix epoch
    pub created_at: i64,
    /// Milliseconds since the Unix epoch
    pub updated_at: i64,
}

impl Note {
    /// Last edit time in the local timezone
    pub fn updated_at_local(&self) -> Option<DateTime<Local>> {
        Local.timestamp_millis_opt(self.updated_at).single()
    }

    /// Title for display, falling back to the first line of content
    pub fn display_title(&self) -> &str {
        let title = self.title.trim();
        if !title.is_empty() {
            return title;
        }
        self.content
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("Untitled")
    }

    fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;

        let id = string_field(obj, "id");
        let created_at = timestamp_field(obj, "createdAt")?;
        let updated_at = timestamp_field(obj, "updatedAt")?;
        if id.is_empty() {
            return None;
        }

        Some(Self {
            id,
            title: string_field(obj, "title"),
            content: string_field(obj, "content"),
            created_at,
            updated_at,
        })
    }
}

fn string_field(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// A present, finite, non-zero number, truncated to whole milliseconds
fn timestamp_field(obj: &Map<String, Value>, key: &str) -> Option<i64> {
    obj.get(key)
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite() && *v != 0.0)
        .map(|v| v as i64)
}

/// Parse a journal export, skipping anything that isn't a valid note
pub fn parse_notes(json: &str) -> Vec<Note> {
    let parsed: Value = match serde_json::from_str(json) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "Journal export is not valid JSON");
            return vec![];
        }
    };

    let Some(items) = parsed.as_array() else {
        warn!("Journal export is not an array of notes");
        return vec![];
    };

    let mut notes: Vec<Note> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let note = Note::from_value(item);
            if note.is_none() {
                debug!(index, "Skipping malformed note");
            }
            note
        })
        .collect();

    notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    debug!(
        total = items.len(),
        loaded = notes.len(),
        "Parsed journal export"
    );
    notes
}

/// Read and parse a journal export file
pub fn load_notes(path: &Path) -> Result<Vec<Note>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_notes(&content))
}

/// Whether any note was last edited on `date` (local time)
pub fn has_written_on(notes: &[Note], date: NaiveDate) -> bool {
    notes
        .iter()
        .filter_map(Note::updated_at_local)
        .any(|ts| ts.date_naive() == date)
}
