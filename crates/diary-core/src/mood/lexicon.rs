//! Mood lexicons: positive and stress vocabularies
//!
//! A lexicon is loaded with a two-layer resolution:
//! 1. Check for override in data dir (~/.local/share/diary/config/lexicon.toml)
//! 2. Fall back to embedded defaults (compiled into binary)
//!
//! An explicit path (e.g. `--lexicon`) skips both layers and must exist.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use super::analyzer::tokenize;
use super::types::SignalCounts;
use crate::error::{Error, Result};

/// Embedded default lexicon (compiled into binary)
const DEFAULT_LEXICON: &str = include_str!("../../../../config/lexicon.toml");

/// Where the active lexicon came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconSource {
    /// Compiled into the binary
    Embedded,
    /// Found in the data directory
    Override(PathBuf),
    /// Passed in by the caller
    Explicit(PathBuf),
    /// Built in code via `Lexicon::new`
    Custom,
}

impl fmt::Display for LexiconSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexiconSource::Embedded => write!(f, "built-in"),
            LexiconSource::Override(path) => write!(f, "override ({})", path.display()),
            LexiconSource::Explicit(path) => write!(f, "file ({})", path.display()),
            LexiconSource::Custom => write!(f, "custom"),
        }
    }
}

/// Normalized entries of one affect category
#[derive(Debug, Clone, Default)]
struct WordSet {
    /// Canonical entries (lowercase, tokens joined by one space), sorted
    entries: Vec<String>,
    /// Single-token entries for per-token lookup
    words: HashSet<String>,
    /// Multi-token entries, matched against consecutive tokens
    phrases: Vec<Vec<String>>,
}

impl WordSet {
    fn build<I, S>(category: &str, raw: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut canonical = BTreeSet::new();
        for entry in raw {
            let entry = entry.as_ref();
            let lower = entry.trim().to_lowercase();
            let tokens: Vec<&str> = tokenize(&lower).collect();
            if tokens.is_empty() {
                return Err(Error::InvalidData(format!(
                    "{} lexicon entry {:?} has no word characters",
                    category, entry
                )));
            }
            let joined = tokens.join(" ");
            if separated_words(&lower) != joined {
                return Err(Error::InvalidData(format!(
                    "{} lexicon entry {:?} may only contain letters, digits, `_`, \
                     and spaces or hyphens between words",
                    category, entry
                )));
            }
            canonical.insert(joined);
        }

        let mut set = WordSet::default();
        for entry in &canonical {
            let tokens: Vec<String> = entry.split(' ').map(str::to_string).collect();
            if tokens.len() == 1 {
                set.words.insert(entry.clone());
            } else {
                set.phrases.push(tokens);
            }
        }
        set.entries = canonical.into_iter().collect();
        Ok(set)
    }

    /// Count whole-word hits; each phrase counts non-overlapping matches
    fn count(&self, tokens: &[&str]) -> usize {
        let mut hits = tokens.iter().filter(|t| self.words.contains(**t)).count();

        for phrase in &self.phrases {
            let mut i = 0;
            while i + phrase.len() <= tokens.len() {
                let matched = tokens[i..i + phrase.len()]
                    .iter()
                    .zip(phrase)
                    .all(|(token, word)| *token == word.as_str());
                if matched {
                    hits += 1;
                    i += phrase.len();
                } else {
                    i += 1;
                }
            }
        }

        hits
    }

    fn contains(&self, entry: &str) -> bool {
        self.entries.binary_search_by(|e| e.as_str().cmp(entry)).is_ok()
    }
}

/// Words of a trimmed entry, split on whitespace or single hyphens and joined by one space
///
/// Leading, trailing or doubled hyphens leave an empty word, so the result
/// only equals the token join when the entry is plain words.
fn separated_words(entry: &str) -> String {
    entry
        .split_whitespace()
        .flat_map(|part| part.split('-'))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Read-only positive/stress vocabularies used by the mood analyzer
#[derive(Debug, Clone)]
pub struct Lexicon {
    positive: WordSet,
    stress: WordSet,
    source: LexiconSource,
}

impl Lexicon {
    /// Build a lexicon from word lists
    ///
    /// Entries are trimmed and lowercased, and duplicates collapse. An entry
    /// with several words ("burned out") matches those words in sequence.
    /// Entries without any word character, or with characters other than
    /// letters, digits, `_` and word separators, are rejected.
    pub fn new<P, S, Q, T>(positive: P, stress: Q) -> Result<Self>
    where
        P: IntoIterator<Item = S>,
        S: AsRef<str>,
        Q: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let positive = WordSet::build("positive", positive)?;
        let stress = WordSet::build("stress", stress)?;

        // The lists are meant to be disjoint; this is curated, not enforced.
        for entry in positive.entries.iter().filter(|e| stress.contains(e.as_str())) {
            warn!(
                entry = entry.as_str(),
                "Lexicon entry appears in both positive and stress lists"
            );
        }

        Ok(Self {
            positive,
            stress,
            source: LexiconSource::Custom,
        })
    }

    /// The embedded default lexicon
    pub fn builtin() -> Self {
        Self::from_toml(DEFAULT_LEXICON)
            .expect("embedded lexicon is valid")
            .with_source(LexiconSource::Embedded)
    }

    /// Parse a lexicon TOML document
    ///
    /// Categories missing from the document keep the built-in words;
    /// `extend = true` appends to them instead of replacing.
    pub fn from_toml(content: &str) -> Result<Self> {
        let raw = parse_raw(content)?;
        let defaults = parse_raw(DEFAULT_LEXICON)?;

        let positive = merge_category(raw.positive, defaults.positive);
        let stress = merge_category(raw.stress, defaults.stress);

        Self::new(positive, stress)
    }

    /// Load the active lexicon
    ///
    /// With `explicit` set, that file must exist. Otherwise the data-dir
    /// override is used when present, then the embedded default.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Error::NotFound(format!(
                    "Lexicon file {}",
                    path.display()
                )));
            }
            let lexicon = Self::read_file(path)?
                .with_source(LexiconSource::Explicit(path.to_path_buf()));
            debug!(path = %path.display(), "Loaded lexicon file");
            return Ok(lexicon);
        }

        if let Some(path) = default_lexicon_path() {
            if path.exists() {
                let lexicon = Self::read_file(&path)?;
                debug!(path = %path.display(), "Loaded lexicon override");
                return Ok(lexicon.with_source(LexiconSource::Override(path)));
            }
        }

        Ok(Self::builtin())
    }

    fn read_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    fn with_source(mut self, source: LexiconSource) -> Self {
        self.source = source;
        self
    }

    /// Canonical positive entries, sorted
    pub fn positive_words(&self) -> &[String] {
        &self.positive.entries
    }

    /// Canonical stress entries, sorted
    pub fn stress_words(&self) -> &[String] {
        &self.stress.entries
    }

    pub fn source(&self) -> &LexiconSource {
        &self.source
    }

    /// Count hits for already lowercased tokens
    pub(crate) fn count(&self, tokens: &[&str]) -> SignalCounts {
        SignalCounts {
            positive: self.positive.count(tokens),
            stress: self.stress.count(tokens),
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Default lexicon override path
pub fn default_lexicon_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("diary").join("config").join("lexicon.toml"))
}

/// Raw lexicon structure for TOML parsing
#[derive(Debug, Default, Deserialize)]
struct RawLexicon {
    positive: Option<RawCategory>,
    stress: Option<RawCategory>,
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    #[serde(default)]
    words: Vec<String>,
    #[serde(default)]
    extend: bool,
}

fn parse_raw(content: &str) -> Result<RawLexicon> {
    toml::from_str(content).map_err(|e| Error::Config(format!("Invalid lexicon TOML: {}", e)))
}

fn merge_category(custom: Option<RawCategory>, default: Option<RawCategory>) -> Vec<String> {
    let default_words = default.map(|c| c.words).unwrap_or_default();
    match custom {
        None => default_words,
        Some(c) if c.extend => default_words.into_iter().chain(c.words).collect(),
        Some(c) => c.words,
    }
}
