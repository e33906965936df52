//! Shared, owned types that mirror a parsed glossary.
//!
//! A glossary file is a flat list of `Headword (pronunciation): definition`
//! records. Parsing happens in two stages: lines are first folded into
//! [`RawPair`]s (headword text plus the accumulated definition text), and each
//! pair is then built into an [`Entry`] with its pronunciation split off and
//! its numbered senses separated into [`Definition`]s. The finished mapping is
//! a [`Glossary`], keyed by cleaned headword.
//!
//! ```rust
//! use glossary_types::{Definition, Entry, Glossary};
//!
//! let entry = Entry {
//!     headword: "Ajah".to_string(),
//!     pronunciation: "AH-jah".to_string(),
//!     definitions: vec![Definition::new("Societies among the Aes Sedai.")],
//!     see_also: Vec::new(),
//! };
//! let glossary: Glossary = [entry].into_iter().collect();
//! assert_eq!(glossary.get("Ajah").unwrap().pronunciation, "AH-jah");
//! ```

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

/// Headword text and definition text accumulated from consecutive lines,
/// before any pronunciation or sense splitting.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RawPair {
    pub headword: String,
    pub definition: String,
}

impl RawPair {
    pub fn new(headword: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            headword: headword.into(),
            definition: definition.into(),
        }
    }

    /// Append a continuation line, keeping the line break in front of it.
    pub fn push_line(&mut self, line: &str) {
        self.definition.push('\n');
        self.definition.push_str(line);
    }

    /// True when neither field carries any visible text.
    pub fn is_blank(&self) -> bool {
        self.headword.trim().is_empty() && self.definition.trim().is_empty()
    }
}

/// One numbered sense of an entry.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Definition {
    /// Never filled in by the current glossary format; kept for callers that
    /// enrich entries after parsing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    pub text: String,
}

impl Definition {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            part_of_speech: None,
            text: text.into(),
        }
    }
}

/// A finished glossary record.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub headword: String,
    /// Empty when the headword carried no parenthesized pronunciation.
    #[serde(default)]
    pub pronunciation: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub see_also: Vec<String>,
}

impl Entry {
    pub fn has_pronunciation(&self) -> bool {
        !self.pronunciation.is_empty()
    }
}

/// Headword to entry mapping produced by one conversion.
///
/// Backed by an ordered map so equality and serialized output do not depend
/// on insertion order. Lookup by headword is the only meaningful access.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Glossary {
    entries: BTreeMap<String, Entry>,
}

impl Glossary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry under its headword, returning the entry it replaced.
    pub fn insert(&mut self, entry: Entry) -> Option<Entry> {
        self.entries.insert(entry.headword.clone(), entry)
    }

    /// Fetch an entry by its cleaned headword.
    pub fn get(&self, headword: &str) -> Option<&Entry> {
        self.entries.get(headword)
    }

    pub fn contains(&self, headword: &str) -> bool {
        self.entries.contains_key(headword)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(headword, entry)` pairs in headword order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Entry> {
        self.entries.iter()
    }

    pub fn headwords(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.values()
    }

    /// Total number of senses across all entries.
    pub fn definition_count(&self) -> usize {
        self.entries.values().map(|e| e.definitions.len()).sum()
    }

    pub fn into_inner(self) -> BTreeMap<String, Entry> {
        self.entries
    }
}

impl FromIterator<Entry> for Glossary {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut glossary = Glossary::new();
        for entry in iter {
            glossary.insert(entry);
        }
        glossary
    }
}

impl<'a> IntoIterator for &'a Glossary {
    type Item = (&'a String, &'a Entry);
    type IntoIter = btree_map::Iter<'a, String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Glossary {
    type Item = (String, Entry);
    type IntoIter = btree_map::IntoIter<String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
