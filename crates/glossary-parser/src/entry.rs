use std::sync::LazyLock;

use glossary_types::{Definition, Entry, RawPair};
use regex::Regex;

static RE_PRONUNCIATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.*)\((.*)\)").unwrap());

static RE_SENSE_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([0-9]+\)").unwrap());

/// Turn an accumulated pair into a finished [`Entry`].
pub fn build_entry(raw: &RawPair) -> Entry {
    let (headword, pronunciation) = split_pronunciation(&raw.headword);
    Entry {
        headword,
        pronunciation,
        definitions: split_senses(&raw.definition),
        see_also: Vec::new(),
    }
}

/// Split `Word (pro-NUN-see-AY-shun)` into headword and pronunciation.
///
/// Matching is greedy: with several parenthesized groups the last one is the
/// pronunciation. A headword that is nothing but parenthesized text is kept
/// whole, so only text before the first headword maps to the empty key.
pub fn split_pronunciation(headword: &str) -> (String, String) {
    if let Some(caps) = RE_PRONUNCIATION.captures(headword) {
        let word = caps[1].trim();
        if !word.is_empty() {
            return (word.to_string(), caps[2].trim().to_string());
        }
    }
    (headword.trim().to_string(), String::new())
}

/// Split definition text on `(1)`, `(2)`, ... markers.
pub fn split_senses(text: &str) -> Vec<Definition> {
    RE_SENSE_MARKER
        .split(text)
        .map(str::trim)
        .filter(|sense| !sense.is_empty())
        .map(Definition::new)
        .collect()
}
