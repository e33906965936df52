//! Parse flat glossary text into structured entries.
//!
//! A glossary file looks like this:
//!
//! ```text
//! Ajah (AH-jah): Societies among the Aes Sedai, to which all Aes Sedai
//! belong. They are designated by colors: Blue Ajah, Red Ajah, ...
//! Amyrlin Seat (AHM-ehr-lin): (1) The title of the leader of the Aes Sedai.
//!
//! Elected for life by the Hall of the Tower. (2) The throne upon which the
//! leader of the Aes Sedai sits.
//! ```
//!
//! Each line is split on its first colon. The split starts a new entry only
//! when the text before the colon is short (fewer than
//! [`ParserConfig::max_headword_words`] words); otherwise the colon is
//! punctuation inside running prose and the line continues the current
//! definition. Continuation lines are joined with newlines so paragraph
//! breaks survive.
//!
//! Finished pairs are built into [`Entry`] values: a trailing
//! `(pronunciation)` is split off the headword and the definition is split
//! into senses on `(1)`, `(2)`, ... markers.
//!
//! Parsing never fails; only reading the input can. Callers choose between
//! [`convert`] for lines already in memory, [`convert_reader`] for any
//! [`BufRead`], and [`convert_file`] for a path.
//!
//! # Example
//! ```
//! use glossary_parser::{ParserConfig, convert};
//!
//! let glossary = convert(
//!     ["Ajah (AH-jah): Societies among the Aes Sedai."],
//!     &ParserConfig::default(),
//! );
//! let ajah = glossary.get("Ajah").unwrap();
//! assert_eq!(ajah.pronunciation, "AH-jah");
//! assert_eq!(ajah.definitions[0].text, "Societies among the Aes Sedai.");
//! ```
//!
//! For a runnable demo, see `cargo run -p glossary-parser --example stats -- <file>`.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, warn};

pub mod accumulate;
pub mod entry;

pub use accumulate::{Accumulator, classify_and_accumulate};
pub use entry::{build_entry, split_pronunciation, split_senses};
pub use glossary_types::{Definition, Entry, Glossary, RawPair};

/// Default word-count threshold for headword lines.
pub const DEFAULT_MAX_HEADWORD_WORDS: usize = 9;

#[derive(Debug, Error)]
pub enum GlossaryError {
    #[error("glossary input unavailable: {origin}")]
    InputUnavailable {
        origin: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, GlossaryError>;

/// Tunables for line classification.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParserConfig {
    /// A colon split is a headword boundary only when the trimmed text before
    /// the colon has fewer than this many space-separated words.
    pub max_headword_words: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_headword_words: DEFAULT_MAX_HEADWORD_WORDS,
        }
    }
}

impl ParserConfig {
    pub fn with_max_headword_words(max_headword_words: usize) -> Self {
        Self { max_headword_words }
    }

    /// Split a headword line into `(headword, definition start)`.
    ///
    /// Returns `None` for continuation lines: no colon, an empty headword,
    /// or too many words before the colon.
    pub fn split_headword<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        let (left, right) = line.split_once(':')?;
        let candidate = left.trim();
        if candidate.is_empty() {
            return None;
        }
        let words = candidate.matches(' ').count() + 1;
        (words < self.max_headword_words).then_some((left, right))
    }
}

/// Convert lines already in memory.
pub fn convert<I>(lines: I, config: &ParserConfig) -> Glossary
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    collect_entries(classify_and_accumulate(lines, config))
}

/// Convert everything a reader yields.
///
/// A read error aborts the conversion; no partial glossary is returned.
/// Bytes that are not valid UTF-8 are decoded lossily and never fail.
pub fn convert_reader<R: BufRead>(reader: R, config: &ParserConfig) -> Result<Glossary> {
    read_glossary(reader, config, "reader")
}

/// Open and convert a glossary file.
pub fn convert_file(path: impl AsRef<Path>, config: &ParserConfig) -> Result<Glossary> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    let file = File::open(path).map_err(|source| GlossaryError::InputUnavailable {
        origin: origin.clone(),
        source,
    })?;
    read_glossary(BufReader::new(file), config, &origin)
}

fn read_glossary<R: BufRead>(
    mut reader: R,
    config: &ParserConfig,
    origin: &str,
) -> Result<Glossary> {
    let mut acc = Accumulator::new(*config);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| GlossaryError::InputUnavailable {
                origin: format!("{}:{}", origin, acc.lines_seen() + 1),
                source,
            })?;
        if read == 0 {
            break;
        }
        let line = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        // Stray non-UTF-8 bytes become U+FFFD instead of failing the file.
        acc.push_line(&String::from_utf8_lossy(line));
    }
    Ok(collect_entries(acc.finish()))
}

fn collect_entries(pairs: Vec<RawPair>) -> Glossary {
    let mut glossary = Glossary::new();
    for raw in &pairs {
        if let Some(previous) = glossary.insert(build_entry(raw)) {
            warn!(
                headword = %previous.headword,
                "duplicate headword; later entry replaces earlier"
            );
        }
    }
    debug!(entries = glossary.len(), "glossary built");
    glossary
}
