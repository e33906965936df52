use std::io::{self, Write};

use clap::ValueEnum;
use glossary_types::{Entry, Glossary};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// JSON object keyed by headword.
    #[default]
    Json,
    /// Plain text, one block per entry.
    Text,
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write a converted glossary in the requested format.
///
/// `compact` only affects JSON output.
pub fn write_glossary<W: Write>(
    mut out: W,
    glossary: &Glossary,
    format: OutputFormat,
    compact: bool,
) -> Result<(), FormatError> {
    match format {
        OutputFormat::Json => {
            if compact {
                serde_json::to_writer(&mut out, glossary)?;
            } else {
                serde_json::to_writer_pretty(&mut out, glossary)?;
            }
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for (idx, entry) in glossary.entries().enumerate() {
                if idx > 0 {
                    writeln!(out)?;
                }
                write_entry_text(&mut out, entry)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn write_entry_text<W: Write>(out: &mut W, entry: &Entry) -> io::Result<()> {
    if entry.has_pronunciation() {
        writeln!(out, "{} [{}]", entry.headword, entry.pronunciation)?;
    } else {
        writeln!(out, "{}", entry.headword)?;
    }
    for (n, def) in entry.definitions.iter().enumerate() {
        let mut lines = def.text.lines();
        let first = lines.next().unwrap_or("");
        match &def.part_of_speech {
            Some(pos) => writeln!(out, "  {}. ({}) {}", n + 1, pos, first)?,
            None => writeln!(out, "  {}. {}", n + 1, first)?,
        }
        for line in lines {
            if line.is_empty() {
                writeln!(out)?;
            } else {
                writeln!(out, "     {}", line)?;
            }
        }
    }
    if !entry.see_also.is_empty() {
        writeln!(out, "  See also: {}", entry.see_also.join("; "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glossary_types::Definition;

    fn sample() -> Glossary {
        [
            Entry {
                headword: "Amyrlin Seat".to_string(),
                pronunciation: "AHM-ehr-lin".to_string(),
                definitions: vec![
                    Definition::new("The title.\n\nElected for life."),
                    Definition::new("The throne."),
                ],
                see_also: Vec::new(),
            },
            Entry {
                headword: "Time of Madness".to_string(),
                pronunciation: String::new(),
                definitions: vec![Definition::new("See Breaking of the World, the.")],
                see_also: Vec::new(),
            },
        ]
        .into_iter()
        .collect()
    }

    fn render(format: OutputFormat, compact: bool) -> String {
        let mut buf = Vec::new();
        write_glossary(&mut buf, &sample(), format, compact).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn text_output_numbers_senses() {
        let text = render(OutputFormat::Text, false);
        assert_eq!(
            text,
            "Amyrlin Seat [AHM-ehr-lin]\n  1. The title.\n\n     Elected for life.\n  2. The throne.\n\nTime of Madness\n  1. See Breaking of the World, the.\n"
        );
    }

    #[test]
    fn compact_json_is_single_line() {
        let json = render(OutputFormat::Json, true);
        assert_eq!(json.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["Amyrlin Seat"]["definitions"][1]["text"], "The throne.");
    }

    #[test]
    fn pretty_json_round_trips() {
        let json = render(OutputFormat::Json, false);
        assert!(json.lines().count() > 1);
        let back: Glossary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
