use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use glossary_parser::{ParserConfig, convert_file};

fn main() -> Result<()> {
    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: cargo run -p glossary-parser --example stats -- <glossary.txt>")?;

    let glossary = convert_file(&path, &ParserConfig::default())
        .with_context(|| format!("converting {}", path.display()))?;

    let with_pronunciation = glossary.entries().filter(|e| e.has_pronunciation()).count();
    let multi_sense = glossary
        .entries()
        .filter(|e| e.definitions.len() > 1)
        .count();
    let multi_paragraph = glossary
        .entries()
        .filter(|e| e.definitions.iter().any(|d| d.text.contains("\n\n")))
        .count();

    println!("Glossary: {}", path.display());
    println!("Entries            : {}", glossary.len());
    println!("Senses             : {}", glossary.definition_count());
    println!("With pronunciation : {}", with_pronunciation);
    println!("Multi-sense        : {}", multi_sense);
    println!("Multi-paragraph    : {}", multi_paragraph);

    for headword in glossary.headwords().take(5) {
        println!("  {}", headword);
    }

    Ok(())
}
