use std::env;
use std::path::PathBuf;

use glossary_parser::{ParserConfig, convert_file};

fn glossary_file() -> Option<PathBuf> {
    env::var("GLOSSARY_FILE").ok().map(PathBuf::from)
}

#[test]
fn converts_real_glossary() {
    let Some(path) = glossary_file() else {
        eprintln!("skipping: GLOSSARY_FILE not set");
        return;
    };
    let config = ParserConfig::default();
    let glossary = convert_file(&path, &config).expect("convert real glossary");

    assert!(!glossary.is_empty(), "no entries parsed");
    assert!(
        glossary.entries().all(|e| !e.headword.contains(':')),
        "headword swallowed a colon"
    );
    assert_eq!(glossary, convert_file(&path, &config).expect("second pass"));
}
