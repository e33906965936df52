use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use clap::builder::RangedU64ValueParser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use glossary_cli::{OutputFormat, write_glossary};
use glossary_parser::{DEFAULT_MAX_HEADWORD_WORDS, ParserConfig, convert_file};

#[derive(Parser, Debug)]
#[command(name = "glossary")]
#[command(about = "Convert a flat glossary text file into structured entries")]
struct Cli {
    /// Glossary text file to convert.
    input: PathBuf,

    /// Write output here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Headword lines must have fewer words than this before the colon.
    #[arg(
        long,
        env = "GLOSSARY_MAX_HEADWORD_WORDS",
        default_value_t = DEFAULT_MAX_HEADWORD_WORDS,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    max_headword_words: usize,

    /// Emit JSON on a single line.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

#[derive(Debug, Clone)]
struct Config {
    input: PathBuf,
    output: Option<PathBuf>,
    format: OutputFormat,
    compact: bool,
    parser: ParserConfig,
}

fn main() -> Result<()> {
    init_tracing();

    let config = load_config(Cli::parse());
    info!("reading glossary from {}", config.input.display());
    info!(
        "headword lines: fewer than {} words",
        config.parser.max_headword_words
    );

    let start = Instant::now();
    let glossary = convert_file(&config.input, &config.parser)
        .with_context(|| format!("converting {}", config.input.display()))?;
    info!(
        "parsed {} entries ({} senses) in {} ms",
        glossary.len(),
        glossary.definition_count(),
        start.elapsed().as_millis()
    );

    match &config.output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create {}", path.display()))?;
            write_glossary(BufWriter::new(file), &glossary, config.format, config.compact)
                .with_context(|| format!("write {}", path.display()))?;
            info!("wrote {:?} output to {}", config.format, path.display());
        }
        None => {
            let stdout = io::stdout().lock();
            write_glossary(BufWriter::new(stdout), &glossary, config.format, config.compact)
                .context("write stdout")?;
        }
    }

    Ok(())
}

fn load_config(cli: Cli) -> Config {
    Config {
        input: cli.input,
        output: cli.output,
        format: cli.format,
        compact: cli.compact,
        parser: ParserConfig::with_max_headword_words(cli.max_headword_words),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let max_level = env_filter
        .max_level_hint()
        .and_then(|hint| hint.into_level())
        .unwrap_or(Level::INFO);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .with_max_level(max_level)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENV_KEY: &str = "GLOSSARY_MAX_HEADWORD_WORDS";

    fn threshold(args: &[&str]) -> Result<usize, clap::Error> {
        let argv = ["glossary", "words.txt"].iter().chain(args);
        Cli::try_parse_from(argv).map(|cli| load_config(cli).parser.max_headword_words)
    }

    #[test]
    fn zero_threshold_flag_is_rejected() {
        assert!(threshold(&["--max-headword-words", "0"]).is_err());
        assert!(threshold(&["--max-headword-words", "many"]).is_err());
    }

    // Only this test touches the env var, so its cases run in sequence.
    #[test]
    fn threshold_resolves_flag_then_env_then_default() {
        unsafe { std::env::remove_var(ENV_KEY) };
        assert_eq!(threshold(&[]).unwrap(), DEFAULT_MAX_HEADWORD_WORDS);
        assert_eq!(threshold(&["--max-headword-words", "3"]).unwrap(), 3);

        unsafe { std::env::set_var(ENV_KEY, "5") };
        assert_eq!(threshold(&[]).unwrap(), 5);
        assert_eq!(threshold(&["--max-headword-words", "12"]).unwrap(), 12);
        assert!(threshold(&["--max-headword-words", "0"]).is_err());

        unsafe { std::env::set_var(ENV_KEY, "0") };
        assert!(threshold(&[]).is_err());
        unsafe { std::env::set_var(ENV_KEY, "lots") };
        assert!(threshold(&[]).is_err());

        unsafe { std::env::remove_var(ENV_KEY) };
    }

    #[test]
    fn format_and_output_flags() {
        let cli = Cli::try_parse_from([
            "glossary",
            "in.txt",
            "-f",
            "text",
            "-o",
            "out.txt",
            "--compact",
            "--max-headword-words",
            "4",
        ])
        .unwrap();
        let config = load_config(cli);
        assert_eq!(config.input, PathBuf::from("in.txt"));
        assert_eq!(config.output, Some(PathBuf::from("out.txt")));
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.compact);
        assert_eq!(config.parser.max_headword_words, 4);
    }
}
