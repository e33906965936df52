use glossary_types::RawPair;
use tracing::{debug, trace, warn};

use crate::ParserConfig;

/// Folds glossary lines into [`RawPair`]s.
///
/// Holds the single open pair; it is moved out whole when the next headword
/// line arrives or when [`Accumulator::finish`] is called.
#[derive(Debug)]
pub struct Accumulator {
    config: ParserConfig,
    open: Option<RawPair>,
    finished: Vec<RawPair>,
    lineno: usize,
}

impl Accumulator {
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            open: None,
            finished: Vec::new(),
            lineno: 0,
        }
    }

    /// Classify one line as a headword line or a continuation and fold it in.
    pub fn push_line(&mut self, line: &str) {
        let line = line.strip_suffix('\r').unwrap_or(line);
        self.lineno += 1;

        match self.config.split_headword(line) {
            Some((headword, definition)) => {
                if let Some(previous) = self.open.take() {
                    self.finalize(previous);
                }
                debug!(line = self.lineno, headword = headword.trim(), "headword line");
                self.open = Some(RawPair::new(headword, definition));
            }
            None => {
                trace!(line = self.lineno, "continuation line");
                self.open.get_or_insert_with(RawPair::default).push_line(line);
            }
        }
    }

    /// Number of lines seen so far.
    pub fn lines_seen(&self) -> usize {
        self.lineno
    }

    /// Close the pair still open at end of input and return every pair in
    /// input order.
    pub fn finish(mut self) -> Vec<RawPair> {
        if let Some(last) = self.open.take() {
            self.finalize(last);
        }
        debug!(
            lines = self.lineno,
            pairs = self.finished.len(),
            "finished accumulating"
        );
        self.finished
    }

    fn finalize(&mut self, pair: RawPair) {
        if pair.headword.trim().is_empty() {
            if pair.is_blank() {
                return;
            }
            warn!("text before the first headword kept under an empty headword");
        }
        self.finished.push(pair);
    }
}

/// Run every line through an [`Accumulator`] and return the finished pairs.
pub fn classify_and_accumulate<I>(lines: I, config: &ParserConfig) -> Vec<RawPair>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut acc = Accumulator::new(*config);
    for line in lines {
        acc.push_line(line.as_ref());
    }
    acc.finish()
}
