pub mod format;

pub use format::{FormatError, OutputFormat, write_glossary};
