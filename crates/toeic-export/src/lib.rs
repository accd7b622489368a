pub mod aggregate;
pub mod export;

use std::path::PathBuf;

use thiserror::Error;
use vocab_types::TopicRecord;

pub use aggregate::{AggregateError, LengthPolicy, aggregate, entries_for_topic};
pub use export::{DEFAULT_INDENT, ExportError, render, write_file};

pub const DEFAULT_OUTPUT: &str = "toeic_600_vocabulary.json";

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

#[derive(Clone, Debug)]
pub struct ExportOptions {
    pub output: PathBuf,
    pub policy: LengthPolicy,
    pub indent: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            policy: LengthPolicy::default(),
            indent: DEFAULT_INDENT,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExportReport {
    pub path: PathBuf,
    pub entries: usize,
}

/// Normalize every topic and write the combined list to `options.output`.
///
/// Nothing is written unless every topic normalizes.
pub fn export<'a, I>(topics: I, options: &ExportOptions) -> Result<ExportReport, Error>
where
    I: IntoIterator<Item = &'a TopicRecord>,
{
    let entries = aggregate(topics, options.policy)?;
    write_file(&options.output, &entries, options.indent)?;
    Ok(ExportReport {
        path: options.output.clone(),
        entries: entries.len(),
    })
}
