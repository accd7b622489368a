//! TOEIC 600 topic data and loaders for topic record files.
//!
//! The vocabulary itself is a data asset: 50 topics stored as a JSON array of
//! [`TopicRecord`]s under `data/`, compiled into the crate. Callers may also
//! point at a file with the same schema, chosen at runtime via [`Source`].
//!
//! Topics keep their file order; nothing is sorted, deduplicated, or
//! validated beyond JSON shape. Length mismatches between a topic's parallel
//! sequences are reported by [`TopicSet::misaligned`] but not rejected here.
//!
//! # Example
//! ```rust
//! use vocab_data::TopicSet;
//!
//! # fn main() -> anyhow::Result<()> {
//! let topics = TopicSet::embedded()?;
//! let contracts = topics.topic("Contracts").expect("contracts topic");
//! println!("{} words in {}", contracts.words.len(), contracts.name);
//! # Ok(()) }
//! ```
//!
//! For a runnable demo, see `cargo run -p vocab-data --example stats -- [topics.json]`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;
use vocab_types::TopicRecord;

/// The bundled topic asset.
pub const EMBEDDED_TOPICS: &str = include_str!("../data/toeic_600_topics.json");

/// Where topic records come from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Source {
    /// The asset compiled into this crate.
    Embedded,
    /// A JSON file using the same schema as the bundled asset.
    File(PathBuf),
}

/// Ordered collection of topic records.
#[derive(Clone, Debug)]
pub struct TopicSet {
    topics: Vec<TopicRecord>,
}

impl TopicSet {
    /// Parse the bundled asset.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_TOPICS.as_bytes()).context("parse embedded topic data")
    }

    /// Read topic records from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes =
            fs::read(path).with_context(|| format!("read topic file {}", path.display()))?;
        Self::from_json(&bytes).with_context(|| format!("parse topic file {}", path.display()))
    }

    pub fn load_from(source: &Source) -> Result<Self> {
        match source {
            Source::Embedded => Self::embedded(),
            Source::File(path) => Self::load(path),
        }
    }

    /// Parse a JSON array of topic records.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        let topics: Vec<TopicRecord> = serde_json::from_slice(bytes)?;
        debug!("parsed {} topics", topics.len());
        Ok(Self { topics })
    }

    pub fn topics(&self) -> &[TopicRecord] {
        &self.topics
    }

    pub fn iter(&self) -> impl Iterator<Item = &TopicRecord> {
        self.topics.iter()
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// First topic with the given name.
    pub fn topic(&self, name: &str) -> Option<&TopicRecord> {
        self.topics.iter().find(|t| t.name == name)
    }

    /// Sum of the indices shared by each topic's three sequences.
    pub fn row_count(&self) -> usize {
        self.topics.iter().map(TopicRecord::shared_len).sum()
    }

    /// Topics whose parallel sequences differ in length.
    pub fn misaligned(&self) -> impl Iterator<Item = &TopicRecord> {
        self.topics.iter().filter(|t| !t.is_aligned())
    }
}

impl From<Vec<TopicRecord>> for TopicSet {
    fn from(topics: Vec<TopicRecord>) -> Self {
        Self { topics }
    }
}

impl<'a> IntoIterator for &'a TopicSet {
    type Item = &'a TopicRecord;
    type IntoIter = std::slice::Iter<'a, TopicRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.topics.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_topic_array() {
        let raw = r#"[{"name":"Banking","words":["loan (n)"],"pronounce":["/loun/"],"meaning":["khoản vay"]}]"#;
        let set = TopicSet::from_json(raw.as_bytes()).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.topics()[0].words, vec!["loan (n)"]);
        assert_eq!(set.topics()[0].meaning, vec!["khoản vay"]);
        assert_eq!(set.row_count(), 1);
        assert_eq!(set.misaligned().count(), 0);
    }

    #[test]
    fn rejects_missing_sequences() {
        let raw = br#"[{"name":"Banking","words":["loan (n)"]}]"#;
        assert!(TopicSet::from_json(raw).is_err());
    }

    #[test]
    fn reports_misaligned_topics() {
        let set = TopicSet::from(vec![TopicRecord {
            name: "Short".into(),
            words: vec!["a (n)".into(), "b (v)".into()],
            pronounce: vec!["/a/".into()],
            meaning: vec!["a".into(), "b".into()],
        }]);
        let names: Vec<_> = set.misaligned().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Short"]);
        assert_eq!(set.row_count(), 1);
    }
}
