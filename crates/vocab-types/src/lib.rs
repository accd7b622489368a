//! Shared types for the TOEIC vocabulary data and its export format.
//!
//! Raw data arrives as [`TopicRecord`]s: a topic name plus three parallel
//! sequences (headwords, pronunciations, meanings) where index `i` across all
//! three describes one entry. Headwords may carry a trailing part-of-speech
//! annotation such as `"(adj)"`; the closed set of recognized annotations is
//! modelled by [`Tag`]. The normalized, exported record is a
//! [`VocabularyEntry`].
//!
//! ```rust
//! use vocab_types::{Tag, VocabularyEntry};
//!
//! assert_eq!(Tag::from_abbrev("adj"), Some(Tag::Adj));
//! assert_eq!(Tag::from_abbrev("ADJ"), None);
//!
//! let entry = VocabularyEntry::new("agreement", "/ə'gri.mənt/", "một thỏa thuận");
//! assert_eq!(entry.word, "agreement");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Part-of-speech annotation as written after a headword (`n`, `v`, `adj`, `adv`).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Tag {
    Noun,
    Verb,
    Adj,
    Adv,
}

impl Tag {
    /// Every recognized tag, in annotation order.
    pub const ALL: [Tag; 4] = [Tag::Noun, Tag::Verb, Tag::Adj, Tag::Adv];

    /// Parse an abbreviation into a tag. Matching is case-sensitive.
    pub fn from_abbrev(abbrev: &str) -> Option<Self> {
        match abbrev {
            "n" => Some(Tag::Noun),
            "v" => Some(Tag::Verb),
            "adj" => Some(Tag::Adj),
            "adv" => Some(Tag::Adv),
            _ => None,
        }
    }

    /// Emit the abbreviation used inside the parenthesized annotation.
    pub fn abbrev(self) -> &'static str {
        match self {
            Tag::Noun => "n",
            Tag::Verb => "v",
            Tag::Adj => "adj",
            Tag::Adv => "adv",
        }
    }

    /// The full annotation suffix, parentheses included (e.g. `"(adv)"`).
    pub fn annotation(self) -> &'static str {
        match self {
            Tag::Noun => "(n)",
            Tag::Verb => "(v)",
            Tag::Adj => "(adj)",
            Tag::Adv => "(adv)",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tag::Noun => "noun",
            Tag::Verb => "verb",
            Tag::Adj => "adj",
            Tag::Adv => "adv",
        })
    }
}

/// One normalized vocabulary record.
///
/// Field order is the serialized key order: `word`, `pronounce`, `meaning`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VocabularyEntry {
    pub word: String,
    pub pronounce: String,
    pub meaning: String,
}

impl VocabularyEntry {
    pub fn new(
        word: impl Into<String>,
        pronounce: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Self {
        Self {
            word: word.into(),
            pronounce: pronounce.into(),
            meaning: meaning.into(),
        }
    }
}

/// A named topic with its raw, co-indexed sequences.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TopicRecord {
    pub name: String,
    pub words: Vec<String>,
    pub pronounce: Vec<String>,
    pub meaning: Vec<String>,
}

impl TopicRecord {
    /// Number of indices shared by all three sequences.
    pub fn shared_len(&self) -> usize {
        self.words
            .len()
            .min(self.pronounce.len())
            .min(self.meaning.len())
    }

    /// True when all three sequences have the same length.
    pub fn is_aligned(&self) -> bool {
        self.words.len() == self.pronounce.len() && self.words.len() == self.meaning.len()
    }
}
