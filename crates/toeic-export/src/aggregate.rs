use std::collections::BTreeMap;

use thiserror::Error;
use tracing::{debug, info, warn};
use vocab_tags::split_tag;
use vocab_types::{Tag, TopicRecord, VocabularyEntry};

/// What to do when a topic's parallel sequences disagree in length.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LengthPolicy {
    /// Emit rows up to the shortest sequence and drop the rest.
    #[default]
    Truncate,
    /// Reject the topic.
    Strict,
}

#[derive(Debug, Error, Eq, PartialEq)]
pub enum AggregateError {
    #[error(
        "malformed input row in topic {topic:?}: {words} words, {pronounce} pronunciations, {meaning} meanings"
    )]
    MalformedInputRow {
        topic: String,
        words: usize,
        pronounce: usize,
        meaning: usize,
    },
}

/// Counts gathered while normalizing one topic.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct TopicSummary {
    pub emitted: usize,
    pub dropped: usize,
    pub untagged: usize,
    pub tags: BTreeMap<Tag, usize>,
}

impl TopicSummary {
    fn merge(&mut self, other: &TopicSummary) {
        self.emitted += other.emitted;
        self.dropped += other.dropped;
        self.untagged += other.untagged;
        for (tag, count) in &other.tags {
            *self.tags.entry(*tag).or_default() += count;
        }
    }
}

/// Build the entries for a single topic, in input order.
pub fn entries_for_topic(
    topic: &TopicRecord,
    policy: LengthPolicy,
) -> Result<Vec<VocabularyEntry>, AggregateError> {
    normalize_topic(topic, policy).map(|(entries, _)| entries)
}

/// Build entries for every topic and concatenate them in topic order.
pub fn aggregate<'a, I>(
    topics: I,
    policy: LengthPolicy,
) -> Result<Vec<VocabularyEntry>, AggregateError>
where
    I: IntoIterator<Item = &'a TopicRecord>,
{
    let mut out = Vec::new();
    let mut total = TopicSummary::default();
    let mut topic_count = 0usize;
    for topic in topics {
        let (entries, summary) = normalize_topic(topic, policy)?;
        debug!(
            "topic {:?}: {} entries, {} untagged",
            topic.name, summary.emitted, summary.untagged
        );
        total.merge(&summary);
        topic_count += 1;
        out.extend(entries);
    }

    info!("normalized {} entries from {} topics", total.emitted, topic_count);
    for (tag, count) in &total.tags {
        info!("{count} entries tagged {tag}");
    }
    if total.untagged > 0 {
        info!("{} entries without a recognized tag", total.untagged);
    }
    if total.dropped > 0 {
        warn!("dropped {} unmatched trailing items", total.dropped);
    }
    Ok(out)
}

fn normalize_topic(
    topic: &TopicRecord,
    policy: LengthPolicy,
) -> Result<(Vec<VocabularyEntry>, TopicSummary), AggregateError> {
    if !topic.is_aligned() {
        if policy == LengthPolicy::Strict {
            return Err(AggregateError::MalformedInputRow {
                topic: topic.name.clone(),
                words: topic.words.len(),
                pronounce: topic.pronounce.len(),
                meaning: topic.meaning.len(),
            });
        }
        warn!(
            "topic {:?} has mismatched lengths (words {}, pronounce {}, meaning {}); truncating",
            topic.name,
            topic.words.len(),
            topic.pronounce.len(),
            topic.meaning.len()
        );
    }

    let len = topic.shared_len();
    let longest = topic
        .words
        .len()
        .max(topic.pronounce.len())
        .max(topic.meaning.len());
    let mut summary = TopicSummary {
        dropped: longest - len,
        ..TopicSummary::default()
    };

    let entries = topic
        .words
        .iter()
        .zip(&topic.pronounce)
        .zip(&topic.meaning)
        .map(|((raw, pronounce), meaning)| {
            let tagged = split_tag(raw);
            match tagged.tag {
                Some(tag) => *summary.tags.entry(tag).or_default() += 1,
                None => summary.untagged += 1,
            }
            VocabularyEntry::new(tagged.word, pronounce.as_str(), meaning.as_str())
        })
        .collect::<Vec<_>>();
    summary.emitted = entries.len();

    Ok((entries, summary))
}
