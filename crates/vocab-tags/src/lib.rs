//! Part-of-speech annotation stripping for raw headwords.
//!
//! Raw headwords look like `"agreement (n)"` or `"check-in (v)"`. The
//! annotation is removed only when it is one of the recognized [`Tag`]s and
//! sits at the very end of the string; anything else (an unknown tag such as
//! `"(phrase)"`, a tag in the middle, different casing) is left in place. The
//! result is always trimmed. Stripping never fails.
//!
//! # Example
//! ```rust
//! use vocab_tags::{split_tag, strip_tag};
//! use vocab_types::Tag;
//!
//! assert_eq!(strip_tag("binding (adj)"), "binding");
//! assert_eq!(strip_tag("high-speed (phrase)"), "high-speed (phrase)");
//!
//! let tagged = split_tag("efficiently (adv)");
//! assert_eq!(tagged.word, "efficiently");
//! assert_eq!(tagged.tag, Some(Tag::Adv));
//! ```

use vocab_types::Tag;

/// A headword with its recognized annotation split off.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TaggedWord<'a> {
    pub word: &'a str,
    pub tag: Option<Tag>,
}

/// Remove a trailing recognized annotation and trim the remainder.
pub fn strip_tag(raw: &str) -> &str {
    split_tag(raw).word
}

/// Split a raw headword into the trimmed word and its annotation, if any.
pub fn split_tag(raw: &str) -> TaggedWord<'_> {
    for tag in Tag::ALL {
        if let Some(stem) = raw.strip_suffix(tag.annotation()) {
            return TaggedWord {
                word: stem.trim(),
                tag: Some(tag),
            };
        }
    }
    TaggedWord {
        word: raw.trim(),
        tag: None,
    }
}
