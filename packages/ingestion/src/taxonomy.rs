//! The closed content-tag taxonomy.
//!
//! Links are classified against a fixed six-label set. The set is closed by
//! design: model output that does not exactly match a label is dropped, so
//! the model can never introduce arbitrary tags into storage.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A content tag from the fixed taxonomy.
///
/// String forms are exact and case-sensitive; `SocialMediaPost` reads and
/// writes as `"Social Media Post"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tag {
    Image,
    Video,
    News,
    Blog,
    Music,
    #[serde(rename = "Social Media Post")]
    SocialMediaPost,
}

/// Every taxonomy member, in canonical order.
pub const ALL_TAGS: [Tag; 6] = [
    Tag::Image,
    Tag::Video,
    Tag::News,
    Tag::Blog,
    Tag::Music,
    Tag::SocialMediaPost,
];

impl Tag {
    /// The exact string form of this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Image => "Image",
            Tag::Video => "Video",
            Tag::News => "News",
            Tag::Blog => "Blog",
            Tag::Music => "Music",
            Tag::SocialMediaPost => "Social Media Post",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse failure for a string outside the taxonomy.
#[derive(Debug, Clone, Error)]
#[error("unknown tag: {0}")]
pub struct UnknownTag(pub String);

impl FromStr for Tag {
    type Err = UnknownTag;

    /// Exact, case-sensitive match only.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Image" => Ok(Tag::Image),
            "Video" => Ok(Tag::Video),
            "News" => Ok(Tag::News),
            "Blog" => Ok(Tag::Blog),
            "Music" => Ok(Tag::Music),
            "Social Media Post" => Ok(Tag::SocialMediaPost),
            other => Err(UnknownTag(other.to_string())),
        }
    }
}

/// Parse a model's comma-separated tag response into taxonomy members.
///
/// Tokens are trimmed and kept only on an exact match; anything else is
/// silently discarded. Duplicates collapse.
pub fn parse_tag_list(response: &str) -> BTreeSet<Tag> {
    response
        .split(',')
        .map(str::trim)
        .filter_map(|token| token.parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exact_labels() {
        let tags = parse_tag_list("Image, Video, Blog");
        assert_eq!(
            tags,
            BTreeSet::from([Tag::Image, Tag::Video, Tag::Blog])
        );
    }

    #[test]
    fn drops_unknown_tokens() {
        let tags = parse_tag_list("Image, Foo, Video");
        assert_eq!(tags, BTreeSet::from([Tag::Image, Tag::Video]));
    }

    #[test]
    fn match_is_case_sensitive() {
        assert!(parse_tag_list("image, VIDEO, news").is_empty());
    }

    #[test]
    fn handles_multi_word_label() {
        let tags = parse_tag_list("Social Media Post");
        assert_eq!(tags, BTreeSet::from([Tag::SocialMediaPost]));
    }

    #[test]
    fn duplicates_collapse() {
        let tags = parse_tag_list("Image, Image, Image");
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn empty_and_garbage_input() {
        assert!(parse_tag_list("").is_empty());
        assert!(parse_tag_list("   ,  , ").is_empty());
        assert!(parse_tag_list("I cannot classify this page.").is_empty());
    }

    #[test]
    fn display_round_trips() {
        for tag in ALL_TAGS {
            assert_eq!(tag.as_str().parse::<Tag>().unwrap(), tag);
        }
    }
}
