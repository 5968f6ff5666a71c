//! Parsing of the engine's segmented output.
//!
//! The engine returns one line per sentence, words separated by an
//! ideographic space (U+3000), each word carrying its POS tag in
//! parentheses: `我(Nh)　喜歡(VK)　程式(Na)`.
use serde::Deserialize;
use serde::Serialize;

/// Inter-word delimiter used by the engine.
pub const WORD_DELIMITER: char = '\u{3000}';

/// A segmented word with its POS tag.
///
/// Tags come from the engine's own tagset and are kept opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub word: String,
    pub tag: String,
}

/// One segmented sentence.
pub type TaggedSentence = Vec<TaggedToken>;

impl TaggedToken {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }

    /// Sentinel standing in for an empty input sentence.
    pub fn null() -> Self {
        Self::new("NULL", "NULL")
    }

    /// URLs are dropped from corpus output.
    pub fn is_link(&self) -> bool {
        self.word.starts_with("http")
    }
}

/// Parses a `word(tag)` token.
///
/// A literal open parenthesis comes out of the engine as `((CAT)`;
/// naive splitting would leave an empty word, so it is special-cased.
fn parse_token(token: &str) -> TaggedToken {
    let (word, tag) = match token.split_once('(') {
        Some((word, rest)) => {
            // keep the part after the last '(' as the tag
            let tag = rest.rsplit('(').next().unwrap_or(rest);
            (word, tag.trim().trim_matches(')'))
        }
        None => (token, ""),
    };

    let word = if word.is_empty() { "(" } else { word };
    TaggedToken::new(word, tag)
}

/// Parses one segmented output line into a [TaggedSentence].
pub fn parse_segmented(line: &str) -> TaggedSentence {
    line.trim()
        .split(WORD_DELIMITER)
        .map(parse_token)
        .collect()
}
