use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

use super::Reaction;

/// Push reaction tally of a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub pos: u32,
    pub neg: u32,
    pub neu: u32,
}

impl Vote {
    /// Count a single reaction.
    pub fn add(&mut self, reaction: Reaction) {
        match reaction {
            Reaction::Pos => self.pos += 1,
            Reaction::Neg => self.neg += 1,
            Reaction::Neu => self.neu += 1,
        }
    }
}

/// A single push below a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub author: String,
    #[serde(rename = "type")]
    pub reaction: Reaction,
    pub content: String,
    /// 1-based position in the post's push list.
    pub order: usize,
}

/// A structured board post.
///
/// Field names match the JSON interchange format emitted by earlier versions
/// of the toolchain, so corpora extracted years ago stay readable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub post_board: String,
    pub post_id: String,
    /// Unix timestamp (seconds). Legacy files store it either as a JSON
    /// number or as a 10-digit string.
    #[serde(deserialize_with = "epoch_from_str_or_int")]
    pub post_time: i64,
    pub post_title: String,
    pub post_author: String,
    pub post_body: String,
    pub post_vote: Vote,
    pub comments: Vec<Comment>,
}

impl Post {
    /// Post time as UTC datetime. [None] if the timestamp is out of range.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.post_time, 0)
    }
}

fn epoch_from_str_or_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Epoch {
        Int(i64),
        Str(String),
    }

    match Epoch::deserialize(deserializer)? {
        Epoch::Int(i) => Ok(i),
        Epoch::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
