use serde::Deserialize;
use serde::Serialize;

/// Push (comment) polarity.
///
/// PTT marks each push with one of three labels; anything else
/// (e.g. truncated push lines) carries no polarity and is dropped
/// at extraction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    Pos,
    Neg,
    Neu,
}

impl Reaction {
    /// Maps a push label to its polarity. Returns [None] for unknown labels.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "推" => Some(Reaction::Pos),
            "噓" => Some(Reaction::Neg),
            "→" => Some(Reaction::Neu),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Reaction::Pos => "pos",
            Reaction::Neg => "neg",
            Reaction::Neu => "neu",
        }
    }
}
