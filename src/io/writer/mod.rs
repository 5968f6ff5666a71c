/*!
# Corpus writers

Two serializations of the same tagged material:
- [vrt]: line-oriented `word<TAB>tag` format for CWB-style tooling,
- [tei]: TEI-style XML with `<w type="tag">word</w>` elements.

Both share the field rendering rules: an empty field renders to nothing, a
field holding a single link-only sentence is suppressed entirely, and inside
multi-sentence bodies link tokens are skipped one by one while the sentences
are wrapped in `<s>` elements.
!*/
pub mod tei;
pub mod vrt;

use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use itertools::Itertools;

use crate::error::Error;
use crate::post::Post;
use crate::segment::TaggedSentence;
use crate::segment::TaggedToken;

/// Target corpus serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorpusFormat {
    Vrt,
    Tei,
}

impl CorpusFormat {
    /// File extension of the rendered output.
    pub fn extension(&self) -> &'static str {
        match self {
            CorpusFormat::Vrt => "vrt",
            CorpusFormat::Tei => "xml",
        }
    }

    /// Renders a whole post. `comments` must align with `post.comments`.
    pub fn render_post(
        &self,
        post: &Post,
        title: &[TaggedSentence],
        body: &[TaggedSentence],
        comments: &[Vec<TaggedSentence>],
    ) -> Result<String, Error> {
        match self {
            CorpusFormat::Vrt => vrt::render_post(post, title, body, comments),
            CorpusFormat::Tei => tei::render_post(post, title, body, comments),
        }
    }
}

impl FromStr for CorpusFormat {
    // String error so that structopt can display it directly
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vrt" => Ok(CorpusFormat::Vrt),
            "tei" | "xml" => Ok(CorpusFormat::Tei),
            other => Err(format!("unknown corpus format {:?}", other)),
        }
    }
}

/// Shared field renderer, parameterized over the per-token markup.
fn field<F>(sentences: &[TaggedSentence], indent: &str, render: F) -> String
where
    F: Fn(&TaggedToken) -> String,
{
    match sentences {
        [] => String::new(),
        [single] => {
            // link-only fields are suppressed entirely
            if single.first().map_or(false, TaggedToken::is_link) {
                return String::new();
            }
            single.iter().map(&render).join("\n")
        }
        _ => {
            let mut out = String::from("\n");
            for sentence in sentences {
                out.push_str("<s>\n");
                for token in sentence {
                    if token.is_link() {
                        continue;
                    }
                    out.push_str(indent);
                    out.push_str(&render(token));
                    out.push('\n');
                }
                out.push_str("</s>\n");
            }
            out
        }
    }
}

fn post_datetime(post: &Post) -> Result<DateTime<Utc>, Error> {
    post.datetime().ok_or_else(|| {
        Error::Custom(format!(
            "post {} has out-of-range timestamp {}",
            post.post_id, post.post_time
        ))
    })
}
