/*! Word segmentation and POS tagging.

The heavy lifting is done by the CKIP WordSeg shared library
([ckip::CkipSegmenter]); this module owns everything around it:
- the [Segmenter] trait, the seam between the pipelines and the engine,
- parsing of the engine's `word(tag)` output lines ([parse_segmented]),
- the batch adapter [seg_and_pos], which compensates for the engine's
  silent elision of empty input entries.
!*/
pub mod ckip;
mod token;

pub use ckip::CkipConfig;
pub use ckip::CkipSegmenter;
pub use token::parse_segmented;
pub use token::TaggedSentence;
pub use token::TaggedToken;

use crate::error::Error;

/// A word segmentation engine.
///
/// `apply_batch` takes a batch of sentences and returns one segmented line
/// per *non-blank* input: the CKIP engine silently drops empty entries
/// instead of returning an empty result for them. [seg_and_pos] restores
/// the alignment.
pub trait Segmenter {
    fn apply_batch(&mut self, sentences: &[String]) -> Result<Vec<String>, Error>;
}

/// Segments and tags a batch of sentences, preserving positional alignment.
///
/// Blank entries (empty or whitespace-only) are recorded beforehand and come
/// back as the single-token sentinel sentence `NULL(NULL)`, so the output
/// always has exactly as many sentences as the input. An engine reply whose
/// line count does not match the non-blank inputs is rejected as
/// [Error::Segmenter] instead of producing misaligned output.
pub fn seg_and_pos<S: Segmenter>(
    segmenter: &mut S,
    sentences: &[String],
) -> Result<Vec<TaggedSentence>, Error> {
    // indices the engine will elide; the list itself is sent as given
    let blanks: Vec<usize> = sentences
        .iter()
        .enumerate()
        .filter(|(_, s)| s.trim().is_empty())
        .map(|(i, _)| i)
        .collect();

    let lines = segmenter.apply_batch(sentences)?;

    // one line per non-blank input, anything else is an engine fault
    if lines.len() + blanks.len() != sentences.len() {
        return Err(Error::Segmenter(format!(
            "engine returned {} lines for {} non-blank sentences",
            lines.len(),
            sentences.len() - blanks.len()
        )));
    }

    let mut tagged: Vec<TaggedSentence> =
        lines.iter().map(|line| parse_segmented(line)).collect();

    // ascending order keeps later recorded indices valid after insertion
    for &i in &blanks {
        tagged.insert(i, vec![TaggedToken::null()]);
    }

    Ok(tagged)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mimics the CKIP engine: one `word(tag)` line per non-blank input,
    /// blanks silently dropped.
    struct FakeEngine;

    impl Segmenter for FakeEngine {
        fn apply_batch(&mut self, sentences: &[String]) -> Result<Vec<String>, Error> {
            Ok(sentences
                .iter()
                .filter(|s| !s.trim().is_empty())
                .map(|s| {
                    s.chars()
                        .map(|c| format!("{}(Na)", c))
                        .collect::<Vec<_>>()
                        .join("\u{3000}")
                })
                .collect())
        }
    }

    struct BrokenEngine;

    impl Segmenter for BrokenEngine {
        fn apply_batch(&mut self, _sentences: &[String]) -> Result<Vec<String>, Error> {
            Err(Error::Segmenter("engine hung up".to_string()))
        }
    }

    /// Swallows every input: a truncated reply.
    struct MuteEngine;

    impl Segmenter for MuteEngine {
        fn apply_batch(&mut self, _sentences: &[String]) -> Result<Vec<String>, Error> {
            Ok(Vec::new())
        }
    }

    /// Returns one line too many.
    struct ChattyEngine;

    impl Segmenter for ChattyEngine {
        fn apply_batch(&mut self, sentences: &[String]) -> Result<Vec<String>, Error> {
            let mut lines: Vec<String> =
                sentences.iter().map(|s| format!("{}(Na)", s)).collect();
            lines.push("多(D)".to_string());
            Ok(lines)
        }
    }

    fn batch(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn length_preserved_without_blanks() {
        let input = batch(&["我睡覺", "好喜歡寫程式", "貓"]);
        let out = seg_and_pos(&mut FakeEngine, &input).unwrap();
        assert_eq!(out.len(), input.len());
        assert_eq!(out[2][0], TaggedToken::new("貓", "Na"));
    }

    #[test]
    fn blanks_become_sentinels() {
        let input = batch(&["", "我睡覺", "  ", "貓", ""]);
        let out = seg_and_pos(&mut FakeEngine, &input).unwrap();

        assert_eq!(out.len(), input.len());
        for i in [0, 2, 4] {
            assert_eq!(out[i], vec![TaggedToken::null()]);
        }
        assert_eq!(out[1][0], TaggedToken::new("我", "Na"));
        assert_eq!(out[3][0], TaggedToken::new("貓", "Na"));
    }

    #[test]
    fn all_blank_input() {
        let input = batch(&["", " "]);
        let out = seg_and_pos(&mut FakeEngine, &input).unwrap();
        assert_eq!(
            out,
            vec![vec![TaggedToken::null()], vec![TaggedToken::null()]]
        );
    }

    #[test]
    fn empty_batch() {
        let out = seg_and_pos(&mut FakeEngine, &[]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn engine_failure_propagates() {
        let input = batch(&["我睡覺"]);
        assert!(seg_and_pos(&mut BrokenEngine, &input).is_err());
    }

    #[test]
    fn truncated_reply_rejected() {
        // a blank entry makes a naive sentinel insertion out of bounds
        let input = batch(&["我睡覺", ""]);
        let result = seg_and_pos(&mut MuteEngine, &input);
        assert!(matches!(result, Err(Error::Segmenter(_))));
    }

    #[test]
    fn overlong_reply_rejected() {
        let input = batch(&["我睡覺", "貓"]);
        let result = seg_and_pos(&mut ChattyEngine, &input);
        assert!(matches!(result, Err(Error::Segmenter(_))));
    }
}
