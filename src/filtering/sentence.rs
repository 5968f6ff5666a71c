//! sentence-level filtering
use super::Filter;

/// CJK Unified Ideographs block bounds used by the detector.
///
/// Same range as the Moses tokenizer's Chinese check: lines without a single
/// character in U+4E00..=U+9FA5 are ASCII art, URLs or other non-linguistic
/// noise and must not reach the segmenter.
const CJK_FIRST: u32 = 0x4E00;
const CJK_LAST: u32 = 0x9FA5;

/// Detects lines containing at least one CJK ideograph.
#[derive(Default)]
pub struct HasCjk;

fn is_cjk(c: char) -> bool {
    (CJK_FIRST..=CJK_LAST).contains(&(c as u32))
}

impl Filter<&str> for HasCjk {
    fn detect(&self, sentence: &str) -> bool {
        sentence.chars().any(is_cjk)
    }
}

/// Splits a post body into the trimmed lines eligible for segmentation.
///
/// May return an empty [Vec] when the body holds no Chinese text at all.
pub fn segmentable_sentences(body: &str) -> Vec<String> {
    let filter = HasCjk;
    body.lines()
        .map(str::trim)
        .filter(|line| filter.detect(line))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cjk_detected() {
        let f = HasCjk;
        assert!(f.detect("我每天都在睡覺"));
        assert!(f.detect("mixed 內容 line"));
    }

    #[test]
    fn no_cjk_rejected() {
        let f = HasCjk;
        assert!(!f.detect("http://example.com/foo"));
        assert!(!f.detect("----"));
        assert!(!f.detect(""));
        // Fullwidth punctuation and kana are outside the ideograph block.
        assert!(!f.detect("、。！ドラゴン"));
    }

    #[test]
    fn block_bounds() {
        let f = HasCjk;
        assert!(f.detect("\u{4E00}"));
        assert!(f.detect("\u{9FA5}"));
        assert!(!f.detect("\u{4DFF}"));
        assert!(!f.detect("\u{9FA6}"));
    }

    #[test]
    fn body_split() {
        let body = "我每天都在睡覺\n====\n  好喜歡寫程式  \nhttp://a.b/c\n";
        assert_eq!(
            segmentable_sentences(body),
            vec!["我每天都在睡覺".to_string(), "好喜歡寫程式".to_string()]
        );
    }

    #[test]
    fn body_without_chinese() {
        assert!(segmentable_sentences("lorem ipsum\n123\n").is_empty());
    }
}
