//! DOM extraction of a board-post page.
use std::path::Path;

use log::warn;
use scraper::ElementRef;
use scraper::Html;
use scraper::Selector;

use crate::error::Error;
use crate::post::{Comment, Post, Reaction, Vote};

use super::clean;
use super::filename;

/// Extracts [Post] records from crawled post pages.
///
/// Holds the compiled CSS selectors; build once and share across files
/// (selectors are `Sync`, extraction borrows them immutably).
pub struct PostExtractor {
    main_content: Selector,
    meta_tag: Selector,
    push: Selector,
    push_tag: Selector,
    push_userid: Selector,
    push_content: Selector,
}

impl PostExtractor {
    pub fn new() -> Self {
        // selectors are fixed strings, parsing them cannot fail at runtime
        Self {
            main_content: Selector::parse("#main-content").unwrap(),
            meta_tag: Selector::parse(".article-meta-tag").unwrap(),
            push: Selector::parse(".push").unwrap(),
            push_tag: Selector::parse(".push-tag").unwrap(),
            push_userid: Selector::parse(".push-userid").unwrap(),
            push_content: Selector::parse(".push-content").unwrap(),
        }
    }

    /// Parses one post page.
    ///
    /// Returns `Ok(None)` for deleted/unavailable posts: pages without a
    /// `#main-content` element, and pages whose body is empty once
    /// boilerplate and quoted replies are removed.
    /// `path` provides post id, timestamp and board through the
    /// [filename grammar](super::filename).
    pub fn extract(&self, html: &str, path: &Path) -> Result<Option<Post>, Error> {
        let doc = Html::parse_document(html);

        let main = match doc.select(&self.main_content).next() {
            Some(main) => main,
            None => return Ok(None),
        };

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| Error::Custom(format!("invalid file name {:?}", path)))?;
        let (post_id, post_time) = filename::parse_stem(stem)?;
        let post_board = filename::board_of(path);

        let (post_author, post_title) = self.meta_fields(&main);

        let body = clean::strip_quotes(&clean::strip_boilerplate(&self.body_text(&main)));
        if body.is_empty() {
            return Ok(None);
        }

        let (comments, post_vote) = self.pushes(&doc);

        Ok(Some(Post {
            post_board,
            post_id,
            post_time,
            post_title,
            post_author,
            post_body: body,
            post_vote,
            comments,
        }))
    }

    /// Author and title from the meta lines. A missing label yields an
    /// empty string, not a failure; the author keeps only the user id,
    /// dropping the parenthesized nickname.
    fn meta_fields(&self, main: &ElementRef) -> (String, String) {
        let mut author = String::new();
        let mut title = String::new();

        for tag in main.select(&self.meta_tag) {
            let label = tag.text().collect::<String>();
            // the value span is the label's next sibling element
            let value = match tag.next_siblings().find_map(ElementRef::wrap) {
                Some(value) => value.text().collect::<String>(),
                None => continue,
            };

            match label.trim() {
                "作者" => {
                    author = value
                        .trim()
                        .split(' ')
                        .next()
                        .unwrap_or_default()
                        .to_string()
                }
                "標題" => title = value.trim().to_string(),
                _ => (),
            }
        }

        (author, title)
    }

    /// Concatenated text of the main content, skipping meta lines and
    /// pushes. Tags are dropped, text is kept (signature spans included;
    /// [clean::strip_boilerplate] removes them afterwards).
    fn body_text(&self, main: &ElementRef) -> String {
        let mut body = String::new();

        for child in main.children() {
            if let Some(text) = child.value().as_text() {
                body.push_str(text);
            } else if let Some(element) = ElementRef::wrap(child) {
                let skip = element
                    .value()
                    .classes()
                    .any(|c| c.starts_with("article-meta") || c == "push");
                if skip {
                    continue;
                }
                for text in element.text() {
                    body.push_str(text);
                }
            }
        }

        body
    }

    /// Structured pushes and the reaction tally. Pushes with an unknown
    /// label are excluded from both.
    fn pushes(&self, doc: &Html) -> (Vec<Comment>, Vote) {
        let mut comments = Vec::new();
        let mut vote = Vote::default();

        for (i, push) in doc.select(&self.push).enumerate() {
            let label = self
                .first_text(&push, &self.push_tag)
                .trim()
                .to_string();

            let reaction = match Reaction::from_label(&label) {
                Some(reaction) => reaction,
                None => {
                    warn!("skipping push {} with unknown label {:?}", i + 1, label);
                    continue;
                }
            };
            vote.add(reaction);

            let author = self
                .first_text(&push, &self.push_userid)
                .split(' ')
                .next()
                .unwrap_or_default()
                .to_string();
            let content = self
                .first_text(&push, &self.push_content)
                .trim_start_matches([' ', ':'])
                .to_string();

            comments.push(Comment {
                author,
                reaction,
                content,
                order: i + 1,
            });
        }

        (comments, vote)
    }

    fn first_text(&self, scope: &ElementRef, selector: &Selector) -> String {
        scope
            .select(selector)
            .next()
            .map(|el| el.text().collect::<String>())
            .unwrap_or_default()
    }
}

impl Default for PostExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::PostExtractor;
    use crate::post::Reaction;

    const PAGE: &str = r#"<html><body>
<div id="main-content" class="bbs-screen bbs-content">
<div class="article-metaline"><span class="article-meta-tag">作者</span><span class="article-meta-value">lope (語言學)</span></div>
<div class="article-metaline-right"><span class="article-meta-tag">看板</span><span class="article-meta-value">Gossiping</span></div>
<div class="article-metaline"><span class="article-meta-tag">標題</span><span class="article-meta-value">[問卦] 今天天氣如何</span></div>
今天天氣真好
大家出去玩
--
<span class="f2">※ 發信站: 批踢踢實業坊(ptt.cc), 來自: 140.112.1.2</span>
<div class="push"><span class="push-tag">推 </span><span class="push-userid">alice</span><span class="push-content">: 推一個</span></div>
<div class="push"><span class="push-tag">噓 </span><span class="push-userid">bob</span><span class="push-content">: 不同意</span></div>
<div class="push"><span class="push-tag">→ </span><span class="push-userid">carol</span><span class="push-content">: 路過</span></div>
</div>
</body></html>"#;

    fn page_path() -> PathBuf {
        PathBuf::from("data/Gossiping/2005/20050812_1445_M.1123829150.A.584.html")
    }

    #[test]
    fn full_page() {
        let extractor = PostExtractor::new();
        let post = extractor.extract(PAGE, &page_path()).unwrap().unwrap();

        assert_eq!(post.post_board, "Gossiping");
        assert_eq!(post.post_id, "M.1123829150.A.584");
        assert_eq!(post.post_time, 1123829150);
        assert_eq!(post.post_author, "lope");
        assert_eq!(post.post_title, "[問卦] 今天天氣如何");
        assert_eq!(post.post_body, "今天天氣真好\n大家出去玩");

        assert_eq!(post.post_vote.pos, 1);
        assert_eq!(post.post_vote.neg, 1);
        assert_eq!(post.post_vote.neu, 1);

        assert_eq!(post.comments.len(), 3);
        assert_eq!(post.comments[0].author, "alice");
        assert_eq!(post.comments[0].reaction, Reaction::Pos);
        assert_eq!(post.comments[0].content, "推一個");
        assert_eq!(post.comments[0].order, 1);
        assert_eq!(post.comments[2].order, 3);
    }

    #[test]
    fn missing_main_content() {
        let extractor = PostExtractor::new();
        let page = "<html><body><div class=\"bbs-screen\">deleted</div></body></html>";
        assert!(extractor.extract(page, &page_path()).unwrap().is_none());
    }

    #[test]
    fn empty_body() {
        let extractor = PostExtractor::new();
        let page = r#"<div id="main-content">
※ 引述《someone》之銘言
: 只剩引文的文章
</div>"#;
        assert!(extractor.extract(page, &page_path()).unwrap().is_none());
    }

    #[test]
    fn unknown_push_label_ignored() {
        let extractor = PostExtractor::new();
        let page = r#"<div id="main-content">內文
<div class="push"><span class="push-tag">檢舉 </span><span class="push-userid">x</span><span class="push-content">: spam</span></div>
</div>"#;
        let post = extractor.extract(page, &page_path()).unwrap().unwrap();
        assert!(post.comments.is_empty());
        assert_eq!(post.post_vote.pos + post.post_vote.neg + post.post_vote.neu, 0);
    }
}
