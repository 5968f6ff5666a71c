//! TEI-style XML rendering.
use chrono::Datelike;

use crate::error::Error;
use crate::post::Post;
use crate::segment::TaggedSentence;

use super::{field, post_datetime};

const BODY_INDENT: &str = "                ";

/// Renders one field as `<w type="tag">word</w>` elements.
pub fn render_field(sentences: &[TaggedSentence]) -> String {
    field(sentences, BODY_INDENT, |token| {
        format!(r#"<w type="{}">{}</w>"#, token.tag, token.word)
    })
}

/// Renders a post as a `<TEI.2>` document: header metadata, then title,
/// body and one `<comment>` element per push.
pub fn render_post(
    post: &Post,
    title: &[TaggedSentence],
    body: &[TaggedSentence],
    comments: &[Vec<TaggedSentence>],
) -> Result<String, Error> {
    let datetime = post_datetime(post)?;

    let mut comments_text = String::from("\n");
    for (comment, tagged) in post.comments.iter().zip(comments) {
        comments_text.push_str(&format!(
            r#"
<comment author="{author}" c_type="{c_type}">
<s>
{content}
</s>
</comment>
"#,
            author = comment.author,
            c_type = comment.reaction.as_str(),
            content = render_field(tagged),
        ));
    }

    Ok(format!(
        r#"<TEI.2>
    <teiHeader>
        <metadata name="author">{author}</metadata>
        <metadata name="post_id">{id}</metadata>
        <metadata name="year">{year}</metadata>
        <metadata name="board">{board}</metadata>
    </teiHeader>
    <text>
        <title author="{author}">
            <s>
                {title}
            </s>
        </title>
        <body author="{author}">
                {body}
        </body>
        {comments}
    </text>
</TEI.2>"#,
        author = post.post_author,
        id = post.post_id,
        year = datetime.year(),
        board = post.post_board,
        title = render_field(title),
        body = render_field(body),
        comments = comments_text,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::Vote;
    use crate::segment::TaggedToken;

    fn sentence(tokens: &[(&str, &str)]) -> TaggedSentence {
        tokens
            .iter()
            .map(|(w, t)| TaggedToken::new(*w, *t))
            .collect()
    }

    #[test]
    fn empty_field() {
        assert_eq!(render_field(&[]), "");
    }

    #[test]
    fn link_only_field_suppressed() {
        assert_eq!(render_field(&[sentence(&[("https://x", "FW")])]), "");
    }

    #[test]
    fn single_sentence_tokens() {
        let out = render_field(&[sentence(&[("我", "Nh"), ("睡覺", "VA")])]);
        assert_eq!(out, "<w type=\"Nh\">我</w>\n<w type=\"VA\">睡覺</w>");
    }

    #[test]
    fn multi_sentence_indented() {
        let out = render_field(&[sentence(&[("我", "Nh")]), sentence(&[("睡覺", "VA")])]);
        assert_eq!(
            out,
            format!(
                "\n<s>\n{i}<w type=\"Nh\">我</w>\n</s>\n<s>\n{i}<w type=\"VA\">睡覺</w>\n</s>\n",
                i = BODY_INDENT
            )
        );
    }

    #[test]
    fn header_metadata() {
        let post = Post {
            post_board: "Gossiping".to_string(),
            post_id: "M.1123829150.A.584".to_string(),
            post_time: 1123829150,
            post_title: "標題".to_string(),
            post_author: "lope".to_string(),
            post_body: "我睡覺".to_string(),
            post_vote: Vote::default(),
            comments: Vec::new(),
        };
        let out = render_post(
            &post,
            &[sentence(&[("標題", "Na")])],
            &[sentence(&[("我", "Nh")])],
            &[],
        )
        .unwrap();

        assert!(out.starts_with("<TEI.2>"));
        assert!(out.contains(r#"<metadata name="author">lope</metadata>"#));
        assert!(out.contains(r#"<metadata name="post_id">M.1123829150.A.584</metadata>"#));
        assert!(out.contains(r#"<metadata name="year">2005</metadata>"#));
        assert!(out.contains(r#"<metadata name="board">Gossiping</metadata>"#));
        assert!(out.ends_with("</TEI.2>"));
    }
}
