//! VRT (vertical text) rendering.
use chrono::Datelike;

use crate::error::Error;
use crate::post::Post;
use crate::segment::TaggedSentence;

use super::{field, post_datetime};

/// Renders one field as `word<TAB>tag` lines.
pub fn render_field(sentences: &[TaggedSentence]) -> String {
    field(sentences, "", |token| {
        format!("{}\t{}", token.word, token.tag)
    })
}

/// Renders a post as a `<post>` block holding one `<text>` element for the
/// title, one for the body and one per push.
pub fn render_post(
    post: &Post,
    title: &[TaggedSentence],
    body: &[TaggedSentence],
    comments: &[Vec<TaggedSentence>],
) -> Result<String, Error> {
    let datetime = post_datetime(post)?;
    // dots clash with CWB id syntax
    let flat_id = post.post_id.replace('.', "_");

    let mut comments_text = String::from("\n");
    for (comment, tagged) in post.comments.iter().zip(comments) {
        comments_text.push_str(&format!(
            r#"
<text id="{flat_id}_comment_{order}" type="comment" author="{author}" c_type="{c_type}">
<s>
{content}
</s>
</text>
"#,
            flat_id = flat_id,
            order = comment.order,
            author = comment.author,
            c_type = comment.reaction.as_str(),
            content = render_field(tagged),
        ));
    }

    Ok(format!(
        r#"
<post id="{id}" year="{year}" month="{month}" day="{day}" neg="{neg}" pos="{pos}" neu="{neu}">
<text id="{flat_id}_title" type="title" author="{author}" c_type="NA">
<s>
{title}
</s>
</text>
<text id="{flat_id}_body" type="body" author="{author}" c_type="NA">
{body}
</text>
{comments}
</post>
"#,
        id = post.post_id,
        year = datetime.year(),
        month = datetime.month(),
        day = datetime.day(),
        neg = post.post_vote.neg,
        pos = post.post_vote.pos,
        neu = post.post_vote.neu,
        flat_id = flat_id,
        author = post.post_author,
        title = render_field(title),
        body = render_field(body),
        comments = comments_text,
    ))
}
