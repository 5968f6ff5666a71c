/*! Structured board posts.

A [Post] is the interchange record produced by HTML extraction and consumed
by the corpus rendering pipelines. Its JSON shape is stable: already
generated `.json` files must keep deserializing.
!*/
mod document;
mod reaction;

pub use document::Comment;
pub use document::Post;
pub use document::Vote;
pub use reaction::Reaction;
