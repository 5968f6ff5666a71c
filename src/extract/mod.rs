/*! HTML post extraction.

Turns a crawled board-post page into a [crate::post::Post]:
- [PostExtractor] queries the page DOM (main content, meta labels,
  pushes),
- [clean] removes boilerplate from the extracted body text,
- [filename] recovers post id and timestamp from the crawler's
  filename grammar.
!*/
pub mod clean;
pub mod filename;
mod html;

pub use html::PostExtractor;
