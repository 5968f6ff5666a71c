/*! Filtering utilities

Filters operate at sentence (line) level and decide whether a piece of text
is worth sending to the segmentation engine.

Filters implement [filter::Filter]: a stateless, pure detection
(2 successive equal inputs -> 2 equal outputs).
! */
mod filter;
mod sentence;

pub use filter::Filter;
pub use sentence::segmentable_sentences;
pub use sentence::HasCjk;
