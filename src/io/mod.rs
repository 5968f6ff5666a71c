/*!
# IO utilities

Corpus serialization: rendering tagged posts into VRT and TEI markup.
!*/
pub mod writer;
