/*!
# Formosa

🌊 Formosa turns crawled [PTT](https://www.ptt.cc) board-post pages into a
linguistic corpus.

The pipeline has two stages:
1. `extract`: parse each post page (HTML) into a structured record
   (author, title, timestamp, body, pushes) and store it as JSON.
2. `corpus`: segment and POS-tag the Chinese text of each record through the
   CKIP WordSeg shared library, and render the result as VRT or TEI-style XML.

The crate can be used as a binary (see `formosa --help`) or as a library to
embed extraction and segmentation into other projects.
!*/
pub mod cli;
pub mod error;
pub mod extract;
pub mod filtering;
pub mod io;
pub mod pipelines;
pub mod post;
pub mod segment;
