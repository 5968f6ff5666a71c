//! JSON -> corpus (VRT/TEI) pipeline.
//!
//! Walks a data directory for extracted `.json` records, segments and tags
//! the Chinese text of each, and writes the rendered corpus file next to the
//! record. The segmentation engine is not thread-safe, so the file list is
//! split into one chunk per rayon worker and every chunk opens its own
//! engine instance.
//!
//! Engine calls are synchronous with no timeout: a hang in the native
//! library blocks its worker.
use std::path::Path;
use std::path::PathBuf;

use log::{debug, error, info};
use rayon::prelude::*;

use crate::error::Error;
use crate::filtering::segmentable_sentences;
use crate::io::writer::CorpusFormat;
use crate::post::Post;
use crate::segment::{seg_and_pos, CkipConfig, CkipSegmenter, Segmenter, TaggedSentence};

use super::pipeline::Pipeline;

pub struct CorpusPipeline {
    src: PathBuf,
    board: Option<String>,
    format: CorpusFormat,
    ckip: CkipConfig,
}

/// Segments every text field of a post and renders it in `format`.
///
/// Title and pushes are single short fields; the body is split into
/// segmentable sentences first (may end up empty, which renders to an
/// empty body block).
pub fn convert_post<S: Segmenter>(
    segmenter: &mut S,
    post: &Post,
    format: CorpusFormat,
) -> Result<String, Error> {
    let title = seg_and_pos(segmenter, &[post.post_title.clone()])?;
    let body = seg_and_pos(segmenter, &segmentable_sentences(&post.post_body))?;

    let comments: Vec<Vec<TaggedSentence>> = post
        .comments
        .iter()
        .map(|comment| seg_and_pos(segmenter, &[comment.content.clone()]))
        .collect::<Result<_, _>>()?;

    format.render_post(post, &title, &body, &comments)
}

impl CorpusPipeline {
    pub fn new(
        src: PathBuf,
        board: Option<String>,
        format: CorpusFormat,
        ckip: CkipConfig,
    ) -> Self {
        Self {
            src,
            board,
            format,
            ckip,
        }
    }

    fn paths(&self) -> Result<Vec<PathBuf>, Error> {
        let root = match &self.board {
            Some(board) => self.src.join(board),
            None => self.src.clone(),
        };
        let pattern = format!("{}/**/*.json", root.display());

        let paths = glob::glob(&pattern)?
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    error!("unreadable path: {:?}", e);
                    None
                }
            })
            .collect();
        Ok(paths)
    }

    fn process_file<S: Segmenter>(
        &self,
        segmenter: &mut S,
        path: &Path,
    ) -> Result<(), Error> {
        debug!("processing {:?}", path);

        let out_path = path.with_extension(self.format.extension());
        if out_path.is_file() {
            debug!("already converted: {:?}", out_path);
            return Ok(());
        }

        let post: Post = serde_json::from_reader(std::fs::File::open(path)?)?;
        let rendered = convert_post(segmenter, &post, self.format)?;
        std::fs::write(&out_path, rendered)?;

        Ok(())
    }
}

impl Pipeline<()> for CorpusPipeline {
    fn run(&self) -> Result<(), Error> {
        let paths = self.paths()?;
        info!(
            "converting {} post records to {:?}",
            paths.len(),
            self.format
        );

        let workers = rayon::current_num_threads().max(1);
        let chunk_size = (paths.len() / workers).max(1);

        paths.par_chunks(chunk_size).for_each(|chunk| {
            // one engine instance per chunk
            let mut segmenter = match CkipSegmenter::open(&self.ckip) {
                Ok(segmenter) => segmenter,
                Err(e) => {
                    error!("cannot open segmentation engine: {:?}", e);
                    return;
                }
            };

            for path in chunk {
                if let Err(e) = self.process_file(&mut segmenter, path) {
                    error!("conversion failed for {:?}: {:?}", path, e);
                }
            }
        });

        Ok(())
    }
}
