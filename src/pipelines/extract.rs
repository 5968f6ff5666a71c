//! HTML -> JSON extraction pipeline.
//!
//! Walks a data directory for crawled `.html` pages and writes one `.json`
//! record next to each. Re-runs are idempotent: a file whose output already
//! exists is skipped (note that this is an existence check, not a
//! transactional guarantee).
use std::fs::File;
use std::path::Path;
use std::path::PathBuf;

use log::{debug, error, info, warn};
use rayon::prelude::*;

use crate::error::Error;
use crate::extract::PostExtractor;

use super::pipeline::Pipeline;

pub struct ExtractPipeline {
    src: PathBuf,
    board: Option<String>,
}

impl ExtractPipeline {
    pub fn new(src: PathBuf, board: Option<String>) -> Self {
        Self { src, board }
    }

    fn paths(&self) -> Result<Vec<PathBuf>, Error> {
        let root = match &self.board {
            Some(board) => self.src.join(board),
            None => self.src.clone(),
        };
        let pattern = format!("{}/**/*.html", root.display());

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

    fn process_file(extractor: &PostExtractor, path: &Path) -> Result<(), Error> {
        debug!("processing {:?}", path);

        let json_path = path.with_extension("json");
        if json_path.is_file() {
            debug!("already extracted: {:?}", json_path);
            return Ok(());
        }

        let html = std::fs::read_to_string(path)?;
        match extractor.extract(&html, path)? {
            Some(post) => {
                serde_json::to_writer(File::create(&json_path)?, &post)?;
                Ok(())
            }
            None => {
                warn!("deleted or empty post: {:?}", path);
                Ok(())
            }
        }
    }
}

impl Pipeline<()> for ExtractPipeline {
    fn run(&self) -> Result<(), Error> {
        let paths = self.paths()?;
        info!("extracting {} post pages", paths.len());

        let extractor = PostExtractor::new();
        paths.par_iter().for_each(|path| {
            if let Err(e) = Self::process_file(&extractor, path) {
                error!("extraction failed for {:?}: {:?}", path, e);
            }
        });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<div id="main-content">
<div class="article-metaline"><span class="article-meta-tag">作者</span><span class="article-meta-value">lope</span></div>
測試內文
</div>"#;

    fn seed(dir: &Path) -> PathBuf {
        let year_dir = dir.join("Test").join("2005");
        std::fs::create_dir_all(&year_dir).unwrap();
        let html = year_dir.join("20050812_1445_M.1123829150.A.584.html");
        std::fs::write(&html, PAGE).unwrap();
        html
    }

    #[test]
    fn writes_sibling_json() {
        let dir = tempfile::tempdir().unwrap();
        let html = seed(dir.path());

        let pipeline = ExtractPipeline::new(dir.path().to_path_buf(), None);
        pipeline.run().unwrap();

        let json = html.with_extension("json");
        assert!(json.is_file());
        let post: crate::post::Post =
            serde_json::from_reader(File::open(&json).unwrap()).unwrap();
        assert_eq!(post.post_board, "Test");
        assert_eq!(post.post_body, "測試內文");
    }

    #[test]
    fn existing_output_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let html = seed(dir.path());
        let json = html.with_extension("json");
        std::fs::write(&json, "sentinel").unwrap();

        let pipeline = ExtractPipeline::new(dir.path().to_path_buf(), None);
        pipeline.run().unwrap();

        // untouched: pre-existing outputs are never overwritten
        assert_eq!(std::fs::read_to_string(&json).unwrap(), "sentinel");
    }

    #[test]
    fn board_scoping() {
        let dir = tempfile::tempdir().unwrap();
        let html = seed(dir.path());

        let pipeline = ExtractPipeline::new(dir.path().to_path_buf(), Some("Other".to_string()));
        pipeline.run().unwrap();

        assert!(!html.with_extension("json").exists());
    }
}
