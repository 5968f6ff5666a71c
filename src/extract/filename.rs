//! Crawler filename grammar.
//!
//! The crawler saves each post as `<yyyymmdd>_<hhmm>_<post-id>.html`, e.g.
//! `20050812_1445_M.1123829150.A.584.html`, under `<data>/<board>/<year>/`.
//! The post id itself embeds the 10-digit unix timestamp of the post.
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;

lazy_static! {
    static ref EPOCH: Regex = Regex::new(r"\d{10}").unwrap();
}

/// Extracts `(post_id, timestamp)` from a file stem.
///
/// The post id is the last `_`-separated field; the timestamp is the first
/// 10-digit run found in the stem.
pub fn parse_stem(stem: &str) -> Result<(String, i64), Error> {
    let post_id = stem.rsplit('_').next().unwrap_or(stem).to_string();
    let timestamp = EPOCH
        .find(stem)
        .ok_or_else(|| Error::Custom(format!("no timestamp in file stem {:?}", stem)))?
        .as_str()
        .parse::<i64>()?;

    Ok((post_id, timestamp))
}

/// Timestamp alone, for inventory scans.
pub fn timestamp_of(path: &Path) -> Option<i64> {
    let stem = path.file_stem()?.to_str()?;
    parse_stem(stem).map(|(_, ts)| ts).ok()
}

/// Board name from the crawler's directory layout
/// (`<data>/<board>/<year>/<file>`).
pub fn board_of(path: &Path) -> String {
    path.parent()
        .and_then(Path::parent)
        .and_then(Path::file_name)
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string()
}
