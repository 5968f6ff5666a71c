//! Board directory inventory and maintenance.
//!
//! The crawler lays data out as `<data>/<board>/<year>/<post files>`; these
//! helpers work on that layout: per-year counts, newest post timestamp
//! (used to resume crawling) and merging per-post `.vrt` files into one
//! corpus file per board.
use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;

use crate::error::Error;
use crate::extract::filename;

/// Per-year file counts for one board, sorted by year.
pub fn counts_by_year(board_dir: &Path, extension: &str) -> Result<Vec<(i32, usize)>, Error> {
    let mut counts = Vec::new();

    for entry in std::fs::read_dir(board_dir)? {
        let year_dir = entry?.path();
        if !year_dir.is_dir() {
            continue;
        }
        let year: i32 = match year_dir
            .file_name()
            .and_then(|s| s.to_str())
            .and_then(|s| s.parse().ok())
        {
            Some(year) => year,
            None => continue,
        };

        let count = std::fs::read_dir(&year_dir)?
            .filter_map(Result::ok)
            .filter(|e| {
                e.path()
                    .extension()
                    .map_or(false, |ext| ext == extension)
            })
            .count();
        counts.push((year, count));
    }

    counts.sort_by_key(|(year, _)| *year);
    Ok(counts)
}

/// Board names under a data directory, sorted.
pub fn boards(data_dir: &Path) -> Result<Vec<String>, Error> {
    let mut names: Vec<String> = std::fs::read_dir(data_dir)?
        .filter_map(Result::ok)
        .filter(|e| e.path().is_dir())
        .filter_map(|e| e.file_name().to_str().map(String::from))
        .collect();
    names.sort();
    Ok(names)
}

/// Newest post timestamp for a board, from the filename grammar.
///
/// Only the latest year directory is scanned.
pub fn latest_post_timestamp(data_dir: &Path, board: &str) -> Result<i64, Error> {
    let board_dir = data_dir.join(board);
    if !board_dir.is_dir() {
        return Err(Error::Custom(format!(
            "no such board directory: {:?}",
            board_dir
        )));
    }

    let latest_year = std::fs::read_dir(&board_dir)?
        .filter_map(Result::ok)
        .filter(|e| e.path().is_dir())
        .filter_map(|e| e.file_name().to_str().and_then(|s| s.parse::<i32>().ok()))
        .max()
        .ok_or_else(|| Error::Custom(format!("board {:?} has no year directory", board)))?;

    std::fs::read_dir(board_dir.join(latest_year.to_string()))?
        .filter_map(Result::ok)
        .filter_map(|e| filename::timestamp_of(&e.path()))
        .max()
        .ok_or_else(|| Error::Custom(format!("board {:?} has no dated post file", board)))
}

/// Concatenates every per-post `.vrt` under each board into
/// `<out_dir>/<board>.vrt`.
pub fn merge_vrt(data_dir: &Path, out_dir: &Path) -> Result<(), Error> {
    for board in boards(data_dir)? {
        let out_path = out_dir.join(format!("{}.vrt", board));
        info!("merging board {} into {:?}", board, out_path);
        let mut out = File::create(&out_path)?;

        let pattern = format!("{}/**/*.vrt", data_dir.join(&board).display());
        for entry in glob::glob(&pattern)? {
            let piece = std::fs::read_to_string(entry?)?;
            out.write_all(piece.as_bytes())?;
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}
