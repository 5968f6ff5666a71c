//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use crate::io::writer::CorpusFormat;

#[derive(Debug, StructOpt)]
#[structopt(name = "formosa", about = "PTT corpus generation tool.")]
/// Holds every command that is callable by the `formosa` command.
pub enum Formosa {
    #[structopt(about = "Extract post pages (.html) into structured records (.json)")]
    Extract(Extract),
    #[structopt(about = "Segment, tag and render records (.json) into corpus files")]
    Corpus(Corpus),
    #[structopt(about = "Merge per-post .vrt files into one file per board")]
    Merge(Merge),
    #[structopt(about = "Print the newest post timestamp of a board")]
    Latest(Latest),
    #[structopt(about = "Print per-board, per-year file counts")]
    List(List),
}

#[derive(Debug, StructOpt)]
/// Extract command and parameters.
pub struct Extract {
    #[structopt(parse(from_os_str), help = "data directory (<data>/<board>/<year>/*.html)")]
    pub src: PathBuf,
    #[structopt(short = "b", long = "board", help = "restrict to one board")]
    pub board: Option<String>,
}

#[derive(Debug, StructOpt)]
/// Corpus command and parameters.
pub struct Corpus {
    #[structopt(parse(from_os_str), help = "data directory (<data>/<board>/<year>/*.json)")]
    pub src: PathBuf,
    #[structopt(short = "b", long = "board", help = "restrict to one board")]
    pub board: Option<String>,
    #[structopt(
        short = "f",
        long = "format",
        help = "output format: vrt or tei",
        default_value = "vrt"
    )]
    pub format: CorpusFormat,
    #[structopt(
        parse(from_os_str),
        long = "wordseg-lib",
        help = "path to libWordSeg.so",
        default_value = "lib/libWordSeg.so"
    )]
    pub wordseg_lib: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "wordseg-ini",
        help = "path to the engine initialization file",
        default_value = "ws.ini"
    )]
    pub wordseg_ini: PathBuf,
}

#[derive(Debug, StructOpt)]
/// Merge command and parameters.
pub struct Merge {
    #[structopt(parse(from_os_str), help = "data directory holding per-post .vrt files")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination directory for per-board .vrt files")]
    pub dst: PathBuf,
}

#[derive(Debug, StructOpt)]
pub struct Latest {
    #[structopt(parse(from_os_str), help = "data directory")]
    pub src: PathBuf,
    #[structopt(help = "board name")]
    pub board: String,
}

#[derive(Debug, StructOpt)]
pub struct List {
    #[structopt(parse(from_os_str), help = "data directory")]
    pub src: PathBuf,
    #[structopt(short = "b", long = "board", help = "restrict to one board")]
    pub board: Option<String>,
    #[structopt(
        short = "e",
        long = "ext",
        help = "file extension to count",
        default_value = "json"
    )]
    pub extension: String,
}
