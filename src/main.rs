//! `formosa` binary: command dispatch.
use structopt::StructOpt;

use log::{debug, info};

use formosa::cli;
use formosa::error::Error;
use formosa::pipelines::board;
use formosa::pipelines::{CorpusPipeline, ExtractPipeline, Pipeline};
use formosa::segment::CkipConfig;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Formosa::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Formosa::Extract(e) => {
            ExtractPipeline::new(e.src, e.board).run()?;
        }

        cli::Formosa::Corpus(c) => {
            let ckip = CkipConfig {
                library: c.wordseg_lib,
                ini: c.wordseg_ini,
            };
            CorpusPipeline::new(c.src, c.board, c.format, ckip).run()?;
        }

        cli::Formosa::Merge(m) => {
            board::merge_vrt(&m.src, &m.dst)?;
        }

        cli::Formosa::Latest(l) => {
            let timestamp = board::latest_post_timestamp(&l.src, &l.board)?;
            info!("newest post timestamp for {}: {}", l.board, timestamp);
            println!("{}", timestamp);
        }

        cli::Formosa::List(l) => {
            let boards = match l.board {
                Some(board) => vec![board],
                None => board::boards(&l.src)?,
            };

            for board_name in boards {
                println!("[{}]", board_name);
                let counts = board::counts_by_year(&l.src.join(&board_name), &l.extension)?;
                let total: usize = counts.iter().map(|(_, n)| n).sum();
                for (year, count) in counts {
                    println!("-- {}: {}", year, count);
                }
                println!("---- total: {}", total);
            }
        }
    };

    Ok(())
}
