//! Command-line front-end: argument parsing, logging setup and dispatch
//! into [`Problem`].

use std::path::PathBuf;

use clap::Parser;

use crate::io::RunLog;
use crate::problem::Problem;

/// Enumerate all placements of n non-attacking queens on an n x n board.
#[derive(Debug, Parser)]
#[command(name = "queens")]
pub struct Cli {
    /// The size of the board and the number of queens. At most 13; a size of
    /// 0 runs no search.
    #[arg(value_parser = clap::value_parser!(i32).range(0..))]
    pub n: i32,

    /// The output file for the solutions. Must have the .txt extension and
    /// must not exist yet. Without it, solutions go to standard output.
    pub output: Option<PathBuf>,

    /// Record the accepted and rejected placements tried at the last row and
    /// write them to a timestamped trace file.
    #[arg(short = 't', long = "trace")]
    pub trace: bool,

    /// Write each solution as a drawn board instead of a position list.
    /// Requires an output file.
    #[arg(short = 'g', long = "graphic", requires = "output")]
    pub graphic: bool,
}

/// Runs the program once. Any [`QueensError`](crate::QueensError) is echoed
/// to the user, appended to the run log and propagated so the process exits
/// with a non-zero status.
pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    let args = Cli::parse();
    let log = RunLog::new();

    let problem = Problem::new(args.n, args.output, args.trace, args.graphic);
    match problem.run(&log) {
        Ok(()) => Ok(()),
        Err(error) => {
            log.append(&format!("Error: {error}"), true);
            Err(error.into())
        }
    }
}
