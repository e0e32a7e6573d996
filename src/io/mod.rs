//! The file-system boundary: the run log, the line-file writer and the
//! existence check used before creating output files.

pub mod timestamp;

use std::fs::File;
use std::fs::OpenOptions;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

/// Writes the given lines to `path`, one per line.
///
/// With `append` set the file is created if missing and extended otherwise;
/// without it any existing content is replaced, so callers guard against
/// clobbering a previous run before calling this.
pub fn write_lines(path: &Path, lines: &[String], append: bool) -> std::io::Result<()> {
    let file = if append {
        OpenOptions::new().create(true).append(true).open(path)?
    } else {
        File::create(path)?
    };

    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{line}")?;
    }

    writer.flush()
}

pub fn exists(path: &Path) -> bool {
    path.exists()
}

/// The persistent record of everything the program told the user.
///
/// Every diagnostic of a run is appended here with a timestamp, and echoed
/// to standard output when it is meant for the user rather than only for the
/// record. A failure to extend the log is reported through the `log` facade
/// and otherwise ignored; diagnostics must not take the run down with them.
#[derive(Debug)]
pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    pub fn new() -> RunLog {
        RunLog::with_path("queens.log")
    }

    pub fn with_path(path: impl Into<PathBuf>) -> RunLog {
        RunLog { path: path.into() }
    }

    /// Appends one line to the log, echoing it to standard output first when
    /// `echo` is set. The echo is preceded by a blank line.
    pub fn append(&self, text: &str, echo: bool) {
        if echo {
            println!();
            println!("{text}");
        }

        let line = format!("{} {text}", timestamp::log_entry_date());
        if let Err(error) = append_line(&self.path, &line) {
            log::warn!("could not append to {}: {error}", self.path.display());
        }
    }
}

impl Default for RunLog {
    fn default() -> RunLog {
        RunLog::new()
    }
}

fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")
}
