//! One configured run of the puzzle: size validation, sink selection, the
//! search itself and the routing of its results.

use std::path::Path;
use std::path::PathBuf;

use crate::engine::Search;
use crate::error::QueensError;
use crate::io;
use crate::io::RunLog;
use crate::output;
use crate::output::board;
use crate::output::board::BoardMatrix;
use crate::output::trace::TraceRecorder;
use crate::output::OutputLines;

/// Board sizes above this are rejected before the search starts, to keep
/// both the runtime and the size of the generated files in check.
pub const MAX_BOARD_SIZE: i32 = 13;

/// A single configured run.
///
/// The output routing follows the mode flags: without a file, numbered
/// solutions go to standard output; with a file, they are written to it;
/// in graphical mode each solution is appended to the file as a drawn board
/// instead. Tracing can be combined with any of these and writes its own
/// file named after the moment the process started.
#[derive(Debug)]
pub struct Problem {
    n: i32,
    output_file: Option<PathBuf>,
    trace: bool,
    graphic: bool,
}

impl Problem {
    pub fn new(n: i32, output_file: Option<PathBuf>, trace: bool, graphic: bool) -> Problem {
        Problem {
            n,
            output_file,
            trace,
            graphic,
        }
    }

    /// Validates the configuration, runs the search once and routes the
    /// results.
    ///
    /// A board without solutions is not an error; the no-solution sentence
    /// goes wherever the solutions would have gone.
    pub fn run(&self, log: &RunLog) -> Result<(), QueensError> {
        // The command line already refuses negative sizes, but the library
        // surface takes any i32 and must report them rather than let the
        // buffer allocation blow up.
        if self.n < 0 {
            return Err(QueensError::NegativeSize { n: self.n });
        }

        if self.n == 0 {
            log.append("Error: The value for n must be greater than 0.", true);
            return Ok(());
        }

        if self.n > MAX_BOARD_SIZE {
            return Err(QueensError::SizeLimitExceeded { n: self.n });
        }

        let mut recorder = if self.trace {
            Some(TraceRecorder::new())
        } else {
            None
        };

        if self.graphic {
            self.run_graphic(log, &mut recorder)?;
        } else {
            self.run_text(log, &mut recorder)?;
        }

        if let Some(recorder) = recorder {
            let name = io::timestamp::trace_file_name();
            io::write_lines(Path::new(&name), recorder.lines(), false)
                .map_err(QueensError::WriteTrace)?;
            log.append("Information: Trace file successfully generated.", true);
        }

        Ok(())
    }

    /// Plain mode: collect numbered solution lines, then print or write
    /// them.
    fn run_text(
        &self,
        log: &RunLog,
        recorder: &mut Option<TraceRecorder>,
    ) -> Result<(), QueensError> {
        let mut lines = OutputLines::default();

        let mut search = Search::new(self.n as usize);
        search.run(
            |assignment| lines.push_solution(assignment),
            |assignment, accepted| {
                if let Some(recorder) = recorder.as_mut() {
                    recorder.record(assignment, accepted);
                }
            },
        );

        log::info!(
            "search finished for n = {}: {} solutions discovered",
            self.n,
            lines.lines().len()
        );

        match &self.output_file {
            None => {
                println!();
                if lines.is_empty() {
                    println!("{}", output::no_solution_message(self.n));
                } else {
                    for line in lines.lines() {
                        println!("{line}");
                    }
                }
                log.append("The solution is displayed via standard output.", false);
            }
            Some(path) => {
                check_text_extension(path)?;
                if io::exists(path) {
                    return Err(QueensError::OutputFileExists { path: path.clone() });
                }

                let to_write = if lines.is_empty() {
                    vec![output::no_solution_message(self.n)]
                } else {
                    lines.into_lines()
                };

                io::write_lines(path, &to_write, false).map_err(|source| {
                    QueensError::WriteOutput {
                        path: path.clone(),
                        source,
                    }
                })?;
                log.append(
                    &format!(
                        "Information: File \"{}\" successfully generated.",
                        path.display()
                    ),
                    true,
                );
            }
        }

        Ok(())
    }

    /// Graphical mode: append a labelled board drawing to the output file
    /// for every solution as it is discovered.
    fn run_graphic(
        &self,
        log: &RunLog,
        recorder: &mut Option<TraceRecorder>,
    ) -> Result<(), QueensError> {
        let Some(path) = self.output_file.as_deref() else {
            return Err(QueensError::GraphicRequiresFile);
        };

        check_text_extension(path)?;
        if io::exists(path) {
            return Err(QueensError::GraphicFileExists {
                path: path.to_owned(),
            });
        }

        let mut found = 0_usize;
        let mut write_error: Option<std::io::Error> = None;

        let mut search = Search::new(self.n as usize);
        search.run(
            |assignment| {
                found += 1;
                if write_error.is_some() {
                    return;
                }

                let mut chunk = vec![
                    String::new(),
                    output::solution_label(assignment),
                    String::new(),
                ];
                chunk.extend(board::render(&BoardMatrix::from_assignment(assignment)));

                if let Err(source) = io::write_lines(path, &chunk, true) {
                    write_error = Some(source);
                }
            },
            |assignment, accepted| {
                if let Some(recorder) = recorder.as_mut() {
                    recorder.record(assignment, accepted);
                }
            },
        );

        log::info!(
            "search finished for n = {}: {found} solutions drawn",
            self.n
        );

        if let Some(source) = write_error {
            return Err(QueensError::WriteOutput {
                path: path.to_owned(),
                source,
            });
        }

        if found == 0 {
            let chunk = vec![
                String::new(),
                output::no_solution_message(self.n),
                String::new(),
            ];
            io::write_lines(path, &chunk, true).map_err(|source| QueensError::WriteOutput {
                path: path.to_owned(),
                source,
            })?;
        }

        log.append(
            &format!(
                "Information: File \"{}\" successfully generated.",
                path.display()
            ),
            true,
        );

        Ok(())
    }
}

fn check_text_extension(path: &Path) -> Result<(), QueensError> {
    if path.extension().is_some_and(|extension| extension == "txt") {
        Ok(())
    } else {
        Err(QueensError::NotATextFile {
            path: path.to_owned(),
        })
    }
}
