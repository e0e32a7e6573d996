use std::path::PathBuf;

use thiserror::Error;

/// The failures that can end a run before or after the search. Zero
/// discovered solutions is not among them; it is a legitimate outcome
/// reported through the normal output channel.
#[derive(Debug, Error)]
pub enum QueensError {
    /// The size limit exists to keep both the runtime and the generated
    /// files within reason.
    #[error("The board size and the number of queens cannot be greater than n = 13.")]
    SizeLimitExceeded { n: i32 },

    #[error("The value for n cannot be a negative number.")]
    NegativeSize { n: i32 },

    #[error("The output file must be a text file with the .txt extension")]
    NotATextFile { path: PathBuf },

    #[error("The file \"{}\" already exists.", path.display())]
    OutputFileExists { path: PathBuf },

    /// Graphical output appends to its target, so a pre-existing file is
    /// refused before the search starts.
    #[error("The graphic file \"{}\" already exists.", path.display())]
    GraphicFileExists { path: PathBuf },

    #[error("The graphical output requires an output file with the .txt extension")]
    GraphicRequiresFile,

    #[error("There was a problem generating the output file: {}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("There was a problem generating the trace file.")]
    WriteTrace(#[source] std::io::Error),
}
