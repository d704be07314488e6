use std::io;
use std::path::PathBuf;

/// Errors from training on a reader or file.
///
/// Training on an in-memory passage cannot fail; only the I/O around it can.
#[derive(Debug, thiserror::Error)]
pub enum TrainError {
    /// The training file could not be opened.
    #[error("failed to open training file {}: {source}", .path.display())]
    Open {
        /// The path that was passed in.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
    /// Reading a passage failed, including input that is not valid UTF-8.
    #[error("failed to read training passage: {0}")]
    Read(#[from] io::Error),
}
