use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort a run.
///
/// The pipeline is a single pass with no retry policy: the first error is
/// terminal and no report is produced.
#[derive(Debug, Error)]
pub enum Error {
    /// A boundary probe found no line terminator, meaning a single record is
    /// longer than the probe window and the file cannot be split there.
    #[error("no line terminator within the {window}-byte probe at offset {offset}")]
    UnterminatedRecord { offset: usize, window: usize },

    /// A record has no delimiter between station and measurement.
    #[error("line at byte {offset} has no delimiter: {line:?}")]
    MissingDelimiter { offset: usize, line: String },

    /// A record's value field is not a valid decimal number.
    #[error("invalid measurement {text:?} at byte {offset}")]
    InvalidMeasurement { offset: usize, text: String },

    /// The input file could not be opened, stat'd, or mapped.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The worker pool could not be built.
    #[error("worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}
