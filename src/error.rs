use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SplitError>;

/// Errors that can occur while splitting a PDF.
#[derive(Error, Debug)]
pub enum SplitError {
    /// The input file does not exist.
    #[error("input file does not exist: {0:?}")]
    NotFound(PathBuf),

    /// The input file does not have a .pdf extension.
    #[error("input file must be a PDF: {0:?}")]
    InvalidFormat(PathBuf),

    /// The split points are empty, unsorted, or out of bounds.
    #[error("{0}")]
    InvalidArgument(String),

    /// The input PDF could not be parsed.
    #[error("failed to read PDF: {0}")]
    Read(#[source] lopdf::Error),

    /// Filesystem failure outside of PDF serialization.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An extracted document could not be written out.
    #[error("failed to save {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },
}
