//! Export errors.

use std::io;

use decohack_language::CompileError;
use thiserror::Error;

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Why a patch could not be produced.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The script did not compile.
    #[error("{0}")]
    Compile(#[from] CompileError),

    /// A table lookup failed while walking the context.
    #[error("{0}")]
    Table(#[from] decohack_foundation::Error),

    /// The destination could not be written.
    #[error("failed to write patch: {0}")]
    Io(#[from] io::Error),

    /// The written bytes were not UTF-8.
    #[error("patch text is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
