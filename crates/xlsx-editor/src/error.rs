//! Error types for cell editing

use std::path::PathBuf;

use thiserror::Error;
use xlsx_editor_package::PackageError;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the editing functions
#[derive(Debug, Error)]
pub enum Error {
    /// The file could not be read
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes are not a package that can be opened
    #[error("Cannot open document: {0}")]
    DocumentOpen(#[source] PackageError),

    /// No sheet in the workbook has the requested name
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// The row exists but holds no cell with the requested reference
    #[error("Cell not found: {0}")]
    CellNotFound(String),

    /// Any other package failure, passed through unchanged
    #[error(transparent)]
    Package(#[from] PackageError),
}
