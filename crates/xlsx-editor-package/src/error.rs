//! Package error types

use thiserror::Error;

/// Result type for package operations
pub type PackageResult<T> = std::result::Result<T, PackageError>;

/// Errors that can occur while opening, navigating or saving a package
#[derive(Debug, Error)]
pub enum PackageError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// XML error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed XML attribute
    #[error("XML attribute error: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    /// Part is not valid UTF-8
    #[error("Part {0} is not valid UTF-8")]
    Utf8(String),

    /// Invalid file format
    #[error("Invalid XLSX format: {0}")]
    InvalidFormat(String),

    /// Missing required part
    #[error("Missing required part: {0}")]
    MissingPart(String),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// The relationship does not point at a worksheet (e.g. a chart sheet)
    #[error("Part {0} is not a worksheet")]
    NotAWorksheet(String),

    /// Mutation or save attempted on a document opened read-only
    #[error("Document was opened read-only")]
    ReadOnly,

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] xlsx_editor_core::Error),
}
