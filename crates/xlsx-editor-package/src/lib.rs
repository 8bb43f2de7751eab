//! # xlsx-editor-package
//!
//! The XLSX package object model used by xlsx-editor.
//!
//! A [`SpreadsheetDocument`] holds every part of the ZIP container in memory along with
//! the workbook's sheet catalog and relationships. Worksheet parts are parsed on
//! first lookup. Cell data is edited in place through
//! [`WorksheetPart::worksheet_mut`]; [`SpreadsheetDocument::save`] writes the
//! container back with untouched parts copied verbatim.
//!
//! ```rust,no_run
//! use xlsx_editor_package::SpreadsheetDocument;
//!
//! let bytes = std::fs::read("book.xlsx")?;
//! let mut doc = SpreadsheetDocument::from_bytes(bytes, true)?;
//! let rel_id = doc.sheets()[0].rel_id.clone();
//! let part = doc.worksheet_part_mut(&rel_id)?;
//! println!("{} rows", part.worksheet().row_count());
//! doc.save_file("book.xlsx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod document;
pub mod error;
pub mod relationships;
pub mod settings;
pub mod shared_strings;
pub mod workbook;
pub mod worksheet;

pub use document::SpreadsheetDocument;
pub use error::{PackageError, PackageResult};
pub use relationships::Relationship;
pub use settings::{DocumentSettings, PartCompression};
pub use shared_strings::inline_string_text;
pub use workbook::{SheetEntry, SheetState};
pub use worksheet::WorksheetPart;
