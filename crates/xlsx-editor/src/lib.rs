//! # xlsx-editor
//!
//! Open an XLSX file, find a worksheet by its display name, find a row by
//! index and a cell by column letters, and overwrite the cell's raw value and
//! type tag in place.
//!
//! ## Example
//!
//! ```rust,no_run
//! use xlsx_editor::prelude::*;
//!
//! let mut doc = open_document("report.xlsx", true)?;
//!
//! let sheet = get_worksheet_by_sheet_name_mut(&mut doc, "Summary")?;
//! set_cell_value_and_type(sheet, 2, "B", "hello", CellType::String)?;
//!
//! doc.save_file("report.xlsx")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The same operations are available as methods through
//! [`SpreadsheetDocumentExt`] and [`WorksheetExt`].

pub mod editor;
pub mod error;
mod ext;
pub mod prelude;

pub use editor::{
    cell_text, construct_cell, get_cell, get_cell_mut, get_row, get_row_mut,
    get_worksheet_by_sheet_name, get_worksheet_by_sheet_name_mut,
    get_worksheet_part_by_sheet_name, get_worksheet_part_by_sheet_name_mut, open_document,
    open_document_from_bytes, open_document_from_reader, open_document_with,
    read_worksheet_by_sheet_name, set_cell_value, set_cell_value_and_type,
};
pub use error::{Error, Result};
pub use ext::{SpreadsheetDocumentExt, WorksheetExt};

// Re-export core types
pub use xlsx_editor_core::{
    Cell, CellAddress, CellType, Error as CoreError, Formula, Row, Worksheet, MAX_COLS, MAX_ROWS,
};

// Re-export package types
pub use xlsx_editor_package::{
    DocumentSettings, PackageError, PartCompression, Relationship, SheetEntry, SheetState,
    SpreadsheetDocument, WorksheetPart,
};
