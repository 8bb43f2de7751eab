//! # xlsx-editor-core
//!
//! Node types for the xlsx-editor cell editing library.
//!
//! These types mirror the `sheetData` element tree of a SpreadsheetML worksheet:
//! - [`Worksheet`] - the ordered rows of one worksheet part
//! - [`Row`] - a `<row>` element with its 1-based index
//! - [`Cell`] - a `<c>` element: reference, raw value text and data type tag
//! - [`CellType`] - the `t` attribute of a cell
//! - [`CellAddress`] - A1-style references
//!
//! ## Example
//!
//! ```rust
//! use xlsx_editor_core::{Cell, CellType, Row, Worksheet};
//!
//! let mut row = Row::new(2);
//! row.push_cell(Cell::with_reference("B2", "10", CellType::Number));
//!
//! let mut sheet = Worksheet::new();
//! sheet.push_row(row);
//!
//! let cell = sheet.row(2).unwrap().cell_by_reference("b2").unwrap();
//! assert_eq!(cell.value(), Some("10"));
//! ```

pub mod cell;
pub mod error;
pub mod row;
pub mod worksheet;

pub use cell::{Cell, CellAddress, CellType, Formula};
pub use error::{Error, Result};
pub use row::Row;
pub use worksheet::Worksheet;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;
