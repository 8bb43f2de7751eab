//! Prelude module - common imports for xlsx-editor users
//!
//! ```rust
//! use xlsx_editor::prelude::*;
//! ```

pub use crate::{
    // Cell types
    Cell,
    CellAddress,
    CellType,
    // Configuration
    DocumentSettings,
    // Error types
    Error,
    PartCompression,
    Result,
    Row,
    // Main types
    SpreadsheetDocument,
    // Extension traits
    SpreadsheetDocumentExt,
    Worksheet,
    WorksheetExt,
};

pub use crate::editor::{
    construct_cell, get_cell, get_cell_mut, get_row, get_row_mut, get_worksheet_by_sheet_name,
    get_worksheet_by_sheet_name_mut, get_worksheet_part_by_sheet_name,
    get_worksheet_part_by_sheet_name_mut, open_document, set_cell_value,
    set_cell_value_and_type,
};
