//! Method-call forms of the editing functions

use xlsx_editor_core::{Cell, CellType, Row, Worksheet};
use xlsx_editor_package::{SpreadsheetDocument, WorksheetPart};

use crate::editor;
use crate::error::Result;

/// Extension trait for [`SpreadsheetDocument`] to look sheets up by name
pub trait SpreadsheetDocumentExt {
    /// See [`editor::get_worksheet_part_by_sheet_name`]
    fn worksheet_part_by_sheet_name(&self, name: &str) -> Result<&WorksheetPart>;

    /// See [`editor::get_worksheet_part_by_sheet_name_mut`]
    fn worksheet_part_by_sheet_name_mut(&mut self, name: &str) -> Result<&mut WorksheetPart>;

    /// See [`editor::get_worksheet_by_sheet_name`]
    fn worksheet_by_sheet_name(&self, name: &str) -> Result<&Worksheet>;

    /// See [`editor::get_worksheet_by_sheet_name_mut`]
    fn worksheet_by_sheet_name_mut(&mut self, name: &str) -> Result<&mut Worksheet>;

    /// See [`editor::cell_text`]
    fn cell_text(&self, cell: &Cell) -> Result<Option<String>>;
}

impl SpreadsheetDocumentExt for SpreadsheetDocument {
    fn worksheet_part_by_sheet_name(&self, name: &str) -> Result<&WorksheetPart> {
        editor::get_worksheet_part_by_sheet_name(self, name)
    }

    fn worksheet_part_by_sheet_name_mut(&mut self, name: &str) -> Result<&mut WorksheetPart> {
        editor::get_worksheet_part_by_sheet_name_mut(self, name)
    }

    fn worksheet_by_sheet_name(&self, name: &str) -> Result<&Worksheet> {
        editor::get_worksheet_by_sheet_name(self, name)
    }

    fn worksheet_by_sheet_name_mut(&mut self, name: &str) -> Result<&mut Worksheet> {
        editor::get_worksheet_by_sheet_name_mut(self, name)
    }

    fn cell_text(&self, cell: &Cell) -> Result<Option<String>> {
        editor::cell_text(self, cell)
    }
}

/// Extension trait for [`Worksheet`] to address cells by column letters and row
pub trait WorksheetExt {
    fn get_row(&self, row: u32) -> Option<&Row>;

    fn get_cell(&self, row: u32, column: &str) -> Result<Option<&Cell>>;

    fn get_cell_mut(&mut self, row: u32, column: &str) -> Result<Option<&mut Cell>>;

    fn set_cell_value<S: Into<String>>(&mut self, row: u32, column: &str, value: S) -> Result<()>;

    fn set_cell_value_and_type<S: Into<String>>(
        &mut self,
        row: u32,
        column: &str,
        value: S,
        data_type: CellType,
    ) -> Result<()>;
}

impl WorksheetExt for Worksheet {
    fn get_row(&self, row: u32) -> Option<&Row> {
        editor::get_row(self, row)
    }

    fn get_cell(&self, row: u32, column: &str) -> Result<Option<&Cell>> {
        editor::get_cell(self, row, column)
    }

    fn get_cell_mut(&mut self, row: u32, column: &str) -> Result<Option<&mut Cell>> {
        editor::get_cell_mut(self, row, column)
    }

    fn set_cell_value<S: Into<String>>(&mut self, row: u32, column: &str, value: S) -> Result<()> {
        editor::set_cell_value(self, row, column, value)
    }

    fn set_cell_value_and_type<S: Into<String>>(
        &mut self,
        row: u32,
        column: &str,
        value: S,
        data_type: CellType,
    ) -> Result<()> {
        editor::set_cell_value_and_type(self, row, column, value, data_type)
    }
}
