//! Cell editing functions
//!
//! Every function here is a direct walk of the document's object graph: open,
//! find the sheet by name, find the row by index, find the cell by reference,
//! overwrite. Nothing is cached between calls and nothing is saved; persisting
//! changes is up to the caller via [`SpreadsheetDocument::save`] and friends.

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use xlsx_editor_core::{Cell, CellAddress, CellType, Row, Worksheet};
use xlsx_editor_package::{
    inline_string_text, DocumentSettings, SheetEntry, SpreadsheetDocument, WorksheetPart,
};

use crate::error::{Error, Result};

/// Open a document from a file path.
///
/// The whole file is read into memory first and the file handle is released
/// before the package is opened. Worksheets are parsed when first looked up,
/// so a malformed sheet surfaces as [`Error::Package`] from the lookup rather
/// than failing the open.
///
/// With `editable` false the document is strictly read-only: the `_mut`
/// lookups fail with [`PackageError::ReadOnly`](xlsx_editor_package::PackageError::ReadOnly)
/// even for in-memory edits, and so does saving.
pub fn open_document<P: AsRef<Path>>(path: P, editable: bool) -> Result<SpreadsheetDocument> {
    open_document_with(path, DocumentSettings::from(editable))
}

/// Open a document from a file path with explicit settings
pub fn open_document_with<P: AsRef<Path>>(
    path: P,
    settings: DocumentSettings,
) -> Result<SpreadsheetDocument> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());

    SpreadsheetDocument::open_with(Cursor::new(bytes), settings).map_err(Error::DocumentOpen)
}

/// Open a document from an in-memory buffer
pub fn open_document_from_bytes(bytes: Vec<u8>, editable: bool) -> Result<SpreadsheetDocument> {
    SpreadsheetDocument::from_bytes(bytes, editable).map_err(Error::DocumentOpen)
}

/// Open a document from any seekable reader
pub fn open_document_from_reader<R: Read + Seek>(
    reader: R,
    editable: bool,
) -> Result<SpreadsheetDocument> {
    SpreadsheetDocument::open(reader, editable).map_err(Error::DocumentOpen)
}

/// First catalog entry named exactly `name`
fn resolve_sheet<'a>(document: &'a SpreadsheetDocument, name: &str) -> Result<&'a SheetEntry> {
    let mut matches = document.sheets().iter().filter(|s| s.name == name);
    let entry = matches
        .next()
        .ok_or_else(|| Error::SheetNotFound(name.to_string()))?;

    if matches.next().is_some() {
        log::warn!(
            "workbook has more than one sheet named {:?}; using the first",
            name
        );
    }
    log::debug!("sheet {:?} -> relationship {}", name, entry.rel_id);

    Ok(entry)
}

/// Resolve a sheet's display name to its worksheet part.
///
/// Names are compared exactly (case-sensitive); the first match in declared
/// order wins.
pub fn get_worksheet_part_by_sheet_name<'a>(
    document: &'a SpreadsheetDocument,
    name: &str,
) -> Result<&'a WorksheetPart> {
    let entry = resolve_sheet(document, name)?;
    Ok(document.worksheet_part(&entry.rel_id)?)
}

/// Mutable variant of [`get_worksheet_part_by_sheet_name`]
pub fn get_worksheet_part_by_sheet_name_mut<'a>(
    document: &'a mut SpreadsheetDocument,
    name: &str,
) -> Result<&'a mut WorksheetPart> {
    let rel_id = resolve_sheet(document, name)?.rel_id.clone();
    Ok(document.worksheet_part_mut(&rel_id)?)
}

/// Resolve a sheet's display name to its cell data
pub fn get_worksheet_by_sheet_name<'a>(
    document: &'a SpreadsheetDocument,
    name: &str,
) -> Result<&'a Worksheet> {
    get_worksheet_part_by_sheet_name(document, name).map(WorksheetPart::worksheet)
}

/// Mutable variant of [`get_worksheet_by_sheet_name`]
pub fn get_worksheet_by_sheet_name_mut<'a>(
    document: &'a mut SpreadsheetDocument,
    name: &str,
) -> Result<&'a mut Worksheet> {
    get_worksheet_part_by_sheet_name_mut(document, name).map(WorksheetPart::worksheet_mut)
}

/// Open `path` read-only and return a detached copy of one sheet's cell data
pub fn read_worksheet_by_sheet_name<P: AsRef<Path>>(path: P, name: &str) -> Result<Worksheet> {
    let document = open_document(path, false)?;
    let rel_id = resolve_sheet(&document, name)?.rel_id.clone();
    Ok(document.into_worksheet_part(&rel_id)?.into_worksheet())
}

/// First row whose index equals `row`
pub fn get_row(worksheet: &Worksheet, row: u32) -> Option<&Row> {
    worksheet.row(row)
}

/// Mutable variant of [`get_row`]
pub fn get_row_mut(worksheet: &mut Worksheet, row: u32) -> Option<&mut Row> {
    worksheet.row_mut(row)
}

/// Find the cell at (`row`, `column`).
///
/// The reference `column + row` is compared against each cell of the row
/// ignoring ASCII case. A missing row is not an error and yields `Ok(None)`;
/// a present row without a matching cell is [`Error::CellNotFound`].
pub fn get_cell<'a>(worksheet: &'a Worksheet, row: u32, column: &str) -> Result<Option<&'a Cell>> {
    let Some(found) = worksheet.row(row) else {
        return Ok(None);
    };

    let reference = CellAddress::reference(column, row);
    found
        .cell_by_reference(&reference)
        .map(Some)
        .ok_or(Error::CellNotFound(reference))
}

/// Mutable variant of [`get_cell`]
pub fn get_cell_mut<'a>(
    worksheet: &'a mut Worksheet,
    row: u32,
    column: &str,
) -> Result<Option<&'a mut Cell>> {
    let Some(found) = worksheet.row_mut(row) else {
        return Ok(None);
    };

    let reference = CellAddress::reference(column, row);
    found
        .cell_by_reference_mut(&reference)
        .map(Some)
        .ok_or(Error::CellNotFound(reference))
}

/// Like [`get_cell_mut`], but a missing row is a [`Error::CellNotFound`] too
fn existing_cell_mut<'a>(
    worksheet: &'a mut Worksheet,
    row: u32,
    column: &str,
) -> Result<&'a mut Cell> {
    get_cell_mut(worksheet, row, column)?
        .ok_or_else(|| Error::CellNotFound(CellAddress::reference(column, row)))
}

/// Overwrite the raw value of an existing cell, keeping its type tag
pub fn set_cell_value<S: Into<String>>(
    worksheet: &mut Worksheet,
    row: u32,
    column: &str,
    value: S,
) -> Result<()> {
    let cell = existing_cell_mut(worksheet, row, column)?;
    cell.set_value(value);
    log::trace!("{}{} value -> {:?}", column, row, cell.value());
    Ok(())
}

/// Overwrite both the raw value and the type tag of an existing cell.
///
/// The value is not checked against the type.
pub fn set_cell_value_and_type<S: Into<String>>(
    worksheet: &mut Worksheet,
    row: u32,
    column: &str,
    value: S,
    data_type: CellType,
) -> Result<()> {
    let cell = existing_cell_mut(worksheet, row, column)?;
    cell.set_value_and_type(value, data_type);
    log::trace!(
        "{}{} value -> {:?}, type -> {}",
        column,
        row,
        cell.value(),
        data_type
    );
    Ok(())
}

/// Build a standalone cell holding `value` tagged as `data_type`
pub fn construct_cell<S: Into<String>>(value: S, data_type: CellType) -> Cell {
    Cell::with_value(value, data_type)
}

/// The text a spreadsheet application would show for a cell's stored value.
///
/// Shared string indices are resolved through the document's shared string
/// table (`None` if the index is out of range), inline strings are flattened,
/// and every other type yields its raw value.
pub fn cell_text(document: &SpreadsheetDocument, cell: &Cell) -> Result<Option<String>> {
    match cell.effective_type() {
        CellType::SharedString => Ok(cell
            .value()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .and_then(|index| document.shared_string(index))
            .map(str::to_string)),
        CellType::InlineString => match cell.inline_string_xml() {
            Some(xml) => Ok(Some(inline_string_text(xml)?)),
            None => Ok(cell.value().map(str::to_string)),
        },
        _ => Ok(cell.value().map(str::to_string)),
    }
}
