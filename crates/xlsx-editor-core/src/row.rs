//! Row types

use crate::cell::{Cell, CellAddress};

/// A `<row>` node: a 1-based row index and its cells in document order
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    /// Row index (1-based, the `r` attribute)
    pub index: u32,
    /// Cells in this row
    cells: Vec<Cell>,
    /// Remaining `<row>` attributes (`spans`, `ht`, `customHeight`, ...) in file order
    attributes: Vec<(String, String)>,
}

impl Row {
    /// Create an empty row
    pub fn new(index: u32) -> Self {
        Self {
            index,
            cells: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Create a row from its cells
    pub fn with_cells(index: u32, cells: Vec<Cell>) -> Self {
        Self {
            index,
            cells,
            attributes: Vec::new(),
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Append a cell at the end of the row
    pub fn push_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// First cell whose reference equals `reference`, ignoring ASCII case
    pub fn cell_by_reference(&self, reference: &str) -> Option<&Cell> {
        self.cells.iter().find(|c| c.matches_reference(reference))
    }

    /// Mutable variant of [`Row::cell_by_reference`]
    pub fn cell_by_reference_mut(&mut self, reference: &str) -> Option<&mut Cell> {
        self.cells.iter_mut().find(|c| c.matches_reference(reference))
    }

    /// First cell in `column` of this row
    pub fn cell(&self, column: &str) -> Option<&Cell> {
        self.cell_by_reference(&CellAddress::reference(column, self.index))
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn push_attribute<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.attributes.push((key.into(), value.into()));
    }

    /// Look up a `<row>` attribute
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check if row has any cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells in row
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}
