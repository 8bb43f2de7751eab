//! Worksheet type

use crate::row::Row;

/// The cell data of one worksheet part (`<sheetData>`)
///
/// Rows are kept in document order. Lookups are linear scans that take the first
/// match, mirroring how the element tree itself is navigated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Worksheet {
    rows: Vec<Row>,
}

impl Worksheet {
    /// Create a worksheet with no rows
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a worksheet from its rows
    pub fn with_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Append a row at the end of the sheet data
    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// First row whose index equals `index`
    pub fn row(&self, index: u32) -> Option<&Row> {
        self.rows.iter().find(|r| r.index == index)
    }

    /// Mutable variant of [`Worksheet::row`]
    pub fn row_mut(&mut self, index: u32) -> Option<&mut Row> {
        self.rows.iter_mut().find(|r| r.index == index)
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, CellType};

    #[test]
    fn test_new_worksheet() {
        let ws = Worksheet::new();
        assert!(ws.is_empty());
        assert!(ws.row(1).is_none());
    }

    #[test]
    fn test_row_lookup_by_index_not_position() {
        let ws = Worksheet::with_rows(vec![Row::new(3), Row::new(7)]);
        assert_eq!(ws.row_count(), 2);
        assert_eq!(ws.row(7).unwrap().index, 7);
        assert!(ws.row(1).is_none());
        assert!(ws.row(2).is_none());
    }

    #[test]
    fn test_row_mut() {
        let mut ws = Worksheet::with_rows(vec![Row::new(1)]);
        ws.row_mut(1)
            .unwrap()
            .push_cell(Cell::with_reference("A1", "x", CellType::String));
        assert_eq!(ws.rows()[0].cell("A").unwrap().value(), Some("x"));
    }
}
