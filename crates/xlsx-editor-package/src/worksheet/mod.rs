//! Worksheet parts
//!
//! A worksheet part is split into three pieces when it is read: the XML before
//! `<sheetData>`, the parsed rows, and the XML after `</sheetData>`. The outer
//! pieces are kept as-is so that saving touches nothing but the cell data.

mod reader;
mod writer;

use xlsx_editor_core::Worksheet;

use crate::error::PackageResult;

/// A worksheet part of the package together with its parsed cell data
#[derive(Debug, Clone)]
pub struct WorksheetPart {
    part_name: String,
    worksheet: Worksheet,
    /// Everything before `<sheetData>`
    head: String,
    /// Everything after `</sheetData>`
    tail: String,
    /// Namespace prefix used for SpreadsheetML elements (e.g. `x`)
    prefix: Option<String>,
}

impl WorksheetPart {
    /// Parse a worksheet part
    pub fn parse(part_name: &str, xml: &str) -> PackageResult<Self> {
        reader::parse_worksheet_part(part_name, xml)
    }

    /// Name of the part inside the package (e.g. `xl/worksheets/sheet1.xml`)
    pub fn part_name(&self) -> &str {
        &self.part_name
    }

    pub fn worksheet(&self) -> &Worksheet {
        &self.worksheet
    }

    pub fn worksheet_mut(&mut self) -> &mut Worksheet {
        &mut self.worksheet
    }

    /// Detach the parsed cell data from the part
    pub fn into_worksheet(self) -> Worksheet {
        self.worksheet
    }

    /// Namespace prefix of the SpreadsheetML elements, if the part uses one
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Serialize the part back to XML
    pub fn to_xml(&self) -> String {
        writer::write_worksheet_part(self)
    }
}
