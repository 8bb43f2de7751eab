//! Workbook sheet catalog (`<sheets>` in the workbook part)

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::{PackageError, PackageResult};

/// Visibility of a sheet (`state` attribute)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetState {
    #[default]
    Visible,
    Hidden,
    VeryHidden,
}

impl SheetState {
    fn from_xlsx(s: &str) -> Self {
        match s {
            "hidden" => SheetState::Hidden,
            "veryHidden" => SheetState::VeryHidden,
            _ => SheetState::Visible,
        }
    }
}

/// One `<sheet>` entry of the workbook, in declared order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetEntry {
    /// Display name shown on the sheet tab
    pub name: String,
    /// `sheetId` attribute
    pub sheet_id: Option<u32>,
    /// Relationship id pointing at the sheet part
    pub rel_id: String,
    pub state: SheetState,
}

/// Read the sheet catalog from the workbook part
pub fn read_sheet_catalog(xml: &str) -> PackageResult<Vec<SheetEntry>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut sheets = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Empty(e) | Event::Start(e) if e.local_name().as_ref() == b"sheet" => {
                let mut name = None;
                let mut sheet_id = None;
                let mut rel_id = None;
                let mut state = SheetState::Visible;

                for attr in e.attributes() {
                    let attr = attr?;
                    match attr.key.local_name().as_ref() {
                        b"name" if attr.key.prefix().is_none() => {
                            name = Some(attr.unescape_value()?.into_owned());
                        }
                        b"sheetId" => {
                            sheet_id = attr.unescape_value()?.parse::<u32>().ok();
                        }
                        b"state" => {
                            state = SheetState::from_xlsx(&attr.unescape_value()?);
                        }
                        // r:id, whatever prefix the relationships namespace is bound to
                        b"id" if attr.key.prefix().is_some() => {
                            rel_id = Some(attr.unescape_value()?.into_owned());
                        }
                        _ => {}
                    }
                }

                match (name, rel_id) {
                    (Some(name), Some(rel_id)) => sheets.push(SheetEntry {
                        name,
                        sheet_id,
                        rel_id,
                        state,
                    }),
                    (name, _) => {
                        return Err(PackageError::Parse(format!(
                            "<sheet> element missing name or r:id ({:?})",
                            name
                        )))
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(sheets)
}
