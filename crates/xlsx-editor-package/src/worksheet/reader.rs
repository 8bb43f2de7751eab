//! Worksheet part reader

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::reader::Reader;

use xlsx_editor_core::{Cell, CellAddress, CellType, Formula, Row, Worksheet};

use super::WorksheetPart;
use crate::error::{PackageError, PackageResult};

pub(super) fn parse_worksheet_part(part_name: &str, xml: &str) -> PackageResult<WorksheetPart> {
    let mut reader = Reader::from_str(xml);

    loop {
        let start = reader.buffer_position();
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"sheetData" => {
                let prefix = element_prefix(&e);
                let rows = read_sheet_data(&mut reader, xml)?;
                let end = reader.buffer_position();
                log::debug!("{}: parsed {} rows", part_name, rows.len());
                return Ok(WorksheetPart {
                    part_name: part_name.to_string(),
                    worksheet: Worksheet::with_rows(rows),
                    head: xml[..start].to_string(),
                    tail: xml[end..].to_string(),
                    prefix,
                });
            }
            Event::Empty(e) if e.local_name().as_ref() == b"sheetData" => {
                let end = reader.buffer_position();
                return Ok(WorksheetPart {
                    part_name: part_name.to_string(),
                    worksheet: Worksheet::new(),
                    head: xml[..start].to_string(),
                    tail: xml[end..].to_string(),
                    prefix: element_prefix(&e),
                });
            }
            Event::Eof => {
                return Err(PackageError::InvalidFormat(format!(
                    "{} has no <sheetData>",
                    part_name
                )))
            }
            _ => {}
        }
    }
}

fn read_sheet_data(reader: &mut Reader<&[u8]>, xml: &str) -> PackageResult<Vec<Row>> {
    let mut rows = Vec::new();
    // Rows without an `r` attribute follow the previous row
    let mut next_index = 1;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"row" => {
                let mut row = row_from_start(&e, next_index)?;
                read_row_cells(reader, xml, &mut row)?;
                next_index = row.index.saturating_add(1);
                rows.push(row);
            }
            Event::Empty(e) if e.local_name().as_ref() == b"row" => {
                let row = row_from_start(&e, next_index)?;
                next_index = row.index.saturating_add(1);
                rows.push(row);
            }
            Event::End(e) if e.local_name().as_ref() == b"sheetData" => break,
            Event::Eof => return Err(unexpected_eof("sheetData")),
            _ => {}
        }
    }

    Ok(rows)
}

fn row_from_start(e: &BytesStart, implied_index: u32) -> PackageResult<Row> {
    let mut index = None;
    let mut attributes = Vec::new();

    for attr in e.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?;
        if attr.key.as_ref() == b"r" {
            let parsed = value
                .parse::<u32>()
                .map_err(|_| PackageError::Parse(format!("invalid row index '{}'", value)))?;
            index = Some(parsed);
        } else {
            attributes.push((key_string(&attr.key), value.into_owned()));
        }
    }

    let mut row = Row::new(index.unwrap_or(implied_index));
    for (key, value) in attributes {
        row.push_attribute(key, value);
    }
    Ok(row)
}

fn read_row_cells(reader: &mut Reader<&[u8]>, xml: &str, row: &mut Row) -> PackageResult<()> {
    let mut next_col: u16 = 0;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"c" => {
                let mut cell = cell_from_start(&e)?;
                read_cell_children(reader, xml, &mut cell)?;
                next_col = place_cell(&mut cell, row.index, next_col);
                row.push_cell(cell);
            }
            Event::Empty(e) if e.local_name().as_ref() == b"c" => {
                let mut cell = cell_from_start(&e)?;
                next_col = place_cell(&mut cell, row.index, next_col);
                row.push_cell(cell);
            }
            Event::End(e) if e.local_name().as_ref() == b"row" => break,
            Event::Eof => return Err(unexpected_eof("row")),
            _ => {}
        }
    }

    Ok(())
}

/// Give a cell without `r` its implied reference; returns the next implied column.
fn place_cell(cell: &mut Cell, row_index: u32, next_col: u16) -> u16 {
    match cell.address() {
        Some(Ok(addr)) => addr.col.saturating_add(1),
        Some(Err(_)) => next_col.saturating_add(1),
        None => {
            let addr = CellAddress::new(row_index, next_col);
            cell.set_reference(addr.to_a1_string());
            addr.next_column().col
        }
    }
}

fn cell_from_start(e: &BytesStart) -> PackageResult<Cell> {
    let mut cell = Cell::new();

    for attr in e.attributes() {
        let attr = attr?;
        let value = attr.unescape_value()?;
        match attr.key.as_ref() {
            b"r" => cell.set_reference(value),
            b"t" => match CellType::from_xlsx(&value) {
                Some(data_type) => cell.set_data_type(Some(data_type)),
                None => {
                    log::warn!("cell has unknown type '{}', keeping it as written", value);
                    cell.push_attribute("t", value);
                }
            },
            b"s" => {
                let style = value
                    .parse::<u32>()
                    .map_err(|_| PackageError::Parse(format!("invalid style index '{}'", value)))?;
                cell.set_style_index(Some(style));
            }
            _ => cell.push_attribute(key_string(&attr.key), value),
        }
    }

    Ok(cell)
}

fn read_cell_children(
    reader: &mut Reader<&[u8]>,
    xml: &str,
    cell: &mut Cell,
) -> PackageResult<()> {
    loop {
        let start = reader.buffer_position();
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"v" => {
                    let text = read_text(reader, "v")?;
                    cell.set_value(text);
                }
                b"f" => {
                    let attributes = attributes_of(&e)?;
                    let text = read_text(reader, "f")?;
                    cell.set_formula(Some(Formula { text, attributes }));
                }
                b"is" => {
                    let inner_start = reader.buffer_position();
                    reader.read_to_end(e.name())?;
                    let outer = &xml[inner_start..reader.buffer_position()];
                    let inner = outer.rfind("</").map_or(outer, |close| &outer[..close]);
                    cell.set_inline_string_xml(Some(inner.to_string()));
                }
                _ => {
                    reader.read_to_end(e.name())?;
                    append_extension(cell, &xml[start..reader.buffer_position()]);
                }
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"v" => cell.set_value(""),
                b"f" => cell.set_formula(Some(Formula {
                    text: String::new(),
                    attributes: attributes_of(&e)?,
                })),
                b"is" => cell.set_inline_string_xml(Some(String::new())),
                _ => append_extension(cell, &xml[start..reader.buffer_position()]),
            },
            Event::End(e) if e.local_name().as_ref() == b"c" => break,
            Event::Eof => return Err(unexpected_eof("c")),
            _ => {}
        }
    }

    Ok(())
}

fn append_extension(cell: &mut Cell, raw: &str) {
    let combined = match cell.extension_xml() {
        Some(existing) => format!("{}{}", existing, raw),
        None => raw.to_string(),
    };
    cell.set_extension_xml(Some(combined));
}

/// Text content up to the closing `</tag>`
fn read_text(reader: &mut Reader<&[u8]>, tag: &str) -> PackageResult<String> {
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Text(t) => text.push_str(&t.unescape()?),
            Event::CData(c) => text.push_str(&String::from_utf8_lossy(&c)),
            Event::End(e) if e.local_name().as_ref() == tag.as_bytes() => break,
            Event::Eof => return Err(unexpected_eof(tag)),
            _ => {}
        }
    }

    Ok(text)
}

fn attributes_of(e: &BytesStart) -> PackageResult<Vec<(String, String)>> {
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr?;
        attributes.push((key_string(&attr.key), attr.unescape_value()?.into_owned()));
    }
    Ok(attributes)
}

fn key_string(key: &QName) -> String {
    String::from_utf8_lossy(key.as_ref()).into_owned()
}

fn element_prefix(e: &BytesStart) -> Option<String> {
    e.name()
        .prefix()
        .map(|p| String::from_utf8_lossy(p.as_ref()).into_owned())
}

fn unexpected_eof(tag: &str) -> PackageError {
    PackageError::Parse(format!("unexpected end of worksheet inside <{}>", tag))
}
