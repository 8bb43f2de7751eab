//! Worksheet part writer

use quick_xml::escape::escape;

use xlsx_editor_core::{Cell, Row};

use super::WorksheetPart;

/// Element names, qualified with the part's namespace prefix
struct Tags {
    sheet_data: String,
    row: String,
    c: String,
    f: String,
    v: String,
    is: String,
}

impl Tags {
    fn new(prefix: Option<&str>) -> Self {
        let q = |local: &str| match prefix {
            Some(p) => format!("{}:{}", p, local),
            None => local.to_string(),
        };
        Self {
            sheet_data: q("sheetData"),
            row: q("row"),
            c: q("c"),
            f: q("f"),
            v: q("v"),
            is: q("is"),
        }
    }
}

pub(super) fn write_worksheet_part(part: &WorksheetPart) -> String {
    let rows = part.worksheet.rows();
    let tags = Tags::new(part.prefix.as_deref());

    let mut content = String::with_capacity(part.head.len() + part.tail.len() + rows.len() * 128);
    content.push_str(&part.head);

    if rows.is_empty() {
        content.push_str(&format!("<{}/>", tags.sheet_data));
    } else {
        content.push_str(&format!("<{}>", tags.sheet_data));
        for row in rows {
            write_row(&mut content, row, &tags);
        }
        content.push_str(&format!("</{}>", tags.sheet_data));
    }

    content.push_str(&part.tail);
    content
}

fn write_row(content: &mut String, row: &Row, tags: &Tags) {
    content.push_str(&format!("<{} r=\"{}\"", tags.row, row.index));
    write_attributes(content, row.attributes());

    if row.is_empty() {
        content.push_str("/>");
        return;
    }

    content.push('>');
    for cell in row.cells() {
        write_cell(content, cell, tags);
    }
    content.push_str(&format!("</{}>", tags.row));
}

fn write_cell(content: &mut String, cell: &Cell, tags: &Tags) {
    content.push_str(&format!("<{}", tags.c));
    if let Some(reference) = cell.reference() {
        write_attribute(content, "r", reference);
    }
    if let Some(style) = cell.style_index() {
        content.push_str(&format!(" s=\"{}\"", style));
    }
    if let Some(data_type) = cell.data_type() {
        content.push_str(&format!(" t=\"{}\"", data_type.as_xlsx()));
    }
    write_attributes(content, cell.attributes());

    if cell.is_empty() && cell.extension_xml().is_none() {
        content.push_str("/>");
        return;
    }

    content.push('>');

    if let Some(formula) = cell.formula() {
        content.push_str(&format!("<{}", tags.f));
        write_attributes(content, &formula.attributes);
        if formula.text.is_empty() {
            content.push_str("/>");
        } else {
            content.push_str(&format!(">{}</{}>", escape(&formula.text), tags.f));
        }
    }

    if let Some(value) = cell.value() {
        content.push_str(&format!("<{0}>{1}</{0}>", tags.v, escape(value)));
    }

    if let Some(inline) = cell.inline_string_xml() {
        content.push_str(&format!("<{0}>{1}</{0}>", tags.is, inline));
    }

    if let Some(ext) = cell.extension_xml() {
        content.push_str(ext);
    }

    content.push_str(&format!("</{}>", tags.c));
}

fn write_attributes(content: &mut String, attributes: &[(String, String)]) {
    for (key, value) in attributes {
        write_attribute(content, key, value);
    }
}

fn write_attribute(content: &mut String, key: &str, value: &str) {
    content.push_str(&format!(" {}=\"{}\"", key, escape(value)));
}
