//! Integration tests for opening, editing and saving packages

mod common;

use common::{basic_workbook, XlsxFixture, APP_XML};
use pretty_assertions::assert_eq;
use xlsx_editor_core::CellType;
use xlsx_editor_package::{
    DocumentSettings, PackageError, PartCompression, SheetState, SpreadsheetDocument,
};

#[test]
fn test_open_reads_catalog_and_worksheets() {
    let doc = SpreadsheetDocument::from_bytes(basic_workbook(), false).unwrap();

    assert!(!doc.is_editable());
    assert_eq!(doc.workbook_part_name(), "xl/workbook.xml");
    assert_eq!(doc.sheets().len(), 1);
    assert_eq!(doc.sheets()[0].name, "Sheet1");
    assert_eq!(doc.sheets()[0].state, SheetState::Visible);
    assert_eq!(doc.sheet("Sheet1"), Some(&doc.sheets()[0]));
    assert_eq!(doc.sheet("sheet1"), None);

    let part = doc.worksheet_part(&doc.sheets()[0].rel_id).unwrap();
    assert_eq!(part.part_name(), "xl/worksheets/sheet1.xml");

    let b2 = part.worksheet().row(2).unwrap().cell("B").unwrap();
    assert_eq!(b2.value(), Some("10"));
    assert_eq!(b2.style_index(), Some(1));
    assert_eq!(b2.effective_type(), CellType::Number);
}

#[test]
fn test_shared_strings_are_loaded() {
    let doc = SpreadsheetDocument::from_bytes(basic_workbook(), false).unwrap();
    assert_eq!(doc.shared_strings(), ["Label".to_string()]);
    assert_eq!(doc.shared_string(0), Some("Label"));
    assert_eq!(doc.shared_string(1), None);
}

#[test]
fn test_read_only_document_refuses_mutation_and_save() {
    let mut doc = SpreadsheetDocument::from_bytes(basic_workbook(), false).unwrap();
    let rel_id = doc.sheets()[0].rel_id.clone();

    assert!(matches!(
        doc.worksheet_part_mut(&rel_id),
        Err(PackageError::ReadOnly)
    ));
    assert!(matches!(doc.to_bytes(), Err(PackageError::ReadOnly)));
}

#[test]
fn test_save_roundtrip_keeps_edits_and_other_parts() {
    let mut doc = SpreadsheetDocument::from_bytes(basic_workbook(), true).unwrap();
    let rel_id = doc.sheets()[0].rel_id.clone();

    doc.worksheet_part_mut(&rel_id)
        .unwrap()
        .worksheet_mut()
        .row_mut(2)
        .unwrap()
        .cell_by_reference_mut("B2")
        .unwrap()
        .set_value_and_type("hello", CellType::String);

    let bytes = doc.to_bytes().unwrap();
    let reopened = SpreadsheetDocument::from_bytes(bytes, false).unwrap();

    let part = reopened.worksheet_part(&rel_id).unwrap();
    let b2 = part.worksheet().row(2).unwrap().cell("B").unwrap();
    assert_eq!(b2.value(), Some("hello"));
    assert_eq!(b2.data_type(), Some(CellType::String));
    assert_eq!(b2.style_index(), Some(1));

    assert_eq!(reopened.part("docProps/app.xml"), Some(APP_XML.as_bytes()));
    assert_eq!(
        reopened.part_names().collect::<Vec<_>>(),
        doc.part_names().collect::<Vec<_>>()
    );
}

#[test]
fn test_save_without_edits_is_lossless() {
    let original = SpreadsheetDocument::from_bytes(basic_workbook(), true).unwrap();
    let reopened = SpreadsheetDocument::from_bytes(original.to_bytes().unwrap(), false).unwrap();

    for name in original.part_names() {
        assert_eq!(reopened.part(name), original.part(name), "part {}", name);
    }
}

#[test]
fn test_save_file_with_stored_compression() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.xlsx");

    let settings = DocumentSettings::editable().with_compression(PartCompression::Stored);
    let doc = SpreadsheetDocument::open_with(std::io::Cursor::new(basic_workbook()), settings)
        .unwrap();
    doc.save_file(&path).unwrap();

    let reopened = SpreadsheetDocument::from_bytes(std::fs::read(&path).unwrap(), false).unwrap();
    assert_eq!(reopened.sheets(), doc.sheets());
}

#[test]
fn test_chart_sheet_is_not_a_worksheet() {
    let bytes = XlsxFixture::new()
        .sheet("Data", r#"<row r="1"><c r="A1"><v>1</v></c></row>"#)
        .chart_sheet("Chart1")
        .build();
    let doc = SpreadsheetDocument::from_bytes(bytes, false).unwrap();

    let chart = doc.sheets().iter().find(|s| s.name == "Chart1").unwrap();
    assert!(matches!(
        doc.worksheet_part(&chart.rel_id),
        Err(PackageError::NotAWorksheet(name)) if name == "xl/chartsheets/sheet1.xml"
    ));
    assert_eq!(
        doc.worksheet_part_names().collect::<Vec<_>>(),
        ["xl/worksheets/sheet1.xml"]
    );
}

#[test]
fn test_unknown_relationship_id() {
    let doc = SpreadsheetDocument::from_bytes(basic_workbook(), false).unwrap();
    assert!(matches!(
        doc.worksheet_part("rId99"),
        Err(PackageError::MissingPart(_))
    ));
}

#[test]
fn test_garbage_bytes_are_rejected() {
    let result = SpreadsheetDocument::from_bytes(b"not a zip file".to_vec(), false);
    assert!(matches!(result, Err(PackageError::Zip(_))));
}

#[test]
fn test_zip_without_content_types_is_rejected() {
    use std::io::{Cursor, Write};

    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
    zip.start_file("hello.txt", zip::write::SimpleFileOptions::default())
        .unwrap();
    zip.write_all(b"hi").unwrap();
    let bytes = zip.finish().unwrap().into_inner();

    let result = SpreadsheetDocument::from_bytes(bytes, false);
    assert!(matches!(result, Err(PackageError::InvalidFormat(_))));
}

#[test]
fn test_worksheets_are_parsed_on_first_lookup() {
    let doc = SpreadsheetDocument::from_bytes(basic_workbook(), false).unwrap();
    assert!(!doc.is_worksheet_loaded("xl/worksheets/sheet1.xml"));

    let rel_id = doc.sheets()[0].rel_id.clone();
    doc.worksheet_part(&rel_id).unwrap();
    assert!(doc.is_worksheet_loaded("xl/worksheets/sheet1.xml"));
}

#[test]
fn test_malformed_sheet_fails_only_when_used() {
    let bytes = XlsxFixture::new()
        .sheet("Good", r#"<row r="2"><c r="B2"><v>10</v></c></row>"#)
        .sheet("Broken", r#"<row r="two"><c r="A1"><v>1</v></c></row>"#)
        .build();
    let mut doc = SpreadsheetDocument::from_bytes(bytes, true).unwrap();
    let broken_xml = doc.part("xl/worksheets/sheet2.xml").unwrap().to_vec();

    let broken = doc.sheet("Broken").unwrap().rel_id.clone();
    assert!(matches!(
        doc.worksheet_part(&broken),
        Err(PackageError::Parse(_))
    ));

    let good = doc.sheet("Good").unwrap().rel_id.clone();
    doc.worksheet_part_mut(&good)
        .unwrap()
        .worksheet_mut()
        .row_mut(2)
        .unwrap()
        .cell_by_reference_mut("B2")
        .unwrap()
        .set_value("11");

    let reopened = SpreadsheetDocument::from_bytes(doc.to_bytes().unwrap(), false).unwrap();
    assert_eq!(
        reopened.part("xl/worksheets/sheet2.xml"),
        Some(broken_xml.as_slice())
    );
    let b2 = reopened
        .worksheet_part(&good)
        .unwrap()
        .worksheet()
        .row(2)
        .unwrap()
        .cell("B")
        .unwrap();
    assert_eq!(b2.value(), Some("11"));
}

#[test]
fn test_into_worksheet_part_on_read_only_document() {
    let doc = SpreadsheetDocument::from_bytes(basic_workbook(), false).unwrap();
    let rel_id = doc.sheets()[0].rel_id.clone();

    let worksheet = doc.into_worksheet_part(&rel_id).unwrap().into_worksheet();
    assert_eq!(worksheet.row(2).unwrap().cell("B").unwrap().value(), Some("10"));
}
