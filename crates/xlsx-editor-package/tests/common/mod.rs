//! In-memory XLSX fixtures for integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;

/// Content of the untouched `docProps/app.xml` part
pub const APP_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties"><Application>Microsoft Excel</Application></Properties>"#;

/// Builds a minimal but complete XLSX package.
#[derive(Default)]
pub struct XlsxFixture {
    /// (sheet name, inner XML of `<sheetData>`)
    sheets: Vec<(String, String)>,
    shared_strings: Vec<String>,
    chart_sheets: Vec<String>,
}

impl XlsxFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sheet(mut self, name: &str, sheet_data: &str) -> Self {
        self.sheets.push((name.to_string(), sheet_data.to_string()));
        self
    }

    pub fn shared_string(mut self, s: &str) -> Self {
        self.shared_strings.push(s.to_string());
        self
    }

    pub fn chart_sheet(mut self, name: &str) -> Self {
        self.chart_sheets.push(name.to_string());
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        let mut content_types = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
        );
        for i in 0..self.sheets.len() {
            content_types.push_str(&format!(
                r#"<Override PartName="/xl/worksheets/sheet{}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
                i + 1
            ));
        }
        content_types.push_str("</Types>");
        write_part(&mut zip, options, "[Content_Types].xml", &content_types);

        write_part(
            &mut zip,
            options,
            "_rels/.rels",
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/></Relationships>"#,
        );
        write_part(&mut zip, options, "docProps/app.xml", APP_XML);

        let mut workbook = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets>"#,
        );
        let mut rels = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );

        let mut rel_index = 0;
        for (name, _) in &self.sheets {
            rel_index += 1;
            workbook.push_str(&format!(
                r#"<sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
                escape(name),
                rel_index,
                rel_index
            ));
            rels.push_str(&format!(
                r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{}.xml"/>"#,
                rel_index, rel_index
            ));
        }
        for (i, name) in self.chart_sheets.iter().enumerate() {
            rel_index += 1;
            workbook.push_str(&format!(
                r#"<sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
                escape(name),
                rel_index,
                rel_index
            ));
            rels.push_str(&format!(
                r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/chartsheet" Target="chartsheets/sheet{}.xml"/>"#,
                rel_index,
                i + 1
            ));
        }
        if !self.shared_strings.is_empty() {
            rel_index += 1;
            rels.push_str(&format!(
                r#"<Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/sharedStrings" Target="sharedStrings.xml"/>"#,
                rel_index
            ));
        }

        workbook.push_str("</sheets></workbook>");
        rels.push_str("</Relationships>");
        write_part(&mut zip, options, "xl/workbook.xml", &workbook);
        write_part(&mut zip, options, "xl/_rels/workbook.xml.rels", &rels);

        for (i, (_, sheet_data)) in self.sheets.iter().enumerate() {
            let xml = format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>{}</sheetData><pageMargins left="0.7" right="0.7" top="0.75" bottom="0.75" header="0.3" footer="0.3"/></worksheet>"#,
                sheet_data
            );
            write_part(
                &mut zip,
                options,
                &format!("xl/worksheets/sheet{}.xml", i + 1),
                &xml,
            );
        }

        for i in 0..self.chart_sheets.len() {
            write_part(
                &mut zip,
                options,
                &format!("xl/chartsheets/sheet{}.xml", i + 1),
                r#"<chartsheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"/>"#,
            );
        }

        if !self.shared_strings.is_empty() {
            let mut sst = format!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="{0}" uniqueCount="{0}">"#,
                self.shared_strings.len()
            );
            for s in &self.shared_strings {
                sst.push_str(&format!("<si><t>{}</t></si>", escape(s)));
            }
            sst.push_str("</sst>");
            write_part(&mut zip, options, "xl/sharedStrings.xml", &sst);
        }

        zip.finish().unwrap().into_inner()
    }
}

fn write_part(
    zip: &mut zip::ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
    name: &str,
    content: &str,
) {
    zip.start_file(name, options).unwrap();
    zip.write_all(content.as_bytes()).unwrap();
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// A one-sheet workbook: "Sheet1" with B2 = 10 (number), A1 = shared string 0
pub fn basic_workbook() -> Vec<u8> {
    XlsxFixture::new()
        .shared_string("Label")
        .sheet(
            "Sheet1",
            r#"<row r="1"><c r="A1" t="s"><v>0</v></c></row><row r="2"><c r="A2"><v>1</v></c><c r="B2" s="1"><v>10</v></c></row>"#,
        )
        .build()
}
