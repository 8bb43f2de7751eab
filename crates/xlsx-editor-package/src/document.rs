//! The spreadsheet package

use std::fs::File;
use std::io::{Cursor, Read, Seek, Write};
use std::path::Path;

use once_cell::unsync::OnceCell;
use zip::write::SimpleFileOptions;

use crate::error::{PackageError, PackageResult};
use crate::relationships::{
    read_relationships, rels_part_name, Relationship, REL_OFFICE_DOCUMENT, REL_SHARED_STRINGS,
    REL_WORKSHEET,
};
use crate::settings::DocumentSettings;
use crate::shared_strings::read_shared_strings;
use crate::workbook::{read_sheet_catalog, SheetEntry};
use crate::worksheet::WorksheetPart;

const CONTENT_TYPES: &str = "[Content_Types].xml";
const DEFAULT_WORKBOOK_PART: &str = "xl/workbook.xml";

/// A raw entry of the ZIP container
#[derive(Debug, Clone)]
struct PackagePart {
    name: String,
    data: Vec<u8>,
    /// Parsed form, filled on first access for worksheet parts
    worksheet: OnceCell<WorksheetPart>,
}

impl PackagePart {
    fn text(&self) -> PackageResult<&str> {
        std::str::from_utf8(&self.data).map_err(|_| PackageError::Utf8(self.name.clone()))
    }

    fn parse_worksheet(&self) -> PackageResult<WorksheetPart> {
        WorksheetPart::parse(&self.name, self.text()?)
    }
}

/// An open XLSX package
///
/// The whole package is held in memory. A worksheet part is parsed into a
/// [`WorksheetPart`] the first time it is looked up, so a malformed sheet only
/// fails when it is used. Parts that were never parsed are written back
/// unchanged by [`SpreadsheetDocument::save`].
#[derive(Debug, Clone)]
pub struct SpreadsheetDocument {
    settings: DocumentSettings,
    /// ZIP entries in archive order
    parts: Vec<PackagePart>,
    workbook_part: String,
    workbook_rels: Vec<Relationship>,
    sheets: Vec<SheetEntry>,
    shared_strings: Vec<String>,
}

impl SpreadsheetDocument {
    /// Open a package from a reader
    pub fn open<R: Read + Seek>(reader: R, editable: bool) -> PackageResult<Self> {
        Self::open_with(reader, DocumentSettings::from(editable))
    }

    /// Open a package from an in-memory buffer
    pub fn from_bytes(bytes: Vec<u8>, editable: bool) -> PackageResult<Self> {
        Self::open(Cursor::new(bytes), editable)
    }

    /// Open a package from a reader with explicit settings
    pub fn open_with<R: Read + Seek>(reader: R, settings: DocumentSettings) -> PackageResult<Self> {
        let mut archive = zip::ZipArchive::new(reader)?;

        let mut parts = Vec::with_capacity(archive.len());
        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            if file.is_dir() {
                continue;
            }
            let name = file.name().to_string();
            let mut data = Vec::with_capacity(file.size() as usize);
            file.read_to_end(&mut data)?;
            parts.push(PackagePart {
                name,
                data,
                worksheet: OnceCell::new(),
            });
        }

        // Verify this is an OOXML package
        if !parts.iter().any(|p| p.name == CONTENT_TYPES) {
            return Err(PackageError::InvalidFormat(format!(
                "Missing {}",
                CONTENT_TYPES
            )));
        }

        let workbook_part = Self::find_workbook_part(&parts)?;

        let rels_name = rels_part_name(&workbook_part);
        let workbook_rels = read_relationships(&workbook_part, Self::part_str(&parts, &rels_name)?)?;

        let sheets = read_sheet_catalog(Self::part_str(&parts, &workbook_part)?)?;

        let shared_strings = match workbook_rels
            .iter()
            .find(|r| r.is_type(REL_SHARED_STRINGS))
            .and_then(|r| r.part_name.as_deref())
        {
            Some(name) if Self::find_part(&parts, name).is_some() => {
                read_shared_strings(Self::part_str(&parts, name)?)?
            }
            _ => Vec::new(),
        };

        let mut worksheet_count = 0;
        for rel in workbook_rels.iter().filter(|r| r.is_type(REL_WORKSHEET)) {
            match rel.part_name.as_deref() {
                Some(name) if Self::find_part(&parts, name).is_some() => worksheet_count += 1,
                Some(name) => {
                    log::warn!("worksheet relationship {} targets missing part {}", rel.id, name)
                }
                None => {}
            }
        }

        log::debug!(
            "opened package: {} parts, {} sheets, {} worksheet parts, {} shared strings, editable={}",
            parts.len(),
            sheets.len(),
            worksheet_count,
            shared_strings.len(),
            settings.editable
        );

        Ok(Self {
            settings,
            parts,
            workbook_part,
            workbook_rels,
            sheets,
            shared_strings,
        })
    }

    /// Locate the main workbook part through the package relationships
    fn find_workbook_part(parts: &[PackagePart]) -> PackageResult<String> {
        let root_rels = rels_part_name("");
        if Self::find_part(parts, &root_rels).is_none() {
            return Ok(DEFAULT_WORKBOOK_PART.to_string());
        }

        let rels = read_relationships("", Self::part_str(parts, &root_rels)?)?;
        Ok(rels
            .into_iter()
            .find(|r| r.is_type(REL_OFFICE_DOCUMENT))
            .and_then(|r| r.part_name)
            .unwrap_or_else(|| DEFAULT_WORKBOOK_PART.to_string()))
    }

    fn find_part<'a>(parts: &'a [PackagePart], name: &str) -> Option<&'a PackagePart> {
        parts.iter().find(|p| p.name == name)
    }

    fn part_str<'a>(parts: &'a [PackagePart], name: &str) -> PackageResult<&'a str> {
        Self::find_part(parts, name)
            .ok_or_else(|| PackageError::MissingPart(name.into()))?
            .text()
    }

    /// Whether the document was opened for editing
    pub fn is_editable(&self) -> bool {
        self.settings.editable
    }

    pub fn settings(&self) -> &DocumentSettings {
        &self.settings
    }

    /// Name of the main workbook part (usually `xl/workbook.xml`)
    pub fn workbook_part_name(&self) -> &str {
        &self.workbook_part
    }

    /// Names of all parts, in archive order
    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|p| p.name.as_str())
    }

    /// Raw bytes of a part as read from the container
    pub fn part(&self, name: &str) -> Option<&[u8]> {
        Self::find_part(&self.parts, name).map(|p| p.data.as_slice())
    }

    /// The workbook's sheet catalog, in declared order
    pub fn sheets(&self) -> &[SheetEntry] {
        &self.sheets
    }

    /// First catalog entry with exactly this name
    pub fn sheet(&self, name: &str) -> Option<&SheetEntry> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Relationships of the workbook part
    pub fn relationships(&self) -> &[Relationship] {
        &self.workbook_rels
    }

    /// Look up a workbook relationship by id
    pub fn relationship(&self, rel_id: &str) -> Option<&Relationship> {
        self.workbook_rels.iter().find(|r| r.id == rel_id)
    }

    /// Resolve a workbook relationship id to the worksheet part it targets
    ///
    /// The part is parsed on first access; parse failures are returned here.
    pub fn worksheet_part(&self, rel_id: &str) -> PackageResult<&WorksheetPart> {
        let name = self.worksheet_part_name(rel_id)?;
        let part = Self::find_part(&self.parts, &name).ok_or(PackageError::MissingPart(name))?;
        part.worksheet.get_or_try_init(|| part.parse_worksheet())
    }

    /// Mutable variant of [`SpreadsheetDocument::worksheet_part`]
    ///
    /// Fails with [`PackageError::ReadOnly`] on a read-only document.
    pub fn worksheet_part_mut(&mut self, rel_id: &str) -> PackageResult<&mut WorksheetPart> {
        if !self.settings.editable {
            return Err(PackageError::ReadOnly);
        }
        let name = self.worksheet_part_name(rel_id)?;
        let part = self
            .parts
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| PackageError::MissingPart(name.clone()))?;

        if part.worksheet.get().is_none() {
            let parsed = part.parse_worksheet()?;
            log::debug!("{}: loaded for editing", name);
            let _ = part.worksheet.set(parsed);
        }
        part.worksheet
            .get_mut()
            .ok_or(PackageError::MissingPart(name))
    }

    /// Consume the document and return one worksheet part, parsed
    ///
    /// Works on read-only documents too.
    pub fn into_worksheet_part(mut self, rel_id: &str) -> PackageResult<WorksheetPart> {
        let name = self.worksheet_part_name(rel_id)?;
        let index = self
            .parts
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| PackageError::MissingPart(name.clone()))?;

        let PackagePart { data, worksheet, .. } = self.parts.swap_remove(index);
        match worksheet.into_inner() {
            Some(parsed) => Ok(parsed),
            None => {
                let xml =
                    std::str::from_utf8(&data).map_err(|_| PackageError::Utf8(name.clone()))?;
                WorksheetPart::parse(&name, xml)
            }
        }
    }

    fn worksheet_part_name(&self, rel_id: &str) -> PackageResult<String> {
        let rel = self
            .relationship(rel_id)
            .ok_or_else(|| PackageError::MissingPart(format!("relationship {}", rel_id)))?;
        let name = rel
            .part_name
            .clone()
            .ok_or_else(|| PackageError::MissingPart(rel.target.clone()))?;
        if !rel.is_type(REL_WORKSHEET) {
            return Err(PackageError::NotAWorksheet(name));
        }
        Ok(name)
    }

    /// Names of the worksheet parts present in the package, in relationship order
    pub fn worksheet_part_names(&self) -> impl Iterator<Item = &str> {
        self.workbook_rels
            .iter()
            .filter(|r| r.is_type(REL_WORKSHEET))
            .filter_map(|r| r.part_name.as_deref())
            .filter(|name| Self::find_part(&self.parts, name).is_some())
    }

    /// Whether a worksheet part has been parsed (looked up at least once)
    pub fn is_worksheet_loaded(&self, part_name: &str) -> bool {
        Self::find_part(&self.parts, part_name).map_or(false, |p| p.worksheet.get().is_some())
    }

    /// The shared string table (empty if the package has none)
    pub fn shared_strings(&self) -> &[String] {
        &self.shared_strings
    }

    /// Look up a shared string by index
    pub fn shared_string(&self, index: usize) -> Option<&str> {
        self.shared_strings.get(index).map(String::as_str)
    }

    /// Write the package to a writer
    ///
    /// Parts are written in their original order. Worksheet parts that have
    /// been loaded are serialized from their parsed form; all other parts are
    /// copied as read.
    pub fn save<W: Write + Seek>(&self, writer: W) -> PackageResult<W> {
        if !self.settings.editable {
            return Err(PackageError::ReadOnly);
        }

        let mut zip = zip::ZipWriter::new(writer);
        let options =
            SimpleFileOptions::default().compression_method(self.settings.compression.method());

        for part in &self.parts {
            zip.start_file(part.name.as_str(), options)?;
            match part.worksheet.get() {
                Some(worksheet) => zip.write_all(worksheet.to_xml().as_bytes())?,
                None => zip.write_all(&part.data)?,
            }
        }

        log::debug!("saved package with {} parts", self.parts.len());
        Ok(zip.finish()?)
    }

    /// Write the package to a file path
    pub fn save_file<P: AsRef<Path>>(&self, path: P) -> PackageResult<()> {
        let file = File::create(path)?;
        self.save(file)?;
        Ok(())
    }

    /// Serialize the package into a byte buffer
    pub fn to_bytes(&self) -> PackageResult<Vec<u8>> {
        Ok(self.save(Cursor::new(Vec::new()))?.into_inner())
    }
}
