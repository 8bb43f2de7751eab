//! Package relationships (`*.rels` parts)

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::PackageResult;

/// Relationship type suffix of the main workbook part
pub const REL_OFFICE_DOCUMENT: &str = "/officeDocument";
/// Relationship type suffix of a worksheet part
pub const REL_WORKSHEET: &str = "/worksheet";
/// Relationship type suffix of the shared string table
pub const REL_SHARED_STRINGS: &str = "/sharedStrings";

/// A single `<Relationship>` entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Relationship id (e.g. "rId1")
    pub id: String,
    /// Full relationship type URI
    pub rel_type: String,
    /// Target as written in the file
    pub target: String,
    /// Target resolved to a part name inside the package (None for external targets)
    pub part_name: Option<String>,
}

impl Relationship {
    /// Whether the relationship type URI ends with `suffix`
    pub fn is_type(&self, suffix: &str) -> bool {
        self.rel_type.ends_with(suffix)
    }
}

/// Name of the relationships part belonging to `part_name`
///
/// `xl/workbook.xml` -> `xl/_rels/workbook.xml.rels`, and the package itself
/// (empty name) -> `_rels/.rels`.
pub fn rels_part_name(part_name: &str) -> String {
    match part_name.rsplit_once('/') {
        Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
        None => format!("_rels/{}.rels", part_name),
    }
}

/// Resolve a relationship target against the part that owns the relationship
pub fn resolve_target(source_part: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return absolute.to_string();
    }

    let mut segments: Vec<&str> = match source_part.rsplit_once('/') {
        Some((dir, _)) => dir.split('/').collect(),
        None => Vec::new(),
    };

    for segment in target.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }

    segments.join("/")
}

/// Parse a `.rels` part owned by `source_part`
pub fn read_relationships(source_part: &str, xml: &str) -> PackageResult<Vec<Relationship>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut rels = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Empty(e) | Event::Start(e) if e.local_name().as_ref() == b"Relationship" => {
                let mut id = None;
                let mut target = None;
                let mut rel_type = None;
                let mut external = false;

                for attr in e.attributes() {
                    let attr = attr?;
                    match attr.key.as_ref() {
                        b"Id" => id = Some(attr.unescape_value()?.into_owned()),
                        b"Target" => target = Some(attr.unescape_value()?.into_owned()),
                        b"Type" => rel_type = Some(attr.unescape_value()?.into_owned()),
                        b"TargetMode" => external = attr.unescape_value()? == "External",
                        _ => {}
                    }
                }

                if let (Some(id), Some(target), Some(rel_type)) = (id, target, rel_type) {
                    let part_name = (!external).then(|| resolve_target(source_part, &target));
                    rels.push(Relationship {
                        id,
                        rel_type,
                        target,
                        part_name,
                    });
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(rels)
}
