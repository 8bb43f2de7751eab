//! Shared string table and inline string text

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::PackageResult;

/// Decode Excel's `_xHHHH_` escape sequences in strings.
///
/// - `_x000d_` = CR
/// - `_x000a_` = LF
/// - `_x0009_` = Tab
/// - `_x005f_` = Underscore
pub fn decode_excel_escapes(s: &str) -> String {
    if !s.contains("_x") {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(pos) = rest.find("_x") {
        result.push_str(&rest[..pos]);
        let candidate = &rest[pos..];

        let decoded = candidate
            .get(2..6)
            .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
            .filter(|_| candidate.as_bytes().get(6) == Some(&b'_'))
            .and_then(|hex| u32::from_str_radix(hex, 16).ok())
            .and_then(char::from_u32);

        match decoded {
            Some(c) => {
                result.push(c);
                rest = &candidate[7..];
            }
            None => {
                result.push('_');
                rest = &candidate[1..];
            }
        }
    }

    result.push_str(rest);
    result
}

/// Read every `<si>` item of a shared string table, in index order
pub fn read_shared_strings(xml: &str) -> PackageResult<Vec<String>> {
    read_text_items(xml, Some(b"si"))
}

/// Flatten the inner XML of an `<is>` element into its plain text
pub fn inline_string_text(fragment: &str) -> PackageResult<String> {
    Ok(read_text_items(fragment, None)?.pop().unwrap_or_default())
}

/// Collect `<t>` text, skipping phonetic runs. With `item` set, one string is
/// produced per `item` element; otherwise the whole input is one string.
fn read_text_items(xml: &str, item: Option<&[u8]>) -> PackageResult<Vec<String>> {
    let mut reader = Reader::from_str(xml);

    let mut items = Vec::new();
    let mut current = String::new();
    let mut in_item = item.is_none();
    let mut in_t = false;
    let mut phonetic_depth = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                name if Some(name) == item => {
                    in_item = true;
                    current.clear();
                }
                b"rPh" => phonetic_depth += 1,
                b"t" if in_item && phonetic_depth == 0 => in_t = true,
                _ => {}
            },
            Event::Empty(e) if Some(e.local_name().as_ref()) == item => {
                items.push(String::new());
            }
            Event::End(e) => match e.local_name().as_ref() {
                name if Some(name) == item => {
                    items.push(decode_excel_escapes(&current));
                    in_item = false;
                }
                b"rPh" => phonetic_depth = phonetic_depth.saturating_sub(1),
                b"t" => in_t = false,
                _ => {}
            },
            Event::Text(t) if in_t => current.push_str(&t.unescape()?),
            Event::CData(c) if in_t => current.push_str(&String::from_utf8_lossy(&c)),
            Event::Eof => break,
            _ => {}
        }
    }

    if item.is_none() {
        items.push(decode_excel_escapes(&current));
    }

    Ok(items)
}
