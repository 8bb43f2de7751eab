//! Cell-related types
//!
//! This module contains:
//! - [`Cell`] - a `<c>` node: reference, raw value text and data type tag
//! - [`CellType`] - the data type tag
//! - [`Formula`] - a `<f>` child kept alongside the cached value
//! - [`CellAddress`] - a cell's location (e.g., "B12")

mod address;
mod data_type;

pub use address::CellAddress;
pub use data_type::CellType;

use crate::error::Result;

/// A cell formula (`<f>` element)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Formula {
    /// Formula text without the leading `=`
    pub text: String,
    /// Attributes of the `<f>` element (`t`, `ref`, `si`, ...) in file order
    pub attributes: Vec<(String, String)>,
}

impl Formula {
    /// Create a normal formula from its text
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            attributes: Vec::new(),
        }
    }

    /// Look up an attribute of the `<f>` element
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// A single cell node
///
/// The value is always stored as raw text regardless of its logical type; the
/// [`CellType`] tag says how to interpret it. Nothing here checks that the two
/// agree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    reference: Option<String>,
    value: Option<String>,
    data_type: Option<CellType>,
    style_index: Option<u32>,
    formula: Option<Formula>,
    /// Inner XML of an `<is>` child
    inline_string: Option<String>,
    /// Raw `<extLst>` child
    extension_xml: Option<String>,
    /// Remaining `<c>` attributes (`cm`, `vm`, `ph`, ...) in file order
    attributes: Vec<(String, String)>,
}

impl Cell {
    /// Create an empty cell with no reference, value or type
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a standalone cell holding `value` tagged as `data_type`
    pub fn with_value<S: Into<String>>(value: S, data_type: CellType) -> Self {
        Self {
            value: Some(value.into()),
            data_type: Some(data_type),
            ..Self::default()
        }
    }

    /// Create a cell at `reference` holding `value` tagged as `data_type`
    pub fn with_reference<R: Into<String>, S: Into<String>>(
        reference: R,
        value: S,
        data_type: CellType,
    ) -> Self {
        Self {
            reference: Some(reference.into()),
            ..Self::with_value(value, data_type)
        }
    }

    /// The cell reference (`r` attribute), e.g. "B12"
    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn set_reference<S: Into<String>>(&mut self, reference: S) {
        self.reference = Some(reference.into());
    }

    /// Parse the reference into an address
    pub fn address(&self) -> Option<Result<CellAddress>> {
        self.reference.as_deref().map(CellAddress::parse)
    }

    /// Whether this cell's reference equals `reference`, ignoring ASCII case
    pub fn matches_reference(&self, reference: &str) -> bool {
        self.reference
            .as_deref()
            .map_or(false, |r| CellAddress::reference_eq(r, reference))
    }

    /// The raw value text (`<v>` content)
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Replace the raw value, leaving the type tag untouched
    pub fn set_value<S: Into<String>>(&mut self, value: S) {
        self.value = Some(value.into());
    }

    /// The explicit type tag, `None` when the `t` attribute is absent
    pub fn data_type(&self) -> Option<CellType> {
        self.data_type
    }

    /// The type tag with the format's default (number) applied
    pub fn effective_type(&self) -> CellType {
        self.data_type.unwrap_or_default()
    }

    /// Set the type tag. A `t` kept verbatim in [`Cell::attributes`] is dropped
    /// when a tag is set.
    pub fn set_data_type(&mut self, data_type: Option<CellType>) {
        if data_type.is_some() {
            self.attributes.retain(|(key, _)| key != "t");
        }
        self.data_type = data_type;
    }

    /// Replace value and type tag together
    pub fn set_value_and_type<S: Into<String>>(&mut self, value: S, data_type: CellType) {
        self.value = Some(value.into());
        self.set_data_type(Some(data_type));
    }

    /// Style index (`s` attribute)
    pub fn style_index(&self) -> Option<u32> {
        self.style_index
    }

    pub fn set_style_index(&mut self, style_index: Option<u32>) {
        self.style_index = style_index;
    }

    pub fn formula(&self) -> Option<&Formula> {
        self.formula.as_ref()
    }

    pub fn set_formula(&mut self, formula: Option<Formula>) {
        self.formula = formula;
    }

    /// Inner XML of the `<is>` child, for inline string cells
    pub fn inline_string_xml(&self) -> Option<&str> {
        self.inline_string.as_deref()
    }

    pub fn set_inline_string_xml(&mut self, xml: Option<String>) {
        self.inline_string = xml;
    }

    /// Raw XML of the `<extLst>` child
    pub fn extension_xml(&self) -> Option<&str> {
        self.extension_xml.as_deref()
    }

    pub fn set_extension_xml(&mut self, xml: Option<String>) {
        self.extension_xml = xml;
    }

    /// Attributes other than `r`, `s` and a recognised `t`
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn push_attribute<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.attributes.push((key.into(), value.into()));
    }

    /// True when the cell carries neither a value, a formula nor inline text
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.formula.is_none() && self.inline_string.is_none()
    }
}
