//! Cell data type tags

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// The data type tag of a cell (the `t` attribute of `<c>`)
///
/// The tag tells consumers how to interpret the raw `<v>` text. A cell without a
/// `t` attribute is a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellType {
    /// `b` - value is `0` or `1`
    Boolean,
    /// `n` - value is a number
    #[default]
    Number,
    /// `e` - value is an error literal such as `#DIV/0!`
    Error,
    /// `s` - value is an index into the shared string table
    SharedString,
    /// `str` - value is literal text (typically a formula's string result)
    String,
    /// `inlineStr` - text lives in an `<is>` child instead of `<v>`
    InlineString,
    /// `d` - value is an ISO 8601 date
    Date,
}

impl CellType {
    /// Value of the `t` attribute for this type
    pub fn as_xlsx(&self) -> &'static str {
        match self {
            CellType::Boolean => "b",
            CellType::Number => "n",
            CellType::Error => "e",
            CellType::SharedString => "s",
            CellType::String => "str",
            CellType::InlineString => "inlineStr",
            CellType::Date => "d",
        }
    }

    /// Parse the value of a `t` attribute
    pub fn from_xlsx(s: &str) -> Option<Self> {
        match s {
            "b" => Some(CellType::Boolean),
            "n" => Some(CellType::Number),
            "e" => Some(CellType::Error),
            "s" => Some(CellType::SharedString),
            "str" => Some(CellType::String),
            "inlineStr" => Some(CellType::InlineString),
            "d" => Some(CellType::Date),
            _ => None,
        }
    }

    /// Whether the value is textual (shared, literal or inline string)
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            CellType::SharedString | CellType::String | CellType::InlineString
        )
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_xlsx())
    }
}

impl FromStr for CellType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_xlsx(s).ok_or_else(|| Error::UnknownCellType(s.to_string()))
    }
}
