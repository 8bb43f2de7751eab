//! A1-style cell references

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "A1", "XFD1048576")
///
/// Unlike formula references, the `r` attribute of a stored cell never carries
/// `$` markers, so only the relative form is modelled here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    /// Row number (1-based, as written in the file)
    pub row: u32,
    /// Column index (0-based, A=0, B=1, ..., XFD=16383)
    pub col: u16,
}

impl CellAddress {
    /// Create a new cell address from a 1-based row and a 0-based column
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Build the reference string used to match a cell: `column + row`.
    ///
    /// No validation is done; `reference("B", 12)` is `"B12"`.
    pub fn reference(column: &str, row: u32) -> String {
        format!("{}{}", column, row)
    }

    /// Compare two reference strings the way cell lookup does (ASCII case-insensitive)
    pub fn reference_eq(a: &str, b: &str) -> bool {
        a.eq_ignore_ascii_case(b)
    }

    /// Parse a cell address from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use xlsx_editor_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("B12").unwrap();
    /// assert_eq!(addr.row, 12);
    /// assert_eq!(addr.col, 1);
    /// assert_eq!(addr.column_letters(), "B");
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits_at = trimmed
            .bytes()
            .position(|b| !b.is_ascii_alphabetic())
            .ok_or_else(|| Error::InvalidAddress(format!("'{}' has no row number", s)))?;
        if digits_at == 0 {
            return Err(Error::InvalidAddress(format!(
                "'{}' does not start with column letters",
                s
            )));
        }

        let col = Self::letters_to_column(&trimmed[..digits_at])?;
        let row = match trimmed[digits_at..].parse::<u32>() {
            Ok(0) | Err(_) => {
                return Err(Error::InvalidAddress(format!("'{}' has no valid row number", s)))
            }
            Ok(row) if row > MAX_ROWS => return Err(Error::RowOutOfBounds(row, MAX_ROWS)),
            Ok(row) => row,
        };

        Ok(Self::new(row, col))
    }

    /// Bijective base-26 column name: 0 is "A", 26 is "AA", 16383 is "XFD"
    pub fn column_to_letters(col: u16) -> String {
        let mut remaining = u32::from(col) + 1;
        let mut letters = Vec::with_capacity(3);
        while remaining > 0 {
            let digit = (remaining - 1) % 26;
            letters.push(b'A' + digit as u8);
            remaining = (remaining - 1) / 26;
        }
        letters.reverse();
        String::from_utf8_lossy(&letters).into_owned()
    }

    /// Inverse of [`CellAddress::column_to_letters`]; accepts either case
    pub fn letters_to_column(letters: &str) -> Result<u16> {
        if letters.is_empty() {
            return Err(Error::InvalidAddress("column letters are empty".into()));
        }

        let number = letters.bytes().try_fold(0u32, |acc, b| {
            if !b.is_ascii_alphabetic() {
                return Err(Error::InvalidAddress(format!(
                    "'{}' is not a column name",
                    letters
                )));
            }
            let next = acc * 26 + u32::from(b.to_ascii_uppercase() - b'A') + 1;
            if next > u32::from(MAX_COLS) {
                return Err(Error::ColumnOutOfBounds(next - 1, MAX_COLS - 1));
            }
            Ok(next)
        })?;

        Ok((number - 1) as u16)
    }

    /// Column letters of this address
    pub fn column_letters(&self) -> String {
        Self::column_to_letters(self.col)
    }

    /// The address one column to the right
    pub fn next_column(&self) -> Self {
        Self {
            row: self.row,
            col: self.col.saturating_add(1),
        }
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        Self::reference(&self.column_letters(), self.row)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_letters(), self.row)
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_names() {
        for (col, letters) in [(0, "A"), (25, "Z"), (26, "AA"), (51, "AZ"), (702, "AAA"), (16383, "XFD")] {
            assert_eq!(CellAddress::column_to_letters(col), letters);
            assert_eq!(CellAddress::letters_to_column(letters).unwrap(), col);
        }
        assert_eq!(CellAddress::letters_to_column("xfd").unwrap(), 16383);
    }

    #[test]
    fn test_bad_column_names() {
        assert!(matches!(
            CellAddress::letters_to_column("XFE"),
            Err(Error::ColumnOutOfBounds(16384, 16383))
        ));
        assert!(CellAddress::letters_to_column("B-").is_err());
        assert!(CellAddress::letters_to_column("").is_err());
    }

    #[test]
    fn test_parse_stored_references() {
        assert_eq!(CellAddress::parse("B2").unwrap(), CellAddress::new(2, 1));
        assert_eq!(CellAddress::parse(" c7 ").unwrap(), CellAddress::new(7, 2));
        let last: CellAddress = "XFD1048576".parse().unwrap();
        assert_eq!(last.column_letters(), "XFD");
        assert_eq!(last.row, MAX_ROWS);
    }

    #[test]
    fn test_parse_rejects() {
        for bad in ["", "B", "42", "B0", "$B$2", "B2:C3"] {
            assert!(CellAddress::parse(bad).is_err(), "{:?} should not parse", bad);
        }
        assert!(matches!(
            CellAddress::parse("A1048577"),
            Err(Error::RowOutOfBounds(1_048_577, MAX_ROWS))
        ));
    }

    #[test]
    fn test_reference_building() {
        assert_eq!(CellAddress::reference("AA", 10), "AA10");
        assert_eq!(CellAddress::new(10, 26).to_string(), "AA10");
        assert_eq!(CellAddress::new(3, 0).next_column().to_a1_string(), "B3");
        assert!(CellAddress::reference_eq("aa10", "AA10"));
        assert!(!CellAddress::reference_eq("A1", "A10"));
    }
}
