//! Cell addresses and the column letter codec

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// Convert uppercase column letters to a 1-based column index (A = 1, Z = 26, AA = 27).
///
/// This is the unchecked form of the codec: the caller is expected to pass one
/// or more uppercase ASCII letters. Use [`CellAddress::letters_to_column`] for
/// user-supplied input.
///
/// ```
/// use stockbook_core::column_index_of;
///
/// assert_eq!(column_index_of("J"), 10);
/// assert_eq!(column_index_of("AA"), 27);
/// ```
pub fn column_index_of(letters: &str) -> u32 {
    letters.bytes().fold(0u32, |index, b| {
        index
            .wrapping_mul(26)
            .wrapping_add(u32::from(b).wrapping_sub(u32::from(b'A')).wrapping_add(1))
    })
}

/// Convert a 1-based column index to its letters (1 = A, 26 = Z, 27 = AA).
///
/// Bijective base 26: there is no zero digit. Index 0 yields an empty string.
pub fn column_letters_of(index: u32) -> String {
    let mut letters = String::new();
    let mut n = index;

    while n > 0 {
        let remainder = (n - 1) % 26;
        letters.insert(0, (b'A' + remainder as u8) as char);
        n = (n - 1) / 26;
    }

    letters
}

/// A cell address (e.g., "G1", "$B$2")
///
/// Both `row` and `col` are 1-based, so `G1` is row 1, column 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellAddress {
    /// Row number (1-based)
    pub row: u32,
    /// Column number (1-based, A=1, B=2, ..., XFD=16384)
    pub col: u32,
    /// Whether the row reference is absolute ($)
    pub row_absolute: bool,
    /// Whether the column reference is absolute ($)
    pub col_absolute: bool,
}

impl CellAddress {
    /// Create a new cell address with relative references
    pub fn new(row: u32, col: u32) -> Self {
        Self {
            row,
            col,
            row_absolute: false,
            col_absolute: false,
        }
    }

    /// Parse a cell address from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use stockbook_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("G1").unwrap();
    /// assert_eq!(addr.row, 1);
    /// assert_eq!(addr.col, 7);
    ///
    /// let addr = CellAddress::parse("$B$2").unwrap();
    /// assert_eq!(addr.row, 2);
    /// assert_eq!(addr.col, 2);
    /// assert!(addr.row_absolute);
    /// assert!(addr.col_absolute);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let bytes = s.as_bytes();
        let mut pos = 0;

        let col_absolute = if bytes.get(pos) == Some(&b'$') {
            pos += 1;
            true
        } else {
            false
        };

        let col_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }

        if pos == col_start {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }

        let col = Self::letters_to_column(&s[col_start..pos])?;

        let row_absolute = if bytes.get(pos) == Some(&b'$') {
            pos += 1;
            true
        } else {
            false
        };

        let row_str = &s[pos..];
        if row_str.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }

        let row: u32 = row_str
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        if row == 0 {
            return Err(Error::InvalidAddress(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        if row > MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS));
        }

        Ok(Self {
            row,
            col,
            row_absolute,
            col_absolute,
        })
    }

    /// Convert column letters to a 1-based index, validating the input.
    ///
    /// Lowercase letters are accepted. Fails on empty input, non-letters, and
    /// columns past the last spreadsheet column.
    pub fn letters_to_column(letters: &str) -> Result<u32> {
        if letters.is_empty() {
            return Err(Error::InvalidAddress("empty column letters".into()));
        }

        let mut col: u32 = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(Error::InvalidAddress(format!(
                    "invalid column letter '{}'",
                    c
                )));
            }
            col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
            if col > MAX_COLS {
                return Err(Error::ColumnOutOfBounds(col, MAX_COLS));
            }
        }

        Ok(col)
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> String {
        let mut result = String::new();

        if self.col_absolute {
            result.push('$');
        }
        result.push_str(&column_letters_of(self.col));

        if self.row_absolute {
            result.push('$');
        }
        result.push_str(&self.row.to_string());

        result
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
