//! # stockbook-core
//!
//! Spreadsheet document model used by the stockbook inventory editor.
//!
//! This crate provides the types the inventory logic reads and writes:
//! - [`CellValue`] - Cell values (numbers, strings, rich text, formulas with cached results)
//! - [`CellAddress`] - A1-style addressing and the column letter codec
//! - [`FillStyle`] and [`Color`] - Background fills
//! - [`Workbook`], [`Worksheet`] - The document structures
//!
//! Rows and columns are 1-based throughout, matching what users see in a
//! spreadsheet application.
//!
//! ## Example
//!
//! ```rust
//! use stockbook_core::{CellValue, Workbook};
//!
//! let mut workbook = Workbook::empty();
//! workbook.add_worksheet_with_name("WAREHOUSE").unwrap();
//! let sheet = workbook.worksheet_by_name_mut("WAREHOUSE").unwrap();
//!
//! // Using string addresses
//! sheet.set_cell_value("B2", "SKU001").unwrap();
//!
//! // Or using 1-based row/column indices
//! sheet.set_cell_value_at(2, 10, 100).unwrap();
//! assert_eq!(sheet.get_value_at(2, 10), CellValue::Number(100.0));
//! ```

pub mod cell;
pub mod error;
pub mod style;
pub mod workbook;
pub mod worksheet;

pub use cell::{
    column_index_of, column_letters_of, CellAddress, CellData, CellError, CellValue, SharedString,
    TextRun,
};
pub use error::{Error, Result};
pub use style::{Color, FillStyle, PatternType, Style, StylePool};
pub use workbook::Workbook;
pub use worksheet::Worksheet;

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u32 = 16_384;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
