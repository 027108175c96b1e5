//! Document collaborator traits
//!
//! The inventory operations only need a small slice of a spreadsheet: sheet
//! lookup by name, row enumeration, cell values and cell fills. [`Document`]
//! and [`Sheet`] describe that slice; they are implemented here for the
//! in-memory [`Workbook`]/[`Worksheet`] model and can be implemented for any
//! other backend.

use stockbook_core::{CellValue, FillStyle, Workbook, Worksheet};

use crate::error::Result;

/// An ordered collection of named sheets
pub trait Document {
    type Sheet: Sheet;

    /// Sheet names in document order
    fn sheet_names(&self) -> Vec<String>;

    /// Look up a sheet by exact name
    fn sheet(&self, name: &str) -> Option<&Self::Sheet>;

    /// Look up a sheet by exact name for writing
    fn sheet_mut(&mut self, name: &str) -> Option<&mut Self::Sheet>;
}

/// A single sheet addressed by 1-based row and column
pub trait Sheet {
    fn name(&self) -> &str;

    /// Rows holding at least one cell, ascending
    fn row_numbers(&self) -> Vec<u32>;

    /// Stored value of a cell, `None` when the cell is absent
    fn cell(&self, row: u32, col: u32) -> Option<&CellValue>;

    /// Replace a cell's value, keeping its style
    fn set_value(&mut self, row: u32, col: u32, value: CellValue) -> Result<()>;

    /// Background fill of a cell
    fn fill(&self, row: u32, col: u32) -> FillStyle;

    /// Replace a cell's fill, keeping its value
    fn set_fill(&mut self, row: u32, col: u32, fill: FillStyle) -> Result<()>;
}

impl Document for Workbook {
    type Sheet = Worksheet;

    fn sheet_names(&self) -> Vec<String> {
        Workbook::sheet_names(self)
    }

    fn sheet(&self, name: &str) -> Option<&Worksheet> {
        self.worksheet_by_name(name)
    }

    fn sheet_mut(&mut self, name: &str) -> Option<&mut Worksheet> {
        self.worksheet_by_name_mut(name)
    }
}

impl Sheet for Worksheet {
    fn name(&self) -> &str {
        Worksheet::name(self)
    }

    fn row_numbers(&self) -> Vec<u32> {
        Worksheet::row_numbers(self).collect()
    }

    fn cell(&self, row: u32, col: u32) -> Option<&CellValue> {
        self.cell_at(row, col).map(|c| &c.value)
    }

    fn set_value(&mut self, row: u32, col: u32, value: CellValue) -> Result<()> {
        self.set_cell_value_at(row, col, value)?;
        Ok(())
    }

    fn fill(&self, row: u32, col: u32) -> FillStyle {
        self.fill_at(row, col)
    }

    fn set_fill(&mut self, row: u32, col: u32, fill: FillStyle) -> Result<()> {
        self.set_fill_at(row, col, fill)?;
        Ok(())
    }
}
