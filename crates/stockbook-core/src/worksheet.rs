//! Worksheet type

use crate::cell::{CellAddress, CellData, CellStorage, CellValue};
use crate::error::{Error, Result};
use crate::style::{FillStyle, Style};
use crate::{MAX_COLS, MAX_ROWS};

/// A worksheet (single sheet in a workbook)
#[derive(Debug)]
pub struct Worksheet {
    name: String,
    cells: CellStorage,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            cells: CellStorage::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    // === Cell Access ===

    /// Get a cell by address string (e.g., "G1")
    pub fn cell(&self, address: &str) -> Result<Option<&CellData>> {
        let addr = CellAddress::parse(address)?;
        Ok(self.cells.get(addr.row, addr.col))
    }

    /// Get a cell by 1-based row and column
    pub fn cell_at(&self, row: u32, col: u32) -> Option<&CellData> {
        self.cells.get(row, col)
    }

    /// Get cell value (convenience method)
    pub fn get_value(&self, address: &str) -> Result<CellValue> {
        let addr = CellAddress::parse(address)?;
        Ok(self.get_value_at(addr.row, addr.col))
    }

    /// Get cell value by 1-based row and column
    pub fn get_value_at(&self, row: u32, col: u32) -> CellValue {
        self.cells
            .get(row, col)
            .map(|c| c.value.clone())
            .unwrap_or(CellValue::Empty)
    }

    /// Get the style applied to a cell (the default style if none)
    pub fn cell_style_at(&self, row: u32, col: u32) -> Style {
        self.cells
            .get(row, col)
            .and_then(|c| self.cells.style_pool().get(c.style_index))
            .copied()
            .unwrap_or_default()
    }

    /// Get the fill of a cell
    pub fn fill_at(&self, row: u32, col: u32) -> FillStyle {
        self.cell_style_at(row, col).fill
    }

    // === Cell Modification ===

    /// Set a cell value by address string
    pub fn set_cell_value<V: Into<CellValue>>(&mut self, address: &str, value: V) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_cell_value_at(addr.row, addr.col, value)
    }

    /// Set a cell value by 1-based row and column, keeping the cell's style
    ///
    /// Setting [`CellValue::Empty`] clears the value.
    pub fn set_cell_value_at<V: Into<CellValue>>(
        &mut self,
        row: u32,
        col: u32,
        value: V,
    ) -> Result<()> {
        self.validate_cell_position(row, col)?;
        self.cells.set_value(row, col, value.into());
        Ok(())
    }

    /// Set a cell style by 1-based row and column, keeping the cell's value
    pub fn set_cell_style_at(&mut self, row: u32, col: u32, style: Style) -> Result<()> {
        self.validate_cell_position(row, col)?;
        let style_index = self.cells.style_pool_mut().get_or_insert(style);
        self.cells.set_style(row, col, style_index);
        Ok(())
    }

    /// Replace only the fill of a cell's style
    pub fn set_fill_at(&mut self, row: u32, col: u32, fill: FillStyle) -> Result<()> {
        let style = self.cell_style_at(row, col).with_fill(fill);
        self.set_cell_style_at(row, col, style)
    }

    // === Iteration ===

    /// Row numbers holding at least one stored cell, ascending
    pub fn row_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.cells.row_indices()
    }

    /// Get the number of stored cells
    pub fn cell_count(&self) -> usize {
        self.cells.cell_count()
    }

    /// Check if the worksheet is empty
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn validate_cell_position(&self, row: u32, col: u32) -> Result<()> {
        if row == 0 || row > MAX_ROWS {
            return Err(Error::RowOutOfBounds(row, MAX_ROWS));
        }
        if col == 0 || col > MAX_COLS {
            return Err(Error::ColumnOutOfBounds(col, MAX_COLS));
        }
        Ok(())
    }
}
