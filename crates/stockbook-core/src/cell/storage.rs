//! Cell storage implementation
//!
//! Sparse storage for worksheet cells. Only non-empty cells are stored, using
//! a row-based BTreeMap structure so rows come back in ascending order.

use std::collections::BTreeMap;

use super::CellValue;
use crate::style::StylePool;

/// Complete data for a single cell
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellData {
    /// The cell's value
    pub value: CellValue,
    /// Index into the style pool (0 = default style)
    pub style_index: u32,
}

impl CellData {
    /// Create a new cell with a value and default style
    pub fn new(value: CellValue) -> Self {
        Self {
            value,
            style_index: 0,
        }
    }

    /// Create a new cell with a value and style
    pub fn with_style(value: CellValue, style_index: u32) -> Self {
        Self { value, style_index }
    }

    /// Check if this cell is effectively empty (no value and default style)
    pub fn is_empty(&self) -> bool {
        self.value.is_empty() && self.style_index == 0
    }
}

/// Sparse row-based storage for worksheet cells
///
/// Structure: `BTreeMap<row, BTreeMap<col, CellData>>`, both keys 1-based.
#[derive(Debug, Default)]
pub struct CellStorage {
    rows: BTreeMap<u32, BTreeMap<u32, CellData>>,
    style_pool: StylePool,
}

impl CellStorage {
    /// Create a new empty cell storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cell
    pub fn get(&self, row: u32, col: u32) -> Option<&CellData> {
        self.rows.get(&row).and_then(|r| r.get(&col))
    }

    /// Set a cell
    ///
    /// If the cell data is empty (no value, default style), the cell is removed.
    pub fn set(&mut self, row: u32, col: u32, data: CellData) {
        if data.is_empty() {
            self.remove(row, col);
        } else {
            self.rows.entry(row).or_default().insert(col, data);
        }
    }

    /// Set just the cell value (preserving style)
    pub fn set_value(&mut self, row: u32, col: u32, value: CellValue) {
        let style_index = self.get(row, col).map(|c| c.style_index).unwrap_or(0);
        self.set(row, col, CellData::with_style(value, style_index));
    }

    /// Set just the cell style (preserving value)
    pub fn set_style(&mut self, row: u32, col: u32, style_index: u32) {
        let value = self
            .get(row, col)
            .map(|c| c.value.clone())
            .unwrap_or_default();
        self.set(row, col, CellData::with_style(value, style_index));
    }

    /// Remove a cell
    pub fn remove(&mut self, row: u32, col: u32) -> Option<CellData> {
        let result = self.rows.get_mut(&row).and_then(|r| r.remove(&col));

        if self.rows.get(&row).is_some_and(|r| r.is_empty()) {
            self.rows.remove(&row);
        }

        result
    }

    /// Get the number of stored cells
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(|r| r.len()).sum()
    }

    /// Check if storage is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over row numbers that have data
    pub fn row_indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.keys().copied()
    }

    /// Get the style pool
    pub fn style_pool(&self) -> &StylePool {
        &self.style_pool
    }

    /// Get the style pool mutably
    pub fn style_pool_mut(&mut self) -> &mut StylePool {
        &mut self.style_pool
    }
}
