//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellValue`] - The value stored in a cell
//! - [`CellAddress`] - A cell's location (e.g., "G1") and the column letter codec
//! - [`CellData`] - Complete cell data including value and style

mod address;
mod storage;
mod value;

pub use address::{column_index_of, column_letters_of, CellAddress};
pub use storage::{CellData, CellStorage};
pub use value::{CellError, CellValue, SharedString, TextRun};
