//! # stockbook
//!
//! Inventory editing on top of spreadsheet documents.
//!
//! Stockbook finds product rows by SKU across the sheets of a workbook, writes
//! new quantities while keeping a dated audit trail in a reserved column
//! range, toggles a yellow low-stock marker on rows, and stamps a "last
//! changed" header.
//!
//! ## Features
//!
//! - Case-insensitive SKU search over one sheet or all sheets, with exclusions
//! - Quantity edits with `D/M/YY-N` audit entries
//! - Low-stock row highlighting
//! - Works on any backend implementing [`Document`]/[`Sheet`]; the in-memory
//!   [`Workbook`] from `stockbook-core` is supported out of the box
//! - `serde` feature: (de)serialize [`InventoryConfig`]
//!
//! ## Example
//!
//! ```rust
//! use stockbook::prelude::*;
//! use chrono::NaiveDate;
//!
//! let mut workbook = Workbook::empty();
//! workbook.add_worksheet_with_name("WAREHOUSE").unwrap();
//! let sheet = workbook.worksheet_by_name_mut("WAREHOUSE").unwrap();
//! sheet.set_cell_value("B3", "SKU002").unwrap();
//! sheet.set_cell_value("J3", 50).unwrap();
//!
//! let config = InventoryConfig::default();
//! let found = locate(&workbook, "sku002", SearchScope::AllSheets, &config).unwrap();
//! assert_eq!(found[0].row, 3);
//!
//! let date = NaiveDate::from_ymd_opt(2025, 12, 16).unwrap();
//! let sheet = workbook.worksheet_by_name_mut("WAREHOUSE").unwrap();
//! let update = save_quantity(sheet, 3, 47, &config, date).unwrap();
//! assert_eq!(
//!     update.to_string(),
//!     "Saved on WAREHOUSE: Qty 50→47 (-3), Date in column L"
//! );
//! ```

pub mod audit;
pub mod config;
pub mod document;
pub mod error;
pub mod header;
pub mod highlight;
pub mod inventory;
pub mod locate;
pub mod prelude;
pub mod resolve;

pub use audit::{
    allocate, audit_entry, parse_quantity, save_quantity, short_date, QuantityUpdate,
};
pub use config::{ColumnRange, InventoryConfig, InventoryConfigBuilder};
pub use document::{Document, Sheet};
pub use error::{Error, ErrorKind, Result};
pub use header::{header_text, update_header};
pub use highlight::{
    is_highlighted, set_highlighted, toggle_highlighted, HighlightChange, HIGHLIGHT_FILL,
};
pub use inventory::Inventory;
pub use locate::{locate, MatchRecord, SearchScope};
pub use resolve::{
    coerce_quantity, display_text, is_blank, is_truthy, resolve, resolve_cell, MAX_QUANTITY,
};

// Re-export the document model
pub use stockbook_core::{
    column_index_of, column_letters_of, CellAddress, CellValue, Color, FillStyle, PatternType,
    TextRun, Workbook, Worksheet,
};
