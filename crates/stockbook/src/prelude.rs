//! Prelude module - common imports for stockbook users
//!
//! ```rust
//! use stockbook::prelude::*;
//! ```

pub use crate::{
    // Inventory operations
    is_highlighted,
    locate,
    save_quantity,
    toggle_highlighted,
    update_header,
    // Session and configuration
    ColumnRange,
    Document,
    Error,
    HighlightChange,
    Inventory,
    InventoryConfig,
    MatchRecord,
    QuantityUpdate,
    Result,
    SearchScope,
    Sheet,
    // Document model
    CellValue,
    FillStyle,
    Workbook,
    Worksheet,
};
