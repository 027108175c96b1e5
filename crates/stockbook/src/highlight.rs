//! Low-stock row highlighting
//!
//! A highlighted row is painted solid yellow from column `A` through the
//! column after the audit range. Whether a row counts as highlighted is read
//! back from the identifier cell alone.

use std::fmt;

use log::info;
use stockbook_core::{Color, FillStyle};

use crate::config::{ColumnRange, InventoryConfig};
use crate::document::{Document, Sheet};
use crate::error::{Error, Result};

/// Fill used to mark low-stock rows
pub const HIGHLIGHT_FILL: FillStyle = FillStyle::Solid {
    color: Color::YELLOW,
};

/// Check if a row carries the low-stock highlight
///
/// Looks at the identifier cell only: it must have a solid fill whose ARGB
/// hex contains `FFFF00`. A missing sheet reads as not highlighted.
pub fn is_highlighted<D: Document>(
    document: &D,
    sheet_name: &str,
    row: u32,
    config: &InventoryConfig,
) -> bool {
    document
        .sheet(sheet_name)
        .map(|sheet| is_highlight_fill(&sheet.fill(row, config.identifier_column())))
        .unwrap_or(false)
}

fn is_highlight_fill(fill: &FillStyle) -> bool {
    fill.is_solid()
        && fill
            .foreground()
            .map(|color| color.to_argb_hex().to_uppercase().contains("FFFF00"))
            .unwrap_or(false)
}

/// Paint or clear the highlight on columns `1..=range.end() + 1` of a row
///
/// Only fills change; cell values are left alone.
pub fn set_highlighted<S: Sheet>(
    sheet: &mut S,
    row: u32,
    on: bool,
    range: ColumnRange,
) -> Result<()> {
    let fill = if on { HIGHLIGHT_FILL } else { FillStyle::None };
    for col in 1..=range.end().saturating_add(1) {
        sheet.set_fill(row, col, fill)?;
    }
    Ok(())
}

/// Result of [`toggle_highlighted`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightChange {
    pub sheet_name: String,
    pub row: u32,
    /// State after the toggle
    pub highlighted: bool,
}

impl fmt::Display for HighlightChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.highlighted {
            write!(f, "Row {} highlighted on {}", self.row, self.sheet_name)
        } else {
            write!(
                f,
                "Highlight removed from row {} on {}",
                self.row, self.sheet_name
            )
        }
    }
}

/// Flip the highlight state of a row
pub fn toggle_highlighted<D: Document>(
    document: &mut D,
    sheet_name: &str,
    row: u32,
    config: &InventoryConfig,
) -> Result<HighlightChange> {
    let highlighted = !is_highlighted(&*document, sheet_name, row, config);

    let sheet = document
        .sheet_mut(sheet_name)
        .ok_or_else(|| Error::SheetNotFound(sheet_name.to_string()))?;
    set_highlighted(sheet, row, highlighted, config.audit_range())?;

    info!(
        "Highlight {} on {} row {}",
        if highlighted { "set" } else { "cleared" },
        sheet_name,
        row
    );
    Ok(HighlightChange {
        sheet_name: sheet_name.to_string(),
        row,
        highlighted,
    })
}
