//! Quantity edits and the dated audit trail
//!
//! Each inventory row reserves a range of columns (by default `L..T`) for a
//! running log of quantity changes. Saving a new quantity writes an entry of
//! the form `D/M/YY-N` into the first empty slot, where `N` is the size of the
//! change, and clears the cell right after it so the newest entry is always
//! followed by a gap.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use log::{debug, info, warn};
use stockbook_core::{column_letters_of, CellValue};

use crate::config::{ColumnRange, InventoryConfig};
use crate::document::Sheet;
use crate::error::{Error, Result};
use crate::resolve::{coerce_quantity, is_blank, leading_integer, resolve_cell, MAX_QUANTITY};

/// Find the first empty audit column in a row
///
/// Returns `None` when every column of the range holds a value.
pub fn allocate<S: Sheet>(sheet: &S, row: u32, range: ColumnRange) -> Option<u32> {
    range
        .columns()
        .find(|&col| is_blank(&resolve_cell(sheet.cell(row, col))))
}

/// Date in the short `D/M/YY` form used by inventory sheets (no padding on
/// day or month)
pub fn short_date(date: NaiveDate) -> String {
    format!(
        "{}/{}/{:02}",
        date.day(),
        date.month(),
        date.year().rem_euclid(100)
    )
}

/// Audit entry for a quantity change: `D/M/YY-N` with `N = |delta|`
pub fn audit_entry(date: NaiveDate, delta: i64) -> String {
    format!("{}-{}", short_date(date), delta.unsigned_abs())
}

/// Parse a quantity typed by a user
///
/// Takes the leading whole number like a lenient form field would
/// (`"12 units"` is 12). Empty, non-numeric and negative input is rejected,
/// as is anything above [`MAX_QUANTITY`].
pub fn parse_quantity(input: &str) -> Result<i64> {
    match leading_integer(input) {
        Some(quantity) if (0..=MAX_QUANTITY).contains(&quantity) => Ok(quantity),
        _ => Err(Error::InvalidQuantity(input.to_string())),
    }
}

/// Outcome of [`save_quantity`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityUpdate {
    pub sheet_name: String,
    pub row: u32,
    pub old_quantity: i64,
    pub new_quantity: i64,
    /// `new_quantity - old_quantity`
    pub delta: i64,
    /// Column that received the audit entry, `None` when the range was full
    pub audit_column: Option<u32>,
    /// Column whose value was cleared after the entry
    pub cleared_column: Option<u32>,
}

impl fmt::Display for QuantityUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.audit_column {
            Some(col) => write!(
                f,
                "Saved on {}: Qty {}→{} ({}{}), Date in column {}",
                self.sheet_name,
                self.old_quantity,
                self.new_quantity,
                if self.delta >= 0 { "+" } else { "" },
                self.delta,
                column_letters_of(col)
            ),
            None => write!(
                f,
                "Saved on {}: Qty={} (No empty date column)",
                self.sheet_name, self.new_quantity
            ),
        }
    }
}

/// Write a new quantity into a row and log the change in its audit range
///
/// The previous quantity is read through the resolver and coerced to a whole
/// number (unreadable values count as 0). A full audit range is not an
/// error: the quantity is still written and the result carries no audit
/// column.
pub fn save_quantity<S: Sheet>(
    sheet: &mut S,
    row: u32,
    new_quantity: i64,
    config: &InventoryConfig,
    date: NaiveDate,
) -> Result<QuantityUpdate> {
    if !(0..=MAX_QUANTITY).contains(&new_quantity) {
        return Err(Error::InvalidQuantity(new_quantity.to_string()));
    }

    let quantity_column = config.quantity_column();
    let old_quantity = coerce_quantity(&resolve_cell(sheet.cell(row, quantity_column)));

    sheet.set_value(row, quantity_column, CellValue::Number(new_quantity as f64))?;
    let delta = new_quantity - old_quantity;

    let range = config.audit_range();
    let mut update = QuantityUpdate {
        sheet_name: sheet.name().to_string(),
        row,
        old_quantity,
        new_quantity,
        delta,
        audit_column: None,
        cleared_column: None,
    };

    match allocate(&*sheet, row, range) {
        Some(col) => {
            let entry = audit_entry(date, delta);
            debug!("Audit entry {} goes to column {}", entry, column_letters_of(col));
            sheet.set_value(row, col, CellValue::string(entry))?;

            let next = col + 1;
            if next <= range.end().saturating_add(1) {
                sheet.set_value(row, next, CellValue::Empty)?;
                update.cleared_column = Some(next);
            }
            update.audit_column = Some(col);
        }
        None => warn!(
            "Audit range {} full on {} row {}, quantity saved without an entry",
            range, update.sheet_name, row
        ),
    }

    info!(
        "Quantity on {} row {}: {} -> {}",
        update.sheet_name, row, old_quantity, new_quantity
    );
    Ok(update)
}
