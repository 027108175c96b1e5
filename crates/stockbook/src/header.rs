//! "Last changed" header stamp

use chrono::NaiveDate;
use log::info;
use stockbook_core::CellValue;

use crate::audit::short_date;
use crate::config::InventoryConfig;
use crate::document::{Document, Sheet};
use crate::error::{Error, Result};

/// Header text for a change made by `name` on `date`
pub fn header_text(name: &str, date: NaiveDate) -> String {
    format!("Date Changed - {} {}", short_date(date), name)
}

/// Stamp the configured header cell with who changed the sheet and when
///
/// The name is trimmed and must not be empty. Returns the text written.
pub fn update_header<D: Document>(
    document: &mut D,
    config: &InventoryConfig,
    name: &str,
    date: NaiveDate,
) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::InvalidName);
    }

    let address = config.header_address()?;
    let sheet_name = config.header_sheet();
    let sheet = document
        .sheet_mut(sheet_name)
        .ok_or_else(|| Error::SheetNotFound(sheet_name.to_string()))?;

    let text = header_text(name, date);
    sheet.set_value(address.row, address.col, CellValue::string(text.as_str()))?;

    info!("Header {}!{} set to {:?}", sheet_name, address, text);
    Ok(text)
}
