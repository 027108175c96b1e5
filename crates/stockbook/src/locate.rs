//! Row search by product identifier

use log::{debug, warn};
use stockbook_core::CellValue;

use crate::config::InventoryConfig;
use crate::document::{Document, Sheet};
use crate::error::{Error, Result};
use crate::resolve::{display_text, is_truthy, resolve_cell};

/// Which sheets a search visits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// Only the configured header sheet
    HeaderSheet,
    /// Every sheet in document order, minus the excluded ones
    AllSheets,
}

impl SearchScope {
    /// Scope selected by the configuration's multi-sheet flag
    pub fn from_config(config: &InventoryConfig) -> Self {
        if config.search_all_sheets() {
            SearchScope::AllSheets
        } else {
            SearchScope::HeaderSheet
        }
    }
}

/// One row whose identifier matched a search
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub sheet_name: String,
    /// 1-based row number
    pub row: u32,
    /// Resolved identifier value
    pub identifier: CellValue,
    /// Resolved quantity value
    pub quantity: CellValue,
}

/// Find every data row whose identifier equals `query`, ignoring case
///
/// Row 1 is the header and never matches. Cells that resolve to a blank,
/// zero or false value never match either. Results come back in document
/// order, rows ascending within each sheet.
pub fn locate<D: Document>(
    document: &D,
    query: &str,
    scope: SearchScope,
    config: &InventoryConfig,
) -> Result<Vec<MatchRecord>> {
    let needle = query.to_lowercase();
    let mut matches = Vec::new();

    match scope {
        SearchScope::HeaderSheet => {
            let name = config.header_sheet();
            let sheet = document
                .sheet(name)
                .ok_or_else(|| Error::SheetNotFound(name.to_string()))?;
            scan_sheet(sheet, &needle, config, &mut matches);
        }
        SearchScope::AllSheets => {
            for name in document.sheet_names() {
                if config.is_excluded(&name) {
                    debug!("Skipping excluded sheet {}", name);
                    continue;
                }
                match document.sheet(&name) {
                    Some(sheet) => scan_sheet(sheet, &needle, config, &mut matches),
                    None => warn!("Sheet {} listed but not found, skipping", name),
                }
            }
        }
    }

    debug!("Search for {:?} found {} match(es)", query, matches.len());
    Ok(matches)
}

fn scan_sheet<S: Sheet>(
    sheet: &S,
    needle: &str,
    config: &InventoryConfig,
    matches: &mut Vec<MatchRecord>,
) {
    for row in sheet.row_numbers() {
        if row <= 1 {
            continue;
        }

        let identifier = resolve_cell(sheet.cell(row, config.identifier_column()));
        if !is_truthy(&identifier) || display_text(&identifier).to_lowercase() != needle {
            continue;
        }

        let quantity = resolve_cell(sheet.cell(row, config.quantity_column()));
        matches.push(MatchRecord {
            sheet_name: sheet.name().to_string(),
            row,
            identifier,
            quantity,
        });
    }
}
