//! Inventory editing session
//!
//! [`Inventory`] owns one document together with its layout and runs each
//! user action (search, save a quantity, toggle a highlight, stamp the
//! header) to completion. Mutating actions take `&mut self`, so a session is
//! edited by one caller at a time; wrap it in a `Mutex` to share it.
//!
//! # Example
//!
//! ```rust
//! use stockbook::{Inventory, Workbook};
//!
//! let mut workbook = Workbook::empty();
//! workbook.add_worksheet_with_name("WAREHOUSE").unwrap();
//! let sheet = workbook.worksheet_by_name_mut("WAREHOUSE").unwrap();
//! sheet.set_cell_value("B2", "SKU001").unwrap();
//! sheet.set_cell_value("J2", 100).unwrap();
//!
//! let mut inventory = Inventory::with_defaults(workbook);
//! let found = inventory.search("sku001").unwrap();
//! assert_eq!(found.len(), 1);
//!
//! let update = inventory.save_quantity("WAREHOUSE", found[0].row, "97").unwrap();
//! assert_eq!(update.delta, -3);
//! ```

use chrono::{Local, NaiveDate};
use log::debug;
use stockbook_core::Workbook;

use crate::audit::{self, parse_quantity, QuantityUpdate};
use crate::config::InventoryConfig;
use crate::document::Document;
use crate::error::{Error, Result};
use crate::header;
use crate::highlight::{self, HighlightChange};
use crate::locate::{locate, MatchRecord, SearchScope};

/// An inventory document with its layout
#[derive(Debug)]
pub struct Inventory<D: Document = Workbook> {
    document: D,
    config: InventoryConfig,
}

impl<D: Document> Inventory<D> {
    /// Open a session over `document`, validating the configuration first
    pub fn new(document: D, config: InventoryConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { document, config })
    }

    /// Open a session using the default layout
    pub fn with_defaults(document: D) -> Self {
        Self {
            document,
            config: InventoryConfig::default(),
        }
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    /// Close the session, handing back the edited document
    pub fn into_document(self) -> D {
        self.document
    }

    pub fn config(&self) -> &InventoryConfig {
        &self.config
    }

    /// Switch between searching every sheet and the header sheet only
    pub fn set_search_all_sheets(&mut self, enabled: bool) {
        self.config.set_search_all_sheets(enabled);
    }

    /// Leave a sheet out of multi-sheet search
    pub fn exclude_sheet<S: Into<String>>(&mut self, name: S) {
        self.config.exclude_sheet(name);
    }

    /// Put an excluded sheet back into multi-sheet search
    pub fn include_sheet(&mut self, name: &str) -> bool {
        self.config.include_sheet(name)
    }

    /// Search for a SKU using the configured scope
    ///
    /// The query is trimmed and must not be empty.
    pub fn search(&self, query: &str) -> Result<Vec<MatchRecord>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::EmptyQuery);
        }
        locate(
            &self.document,
            query,
            SearchScope::from_config(&self.config),
            &self.config,
        )
    }

    /// Save a quantity typed by the user, dated today
    pub fn save_quantity(
        &mut self,
        sheet_name: &str,
        row: u32,
        input: &str,
    ) -> Result<QuantityUpdate> {
        self.save_quantity_on(sheet_name, row, input, today())
    }

    /// Save a quantity typed by the user with an explicit audit date
    pub fn save_quantity_on(
        &mut self,
        sheet_name: &str,
        row: u32,
        input: &str,
        date: NaiveDate,
    ) -> Result<QuantityUpdate> {
        let quantity = parse_quantity(input)?;
        let sheet = self
            .document
            .sheet_mut(sheet_name)
            .ok_or_else(|| Error::SheetNotFound(sheet_name.to_string()))?;
        audit::save_quantity(sheet, row, quantity, &self.config, date)
    }

    pub fn is_highlighted(&self, sheet_name: &str, row: u32) -> bool {
        highlight::is_highlighted(&self.document, sheet_name, row, &self.config)
    }

    /// Flip the low-stock highlight on a row
    pub fn toggle_highlight(&mut self, sheet_name: &str, row: u32) -> Result<HighlightChange> {
        highlight::toggle_highlighted(&mut self.document, sheet_name, row, &self.config)
    }

    /// Stamp the header cell with `name` and today's date
    pub fn update_header(&mut self, name: &str) -> Result<String> {
        self.update_header_on(name, today())
    }

    /// Stamp the header cell with `name` and an explicit date
    pub fn update_header_on(&mut self, name: &str, date: NaiveDate) -> Result<String> {
        header::update_header(&mut self.document, &self.config, name, date)
    }
}

fn today() -> NaiveDate {
    let date = Local::now().date_naive();
    debug!("Using local date {}", date);
    date
}
