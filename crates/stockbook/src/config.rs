//! Inventory layout configuration
//!
//! Describes where things live in an inventory workbook: the identifier (SKU)
//! column, the quantity column, the audit column range, and the header cell
//! that records who changed the sheet last.

use std::collections::BTreeSet;

use stockbook_core::{column_letters_of, CellAddress, MAX_COLS};

use crate::error::{Error, Result};

/// Inclusive range of 1-based columns
///
/// `start <= end` always holds; construct through [`ColumnRange::new`] or
/// [`ColumnRange::from_letters`]. Deserialized ranges go through the same
/// checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawColumnRange"))]
pub struct ColumnRange {
    start: u32,
    end: u32,
}

impl ColumnRange {
    /// Create a range from 1-based column indices
    pub fn new(start: u32, end: u32) -> Result<Self> {
        let range = Self { start, end };
        range.validate()?;
        Ok(range)
    }

    /// Create a range from column letters, e.g. `("L", "T")`
    pub fn from_letters(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_column(start)?, parse_column(end)?)
    }

    /// First column of the range
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Last column of the range
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of columns in the range
    pub fn len(&self) -> u32 {
        self.end - self.start + 1
    }

    /// A range always holds at least one column
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Check if a column falls inside the range
    pub fn contains(&self, col: u32) -> bool {
        (self.start..=self.end).contains(&col)
    }

    /// Iterate over the columns in ascending order
    pub fn columns(&self) -> impl Iterator<Item = u32> {
        self.start..=self.end
    }

    fn validate(&self) -> Result<()> {
        if self.start == 0 || self.start > self.end {
            return Err(Error::InvalidConfig(format!(
                "column range {}..{} is empty",
                self.start, self.end
            )));
        }
        // The column after the range is cleared and highlighted too.
        if self.end >= MAX_COLS {
            return Err(Error::InvalidConfig(format!(
                "column range must end before column {}",
                column_letters_of(MAX_COLS)
            )));
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawColumnRange {
    start: u32,
    end: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawColumnRange> for ColumnRange {
    type Error = Error;

    fn try_from(raw: RawColumnRange) -> Result<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl std::fmt::Display for ColumnRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}",
            column_letters_of(self.start),
            column_letters_of(self.end)
        )
    }
}

fn parse_column(letters: &str) -> Result<u32> {
    CellAddress::letters_to_column(letters.trim())
        .map_err(|_| Error::InvalidConfig(format!("invalid column letters {:?}", letters)))
}

/// Layout of an inventory workbook
///
/// Serialized configs (with the `serde` feature) should be checked with
/// [`InventoryConfig::validate`] after loading.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InventoryConfig {
    identifier_column: u32,
    quantity_column: u32,
    audit_range: ColumnRange,
    header_cell: String,
    header_sheet: String,
    search_all_sheets: bool,
    excluded_sheets: BTreeSet<String>,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            identifier_column: 2,
            quantity_column: 10,
            audit_range: ColumnRange { start: 12, end: 20 },
            header_cell: "G1".to_string(),
            header_sheet: "WAREHOUSE".to_string(),
            search_all_sheets: true,
            excluded_sheets: BTreeSet::new(),
        }
    }
}

impl InventoryConfig {
    /// Start building a configuration from the defaults
    pub fn builder() -> InventoryConfigBuilder {
        InventoryConfigBuilder::default()
    }

    /// Column holding the product identifier (SKU)
    pub fn identifier_column(&self) -> u32 {
        self.identifier_column
    }

    /// Column holding the quantity
    pub fn quantity_column(&self) -> u32 {
        self.quantity_column
    }

    /// Columns reserved for dated audit entries
    pub fn audit_range(&self) -> ColumnRange {
        self.audit_range
    }

    /// A1 address of the "last changed" header cell
    pub fn header_cell(&self) -> &str {
        &self.header_cell
    }

    /// Parsed header cell address
    pub fn header_address(&self) -> Result<CellAddress> {
        CellAddress::parse(&self.header_cell).map_err(|_| {
            Error::InvalidConfig(format!("invalid header cell {:?}", self.header_cell))
        })
    }

    /// Sheet carrying the header cell, also the single-sheet search target
    pub fn header_sheet(&self) -> &str {
        &self.header_sheet
    }

    /// Whether search covers every sheet rather than the header sheet only
    pub fn search_all_sheets(&self) -> bool {
        self.search_all_sheets
    }

    /// Check if a sheet is excluded from multi-sheet search
    pub fn is_excluded(&self, sheet_name: &str) -> bool {
        self.excluded_sheets.contains(sheet_name)
    }

    /// Excluded sheet names, sorted
    pub fn excluded_sheets(&self) -> impl Iterator<Item = &str> {
        self.excluded_sheets.iter().map(String::as_str)
    }

    /// Switch between multi-sheet and header-sheet search
    pub fn set_search_all_sheets(&mut self, enabled: bool) {
        self.search_all_sheets = enabled;
    }

    /// Exclude a sheet from multi-sheet search
    pub fn exclude_sheet<S: Into<String>>(&mut self, name: S) {
        self.excluded_sheets.insert(name.into());
    }

    /// Put a previously excluded sheet back into multi-sheet search
    pub fn include_sheet(&mut self, name: &str) -> bool {
        self.excluded_sheets.remove(name)
    }

    /// Check the configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        for (what, col) in [
            ("identifier", self.identifier_column),
            ("quantity", self.quantity_column),
        ] {
            if col == 0 || col > MAX_COLS {
                return Err(Error::InvalidConfig(format!(
                    "{} column {} out of bounds",
                    what, col
                )));
            }
        }
        self.audit_range.validate()?;
        self.header_address()?;
        if self.header_sheet.is_empty() {
            return Err(Error::InvalidConfig("header sheet name is empty".into()));
        }
        Ok(())
    }
}

/// Builder for [`InventoryConfig`], taking columns as letters
#[derive(Debug, Clone)]
pub struct InventoryConfigBuilder {
    identifier_column: String,
    quantity_column: String,
    audit_start: String,
    audit_end: String,
    header_cell: String,
    header_sheet: String,
    search_all_sheets: bool,
    excluded_sheets: BTreeSet<String>,
}

impl Default for InventoryConfigBuilder {
    fn default() -> Self {
        Self {
            identifier_column: "B".into(),
            quantity_column: "J".into(),
            audit_start: "L".into(),
            audit_end: "T".into(),
            header_cell: "G1".into(),
            header_sheet: "WAREHOUSE".into(),
            search_all_sheets: true,
            excluded_sheets: BTreeSet::new(),
        }
    }
}

impl InventoryConfigBuilder {
    /// Identifier (SKU) column letters
    pub fn identifier_column(mut self, letters: &str) -> Self {
        self.identifier_column = letters.into();
        self
    }

    /// Quantity column letters
    pub fn quantity_column(mut self, letters: &str) -> Self {
        self.quantity_column = letters.into();
        self
    }

    /// Audit range as start and end letters
    pub fn audit_range(mut self, start: &str, end: &str) -> Self {
        self.audit_start = start.into();
        self.audit_end = end.into();
        self
    }

    /// Header cell address, e.g. `"G1"`
    pub fn header_cell(mut self, address: &str) -> Self {
        self.header_cell = address.into();
        self
    }

    /// Sheet carrying the header cell
    pub fn header_sheet(mut self, name: &str) -> Self {
        self.header_sheet = name.into();
        self
    }

    pub fn search_all_sheets(mut self, enabled: bool) -> Self {
        self.search_all_sheets = enabled;
        self
    }

    pub fn exclude_sheet(mut self, name: &str) -> Self {
        self.excluded_sheets.insert(name.into());
        self
    }

    /// Resolve the column letters and validate the result
    pub fn build(self) -> Result<InventoryConfig> {
        let config = InventoryConfig {
            identifier_column: parse_column(&self.identifier_column)?,
            quantity_column: parse_column(&self.quantity_column)?,
            audit_range: ColumnRange::from_letters(&self.audit_start, &self.audit_end)?,
            header_cell: self.header_cell,
            header_sheet: self.header_sheet,
            search_all_sheets: self.search_all_sheets,
            excluded_sheets: self.excluded_sheets,
        };
        config.validate()?;
        Ok(config)
    }
}
