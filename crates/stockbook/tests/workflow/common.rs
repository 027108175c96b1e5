//! Shared fixture for workflow tests.

use chrono::NaiveDate;
use stockbook::{Workbook, Worksheet};

/// Audit date used throughout the tests: 16 December 2025
pub fn audit_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 16).expect("valid date")
}

fn sheet_with_header(name: &str) -> Worksheet {
    let mut sheet = Worksheet::new(name);
    sheet.set_cell_value("A1", "Product").unwrap();
    sheet.set_cell_value("B1", "SKU").unwrap();
    sheet.set_cell_value("J1", "Quantity").unwrap();
    sheet
}

/// Build the inventory workbook:
///
/// | sheet       | row | B      | G              | J   | K       | L         |
/// |-------------|-----|--------|----------------|-----|---------|-----------|
/// | WAREHOUSE   | 2   | SKU001 | Test Product A | 100 |         |           |
/// | WAREHOUSE   | 3   | SKU002 | Test Product B | 50  | 36028+5 | 1/12/25-1 |
/// | CIGARS      | 2   | SKU003 | Premium Cigar  | 25  |         |           |
/// | CIGARS      | 3   | SKU001 | Special Cigar  | 15  |         |           |
/// | ACCESSORIES | 2   | ACC001 | Lighter        | 200 |         |           |
pub fn inventory_workbook() -> Workbook {
    let mut warehouse = sheet_with_header("WAREHOUSE");
    warehouse.set_cell_value("K1", "Date 1").unwrap();
    warehouse.set_cell_value("B2", "SKU001").unwrap();
    warehouse.set_cell_value("G2", "Test Product A").unwrap();
    warehouse.set_cell_value("J2", 100).unwrap();
    warehouse.set_cell_value("B3", "SKU002").unwrap();
    warehouse.set_cell_value("G3", "Test Product B").unwrap();
    warehouse.set_cell_value("J3", 50).unwrap();
    warehouse.set_cell_value("K3", "36028+5").unwrap();
    warehouse.set_cell_value("L3", "1/12/25-1").unwrap();

    let mut cigars = sheet_with_header("CIGARS");
    cigars.set_cell_value("B2", "SKU003").unwrap();
    cigars.set_cell_value("G2", "Premium Cigar").unwrap();
    cigars.set_cell_value("J2", 25).unwrap();
    cigars.set_cell_value("B3", "SKU001").unwrap();
    cigars.set_cell_value("G3", "Special Cigar").unwrap();
    cigars.set_cell_value("J3", 15).unwrap();

    let mut accessories = sheet_with_header("ACCESSORIES");
    accessories.set_cell_value("B2", "ACC001").unwrap();
    accessories.set_cell_value("G2", "Lighter").unwrap();
    accessories.set_cell_value("J2", 200).unwrap();

    let mut workbook = Workbook::empty();
    workbook.add_existing_worksheet(warehouse).unwrap();
    workbook.add_existing_worksheet(cigars).unwrap();
    workbook.add_existing_worksheet(accessories).unwrap();
    workbook
}

/// Get a sheet of the fixture workbook, panicking if it is missing
pub fn sheet<'a>(workbook: &'a Workbook, name: &str) -> &'a Worksheet {
    workbook
        .worksheet_by_name(name)
        .unwrap_or_else(|| panic!("fixture sheet {name} missing"))
}

/// Mutable variant of [`sheet`]
pub fn sheet_mut<'a>(workbook: &'a mut Workbook, name: &str) -> &'a mut Worksheet {
    workbook
        .worksheet_by_name_mut(name)
        .unwrap_or_else(|| panic!("fixture sheet {name} missing"))
}
