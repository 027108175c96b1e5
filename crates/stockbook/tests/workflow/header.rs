//! Header stamp.

use crate::{audit_date, inventory_workbook, sheet};
use pretty_assertions::assert_eq;
use stockbook::{update_header, CellValue, Error, Inventory, InventoryConfig, Workbook};

#[test]
fn test_header_written_to_g1() {
    let mut workbook = inventory_workbook();

    let text = update_header(
        &mut workbook,
        &InventoryConfig::default(),
        "Alice",
        audit_date(),
    )
    .unwrap();

    assert_eq!(text, "Date Changed - 16/12/25 Alice");
    assert_eq!(
        sheet(&workbook, "WAREHOUSE").get_value("G1").unwrap(),
        CellValue::string("Date Changed - 16/12/25 Alice")
    );
    assert_eq!(
        sheet(&workbook, "CIGARS").get_value("G1").unwrap(),
        CellValue::Empty
    );
}

#[test]
fn test_header_overwrites_previous_stamp() {
    let mut inventory = Inventory::with_defaults(inventory_workbook());

    inventory.update_header_on("Alice", audit_date()).unwrap();
    inventory
        .update_header_on(
            " Bob ",
            chrono::NaiveDate::from_ymd_opt(2026, 2, 3).unwrap(),
        )
        .unwrap();

    assert_eq!(
        sheet(inventory.document(), "WAREHOUSE").get_value("G1").unwrap(),
        CellValue::string("Date Changed - 3/2/26 Bob")
    );
}

#[test]
fn test_header_requires_name() {
    let mut workbook = inventory_workbook();

    assert_eq!(
        update_header(&mut workbook, &InventoryConfig::default(), "", audit_date()),
        Err(Error::InvalidName)
    );
    assert_eq!(
        sheet(&workbook, "WAREHOUSE").get_value("G1").unwrap(),
        CellValue::Empty
    );
}

#[test]
fn test_header_sheet_missing() {
    let mut workbook = Workbook::empty();

    assert_eq!(
        update_header(&mut workbook, &InventoryConfig::default(), "Alice", audit_date()),
        Err(Error::SheetNotFound("WAREHOUSE".into()))
    );
}
