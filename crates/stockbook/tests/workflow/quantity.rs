//! Quantity edits and the audit trail.

use crate::{audit_date, inventory_workbook, sheet, sheet_mut};
use pretty_assertions::assert_eq;
use stockbook::{
    allocate, audit_entry, parse_quantity, save_quantity, CellValue, ColumnRange, ErrorKind,
    Inventory, InventoryConfig, QuantityUpdate,
};

fn audit_range() -> ColumnRange {
    InventoryConfig::default().audit_range()
}

#[test]
fn test_audit_entries() {
    let date = audit_date();

    assert_eq!(audit_entry(date, 3), "16/12/25-3");
    assert_eq!(audit_entry(date, -2), "16/12/25-2");
    assert_eq!(
        audit_entry(chrono::NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(), 0),
        "5/1/25-0"
    );
}

#[test]
fn test_allocate_on_fixture_rows() {
    let mut workbook = inventory_workbook();

    // K3 holds a product code, not an audit entry
    assert_eq!(allocate(sheet(&workbook, "WAREHOUSE"), 2, audit_range()), Some(12));
    assert_eq!(allocate(sheet(&workbook, "WAREHOUSE"), 3, audit_range()), Some(13));

    let warehouse = sheet_mut(&mut workbook, "WAREHOUSE");
    for col in 12..=20 {
        warehouse.set_cell_value_at(2, col, "1/1/25-1").unwrap();
    }
    assert_eq!(allocate(sheet(&workbook, "WAREHOUSE"), 2, audit_range()), None);
}

#[test]
fn test_save_quantity_decrease() {
    let mut workbook = inventory_workbook();
    let warehouse = sheet_mut(&mut workbook, "WAREHOUSE");
    warehouse.set_cell_value("L3", CellValue::Empty).unwrap();
    warehouse.set_cell_value("M3", "leftover").unwrap();

    let update = save_quantity(
        warehouse,
        3,
        47,
        &InventoryConfig::default(),
        audit_date(),
    )
    .unwrap();

    assert_eq!(
        update,
        QuantityUpdate {
            sheet_name: "WAREHOUSE".into(),
            row: 3,
            old_quantity: 50,
            new_quantity: 47,
            delta: -3,
            audit_column: Some(12),
            cleared_column: Some(13),
        }
    );

    let warehouse = sheet(&workbook, "WAREHOUSE");
    assert_eq!(warehouse.get_value("J3").unwrap(), CellValue::Number(47.0));
    assert_eq!(warehouse.get_value("L3").unwrap(), CellValue::string("16/12/25-3"));
    assert_eq!(warehouse.get_value("M3").unwrap(), CellValue::Empty);
    assert_eq!(warehouse.get_value("K3").unwrap(), CellValue::string("36028+5"));
}

#[test]
fn test_save_quantity_appends_after_existing_entry() {
    let mut workbook = inventory_workbook();

    let update = save_quantity(
        sheet_mut(&mut workbook, "WAREHOUSE"),
        3,
        60,
        &InventoryConfig::default(),
        audit_date(),
    )
    .unwrap();

    assert_eq!(update.audit_column, Some(13));
    assert_eq!(
        update.to_string(),
        "Saved on WAREHOUSE: Qty 50→60 (+10), Date in column M"
    );

    let warehouse = sheet(&workbook, "WAREHOUSE");
    assert_eq!(warehouse.get_value("L3").unwrap(), CellValue::string("1/12/25-1"));
    assert_eq!(warehouse.get_value("M3").unwrap(), CellValue::string("16/12/25-10"));
}

#[test]
fn test_save_quantity_with_full_audit_range() {
    let mut workbook = inventory_workbook();
    let cigars = sheet_mut(&mut workbook, "CIGARS");
    for col in 12..=20 {
        cigars.set_cell_value_at(2, col, "1/1/25-1").unwrap();
    }
    cigars.set_cell_value("U2", "keep").unwrap();

    let update = save_quantity(cigars, 2, 20, &InventoryConfig::default(), audit_date()).unwrap();

    assert_eq!(update.audit_column, None);
    assert_eq!(update.to_string(), "Saved on CIGARS: Qty=20 (No empty date column)");

    let cigars = sheet(&workbook, "CIGARS");
    assert_eq!(cigars.get_value("J2").unwrap(), CellValue::Number(20.0));
    assert!((12..=20).all(|col| cigars.get_value_at(2, col) == CellValue::string("1/1/25-1")));
    assert_eq!(cigars.get_value("U2").unwrap(), CellValue::string("keep"));
}

#[test]
fn test_formula_quantity_uses_cached_result() {
    let mut workbook = inventory_workbook();
    let accessories = sheet_mut(&mut workbook, "ACCESSORIES");
    accessories
        .set_cell_value("J2", CellValue::formula_with_result("=150+50", 200))
        .unwrap();

    let update =
        save_quantity(accessories, 2, 190, &InventoryConfig::default(), audit_date()).unwrap();

    assert_eq!(update.old_quantity, 200);
    assert_eq!(update.delta, -10);
}

#[test]
fn test_parse_quantity_input() {
    assert_eq!(parse_quantity("12"), Ok(12));
    for bad in ["-1", "abc", ""] {
        assert_eq!(
            parse_quantity(bad).unwrap_err().kind(),
            ErrorKind::InputValidation,
            "input {bad:?}"
        );
    }
}

#[test]
fn test_session_save_rejects_bad_input() {
    let mut inventory = Inventory::with_defaults(inventory_workbook());

    assert!(inventory
        .save_quantity_on("WAREHOUSE", 2, "-5", audit_date())
        .is_err());

    let workbook = inventory.into_document();
    assert_eq!(
        sheet(&workbook, "WAREHOUSE").get_value("J2").unwrap(),
        CellValue::Number(100.0)
    );
    assert_eq!(
        sheet(&workbook, "WAREHOUSE").get_value("L2").unwrap(),
        CellValue::Empty
    );
}

#[test]
fn test_session_search_then_save() {
    let mut inventory = Inventory::with_defaults(inventory_workbook());

    let found = inventory.search(" sku001 ").unwrap();
    assert_eq!(found.len(), 2);

    let cigars = &found[1];
    let update = inventory
        .save_quantity_on(&cigars.sheet_name, cigars.row, "12", audit_date())
        .unwrap();
    assert_eq!(
        update.to_string(),
        "Saved on CIGARS: Qty 15→12 (-3), Date in column L"
    );

    let found = inventory.search("SKU001").unwrap();
    assert_eq!(found[1].quantity, CellValue::Number(12.0));
    assert_eq!(found[0].quantity, CellValue::Number(100.0));
}
