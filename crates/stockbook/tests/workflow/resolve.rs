//! Resolved values read back from the fixture.

use crate::{inventory_workbook, sheet};
use pretty_assertions::assert_eq;
use stockbook::{resolve, resolve_cell, CellValue, Sheet};

#[test]
fn test_resolver_cases() {
    assert_eq!(resolve_cell(None), CellValue::string(""));
    assert_eq!(resolve(&CellValue::Empty), CellValue::string(""));
    assert_eq!(
        resolve(&CellValue::rich_text(["Hello", "  World"])),
        CellValue::string("Hello  World")
    );
    assert_eq!(
        resolve(&CellValue::formula_with_result("=A1+B1", 42)),
        CellValue::Number(42.0)
    );
}

#[test]
fn test_fixture_cells_resolve() {
    let workbook = inventory_workbook();
    let warehouse = sheet(&workbook, "WAREHOUSE");

    assert_eq!(
        resolve_cell(Sheet::cell(warehouse, 3, 11)),
        CellValue::string("36028+5")
    );
    assert_eq!(
        resolve_cell(Sheet::cell(warehouse, 2, 10)),
        CellValue::Number(100.0)
    );
    assert_eq!(resolve_cell(Sheet::cell(warehouse, 2, 12)), CellValue::string(""));
}
