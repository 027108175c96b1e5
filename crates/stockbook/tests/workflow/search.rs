//! SKU search over one or all sheets.

use crate::inventory_workbook;
use pretty_assertions::assert_eq;
use stockbook::{locate, CellValue, Error, InventoryConfig, SearchScope, Workbook};

fn search(workbook: &Workbook, query: &str, scope: SearchScope) -> Vec<(String, u32, CellValue)> {
    locate(workbook, query, scope, &InventoryConfig::default())
        .unwrap()
        .into_iter()
        .map(|m| (m.sheet_name, m.row, m.quantity))
        .collect()
}

#[test]
fn test_header_sheet_search() {
    let workbook = inventory_workbook();

    assert_eq!(
        search(&workbook, "SKU002", SearchScope::HeaderSheet),
        vec![("WAREHOUSE".to_string(), 3, CellValue::Number(50.0))]
    );
}

#[test]
fn test_header_sheet_search_mixed_case() {
    let workbook = inventory_workbook();

    let found = locate(
        &workbook,
        "sku001",
        SearchScope::HeaderSheet,
        &InventoryConfig::default(),
    )
    .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].row, 2);
    assert_eq!(found[0].identifier, CellValue::string("SKU001"));
    assert_eq!(found[0].quantity, CellValue::Number(100.0));
}

#[test]
fn test_all_sheets_one_record_per_sheet() {
    let workbook = inventory_workbook();

    assert_eq!(
        search(&workbook, "SKU001", SearchScope::AllSheets),
        vec![
            ("WAREHOUSE".to_string(), 2, CellValue::Number(100.0)),
            ("CIGARS".to_string(), 3, CellValue::Number(15.0)),
        ]
    );
}

#[test]
fn test_all_sheets_single_hit() {
    let workbook = inventory_workbook();

    assert_eq!(
        search(&workbook, "sku003", SearchScope::AllSheets),
        vec![("CIGARS".to_string(), 2, CellValue::Number(25.0))]
    );
}

#[test]
fn test_no_match() {
    let workbook = inventory_workbook();

    assert!(search(&workbook, "NOTEXIST", SearchScope::AllSheets).is_empty());
    assert!(search(&workbook, "NOTEXIST", SearchScope::HeaderSheet).is_empty());
}

#[test]
fn test_header_labels_are_not_rows() {
    let workbook = inventory_workbook();

    assert!(search(&workbook, "sku", SearchScope::AllSheets).is_empty());
}

#[test]
fn test_excluded_sheet_is_skipped() {
    let workbook = inventory_workbook();
    let mut config = InventoryConfig::default();
    config.exclude_sheet("CIGARS");

    let found = locate(&workbook, "SKU001", SearchScope::AllSheets, &config).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].sheet_name, "WAREHOUSE");

    config.include_sheet("CIGARS");
    let found = locate(&workbook, "SKU001", SearchScope::AllSheets, &config).unwrap();
    assert_eq!(found.len(), 2);
}

#[test]
fn test_scope_follows_config() {
    let workbook = inventory_workbook();
    let mut config = InventoryConfig::default();
    config.set_search_all_sheets(false);

    let found = locate(
        &workbook,
        "ACC001",
        SearchScope::from_config(&config),
        &config,
    )
    .unwrap();
    assert!(found.is_empty());

    config.set_search_all_sheets(true);
    let found = locate(
        &workbook,
        "ACC001",
        SearchScope::from_config(&config),
        &config,
    )
    .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].sheet_name, "ACCESSORIES");
}

#[test]
fn test_missing_header_sheet() {
    let mut workbook = Workbook::empty();
    workbook.add_worksheet_with_name("CIGARS").unwrap();

    assert_eq!(
        locate(
            &workbook,
            "SKU001",
            SearchScope::HeaderSheet,
            &InventoryConfig::default()
        ),
        Err(Error::SheetNotFound("WAREHOUSE".into()))
    );
}

#[test]
fn test_empty_workbook_has_no_matches() {
    let workbook = Workbook::empty();

    assert_eq!(
        locate(
            &workbook,
            "SKU001",
            SearchScope::AllSheets,
            &InventoryConfig::default()
        ),
        Ok(vec![])
    );
}
