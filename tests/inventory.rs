use std::path::Path;

use stockroom::config::{FileEntry, InventoryConfig};
use stockroom::inventory::{self, Capabilities, OsProbe};

fn inventory_in(dir: &Path) -> InventoryConfig {
    InventoryConfig {
        files: ["Categories", "Products", "ProductItems", "Users"]
            .into_iter()
            .map(|name| FileEntry::new(name, dir.join(format!("{name}.xlsx"))))
            .collect(),
        preview_rows: 5,
    }
}

fn run(config: &InventoryConfig, caps: &Capabilities) -> String {
    let mut out = Vec::new();
    inventory::run(&mut out, &OsProbe, config, caps).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn every_entry_reports_a_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = inventory_in(dir.path());
    let text = run(&config, &Capabilities::detect());

    for entry in &config.files {
        assert!(text.contains(&format!("{}:\n  Path: {}\n", entry.name, entry.path.display())));
    }
    assert_eq!(text.matches("  Status: File not found").count(), 4);
    assert_eq!(text.matches("  Exists: False").count(), 4);
}

#[test]
fn missing_categories_still_checks_the_rest() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Products.xlsx"), vec![0u8; 2048]).unwrap();
    let text = run(&inventory_in(dir.path()), &Capabilities::detect());

    assert!(text.contains("Categories:"));
    assert!(text.contains("Products:\n"));
    assert!(text.contains("  Size: 2048 bytes"));
    assert!(text.contains("Users:"));
    assert!(text.contains("Library Availability:"));
    // no target to parse, so no read attempt either way
    assert!(!text.contains("Successfully read"));
    assert!(!text.contains("Error reading"));
}

#[cfg(feature = "tabular")]
#[test]
fn corrupt_workbook_is_reported_not_raised() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Categories.xlsx"), "not a workbook").unwrap();
    let mut out = Vec::new();
    let table =
        inventory::run(&mut out, &OsProbe, &inventory_in(dir.path()), &Capabilities::detect())
            .unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(table.is_none());
    assert!(text.contains("✓ tabular reader available (calamine)"));
    assert!(text.contains("✗ Error reading spreadsheet: "));
    assert!(text.contains("✓ calamine available"));
}

#[cfg(feature = "tabular")]
#[test]
fn real_workbook_shape_matches_report() {
    use rust_xlsxwriter::Workbook;

    let dir = tempfile::tempdir().unwrap();
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (col, name) in ["id", "name"].into_iter().enumerate() {
        sheet.write_string(0, u16::try_from(col).unwrap(), name).unwrap();
    }
    for (row, (id, name)) in [(1, "Tops"), (2, "Bags"), (3, "Shoes")].into_iter().enumerate() {
        let row = u32::try_from(row).unwrap() + 1;
        sheet.write_number(row, 0, id).unwrap();
        sheet.write_string(row, 1, name).unwrap();
    }
    workbook.save(dir.path().join("Categories.xlsx")).unwrap();

    let mut out = Vec::new();
    let table =
        inventory::run(&mut out, &OsProbe, &inventory_in(dir.path()), &Capabilities::detect())
            .unwrap()
            .unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(table.columns(), ["id", "name"]);
    assert_eq!(table.shape(), (3, 2));
    assert!(text.contains("✓ Successfully read Categories.xlsx"));
    assert!(text.contains("  Columns: ['id', 'name']"));
    assert!(text.contains("  Shape: (3, 2)"));
    assert!(text.contains("0   1   Tops"));
}
