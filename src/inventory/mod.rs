//! Spreadsheet inventory checker
//!
//! Reports existence and size of each configured spreadsheet, then tries to
//! load the first one as a table. Every failure becomes a status line; only
//! writing the report itself can fail.

pub mod probe;
pub mod reader;
pub mod table;

pub use probe::{check_files, probe_file, FileProbe, FileRecord, OsProbe, SizeStatus};
pub use reader::{Capabilities, SheetReader};
pub use table::Table;

use crate::config::InventoryConfig;
use crate::logger;
use std::io::{self, Write};

const RULE_WIDTH: usize = 50;

/// Run the full check, writing the report to `out`.
///
/// Returns the loaded table, if any.
pub fn run<W, P>(
    out: &mut W,
    probe: &P,
    config: &InventoryConfig,
    caps: &Capabilities,
) -> io::Result<Option<Table>>
where
    W: Write + ?Sized,
    P: FileProbe + ?Sized,
{
    writeln!(out, "Spreadsheet File Analysis")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    let records = check_files(probe, &config.files);
    for record in &records {
        write_record(out, record)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "Library Availability:")?;

    let table = match &caps.tabular {
        Some(reader) => {
            writeln!(out, "✓ tabular reader available ({})", reader.backend())?;
            match records.first().filter(|r| r.exists) {
                Some(target) => load_table(out, reader.as_ref(), target, config.preview_rows)?,
                None => None,
            }
        }
        None => {
            writeln!(out, "✗ tabular reader not available")?;
            None
        }
    };

    if caps.low_level {
        writeln!(out, "✓ calamine available")?;
    } else {
        writeln!(out, "✗ calamine not available")?;
    }

    Ok(table)
}

fn write_record<W: Write + ?Sized>(out: &mut W, record: &FileRecord) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}:", record.name)?;
    writeln!(out, "  Path: {}", record.path.display())?;
    writeln!(out, "  Exists: {}", if record.exists { "True" } else { "False" })?;
    match record.size {
        SizeStatus::Known(n) => writeln!(out, "  Size: {n} bytes"),
        SizeStatus::Unknown => writeln!(out, "  Size: Could not determine"),
        SizeStatus::Absent => writeln!(out, "  Status: File not found"),
    }
}

fn load_table<W: Write + ?Sized>(
    out: &mut W,
    reader: &dyn SheetReader,
    target: &FileRecord,
    preview_rows: usize,
) -> io::Result<Option<Table>> {
    match reader.read(&target.path) {
        Ok(table) => {
            let file_name = target
                .path
                .file_name()
                .map_or_else(|| target.name.clone(), |n| n.to_string_lossy().into_owned());
            let (rows, cols) = table.shape();
            writeln!(out, "✓ Successfully read {file_name}")?;
            writeln!(out, "  Columns: {}", table.columns_repr())?;
            writeln!(out, "  Shape: ({rows}, {cols})")?;
            writeln!(out, "  Preview:")?;
            writeln!(out, "{}", table.preview(preview_rows))?;
            Ok(Some(table))
        }
        Err(e) => {
            logger::log_warning(&format!(
                "Failed to load '{}': {e}",
                target.path.display()
            ));
            writeln!(out, "✗ Error reading spreadsheet: {e}")?;
            Ok(None)
        }
    }
}

/// Guidance printed when no table could be loaded
pub fn write_install_hint<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "To enable spreadsheet support:")?;
    writeln!(out, "cargo install stockroom --features tabular")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileEntry;
    use crate::error::SheetError;
    use std::path::Path;

    struct FixedReader;

    impl SheetReader for FixedReader {
        fn backend(&self) -> &'static str {
            "fixed"
        }

        fn read(&self, _path: &Path) -> Result<Table, SheetError> {
            Ok(Table::new(
                vec!["id".to_string(), "name".to_string()],
                vec![vec!["1".to_string(), "Tops".to_string()]],
            ))
        }
    }

    struct FailingReader;

    impl SheetReader for FailingReader {
        fn backend(&self) -> &'static str {
            "failing"
        }

        fn read(&self, _path: &Path) -> Result<Table, SheetError> {
            Err(SheetError::NoWorksheet)
        }
    }

    fn config_in(dir: &Path) -> InventoryConfig {
        InventoryConfig {
            files: ["Categories", "Products", "ProductItems", "Users"]
                .into_iter()
                .map(|n| FileEntry::new(n, dir.join(format!("{n}.xlsx"))))
                .collect(),
            preview_rows: 5,
        }
    }

    fn report(config: &InventoryConfig, caps: &Capabilities) -> (String, Option<Table>) {
        let mut out = Vec::new();
        let table = run(&mut out, &OsProbe, config, caps).unwrap();
        (String::from_utf8(out).unwrap(), table)
    }

    #[test]
    fn test_missing_categories_continues() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Users.xlsx"), [0u8; 9]).unwrap();
        let (text, table) = report(&config_in(dir.path()), &Capabilities::none());

        assert!(table.is_none());
        let categories = text.split("\nCategories:\n").nth(1).unwrap();
        assert!(categories.starts_with(&format!(
            "  Path: {}\n  Exists: False\n  Status: File not found\n",
            dir.path().join("Categories.xlsx").display()
        )));
        for name in ["Products:", "ProductItems:", "Users:"] {
            assert!(text.contains(name), "missing section {name}");
        }
        assert!(text.contains("  Size: 9 bytes"));
        assert!(text.contains("Library Availability:"));
    }

    #[test]
    fn test_unavailable_reader_skips_parse() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Categories.xlsx"), "x").unwrap();
        let (text, table) = report(&config_in(dir.path()), &Capabilities::none());

        assert!(table.is_none());
        assert!(text.contains("✗ tabular reader not available"));
        assert!(text.contains("✗ calamine not available"));
        assert!(!text.contains("Successfully read"));
        assert!(!text.contains("Error reading"));
    }

    #[test]
    fn test_loaded_table_matches_report() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Categories.xlsx"), "x").unwrap();
        let caps = Capabilities {
            tabular: Some(Box::new(FixedReader)),
            low_level: true,
        };
        let (text, table) = report(&config_in(dir.path()), &caps);

        let table = table.unwrap();
        let (rows, cols) = table.shape();
        assert!(text.contains("✓ Successfully read Categories.xlsx"));
        assert!(text.contains(&format!("  Shape: ({rows}, {cols})")));
        assert!(text.contains("  Columns: ['id', 'name']"));
        assert!(text.contains("✓ calamine available"));
    }

    #[test]
    fn test_missing_target_skips_parse() {
        let dir = tempfile::tempdir().unwrap();
        let caps = Capabilities {
            tabular: Some(Box::new(FixedReader)),
            low_level: false,
        };
        let (text, table) = report(&config_in(dir.path()), &caps);

        assert!(table.is_none());
        assert!(text.contains("✓ tabular reader available (fixed)"));
        assert!(!text.contains("Successfully read"));
    }

    #[test]
    fn test_parse_failure_reported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Categories.xlsx"), "x").unwrap();
        let caps = Capabilities {
            tabular: Some(Box::new(FailingReader)),
            low_level: true,
        };
        let (text, table) = report(&config_in(dir.path()), &caps);

        assert!(table.is_none());
        assert!(text.contains("✗ Error reading spreadsheet: workbook contains no worksheets"));
        assert!(text.contains("✓ calamine available"));
    }

    /// Reports every file as present but fails every size query
    struct UnreadableSizes;

    impl FileProbe for UnreadableSizes {
        fn exists(&self, _path: &Path) -> bool {
            true
        }

        fn size(&self, _path: &Path) -> io::Result<u64> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    #[test]
    fn test_size_failure_reported_per_entry() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        run(&mut out, &UnreadableSizes, &config_in(dir.path()), &Capabilities::none()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.matches("  Size: Could not determine").count(), 4);
        assert_eq!(text.matches("  Exists: True").count(), 4);
        for name in ["Categories:", "Products:", "ProductItems:", "Users:"] {
            assert!(text.contains(name), "missing section {name}");
        }
        assert!(!text.contains("File not found"));
        assert!(text.contains("Library Availability:"));
    }

    #[test]
    fn test_install_hint() {
        let mut out = Vec::new();
        write_install_hint(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("--features tabular"));
    }
}
