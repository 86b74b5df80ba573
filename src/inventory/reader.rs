//! Spreadsheet readers and capability detection
//!
//! Spreadsheet support is optional: the `tabular` cargo feature compiles in
//! the table loader, the `calamine` feature the workbook parser beneath it.

use super::table::Table;
use crate::error::SheetError;
use std::path::Path;

/// Loads the first worksheet of a file as a table, first row as header
pub trait SheetReader {
    /// Name of the backing library, for the report
    fn backend(&self) -> &'static str;

    fn read(&self, path: &Path) -> Result<Table, SheetError>;
}

/// Optional spreadsheet support compiled into this build
pub struct Capabilities {
    /// Table loader, if available
    pub tabular: Option<Box<dyn SheetReader>>,
    /// Whether the raw workbook parser is linked in. Only reported.
    pub low_level: bool,
}

impl Capabilities {
    /// Capabilities of this build
    pub fn detect() -> Self {
        Self {
            #[cfg(feature = "tabular")]
            tabular: Some(Box::new(CalamineReader)),
            #[cfg(not(feature = "tabular"))]
            tabular: None,
            low_level: cfg!(feature = "calamine"),
        }
    }

    /// No spreadsheet support at all
    pub fn none() -> Self {
        Self {
            tabular: None,
            low_level: false,
        }
    }
}

/// Reader for xlsx/xlsm/xls/ods workbooks
#[cfg(feature = "tabular")]
#[derive(Debug, Clone, Copy, Default)]
pub struct CalamineReader;

#[cfg(feature = "tabular")]
impl SheetReader for CalamineReader {
    fn backend(&self) -> &'static str {
        "calamine"
    }

    fn read(&self, path: &Path) -> Result<Table, SheetError> {
        use calamine::{open_workbook_auto, Reader};

        let mut workbook = open_workbook_auto(path)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(SheetError::NoWorksheet)??;

        let mut rows = range
            .rows()
            .map(|row| row.iter().map(render_cell).collect::<Vec<_>>());
        let header = rows.next().unwrap_or_default();
        Ok(Table::new(header, rows.collect()))
    }
}

#[cfg(feature = "tabular")]
fn render_cell(cell: &calamine::Data) -> String {
    match cell {
        calamine::Data::Bool(true) => "True".to_string(),
        calamine::Data::Bool(false) => "False".to_string(),
        other => other.to_string(),
    }
}
