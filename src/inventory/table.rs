//! In-memory table loaded from a worksheet

use std::collections::{HashMap, HashSet};
use std::fmt::Write as _;

/// Rows of text cells under a header
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table from a header row and data rows.
    ///
    /// The width is the longest of the header and all rows. Blank column names
    /// become `Unnamed: <i>`, repeated names get `.1`, `.2`, ... suffixes, and
    /// short rows are padded with empty cells.
    pub fn new(header: Vec<String>, mut rows: Vec<Vec<String>>) -> Self {
        let width = rows.iter().map(Vec::len).chain([header.len()]).max().unwrap_or(0);
        let columns = name_columns(header, width);
        for row in &mut rows {
            row.resize(width, String::new());
        }
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// `(rows, columns)`, header excluded
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    /// Render the first `limit` rows as right-aligned text with a row index
    pub fn preview(&self, limit: usize) -> String {
        if self.rows.is_empty() {
            return format!("Empty table\nColumns: {}", self.columns_repr());
        }

        let rows = &self.rows[..limit.min(self.rows.len())];
        let index: Vec<String> = (0..rows.len()).map(|i| i.to_string()).collect();
        let index_width = index.iter().map(|s| s.chars().count()).max().unwrap_or(0);
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(c, name)| {
                rows.iter()
                    .map(|row| row[c].chars().count())
                    .chain([name.chars().count()])
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        let _ = write!(out, "{:index_width$}", "");
        for (name, &width) in self.columns.iter().zip(&widths) {
            let _ = write!(out, "  {name:>width$}");
        }
        for (i, row) in rows.iter().enumerate() {
            let _ = write!(out, "\n{:<index_width$}", index[i]);
            for (cell, &width) in row.iter().zip(&widths) {
                let _ = write!(out, "  {cell:>width$}");
            }
        }
        out
    }

    /// Column names as a bracketed, quoted list: `['id', 'name']`
    pub fn columns_repr(&self) -> String {
        let quoted: Vec<String> = self.columns.iter().map(|c| format!("'{c}'")).collect();
        format!("[{}]", quoted.join(", "))
    }
}

fn name_columns(header: Vec<String>, width: usize) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::new();
    let mut suffixes: HashMap<String, usize> = HashMap::new();
    let mut header = header;
    header.resize(width, String::new());
    header
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let base = if name.trim().is_empty() {
                format!("Unnamed: {i}")
            } else {
                name
            };
            let mut name = base.clone();
            // suffixed names may themselves already be taken
            while used.contains(&name) {
                let n = suffixes.entry(base.clone()).or_insert(0);
                *n += 1;
                name = format!("{base}.{n}");
            }
            used.insert(name.clone());
            name
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| (*s).to_string()).collect()
    }

    fn categories() -> Table {
        Table::new(
            strings(&["id", "name"]),
            vec![
                strings(&["1", "Tops"]),
                strings(&["2", "Bags"]),
                strings(&["10", "Accessories"]),
            ],
        )
    }

    #[test]
    fn test_shape_excludes_header() {
        assert_eq!(categories().shape(), (3, 2));
        assert_eq!(Table::default().shape(), (0, 0));
    }

    #[test]
    fn test_blank_and_duplicate_columns() {
        let table = Table::new(strings(&["id", "", "id"]), vec![strings(&["1", "2", "3", "4"])]);
        assert_eq!(table.columns(), ["id", "Unnamed: 1", "id.1", "Unnamed: 3"]);
        assert_eq!(table.shape(), (1, 4));
    }

    #[test]
    fn test_duplicate_suffix_never_collides() {
        let table = Table::new(strings(&["a", "a", "a.1"]), Vec::new());
        assert_eq!(table.columns(), ["a", "a.1", "a.1.1"]);

        let table = Table::new(strings(&["a.1", "a", "a", "a"]), Vec::new());
        assert_eq!(table.columns(), ["a.1", "a", "a.2", "a.3"]);
    }

    #[test]
    fn test_short_rows_padded() {
        let table = Table::new(strings(&["a", "b"]), vec![strings(&["1"])]);
        assert_eq!(table.rows()[0], strings(&["1", ""]));
    }

    #[test]
    fn test_preview_alignment() {
        let preview = categories().preview(2);
        let lines: Vec<&str> = preview.lines().collect();
        assert_eq!(lines, ["   id  name", "0   1  Tops", "1   2  Bags"]);
    }

    #[test]
    fn test_preview_empty() {
        let table = Table::new(strings(&["id"]), Vec::new());
        assert_eq!(table.preview(5), "Empty table\nColumns: ['id']");
    }

    #[test]
    fn test_columns_repr() {
        assert_eq!(categories().columns_repr(), "['id', 'name']");
    }
}
