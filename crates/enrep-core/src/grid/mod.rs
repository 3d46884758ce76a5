//! Report grid ingestion module.

mod reader;

pub use reader::{read_grid, CsvGridReader};

use crate::error::GridError;

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Container format of an exported report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridFormat {
    /// Comma-delimited text.
    Csv,
    /// Binary spreadsheet (xls/xlsx). Recognized but parsed by an external
    /// collaborator, not by this crate.
    Spreadsheet,
}

impl GridFormat {
    /// Determine the container format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "csv" => Some(GridFormat::Csv),
            "xls" | "xlsx" => Some(GridFormat::Spreadsheet),
            _ => None,
        }
    }
}

/// An immutable grid of trimmed text cells read from a report export.
///
/// This is the boundary between container parsing and classification: any
/// collaborator that can produce rows of cells can feed the cleaner. Absent
/// cells are empty strings, never a null marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawGrid {
    rows: Vec<Vec<String>>,
}

impl RawGrid {
    /// Build a grid from raw rows, trimming every cell.
    pub fn from_rows<I, R, C>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = C>,
        C: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|cell| cell.as_ref().trim().to_string())
                    .collect()
            })
            .collect();
        Self { rows }
    }

    /// The grid rows, in report order.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of rows in the grid.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the grid has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_trims_cells() {
        let grid = RawGrid::from_rows(vec![vec!["  Draft  ", ""], vec![" 123456 ", "x "]]);
        assert_eq!(grid.rows()[0], vec!["Draft", ""]);
        assert_eq!(grid.rows()[1], vec!["123456", "x"]);
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(GridFormat::from_extension("csv"), Some(GridFormat::Csv));
        assert_eq!(GridFormat::from_extension("CSV"), Some(GridFormat::Csv));
        assert_eq!(GridFormat::from_extension("xlsx"), Some(GridFormat::Spreadsheet));
        assert_eq!(GridFormat::from_extension("pdf"), None);
    }
}
