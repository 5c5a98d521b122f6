//! Cell sources.
//!
//! The pipeline addresses cells by 1-based (column, row) position and
//! treats any read failure or empty cell as the sentinel `"-"`.

use std::io::Cursor;
use std::path::Path;

use calamine::{Data, DataType, Range, Reader, Xlsx, open_workbook};

use kejar_model::{HYPHEN, KejarError, Result};

/// Read access to one sheet of a source spreadsheet.
pub trait CellSource {
    /// Text at a 1-based column and row. Missing, unreadable, or empty
    /// cells read as `"-"`.
    fn cell_text(&self, column: u32, row: u32) -> String;
}

/// Calamine-backed source holding one decoded worksheet range.
#[derive(Debug)]
pub struct XlsxSource {
    range: Range<Data>,
}

impl XlsxSource {
    /// Open a workbook file and decode the named sheet.
    ///
    /// # Errors
    ///
    /// Returns [`KejarError::Source`] when the file is not a readable
    /// workbook or the sheet does not exist.
    pub fn open(path: &Path, sheet_name: &str) -> Result<Self> {
        let mut workbook: Xlsx<_> = open_workbook(path)
            .map_err(|error| KejarError::Source(format!("open {}: {error}", path.display())))?;
        Self::from_workbook(&mut workbook, sheet_name)
    }

    /// Decode the named sheet from in-memory workbook bytes.
    ///
    /// # Errors
    ///
    /// Returns [`KejarError::Source`] when the bytes are not a readable
    /// workbook or the sheet does not exist.
    pub fn from_bytes(bytes: &[u8], sheet_name: &str) -> Result<Self> {
        let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(Cursor::new(bytes))
            .map_err(|error| KejarError::Source(format!("open workbook bytes: {error}")))?;
        Self::from_workbook(&mut workbook, sheet_name)
    }

    fn from_workbook<R>(workbook: &mut Xlsx<R>, sheet_name: &str) -> Result<Self>
    where
        R: std::io::Read + std::io::Seek,
    {
        let range = workbook
            .worksheet_range(sheet_name)
            .map_err(|error| KejarError::Source(format!("sheet {sheet_name}: {error}")))?;
        Ok(Self { range })
    }
}

impl CellSource for XlsxSource {
    fn cell_text(&self, column: u32, row: u32) -> String {
        if column == 0 || row == 0 {
            return HYPHEN.to_string();
        }
        match self.range.get_value((row - 1, column - 1)) {
            None => HYPHEN.to_string(),
            Some(value) if value.is_empty() => HYPHEN.to_string(),
            Some(value) => {
                let text = value.to_string();
                if text.is_empty() {
                    HYPHEN.to_string()
                } else {
                    text
                }
            }
        }
    }
}

/// In-memory source used by tests: a grid of rows, row 1 first.
#[derive(Debug, Clone, Default)]
pub struct GridSource {
    rows: Vec<Vec<String>>,
}

impl GridSource {
    /// Build a grid from string rows.
    #[must_use]
    pub fn from_rows(rows: &[&[&str]]) -> Self {
        Self {
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| (*cell).to_string()).collect())
                .collect(),
        }
    }
}

impl CellSource for GridSource {
    fn cell_text(&self, column: u32, row: u32) -> String {
        let cell = self
            .rows
            .get(row as usize - 1)
            .and_then(|cells| cells.get(column as usize - 1));
        match cell {
            Some(text) if !text.is_empty() => text.clone(),
            _ => HYPHEN.to_string(),
        }
    }
}
