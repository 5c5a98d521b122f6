//! Row layout variants.
//!
//! Two incompatible row-numbering schemes shipped for this report and both
//! remain in use; which one applies is decided by the caller per output
//! schema, never unified. Rows are 0-based as the spreadsheet engine
//! expects them.

/// Fixed row positions of the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    /// Row of the merged title cell.
    pub title_row: u32,
    /// Row of the header cells.
    pub header_row: u32,
    /// First body row.
    pub body_start_row: u32,
}

impl RowLayout {
    /// Layout with a blank row between title and header: title at row 1,
    /// header at row 3, body from row 4 (1-based).
    #[must_use]
    pub fn spaced() -> Self {
        Self {
            title_row: 0,
            header_row: 2,
            body_start_row: 3,
        }
    }

    /// Dense layout: title at row 1, header at row 2, body from row 3
    /// (1-based).
    #[must_use]
    pub fn compact() -> Self {
        Self {
            title_row: 0,
            header_row: 1,
            body_start_row: 2,
        }
    }
}

impl Default for RowLayout {
    fn default() -> Self {
        Self::spaced()
    }
}
