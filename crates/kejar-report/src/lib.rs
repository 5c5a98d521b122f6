//! Rendering of the generated catch-up report.
//!
//! Lays out a new spreadsheet from the target column map: a merged, styled
//! title row, a styled header row, one body row per eligible child, and
//! configured column widths, serialized to an in-memory byte stream.

pub mod layout;
pub mod text;
pub mod writer;

pub use layout::RowLayout;
pub use text::{current_date_str, report_file_name, report_title};
pub use writer::{GeneratedReport, render_report};
