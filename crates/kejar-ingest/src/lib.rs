//! Spreadsheet ingestion for the catch-up pipeline.
//!
//! All cell access goes through the [`CellSource`] trait; the core never
//! decodes the file format itself. [`XlsxSource`] backs the trait with
//! calamine, [`GridSource`] backs it with an in-memory grid for tests.

pub mod extract;
pub mod sheet;
pub mod sort;

pub use extract::{RowOutcome, collect_catch_up_targets, extract_row};
pub use sheet::{CellSource, GridSource, XlsxSource};
pub use sort::sort_by_birth_date;
