//! Column mapping between logical field keys and spreadsheet positions.
//!
//! Two independent maps exist per run: the *target* map describes the
//! generated report layout and is derived purely from configuration; the
//! *source* map records where each field actually lives in the uploaded
//! file, discovered from its header row. Both share the [`ColumnMap`]
//! representation and the bijective base-26 label scheme.

pub mod builder;
pub mod columns;
pub mod labels;
pub mod source;

pub use builder::build_column_map;
pub use columns::{ColumnMap, ColumnSpec};
pub use labels::column_label;
pub use source::build_source_column_map;
