//! Source column-map discovery.

use kejar_model::HYPHEN;

use crate::columns::{ColumnMap, ColumnSpec};

/// Discover the column map of an uploaded file from its header row.
///
/// `read_header` returns the header text at a 1-based column index (row 1
/// of the upload). Columns are walked left to right until a cell reads the
/// sentinel `"-"`; each non-sentinel header text is mapped to its column.
/// This determines where each logical field actually lives in the upload,
/// independent of the generated layout.
pub fn build_source_column_map(read_header: impl Fn(u32) -> String) -> ColumnMap {
    let mut map = ColumnMap::new();
    let mut index = 1u32;
    loop {
        let header = read_header(index);
        if header == HYPHEN {
            break;
        }
        map.insert(header, ColumnSpec::at(index));
        index += 1;
    }
    map
}
