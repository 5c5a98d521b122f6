//! Column map data types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::labels::column_label;

/// Position descriptor for one logical field: the 1-based column index, its
/// spreadsheet label, and an optional display width override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// 1-based column index.
    pub index: u32,
    /// Spreadsheet column label ("A", "AB", ...), derived from the index.
    pub label: String,
    /// Display width for the rendered report; `None` uses the default.
    pub width: Option<f64>,
}

impl ColumnSpec {
    /// Descriptor at a 1-based index with no width override.
    #[must_use]
    pub fn at(index: u32) -> Self {
        Self {
            index,
            label: column_label(index),
            width: None,
        }
    }

    /// 0-based column index as used by the spreadsheet engine.
    #[must_use]
    pub fn zero_based(&self) -> u16 {
        u16::try_from(self.index.saturating_sub(1)).unwrap_or(u16::MAX)
    }
}

/// Mapping from logical field key to column position.
///
/// Keys are unique and iteration preserves insertion order; the header row
/// and every body row are rendered from the same ordering, so the map must
/// be deterministic.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    entries: Vec<(String, ColumnSpec)>,
    index: BTreeMap<String, usize>,
}

impl ColumnMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key at the next position. A duplicate key keeps the first
    /// assignment; within one map a field lives in exactly one column.
    pub fn insert(&mut self, key: String, spec: ColumnSpec) {
        if self.index.contains_key(&key) {
            return;
        }
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, spec));
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ColumnSpec> {
        self.index.get(key).map(|position| &self.entries[*position].1)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnSpec)> {
        self.entries.iter().map(|(key, spec)| (key.as_str(), spec))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry in layout order, if any.
    #[must_use]
    pub fn first(&self) -> Option<(&str, &ColumnSpec)> {
        self.entries
            .first()
            .map(|(key, spec)| (key.as_str(), spec))
    }

    /// Last entry in layout order, if any.
    #[must_use]
    pub fn last(&self) -> Option<(&str, &ColumnSpec)> {
        self.entries.last().map(|(key, spec)| (key.as_str(), spec))
    }
}

#[cfg(test)]
mod tests {
    use super::{ColumnMap, ColumnSpec};

    #[test]
    fn insertion_order_is_preserved() {
        let mut map = ColumnMap::new();
        map.insert("Zeta".to_string(), ColumnSpec::at(1));
        map.insert("Alpha".to_string(), ColumnSpec::at(2));

        let keys: Vec<&str> = map.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["Zeta", "Alpha"]);
        assert_eq!(map.first().unwrap().0, "Zeta");
        assert_eq!(map.last().unwrap().0, "Alpha");
    }

    #[test]
    fn duplicate_keys_keep_first_position() {
        let mut map = ColumnMap::new();
        map.insert("Nama Anak".to_string(), ColumnSpec::at(1));
        map.insert("Nama Anak".to_string(), ColumnSpec::at(9));

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("Nama Anak").unwrap().label, "A");
    }

    #[test]
    fn zero_based_index() {
        assert_eq!(ColumnSpec::at(1).zero_based(), 0);
        assert_eq!(ColumnSpec::at(27).zero_based(), 26);
    }
}
