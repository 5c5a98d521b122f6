//! Row extraction and validity rules.

use chrono::NaiveDate;
use tracing::{debug, info};

use kejar_map::ColumnMap;
use kejar_model::{ChildRecord, DoseStatus, FieldCatalog, FieldKind, HYPHEN};

use crate::sheet::CellSource;

/// Column index of the identity column used for end-of-data detection.
const IDENTITY_COLUMN: u32 = 1;
/// Jurisdiction substring that invalidates a row.
const BLOCKED_JURISDICTION: &str = "cibuntu";
/// Jurisdiction substrings that are explicitly accepted.
const ALLOWED_JURISDICTIONS: [&str; 3] = ["wanasari", "dalam gedung", "oleh sistem"];

/// Result of probing one source row.
#[derive(Debug)]
pub enum RowOutcome {
    /// The identity column read the sentinel; no further rows exist.
    EndOfData,
    /// A location cell named a disallowed jurisdiction; the row is dropped.
    Invalid,
    /// The row produced a record.
    Record(ChildRecord),
}

/// Whether a lower-cased location cell invalidates its row.
///
/// Only the blocked jurisdiction invalidates. The allow-listed
/// jurisdictions and the blank sentinel are accepted, and any other text
/// also falls through as accepted; that default-allow is deliberate,
/// pending product confirmation, and must not be tightened here.
#[must_use]
pub fn is_location_invalid(value: &str) -> bool {
    let value = value.to_lowercase();
    if value.contains(BLOCKED_JURISDICTION) {
        return true;
    }
    if ALLOWED_JURISDICTIONS
        .iter()
        .any(|allowed| value.contains(allowed))
        || value == HYPHEN
    {
        return false;
    }
    false
}

/// Extract one source row into a [`ChildRecord`].
///
/// The walk follows the *target* map's key order, which also fixes the set
/// of extracted fields; the derived age key is never read from the source.
/// Each key is looked up in the *source* map to find the actual upload
/// column; keys the upload lacks read as the sentinel `"-"`, exactly like
/// an unreadable cell, so a missing status column counts as an overdue
/// dose. A disallowed location stops extraction immediately and discards
/// partial work.
pub fn extract_row(
    source: &impl CellSource,
    source_map: &ColumnMap,
    target_map: &ColumnMap,
    catalog: &FieldCatalog,
    row: u32,
    now: NaiveDate,
) -> RowOutcome {
    if source.cell_text(IDENTITY_COLUMN, row) == HYPHEN {
        return RowOutcome::EndOfData;
    }

    let mut record = ChildRecord::default();
    for (key, _) in target_map.iter() {
        let kind = catalog.resolve(key);
        if kind == FieldKind::Age {
            continue;
        }
        let value = match source_map.get(key) {
            Some(spec) => source.cell_text(spec.index, row),
            None => HYPHEN.to_string(),
        };
        match kind {
            FieldKind::Name => record.name = value,
            FieldKind::BirthDate => record.set_birth_date(value, now),
            FieldKind::Sex => record.sex = value,
            FieldKind::Parent => record.parent_name = value,
            FieldKind::Clinic => record.clinic = value,
            FieldKind::DoseDate(dose) => record.dose_mut(&dose).date = Some(value),
            FieldKind::DoseLocation(dose) => {
                if is_location_invalid(&value) {
                    debug!(row, field = key, "row excluded by jurisdiction rule");
                    return RowOutcome::Invalid;
                }
                record.dose_mut(&dose).location = Some(value);
            }
            FieldKind::DoseStatus(dose) => {
                record.dose_mut(&dose).status = Some(DoseStatus::from_cell(&value));
            }
            FieldKind::Age | FieldKind::Unknown => {}
        }
    }

    RowOutcome::Record(record)
}

/// Walk source rows from row 2 until the end-of-data sentinel, keeping
/// valid rows with at least one overdue dose.
pub fn collect_catch_up_targets(
    source: &impl CellSource,
    source_map: &ColumnMap,
    target_map: &ColumnMap,
    catalog: &FieldCatalog,
    now: NaiveDate,
) -> Vec<ChildRecord> {
    let mut records = Vec::new();
    let mut row = 2u32;
    let mut scanned = 0u32;
    loop {
        match extract_row(source, source_map, target_map, catalog, row, now) {
            RowOutcome::EndOfData => break,
            RowOutcome::Invalid => {}
            RowOutcome::Record(record) => {
                if record.is_catch_up_target() {
                    records.push(record);
                } else {
                    debug!(row, "row excluded: all doses ideal");
                }
            }
        }
        scanned += 1;
        row += 1;
    }
    info!(scanned, kept = records.len(), "source rows extracted");
    records
}

#[cfg(test)]
mod tests {
    use super::is_location_invalid;

    #[test]
    fn blocked_jurisdiction_invalidates_any_case() {
        assert!(is_location_invalid("Cibuntu"));
        assert!(is_location_invalid("Puskesmas CIBUNTU Selatan"));
    }

    #[test]
    fn allow_listed_jurisdictions_pass() {
        assert!(!is_location_invalid("Puskesmas Wanasari"));
        assert!(!is_location_invalid("Dalam Gedung"));
        assert!(!is_location_invalid("Diisi Oleh Sistem"));
        assert!(!is_location_invalid("-"));
    }

    #[test]
    fn unknown_locations_fall_through_as_valid() {
        assert!(!is_location_invalid("Puskesmas Antah Berantah"));
    }
}
