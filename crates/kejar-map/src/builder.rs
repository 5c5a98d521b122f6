//! Target column-map construction.

use kejar_model::{Cohort, ReportConfig};

use crate::columns::{ColumnMap, ColumnSpec};

/// Build the target column map for a cohort's report layout.
///
/// Base fields come first in their declared order, then one column per
/// dose sub-field for each dose in the cohort's configured list. Doses
/// named in `complete_doses` take the complete sub-field set instead of
/// the generic one; the key for each dose column is
/// `"<sub-field> <dose>"`. Pure function of the configuration: the same
/// input yields identical label assignment on every call.
#[must_use]
pub fn build_column_map(config: &ReportConfig, cohort: Cohort) -> ColumnMap {
    let mut map = ColumnMap::new();
    let mut index = 1u32;

    for name in config.base_columns.ordered() {
        let mut spec = ColumnSpec::at(index);
        spec.width = config.column_widths.get(name).copied();
        map.insert(name.to_string(), spec);
        index += 1;
    }

    for dose in cohort.doses(config) {
        let subfields = if config.complete_doses.contains(dose) {
            &config.complete_dose_subfields
        } else {
            &config.dose_subfields
        };
        for subfield in subfields {
            let key = format!("{subfield} {dose}");
            let mut spec = ColumnSpec::at(index);
            spec.width = config.column_widths.get(&key).copied();
            map.insert(key, spec);
            index += 1;
        }
    }

    map
}
