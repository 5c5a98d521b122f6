//! Per-child immunization records.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::age::calculate_age;

/// Sentinel marking a missing cell value and the end of a column scan.
pub const HYPHEN: &str = "-";

/// Whether a dose was administered on schedule. Derived from cell text:
/// exactly `"ideal"` is ideal; anything else, including a blank cell, is
/// non-ideal (the dose is overdue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DoseStatus {
    Ideal,
    NonIdeal,
}

impl DoseStatus {
    /// Derive the status from source cell text.
    #[must_use]
    pub fn from_cell(text: &str) -> Self {
        if text == "ideal" {
            Self::Ideal
        } else {
            Self::NonIdeal
        }
    }

    /// Numeric rendering used in report cells: ideal 0, non-ideal 1.
    #[must_use]
    pub fn as_number(self) -> u32 {
        match self {
            Self::Ideal => 0,
            Self::NonIdeal => 1,
        }
    }

    #[must_use]
    pub fn is_non_ideal(self) -> bool {
        self == Self::NonIdeal
    }
}

/// Detail of one scheduled dose for one child.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoseDetail {
    /// Administration date text, when the source provides one.
    pub date: Option<String>,
    /// Administration location text.
    pub location: Option<String>,
    /// Ideal / non-ideal status.
    pub status: Option<DoseStatus>,
}

/// One child's extracted data: demographics copied verbatim from source
/// cells, the derived age string, and per-dose details keyed by dose name.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildRecord {
    pub name: String,
    /// Derived display age, recomputed whenever the birth date is set.
    pub age: String,
    pub birth_date: String,
    pub sex: String,
    pub parent_name: String,
    pub clinic: String,
    pub doses: BTreeMap<String, DoseDetail>,
}

impl Default for ChildRecord {
    fn default() -> Self {
        Self {
            name: HYPHEN.to_string(),
            age: HYPHEN.to_string(),
            birth_date: HYPHEN.to_string(),
            sex: HYPHEN.to_string(),
            parent_name: HYPHEN.to_string(),
            clinic: HYPHEN.to_string(),
            doses: BTreeMap::new(),
        }
    }
}

impl ChildRecord {
    /// Assign the birth date and immediately recompute the derived age so
    /// later renders see a consistent value.
    pub fn set_birth_date(&mut self, value: String, now: NaiveDate) {
        self.birth_date = value;
        self.age = calculate_age(&self.birth_date, now);
    }

    /// Detail entry for a dose, created empty on first access.
    pub fn dose_mut(&mut self, dose: &str) -> &mut DoseDetail {
        self.doses.entry(dose.to_string()).or_default()
    }

    /// Number of doses with a non-ideal status.
    #[must_use]
    pub fn count_non_ideal(&self) -> usize {
        self.doses
            .values()
            .filter(|detail| detail.status.is_some_and(DoseStatus::is_non_ideal))
            .count()
    }

    /// A child belongs in the catch-up list iff at least one dose is
    /// overdue. Children fully up to date are dropped.
    #[must_use]
    pub fn is_catch_up_target(&self) -> bool {
        self.count_non_ideal() > 0
    }
}
