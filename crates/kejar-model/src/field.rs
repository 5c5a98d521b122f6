//! Logical field identity.
//!
//! Column keys in both column maps are header texts ("Nama Anak",
//! "Status Imunisasi PCV 2"). [`FieldKind`] gives each key a typed identity
//! so the extractor and writer can dispatch without comparing raw strings,
//! and [`FieldCatalog`] is the lookup table built once from configuration.

use std::collections::BTreeMap;

use crate::config::ReportConfig;

/// Sub-field keyword marking a dose date column.
pub const TANGGAL: &str = "Tanggal";
/// Sub-field keyword marking a dose location column.
pub const POS: &str = "Pos";
/// Sub-field keyword marking a dose status column.
pub const STATUS: &str = "Status";

/// Typed identity of one column key. Dose variants carry the dose name the
/// key belongs to (e.g. "PCV 2" for "Status Imunisasi PCV 2").
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Child name; also the identity column.
    Name,
    /// Derived age; never extracted from the source.
    Age,
    /// Birth date.
    BirthDate,
    /// Sex.
    Sex,
    /// Parent name.
    Parent,
    /// Clinic / jurisdiction.
    Clinic,
    /// Administration date of a dose.
    DoseDate(String),
    /// Administration location of a dose.
    DoseLocation(String),
    /// Ideal / non-ideal status of a dose.
    DoseStatus(String),
    /// Key that matches no configured field or dose.
    Unknown,
}

impl FieldKind {
    /// True for the location variant, which is subject to the jurisdiction
    /// validity rule.
    #[must_use]
    pub fn is_location(&self) -> bool {
        matches!(self, Self::DoseLocation(_))
    }
}

/// Lookup table from column key to [`FieldKind`], built once from
/// configuration and passed explicitly to each pipeline component.
#[derive(Debug, Clone)]
pub struct FieldCatalog {
    base: BTreeMap<String, FieldKind>,
    doses: Vec<String>,
}

impl FieldCatalog {
    /// Build the catalog from a validated configuration. Dose names keep
    /// their declared order, infant list first, since key resolution takes
    /// the first dose name found as a substring of the key.
    #[must_use]
    pub fn from_config(config: &ReportConfig) -> Self {
        let columns = &config.base_columns;
        let mut base = BTreeMap::new();
        base.insert(columns.child_name.clone(), FieldKind::Name);
        base.insert(columns.age.clone(), FieldKind::Age);
        base.insert(columns.birth_date.clone(), FieldKind::BirthDate);
        base.insert(columns.sex.clone(), FieldKind::Sex);
        base.insert(columns.parent_name.clone(), FieldKind::Parent);
        base.insert(columns.clinic.clone(), FieldKind::Clinic);

        let mut doses = config.infant_doses.clone();
        doses.extend(config.toddler_doses.iter().cloned());

        Self { base, doses }
    }

    /// Resolve a column key to its field kind. Base columns match exactly;
    /// dose columns match by dose-name substring and sub-field keyword.
    #[must_use]
    pub fn resolve(&self, key: &str) -> FieldKind {
        if let Some(kind) = self.base.get(key) {
            return kind.clone();
        }

        let Some(dose) = self.doses.iter().find(|dose| key.contains(dose.as_str())) else {
            return FieldKind::Unknown;
        };

        if key.contains(TANGGAL) {
            FieldKind::DoseDate(dose.clone())
        } else if key.contains(POS) {
            FieldKind::DoseLocation(dose.clone())
        } else if key.contains(STATUS) {
            FieldKind::DoseStatus(dose.clone())
        } else {
            FieldKind::Unknown
        }
    }
}
