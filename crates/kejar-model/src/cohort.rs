//! Age cohorts driving dose list and report schema selection.

use crate::config::ReportConfig;

/// Age-based grouping of children. Selects which dose list, column map, and
/// title string apply to a run. Always passed as an explicit parameter
/// through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cohort {
    /// "bayi" — children in their first year.
    Infant,
    /// "baduta" — children under two.
    Toddler,
}

impl Cohort {
    /// Map a request selector to a cohort. `"bayi"` selects the infant
    /// cohort; any other value selects the toddler cohort.
    #[must_use]
    pub fn from_selector(selector: &str) -> Self {
        if selector == "bayi" {
            Self::Infant
        } else {
            Self::Toddler
        }
    }

    /// The wire-format selector string.
    #[must_use]
    pub fn selector(self) -> &'static str {
        match self {
            Self::Infant => "bayi",
            Self::Toddler => "baduta",
        }
    }

    /// Selector with the first character capitalized, as used in titles and
    /// file names.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Infant => "Bayi",
            Self::Toddler => "Baduta",
        }
    }

    /// The ordered dose list configured for this cohort.
    #[must_use]
    pub fn doses(self, config: &ReportConfig) -> &[String] {
        match self {
            Self::Infant => &config.infant_doses,
            Self::Toddler => &config.toddler_doses,
        }
    }
}
