//! Report configuration: the declarative schema that drives both column maps.
//!
//! The configuration is data, not code. It enumerates the demographic base
//! columns, the per-dose sub-field names (generic and "complete"), and the
//! ordered dose lists for each cohort. It is loaded once at startup and is
//! immutable for the life of the process; a replacement file changes the
//! generated layout without recompilation.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{KejarError, Result};

/// Header texts for the six demographic base columns, in render order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseColumns {
    /// Child name column; also the identity column for end-of-data checks.
    pub child_name: String,
    /// Derived age column. Never read from the source file.
    pub age: String,
    /// Birth date column, `YYYY-MM-DD` text.
    pub birth_date: String,
    /// Sex column.
    pub sex: String,
    /// Parent name column.
    pub parent_name: String,
    /// Clinic / jurisdiction column.
    pub clinic: String,
}

impl BaseColumns {
    /// Base column headers in their fixed declared order.
    #[must_use]
    pub fn ordered(&self) -> [&str; 6] {
        [
            &self.child_name,
            &self.age,
            &self.birth_date,
            &self.sex,
            &self.parent_name,
            &self.clinic,
        ]
    }
}

/// Complete report configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Demographic base columns.
    pub base_columns: BaseColumns,
    /// Generic per-dose sub-field names (date, location, status).
    pub dose_subfields: Vec<String>,
    /// Sub-field names used for the complete-milestone doses.
    pub complete_dose_subfields: Vec<String>,
    /// Dose names that take the complete sub-field set.
    pub complete_doses: Vec<String>,
    /// Ordered dose names for the infant ("bayi") cohort.
    pub infant_doses: Vec<String>,
    /// Ordered dose names for the toddler ("baduta") cohort.
    pub toddler_doses: Vec<String>,
    /// Per-column display width overrides; columns without an entry use the
    /// report's default width.
    #[serde(default)]
    pub column_widths: BTreeMap<String, f64>,
}

impl ReportConfig {
    /// Parse a configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`KejarError::Config`] when the YAML is malformed or the
    /// parsed configuration fails [`ReportConfig::validate`].
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(text).map_err(|error| KejarError::Config(error.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`KejarError::Io`] when the file cannot be read and
    /// [`KejarError::Config`] when its content is invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Check structural requirements. Called at startup; a failure here is
    /// fatal and the process must not serve requests.
    ///
    /// # Errors
    ///
    /// Returns [`KejarError::Config`] naming the first empty list found.
    pub fn validate(&self) -> Result<()> {
        let lists: [(&str, &Vec<String>); 4] = [
            ("dose_subfields", &self.dose_subfields),
            ("complete_dose_subfields", &self.complete_dose_subfields),
            ("infant_doses", &self.infant_doses),
            ("toddler_doses", &self.toddler_doses),
        ];
        for (name, list) in lists {
            if list.is_empty() {
                return Err(KejarError::Config(format!("{name} must not be empty")));
            }
        }
        if self.base_columns.ordered().iter().any(|name| name.is_empty()) {
            return Err(KejarError::Config(
                "base_columns entries must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

impl Default for ReportConfig {
    /// Built-in configuration matching the deployed schema: Indonesian
    /// headers, `Tanggal/Pos/Status Imunisasi` sub-fields, and the national
    /// infant and toddler dose schedules.
    fn default() -> Self {
        Self {
            base_columns: BaseColumns {
                child_name: "Nama Anak".to_string(),
                age: "Usia Anak".to_string(),
                birth_date: "Tanggal Lahir Anak".to_string(),
                sex: "Jenis Kelamin Anak".to_string(),
                parent_name: "Nama Orang Tua".to_string(),
                clinic: "Puskesmas".to_string(),
            },
            dose_subfields: strings(&[
                "Tanggal Imunisasi",
                "Pos Imunisasi",
                "Status Imunisasi",
            ]),
            complete_dose_subfields: strings(&["Tanggal", "Pos", "Status"]),
            complete_doses: strings(&["IDL 1", "IBL 1"]),
            infant_doses: strings(&[
                "HB 0",
                "BCG 1",
                "Polio 1",
                "Polio 2",
                "Polio 3",
                "Polio 4",
                "DPT-HB-Hib 1",
                "DPT-HB-Hib 2",
                "DPT-HB-Hib 3",
                "IPV 1",
                "IPV 2",
                "Rota 1",
                "Rota 2",
                "Rota 3",
                "PCV 1",
                "PCV 2",
                "JE 1",
                "MR 1",
                "IDL 1",
            ]),
            toddler_doses: strings(&["DPT-HB-Hib 4", "MR 2", "PCV 3", "IBL 1"]),
            column_widths: BTreeMap::new(),
        }
    }
}
