//! Data model for the immunization catch-up report generator.
//!
//! Holds the configuration schema, logical field identities, per-child
//! immunization records, and the derived age computation shared by the
//! mapping, ingest, and report crates.

pub mod age;
pub mod cohort;
pub mod config;
pub mod error;
pub mod field;
pub mod privacy;
pub mod record;

pub use age::calculate_age;
pub use cohort::Cohort;
pub use config::{BaseColumns, ReportConfig};
pub use error::{KejarError, Result};
pub use field::{FieldCatalog, FieldKind};
pub use privacy::{redact_value, set_log_data};
pub use record::{ChildRecord, DoseDetail, DoseStatus, HYPHEN};
