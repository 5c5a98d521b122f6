//! Integration tests for configuration loading and field resolution.

use chrono::NaiveDate;
use kejar_model::{ChildRecord, Cohort, DoseStatus, FieldCatalog, FieldKind, KejarError, ReportConfig};

#[test]
fn default_config_validates() {
    let config = ReportConfig::default();
    config.validate().expect("default config is valid");
    assert_eq!(config.infant_doses.len(), 19);
    assert_eq!(config.toddler_doses.len(), 4);
}

#[test]
fn yaml_round_trip() {
    let config = ReportConfig::default();
    let yaml = serde_yaml::to_string(&config).expect("serialize config");
    let parsed = ReportConfig::from_yaml(&yaml).expect("parse config");
    assert_eq!(parsed.base_columns.child_name, "Nama Anak");
    assert_eq!(parsed.complete_doses, vec!["IDL 1", "IBL 1"]);
}

#[test]
fn empty_dose_list_is_a_config_error() {
    let mut config = ReportConfig::default();
    config.toddler_doses.clear();
    let error = config.validate().expect_err("empty list must fail");
    assert!(matches!(error, KejarError::Config(_)));
    assert!(error.to_string().contains("toddler_doses"));
}

#[test]
fn malformed_yaml_is_a_config_error() {
    let error = ReportConfig::from_yaml("base_columns: [not, a, mapping]")
        .expect_err("malformed yaml must fail");
    assert!(matches!(error, KejarError::Config(_)));
}

#[test]
fn catalog_resolves_base_columns() {
    let config = ReportConfig::default();
    let catalog = FieldCatalog::from_config(&config);

    assert_eq!(catalog.resolve("Nama Anak"), FieldKind::Name);
    assert_eq!(catalog.resolve("Usia Anak"), FieldKind::Age);
    assert_eq!(catalog.resolve("Tanggal Lahir Anak"), FieldKind::BirthDate);
    assert_eq!(catalog.resolve("Jenis Kelamin Anak"), FieldKind::Sex);
    assert_eq!(catalog.resolve("Nama Orang Tua"), FieldKind::Parent);
    assert_eq!(catalog.resolve("Puskesmas"), FieldKind::Clinic);
}

#[test]
fn catalog_resolves_dose_columns_by_keyword() {
    let config = ReportConfig::default();
    let catalog = FieldCatalog::from_config(&config);

    assert_eq!(
        catalog.resolve("Tanggal Imunisasi PCV 2"),
        FieldKind::DoseDate("PCV 2".to_string())
    );
    assert_eq!(
        catalog.resolve("Pos Imunisasi DPT-HB-Hib 4"),
        FieldKind::DoseLocation("DPT-HB-Hib 4".to_string())
    );
    assert_eq!(
        catalog.resolve("Status Imunisasi MR 1"),
        FieldKind::DoseStatus("MR 1".to_string())
    );
    // Complete-milestone doses use the short sub-field names.
    assert_eq!(
        catalog.resolve("Status IDL 1"),
        FieldKind::DoseStatus("IDL 1".to_string())
    );
    assert_eq!(
        catalog.resolve("Tanggal IBL 1"),
        FieldKind::DoseDate("IBL 1".to_string())
    );
}

#[test]
fn unknown_keys_resolve_to_unknown() {
    let config = ReportConfig::default();
    let catalog = FieldCatalog::from_config(&config);

    assert_eq!(catalog.resolve("ID"), FieldKind::Unknown);
    assert_eq!(catalog.resolve("Status Imunisasi HPV 1"), FieldKind::Unknown);
}

#[test]
fn record_serializes_camel_case() {
    let now = NaiveDate::from_ymd_opt(2024, 9, 25).unwrap();
    let mut record = ChildRecord::default();
    record.name = "Sari".to_string();
    record.set_birth_date("2024-06-25".to_string(), now);
    record.dose_mut("PCV 1").status = Some(DoseStatus::NonIdeal);

    let value = serde_json::to_value(&record).expect("serialize record");
    assert_eq!(value["birthDate"], "2024-06-25");
    assert_eq!(value["age"], "3 Bulan 0 Hari");
    assert_eq!(value["parentName"], "-");
    assert!(value["doses"]["PCV 1"].is_object());
}

#[test]
fn cohort_selector_mapping() {
    assert_eq!(Cohort::from_selector("bayi"), Cohort::Infant);
    assert_eq!(Cohort::from_selector("baduta"), Cohort::Toddler);
    // Any non-"bayi" selector falls back to the toddler cohort.
    assert_eq!(Cohort::from_selector("anything"), Cohort::Toddler);

    let config = ReportConfig::default();
    assert_eq!(Cohort::Infant.doses(&config).len(), 19);
    assert_eq!(Cohort::Toddler.display_name(), "Baduta");
}
