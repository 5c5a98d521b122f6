//! Integration tests for row extraction against an in-memory grid.

use chrono::NaiveDate;
use kejar_ingest::{
    CellSource, GridSource, RowOutcome, collect_catch_up_targets, extract_row, sort_by_birth_date,
};
use kejar_map::{ColumnMap, build_column_map, build_source_column_map};
use kejar_model::{Cohort, DoseStatus, FieldCatalog, ReportConfig};

const NOW: (i32, u32, u32) = (2024, 9, 25);

fn now() -> NaiveDate {
    NaiveDate::from_ymd_opt(NOW.0, NOW.1, NOW.2).unwrap()
}

fn source_map_for(source: &GridSource) -> ColumnMap {
    build_source_column_map(|index| source.cell_text(index, 1))
}

const HEADER: &[&str] = &[
    "ID",
    "Nama Anak",
    "Tanggal Lahir Anak",
    "Jenis Kelamin Anak",
    "Nama Orang Tua",
    "Puskesmas",
    "Tanggal Imunisasi PCV 1",
    "Pos Imunisasi PCV 1",
    "Status Imunisasi PCV 1",
    "Status Imunisasi MR 1",
];

fn fixtures() -> (GridSource, ColumnMap, ColumnMap, FieldCatalog) {
    let source = GridSource::from_rows(&[
        HEADER,
        &[
            "1",
            "Sari",
            "2024-03-10",
            "Perempuan",
            "Ibu Rina",
            "WANASARI",
            "2024-05-01",
            "Puskesmas Wanasari",
            "belum ideal",
            "ideal",
        ],
        &[
            "2",
            "Budi",
            "2024-01-05",
            "Laki-laki",
            "Ibu Tati",
            "WANASARI",
            "2024-03-01",
            "Puskesmas Cibuntu",
            "belum ideal",
            "ideal",
        ],
        &[
            "3",
            "Ayu",
            "2024-02-20",
            "Perempuan",
            "Ibu Sinta",
            "WANASARI",
            "2024-04-15",
            "Dalam Gedung",
            "ideal",
            "ideal",
        ],
    ]);
    let config = ReportConfig::default();
    let source_map = source_map_for(&source);
    let target_map = build_column_map(&config, Cohort::Infant);
    let catalog = FieldCatalog::from_config(&config);
    (source, source_map, target_map, catalog)
}

#[test]
fn extracts_a_valid_row() {
    let (source, source_map, target_map, catalog) = fixtures();

    let outcome = extract_row(&source, &source_map, &target_map, &catalog, 2, now());
    let RowOutcome::Record(record) = outcome else {
        panic!("expected a record");
    };

    assert_eq!(record.name, "Sari");
    assert_eq!(record.birth_date, "2024-03-10");
    assert_eq!(record.age, "6 Bulan 15 Hari");
    assert_eq!(record.sex, "Perempuan");
    assert_eq!(record.parent_name, "Ibu Rina");
    assert_eq!(record.clinic, "WANASARI");

    let pcv = record.doses.get("PCV 1").expect("PCV 1 detail");
    assert_eq!(pcv.date.as_deref(), Some("2024-05-01"));
    assert_eq!(pcv.location.as_deref(), Some("Puskesmas Wanasari"));
    assert_eq!(pcv.status, Some(DoseStatus::NonIdeal));

    let mr = record.doses.get("MR 1").expect("MR 1 detail");
    assert_eq!(mr.status, Some(DoseStatus::Ideal));
    // The source has no MR 1 date column; the sub-field reads as the
    // sentinel, like any unreadable cell.
    assert_eq!(mr.date.as_deref(), Some("-"));
}

#[test]
fn missing_status_columns_count_as_non_ideal() {
    // Upload carries a single status column, and it reads "ideal". Every
    // other configured status column is absent, reads as the sentinel, and
    // marks its dose overdue.
    let header: &[&str] = &["ID", "Nama Anak", "Status Imunisasi PCV 1"];
    let source = GridSource::from_rows(&[header, &["1", "Sari", "ideal"]]);
    let config = ReportConfig::default();
    let source_map = source_map_for(&source);
    let target_map = build_column_map(&config, Cohort::Infant);
    let catalog = FieldCatalog::from_config(&config);

    let outcome = extract_row(&source, &source_map, &target_map, &catalog, 2, now());
    let RowOutcome::Record(record) = outcome else {
        panic!("expected a record");
    };

    assert_eq!(record.doses.get("PCV 1").unwrap().status, Some(DoseStatus::Ideal));
    assert_eq!(
        record.doses.get("MR 1").unwrap().status,
        Some(DoseStatus::NonIdeal)
    );
    // 19 configured infant doses, one of them ideal.
    assert_eq!(record.count_non_ideal(), 18);
    assert!(record.is_catch_up_target());
}

#[test]
fn blocked_jurisdiction_invalidates_the_row() {
    let (source, source_map, target_map, catalog) = fixtures();

    let outcome = extract_row(&source, &source_map, &target_map, &catalog, 3, now());
    assert!(matches!(outcome, RowOutcome::Invalid));
}

#[test]
fn sentinel_row_signals_end_of_data() {
    let (source, source_map, target_map, catalog) = fixtures();

    let outcome = extract_row(&source, &source_map, &target_map, &catalog, 5, now());
    assert!(matches!(outcome, RowOutcome::EndOfData));
}

#[test]
fn collect_keeps_only_catch_up_targets() {
    let (source, source_map, target_map, catalog) = fixtures();

    let records = collect_catch_up_targets(&source, &source_map, &target_map, &catalog, now());

    // Row 3 is in a blocked jurisdiction. Row 2 has an explicit overdue
    // dose; row 4 is ideal on every present column but the upload lacks
    // most configured status columns, which also count as overdue.
    let names: Vec<&str> = records.iter().map(|record| record.name.as_str()).collect();
    assert_eq!(names, vec!["Sari", "Ayu"]);
}

#[test]
fn collected_records_sort_by_birth_date() {
    let header: &[&str] = &["ID", "Nama Anak", "Tanggal Lahir Anak", "Status Imunisasi MR 1"];
    let source = GridSource::from_rows(&[
        header,
        &["1", "Sari", "2024-03-10", "belum"],
        &["2", "Budi", "2023-12-01", "belum"],
        &["3", "Ayu", "2024-01-20", "belum"],
    ]);
    let config = ReportConfig::default();
    let source_map = source_map_for(&source);
    let target_map = build_column_map(&config, Cohort::Infant);
    let catalog = FieldCatalog::from_config(&config);

    let mut records = collect_catch_up_targets(&source, &source_map, &target_map, &catalog, now());
    sort_by_birth_date(&mut records);

    let names: Vec<&str> = records.iter().map(|record| record.name.as_str()).collect();
    assert_eq!(names, vec!["Budi", "Ayu", "Sari"]);
}

#[test]
fn blank_cells_read_as_sentinel_fields() {
    let header: &[&str] = &["ID", "Nama Anak", "Jenis Kelamin Anak", "Status Imunisasi MR 1"];
    let source = GridSource::from_rows(&[header, &["1", "Sari", "", "belum"]]);
    let config = ReportConfig::default();
    let source_map = source_map_for(&source);
    let target_map = build_column_map(&config, Cohort::Infant);
    let catalog = FieldCatalog::from_config(&config);

    let outcome = extract_row(&source, &source_map, &target_map, &catalog, 2, now());
    let RowOutcome::Record(record) = outcome else {
        panic!("expected a record");
    };
    assert_eq!(record.sex, "-");
    // Birth date column absent from the upload: sentinel date, sentinel age.
    assert_eq!(record.birth_date, "-");
    assert_eq!(record.age, "-");
}
