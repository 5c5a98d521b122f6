//! Report generation pipeline with explicit stages.
//!
//! 1. **Map**: build the target column map from configuration and discover
//!    the source column map from the upload's header row
//! 2. **Extract**: walk source rows into child records, applying the
//!    jurisdiction validity rules
//! 3. **Filter**: keep catch-up targets (at least one overdue dose)
//! 4. **Sort**: order by birth date ascending
//! 5. **Render**: lay out the new workbook and serialize it to bytes
//!
//! The cohort selector is threaded explicitly through every stage.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, info_span};

use kejar_ingest::{CellSource, XlsxSource, collect_catch_up_targets, sort_by_birth_date};
use kejar_map::{build_column_map, build_source_column_map};
use kejar_model::{Cohort, FieldCatalog, ReportConfig};
use kejar_report::{GeneratedReport, RowLayout, render_report};

/// Run the full pipeline against an open cell source.
///
/// Returns the serialized workbook bytes and the generated download name.
///
/// # Errors
///
/// Fails only when the report cannot be rendered; unreadable cells and
/// malformed dates are recovered per-row and never abort the run.
pub fn generate_report(
    source: &impl CellSource,
    config: &ReportConfig,
    cohort: Cohort,
    layout: RowLayout,
    now: NaiveDate,
) -> Result<GeneratedReport> {
    let span = info_span!("generate", cohort = cohort.selector());
    let _guard = span.enter();

    let catalog = FieldCatalog::from_config(config);
    let target_map = build_column_map(config, cohort);
    let source_map = build_source_column_map(|index| source.cell_text(index, 1));
    info!(
        source_columns = source_map.len(),
        target_columns = target_map.len(),
        "column maps built"
    );

    let mut records = collect_catch_up_targets(source, &source_map, &target_map, &catalog, now);
    sort_by_birth_date(&mut records);
    info!(targets = records.len(), "catch-up targets selected");

    render_report(&records, &target_map, &catalog, cohort, layout, now).context("render report")
}

/// Open a workbook file and run the pipeline against the named sheet.
///
/// # Errors
///
/// Fails when the file cannot be opened, the sheet is missing, or the
/// report cannot be rendered.
pub fn generate_report_from_file(
    path: &Path,
    sheet_name: &str,
    config: &ReportConfig,
    cohort: Cohort,
    layout: RowLayout,
    now: NaiveDate,
) -> Result<GeneratedReport> {
    let source = XlsxSource::open(path, sheet_name)
        .with_context(|| format!("open {}", path.display()))?;
    generate_report(&source, config, cohort, layout, now)
}
