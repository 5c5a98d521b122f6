use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use tracing::info;

use kejar_cli::pipeline::generate_report_from_file;
use kejar_map::build_column_map;
use kejar_model::{Cohort, ReportConfig};
use kejar_report::RowLayout;

use crate::cli::{CohortArg, ColumnsArgs, GenerateArgs, LayoutArg};

pub fn run_generate(args: &GenerateArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let cohort = cohort_from_arg(args.cohort);
    let layout = match args.layout {
        LayoutArg::Spaced => RowLayout::spaced(),
        LayoutArg::Compact => RowLayout::compact(),
    };
    let now = args.as_of.unwrap_or_else(today);

    let report = generate_report_from_file(
        &args.source,
        &args.sheet_name,
        &config,
        cohort,
        layout,
        now,
    )?;

    let output_dir = args.output_dir.as_deref().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;
    let output_path = output_dir.join(&report.file_name);
    fs::write(&output_path, &report.bytes)
        .with_context(|| format!("write {}", output_path.display()))?;
    info!(path = %output_path.display(), "report written");
    println!("{}", output_path.display());
    Ok(())
}

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let cohort = cohort_from_arg(args.cohort);
    let column_map = build_column_map(&config, cohort);

    let mut table = Table::new();
    table.set_header(vec!["Column", "Field", "Width"]);
    apply_table_style(&mut table);
    for (field, spec) in column_map.iter() {
        let width = spec
            .width
            .map_or_else(|| "-".to_string(), |w| format!("{w}"));
        table.add_row(vec![spec.label.clone(), field.to_string(), width]);
    }
    println!("{table}");
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ReportConfig> {
    let config = match path {
        Some(path) => ReportConfig::load(path)
            .with_context(|| format!("load configuration {}", path.display()))?,
        None => ReportConfig::default(),
    };
    config.validate().context("validate configuration")?;
    Ok(config)
}

fn cohort_from_arg(arg: CohortArg) -> Cohort {
    match arg {
        CohortArg::Bayi => Cohort::Infant,
        CohortArg::Baduta => Cohort::Toddler,
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}
