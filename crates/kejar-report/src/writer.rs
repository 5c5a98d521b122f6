//! Workbook rendering.

use chrono::NaiveDate;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};
use tracing::debug;

use kejar_map::{ColumnMap, ColumnSpec};
use kejar_model::{ChildRecord, Cohort, DoseDetail, FieldCatalog, FieldKind};

use crate::layout::RowLayout;
use crate::text::{report_file_name, report_title};

const SHEET_NAME: &str = "Sheet1";
const FONT_NAME: &str = "Times New Roman";
const TITLE_FONT_SIZE: f64 = 22.0;
const BODY_FONT_SIZE: f64 = 12.0;
/// Width applied to columns without a configured override.
const DEFAULT_COLUMN_WIDTH: f64 = 32.0;

/// A rendered report: serialized workbook bytes plus the download name.
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

struct Styles {
    title: Format,
    header: Format,
    body: Format,
}

impl Styles {
    fn new() -> Self {
        let title = Format::new()
            .set_font_name(FONT_NAME)
            .set_font_size(TITLE_FONT_SIZE)
            .set_bold()
            .set_font_color(Color::Black)
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);
        Self {
            title,
            header: bordered_style(true),
            body: bordered_style(false),
        }
    }
}

fn bordered_style(bold: bool) -> Format {
    let mut format = Format::new()
        .set_font_name(FONT_NAME)
        .set_font_size(BODY_FONT_SIZE)
        .set_font_color(Color::Black)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::Black);
    if bold {
        format = format.set_bold();
    }
    format
}

/// Render the catch-up report for a sorted record list.
///
/// The target column map fixes both the header texts and the body cell
/// positions; records are rendered in the order given. Dose sub-fields the
/// record never populated are left blank (styled, no value).
///
/// # Errors
///
/// Returns [`kejar_model::KejarError::Report`] when the workbook cannot be
/// assembled or serialized.
pub fn render_report(
    records: &[ChildRecord],
    target_map: &ColumnMap,
    catalog: &FieldCatalog,
    cohort: Cohort,
    layout: RowLayout,
    now: NaiveDate,
) -> kejar_model::Result<GeneratedReport> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    build_sheet(worksheet, records, target_map, catalog, cohort, layout, now)
        .map_err(report_error)?;

    let bytes = workbook.save_to_buffer().map_err(report_error)?;
    debug!(rows = records.len(), bytes = bytes.len(), "report rendered");

    Ok(GeneratedReport {
        file_name: report_file_name(cohort, now),
        bytes,
    })
}

fn report_error(error: XlsxError) -> kejar_model::KejarError {
    kejar_model::KejarError::Report(error.to_string())
}

fn build_sheet(
    worksheet: &mut Worksheet,
    records: &[ChildRecord],
    target_map: &ColumnMap,
    catalog: &FieldCatalog,
    cohort: Cohort,
    layout: RowLayout,
    now: NaiveDate,
) -> Result<(), XlsxError> {
    worksheet.set_name(SHEET_NAME)?;
    let styles = Styles::new();

    write_title(worksheet, target_map, cohort, layout, now, &styles)?;
    write_header(worksheet, target_map, layout, &styles)?;
    write_body(worksheet, records, target_map, catalog, layout, &styles)?;
    set_column_widths(worksheet, target_map)?;
    Ok(())
}

fn write_title(
    worksheet: &mut Worksheet,
    target_map: &ColumnMap,
    cohort: Cohort,
    layout: RowLayout,
    now: NaiveDate,
    styles: &Styles,
) -> Result<(), XlsxError> {
    let (Some((_, first)), Some((_, last))) = (target_map.first(), target_map.last()) else {
        return Ok(());
    };
    let title = report_title(cohort, now);
    if first.index == last.index {
        worksheet.write_string_with_format(
            layout.title_row,
            first.zero_based(),
            &title,
            &styles.title,
        )?;
    } else {
        worksheet.merge_range(
            layout.title_row,
            first.zero_based(),
            layout.title_row,
            last.zero_based(),
            &title,
            &styles.title,
        )?;
    }
    Ok(())
}

fn write_header(
    worksheet: &mut Worksheet,
    target_map: &ColumnMap,
    layout: RowLayout,
    styles: &Styles,
) -> Result<(), XlsxError> {
    for (key, spec) in target_map.iter() {
        worksheet.write_string_with_format(
            layout.header_row,
            spec.zero_based(),
            key,
            &styles.header,
        )?;
    }
    Ok(())
}

fn write_body(
    worksheet: &mut Worksheet,
    records: &[ChildRecord],
    target_map: &ColumnMap,
    catalog: &FieldCatalog,
    layout: RowLayout,
    styles: &Styles,
) -> Result<(), XlsxError> {
    for (offset, record) in records.iter().enumerate() {
        let row = layout.body_start_row + u32::try_from(offset).unwrap_or(u32::MAX);
        for (key, spec) in target_map.iter() {
            write_body_cell(worksheet, record, catalog.resolve(key), spec, row, styles)?;
        }
    }
    Ok(())
}

fn write_body_cell(
    worksheet: &mut Worksheet,
    record: &ChildRecord,
    kind: FieldKind,
    spec: &ColumnSpec,
    row: u32,
    styles: &Styles,
) -> Result<(), XlsxError> {
    let column = spec.zero_based();
    let text = match kind {
        FieldKind::Name => Some(record.name.as_str()),
        FieldKind::Age => Some(record.age.as_str()),
        FieldKind::BirthDate => Some(record.birth_date.as_str()),
        FieldKind::Sex => Some(record.sex.as_str()),
        FieldKind::Parent => Some(record.parent_name.as_str()),
        FieldKind::Clinic => Some(record.clinic.as_str()),
        FieldKind::DoseDate(dose) => dose_detail(record, &dose).and_then(|d| d.date.as_deref()),
        FieldKind::DoseLocation(dose) => {
            dose_detail(record, &dose).and_then(|d| d.location.as_deref())
        }
        FieldKind::DoseStatus(dose) => {
            if let Some(status) = dose_detail(record, &dose).and_then(|d| d.status) {
                worksheet.write_number_with_format(
                    row,
                    column,
                    f64::from(status.as_number()),
                    &styles.body,
                )?;
                return Ok(());
            }
            None
        }
        FieldKind::Unknown => None,
    };

    match text {
        Some(text) => {
            worksheet.write_string_with_format(row, column, text, &styles.body)?;
        }
        // Unpopulated sub-field: keep the border, skip the value.
        None => {
            worksheet.write_blank(row, column, &styles.body)?;
        }
    }
    Ok(())
}

fn dose_detail<'a>(record: &'a ChildRecord, dose: &str) -> Option<&'a DoseDetail> {
    record.doses.get(dose)
}

fn set_column_widths(worksheet: &mut Worksheet, target_map: &ColumnMap) -> Result<(), XlsxError> {
    for (_, spec) in target_map.iter() {
        worksheet.set_column_width(spec.zero_based(), spec.width.unwrap_or(DEFAULT_COLUMN_WIDTH))?;
    }
    Ok(())
}
