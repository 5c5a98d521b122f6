//! Title and file-name text generation.

use chrono::{Datelike, NaiveDate};

use kejar_model::Cohort;

/// Indonesian month names, January first.
const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// `"<day> <Indonesian month>"` for the given date, e.g. `"25 September"`.
#[must_use]
pub fn current_date_str(now: NaiveDate) -> String {
    let month = MONTH_NAMES[now.month0() as usize];
    format!("{} {month}", now.day())
}

/// Report title: `"Sasaran Imunisasi <Cohort> <day> <month>"`.
#[must_use]
pub fn report_title(cohort: Cohort, now: NaiveDate) -> String {
    format!(
        "Sasaran Imunisasi {} {}",
        cohort.display_name(),
        current_date_str(now)
    )
}

/// Output file name: the report title with an `.xlsx` extension.
#[must_use]
pub fn report_file_name(cohort: Cohort, now: NaiveDate) -> String {
    format!("{}.xlsx", report_title(cohort, now))
}
