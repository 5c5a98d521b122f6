//! Derived age computation.

use chrono::{Datelike, Months, NaiveDate};
use tracing::warn;

use crate::privacy::redact_value;
use crate::record::HYPHEN;

const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Age of a child as of `now`, formatted `"<months> Bulan <days> Hari"`.
///
/// The birth date is parsed as `YYYY-MM-DD`; on parse failure the sentinel
/// `"-"` is returned and the failure is logged, since the surrounding row
/// is still usable. Month counting follows calendar rounding: the month
/// anchor is the birth date advanced by whole months (clamped at month
/// ends), and the day remainder is counted from that anchor, so a child
/// born Jan 31 is "1 Bulan 1 Hari" old on Mar 1. `now` is always injected
/// by the caller, which keeps the output reproducible under test.
#[must_use]
pub fn calculate_age(birth_date: &str, now: NaiveDate) -> String {
    let Ok(birth) = NaiveDate::parse_from_str(birth_date, BIRTH_DATE_FORMAT) else {
        warn!(value = redact_value(birth_date), "failed to parse birth date");
        return HYPHEN.to_string();
    };

    let mut months = i64::from(now.year()) * 12 + i64::from(now.month())
        - (i64::from(birth.year()) * 12 + i64::from(birth.month()));
    if months < 0 {
        months = 0;
    }
    if months > 0 && month_anchor(birth, months) > now {
        months -= 1;
    }
    let days = (now - month_anchor(birth, months)).num_days();

    format!("{months} Bulan {days} Hari")
}

/// Birth date advanced by `months` whole months, clamped at month ends
/// (Jan 31 + 1 month = Feb 28/29).
fn month_anchor(birth: NaiveDate, months: i64) -> NaiveDate {
    let months = u32::try_from(months).unwrap_or(0);
    birth
        .checked_add_months(Months::new(months))
        .unwrap_or(birth)
}
