//! Report ordering.

use std::cmp::Ordering;

use chrono::NaiveDate;
use tracing::warn;

use kejar_model::{ChildRecord, redact_value};

const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Sort records in place by birth date ascending, oldest first.
///
/// A birth date that fails to parse is logged and the row sorts after all
/// well-formed dates, so the sort completes without error. Callers should
/// ensure dates are well-formed upstream.
pub fn sort_by_birth_date(records: &mut [ChildRecord]) {
    records.sort_by(|left, right| {
        match (parse_birth_date(left), parse_birth_date(right)) {
            (Some(left), Some(right)) => left.cmp(&right),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}

fn parse_birth_date(record: &ChildRecord) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(&record.birth_date, BIRTH_DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(error) => {
            warn!(
                value = redact_value(&record.birth_date),
                %error,
                "unorderable birth date in sort"
            );
            None
        }
    }
}
