//! Row-value redaction for log output.
//!
//! Extracted cells are children's health data. Diagnostics that would print
//! cell values go through [`redact_value`], which substitutes a fixed token
//! unless row-level logging was explicitly enabled at startup.

use std::sync::atomic::{AtomicBool, Ordering};

static LOG_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder used when row-level logging is disabled.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Enable or disable row-level value logging. Called once at startup.
pub fn set_log_data(enabled: bool) {
    LOG_DATA_ENABLED.store(enabled, Ordering::Release);
}

/// True if row-level logging is explicitly enabled.
#[must_use]
pub fn log_data_enabled() -> bool {
    LOG_DATA_ENABLED.load(Ordering::Acquire)
}

/// The input value when row-level logging is enabled, otherwise a redacted
/// token.
#[must_use]
pub fn redact_value(value: &str) -> &str {
    if log_data_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}
