//! Calendar-date arithmetic for due-date scheduling
//!
//! Dates are plain `YYYY-MM-DD` strings throughout the engine. `NaiveDate`
//! arithmetic has no time-of-day or timezone attached, so adding days can
//! never drift across a DST transition.

use super::error::ValidationError;
use chrono::{Duration, NaiveDate};

const DATE_FMT: &str = "%Y-%m-%d";

/// Parse a plain date, rejecting anything that is not Y-M-D
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FMT)
        .map_err(|_| ValidationError::InvalidDate(value.to_string()))
}

/// Add a signed number of calendar days to a plain date.
///
/// Correct across month/year boundaries and leap years.
pub fn add_calendar_days(base: &str, days: i64) -> Result<String, ValidationError> {
    let date = parse_date(base)?;
    let shifted = date
        .checked_add_signed(Duration::days(days))
        .ok_or_else(|| ValidationError::InvalidDate(format!("{} + {} days", base, days)))?;
    Ok(shifted.format(DATE_FMT).to_string())
}
