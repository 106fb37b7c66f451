//! Point-in-time base rate lookup.
//!
//! A rate history only lists the days the rate changed. The rate in force
//! on any other day is the one set by the most recent change on or before
//! it.

use bok_rates_models::RateRecord;
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors returned by [`rate_on_str`].
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The query date is not a valid `YYYY-MM-DD` calendar date.
    #[error("Invalid date '{input}': {source}")]
    InvalidDate {
        input: String,
        source: chrono::ParseError,
    },
}

/// Returns the rate in force on `date`.
///
/// `records` must be sorted newest first. Records whose date is not a
/// real calendar date are ignored. Returns `None` if `date` predates every
/// record.
#[must_use]
pub fn rate_on(records: &[RateRecord], date: NaiveDate) -> Option<f64> {
    records
        .iter()
        .filter_map(|record| {
            NaiveDate::parse_from_str(&record.date, DATE_FORMAT)
                .ok()
                .map(|changed| (changed, record.rate))
        })
        .find(|(changed, _)| *changed <= date)
        .map(|(_, rate)| rate)
}

/// Parses `date` as `YYYY-MM-DD` and looks up the rate in force on it.
///
/// # Errors
///
/// Returns [`LookupError::InvalidDate`] if `date` cannot be parsed.
pub fn rate_on_str(records: &[RateRecord], date: &str) -> Result<Option<f64>, LookupError> {
    let parsed = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).map_err(|source| {
        LookupError::InvalidDate {
            input: date.to_owned(),
            source,
        }
    })?;
    Ok(rate_on(records, parsed))
}

/// Formats a rate as a two-decimal percentage, or `"—"` when there is no
/// rate.
#[must_use]
pub fn format_rate(rate: Option<f64>) -> String {
    rate.map_or_else(|| "—".to_owned(), |rate| format!("{rate:.2}%"))
}
