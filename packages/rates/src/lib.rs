#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Bank of Korea base rate history extraction.
//!
//! The Bank of Korea publishes its base rate history as a PDF with a
//! three-column table: year, change date (`"11월 30일"`), and rate. Table
//! extraction from PDFs is noisy, so [`RateTableExtractor`] is permissive:
//! header rows, merged cells and garbled fragments are dropped without
//! error, and whatever survives is normalized into [`RateRecord`]s sorted
//! newest first with one record per date.
//!
//! [`output`] writes the records as JSON and [`lookup`] answers which rate
//! applied on a given day.

pub mod lookup;
pub mod output;
pub mod parsing;

use std::collections::BTreeSet;

pub use bok_rates_models::{Cell, RateRecord, RawRow, Table, cell_text};

/// Substrings of the year column that mark a header row ("year" and
/// "change date").
const HEADER_MARKERS: &[&str] = &["년도", "변경일자"];

/// Returns `true` if a row's year cell looks like a column header.
///
/// This is a substring heuristic on the year cell only, not a schema
/// check.
#[must_use]
pub fn looks_like_header_row(year_field: &str) -> bool {
    let year = year_field.trim();
    HEADER_MARKERS.iter().any(|marker| year.contains(marker))
}

/// Sorts records by date, newest first.
///
/// The sort is stable, so records sharing a date keep their relative
/// order.
pub fn sort_descending_by_date(records: &mut [RateRecord]) {
    records.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Drops every record whose date was already seen earlier in `records`.
#[must_use]
pub fn dedupe_keep_first(records: Vec<RateRecord>) -> Vec<RateRecord> {
    let mut seen = BTreeSet::new();
    records
        .into_iter()
        .filter(|record| seen.insert(record.date.clone()))
        .collect()
}

/// Turns raw table rows into a sorted, deduplicated rate history.
#[derive(Debug, Clone, Copy, Default)]
pub struct RateTableExtractor {
    /// Reject dates that do not exist on the calendar (e.g. `2023-02-30`).
    strict_calendar: bool,
}

impl RateTableExtractor {
    /// Creates an extractor that accepts any well-shaped date.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            strict_calendar: false,
        }
    }

    /// Enables or disables calendar validation of extracted dates.
    #[must_use]
    pub const fn with_strict_calendar(mut self, strict: bool) -> Self {
        self.strict_calendar = strict;
        self
    }

    /// Converts a single row into a record, or `None` if the row is not a
    /// data row.
    #[must_use]
    pub fn extract_row(&self, row: &[Cell]) -> Option<RateRecord> {
        let [year, month_day, rate, ..] = row else {
            log::trace!("Skipping row with {} cell(s)", row.len());
            return None;
        };

        let year = cell_text(year).trim();
        let month_day = cell_text(month_day).trim();
        let rate = cell_text(rate).trim();

        if looks_like_header_row(year) {
            log::trace!("Skipping header row starting with {year:?}");
            return None;
        }

        let Some(date) = parsing::extract_date(year, month_day) else {
            log::trace!("Skipping row with unparseable date: {year:?} {month_day:?}");
            return None;
        };

        if self.strict_calendar
            && chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err()
        {
            log::trace!("Skipping row with impossible date {date}");
            return None;
        }

        let Some(rate) = parsing::extract_rate(rate) else {
            log::trace!("Skipping row {date} with unparseable rate {rate:?}");
            return None;
        };

        Some(RateRecord { date, rate })
    }

    /// Extracts records from every row of every table, in order.
    ///
    /// The result is sorted newest first and holds one record per date.
    /// When several rows share a date, the one encountered first wins.
    /// Rows that are not data rows are dropped, so fully malformed input
    /// produces an empty list.
    #[must_use]
    pub fn process(&self, tables: &[Table]) -> Vec<RateRecord> {
        self.process_rows(tables.iter().flatten())
    }

    /// Same as [`Self::process`] for tables grouped by page.
    #[must_use]
    pub fn process_pages(&self, pages: &[Vec<Table>]) -> Vec<RateRecord> {
        self.process_rows(pages.iter().flatten().flatten())
    }

    /// Same as [`Self::process`] for rows already laid out in source
    /// order.
    #[must_use]
    pub fn process_rows<'a>(
        &self,
        rows: impl IntoIterator<Item = &'a RawRow>,
    ) -> Vec<RateRecord> {
        let mut records: Vec<RateRecord> = rows
            .into_iter()
            .filter_map(|row| self.extract_row(row))
            .collect();

        let extracted = records.len();
        sort_descending_by_date(&mut records);
        let records = dedupe_keep_first(records);

        log::debug!(
            "Extracted {extracted} rate row(s), {} unique date(s)",
            records.len()
        );

        records
    }
}
