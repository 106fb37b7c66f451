#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Shared types for the Bank of Korea base rate extractor.
//!
//! Raw rows come out of a PDF table source as loosely-typed cells
//! ([`Cell`], [`RawRow`], [`Table`]). The extractor turns them into
//! [`RateRecord`]s, the unit of output written to JSON.

use serde::{Deserialize, Serialize};

/// A single table cell. `None` marks a cell the table source could not
/// fill (merged or empty cells).
pub type Cell = Option<String>;

/// One horizontal row of an extracted table.
///
/// Positions 0, 1 and 2 hold the year, the month/day fragment and the
/// rate respectively. Any further cells are ignored.
pub type RawRow = Vec<Cell>;

/// A table is an ordered sequence of rows.
pub type Table = Vec<RawRow>;

/// A base rate change: the date it took effect and the new rate in
/// percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRecord {
    /// Effective date, formatted as `YYYY-MM-DD` with zero-padded month
    /// and day.
    pub date: String,
    /// Rate in percent (e.g. `3.5` for 3.50%).
    pub rate: f64,
}

impl RateRecord {
    /// Creates a new record.
    #[must_use]
    pub fn new(date: impl Into<String>, rate: f64) -> Self {
        Self {
            date: date.into(),
            rate,
        }
    }
}

/// Returns the text of a cell, treating an absent cell as empty.
#[must_use]
pub fn cell_text(cell: &Cell) -> &str {
    cell.as_deref().unwrap_or_default()
}
