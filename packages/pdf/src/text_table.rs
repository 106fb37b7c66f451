//! Rebuilds table rows from the text layout of a PDF page.
//!
//! Text extraction loses the ruling lines of a table, so rows and cells are
//! recovered from whitespace:
//! - **Tables**: consecutive non-blank lines; blank lines separate tables
//! - **Cells**: runs of two or more spaces, or tabs, separate cells
//!
//! Narrowly spaced rows (`2017 11월 30일 1.50`) do not survive the cell
//! split, so lines with fewer than [`MIN_COLUMNS`] cells are folded around
//! the date fragment instead: the year is the first token and must be
//! followed by the `…월` token, the fragment runs through the first `…일`
//! token, and the rate is the token right after it. Any trailing tokens
//! become extra cells. Lines of any other shape are left unfolded.

use std::sync::LazyLock;

use bok_rates_models::{RawRow, Table};
use regex::Regex;

/// Number of columns in the rate history table (year, date, rate).
pub const MIN_COLUMNS: usize = 3;

static COLUMN_GAP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]{2,}|\t").expect("valid regex"));

static MONTH_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+월").expect("valid regex"));

static DAY_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+일").expect("valid regex"));

/// Folds whitespace-separated tokens into year, date fragment, rate and
/// any trailing cells. Returns `None` unless the tokens are anchored on a
/// date fragment directly after the first token.
fn fold_on_date_fragment(tokens: &[&str]) -> Option<RawRow> {
    let month = tokens.iter().position(|t| MONTH_TOKEN_RE.is_match(t))?;
    if month != 1 {
        return None;
    }

    let day = month + tokens[month..].iter().position(|t| DAY_TOKEN_RE.is_match(t))?;
    let rate = tokens.get(day + 1)?;

    let mut row = vec![
        Some(tokens[0].to_owned()),
        Some(tokens[month..=day].join(" ")),
        Some((*rate).to_owned()),
    ];
    row.extend(tokens[day + 2..].iter().map(|t| Some((*t).to_owned())));

    Some(row)
}

/// Splits one line of page text into cells.
#[must_use]
pub fn split_row(line: &str) -> RawRow {
    let line = line.trim();

    let cells: Vec<&str> = COLUMN_GAP_RE
        .split(line)
        .filter(|cell| !cell.is_empty())
        .collect();

    if cells.len() >= MIN_COLUMNS {
        return cells.into_iter().map(|cell| Some(cell.to_owned())).collect();
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();

    fold_on_date_fragment(&tokens)
        .unwrap_or_else(|| cells.into_iter().map(|cell| Some(cell.to_owned())).collect())
}

/// Groups the lines of a page into tables of rows.
#[must_use]
pub fn tables_from_text(text: &str) -> Vec<Table> {
    let mut tables = Vec::new();
    let mut current: Table = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                tables.push(std::mem::take(&mut current));
            }
            continue;
        }

        current.push(split_row(line));
    }

    if !current.is_empty() {
        tables.push(current);
    }

    tables
}
