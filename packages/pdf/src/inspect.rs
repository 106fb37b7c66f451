//! Structure summary of a PDF, for checking what the table source sees.
//!
//! Reports the page count and, for the first few pages, a text preview and
//! the leading rows of the leading tables.

use std::fmt;

use bok_rates_models::{Cell, Table};

use crate::{PdfError, PdfTableSource, TableSource};

/// Limits for [`inspect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InspectOptions {
    /// Pages to summarize, from the first.
    pub max_pages: usize,
    /// Characters of page text to preview.
    pub max_chars: usize,
    /// Tables to show per page.
    pub max_tables: usize,
    /// Rows to show per table.
    pub max_rows: usize,
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            max_pages: 3,
            max_chars: 1000,
            max_tables: 2,
            max_rows: 5,
        }
    }
}

impl InspectOptions {
    /// Sets the number of pages to summarize.
    #[must_use]
    pub const fn with_max_pages(mut self, pages: usize) -> Self {
        self.max_pages = pages;
        self
    }

    /// Sets the number of text characters previewed per page.
    #[must_use]
    pub const fn with_max_chars(mut self, chars: usize) -> Self {
        self.max_chars = chars;
        self
    }
}

/// Summary of one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    /// 1-based page number.
    pub number: usize,
    /// Leading characters of the page text.
    pub text_preview: String,
    /// Number of tables found on the page.
    pub table_count: usize,
    /// Leading rows of the leading tables.
    pub tables: Vec<Table>,
}

/// Summary of a whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectReport {
    /// Total pages in the document.
    pub page_count: usize,
    /// Summaries of the first pages.
    pub pages: Vec<PageSummary>,
}

/// Summarizes `source` within the limits of `options`.
///
/// # Errors
///
/// Returns [`PdfError`] if the tables cannot be rebuilt.
pub fn inspect(
    source: &PdfTableSource,
    options: &InspectOptions,
) -> Result<InspectReport, PdfError> {
    let tables_by_page = source.pages()?;

    let pages = source
        .page_texts()
        .iter()
        .zip(tables_by_page)
        .take(options.max_pages)
        .enumerate()
        .map(|(i, (text, tables))| PageSummary {
            number: i + 1,
            text_preview: text.chars().take(options.max_chars).collect(),
            table_count: tables.len(),
            tables: tables
                .into_iter()
                .take(options.max_tables)
                .map(|table| table.into_iter().take(options.max_rows).collect())
                .collect(),
        })
        .collect();

    Ok(InspectReport {
        page_count: source.page_count(),
        pages,
    })
}

fn format_cell(cell: &Cell) -> String {
    cell.as_ref()
        .map_or_else(|| "None".to_owned(), |text| format!("{text:?}"))
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pages: {}", self.page_count)?;

        for page in &self.pages {
            writeln!(f)?;
            writeln!(f, "{}", "=".repeat(60))?;
            writeln!(f, "Page {}", page.number)?;
            writeln!(f, "{}", "=".repeat(60))?;

            if !page.text_preview.is_empty() {
                writeln!(f)?;
                writeln!(f, "Text:")?;
                writeln!(f, "{}", page.text_preview)?;
            }

            if page.table_count > 0 {
                writeln!(f)?;
                writeln!(f, "Tables found: {}", page.table_count)?;
            }

            for (t, table) in page.tables.iter().enumerate() {
                writeln!(f)?;
                writeln!(f, "Table {}:", t + 1)?;
                for (r, row) in table.iter().enumerate() {
                    let cells: Vec<String> = row.iter().map(format_cell).collect();
                    writeln!(f, "  Row {}: [{}]", r + 1, cells.join(", "))?;
                }
            }
        }

        Ok(())
    }
}
