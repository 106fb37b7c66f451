#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! PDF table extraction for the Bank of Korea base rate history.
//!
//! The rate history PDF is a plain ruled table. This crate extracts the
//! text of each page with [`pdf_extract`] and rebuilds rows of cells from
//! the text layout ([`text_table`]), producing the pages → tables → rows
//! shape the extractor consumes.
//!
//! The primary entry point is [`PdfTableSource`], which implements
//! [`TableSource`]. [`inspect`] summarizes a document for debugging the
//! extraction.

pub mod inspect;
pub mod text_table;

use std::path::{Path, PathBuf};

use bok_rates_models::Table;

/// Errors specific to PDF extraction.
#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    /// The input document does not exist.
    #[error("PDF not found: {}", .0.display())]
    NotFound(PathBuf),

    /// PDF text extraction failed.
    #[error("PDF extraction error: {0}")]
    Extraction(String),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Something that yields the tables of a document, grouped by page.
pub trait TableSource {
    /// Returns every page's tables in document order.
    ///
    /// # Errors
    ///
    /// Returns [`PdfError`] if the tables cannot be produced.
    fn pages(&self) -> Result<Vec<Vec<Table>>, PdfError>;

    /// Returns the name of the extraction strategy.
    fn strategy(&self) -> &str;
}

/// A PDF document whose pages have been reduced to text.
#[derive(Debug, Clone)]
pub struct PdfTableSource {
    page_texts: Vec<String>,
}

impl PdfTableSource {
    /// Reads and extracts the PDF at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PdfError::NotFound`] if `path` does not exist, or another
    /// [`PdfError`] if it cannot be read or parsed.
    pub fn open(path: &Path) -> Result<Self, PdfError> {
        if !path.exists() {
            return Err(PdfError::NotFound(path.to_path_buf()));
        }

        let bytes = std::fs::read(path)?;

        log::debug!("Read {} bytes from {}", bytes.len(), path.display());

        Self::from_bytes(&bytes)
    }

    /// Extracts a PDF held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`PdfError::Extraction`] if the bytes are not a readable
    /// PDF.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PdfError> {
        let page_texts = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| PdfError::Extraction(format!("failed to extract text from PDF: {e}")))?;

        log::debug!("Extracted text from {} page(s)", page_texts.len());

        Ok(Self { page_texts })
    }

    /// Builds a source from already-extracted page text.
    #[must_use]
    pub const fn from_page_texts(page_texts: Vec<String>) -> Self {
        Self { page_texts }
    }

    /// Returns the extracted text of each page.
    #[must_use]
    pub fn page_texts(&self) -> &[String] {
        &self.page_texts
    }

    /// Returns the number of pages in the document.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        self.page_texts.len()
    }
}

impl TableSource for PdfTableSource {
    fn pages(&self) -> Result<Vec<Vec<Table>>, PdfError> {
        let pages: Vec<Vec<Table>> = self
            .page_texts
            .iter()
            .map(|text| text_table::tables_from_text(text))
            .collect();

        log::debug!(
            "Rebuilt {} table(s) from {} page(s)",
            pages.iter().map(Vec::len).sum::<usize>(),
            pages.len()
        );

        Ok(pages)
    }

    fn strategy(&self) -> &'static str {
        "pdf_extract_text"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.pdf");

        let err = PdfTableSource::open(&path).unwrap_err();

        assert!(matches!(err, PdfError::NotFound(p) if p == path));
    }

    #[test]
    fn garbage_bytes_fail_extraction() {
        let err = PdfTableSource::from_bytes(b"not a pdf").unwrap_err();
        assert!(matches!(err, PdfError::Extraction(_)));
    }

    #[test]
    fn pages_keep_document_order() {
        let source = PdfTableSource::from_page_texts(vec![
            "2024  11월 28일  3.00\n".to_owned(),
            "2023  1월 13일  3.50\n\n2022  11월 24일  3.25\n".to_owned(),
        ]);

        let pages = source.pages().unwrap();

        assert_eq!(source.page_count(), 2);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].len(), 1);
        assert_eq!(pages[1].len(), 2);
        assert_eq!(pages[1][1][0][0].as_deref(), Some("2022"));
        assert_eq!(source.strategy(), "pdf_extract_text");
    }
}
