//! Subcommand implementations, kept apart from argument parsing so they can
//! run against in-memory sources.

use std::path::Path;

use bok_rates::lookup::{format_rate, rate_on_str};
use bok_rates::{RateRecord, RateTableExtractor, output};
use bok_rates_pdf::{PdfError, PdfTableSource, TableSource};

/// Opens the rate history PDF, logging a missing file before returning the
/// error.
pub fn open_source(input: &Path) -> Result<PdfTableSource, PdfError> {
    log::info!("Reading {}", input.display());

    PdfTableSource::open(input).inspect_err(|e| {
        if let PdfError::NotFound(path) = e {
            log::error!("Rate history PDF not found: {}", path.display());
        }
    })
}

/// Extracts the rate history from `source` and writes it to `output_path`.
pub fn parse(
    source: &impl TableSource,
    extractor: &RateTableExtractor,
    output_path: &Path,
) -> Result<Vec<RateRecord>, Box<dyn std::error::Error>> {
    let pages = source.pages()?;

    log::debug!(
        "Processing {} page(s) from {} source",
        pages.len(),
        source.strategy()
    );

    let records = extractor.process_pages(&pages);
    output::write_json(output_path, &records)?;

    log::info!(
        "Wrote {} record(s) to {}",
        records.len(),
        output_path.display()
    );

    Ok(records)
}

/// Formats the first `count` records as `  date: rate` lines.
pub fn format_preview(records: &[RateRecord], count: usize) -> String {
    records
        .iter()
        .take(count)
        .map(|record| format!("  {}: {}\n", record.date, format_rate(Some(record.rate))))
        .collect()
}

/// Loads a rate history and returns the rate in force on `date`.
pub fn lookup(data: &Path, date: &str) -> Result<Option<f64>, Box<dyn std::error::Error>> {
    let records = output::read_json(data)?;
    Ok(rate_on_str(&records, date)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> PdfTableSource {
        PdfTableSource::from_page_texts(vec![
            "한국은행 기준금리 추이\n\n년도  변경일자  금리\n2017 11월\u{1}30일 1.50\n2018  11월 30일  1.75\n"
                .to_owned(),
            "년도  변경일자  금리\n2017  11월 30일  1.50\n2008  2월 30일  5.00\n".to_owned(),
        ])
    }

    #[test]
    fn parse_writes_sorted_unique_history() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("public/data/bok_rates.json");

        let records = parse(&source(), &RateTableExtractor::new(), &output_path).unwrap();

        assert_eq!(
            records,
            vec![
                RateRecord::new("2018-11-30", 1.75),
                RateRecord::new("2017-11-30", 1.5),
                RateRecord::new("2008-02-30", 5.0),
            ]
        );
        assert_eq!(output::read_json(&output_path).unwrap(), records);
    }

    #[test]
    fn strict_parse_drops_impossible_dates() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("bok_rates.json");
        let extractor = RateTableExtractor::new().with_strict_calendar(true);

        let records = parse(&source(), &extractor, &output_path).unwrap();

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.date != "2008-02-30"));
    }

    #[test]
    fn narrow_rows_with_trailing_notes_keep_their_rate() {
        let dir = tempfile::tempdir().unwrap();
        let output_path = dir.path().join("bok_rates.json");
        let source = PdfTableSource::from_page_texts(vec![
            "2008 10월 27일 4.25 -0.75\n2008 11월 7일 4.00 주1)\n".to_owned(),
        ]);

        let records = parse(&source, &RateTableExtractor::new(), &output_path).unwrap();

        assert_eq!(
            records,
            vec![
                RateRecord::new("2008-11-07", 4.0),
                RateRecord::new("2008-10-27", 4.25),
            ]
        );
    }

    #[test]
    fn missing_input_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = open_source(&dir.path().join("missing.pdf"));
        assert!(matches!(result, Err(PdfError::NotFound(_))));
    }

    #[test]
    fn preview_lists_newest_first() {
        let records = vec![
            RateRecord::new("2024-11-28", 3.0),
            RateRecord::new("2024-10-11", 3.25),
        ];
        assert_eq!(format_preview(&records, 1), "  2024-11-28: 3.00%\n");
        assert_eq!(
            format_preview(&records, 10),
            "  2024-11-28: 3.00%\n  2024-10-11: 3.25%\n"
        );
    }

    #[test]
    fn lookup_reads_written_history() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("bok_rates.json");
        parse(&source(), &RateTableExtractor::new(), &data).unwrap();

        assert_eq!(lookup(&data, "2019-01-01").unwrap(), Some(1.75));
        assert_eq!(lookup(&data, "2000-01-01").unwrap(), None);
        assert!(lookup(&data, "not-a-date").is_err());
    }
}
