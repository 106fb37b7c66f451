#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI for the Bank of Korea base rate history.
//!
//! ```text
//! bok_rates parse [--input <pdf>] [--output <json>] [--strict-dates] [--preview 10]
//! bok_rates inspect [--input <pdf>] [--pages 3] [--chars 1000]
//! bok_rates lookup [--data <json>] <YYYY-MM-DD>
//! ```
//!
//! Set `RUST_LOG=debug` to see extraction counts, `RUST_LOG=trace` to see
//! every rejected row.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Default location of the downloaded rate history PDF.
const DEFAULT_INPUT: &str = "data/bok_base_rate_history.pdf";

/// Default location of the generated JSON.
const DEFAULT_OUTPUT: &str = "public/data/bok_rates.json";

#[derive(Parser)]
#[command(
    name = "bok_rates",
    about = "Extract the Bank of Korea base rate history from PDF to JSON"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the rate table and write it as JSON
    Parse {
        /// Rate history PDF
        #[arg(long, default_value = DEFAULT_INPUT)]
        input: PathBuf,
        /// Output JSON file (parent directories are created)
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
        /// Drop rows whose date does not exist on the calendar
        #[arg(long)]
        strict_dates: bool,
        /// Number of most recent records to print
        #[arg(long, default_value = "10")]
        preview: usize,
    },
    /// Print the page text and table rows the extractor sees
    Inspect {
        /// Rate history PDF
        #[arg(long, default_value = DEFAULT_INPUT)]
        input: PathBuf,
        /// Pages to show
        #[arg(long, default_value = "3")]
        pages: usize,
        /// Characters of text to show per page
        #[arg(long, default_value = "1000")]
        chars: usize,
    },
    /// Show the base rate in force on a date
    Lookup {
        /// Rate history JSON written by `parse`
        #[arg(long, default_value = DEFAULT_OUTPUT)]
        data: PathBuf,
        /// Date as YYYY-MM-DD
        date: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            input,
            output,
            strict_dates,
            preview,
        } => {
            let source = commands::open_source(&input)?;
            let extractor = bok_rates::RateTableExtractor::new().with_strict_calendar(strict_dates);
            let records = commands::parse(&source, &extractor, &output)?;

            println!("Extracted {} rate record(s)", records.len());
            if !records.is_empty() {
                println!();
                println!("Most recent {} (newest first):", preview.min(records.len()));
                print!("{}", commands::format_preview(&records, preview));
            }
            println!();
            println!("Saved to {}", output.display());
        }
        Commands::Inspect {
            input,
            pages,
            chars,
        } => {
            let source = commands::open_source(&input)?;
            let options = bok_rates_pdf::inspect::InspectOptions::default()
                .with_max_pages(pages)
                .with_max_chars(chars);
            let report = bok_rates_pdf::inspect::inspect(&source, &options)?;
            print!("{report}");
        }
        Commands::Lookup { data, date } => {
            let rate = commands::lookup(&data, &date)?;
            println!("{date}: {}", bok_rates::lookup::format_rate(rate));
        }
    }

    Ok(())
}
