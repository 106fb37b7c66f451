//! JSON persistence for rate histories.
//!
//! The file is a pretty-printed JSON array of `{"date", "rate"}` objects,
//! newest first, as produced by [`crate::RateTableExtractor::process`].

use std::fs;
use std::path::Path;

use bok_rates_models::RateRecord;

/// Errors that can occur while reading or writing a rate history file.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Renders records as an indented JSON array.
///
/// # Errors
///
/// Returns [`OutputError::Json`] if serialization fails.
pub fn to_json(records: &[RateRecord]) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Writes records to `path`, creating missing parent directories.
///
/// # Errors
///
/// Returns [`OutputError`] if the directory or file cannot be written.
pub fn write_json(path: &Path, records: &[RateRecord]) -> Result<(), OutputError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, to_json(records)?)?;

    log::debug!("Wrote {} record(s) to {}", records.len(), path.display());

    Ok(())
}

/// Loads a rate history previously written by [`write_json`].
///
/// # Errors
///
/// Returns [`OutputError`] if the file cannot be read or is not a JSON
/// array of rate records.
pub fn read_json(path: &Path) -> Result<Vec<RateRecord>, OutputError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
