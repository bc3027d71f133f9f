//! Output formatting and persistence for analyzed reviews.
//!
//! Supports pretty-printed JSON of the monthly breakdown and CSV append of
//! the scored detail rows.

use anyhow::Result;
use tracing::debug;

use crate::analysis::types::{ScoredReview, SentimentBreakdown};
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// Serializes a monthly sentiment breakdown as pretty-printed JSON.
pub fn breakdown_json(breakdown: &SentimentBreakdown) -> Result<String> {
    Ok(serde_json::to_string_pretty(breakdown)?)
}

/// Appends scored review rows to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_records(path: &str, rows: &[ScoredReview]) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, rows = rows.len(), "Appending CSV records");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}
