//! CSV ingestion
//!
//! Reads the raw telemetry CSV into memory as rows of text fields.
//! Column mapping is the channel spec's job - the header row is kept
//! for diagnostics only. Ragged rows are tolerated: short rows must
//! reach the encoder, which defaults the missing fields.

use anyhow::{Context, Result};
use std::path::Path;

/// Read the CSV at `path`: header row plus up to `max_rows` data rows.
pub fn read_rows(
    path: &Path,
    max_rows: Option<usize>,
) -> Result<(Vec<String>, Vec<Vec<String>>)> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file: {:?}", path))?;

    let mut records = reader.records();

    let header: Vec<String> = match records.next() {
        Some(record) => record
            .with_context(|| format!("Failed to read CSV header: {:?}", path))?
            .iter()
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    };

    let mut rows = Vec::new();
    for record in records {
        if let Some(cap) = max_rows {
            if rows.len() >= cap {
                break;
            }
        }
        let record =
            record.with_context(|| format!("Failed to read CSV row {}", rows.len() + 2))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    log::debug!("Read {} data rows from {:?}", rows.len(), path);
    Ok((header, rows))
}
