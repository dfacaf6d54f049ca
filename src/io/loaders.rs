//! CSV ingestion for the channel dataset.
//!
//! The dataset file keeps the column names of the channel export, one row
//! per day. Loading reads the whole file once, fingerprints the raw bytes
//! and fails fast with row context on any malformed cell.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use qtty::Hours;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tracing::info;

use crate::models::{ChannelDataset, ChannelRecord};

/// Error type for dataset loading.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The file could not be read at all.
    #[error("Failed to read dataset file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A row failed to parse. `line` is 1-based and counts the header.
    #[error("Malformed dataset row at line {line} of '{path}': {source}")]
    Row {
        path: String,
        line: usize,
        #[source]
        source: csv::Error,
    },
}

/// One row of the channel export.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "DATE")]
    date: NaiveDate,
    #[serde(rename = "VIEWS")]
    views: u64,
    #[serde(rename = "WATCH_HOURS")]
    watch_hours: f64,
    #[serde(rename = "SUBSCRIBERS_GAINED")]
    subscribers_gained: u64,
    #[serde(rename = "SUBSCRIBERS_LOST")]
    subscribers_lost: u64,
    #[serde(rename = "LIKES")]
    likes: u64,
    #[serde(rename = "COMMENTS")]
    comments: u64,
    #[serde(rename = "SHARES")]
    shares: u64,
}

impl From<CsvRow> for ChannelRecord {
    fn from(row: CsvRow) -> Self {
        ChannelRecord {
            date: row.date,
            views: row.views,
            watch_hours: Hours::new(row.watch_hours),
            subscribers_gained: row.subscribers_gained,
            subscribers_lost: row.subscribers_lost,
            likes: row.likes,
            comments: row.comments,
            shares: row.shares,
        }
    }
}

/// Load the channel dataset from a CSV file.
///
/// Records come back sorted by date inside the dataset; the checksum
/// fingerprints the raw file bytes.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<ChannelDataset, DatasetError> {
    let path_display = path.as_ref().display().to_string();

    let bytes = fs::read(path.as_ref()).map_err(|e| DatasetError::Io {
        path: path_display.clone(),
        source: e,
    })?;

    let checksum = dataset_checksum(&bytes);
    let records = parse_records(&bytes, &path_display)?;

    info!(path = %path_display, rows = records.len(), "dataset loaded");

    Ok(ChannelDataset::new(records, checksum))
}

fn parse_records(bytes: &[u8], path: &str) -> Result<Vec<ChannelRecord>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<CsvRow>().enumerate() {
        let row = row.map_err(|e| DatasetError::Row {
            path: path.to_string(),
            // Header occupies line 1
            line: index + 2,
            source: e,
        })?;
        records.push(ChannelRecord::from(row));
    }

    Ok(records)
}

/// SHA-256 fingerprint of the raw dataset bytes.
///
/// Returns the hexadecimal string representation of the hash.
pub fn dataset_checksum(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let result = hasher.finalize();
    hex::encode(result)
}
