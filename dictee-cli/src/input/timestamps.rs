//! Timestamp file parsing
//!
//! A timestamp file holds one start time in seconds per word, separated by
//! any whitespace.

use crate::error::CliError;
use crate::input::FileReader;
use anyhow::Result;
use std::path::Path;

/// Parse whitespace-separated seconds
pub fn parse_timestamps(text: &str) -> std::result::Result<Vec<f64>, String> {
    text.split_whitespace()
        .enumerate()
        .map(|(i, field)| match field.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            Ok(_) => Err(format!("entry {} ('{field}') is not finite", i + 1)),
            Err(_) => Err(format!("entry {} ('{field}') is not a number", i + 1)),
        })
        .collect()
}

/// Read a timestamp file
pub fn read_timestamps(path: &Path) -> Result<Vec<f64>> {
    let text = FileReader::read_text(path)?;
    let timestamps = parse_timestamps(&text).map_err(|reason| CliError::InvalidTimestamps {
        path: path.display().to_string(),
        reason,
    })?;

    log::debug!("Read {} timestamps from {}", timestamps.len(), path.display());
    Ok(timestamps)
}

/// Warn when a timestamp list does not line up with its transcript
pub fn check_alignment(timestamps: &[f64], text: &str, label: &str) {
    let words = text.split_whitespace().count();
    if timestamps.len() != words {
        log::warn!(
            "{label}: {} timestamps for {words} words; unmatched words get 0.0",
            timestamps.len()
        );
    }
}
