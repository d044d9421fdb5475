//! Record snapshots on disk.
//!
//! A snapshot is a pretty-printed JSON array of [`MetricRecord`]s, written
//! by a fetch run and read back by later ranking runs.

use std::path::Path;
use valuerank_traits::{MetricRecord, RankError, Result};

/// Default snapshot file name.
pub const DEFAULT_SNAPSHOT: &str = "spdata.json";

/// Reads a snapshot.
///
/// # Errors
///
/// Returns [`RankError::Snapshot`] when the file is missing and
/// [`RankError::Json`] when it is not an array of records.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Vec<MetricRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(RankError::Snapshot(format!(
            "{} not found, run a fetch first",
            path.display()
        )));
    }

    let text = std::fs::read_to_string(path)?;
    let records: Vec<MetricRecord> = serde_json::from_str(&text)?;
    tracing::info!(path = %path.display(), records = records.len(), "loaded snapshot");
    Ok(records)
}

/// Writes a snapshot, replacing any existing file.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn save_snapshot(path: impl AsRef<Path>, records: &[MetricRecord]) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, serde_json::to_string_pretty(records)?)?;
    tracing::info!(path = %path.display(), records = records.len(), "saved snapshot");
    Ok(())
}
