//! Writing and reading commitment records
//!
//! The record is rendered in memory, written to a temporary file beside
//! the destination and renamed into place, so readers never observe a
//! partially written file.

use crate::record::CommitmentRecord;
use crate::Result;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Render a record as two-space indented JSON with a trailing newline
pub fn to_pretty_json(record: &CommitmentRecord) -> Result<String> {
    let mut json = serde_json::to_string_pretty(record)?;
    json.push('\n');
    Ok(json)
}

/// Write a record to `path` atomically, creating parent directories
pub fn write_record_atomic(path: impl AsRef<Path>, record: &CommitmentRecord) -> Result<()> {
    let path = path.as_ref();
    let json = to_pretty_json(record)?;

    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent)?;
            parent
        }
        None => Path::new("."),
    };

    // Dropped (and removed) without being persisted if any step fails.
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(json.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    info!(path = %path.display(), root = %record.merkle_root, "wrote commitment record");
    Ok(())
}

/// Read a record previously written by [`write_record_atomic`]
pub fn read_record(path: impl AsRef<Path>) -> Result<CommitmentRecord> {
    let content = fs::read_to_string(path)?;
    CommitmentRecord::from_json(&content)
}
