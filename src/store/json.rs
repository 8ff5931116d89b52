//! Locked JSON file I/O.
//!
//! Every store write replaces the whole file under an exclusive `fs2`
//! advisory lock, acquired BEFORE truncation so a concurrent reader never
//! observes an empty file. The board is single-writer by construction (one
//! operator), but the lock makes that assumption hold even if a second
//! process shows up.

use anyhow::{Context, Result};
use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Read and deserialize a JSON file under a shared lock.
///
/// A missing file is `Ok(None)`: stores start empty.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let file =
        File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    file.lock_shared()
        .with_context(|| format!("Failed to acquire shared lock: {}", path.display()))?;

    let mut content = String::new();
    BufReader::new(&file)
        .read_to_string(&mut content)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    let value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {}", path.display()))?;
    Ok(Some(value))
}

/// Serialize and write a JSON file under an exclusive lock.
///
/// The sequence is: open -> lock -> truncate -> write -> flush.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;

    #[allow(clippy::suspicious_open_options)]
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .open(path)
        .with_context(|| format!("Failed to open file for writing: {}", path.display()))?;
    file.lock_exclusive()
        .with_context(|| format!("Failed to acquire exclusive lock: {}", path.display()))?;
    // Truncate AFTER acquiring the lock
    file.set_len(0)
        .with_context(|| format!("Failed to truncate file: {}", path.display()))?;

    let mut writer = BufWriter::new(&file);
    writer
        .write_all(content.as_bytes())
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush file: {}", path.display()))?;
    Ok(())
}
