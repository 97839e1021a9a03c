//! Canonical JSON for brackets.
//! - Objects: keys sorted lexicographically (byte order)
//! - Arrays: order preserved (the pipeline already emits a stable order)
//! - Output: compact, no trailing newline
//!
//! `serde_json::Map` is a `BTreeMap` unless the `preserve_order` feature is
//! on, which nothing in this workspace enables; going through a `Value`
//! therefore sorts every object's keys.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::IoError;

/// Canonical bytes of any serializable value.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, IoError> {
    let v = serde_json::to_value(value)?;
    Ok(serde_json::to_vec(&v)?)
}

/// Replace `path` with `bytes` in one step: the data is written and synced to
/// a temp file in the destination directory, then renamed over the target.
pub fn write_bytes_atomic(path: &Path, bytes: &[u8]) -> Result<(), IoError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .map_err(|e| IoError::Path(format!("{}: {}", path.display(), e.error)))?;
    Ok(())
}
