//! Loader: read a local bracket request JSON into a typed `BracketInput`.
//! No network I/O; any `<scheme>://` path is refused before touching the disk.

#![forbid(unsafe_code)]

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::Value;
use tb_core::entities::BracketInput;

use crate::{looks_like_url_strict, IoError};

/// Hard cap on request size (4 MiB).
pub const MAX_INPUT_BYTES: u64 = 4 * 1024 * 1024;

/// Participant lists longer than this are refused before typed parsing.
pub const MAX_LISTED_PARTICIPANTS: usize = 1024;

/// Load and parse a bracket request from a local path.
pub fn load_input(path: &Path) -> Result<BracketInput, IoError> {
    let v = read_json_value_with_limits(path)?;
    parse_input_value(v)
}

/// Parse an already-read request document.
pub fn parse_input_value(v: Value) -> Result<BracketInput, IoError> {
    if !v.is_object() {
        return Err(IoError::Json { pointer: "/".into(), msg: "request must be a JSON object".into() });
    }
    if let Some(ps) = v.get("participants").and_then(Value::as_array) {
        if ps.len() > MAX_LISTED_PARTICIPANTS {
            return Err(IoError::Limit(format!("{} participants listed", ps.len())));
        }
    }
    serde_json::from_value(v).map_err(|e| IoError::Json { pointer: "/".into(), msg: e.to_string() })
}

/// Read a JSON file, refusing URLs and anything over `MAX_INPUT_BYTES`.
pub fn read_json_value_with_limits(path: &Path) -> Result<Value, IoError> {
    let shown = path.to_string_lossy();
    if looks_like_url_strict(&shown) {
        return Err(IoError::Invalid(format!("only local paths are accepted: {shown}")));
    }

    let f = File::open(path).map_err(|e| IoError::Path(format!("{shown}: {e}")))?;
    let mut buf = Vec::new();
    f.take(MAX_INPUT_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| IoError::Path(format!("{shown}: {e}")))?;
    if buf.len() as u64 > MAX_INPUT_BYTES {
        return Err(IoError::Limit(format!("{shown} exceeds {MAX_INPUT_BYTES} bytes")));
    }

    Ok(serde_json::from_slice(&buf)?)
}
