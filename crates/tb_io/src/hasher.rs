//! crates/tb_io/src/hasher.rs
//!
//! Bracket fingerprint: `BR:` + lowercase SHA-256 hex of the canonical JSON
//! bytes. Hashing the exact bytes that get written means the printed id
//! matches `sha256sum` of the output file.

#![forbid(unsafe_code)]

use sha2::{Digest, Sha256};

pub const BRACKET_ID_PREFIX: &str = "BR:";

/// Lowercase SHA-256 hex over raw bytes.
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// `BR:<hex>` from canonical bracket bytes already in hand.
pub fn bracket_id_from_bytes(canonical: &[u8]) -> String {
    format!("{BRACKET_ID_PREFIX}{}", sha256_hex(canonical))
}
