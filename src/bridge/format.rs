// In: src/bridge/format.rs

//! Defines the persisted record written after an encryption.
//!
//! The record is a small JSON object, `{ "cipher": <string>, "rails": <integer> }`,
//! so a ciphertext can later be decrypted without re-specifying the rail count.
//! An optional `length` field (count of Unicode scalar values) lets the reader
//! detect a ciphertext that was truncated or edited after it was written.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RailFenceError;

/// A ciphertext together with the rail count needed to decrypt it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CipherRecord {
    pub cipher: String,
    pub rails: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
}

impl CipherRecord {
    pub fn new(cipher: String, rails: usize) -> Self {
        Self {
            cipher,
            rails,
            length: None,
        }
    }

    /// Attaches the current code point count of `cipher` as the declared length.
    pub fn with_length(mut self) -> Self {
        self.length = Some(self.cipher.chars().count());
        self
    }

    /// Fails with `LengthMismatch` when a declared length disagrees with the cipher.
    pub fn check_length(&self) -> Result<(), RailFenceError> {
        if let Some(expected) = self.length {
            let actual = self.cipher.chars().count();
            if actual != expected {
                return Err(RailFenceError::LengthMismatch { expected, actual });
            }
        }
        Ok(())
    }
}

/// Writes `record` as pretty-printed JSON, replacing any existing file.
pub fn save_record(record: &CipherRecord, path: impl AsRef<Path>) -> Result<(), RailFenceError> {
    let json = serde_json::to_string_pretty(record)?;
    fs::write(path.as_ref(), json)?;
    log::info!("wrote cipher record to {}", path.as_ref().display());
    Ok(())
}

pub fn load_record(path: impl AsRef<Path>) -> Result<CipherRecord, RailFenceError> {
    let text = fs::read_to_string(path.as_ref())?;
    let record: CipherRecord = serde_json::from_str(&text)?;
    log::info!(
        "read cipher record from {} ({} rails)",
        path.as_ref().display(),
        record.rails
    );
    Ok(record)
}
