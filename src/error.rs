// In: src/error.rs

//! This module defines the single, unified error type for the entire railfence library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RailFenceError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to our library's logic)
    // =========================================================================
    /// The rail count is zero, or not strictly smaller than a message longer
    /// than one code point.
    #[error("Invalid rail count {rails} for a message of {len} characters (expected 1 <= rails < {len})")]
    InvalidRailCount { rails: usize, len: usize },

    /// A ciphertext does not have the length its record declares.
    #[error("Ciphertext length mismatch: expected {expected} characters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem (e.g., file not found).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically during record or config parsing.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

impl RailFenceError {
    /// True for errors caused by the caller's input rather than the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            RailFenceError::InvalidRailCount { .. } | RailFenceError::LengthMismatch { .. }
        )
    }
}
