//! This module serves as the public API and dispatcher for the pure, stateless
//! rail fence kernels.
//!
//! It declares the kernel sub-modules, owns the precondition checks they share,
//! and provides a single `dispatch` entry point for both directions. Kernels are
//! generic over the element type so that callers decide what a "character" is;
//! the bridge layer always feeds them Unicode scalar values (`char`).

use crate::error::RailFenceError;

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// The shared zig-zag index generator.
pub mod zigzag;

pub mod decoder;
pub mod encoder;

//==================================================================================
// 2. Shared Preconditions
//==================================================================================

/// Which way a kernel should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

/// Checks that `rails` is usable for an input of `len` elements.
///
/// Empty input is accepted for any rail count. Otherwise `rails` must be at
/// least 1, and for inputs longer than one element it must be strictly smaller
/// than `len`.
pub fn validate_rails(len: usize, rails: usize) -> Result<(), RailFenceError> {
    if len == 0 {
        return Ok(());
    }
    if rails == 0 || (len > 1 && rails >= len) {
        return Err(RailFenceError::InvalidRailCount { rails, len });
    }
    Ok(())
}

/// True when the transform is the identity: a single rail, or nothing to reorder.
#[inline]
pub(crate) fn is_identity(len: usize, rails: usize) -> bool {
    len <= 1 || rails == 1
}

//==================================================================================
// 3. Public API (Unified Dispatcher)
//==================================================================================

/// The single, unified dispatcher for both directions.
pub fn dispatch<T: Copy>(
    direction: Direction,
    input: &[T],
    rails: usize,
    output_buf: &mut Vec<T>,
) -> Result<(), RailFenceError> {
    match direction {
        Direction::Encode => encoder::encode(input, rails, output_buf),
        Direction::Decode => decoder::decode(input, rails, output_buf),
    }
}
