// In: src/bridge/display.rs

//! Renders a message written diagonally across its rails, e.g. for 3 rails:
//!
//! ```text
//! W . . . E . . . C
//! . E . R . D . S .
//! . . A . . . I . .
//! ```

use crate::error::RailFenceError;
use crate::kernels::{is_identity, validate_rails};
use crate::kernels::zigzag::ZigZag;

const EMPTY_CELL: char = '.';

/// Draws `message` on `rails` rails, one line per rail, cells separated by a space.
///
/// When the transform is the identity (one rail, or a single character) the
/// message is drawn on one line.
pub fn render_fence(message: &str, rails: usize) -> Result<String, RailFenceError> {
    let chars: Vec<char> = message.chars().collect();
    validate_rails(chars.len(), rails)?;
    if chars.is_empty() {
        return Ok(String::new());
    }

    let rows = if is_identity(chars.len(), rails) { 1 } else { rails };
    let mut grid = vec![vec![EMPTY_CELL; chars.len()]; rows];
    for (column, rail) in ZigZag::new(chars.len(), rows).enumerate() {
        grid[rail][column] = chars[column];
    }

    let lines: Vec<String> = grid
        .iter()
        .map(|row| {
            row.iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    Ok(lines.join("\n"))
}
