//! This module contains the pure, stateless kernel for rail fence encoding.
//!
//! Each element is appended to the rail chosen by the zig-zag generator, then
//! the rails are concatenated top to bottom. Output is always a permutation of
//! the input with the same length.

use crate::error::RailFenceError;
use crate::kernels::zigzag::{rail_lengths, ZigZag};
use crate::kernels::{is_identity, validate_rails};

/// Distributes `input` across `rails` and writes the rails, top first, to `output_buf`.
pub fn encode<T: Copy>(
    input: &[T],
    rails: usize,
    output_buf: &mut Vec<T>,
) -> Result<(), RailFenceError> {
    validate_rails(input.len(), rails)?;
    output_buf.clear();
    if is_identity(input.len(), rails) {
        output_buf.extend_from_slice(input);
        return Ok(());
    }

    let mut fence: Vec<Vec<T>> = rail_lengths(input.len(), rails)
        .into_iter()
        .map(Vec::with_capacity)
        .collect();
    for (&value, rail) in input.iter().zip(ZigZag::new(input.len(), rails)) {
        fence[rail].push(value);
    }

    output_buf.reserve(input.len());
    for rail in &fence {
        output_buf.extend_from_slice(rail);
    }

    log::trace!("rail fence encode: {} elements over {} rails", input.len(), rails);
    Ok(())
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn encode_str(message: &str, rails: usize) -> Result<String, RailFenceError> {
        let input: Vec<char> = message.chars().collect();
        let mut output = Vec::new();
        encode(&input, rails, &mut output)?;
        Ok(output.into_iter().collect())
    }

    #[test]
    fn test_known_vector_three_rails() {
        assert_eq!(
            encode_str("WEAREDISCOVEREDFLEEATONCE", 3).unwrap(),
            "WECRLTEERDSOEEFEAOCAIVDEN"
        );
    }

    #[test]
    fn test_known_vector_two_and_four_rails() {
        assert_eq!(encode_str("HELLOWORLD", 2).unwrap(), "HLOOLELWRD");
        // H . . . . . O . . .
        // . E . . . W . R . .
        // . . L . O . . . L .
        // . . . L . . . . . D
        assert_eq!(encode_str("HELLOWORLD", 4).unwrap(), "HOEWRLOLLD");
    }

    #[test]
    fn test_single_rail_is_identity() {
        assert_eq!(encode_str("abc", 1).unwrap(), "abc");
        assert_eq!(encode_str("x", 1).unwrap(), "x");
    }

    #[test]
    fn test_empty_input_any_rails() {
        assert_eq!(encode_str("", 0).unwrap(), "");
        assert_eq!(encode_str("", 3).unwrap(), "");
    }

    #[test]
    fn test_invalid_rail_counts() {
        assert!(matches!(
            encode_str("hello", 0),
            Err(RailFenceError::InvalidRailCount { rails: 0, len: 5 })
        ));
        assert!(matches!(
            encode_str("hello", 5),
            Err(RailFenceError::InvalidRailCount { rails: 5, len: 5 })
        ));
    }

    #[test]
    fn test_output_buffer_is_replaced() {
        let mut output = vec!['z'; 8];
        encode(&['a', 'b', 'c'], 2, &mut output).unwrap();
        assert_eq!(output, vec!['a', 'c', 'b']);
    }

    #[test]
    fn test_multibyte_characters_stay_whole() {
        let encoded = encode_str("ねこcafé", 3).unwrap();
        let mut expected: Vec<char> = "ねこcafé".chars().collect();
        let mut actual: Vec<char> = encoded.chars().collect();
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_generic_over_bytes() {
        let mut output = Vec::new();
        encode(b"abcdef", 2, &mut output).unwrap();
        assert_eq!(output, b"acebdf");
    }
}
