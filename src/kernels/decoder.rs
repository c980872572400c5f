//! This module contains the pure, stateless kernel for rail fence decoding.
//!
//! The ciphertext keeps only rail membership order, so the per-rail lengths are
//! recomputed in closed form and used to slice the input into one contiguous
//! span per rail. A single walk of the zig-zag path then pulls the next unread
//! element from the span of the current rail.

use crate::error::RailFenceError;
use crate::kernels::zigzag::{rail_lengths, ZigZag};
use crate::kernels::{is_identity, validate_rails};

/// Start offset of every rail's span within the ciphertext.
fn span_offsets(lengths: &[usize]) -> Vec<usize> {
    lengths
        .iter()
        .scan(0usize, |start, &len| {
            let offset = *start;
            *start += len;
            Some(offset)
        })
        .collect()
}

/// Restores the original order of `input`, encoded with `rails`, into `output_buf`.
pub fn decode<T: Copy>(
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

    let lengths = rail_lengths(input.len(), rails);
    debug_assert_eq!(lengths.iter().sum::<usize>(), input.len());

    // Read cursor per rail, starting at the head of its span.
    let mut cursors = span_offsets(&lengths);
    output_buf.reserve(input.len());
    for rail in ZigZag::new(input.len(), rails) {
        let cursor = &mut cursors[rail];
        output_buf.push(input[*cursor]);
        *cursor += 1;
    }

    log::trace!("rail fence decode: {} elements over {} rails", input.len(), rails);
    Ok(())
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::encoder::encode;
    use rand::Rng;

    fn decode_str(cipher: &str, rails: usize) -> Result<String, RailFenceError> {
        let input: Vec<char> = cipher.chars().collect();
        let mut output = Vec::new();
        decode(&input, rails, &mut output)?;
        Ok(output.into_iter().collect())
    }

    #[test]
    fn test_known_vector_three_rails() {
        assert_eq!(
            decode_str("WECRLTEERDSOEEFEAOCAIVDEN", 3).unwrap(),
            "WEAREDISCOVEREDFLEEATONCE"
        );
    }

    #[test]
    fn test_known_vector_four_rails() {
        assert_eq!(decode_str("HOEWRLOLLD", 4).unwrap(), "HELLOWORLD");
    }

    #[test]
    fn test_identity_cases() {
        assert_eq!(decode_str("abc", 1).unwrap(), "abc");
        assert_eq!(decode_str("", 0).unwrap(), "");
        assert_eq!(decode_str("", 7).unwrap(), "");
        assert_eq!(decode_str("q", 1).unwrap(), "q");
    }

    #[test]
    fn test_incompatible_rails_fail_cleanly() {
        assert!(matches!(
            decode_str("abc", 3),
            Err(RailFenceError::InvalidRailCount { rails: 3, len: 3 })
        ));
        assert!(matches!(
            decode_str("abc", 0),
            Err(RailFenceError::InvalidRailCount { rails: 0, len: 3 })
        ));
    }

    #[test]
    fn test_span_offsets() {
        assert_eq!(span_offsets(&[3, 4, 2]), vec![0, 3, 7]);
        assert!(span_offsets(&[]).is_empty());
    }

    #[test]
    fn test_unicode_round_trip() {
        let message = "In the café, a cute ねこ (neko) graphic and 東京タワー at night.";
        let chars: Vec<char> = message.chars().collect();
        for rails in 2..chars.len() {
            let mut cipher = Vec::new();
            encode(&chars, rails, &mut cipher).unwrap();
            let mut plain = Vec::new();
            decode(&cipher, rails, &mut plain).unwrap();
            assert_eq!(plain, chars, "rails={rails}");
        }
    }

    #[test]
    fn test_random_round_trips() {
        let mut rng = rand::rng();
        for _ in 0..200 {
            let len = rng.random_range(2..120);
            let message: Vec<char> = (0..len)
                .map(|_| char::from_u32(rng.random_range(0x20..0x3000)).unwrap_or('?'))
                .collect();
            let rails = rng.random_range(1..len);

            let mut cipher = Vec::new();
            encode(&message, rails, &mut cipher).unwrap();
            assert_eq!(cipher.len(), message.len());

            let mut plain = Vec::new();
            decode(&cipher, rails, &mut plain).unwrap();
            assert_eq!(plain, message, "len={len} rails={rails}");
        }
    }
}
