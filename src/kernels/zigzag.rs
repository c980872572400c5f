//! This module contains the zig-zag index generator shared by the encoder and
//! the decoder.
//!
//! The rail of a position follows a triangle wave with period `2 * (rails - 1)`:
//!
//! ```text
//! row(i) = (rails - 1) - |(i mod 2(rails - 1)) - (rails - 1)|
//! ```
//!
//! Every function here derives from that formula, so both directions agree on
//! the turning points. A single rail is the degenerate wave that stays on rail 0.
//! These helpers do not validate `rails`; callers go through
//! [`super::validate_rails`] first.

//==================================================================================
// 1. Closed-Form Core Logic
//==================================================================================

/// The period of the zig-zag path, `2 * (rails - 1)`, or 1 for a single rail.
#[inline]
pub fn cycle_len(rails: usize) -> usize {
    if rails <= 1 {
        1
    } else {
        2 * (rails - 1)
    }
}

/// Returns the rail that the character at `position` lands on.
#[inline]
pub fn rail_of(position: usize, rails: usize) -> usize {
    if rails <= 1 {
        return 0;
    }
    let peak = rails - 1;
    let phase = position % cycle_len(rails);
    peak - phase.abs_diff(peak)
}

/// Number of characters assigned to each rail for a message of `len` characters.
///
/// Computed per full cycle plus the partial tail: the top and bottom rails are
/// visited once per cycle, every middle rail `r` twice (at phases `r` and
/// `cycle - r`).
pub fn rail_lengths(len: usize, rails: usize) -> Vec<usize> {
    if rails <= 1 {
        return vec![len];
    }
    let cycle = cycle_len(rails);
    let full = len / cycle;
    let rem = len % cycle;
    let bottom = rails - 1;

    (0..rails)
        .map(|rail| {
            if rail == 0 || rail == bottom {
                full + usize::from(rem > rail)
            } else {
                2 * full + usize::from(rem > rail) + usize::from(rem > cycle - rail)
            }
        })
        .collect()
}

/// The inverse mapping: for every rail, the original positions assigned to it,
/// in increasing order. Read rail by rail, this is exactly ciphertext order.
pub fn rail_positions(len: usize, rails: usize) -> Vec<Vec<usize>> {
    let mut positions: Vec<Vec<usize>> = rail_lengths(len, rails)
        .into_iter()
        .map(Vec::with_capacity)
        .collect();
    for (position, rail) in ZigZag::new(len, rails).enumerate() {
        positions[rail].push(position);
    }
    positions
}

//==================================================================================
// 2. Iterator API
//==================================================================================

/// Iterator over the rail index of every position `0..len`.
#[derive(Debug, Clone)]
pub struct ZigZag {
    position: usize,
    len: usize,
    rails: usize,
}

impl ZigZag {
    pub fn new(len: usize, rails: usize) -> Self {
        Self {
            position: 0,
            len,
            rails,
        }
    }
}

impl Iterator for ZigZag {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.position >= self.len {
            return None;
        }
        let rail = rail_of(self.position, self.rails);
        self.position += 1;
        Some(rail)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len.saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ZigZag {}
