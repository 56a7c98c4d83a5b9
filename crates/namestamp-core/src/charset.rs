//! Ordering alphabet for the lexicographic encoder
//!
//! The charset is a fixed, ordered sequence: space, digits, uppercase
//! letters, underscore, dash, period. `rank` gives a character's position
//! in that order; characters outside the set take the maximum rank and
//! therefore sort as "largest".
//!
//! The encoding radix is one more than the largest digit value
//! (`rank + 1`), so a positional fraction built from these digits stays
//! strictly below 1.0 for every finite string.

/// The ordered alphabet.
pub const CHARSET: &str = " 0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ_-.";

/// Maximum rank, assigned to every character outside the charset.
pub const MAX_RANK: u32 = CHARSET.len() as u32 - 1;

/// Radix of the positional fraction encoding.
pub const RADIX: u32 = CHARSET.len() as u32 + 1;

/// Rank of a character within the ordering alphabet.
///
/// INVARIANT: `rank(c) <= MAX_RANK` for all `c`.
#[inline]
pub fn rank(c: char) -> u32 {
    CHARSET.find(c).map(|i| i as u32).unwrap_or(MAX_RANK)
}
