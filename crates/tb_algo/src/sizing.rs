// crates/tb_algo/src/sizing.rs
//
// Bracket shape arithmetic. Slot counts are powers of two from the supported
// set; everything else (round count, per-round match count) derives from it.

use tb_core::variables::{is_supported_size, MAX_BRACKET_SIZE, SUPPORTED_BRACKET_SIZES};

/// Smallest supported slot count that can hold `count` participants.
/// Returns `None` when `count` exceeds the largest supported size.
pub fn covering_size(count: usize) -> Option<usize> {
    if count > MAX_BRACKET_SIZE {
        return None;
    }
    SUPPORTED_BRACKET_SIZES.iter().copied().find(|&s| s >= count)
}

/// True iff `count` fills a supported bracket exactly (no byes needed).
#[inline]
pub fn is_exact_fit(count: usize) -> bool {
    is_supported_size(count)
}

/// Number of rounds, `log2(slots)`. `slots` must be a power of two.
#[inline]
pub fn round_count(slots: usize) -> u32 {
    debug_assert!(slots.is_power_of_two());
    slots.trailing_zeros()
}

/// Matches in 1-based `round`: `slots / 2^round`.
#[inline]
pub fn match_count(slots: usize, round: u32) -> usize {
    slots >> round
}

/// Number of bye slots when `count` participants fill `slots`.
#[inline]
pub fn bye_count(slots: usize, count: usize) -> usize {
    slots.saturating_sub(count)
}
