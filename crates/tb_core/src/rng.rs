// crates/tb_core/src/rng.rs
//
// Seedable RNG for the `random` seeding policy.
//
// • Randomness enters the engine only through `RandomSource`, so callers and
//   tests can inject a reproducible stream.
// • `SeedRng` wraps ChaCha20 with an explicit 32-byte seed derived from a u64
//   (little-endian bytes in the first 8 positions; the rest 0). This keeps the
//   mapping stable across platforms.
// • Integer-only: unbiased ranges via rejection sampling, no floating point.

use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

/// Source of uniform integers used for shuffles.
pub trait RandomSource {
    /// Unbiased integer in `[0, n)`; `None` if `n == 0`.
    fn gen_range(&mut self, n: u64) -> Option<u64>;

    /// In-place Fisher–Yates shuffle:
    /// for i in (1..len).rev() { j ~ U{0..=i}; swap(i, j) }
    fn shuffle_in_place<T>(&mut self, slice: &mut [T])
    where
        Self: Sized,
    {
        let len = slice.len();
        if len <= 1 {
            return;
        }
        for i in (1..len).rev() {
            // gen_range(i+1) is non-empty; fall back to a no-op swap otherwise.
            let j = self.gen_range(i as u64 + 1).map(|v| v as usize).unwrap_or(i);
            slice.swap(i, j);
        }
    }
}

/// ChaCha20-backed generator with a draw counter.
#[derive(Debug, Clone)]
pub struct SeedRng {
    rng: ChaCha20Rng,
    words_consumed: u128,
}

impl SeedRng {
    /// Construct from a 64-bit seed: `seed.to_le_bytes()` into the first 8
    /// bytes of the ChaCha20 key; the remaining 24 bytes are zero.
    #[inline]
    pub fn from_seed_u64(seed: u64) -> Self {
        let mut seed32 = [0u8; 32];
        seed32[..8].copy_from_slice(&seed.to_le_bytes());
        Self { rng: ChaCha20Rng::from_seed(seed32), words_consumed: 0 }
    }

    /// Seed from operating-system entropy (non-reproducible).
    pub fn from_entropy() -> Self {
        Self { rng: ChaCha20Rng::from_entropy(), words_consumed: 0 }
    }

    /// Total number of 64-bit words drawn so far (saturating).
    #[inline]
    pub fn words_consumed(&self) -> u128 {
        self.words_consumed
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.words_consumed = self.words_consumed.saturating_add(1);
        self.rng.next_u64()
    }
}

impl RandomSource for SeedRng {
    /// Let `threshold = 2^64 mod n` (computed via `wrapping_neg() % n`).
    /// Accept `x` if `x >= threshold`; then `x % n` is uniformly distributed.
    #[inline]
    fn gen_range(&mut self, n: u64) -> Option<u64> {
        if n == 0 {
            return None;
        }
        let threshold = n.wrapping_neg() % n;
        loop {
            let x = self.next_u64();
            if x >= threshold {
                return Some(x % n);
            }
        }
    }
}
