//! Seeded uniform random source.
//!
//! Wraps a ChaCha20 generator behind constructors for OS entropy,
//! integer seeds, and textual seed phrases, so every simulation in the
//! crate can be made reproducible from a string a student types in.

use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

/// FNV-1a offset basis / prime, used to fold seed phrases to integers.
const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// A seeded source of uniform variates backed by ChaCha20.
///
/// The generator is deterministic for a given seed: two sources built
/// from the same phrase produce identical streams. Use
/// [`from_os_entropy`](Self::from_os_entropy) when reproducibility is
/// not wanted.
pub struct UniformSource {
    /// The underlying ChaCha20 generator.
    inner: ChaCha20Rng,
    /// Variates drawn since construction.
    draws: u64,
}

impl UniformSource {
    /// Creates a source seeded from the operating system.
    pub fn from_os_entropy() -> Self {
        let mut seed = [0u8; 32];
        rand_core::OsRng.fill_bytes(&mut seed);
        Self {
            inner: ChaCha20Rng::from_seed(seed),
            draws: 0,
        }
    }

    /// Creates a source from a fixed integer seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: ChaCha20Rng::seed_from_u64(seed),
            draws: 0,
        }
    }

    /// Creates a source from a textual seed phrase.
    ///
    /// The phrase is folded to an integer with FNV-1a; an empty phrase
    /// falls back to OS entropy, matching the convention that a blank
    /// seed field means "not reproducible".
    pub fn from_phrase(phrase: &str) -> Self {
        if phrase.is_empty() {
            return Self::from_os_entropy();
        }
        let mut hash = FNV_OFFSET;
        for byte in phrase.bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        Self::from_seed(hash)
    }

    /// Draws a uniform variate in the half-open interval `(0, 1]`.
    ///
    /// The lower bound is excluded so the result is always a valid
    /// Box-Muller input (`ln` of the value is defined).
    pub fn next_open_unit(&mut self) -> f64 {
        self.draws += 1;
        // 53 significant bits, shifted into (0, 1]
        ((self.inner.next_u64() >> 11) + 1) as f64 * (1.0 / 9_007_199_254_740_992.0)
    }

    /// Draws a uniform variate in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        self.draws += 1;
        (self.inner.next_u64() >> 11) as f64 * (1.0 / 9_007_199_254_740_992.0)
    }

    /// Returns true with probability `p`.
    ///
    /// Callers validate `p`; out-of-range values saturate.
    pub fn bernoulli(&mut self, p: f64) -> bool {
        self.next_unit() < p
    }

    /// Total variates drawn since construction.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl RngCore for UniformSource {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

impl std::fmt::Debug for UniformSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UniformSource")
            .field("draws", &self.draws)
            .finish_non_exhaustive()
    }
}
