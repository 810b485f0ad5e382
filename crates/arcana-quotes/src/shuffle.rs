//! Seeded shuffling.
//!
//! Seeds are real numbers of which only the fractional magnitude matters:
//! `0.25`, `-0.25` and `3.25` all shuffle the same way. The generator is the
//! classic `(state * 9301 + 49297) mod 233280` linear-congruential sequence,
//! kept so that seeds stored by existing readings keep producing the same
//! picks.

use std::f64::consts::E;

/// The golden ratio, used to derive a seed for named quotes.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Multiplier used to derive a seed for generic filler quotes.
pub const EULER: f64 = E;

/// Reduce a seed to its fractional magnitude in `[0, 1)`.
///
/// NaN and infinities become `0.0`.
pub fn normalize_seed(seed: f64) -> f64 {
    normalize_seed_or(seed, 0.0)
}

/// Like [`normalize_seed`], but non-finite seeds are replaced by `fallback`
/// (itself normalized) instead of zero.
pub fn normalize_seed_or(seed: f64, fallback: f64) -> f64 {
    let seed = if seed.is_finite() {
        seed
    } else if fallback.is_finite() {
        fallback
    } else {
        0.0
    };
    seed.abs().fract()
}

/// Derive a second seed from a normalized one by scaling and re-normalizing.
pub fn derive_seed(seed: f64, factor: f64) -> f64 {
    normalize_seed(seed * factor)
}

/// Linear-congruential generator producing fractions in `[0, 1)`.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: f64,
}

impl Lcg {
    const MULTIPLIER: f64 = 9301.0;
    const INCREMENT: f64 = 49297.0;
    const MODULUS: f64 = 233_280.0;

    /// Start a generator from a seed. The seed is normalized first.
    pub fn new(seed: f64) -> Self {
        Self {
            state: normalize_seed(seed),
        }
    }

    /// Advance the generator and return the next fraction.
    pub fn next_fraction(&mut self) -> f64 {
        self.state = (self.state * Self::MULTIPLIER + Self::INCREMENT) % Self::MODULUS;
        self.state / Self::MODULUS
    }

    /// Draw an index in `0..bound`. `bound` must be non-zero.
    pub fn next_index(&mut self, bound: usize) -> usize {
        let r = self.next_fraction();
        ((r * bound as f64).floor() as usize).min(bound - 1)
    }
}

/// Return a seeded permutation of `items`.
///
/// Fisher-Yates from the back: for each `i` from `len - 1` down to `1`, swap
/// position `i` with a drawn position in `0..=i`. The input is left alone.
pub fn shuffle<T: Clone>(items: &[T], seed: f64) -> Vec<T> {
    let mut out = items.to_vec();
    let mut rng = Lcg::new(seed);
    for i in (1..out.len()).rev() {
        let j = rng.next_index(i + 1);
        out.swap(i, j);
    }
    out
}
