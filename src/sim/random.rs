//! Random helpers
//!
//! Stateless; every call draws from the caller's RNG so a seeded source
//! reproduces the same sketch.

use rand::Rng;

use crate::color::HexColor;

/// Uniform integer in `[min, max]` inclusive. Returns `min` when the range
/// is empty.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    if max <= min {
        return min;
    }
    rng.random_range(min..=max)
}

/// Random color built one hex digit at a time
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> HexColor {
    let value = (0..6).fold(0u32, |acc, _| (acc << 4) | rng.random_range(0..16u32));
    HexColor(value)
}
