//! Random [`Int128`] values.
//!
//! `StandardUniform` covers the full range, so `rng.random::<Int128>()`
//! works with any [`Rng`]. The bounded samplers reject and redraw instead of
//! reducing with a bias.

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use tracing::trace;

use crate::error::{Int128Error, Result};
use crate::int128::Int128;

/// Largest supported magnitude for [`random_with_magnitude`].
pub const MAX_MAGNITUDE: u32 = 126;

impl Distribution<Int128> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Int128 {
        Int128::from_words(rng.random(), rng.random())
    }
}

/// Uniform over `MIN_VALUE..=MAX_VALUE`, from the thread-local generator.
pub fn random() -> Int128 {
    rand::rng().random()
}

/// Uniform in `[0, bound)`.
pub fn random_below<R: Rng + ?Sized>(rng: &mut R, bound: Int128) -> Result<Int128> {
    if !bound.is_positive() {
        return Err(Int128Error::InvalidArgument("bound must be positive"));
    }

    let mask = bound.wrapping_decrement();
    if bound.count_ones() == 1 {
        return Ok(rng.random::<Int128>() & mask);
    }

    // Draw 127-bit values and reject those in the final, partial copy of
    // `[0, bound)`, detected by `value - result + mask` overflowing.
    let mut retries = 0u32;
    loop {
        let value = rng.random::<Int128>().shift_right_unsigned(1);
        let result = value.try_rem(bound)?;
        if !value.wrapping_add(mask).wrapping_sub(result).is_negative() {
            if retries > 0 {
                trace!(retries, "random_below rejected samples");
            }
            return Ok(result);
        }
        retries += 1;
    }
}

/// Uniform in `[2^(magnitude - 1), 2^magnitude)`; `0` for magnitude 0.
pub fn random_with_magnitude<R: Rng + ?Sized>(rng: &mut R, magnitude: u32) -> Result<Int128> {
    match magnitude {
        0 => Ok(Int128::ZERO),
        1 => Ok(Int128::ONE),
        m if m > MAX_MAGNITUDE => Err(Int128Error::InvalidArgument("magnitude must be in 0..=126")),
        m => {
            let base = Int128::ONE.shift_left(m - 1);
            Ok(base.wrapping_add(random_below(rng, base)?))
        }
    }
}
