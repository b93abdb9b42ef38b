//! 128x128 multiplication with exact overflow detection.
//!
//! The truncated product needs three partial products of the 64-bit halves:
//!
//! ```text
//! z1 = a_low  * b_low    (full 128 bits)
//! z2 = a_low  * b_high   (only the low word survives truncation)
//! z3 = a_high * b_low    (only the low word survives truncation)
//! ```
//!
//! Deciding whether the *untruncated* product fits in 128 bits needs a bit
//! more of z2/z3, but never the full 256-bit product.

use super::wide_arith::{if_negative, unsigned_borrow, unsigned_carry, unsigned_multiply_high};
use super::words::in_i64_range;

/// The truncated product as `(high, low)` plus whether the exact product
/// overflowed the signed 128-bit range.
pub fn overflowing_multiply(a_high: i64, a_low: u64, b_high: i64, b_low: u64) -> ((i64, u64), bool) {
    let z1_high = unsigned_multiply_high(a_low, b_low);
    let z1_low = a_low.wrapping_mul(b_low);

    let z2_high = unsigned_multiply_high(b_high as u64, a_low);
    let z2_low = a_low.wrapping_mul(b_high as u64);

    let z3_high = unsigned_multiply_high(a_high as u64, b_low);
    let z3_low = (a_high as u64).wrapping_mul(b_low);

    let result_high = z1_high.wrapping_add(z2_low).wrapping_add(z3_low) as i64;
    let result_low = z1_low;

    let partials = Partials {
        z1_high,
        z2_high,
        z2_low,
        z3_high,
        z3_low,
    };
    let overflowed = product_overflows(a_high, a_low, b_high, b_low, &partials, result_high);

    ((result_high, result_low), overflowed)
}

struct Partials {
    z1_high: u64,
    z2_high: u64,
    z2_low: u64,
    z3_high: u64,
    z3_low: u64,
}

fn product_overflows(
    a_high: i64,
    a_low: u64,
    b_high: i64,
    b_low: u64,
    partials: &Partials,
    result_high: i64,
) -> bool {
    let a_narrow = in_i64_range(a_high, a_low);
    let b_narrow = in_i64_range(b_high, b_low);

    // |a|, |b| < 2^63 bounds the product by 2^126.
    if a_narrow && b_narrow {
        return false;
    }

    if !a_narrow && !b_narrow {
        // Both magnitudes are at least 2^63, so anything wider than 65 bits
        // overflows. In the remaining band the product magnitude is in
        // [2^126, 2^128] and only the sign of the wrapped result tells whether
        // it crossed 2^127.
        return (a_high == b_high && result_high <= 0)
            || (a_high != b_high && result_high >= 0)
            || (a_high != 0 && a_high != -1)
            || (b_high != 0 && b_high != -1);
    }

    // Exactly one operand is wide. With the narrow one sign-extended, the
    // product is `w * 2^64 + a_low * b_low` where `w` is the wide operand's
    // high word times the narrow operand plus the two's-complement
    // corrections, so the product fits iff `w + z1_high` fits in 64 bits.
    let (w_high, w_low) = if !a_narrow {
        let w_high = partials
            .z3_high
            .wrapping_sub(if_negative(a_high, b_low))
            .wrapping_sub(if_negative(
                b_low as i64,
                (a_high as u64).wrapping_add(unsigned_borrow(partials.z3_low, a_low)),
            ));
        let w_low = partials.z3_low.wrapping_sub(if_negative(b_low as i64, a_low));
        (w_high, w_low)
    } else {
        let w_high = partials
            .z2_high
            .wrapping_sub(if_negative(b_high, a_low))
            .wrapping_sub(if_negative(
                a_low as i64,
                (b_high as u64).wrapping_add(unsigned_borrow(partials.z2_low, b_low)),
            ));
        let w_low = partials.z2_low.wrapping_sub(if_negative(a_low as i64, b_low));
        (w_high, w_low)
    };

    let t_low = w_low.wrapping_add(partials.z1_high);
    let t_high = w_high.wrapping_add(unsigned_carry(w_low, partials.z1_high));

    !in_i64_range(t_high as i64, t_low)
}
