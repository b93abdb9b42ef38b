//! Word-pair primitives.
//!
//! A 128-bit two's-complement value is carried as `(high, low)`: `high` holds
//! the sign and the upper 64 bits, `low` the lower 64 bits read as unsigned.
//! Each function takes the operand pairs explicitly and produces one word of
//! the result, so callers compose a full value from a `*_high` / `*_low` pair.
//!
//! Shift amounts must be in `0..128`.

use std::cmp::Ordering;

use super::wide_arith::{unsigned_borrow, unsigned_carry, unsigned_multiply_high};

/// Whether `[high, low]` has at most 64 significant bits, i.e. fits in an `i64`.
#[inline(always)]
pub const fn in_i64_range(high: i64, low: u64) -> bool {
    high == (low as i64) >> 63
}

#[inline(always)]
pub const fn is_zero(high: i64, low: u64) -> bool {
    (high as u64 | low) == 0
}

/// Helper to combine two words into a native `i128`.
#[inline(always)]
pub const fn join(high: i64, low: u64) -> i128 {
    ((high as i128) << 64) | (low as i128)
}

/// Splits a native `i128` into `(high, low)`.
#[inline(always)]
pub const fn split(value: i128) -> (i64, u64) {
    ((value >> 64) as i64, value as u64)
}

// --- 비교 ---

/// Signed comparison: the high words decide, the low words break ties as unsigned.
#[inline]
pub fn compare(a_high: i64, a_low: u64, b_high: i64, b_low: u64) -> Ordering {
    a_high.cmp(&b_high).then(a_low.cmp(&b_low))
}

/// Comparison of both pairs read as unsigned 128-bit magnitudes.
#[inline]
pub fn compare_unsigned(a_high: i64, a_low: u64, b_high: i64, b_low: u64) -> Ordering {
    (a_high as u64).cmp(&(b_high as u64)).then(a_low.cmp(&b_low))
}

// --- 덧셈 / 뺄셈 ---

#[inline(always)]
pub fn add_high(a_high: i64, a_low: u64, b_high: i64, b_low: u64) -> i64 {
    a_high
        .wrapping_add(b_high)
        .wrapping_add(unsigned_carry(a_low, b_low) as i64)
}

#[inline(always)]
pub const fn add_low(a_low: u64, b_low: u64) -> u64 {
    a_low.wrapping_add(b_low)
}

#[inline(always)]
pub fn subtract_high(a_high: i64, a_low: u64, b_high: i64, b_low: u64) -> i64 {
    a_high
        .wrapping_sub(b_high)
        .wrapping_sub(unsigned_borrow(a_low, b_low) as i64)
}

#[inline(always)]
pub const fn subtract_low(a_low: u64, b_low: u64) -> u64 {
    a_low.wrapping_sub(b_low)
}

/// Two operands of the same sign produced a result of the other sign.
#[inline(always)]
pub const fn add_overflowed(a_high: i64, b_high: i64, result_high: i64) -> bool {
    ((result_high ^ a_high) & (result_high ^ b_high)) < 0
}

/// Operands of different signs produced a result whose sign differs from the minuend.
#[inline(always)]
pub const fn subtract_overflowed(a_high: i64, b_high: i64, result_high: i64) -> bool {
    ((a_high ^ b_high) & (a_high ^ result_high)) < 0
}

#[inline(always)]
pub const fn increment_high(high: i64, low: u64) -> i64 {
    high.wrapping_add((low == u64::MAX) as i64)
}

#[inline(always)]
pub const fn increment_low(low: u64) -> u64 {
    low.wrapping_add(1)
}

#[inline(always)]
pub const fn decrement_high(high: i64, low: u64) -> i64 {
    high.wrapping_sub((low == 0) as i64)
}

#[inline(always)]
pub const fn decrement_low(low: u64) -> u64 {
    low.wrapping_sub(1)
}

#[inline(always)]
pub const fn negate_high(high: i64, low: u64) -> i64 {
    high.wrapping_neg().wrapping_sub((low != 0) as i64)
}

#[inline(always)]
pub const fn negate_low(low: u64) -> u64 {
    low.wrapping_neg()
}

// --- 곱셈 ---

/// High word of the truncated 128x128 product.
///
/// Only three partial products reach the high word: the carry-out of
/// `a_low * b_low` and the low halves of the two cross terms.
#[inline(always)]
pub const fn multiply_high(a_high: i64, a_low: u64, b_high: i64, b_low: u64) -> i64 {
    let z1_high = unsigned_multiply_high(a_low, b_low);
    let z2_low = a_low.wrapping_mul(b_high as u64);
    let z3_low = (a_high as u64).wrapping_mul(b_low);

    z1_high.wrapping_add(z2_low).wrapping_add(z3_low) as i64
}

#[inline(always)]
pub const fn multiply_low(a_low: u64, b_low: u64) -> u64 {
    a_low.wrapping_mul(b_low)
}

// --- 시프트 ---

#[inline(always)]
pub const fn shift_left_high(high: i64, low: u64, shift: u32) -> i64 {
    if shift < 64 {
        // `low >> 1 >> (63 - shift)` is `low >> (64 - shift)` without the
        // out-of-range shift at `shift == 0`.
        (high << shift) | ((low >> 1) >> (63 - shift)) as i64
    } else {
        (low << (shift - 64)) as i64
    }
}

#[inline(always)]
pub const fn shift_left_low(low: u64, shift: u32) -> u64 {
    if shift < 64 { low << shift } else { 0 }
}

#[inline(always)]
pub const fn shift_right_unsigned_high(high: i64, shift: u32) -> i64 {
    if shift < 64 {
        ((high as u64) >> shift) as i64
    } else {
        0
    }
}

#[inline(always)]
pub const fn shift_right_unsigned_low(high: i64, low: u64, shift: u32) -> u64 {
    if shift < 64 {
        (((high as u64) << 1) << (63 - shift)) | (low >> shift)
    } else {
        (high as u64) >> (shift - 64)
    }
}

#[inline(always)]
pub const fn shift_right_high(high: i64, shift: u32) -> i64 {
    if shift < 64 { high >> shift } else { high >> 63 }
}

#[inline(always)]
pub const fn shift_right_low(high: i64, low: u64, shift: u32) -> u64 {
    if shift < 64 {
        (((high as u64) << 1) << (63 - shift)) | (low >> shift)
    } else {
        (high >> (shift - 64)) as u64
    }
}

// --- 비트 카운트 ---

#[inline(always)]
pub const fn leading_zeros(high: i64, low: u64) -> u32 {
    let count = high.leading_zeros();
    if count == 64 {
        count + low.leading_zeros()
    } else {
        count
    }
}

#[inline(always)]
pub const fn trailing_zeros(high: i64, low: u64) -> u32 {
    let count = low.trailing_zeros();
    if count == 64 {
        count + high.trailing_zeros()
    } else {
        count
    }
}

#[inline(always)]
pub const fn count_ones(high: i64, low: u64) -> u32 {
    high.count_ones() + low.count_ones()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALUES: [i128; 12] = [
        0,
        1,
        -1,
        i64::MAX as i128,
        i64::MIN as i128,
        i64::MAX as i128 + 1,
        i64::MIN as i128 - 1,
        u64::MAX as i128,
        i128::MAX,
        i128::MIN,
        0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210,
        -0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210,
    ];

    #[test]
    fn test_join_split() {
        for &v in &VALUES {
            let (high, low) = split(v);
            assert_eq!(join(high, low), v);
        }
    }

    #[test]
    fn test_add_subtract_words() {
        for &a in &VALUES {
            for &b in &VALUES {
                let (ah, al) = split(a);
                let (bh, bl) = split(b);

                let sum = join(add_high(ah, al, bh, bl), add_low(al, bl));
                assert_eq!(sum, a.wrapping_add(b));
                let sum_high = add_high(ah, al, bh, bl);
                assert_eq!(add_overflowed(ah, bh, sum_high), a.checked_add(b).is_none());

                let diff = join(subtract_high(ah, al, bh, bl), subtract_low(al, bl));
                assert_eq!(diff, a.wrapping_sub(b));
                let diff_high = subtract_high(ah, al, bh, bl);
                assert_eq!(subtract_overflowed(ah, bh, diff_high), a.checked_sub(b).is_none());
            }
        }
    }

    #[test]
    fn test_multiply_words() {
        for &a in &VALUES {
            for &b in &VALUES {
                let (ah, al) = split(a);
                let (bh, bl) = split(b);
                let product = join(multiply_high(ah, al, bh, bl), multiply_low(al, bl));
                assert_eq!(product, a.wrapping_mul(b), "{a} * {b}");
            }
        }
    }

    #[test]
    fn test_increment_decrement_negate() {
        for &v in &VALUES {
            let (h, l) = split(v);
            assert_eq!(join(increment_high(h, l), increment_low(l)), v.wrapping_add(1));
            assert_eq!(join(decrement_high(h, l), decrement_low(l)), v.wrapping_sub(1));
            assert_eq!(join(negate_high(h, l), negate_low(l)), v.wrapping_neg());
        }
    }

    #[test]
    fn test_shifts_cross_word_boundary() {
        for &v in &VALUES {
            let (h, l) = split(v);
            for shift in 0..128 {
                assert_eq!(
                    join(shift_left_high(h, l, shift), shift_left_low(l, shift)),
                    v << shift,
                    "{v} << {shift}"
                );
                assert_eq!(
                    join(shift_right_high(h, shift), shift_right_low(h, l, shift)),
                    v >> shift,
                    "{v} >> {shift}"
                );
                assert_eq!(
                    join(shift_right_unsigned_high(h, shift), shift_right_unsigned_low(h, l, shift)),
                    ((v as u128) >> shift) as i128,
                    "{v} >>> {shift}"
                );
            }
        }
    }

    #[test]
    fn test_counts() {
        for &v in &VALUES {
            let (h, l) = split(v);
            assert_eq!(leading_zeros(h, l), v.leading_zeros());
            assert_eq!(trailing_zeros(h, l), v.trailing_zeros());
            assert_eq!(count_ones(h, l), v.count_ones());
        }
    }

    #[test]
    fn test_compare() {
        for &a in &VALUES {
            for &b in &VALUES {
                let (ah, al) = split(a);
                let (bh, bl) = split(b);
                assert_eq!(compare(ah, al, bh, bl), a.cmp(&b));
                assert_eq!(compare_unsigned(ah, al, bh, bl), (a as u128).cmp(&(b as u128)));
            }
        }
    }

    #[test]
    fn test_in_i64_range() {
        for &v in &VALUES {
            let (h, l) = split(v);
            assert_eq!(in_i64_range(h, l), i64::try_from(v).is_ok());
        }
        assert!(is_zero(0, 0));
        assert!(!is_zero(0, 1));
        assert!(!is_zero(i64::MIN, 0));
    }
}
