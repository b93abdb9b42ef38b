//! 128-by-128 division producing quotient and remainder together.
//!
//! Signed division is reduced to division of magnitudes. The magnitudes are
//! carried in [`Int128`] bit patterns read as unsigned (|`MIN_VALUE`| is
//! 2^127, which only fits that way), so the unsigned comparisons and the
//! logical right shift are used throughout.
//!
//! After the degenerate cases, one of two algorithms runs:
//!
//! - shift-and-subtract long division, one quotient bit per step;
//! - Knuth's Algorithm D over base-2^32 digits, one quotient digit per step,
//!   which wins once the dividend is much wider than the divisor.

use std::cmp::Ordering;

use tracing::trace;

use crate::error::{Int128Error, Result};
use crate::int128::{DivisionResult, DivisionStrategy, Int128};

/// Bits per Algorithm D digit.
const DIGIT_BITS: u32 = 32;
const DIGIT_BASE: u64 = 1 << DIGIT_BITS;
const DIGIT_MASK: u64 = DIGIT_BASE - 1;

/// Truncating signed division. The quotient of `MIN_VALUE / -1` wraps to `MIN_VALUE`.
pub fn divide(dividend: Int128, divisor: Int128, strategy: DivisionStrategy) -> Result<DivisionResult> {
    if divisor.is_zero() {
        return Err(Int128Error::DivideByZero);
    }

    let dividend_negative = dividend.is_negative();
    let divisor_negative = divisor.is_negative();

    let (quotient, remainder) = divide_unsigned(dividend.wrapping_abs(), divisor.wrapping_abs(), strategy);

    let quotient = if dividend_negative != divisor_negative {
        quotient.wrapping_neg()
    } else {
        quotient
    };
    // The remainder keeps the dividend's sign.
    let remainder = if dividend_negative {
        remainder.wrapping_neg()
    } else {
        remainder
    };

    Ok(DivisionResult { quotient, remainder })
}

/// Unsigned division of two 128-bit magnitudes. `divisor` must be non-zero.
pub(crate) fn divide_unsigned(
    dividend: Int128,
    divisor: Int128,
    strategy: DivisionStrategy,
) -> (Int128, Int128) {
    debug_assert!(!divisor.is_zero());

    match dividend.compare_unsigned(divisor) {
        Ordering::Less => return (Int128::ZERO, dividend),
        Ordering::Equal => return (Int128::ONE, Int128::ZERO),
        Ordering::Greater => {}
    }

    if dividend.high() == 0 && divisor.high() == 0 {
        trace!(path = "single_word", "divide");
        return (
            Int128::from_words(0, dividend.low() / divisor.low()),
            Int128::from_words(0, dividend.low() % divisor.low()),
        );
    }

    if divisor == Int128::ONE {
        return (dividend, Int128::ZERO);
    }

    let divisor_leading = divisor.leading_zeros();
    let divisor_trailing = divisor.trailing_zeros();
    if divisor_leading + divisor_trailing == Int128::BITS - 1 {
        trace!(path = "power_of_two", shift = divisor_trailing, "divide");
        return (
            dividend.shift_right_unsigned(divisor_trailing),
            dividend & divisor.wrapping_decrement(),
        );
    }

    let gap = divisor_leading - dividend.leading_zeros();
    let strategy = match strategy {
        DivisionStrategy::Auto if gap > Int128::FAST_DIVISION_THRESHOLD => DivisionStrategy::Knuth,
        DivisionStrategy::Auto => DivisionStrategy::Bitwise,
        forced => forced,
    };

    match strategy {
        DivisionStrategy::Knuth => {
            trace!(path = "knuth", gap, "divide");
            knuth_divide(dividend, divisor)
        }
        _ => {
            trace!(path = "bitwise", gap, "divide");
            bitwise_divide(dividend, divisor)
        }
    }
}

/// Shift-and-subtract long division on unsigned magnitudes.
fn bitwise_divide(dividend: Int128, divisor: Int128) -> (Int128, Int128) {
    if dividend.compare_unsigned(divisor) == Ordering::Less {
        return (Int128::ZERO, dividend);
    }

    // Line the divisor's top bit up with the dividend's.
    let shift = divisor.leading_zeros() - dividend.leading_zeros();
    let mut aligned = divisor.shift_left(shift);
    let mut remainder = dividend;
    let mut quotient = Int128::ZERO;

    for _ in 0..=shift {
        quotient = quotient.shift_left(1);
        if aligned.compare_unsigned(remainder) != Ordering::Greater {
            remainder = remainder.wrapping_sub(aligned);
            quotient |= Int128::ONE;
        }
        aligned = aligned.shift_right_unsigned(1);
    }

    (quotient, remainder)
}

/// Little-endian base-2^32 digits of an unsigned magnitude.
fn to_digits(value: Int128) -> [u32; 4] {
    let high = value.high() as u64;
    let low = value.low();
    [low as u32, (low >> 32) as u32, high as u32, (high >> 32) as u32]
}

fn from_digits(digits: &[u32; 4]) -> Int128 {
    let low = digits[0] as u64 | ((digits[1] as u64) << 32);
    let high = digits[2] as u64 | ((digits[3] as u64) << 32);
    Int128::from_words(high as i64, low)
}

/// Number of digits up to and including the most significant non-zero one.
fn significant_digits(value: Int128) -> usize {
    (Int128::BITS - value.leading_zeros()).div_ceil(DIGIT_BITS) as usize
}

/// Knuth's Algorithm D (TAOCP vol. 2, 4.3.1) on unsigned magnitudes.
fn knuth_divide(dividend: Int128, divisor: Int128) -> (Int128, Int128) {
    let u = to_digits(dividend);
    let v = to_digits(divisor);
    let m = significant_digits(dividend);
    let n = significant_digits(divisor);

    if m < n {
        return (Int128::ZERO, dividend);
    }

    let mut quotient = [0u32; 4];
    let mut remainder = [0u32; 4];

    if n == 1 {
        // Short division by a single digit.
        let d = v[0] as u64;
        let mut carry = 0u64;
        for j in (0..m).rev() {
            let current = (carry << DIGIT_BITS) | u[j] as u64;
            quotient[j] = (current / d) as u32;
            carry = current % d;
        }
        remainder[0] = carry as u32;
        return (from_digits(&quotient), from_digits(&remainder));
    }

    // D1: normalize so the divisor's leading digit has its top bit set. This
    // keeps every quotient digit estimate at most two above the true digit.
    // Shifts of the widened digit by `DIGIT_BITS - s` are zero when `s == 0`.
    let s = v[n - 1].leading_zeros();

    let mut vn = [0u32; 4];
    for i in (1..n).rev() {
        vn[i] = (v[i] << s) | ((v[i - 1] as u64) >> (DIGIT_BITS - s)) as u32;
    }
    vn[0] = v[0] << s;

    let mut un = [0u32; 5];
    un[m] = ((u[m - 1] as u64) >> (DIGIT_BITS - s)) as u32;
    for i in (1..m).rev() {
        un[i] = (u[i] << s) | ((u[i - 1] as u64) >> (DIGIT_BITS - s)) as u32;
    }
    un[0] = u[0] << s;

    let top = vn[n - 1] as u64;
    let next = vn[n - 2] as u64;

    // D2..D7
    for j in (0..=m - n).rev() {
        // D3: estimate from the top two remainder digits over the top divisor digit.
        let numerator = ((un[j + n] as u64) << DIGIT_BITS) | un[j + n - 1] as u64;
        let mut qhat = numerator / top;
        let mut rhat = numerator % top;

        // Correct the estimate with the next divisor digit. Once `rhat` reaches
        // the base the test can no longer fail, and the estimate is below the
        // base when the loop ends.
        while qhat >= DIGIT_BASE || qhat * next > ((rhat << DIGIT_BITS) | un[j + n - 2] as u64) {
            qhat -= 1;
            rhat += top;
            if rhat >= DIGIT_BASE {
                break;
            }
        }

        // D4: multiply and subtract.
        let mut borrow: i64 = 0;
        for i in 0..n {
            let product = qhat * vn[i] as u64;
            let t = un[i + j] as i64 - borrow - (product & DIGIT_MASK) as i64;
            un[i + j] = t as u32;
            borrow = (product >> DIGIT_BITS) as i64 - (t >> DIGIT_BITS);
        }
        let t = un[j + n] as i64 - borrow;
        un[j + n] = t as u32;

        // D5/D6: the estimate was one too large; add the divisor back.
        quotient[j] = qhat as u32;
        if t < 0 {
            quotient[j] = quotient[j].wrapping_sub(1);
            let mut carry = 0u64;
            for i in 0..n {
                let sum = un[i + j] as u64 + vn[i] as u64 + carry;
                un[i + j] = sum as u32;
                carry = sum >> DIGIT_BITS;
            }
            un[j + n] = un[j + n].wrapping_add(carry as u32);
        }
    }

    // D8: unnormalize the remainder.
    for i in 0..n {
        remainder[i] = (un[i] >> s) | ((un[i + 1] as u64) << (DIGIT_BITS - s)) as u32;
    }

    (from_digits(&quotient), from_digits(&remainder))
}
