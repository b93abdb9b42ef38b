//! The 128-bit signed value type.
//!
//! [`Int128`] is a `(high, low)` word pair in two's complement. Every pair is
//! a valid value, and every operation returns a new pair.

mod convert;
mod fmt;
mod ops;

use std::cmp::Ordering;

use crate::arith::multiply::overflowing_multiply;
use crate::arith::{division, words};
use crate::error::{Int128Error, Result};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Int128 {
    high: i64,
    low: u64,
}

/// Quotient and remainder of one truncating division.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DivisionResult {
    pub quotient: Int128,
    /// Zero or carrying the dividend's sign.
    pub remainder: Int128,
}

/// Algorithm used for the general case of a division.
///
/// Every strategy returns the same result; only the speed differs. The
/// degenerate cases (smaller dividend, single-word operands, powers of two)
/// are handled before the strategy is consulted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DivisionStrategy {
    /// Knuth when the dividend is more than
    /// [`Int128::FAST_DIVISION_THRESHOLD`] bits wider than the divisor,
    /// bitwise otherwise.
    #[default]
    Auto,
    /// Shift-and-subtract, one quotient bit per step.
    Bitwise,
    /// Knuth's Algorithm D on base-2^32 digits.
    Knuth,
}

impl Int128 {
    pub const ZERO: Self = Self::from_words(0, 0);
    pub const ONE: Self = Self::from_words(0, 1);
    /// 2^127 - 1
    pub const MAX_VALUE: Self = Self::from_words(i64::MAX, u64::MAX);
    /// -2^127
    pub const MIN_VALUE: Self = Self::from_words(i64::MIN, 0);

    pub const BITS: u32 = 128;
    pub const BYTES: usize = 16;

    /// Width difference, in bits, above which [`DivisionStrategy::Auto`]
    /// switches from bitwise to Knuth division.
    pub const FAST_DIVISION_THRESHOLD: u32 = 15;

    #[inline(always)]
    pub const fn from_words(high: i64, low: u64) -> Self {
        Self { high, low }
    }

    /// Sign-extends `value`.
    #[inline(always)]
    pub const fn from_i64(value: i64) -> Self {
        Self::from_words(value >> 63, value as u64)
    }

    /// Upper word, carrying the sign.
    #[inline(always)]
    pub const fn high(self) -> i64 {
        self.high
    }

    /// Lower word, read as unsigned.
    #[inline(always)]
    pub const fn low(self) -> u64 {
        self.low
    }

    // --- 조회 ---

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.high < 0
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        self.high > 0 || (self.high == 0 && self.low != 0)
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        words::is_zero(self.high, self.low)
    }

    /// Whether the value is in `i64::MIN..=i64::MAX`.
    #[inline]
    pub const fn fits_in_i64(self) -> bool {
        words::in_i64_range(self.high, self.low)
    }

    #[inline]
    pub const fn count_ones(self) -> u32 {
        words::count_ones(self.high, self.low)
    }

    #[inline]
    pub const fn leading_zeros(self) -> u32 {
        words::leading_zeros(self.high, self.low)
    }

    #[inline]
    pub const fn trailing_zeros(self) -> u32 {
        words::trailing_zeros(self.high, self.low)
    }

    /// Signed three-way comparison, same as [`Ord::cmp`].
    #[inline]
    pub fn compare(self, other: Self) -> Ordering {
        words::compare(self.high, self.low, other.high, other.low)
    }

    /// Compares both values read as unsigned 128-bit integers.
    #[inline]
    pub fn compare_unsigned(self, other: Self) -> Ordering {
        words::compare_unsigned(self.high, self.low, other.high, other.low)
    }

    // --- 시프트 ---

    /// `shift` must be in `0..128`.
    #[inline]
    pub const fn shift_left(self, shift: u32) -> Self {
        debug_assert!(shift < Self::BITS);
        Self::from_words(
            words::shift_left_high(self.high, self.low, shift),
            words::shift_left_low(self.low, shift),
        )
    }

    /// Arithmetic shift; `shift` must be in `0..128`.
    #[inline]
    pub const fn shift_right(self, shift: u32) -> Self {
        debug_assert!(shift < Self::BITS);
        Self::from_words(
            words::shift_right_high(self.high, shift),
            words::shift_right_low(self.high, self.low, shift),
        )
    }

    /// Logical shift; `shift` must be in `0..128`.
    #[inline]
    pub const fn shift_right_unsigned(self, shift: u32) -> Self {
        debug_assert!(shift < Self::BITS);
        Self::from_words(
            words::shift_right_unsigned_high(self.high, shift),
            words::shift_right_unsigned_low(self.high, self.low, shift),
        )
    }

    // --- 덧셈 / 뺄셈 ---

    #[inline]
    pub fn wrapping_add(self, rhs: Self) -> Self {
        Self::from_words(
            words::add_high(self.high, self.low, rhs.high, rhs.low),
            words::add_low(self.low, rhs.low),
        )
    }

    pub fn try_add(self, rhs: Self) -> Result<Self> {
        let result = self.wrapping_add(rhs);
        if words::add_overflowed(self.high, rhs.high, result.high) {
            return Err(Int128Error::Overflow);
        }
        Ok(result)
    }

    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.try_add(rhs).ok()
    }

    #[inline]
    pub fn wrapping_sub(self, rhs: Self) -> Self {
        Self::from_words(
            words::subtract_high(self.high, self.low, rhs.high, rhs.low),
            words::subtract_low(self.low, rhs.low),
        )
    }

    pub fn try_sub(self, rhs: Self) -> Result<Self> {
        let result = self.wrapping_sub(rhs);
        if words::subtract_overflowed(self.high, rhs.high, result.high) {
            return Err(Int128Error::Overflow);
        }
        Ok(result)
    }

    #[inline]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.try_sub(rhs).ok()
    }

    #[inline]
    pub const fn wrapping_increment(self) -> Self {
        Self::from_words(
            words::increment_high(self.high, self.low),
            words::increment_low(self.low),
        )
    }

    pub fn try_increment(self) -> Result<Self> {
        if self == Self::MAX_VALUE {
            return Err(Int128Error::Overflow);
        }
        Ok(self.wrapping_increment())
    }

    #[inline]
    pub const fn wrapping_decrement(self) -> Self {
        Self::from_words(
            words::decrement_high(self.high, self.low),
            words::decrement_low(self.low),
        )
    }

    pub fn try_decrement(self) -> Result<Self> {
        if self == Self::MIN_VALUE {
            return Err(Int128Error::Overflow);
        }
        Ok(self.wrapping_decrement())
    }

    // --- 부호 ---

    /// `MIN_VALUE` negates to itself.
    #[inline]
    pub const fn wrapping_neg(self) -> Self {
        Self::from_words(
            words::negate_high(self.high, self.low),
            words::negate_low(self.low),
        )
    }

    pub fn try_neg(self) -> Result<Self> {
        if self == Self::MIN_VALUE {
            return Err(Int128Error::Overflow);
        }
        Ok(self.wrapping_neg())
    }

    #[inline]
    pub fn checked_neg(self) -> Option<Self> {
        self.try_neg().ok()
    }

    /// Absolute value. `MIN_VALUE` maps to itself, so the result read as
    /// unsigned is always the exact magnitude.
    #[inline]
    pub const fn wrapping_abs(self) -> Self {
        if self.is_negative() {
            self.wrapping_neg()
        } else {
            self
        }
    }

    /// Same as [`Int128::wrapping_abs`].
    #[inline]
    pub const fn abs(self) -> Self {
        self.wrapping_abs()
    }

    pub fn try_abs(self) -> Result<Self> {
        if self == Self::MIN_VALUE {
            return Err(Int128Error::Overflow);
        }
        Ok(self.wrapping_abs())
    }

    // --- 곱셈 ---

    /// Low 128 bits of the product.
    #[inline]
    pub const fn wrapping_mul(self, rhs: Self) -> Self {
        Self::from_words(
            words::multiply_high(self.high, self.low, rhs.high, rhs.low),
            words::multiply_low(self.low, rhs.low),
        )
    }

    pub fn try_mul(self, rhs: Self) -> Result<Self> {
        let ((high, low), overflowed) = overflowing_multiply(self.high, self.low, rhs.high, rhs.low);
        if overflowed {
            return Err(Int128Error::Overflow);
        }
        Ok(Self::from_words(high, low))
    }

    #[inline]
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        self.try_mul(rhs).ok()
    }

    /// Wrapping product with a sign-extended `i64`.
    #[inline]
    pub const fn mul_i64(self, rhs: i64) -> Self {
        self.wrapping_mul(Self::from_i64(rhs))
    }

    /// The full signed 64x64 product, which always fits.
    #[inline]
    pub const fn widening_mul_i64(a: i64, b: i64) -> Self {
        Self::from_i64(a).wrapping_mul(Self::from_i64(b))
    }

    // --- 나눗셈 ---

    /// Truncating division with [`DivisionStrategy::Auto`].
    ///
    /// `MIN_VALUE / -1` wraps to `MIN_VALUE`; only a zero divisor fails.
    pub fn try_div_rem(self, divisor: Self) -> Result<DivisionResult> {
        self.try_div_rem_with(divisor, DivisionStrategy::Auto)
    }

    pub fn try_div_rem_with(self, divisor: Self, strategy: DivisionStrategy) -> Result<DivisionResult> {
        division::divide(self, divisor, strategy)
    }

    pub fn try_div(self, divisor: Self) -> Result<Self> {
        Ok(self.try_div_rem(divisor)?.quotient)
    }

    /// The remainder has the dividend's sign.
    pub fn try_rem(self, divisor: Self) -> Result<Self> {
        Ok(self.try_div_rem(divisor)?.remainder)
    }

    #[inline]
    pub fn checked_div(self, divisor: Self) -> Option<Self> {
        self.try_div(divisor).ok()
    }

    #[inline]
    pub fn checked_rem(self, divisor: Self) -> Option<Self> {
        self.try_rem(divisor).ok()
    }
}

impl Ord for Int128 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(*other)
    }
}

impl PartialOrd for Int128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
