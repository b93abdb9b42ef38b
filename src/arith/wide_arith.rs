//! Widening arithmetic on single 64-bit words.
//!
//! These are the carry, borrow and high-product helpers every word-pair
//! operation is built from. All of them are total over the word domain.

/// A trait for widening arithmetic operations.
pub trait WideningAdd: Sized {
    /// Performs addition that returns the full result as `(low, carry)`.
    fn add_wide(self, rhs: Self) -> (Self, Self);
}

impl WideningAdd for u64 {
    #[inline(always)]
    fn add_wide(self, rhs: Self) -> (u64, u64) {
        let sum = (self as u128) + (rhs as u128);
        (sum as u64, (sum >> 64) as u64)
    }
}

/// Subtraction that reports the borrow out of the top bit.
pub trait BorrowingSub: Sized {
    /// Returns `(difference, borrow)`.
    fn sub_wide(self, rhs: Self) -> (Self, Self);
}

impl BorrowingSub for u64 {
    #[inline(always)]
    fn sub_wide(self, rhs: Self) -> (u64, u64) {
        let (diff, borrow) = self.overflowing_sub(rhs);
        (diff, borrow as u64)
    }
}

/// Carry (0 or 1) out of `a + b`.
#[inline(always)]
pub fn unsigned_carry(a: u64, b: u64) -> u64 {
    a.add_wide(b).1
}

/// Borrow (0 or 1) out of `a - b`.
#[inline(always)]
pub fn unsigned_borrow(a: u64, b: u64) -> u64 {
    a.sub_wide(b).1
}

/// Branchless `if test < 0 { value } else { 0 }`.
#[inline(always)]
pub const fn if_negative(test: i64, value: u64) -> u64 {
    value & ((test >> 63) as u64)
}

/// High 64 bits of the signed 128-bit product `a * b`.
#[inline(always)]
pub const fn multiply_high(a: i64, b: i64) -> i64 {
    ((a as i128 * b as i128) >> 64) as i64
}

/// High 64 bits of the unsigned 128-bit product `a * b`.
///
/// Derived from the signed high product: reading a word with its top bit set
/// as signed under-counts it by 2^64, which under-counts the product by the
/// other operand shifted up one word. Each negative operand adds that back.
#[inline(always)]
pub const fn unsigned_multiply_high(a: u64, b: u64) -> u64 {
    (multiply_high(a as i64, b as i64) as u64)
        .wrapping_add(if_negative(a as i64, b))
        .wrapping_add(if_negative(b as i64, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [u64; 10] = [
        0,
        1,
        2,
        0x7FFF_FFFF_FFFF_FFFF,
        0x8000_0000_0000_0000,
        0xFFFF_FFFF_FFFF_FFFF,
        0xFFFF_FFFF_FFFF_FFFE,
        0x0000_0001_0000_0000,
        0xDEAD_BEEF_CAFE_BABE,
        12345,
    ];

    #[test]
    fn test_carry_and_borrow() {
        for &a in &SAMPLES {
            for &b in &SAMPLES {
                assert_eq!(unsigned_carry(a, b), a.checked_add(b).is_none() as u64);
                assert_eq!(unsigned_borrow(a, b), (a < b) as u64);
            }
        }
    }

    #[test]
    fn test_wide_add_sub_pairs() {
        assert_eq!(u64::MAX.add_wide(1), (0, 1));
        assert_eq!(u64::MAX.add_wide(u64::MAX), (u64::MAX - 1, 1));
        assert_eq!(5u64.add_wide(7), (12, 0));
        assert_eq!(0u64.sub_wide(1), (u64::MAX, 1));
        assert_eq!(7u64.sub_wide(5), (2, 0));
        assert_eq!(unsigned_borrow(0, u64::MAX), 1);
        assert_eq!(unsigned_carry(1 << 63, 1 << 63), 1);
    }

    #[test]
    fn test_if_negative() {
        assert_eq!(if_negative(-1, 42), 42);
        assert_eq!(if_negative(i64::MIN, u64::MAX), u64::MAX);
        assert_eq!(if_negative(0, 42), 0);
        assert_eq!(if_negative(i64::MAX, 42), 0);
    }

    #[test]
    fn test_unsigned_multiply_high() {
        for &a in &SAMPLES {
            for &b in &SAMPLES {
                let expected = ((a as u128 * b as u128) >> 64) as u64;
                assert_eq!(unsigned_multiply_high(a, b), expected, "{a:#x} * {b:#x}");
            }
        }
    }

    #[test]
    fn test_multiply_high() {
        assert_eq!(multiply_high(i64::MIN, i64::MIN), 1 << 62);
        assert_eq!(multiply_high(-1, 1), -1);
        assert_eq!(multiply_high(i64::MAX, 2), 0);
    }
}
