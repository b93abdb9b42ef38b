//! Fixed-width 128-bit signed integers built from two 64-bit words.
//!
//! [`Int128`] offers the usual arithmetic in two forms: `wrapping_*`, which
//! truncates to 128 bits, and `try_*`, which reports [`Int128Error::Overflow`]
//! whenever the exact result leaves `[-2^127, 2^127 - 1]`. Division always
//! returns quotient and remainder together and can be pinned to one
//! algorithm with [`DivisionStrategy`].
//!
//! ```
//! use int128::Int128;
//!
//! let a = Int128::from(i64::MAX);
//! let b = a.try_mul(Int128::from(10)).unwrap();
//! assert_eq!(b.to_string(), "92233720368547758070");
//!
//! let result = Int128::MAX_VALUE.try_div_rem(Int128::from(123456)).unwrap();
//! assert_eq!(result.remainder, Int128::from(62527));
//! ```

// 라이브러리의 각 모듈을 선언합니다.
pub mod arith;
pub mod error;
pub mod int128;
pub mod random;

// --- Public API ---
pub use crate::error::{Int128Error, Result};
pub use crate::int128::{DivisionResult, DivisionStrategy, Int128};

// --- 테스트 모듈 ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiply_long_max_by_ten() {
        let product = Int128::from(i64::MAX).try_mul(Int128::from(10)).unwrap();
        assert_eq!(product.to_string(), "92233720368547758070");
    }

    #[test]
    fn test_divide_max_value() {
        let result = Int128::MAX_VALUE.try_div_rem(Int128::from(123456)).unwrap();
        assert_eq!(result.quotient.to_string(), "1378152406205200490309805142851575");
        assert_eq!(result.remainder, Int128::from(62527));
    }

    #[test]
    fn test_negate_min_value_overflows() {
        assert_eq!(Int128::MIN_VALUE.try_neg(), Err(Int128Error::Overflow));
    }

    #[test]
    fn test_bit_count_of_minus_one() {
        assert_eq!(Int128::from(-1).count_ones(), 128);
    }

    #[test]
    fn test_additive_overflow_boundary() {
        assert_eq!(Int128::MAX_VALUE.try_add(Int128::ONE), Err(Int128Error::Overflow));
        assert_eq!(Int128::MIN_VALUE.try_add(Int128::MIN_VALUE), Err(Int128Error::Overflow));
        assert_eq!(Int128::MAX_VALUE.wrapping_add(Int128::ONE), Int128::MIN_VALUE);
    }
}
