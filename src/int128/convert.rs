//! Conversions to and from primitive integers, big-endian bytes and
//! [`BigInt`].

use num_bigint::BigInt;

use super::Int128;
use crate::arith::words;
use crate::error::{Int128Error, Result};

const WORD_BYTES: usize = 8;

impl Int128 {
    /// Low 64 bits, reinterpreted as signed.
    #[inline]
    pub const fn as_i64(self) -> i64 {
        self.low as i64
    }

    pub fn try_to_i64(self) -> Result<i64> {
        if !self.fits_in_i64() {
            return Err(Int128Error::OutOfRange { target: "i64" });
        }
        Ok(self.low as i64)
    }

    pub fn to_be_bytes(self) -> [u8; 16] {
        let mut bytes = [0u8; Self::BYTES];
        bytes[..WORD_BYTES].copy_from_slice(&self.high.to_be_bytes());
        bytes[WORD_BYTES..].copy_from_slice(&self.low.to_be_bytes());
        bytes
    }

    pub fn from_be_bytes(bytes: [u8; 16]) -> Self {
        let (high, low) = split_words(&bytes);
        Self::from_words(high, low)
    }

    /// Reads a big-endian two's-complement integer of any length.
    ///
    /// Fewer than 16 bytes are sign-extended from the first byte. For more
    /// than 16, every extra leading byte must be the sign extension of the
    /// last 16 or the value does not fit ([`Int128Error::Overflow`]). An empty
    /// slice is [`Int128Error::InvalidFormat`].
    pub fn try_from_be_slice(bytes: &[u8]) -> Result<Self> {
        let Some(&first) = bytes.first() else {
            return Err(Int128Error::InvalidFormat);
        };

        if bytes.len() >= Self::BYTES {
            let (extra, tail) = bytes.split_at(bytes.len() - Self::BYTES);
            let (high, low) = split_words(tail);
            let sign = (high >> 63) as u8;
            if extra.iter().any(|&byte| byte != sign) {
                return Err(Int128Error::Overflow);
            }
            return Ok(Self::from_words(high, low));
        }

        let fill = if (first as i8) < 0 { 0xFF } else { 0x00 };
        let mut padded = [fill; 16];
        padded[Self::BYTES - bytes.len()..].copy_from_slice(bytes);
        Ok(Self::from_be_bytes(padded))
    }
}

/// Splits exactly 16 big-endian bytes into `(high, low)`.
fn split_words(bytes: &[u8]) -> (i64, u64) {
    let mut high = [0u8; WORD_BYTES];
    let mut low = [0u8; WORD_BYTES];
    high.copy_from_slice(&bytes[..WORD_BYTES]);
    low.copy_from_slice(&bytes[WORD_BYTES..]);
    (i64::from_be_bytes(high), u64::from_be_bytes(low))
}

// --- 기본 정수 타입 ---

impl From<i32> for Int128 {
    fn from(value: i32) -> Self {
        Self::from_i64(value as i64)
    }
}

impl From<i64> for Int128 {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u64> for Int128 {
    fn from(value: u64) -> Self {
        Self::from_words(0, value)
    }
}

impl From<i128> for Int128 {
    fn from(value: i128) -> Self {
        let (high, low) = words::split(value);
        Self::from_words(high, low)
    }
}

impl From<Int128> for i128 {
    fn from(value: Int128) -> Self {
        words::join(value.high, value.low)
    }
}

impl TryFrom<Int128> for i64 {
    type Error = Int128Error;

    fn try_from(value: Int128) -> Result<Self> {
        value.try_to_i64()
    }
}

// --- BigInt ---

impl From<Int128> for BigInt {
    fn from(value: Int128) -> Self {
        BigInt::from_signed_bytes_be(&value.to_be_bytes())
    }
}

impl TryFrom<&BigInt> for Int128 {
    type Error = Int128Error;

    fn try_from(value: &BigInt) -> Result<Self> {
        Self::try_from_be_slice(&value.to_signed_bytes_be())
            .map_err(|_| Int128Error::OutOfRange { target: "Int128" })
    }
}

impl TryFrom<BigInt> for Int128 {
    type Error = Int128Error;

    fn try_from(value: BigInt) -> Result<Self> {
        Self::try_from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i64_conversions() {
        assert_eq!(Int128::from(i64::MIN).try_to_i64(), Ok(i64::MIN));
        assert_eq!(
            Int128::from(i64::MAX as i128 + 1).try_to_i64(),
            Err(Int128Error::OutOfRange { target: "i64" })
        );
        assert_eq!(i64::try_from(Int128::from(-3)), Ok(-3));
        assert_eq!(Int128::from_words(5, u64::MAX).as_i64(), -1);
        assert_eq!(Int128::from(u64::MAX), Int128::from_words(0, u64::MAX));
    }

    #[test]
    fn test_be_bytes_layout() {
        let value = Int128::from(0x0102_0304_0506_0708_090A_0B0C_0D0E_0F10i128);
        let bytes = value.to_be_bytes();
        assert_eq!(bytes, [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]);
        assert_eq!(Int128::from_be_bytes(bytes), value);
        assert_eq!(Int128::from(-2).to_be_bytes(), (-2i128).to_be_bytes());
    }

    #[test]
    fn test_short_slices_sign_extend() {
        assert_eq!(Int128::try_from_be_slice(&[0x7F]), Ok(Int128::from(127)));
        assert_eq!(Int128::try_from_be_slice(&[0x80]), Ok(Int128::from(-128)));
        assert_eq!(Int128::try_from_be_slice(&[0xFF, 0x00]), Ok(Int128::from(-256)));
        assert_eq!(
            Int128::try_from_be_slice(&[0x80, 0, 0, 0, 0, 0, 0, 0]),
            Ok(Int128::from(i64::MIN))
        );
        assert_eq!(
            Int128::try_from_be_slice(&[0x01, 0, 0, 0, 0, 0, 0, 0, 0]),
            Ok(Int128::from(1i128 << 64))
        );
        assert_eq!(
            Int128::try_from_be_slice(&[0xFF, 0x7F, 0, 0, 0, 0, 0, 0, 0, 0]),
            Ok(Int128::from(-(0x81i128 << 64)))
        );
    }

    #[test]
    fn test_long_slices() {
        let mut bytes = vec![0xFF; 4];
        bytes.extend_from_slice(&(-5i128).to_be_bytes());
        assert_eq!(Int128::try_from_be_slice(&bytes), Ok(Int128::from(-5)));

        let mut bytes = vec![0x00; 4];
        bytes.extend_from_slice(&i128::MAX.to_be_bytes());
        assert_eq!(Int128::try_from_be_slice(&bytes), Ok(Int128::MAX_VALUE));

        // A positive 17-byte value whose low 16 bytes look negative.
        let mut bytes = vec![0x00];
        bytes.extend_from_slice(&i128::MIN.to_be_bytes());
        assert_eq!(Int128::try_from_be_slice(&bytes), Err(Int128Error::Overflow));

        let mut bytes = vec![0x01, 0x00];
        bytes.extend_from_slice(&[0u8; 16]);
        assert_eq!(Int128::try_from_be_slice(&bytes), Err(Int128Error::Overflow));
    }

    #[test]
    fn test_empty_slice() {
        assert_eq!(Int128::try_from_be_slice(&[]), Err(Int128Error::InvalidFormat));
    }

    #[test]
    fn test_big_int() {
        for value in [0, 1, -1, i128::MAX, i128::MIN, 1 << 64, -(1 << 64) - 1] {
            let big = BigInt::from(Int128::from(value));
            assert_eq!(big, BigInt::from(value));
            assert_eq!(Int128::try_from(&big), Ok(Int128::from(value)));
        }

        let too_big = BigInt::from(i128::MAX) + 1;
        assert_eq!(
            Int128::try_from(too_big),
            Err(Int128Error::OutOfRange { target: "Int128" })
        );
        let too_small = BigInt::from(i128::MIN) - 1;
        assert!(matches!(Int128::try_from(&too_small), Err(Int128Error::OutOfRange { .. })));
    }
}
