//! Radix text: `Display`, `FromStr` and the hex/octal/binary formatters.
//!
//! Digits are produced by dividing by the largest power of the radix that
//! fits in one word, so a 128-bit value takes at most three divisions.

use std::fmt;
use std::str::FromStr;

use super::{DivisionStrategy, Int128};
use crate::arith::division::divide_unsigned;
use crate::error::{Int128Error, Result};

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn check_radix(radix: u32) -> Result<()> {
    if !(2..=36).contains(&radix) {
        return Err(Int128Error::InvalidRadix(radix));
    }
    Ok(())
}

/// Largest power of `radix` that fits in a `u64`, and its exponent.
fn word_chunk(radix: u64) -> (u64, usize) {
    let mut power = radix;
    let mut digits = 1;
    while let Some(next) = power.checked_mul(radix) {
        power = next;
        digits += 1;
    }
    (power, digits)
}

/// Digits of `value` read as an unsigned 128-bit integer, most significant first.
fn unsigned_digits(value: Int128, radix: u32) -> String {
    let radix = radix as u64;
    let (power, chunk_digits) = word_chunk(radix);
    let chunk = Int128::from_words(0, power);

    // Least significant digit first; reversed at the end.
    let mut reversed = Vec::with_capacity(Int128::BITS as usize);
    let mut rest = value;
    loop {
        let (quotient, remainder) = divide_unsigned(rest, chunk, DivisionStrategy::Auto);
        let mut part = remainder.low();
        if quotient.is_zero() {
            loop {
                reversed.push(DIGITS[(part % radix) as usize]);
                part /= radix;
                if part == 0 {
                    break;
                }
            }
            break;
        }
        // Inner chunks keep their leading zeros.
        for _ in 0..chunk_digits {
            reversed.push(DIGITS[(part % radix) as usize]);
            part /= radix;
        }
        rest = quotient;
    }

    reversed.iter().rev().map(|&digit| digit as char).collect()
}

impl Int128 {
    /// Signed text in `radix` (2..=36), lower-case digits, `-` for negatives.
    pub fn to_string_radix(self, radix: u32) -> Result<String> {
        check_radix(radix)?;
        let digits = unsigned_digits(self.wrapping_abs(), radix);
        if self.is_negative() {
            return Ok(format!("-{digits}"));
        }
        Ok(digits)
    }

    /// Parses an optionally signed integer in `radix` (2..=36).
    ///
    /// Digits are case-insensitive. Text without digits or with a digit
    /// outside the radix is [`Int128Error::InvalidFormat`]; a value outside
    /// the 128-bit range is [`Int128Error::OutOfRange`].
    pub fn from_str_radix(text: &str, radix: u32) -> Result<Self> {
        check_radix(radix)?;

        let (negative, digits) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        if digits.is_empty() {
            return Err(Int128Error::InvalidFormat);
        }

        let out_of_range = |_| Int128Error::OutOfRange { target: "Int128" };
        let base = Self::from(radix as i64);

        // Accumulate toward negative infinity so MIN_VALUE parses.
        let mut value = Self::ZERO;
        for c in digits.chars() {
            let digit = c.to_digit(radix).ok_or(Int128Error::InvalidFormat)?;
            value = value
                .try_mul(base)
                .and_then(|shifted| shifted.try_sub(Self::from(digit as i64)))
                .map_err(out_of_range)?;
        }

        if negative {
            Ok(value)
        } else {
            value.try_neg().map_err(out_of_range)
        }
    }
}

impl fmt::Display for Int128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.is_negative(), "", &unsigned_digits(self.wrapping_abs(), 10))
    }
}

// Two's-complement bits, like the primitive integers.
macro_rules! impl_radix_fmt {
    ($($trait:ident => $radix:expr, $prefix:expr, $upper:expr;)*) => {
        $(
            impl fmt::$trait for Int128 {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let mut digits = unsigned_digits(*self, $radix);
                    if $upper {
                        digits.make_ascii_uppercase();
                    }
                    f.pad_integral(true, $prefix, &digits)
                }
            }
        )*
    };
}

impl_radix_fmt! {
    Binary => 2, "0b", false;
    Octal => 8, "0o", false;
    LowerHex => 16, "0x", false;
    UpperHex => 16, "0x", true;
}

impl FromStr for Int128 {
    type Err = Int128Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::from_str_radix(text, 10)
    }
}
