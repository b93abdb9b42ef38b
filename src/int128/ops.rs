use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign, Mul,
    MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use super::Int128;

// --- 산술 (wrapping) ---

impl Add for Int128 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        self.wrapping_add(rhs)
    }
}

impl Sub for Int128 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        self.wrapping_sub(rhs)
    }
}

impl Mul for Int128 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.wrapping_mul(rhs)
    }
}

impl Neg for Int128 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.wrapping_neg()
    }
}

/// Truncating division.
///
/// # Panics
///
/// Panics if `rhs` is zero.
impl Div for Int128 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self::Output {
        match self.try_div(rhs) {
            Ok(quotient) => quotient,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Remainder with the dividend's sign.
///
/// # Panics
///
/// Panics if `rhs` is zero.
impl Rem for Int128 {
    type Output = Self;
    fn rem(self, rhs: Self) -> Self::Output {
        match self.try_rem(rhs) {
            Ok(remainder) => remainder,
            Err(err) => panic!("{err}"),
        }
    }
}

// --- 비트 연산 ---

impl Not for Int128 {
    type Output = Self;
    fn not(self) -> Self::Output {
        Self::from_words(!self.high, !self.low)
    }
}

impl BitAnd for Int128 {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_words(self.high & rhs.high, self.low & rhs.low)
    }
}

impl BitOr for Int128 {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_words(self.high | rhs.high, self.low | rhs.low)
    }
}

impl BitXor for Int128 {
    type Output = Self;
    fn bitxor(self, rhs: Self) -> Self::Output {
        Self::from_words(self.high ^ rhs.high, self.low ^ rhs.low)
    }
}

// 시프트 양은 `wrapping_shl`처럼 하위 7비트만 사용합니다.
impl Shl<u32> for Int128 {
    type Output = Self;
    fn shl(self, shift: u32) -> Self::Output {
        self.shift_left(shift & (Self::BITS - 1))
    }
}

/// Arithmetic shift.
impl Shr<u32> for Int128 {
    type Output = Self;
    fn shr(self, shift: u32) -> Self::Output {
        self.shift_right(shift & (Self::BITS - 1))
    }
}

macro_rules! impl_assign {
    ($($trait:ident :: $method:ident => $op:ident :: $op_method:ident ($rhs:ty)),* $(,)?) => {
        $(
            impl $trait<$rhs> for Int128 {
                fn $method(&mut self, rhs: $rhs) {
                    *self = $op::$op_method(*self, rhs);
                }
            }
        )*
    };
}

impl_assign! {
    AddAssign::add_assign => Add::add(Int128),
    SubAssign::sub_assign => Sub::sub(Int128),
    MulAssign::mul_assign => Mul::mul(Int128),
    DivAssign::div_assign => Div::div(Int128),
    RemAssign::rem_assign => Rem::rem(Int128),
    BitAndAssign::bitand_assign => BitAnd::bitand(Int128),
    BitOrAssign::bitor_assign => BitOr::bitor(Int128),
    BitXorAssign::bitxor_assign => BitXor::bitxor(Int128),
    ShlAssign::shl_assign => Shl::shl(u32),
    ShrAssign::shr_assign => Shr::shr(u32),
}

impl std::iter::Sum for Int128 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
