use thiserror::Error;

/// Failures raised by the exact operations and conversions of [`crate::Int128`].
///
/// Every error is a deterministic function of the inputs; retrying never helps.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Int128Error {
    #[error("integer overflow")]
    Overflow,

    #[error("divide by zero")]
    DivideByZero,

    #[error("value out of range for {target}")]
    OutOfRange { target: &'static str },

    #[error("invalid number format")]
    InvalidFormat,

    #[error("radix must be in 2..=36, got {0}")]
    InvalidRadix(u32),

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

pub type Result<T> = core::result::Result<T, Int128Error>;
