use thiserror::Error;

use crate::{BigInt, Bound};

pub type Result<T, E = BigIntError> = std::result::Result<T, E>;

/// Errors from BigInt arithmetic, parsing and conversion.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BigIntError {
    /// The result needs more limbs than its bound allows. `value` holds the
    /// full, uncapped result.
    #[error("overflow: result needs {limbs} limbs but the bound is {bound}: {value}")]
    Overflow {
        bound: Bound,
        limbs: usize,
        value: Box<BigInt>,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("cannot parse {input:?} as an integer: {reason}")]
    Parse { input: String, reason: ParseErrorKind },
    #[error("{value} does not fit in a u32")]
    Range { value: Box<BigInt> },
    #[error("factorial is not defined for negative value {value}")]
    Domain { value: Box<BigInt> },
}

/// Why a decimal string was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("empty input")]
    Empty,
    #[error("sign without digits")]
    MissingDigits,
    #[error("invalid digit {ch:?} at byte {position}")]
    InvalidDigit { ch: char, position: usize },
}

impl BigIntError {
    /// The uncapped value carried by an overflow error.
    pub fn overflowed_value(&self) -> Option<&BigInt> {
        match self {
            BigIntError::Overflow { value, .. } => Some(value),
            _ => None,
        }
    }

    pub(crate) fn parse(input: &str, reason: ParseErrorKind) -> Self {
        BigIntError::Parse {
            input: input.to_string(),
            reason,
        }
    }
}
