//! Decimal string conversion.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::bigint::{BigInt, Sign};
use crate::error::{BigIntError, ParseErrorKind, Result};
use crate::limbs::{self, Limb};
use crate::Bound;

/// 10^9, the largest power of ten that fits in a limb.
const DECIMAL_GROUP: Limb = 1_000_000_000;
const DECIMAL_GROUP_DIGITS: usize = 9;

/// Base-10^9 digits of a magnitude, least significant group first.
fn decimal_groups(magnitude: &[Limb]) -> Vec<Limb> {
    let mut groups = Vec::with_capacity(magnitude.len() * 32 / 29 + 1);
    let mut rest = magnitude.to_vec();
    loop {
        let (quotient, group) = limbs::div_small(&rest, DECIMAL_GROUP);
        groups.push(group);
        if limbs::is_zero(&quotient) {
            return groups;
        }
        rest = quotient;
    }
}

impl fmt::Display for BigInt {
    /// Decimal, with a leading `-` for negative values. Honors width, fill,
    /// alignment, `+` and `0` flags.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let groups = decimal_groups(self.limbs());
        let mut digits = String::with_capacity(groups.len() * DECIMAL_GROUP_DIGITS);
        let mut groups = groups.iter().rev();
        // Only the most significant group drops its leading zeros.
        if let Some(first) = groups.next() {
            write!(digits, "{first}")?;
        }
        for group in groups {
            write!(digits, "{group:0width$}", width = DECIMAL_GROUP_DIGITS)?;
        }
        f.pad_integral(!self.is_negative(), "", &digits)
    }
}

impl BigInt {
    /// Parse an optionally signed decimal string under `bound`.
    ///
    /// ```
    /// use mpint::{BigInt, Bound};
    ///
    /// let x = BigInt::from_str_with_bound("-12345678901234567890", Bound::limbs(3)).unwrap();
    /// assert_eq!(x.to_string(), "-12345678901234567890");
    /// assert!(BigInt::from_str_with_bound("12345678901234567890", Bound::limbs(1)).is_err());
    /// ```
    pub fn from_str_with_bound(input: &str, bound: Bound) -> Result<Self> {
        let (sign, digits, offset) = match input.as_bytes().first() {
            None => return Err(BigIntError::parse(input, ParseErrorKind::Empty)),
            Some(b'-') => (Sign::Negative, &input[1..], 1),
            Some(b'+') => (Sign::Positive, &input[1..], 1),
            Some(_) => (Sign::Positive, input, 0),
        };
        if digits.is_empty() {
            return Err(BigIntError::parse(input, ParseErrorKind::MissingDigits));
        }

        let mut magnitude = vec![0];
        for (position, ch) in digits.char_indices() {
            let digit = ch.to_digit(10).ok_or_else(|| {
                BigIntError::parse(
                    input,
                    ParseErrorKind::InvalidDigit {
                        ch,
                        position: position + offset,
                    },
                )
            })?;
            limbs::mul_small_add(&mut magnitude, 10, digit);
        }
        Self::from_parts(magnitude, sign, bound)
    }
}

impl FromStr for BigInt {
    type Err = BigIntError;

    /// Parse into an unbounded value.
    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_bound(s, Bound::Unlimited)
    }
}

// ============================================================================
// Tests
// ============================================================================
