//! Truncating division and modulo.
//!
//! The quotient's sign is the XOR of the operand signs and the remainder takes
//! the dividend's sign, so `a == (a / b) * b + a % b` and `|a % b| < |b|`.
//! This is truncation, not Euclidean modulo: `-7 % 2 == -1`.

use std::cmp::Ordering;

use crate::bigint::BigInt;
use crate::error::{BigIntError, Result};
use crate::limbs::{self, Limb};

/// Binary long division of magnitudes: returns (quotient, remainder).
///
/// Doubles the divisor until the next doubling would exceed the remainder,
/// then walks the multiple back down one bit at a time, subtracting it
/// wherever it fits and recording the matching power of two in the quotient.
fn div_rem_magnitude(dividend: &[Limb], divisor: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    debug_assert!(!limbs::is_zero(divisor));

    if divisor == [1] {
        return (dividend.to_vec(), vec![0]);
    }
    if limbs::cmp(dividend, divisor) == Ordering::Less {
        return (vec![0], dividend.to_vec());
    }

    let mut remainder = dividend.to_vec();
    let mut multiple = divisor.to_vec();
    let mut power = 0usize;
    loop {
        let doubled = limbs::shl_bits(&multiple, 1);
        if limbs::cmp(&doubled, &remainder) == Ordering::Greater {
            break;
        }
        multiple = doubled;
        power += 1;
    }

    let mut quotient = vec![0; power / limbs::LIMB_BITS as usize + 1];
    loop {
        if limbs::cmp(&remainder, &multiple) != Ordering::Less {
            remainder = limbs::sub(&remainder, &multiple);
            limbs::set_bit(&mut quotient, power);
        }
        if power == 0 {
            break;
        }
        multiple = limbs::shr_bits(&multiple, 1);
        power -= 1;
    }
    debug_assert_eq!(limbs::cmp(&remainder, divisor), Ordering::Less);

    limbs::normalize(&mut quotient);
    (quotient, remainder)
}

impl BigInt {
    /// Quotient and remainder in one pass.
    ///
    /// ```
    /// use mpint::BigInt;
    ///
    /// let (q, r) = BigInt::from(-7).div_rem(&BigInt::from(2)).unwrap();
    /// assert_eq!(q, BigInt::from(-3));
    /// assert_eq!(r, BigInt::from(-1));
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        if divisor.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        let bound = self.bound().promote(divisor.bound());
        let (q, r) = div_rem_magnitude(self.magnitude(), divisor.magnitude());
        let quotient = Self::from_parts(q, self.sign().product(divisor.sign()), bound)?;
        let remainder = Self::from_parts(r, self.sign(), bound)?;
        Ok((quotient, remainder))
    }

    /// Truncating division. Errors on division by zero.
    pub fn div(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Remainder with the dividend's sign. Errors on division by zero.
    pub fn rem(&self, divisor: &Self) -> Result<Self> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Divide the magnitude by a single limb: returns (|self| / d, |self| % d).
    ///
    /// The quotient is non-negative and keeps this value's bound.
    pub fn divide_by_u32(&self, divisor: u32) -> Result<(Self, u32)> {
        if divisor == 0 {
            return Err(BigIntError::DivisionByZero);
        }
        let (q, r) = limbs::div_small(self.magnitude(), divisor);
        let quotient = Self::from_parts(q, crate::Sign::Positive, self.bound())?;
        Ok((quotient, r))
    }
}

// ============================================================================
// Tests
// ============================================================================
