//! `std::ops` operators for [`BigInt`].
//!
//! Every binary operator can overflow the operands' bound (and `/`, `%` can
//! divide by zero), so they all yield `Result<BigInt>` instead of `BigInt`:
//! `(&a + &b)?`. The left operand is always borrowed. Compound assignment goes
//! through the `try_*_assign` methods, which leave `self` untouched on error.

use std::ops::{Add, Div, Mul, Neg, Rem, Shl, Sub};

use crate::bigint::BigInt;
use crate::error::Result;

/// Forward `Trait` on a borrowed left operand (borrowed or owned right operand,
/// or an `i64`) to the inherent `BigInt::$method`.
macro_rules! forward_binop {
    ($Trait:ident, $method:ident) => {
        impl $Trait<&BigInt> for &BigInt {
            type Output = Result<BigInt>;

            #[inline]
            fn $method(self, rhs: &BigInt) -> Result<BigInt> {
                BigInt::$method(self, rhs)
            }
        }

        impl $Trait<BigInt> for &BigInt {
            type Output = Result<BigInt>;

            #[inline]
            fn $method(self, rhs: BigInt) -> Result<BigInt> {
                BigInt::$method(self, &rhs)
            }
        }

        impl $Trait<i64> for &BigInt {
            type Output = Result<BigInt>;

            #[inline]
            fn $method(self, rhs: i64) -> Result<BigInt> {
                BigInt::$method(self, &small(rhs, self))
            }
        }
    };
}

/// A machine-integer operand under `like`'s bound, so it never widens the
/// result's bound.
fn small(value: i64, like: &BigInt) -> BigInt {
    BigInt::from(value).retag(like.bound())
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);
forward_binop!(Rem, rem);

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::neg(self)
    }
}

/// `a << bits` multiplies by 2^bits.
impl Shl<usize> for &BigInt {
    type Output = Result<BigInt>;

    fn shl(self, bits: usize) -> Result<BigInt> {
        BigInt::shl(self, bits)
    }
}

// ============================================================================
// Compound assignment
// ============================================================================

impl BigInt {
    /// `self + rhs` where `rhs` is a machine integer.
    pub fn add_i64(&self, rhs: i64) -> Result<Self> {
        self.add(&small(rhs, self))
    }

    /// `self += rhs`.
    pub fn try_add_assign(&mut self, rhs: &Self) -> Result<()> {
        *self = self.add(rhs)?;
        Ok(())
    }

    /// `self -= rhs`.
    pub fn try_sub_assign(&mut self, rhs: &Self) -> Result<()> {
        *self = self.sub(rhs)?;
        Ok(())
    }

    /// `self *= rhs`.
    pub fn try_mul_assign(&mut self, rhs: &Self) -> Result<()> {
        *self = self.mul(rhs)?;
        Ok(())
    }

    /// `self /= rhs`.
    pub fn try_div_assign(&mut self, rhs: &Self) -> Result<()> {
        *self = self.div(rhs)?;
        Ok(())
    }

    /// `self %= rhs`.
    pub fn try_rem_assign(&mut self, rhs: &Self) -> Result<()> {
        *self = self.rem(rhs)?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BigIntError, Bound};

    fn int(v: i64) -> BigInt {
        BigInt::from(v)
    }

    #[test]
    fn test_operator_forms_agree() {
        let a = int(1_000_000_007);
        let b = int(-97);
        let expected = a.mul(&b).unwrap();
        assert_eq!((&a * &b).unwrap(), expected);
        assert_eq!((&a * b.clone()).unwrap(), expected);
        assert_eq!((&a * -97).unwrap(), expected);
    }

    #[test]
    fn test_each_operator() {
        let a = int(-17);
        let b = int(5);
        assert_eq!((&a + &b).unwrap(), int(-12));
        assert_eq!((&a - &b).unwrap(), int(-22));
        assert_eq!((&a * &b).unwrap(), int(-85));
        assert_eq!((&a / &b).unwrap(), int(-3));
        assert_eq!((&a % &b).unwrap(), int(-2));
        assert_eq!(-&a, int(17));
        assert_eq!((&b << 40).unwrap(), int(5 << 40));
    }

    #[test]
    fn test_operator_errors() {
        assert_eq!((&int(1) / int(0)).unwrap_err(), BigIntError::DivisionByZero);
        assert_eq!((&int(1) % 0).unwrap_err(), BigIntError::DivisionByZero);
        let max = BigInt::max_value(Bound::limbs(1)).unwrap();
        assert!(matches!(&max + 1, Err(BigIntError::Overflow { .. })));
    }

    #[test]
    fn test_i64_operand_keeps_bound() {
        let a = BigInt::from_i64_with_bound(10, Bound::limbs(2)).unwrap();
        let b = a.add_i64(-20).unwrap();
        assert_eq!(b, int(-10));
        assert_eq!(b.bound(), Bound::limbs(2));
        assert_eq!((&a * 3).unwrap().bound(), Bound::limbs(2));
    }

    #[test]
    fn test_compound_assignment() {
        let mut x = int(10);
        x.try_add_assign(&int(5)).unwrap();
        x.try_mul_assign(&int(4)).unwrap();
        x.try_sub_assign(&int(1)).unwrap();
        x.try_div_assign(&int(2)).unwrap();
        x.try_rem_assign(&int(7)).unwrap();
        // ((10 + 5) * 4 - 1) / 2 % 7 == 29 % 7
        assert_eq!(x, int(1));
    }

    #[test]
    fn test_compound_assignment_failure_leaves_value() {
        let mut x = int(42);
        assert!(x.try_div_assign(&BigInt::zero()).is_err());
        assert_eq!(x, int(42));

        let mut m = BigInt::max_value(Bound::limbs(1)).unwrap();
        let before = m.clone();
        let two = BigInt::from_i64_with_bound(2, Bound::limbs(1)).unwrap();
        assert!(m.try_mul_assign(&two).is_err());
        assert_eq!(m, before);
    }
}
