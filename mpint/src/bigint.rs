//! Signed arbitrary-precision integers with an optional limb ceiling.
//!
//! Magnitudes are little-endian `u32` limbs (limbs[0] is least significant).
//! Values are immutable: every operation returns a new `BigInt`, normalized
//! and then checked against the promoted bound of its operands.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::debug;

use crate::error::{BigIntError, Result};
use crate::limbs::{self, Limb, MulAlgorithm};
use crate::Bound;

/// Sign of a [`BigInt`]. Zero is always `Positive`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    #[inline]
    fn flip(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }

    /// Sign of a product or quotient of operands with these signs.
    #[inline]
    pub(crate) fn product(self, other: Self) -> Self {
        if self == other {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Signed big integer carrying its own storage [`Bound`].
///
/// Equality, ordering and hashing look at the numeric value only; two values
/// with different bounds but the same sign and magnitude are equal.
#[derive(Clone)]
pub struct BigInt {
    limbs: Vec<Limb>,
    sign: Sign,
    bound: Bound,
}

// ============================================================================
// Construction & normalization
// ============================================================================

impl BigInt {
    /// Unbounded zero.
    pub fn zero() -> Self {
        Self {
            limbs: vec![0],
            sign: Sign::Positive,
            bound: Bound::Unlimited,
        }
    }

    /// Unbounded one.
    pub fn one() -> Self {
        Self {
            limbs: vec![1],
            sign: Sign::Positive,
            bound: Bound::Unlimited,
        }
    }

    /// Construct from a machine integer under `bound`.
    ///
    /// ```
    /// use mpint::{BigInt, Bound};
    ///
    /// let x = BigInt::from_i64_with_bound(-7, Bound::limbs(1)).unwrap();
    /// assert_eq!(x.to_string(), "-7");
    /// assert!(BigInt::from_i64_with_bound(1 << 40, Bound::limbs(1)).is_err());
    /// ```
    pub fn from_i64_with_bound(value: i64, bound: Bound) -> Result<Self> {
        Self::from(value).with_bound(bound)
    }

    /// Construct a non-negative value from raw little-endian limbs.
    pub fn from_limbs(limbs: Vec<Limb>, bound: Bound) -> Result<Self> {
        Self::from_parts(limbs, Sign::Positive, bound)
    }

    /// Largest value representable under a finite bound (every limb set).
    ///
    /// `None` for `Unlimited` and for a bound of zero limbs.
    pub fn max_value(bound: Bound) -> Option<Self> {
        match bound.max_limbs()? {
            0 => None,
            n => Some(Self {
                limbs: vec![Limb::MAX; n],
                sign: Sign::Positive,
                bound,
            }),
        }
    }

    /// Normalize, canonicalize zero's sign, then check the bound.
    pub(crate) fn from_parts(mut limbs: Vec<Limb>, sign: Sign, bound: Bound) -> Result<Self> {
        limbs::normalize(&mut limbs);
        let sign = if limbs::is_zero(&limbs) {
            Sign::Positive
        } else {
            sign
        };
        Self { limbs, sign, bound }.within_bound()
    }

    fn within_bound(self) -> Result<Self> {
        if self.bound.permits(self.limbs.len()) {
            return Ok(self);
        }
        debug!(bound = %self.bound, limbs = self.limbs.len(), "result exceeds bound");
        Err(BigIntError::Overflow {
            bound: self.bound,
            limbs: self.limbs.len(),
            value: Box::new(self),
        })
    }

    /// The same value under a different bound.
    pub fn with_bound(&self, bound: Bound) -> Result<Self> {
        Self {
            limbs: self.limbs.clone(),
            sign: self.sign,
            bound,
        }
        .within_bound()
    }

    /// Re-tag without checking. Used for small helper operands whose bound
    /// must not widen the result's bound.
    pub(crate) fn retag(mut self, bound: Bound) -> Self {
        self.bound = bound;
        self
    }

    pub(crate) fn magnitude(&self) -> &[Limb] {
        &self.limbs
    }
}

// ============================================================================
// Inspection
// ============================================================================

impl BigInt {
    #[inline]
    pub fn bound(&self) -> Bound {
        self.bound
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Magnitude limbs, least significant first.
    #[inline]
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    #[inline]
    pub fn limb_count(&self) -> usize {
        self.limbs.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        limbs::is_zero(&self.limbs)
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// -1, 0 or 1.
    pub fn signum(&self) -> i32 {
        match (self.is_zero(), self.sign) {
            (true, _) => 0,
            (false, Sign::Positive) => 1,
            (false, Sign::Negative) => -1,
        }
    }

    /// Significant bits in the magnitude.
    pub fn bit_length(&self) -> usize {
        limbs::bit_len(&self.limbs)
    }

    /// Compare absolute values.
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        limbs::cmp(&self.limbs, &other.limbs)
    }
}

// ============================================================================
// Additive
// ============================================================================

impl BigInt {
    /// Addition. Errors with `Overflow` if the sum exceeds the promoted bound.
    ///
    /// ```
    /// use mpint::BigInt;
    ///
    /// let a = BigInt::from(-100);
    /// let b = BigInt::from(30);
    /// assert_eq!(a.add(&b).unwrap(), BigInt::from(-70));
    /// ```
    pub fn add(&self, other: &Self) -> Result<Self> {
        let bound = self.bound.promote(other.bound);
        if self.sign == other.sign {
            return Self::from_parts(limbs::add(&self.limbs, &other.limbs), self.sign, bound);
        }
        // Opposite signs: a + b == a - (-b), where the larger magnitude wins the sign.
        self.sub(&other.neg())
    }

    /// Subtraction.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        let bound = self.bound.promote(other.bound);
        if self.sign != other.sign {
            return self.add(&other.neg());
        }
        match limbs::cmp(&self.limbs, &other.limbs) {
            // |a| < |b|: a - b == -(b - a)
            Ordering::Less => Self::from_parts(
                limbs::sub(&other.limbs, &self.limbs),
                self.sign.flip(),
                bound,
            ),
            _ => Self::from_parts(limbs::sub(&self.limbs, &other.limbs), self.sign, bound),
        }
    }

    /// Negation. Zero stays positive.
    pub fn neg(&self) -> Self {
        let mut out = self.clone();
        if !out.is_zero() {
            out.sign = out.sign.flip();
        }
        out
    }

    pub fn abs(&self) -> Self {
        let mut out = self.clone();
        out.sign = Sign::Positive;
        out
    }

    /// `self + 1`.
    pub fn inc(&self) -> Result<Self> {
        self.add(&Self::one().retag(self.bound))
    }

    /// `self - 1`.
    pub fn dec(&self) -> Result<Self> {
        self.sub(&Self::one().retag(self.bound))
    }
}

// ============================================================================
// Multiplicative
// ============================================================================

impl BigInt {
    /// Multiplication, dispatching between schoolbook and Karatsuba on size.
    ///
    /// ```
    /// use mpint::BigInt;
    ///
    /// let a = BigInt::from(-6);
    /// let b = BigInt::from(7);
    /// assert_eq!(a.mul(&b).unwrap(), BigInt::from(-42));
    /// ```
    pub fn mul(&self, other: &Self) -> Result<Self> {
        let bound = self.bound.promote(other.bound);
        Self::from_parts(
            limbs::mul(&self.limbs, &other.limbs),
            self.sign.product(other.sign),
            bound,
        )
    }

    /// Multiplication with a forced algorithm. The result is identical to
    /// [`BigInt::mul`]; only the running time differs.
    pub fn mul_with(&self, other: &Self, algorithm: MulAlgorithm) -> Result<Self> {
        let bound = self.bound.promote(other.bound);
        Self::from_parts(
            limbs::mul_with(&self.limbs, &other.limbs, algorithm),
            self.sign.product(other.sign),
            bound,
        )
    }
}

// ============================================================================
// Shifts
// ============================================================================

impl BigInt {
    /// Multiply by 2^bits, keeping the sign.
    pub fn shl(&self, bits: usize) -> Result<Self> {
        Self::from_parts(limbs::shl_bits(&self.limbs, bits), self.sign, self.bound)
    }

    /// Multiply by 2^(32 * count), keeping the sign.
    pub fn shl_limbs(&self, count: usize) -> Result<Self> {
        Self::from_parts(limbs::shl_limbs(&self.limbs, count), self.sign, self.bound)
    }
}

// ============================================================================
// Conversion
// ============================================================================

impl BigInt {
    /// Whether the value is in `0..=u32::MAX`.
    pub fn fits_in_u32(&self) -> bool {
        self.sign == Sign::Positive && self.limbs.len() == 1
    }

    /// Convert to `u32`, failing with `Range` if the value does not fit.
    pub fn to_u32(&self) -> Result<u32> {
        if self.fits_in_u32() {
            Ok(self.limbs[0])
        } else {
            Err(BigIntError::Range {
                value: Box::new(self.clone()),
            })
        }
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        let sign = if value < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        let magnitude = value.unsigned_abs();
        let mut limbs = vec![magnitude as Limb, (magnitude >> limbs::LIMB_BITS) as Limb];
        limbs::normalize(&mut limbs);
        Self {
            limbs,
            sign,
            bound: Bound::Unlimited,
        }
    }
}

impl From<i32> for BigInt {
    fn from(value: i32) -> Self {
        Self::from(i64::from(value))
    }
}

impl From<u32> for BigInt {
    fn from(value: u32) -> Self {
        Self {
            limbs: vec![value],
            sign: Sign::Positive,
            bound: Bound::Unlimited,
        }
    }
}

impl TryFrom<&BigInt> for u32 {
    type Error = BigIntError;

    fn try_from(value: &BigInt) -> Result<Self> {
        value.to_u32()
    }
}

// ============================================================================
// Trait impls
// ============================================================================

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign && self.limbs == other.limbs
    }
}

impl Eq for BigInt {}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sign.hash(state);
        self.limbs.hash(state);
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => limbs::cmp(&self.limbs, &other.limbs),
            (Sign::Negative, Sign::Negative) => limbs::cmp(&other.limbs, &self.limbs),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({self}, bound: {})", self.bound)
    }
}

// ============================================================================
// Tests
// ============================================================================
