//! Storage ceilings ("precision classes") for [`crate::BigInt`] values.

use std::cmp::Ordering;
use std::fmt;

use crate::limbs::LIMB_BYTES;

/// Maximum number of limbs a value may occupy.
///
/// Ordered from tight to loose: a finite bound with fewer limbs sorts first
/// and `Unlimited` sorts after every finite bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Bound {
    Limbs(usize),
    #[default]
    Unlimited,
}

impl Bound {
    /// A finite bound of `count` limbs.
    #[inline]
    pub const fn limbs(count: usize) -> Self {
        Bound::Limbs(count)
    }

    /// A finite bound sized from a byte budget (whole limbs only).
    ///
    /// ```
    /// use mpint::Bound;
    ///
    /// assert_eq!(Bound::from_bytes(32), Bound::limbs(8));
    /// assert_eq!(Bound::from_bytes(7), Bound::limbs(1));
    /// ```
    #[inline]
    pub const fn from_bytes(bytes: usize) -> Self {
        Bound::Limbs(bytes / LIMB_BYTES)
    }

    /// Limb ceiling, or `None` when unlimited.
    #[inline]
    pub fn max_limbs(self) -> Option<usize> {
        match self {
            Bound::Limbs(n) => Some(n),
            Bound::Unlimited => None,
        }
    }

    #[inline]
    pub fn is_unlimited(self) -> bool {
        matches!(self, Bound::Unlimited)
    }

    /// Whether a magnitude of `limbs` limbs fits.
    #[inline]
    pub fn permits(self, limbs: usize) -> bool {
        match self {
            Bound::Limbs(n) => limbs <= n,
            Bound::Unlimited => true,
        }
    }

    /// Bound of a result combining operands bounded by `self` and `other`:
    /// the looser of the two, with `Unlimited` dominating.
    ///
    /// ```
    /// use mpint::Bound;
    ///
    /// assert_eq!(Bound::limbs(2).promote(Bound::limbs(8)), Bound::limbs(8));
    /// assert_eq!(Bound::limbs(8).promote(Bound::Unlimited), Bound::Unlimited);
    /// ```
    #[inline]
    pub fn promote(self, other: Self) -> Self {
        self.max(other)
    }
}

impl Ord for Bound {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Bound::Limbs(a), Bound::Limbs(b)) => a.cmp(b),
            (Bound::Limbs(_), Bound::Unlimited) => Ordering::Less,
            (Bound::Unlimited, Bound::Limbs(_)) => Ordering::Greater,
            (Bound::Unlimited, Bound::Unlimited) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Bound {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Limbs(1) => write!(f, "1 limb"),
            Bound::Limbs(n) => write!(f, "{n} limbs"),
            Bound::Unlimited => write!(f, "unlimited"),
        }
    }
}
