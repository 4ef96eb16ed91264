//! Factorials from a precomputed table plus a parallel range product.
//!
//! `n!` is `table[base] * (base+1) * ... * n` where `base` is the largest
//! tabulated key not above `n`. The range product splits recursively and
//! hands the lower half of wide ranges to rayon while the current thread
//! computes the upper half; the halves are joined with one multiplication.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use tracing::{instrument, trace};

use crate::bigint::BigInt;
use crate::error::Result;
use crate::limbs::{self, Limb};
use crate::Bound;

/// Ranges narrower than this are multiplied out in a loop.
pub const SEQUENTIAL_RANGE: u32 = 10;

/// Ranges wider than this fork their lower half onto the rayon pool.
pub const PARALLEL_RANGE: u32 = 20;

const UNLIMITED_SEEDS: &[(u32, &str)] = &[
    (50, "30414093201713378043612608166064768844377641568960512000000000000"),
    (75, "24809140811395398091946477116594033660926243886570122837795894512655842677572867409443815424000000000000000000"),
    (100, "93326215443944152681699238856266700490715968264381621468592963895217599993229915608941463976156518286253697920827223758251185210916864000000000000000000000000"),
    (200, "788657867364790503552363213932185062295135977687173263294742533244359449963403342920304284011984623904177212138919638830257642790242637105061926624952829931113462857270763317237396988943922445621451664240254033291864131227428294853277524242407573903240321257405579568660226031904170324062351700858796178922222789623703897374720000000000000000000000000000000000000000000000000"),
];

const BOUNDED_SEEDS: &[(u32, &str)] = &[
    (10, "3628800"),
    (50, "30414093201713378043612608166064768844377641568960512000000000000"),
];

/// Known factorials, keyed by `n`. Entries are raw magnitudes; the caller's
/// bound is applied when an entry is used.
struct FactorialTable {
    entries: BTreeMap<u32, Vec<Limb>>,
}

static UNLIMITED_TABLE: Lazy<FactorialTable> = Lazy::new(|| FactorialTable::seeded(UNLIMITED_SEEDS));
static BOUNDED_TABLE: Lazy<FactorialTable> = Lazy::new(|| FactorialTable::seeded(BOUNDED_SEEDS));

impl FactorialTable {
    fn seeded(seeds: &[(u32, &str)]) -> Self {
        let entries = seeds
            .iter()
            .map(|&(n, digits)| {
                let mut magnitude = vec![0];
                for digit in digits.bytes() {
                    limbs::mul_small_add(&mut magnitude, 10, Limb::from(digit - b'0'));
                }
                (n, magnitude)
            })
            .collect();
        Self { entries }
    }

    /// Table for a precision class. Built on first use, read-only afterwards.
    fn for_bound(bound: Bound) -> &'static Self {
        if bound.is_unlimited() {
            &UNLIMITED_TABLE
        } else {
            &BOUNDED_TABLE
        }
    }

    /// Largest entry with key `<= n`.
    fn floor(&self, n: u32) -> Option<(u32, &[Limb])> {
        self.entries
            .range(..=n)
            .next_back()
            .map(|(&k, v)| (k, v.as_slice()))
    }
}

fn factor(i: u32, bound: Bound) -> Result<BigInt> {
    BigInt::from(i).with_bound(bound)
}

/// Under `Limbs(n)`, more than `32 * n` factors of at least 2 cannot fit:
/// each one adds a bit.
fn exceeds_bound(low: u32, high: u32, bound: Bound) -> bool {
    let low = low.max(2);
    match bound.max_limbs() {
        Some(n) if low <= high => (high - low) as usize >= n.saturating_mul(32),
        _ => false,
    }
}

fn range_product(low: u32, high: u32, bound: Bound, parallel: bool) -> Result<BigInt> {
    if low > high {
        return BigInt::one().with_bound(bound);
    }
    if low == 0 {
        return BigInt::zero().with_bound(bound);
    }
    if high - low < SEQUENTIAL_RANGE || exceeds_bound(low, high, bound) {
        // An oversized range overflows within its first `32 * n + 1` factors.
        let mut product = factor(low, bound)?;
        for i in (low..=high).skip(1) {
            product = product.mul(&factor(i, bound)?)?;
        }
        return Ok(product);
    }

    let mid = low + (high - low) / 2;
    let (left, right) = if parallel && high - low > PARALLEL_RANGE {
        let (right, left) = rayon::join(
            || range_product(mid + 1, high, bound, parallel),
            || range_product(low, mid, bound, parallel),
        );
        (left?, right?)
    } else {
        let left = range_product(low, mid, bound, parallel)?;
        (left, range_product(mid + 1, high, bound, parallel)?)
    };
    left.mul(&right)
}

/// `low * (low+1) * ... * high` under `bound`, splitting wide ranges across
/// the rayon pool. An empty range (`low > high`) yields 1 and a range
/// containing 0 yields 0.
///
/// ```
/// use mpint::{factorial, BigInt, Bound};
///
/// let p = factorial::product_range(5, 8, Bound::Unlimited).unwrap();
/// assert_eq!(p, BigInt::from(5 * 6 * 7 * 8));
/// ```
pub fn product_range(low: u32, high: u32, bound: Bound) -> Result<BigInt> {
    range_product(low, high, bound, true)
}

/// Single-threaded [`product_range`]. Always yields the same value.
pub fn product_range_sequential(low: u32, high: u32, bound: Bound) -> Result<BigInt> {
    range_product(low, high, bound, false)
}

/// `n!` under `bound`.
///
/// Fails with `Overflow` as soon as a partial product (or the seed taken from
/// the table) needs more limbs than the bound allows.
#[instrument(level = "debug", skip_all, fields(n = n, bound = %bound))]
pub fn factorial(n: u32, bound: Bound) -> Result<BigInt> {
    if n < 2 {
        return BigInt::one().with_bound(bound);
    }
    match FactorialTable::for_bound(bound).floor(n) {
        Some((base, seed)) => {
            trace!(base, "factorial table hit");
            let seed = BigInt::from_limbs(seed.to_vec(), bound)?;
            if base == n {
                return Ok(seed);
            }
            seed.mul(&product_range(base + 1, n, bound)?)
        }
        None => product_range(2, n, bound),
    }
}

impl BigInt {
    /// `self!`, computed under this value's bound.
    ///
    /// Fails with `Domain` for negative values and `Range` for values above
    /// `u32::MAX`.
    ///
    /// ```
    /// use mpint::BigInt;
    ///
    /// assert_eq!(BigInt::from(10).factorial().unwrap(), BigInt::from(3628800));
    /// assert!(BigInt::from(-1).factorial().is_err());
    /// ```
    pub fn factorial(&self) -> Result<Self> {
        if self.is_negative() {
            return Err(crate::BigIntError::Domain {
                value: Box::new(self.clone()),
            });
        }
        factorial(self.to_u32()?, self.bound())
    }
}

// ============================================================================
// Tests
// ============================================================================
