//! Magnitude primitives over little-endian `u32` limb slices.
//!
//! Every function here works on unsigned magnitudes in base 2^32 and returns
//! a normalized vector: no most-significant zero limbs, and zero is `[0]`.
//! Signs and bounds are layered on top by [`crate::BigInt`].

use std::cmp::Ordering;

use tracing::trace;

/// One base-2^32 digit.
pub type Limb = u32;

/// Bits per limb.
pub const LIMB_BITS: u32 = Limb::BITS;

/// Bytes per limb.
pub const LIMB_BYTES: usize = std::mem::size_of::<Limb>();

/// Below this limb count (on either operand) schoolbook multiplication wins.
pub const NAIVE_THRESHOLD: usize = 16;

/// Operands at or above this limb count are "large". There is no faster
/// algorithm wired in above it, so large operands stay on Karatsuba.
pub const KARATSUBA_THRESHOLD: usize = 128;

/// Karatsuba recursion bottoms out into schoolbook at this many limbs.
pub const KARATSUBA_BASE_CASE: usize = 2;

/// Multiplication algorithm chosen for a pair of operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MulAlgorithm {
    Naive,
    Karatsuba,
}

impl MulAlgorithm {
    /// Size-based dispatch between schoolbook and Karatsuba.
    pub fn select(lhs_limbs: usize, rhs_limbs: usize) -> Self {
        if lhs_limbs < NAIVE_THRESHOLD || rhs_limbs < NAIVE_THRESHOLD {
            MulAlgorithm::Naive
        } else {
            // Medium and large (>= KARATSUBA_THRESHOLD) operands alike.
            MulAlgorithm::Karatsuba
        }
    }
}

// ============================================================================
// Low-level helpers
// ============================================================================

/// Add with carry: (result, carry) = a + b + carry_in
#[inline(always)]
const fn adc(a: Limb, b: Limb, carry: Limb) -> (Limb, Limb) {
    let tmp = a as u64 + b as u64 + carry as u64;
    (tmp as Limb, (tmp >> 32) as Limb)
}

/// Subtract with borrow: (result, borrow) = a - b - borrow_in
#[inline(always)]
const fn sbb(a: Limb, b: Limb, borrow: Limb) -> (Limb, Limb) {
    let tmp = (a as u64).wrapping_sub(b as u64).wrapping_sub(borrow as u64);
    (tmp as Limb, (tmp >> 63) as Limb)
}

/// Multiply-accumulate: (lo, carry) = a * b + c + carry_in
#[inline(always)]
const fn mac(a: Limb, b: Limb, c: Limb, carry: Limb) -> (Limb, Limb) {
    let tmp = a as u64 * b as u64 + c as u64 + carry as u64;
    (tmp as Limb, (tmp >> 32) as Limb)
}

// ============================================================================
// Normalization & comparison
// ============================================================================

/// Strip most-significant zero limbs, keeping at least one limb.
pub(crate) fn normalize(limbs: &mut Vec<Limb>) {
    while limbs.len() > 1 && limbs.last() == Some(&0) {
        limbs.pop();
    }
    if limbs.is_empty() {
        limbs.push(0);
    }
}

#[inline]
pub(crate) fn is_zero(a: &[Limb]) -> bool {
    a.iter().all(|&l| l == 0)
}

/// Compare two normalized magnitudes.
///
/// Limb count decides first: leading zero limbs are disallowed, so the longer
/// magnitude is the larger one.
pub(crate) fn cmp(a: &[Limb], b: &[Limb]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

// ============================================================================
// Additive
// ============================================================================

pub(crate) fn add(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = 0;
    for (i, &x) in long.iter().enumerate() {
        let (r, c) = adc(x, short.get(i).copied().unwrap_or(0), carry);
        out.push(r);
        carry = c;
    }
    if carry != 0 {
        out.push(carry);
    }
    normalize(&mut out);
    out
}

/// `a - b`. Requires `a >= b`.
pub(crate) fn sub(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    debug_assert_ne!(cmp(a, b), Ordering::Less, "magnitude subtraction underflow");
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0;
    for (i, &x) in a.iter().enumerate() {
        let (r, br) = sbb(x, b.get(i).copied().unwrap_or(0), borrow);
        out.push(r);
        borrow = br;
    }
    debug_assert_eq!(borrow, 0);
    normalize(&mut out);
    out
}

// ============================================================================
// Shifts
// ============================================================================

/// Multiply by 2^(32 * count).
pub(crate) fn shl_limbs(a: &[Limb], count: usize) -> Vec<Limb> {
    if is_zero(a) {
        return vec![0];
    }
    let mut out = Vec::with_capacity(a.len() + count);
    out.resize(count, 0);
    out.extend_from_slice(a);
    out
}

/// Multiply by 2^bits.
pub(crate) fn shl_bits(a: &[Limb], bits: usize) -> Vec<Limb> {
    if is_zero(a) {
        return vec![0];
    }
    let limb_shift = bits / LIMB_BITS as usize;
    let bit_shift = (bits % LIMB_BITS as usize) as u32;
    if bit_shift == 0 {
        return shl_limbs(a, limb_shift);
    }

    let mut out = Vec::with_capacity(a.len() + limb_shift + 1);
    out.resize(limb_shift, 0);
    let mut carry = 0;
    for &limb in a {
        out.push((limb << bit_shift) | carry);
        carry = limb >> (LIMB_BITS - bit_shift);
    }
    if carry != 0 {
        out.push(carry);
    }
    out
}

/// Floor-divide by 2^bits.
pub(crate) fn shr_bits(a: &[Limb], bits: usize) -> Vec<Limb> {
    let limb_shift = bits / LIMB_BITS as usize;
    if limb_shift >= a.len() {
        return vec![0];
    }
    let bit_shift = (bits % LIMB_BITS as usize) as u32;
    let src = &a[limb_shift..];
    let mut out: Vec<Limb> = if bit_shift == 0 {
        src.to_vec()
    } else {
        src.iter()
            .enumerate()
            .map(|(i, &limb)| {
                let high = src.get(i + 1).map_or(0, |&h| h << (LIMB_BITS - bit_shift));
                (limb >> bit_shift) | high
            })
            .collect()
    };
    normalize(&mut out);
    out
}

/// Number of significant bits (0 for zero).
pub(crate) fn bit_len(a: &[Limb]) -> usize {
    match a.last() {
        Some(&top) if !is_zero(a) => {
            (a.len() - 1) * LIMB_BITS as usize + (LIMB_BITS - top.leading_zeros()) as usize
        }
        _ => 0,
    }
}

/// Set bit `bit` (growing the vector as needed).
pub(crate) fn set_bit(a: &mut Vec<Limb>, bit: usize) {
    let idx = bit / LIMB_BITS as usize;
    if a.len() <= idx {
        a.resize(idx + 1, 0);
    }
    a[idx] |= 1u32 << (bit % LIMB_BITS as usize);
}

// ============================================================================
// Multiplicative
// ============================================================================

/// Schoolbook O(n*m) multiplication.
pub(crate) fn mul_naive(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    if is_zero(a) || is_zero(b) {
        return vec![0];
    }
    let mut out = vec![0; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        let mut carry = 0;
        for (j, &y) in b.iter().enumerate() {
            let (lo, hi) = mac(x, y, out[i + j], carry);
            out[i + j] = lo;
            carry = hi;
        }
        out[i + b.len()] = carry;
    }
    normalize(&mut out);
    out
}

/// Split at `at` limbs into normalized (low, high) halves.
fn split(a: &[Limb], at: usize) -> (Vec<Limb>, Vec<Limb>) {
    let (low, high) = a.split_at(at.min(a.len()));
    let mut low = low.to_vec();
    let mut high = high.to_vec();
    normalize(&mut low);
    normalize(&mut high);
    (low, high)
}

/// Divide-and-conquer multiplication: three half-size products instead of four.
pub(crate) fn mul_karatsuba(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let n = a.len().max(b.len());
    if n <= KARATSUBA_BASE_CASE {
        return mul_naive(a, b);
    }

    let half = n.div_ceil(2);
    let (a_low, a_high) = split(a, half);
    let (b_low, b_high) = split(b, half);

    let z0 = mul_karatsuba(&a_low, &b_low);
    let z2 = mul_karatsuba(&a_high, &b_high);
    let z1 = mul_karatsuba(&add(&a_low, &a_high), &add(&b_low, &b_high));
    let z1 = sub(&sub(&z1, &z2), &z0);

    add(
        &add(&z0, &shl_limbs(&z1, half)),
        &shl_limbs(&z2, 2 * half),
    )
}

/// Multiply with the given algorithm.
pub(crate) fn mul_with(a: &[Limb], b: &[Limb], algorithm: MulAlgorithm) -> Vec<Limb> {
    match algorithm {
        MulAlgorithm::Naive => mul_naive(a, b),
        MulAlgorithm::Karatsuba => mul_karatsuba(a, b),
    }
}

/// Multiply, picking the algorithm from the operand sizes.
pub(crate) fn mul(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let algorithm = MulAlgorithm::select(a.len(), b.len());
    trace!(lhs = a.len(), rhs = b.len(), ?algorithm, "multiply");
    mul_with(a, b, algorithm)
}

/// `a = a * factor + addend`, in place.
pub(crate) fn mul_small_add(a: &mut Vec<Limb>, factor: Limb, addend: Limb) {
    let mut carry = addend;
    for limb in a.iter_mut() {
        let (lo, hi) = mac(*limb, factor, 0, carry);
        *limb = lo;
        carry = hi;
    }
    if carry != 0 {
        a.push(carry);
    }
    normalize(a);
}

/// Single-limb long division: returns (quotient, remainder).
///
/// Scans from the most significant limb, carrying the running remainder
/// across limb boundaries. `divisor` must be non-zero.
pub(crate) fn div_small(a: &[Limb], divisor: Limb) -> (Vec<Limb>, Limb) {
    debug_assert_ne!(divisor, 0);
    let divisor = u64::from(divisor);
    let mut quotient = vec![0; a.len()];
    let mut rem = 0u64;
    for (q, &limb) in quotient.iter_mut().zip(a.iter()).rev() {
        let cur = (rem << LIMB_BITS) | u64::from(limb);
        *q = (cur / divisor) as Limb;
        rem = cur % divisor;
    }
    normalize(&mut quotient);
    (quotient, rem as Limb)
}

// ============================================================================
// Tests
// ============================================================================
