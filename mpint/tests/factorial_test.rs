use std::time::{Duration, Instant};

use mpint::{factorial, product_range, product_range_sequential, BigInt, BigIntError, Bound};
use num_bigint::BigUint;
use num_traits::One;

fn oracle_factorial(n: u32) -> String {
    (2..=n)
        .fold(BigUint::one(), |acc, i| acc * BigUint::from(i))
        .to_string()
}

#[test]
fn test_known_values() {
    assert_eq!(factorial(0, Bound::Unlimited).unwrap().to_string(), "1");
    assert_eq!(factorial(1, Bound::Unlimited).unwrap().to_string(), "1");
    assert_eq!(factorial(10, Bound::Unlimited).unwrap().to_string(), "3628800");
    assert_eq!(
        factorial(20, Bound::Unlimited).unwrap().to_string(),
        "2432902008176640000"
    );
}

#[test]
fn test_matches_oracle_across_table_seams() {
    for n in (0..=300).step_by(7).chain([50, 75, 100, 200, 201]) {
        assert_eq!(
            factorial(n, Bound::Unlimited).unwrap().to_string(),
            oracle_factorial(n),
            "{n}!"
        );
    }
}

#[test]
fn test_bounded_presets() {
    // 32 bytes = 8 limbs holds up to 57!
    let bytes32 = Bound::from_bytes(32);
    assert_eq!(factorial(57, bytes32).unwrap().to_string(), oracle_factorial(57));
    assert!(matches!(
        factorial(58, bytes32),
        Err(BigIntError::Overflow { .. })
    ));

    // 80 bytes = 20 limbs
    let demo = Bound::from_bytes(80);
    assert_eq!(factorial(100, demo).unwrap().to_string(), oracle_factorial(100));
}

#[test]
fn test_overflow_reports_first_oversized_product() {
    let err = factorial(500, Bound::limbs(4)).unwrap_err();
    let value = err.overflowed_value().expect("overflow carries a value");
    assert!(value.limb_count() > 4);
    // The seed 50! already needs 7 limbs.
    assert!(value.limb_count() <= 8);
}

#[test]
fn test_parallel_and_sequential_range_agree() {
    let parallel = product_range(1, 10_000, Bound::Unlimited).unwrap();
    let sequential = product_range_sequential(1, 10_000, Bound::Unlimited).unwrap();
    assert_eq!(parallel, sequential);
    assert_eq!(parallel.to_string(), oracle_factorial(10_000));
}

#[test]
fn test_huge_bounded_factorial_fails_fast() {
    let started = Instant::now();
    let err = factorial(u32::MAX, Bound::from_bytes(32)).unwrap_err();
    let value = err.overflowed_value().expect("overflow carries a value");
    assert!(value.limb_count() > 8);
    assert!(started.elapsed() < Duration::from_secs(5), "{:?}", started.elapsed());
}

#[test]
fn test_range_with_zero_is_zero_under_any_bound() {
    assert!(product_range(0, 100, Bound::limbs(1)).unwrap().is_zero());
    assert!(product_range(0, 100_000, Bound::from_bytes(32)).unwrap().is_zero());
}

#[test]
fn test_parallel_range_under_bound_fails_cleanly() {
    let err = product_range(1, 10_000, Bound::limbs(16)).unwrap_err();
    assert!(matches!(err, BigIntError::Overflow { .. }));
}

#[test]
fn test_factorial_method() {
    let ten = BigInt::from_i64_with_bound(10, Bound::limbs(2)).unwrap();
    let f = ten.factorial().unwrap();
    assert_eq!(f, BigInt::from(3_628_800));
    assert_eq!(f.bound(), Bound::limbs(2));

    assert!(matches!(
        BigInt::from(-5).factorial(),
        Err(BigIntError::Domain { .. })
    ));
}
