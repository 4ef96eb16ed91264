//! Signed arbitrary-precision integers with an optional limb ceiling.
//!
//! Every [`BigInt`] carries a [`Bound`]: either a finite number of 32-bit
//! limbs or `Unlimited`. Operations promote their operands' bounds (the
//! looser one wins) and fail with [`BigIntError::Overflow`], carrying the
//! full result, instead of truncating.
//!
//! ```
//! use mpint::{BigInt, Bound};
//!
//! let a: BigInt = "123456789012345678901234567890".parse().unwrap();
//! let b = BigInt::from(-42);
//! assert_eq!((&a * &b).unwrap().to_string(), "-5185185138518518513851851851380");
//!
//! let tight = BigInt::from_i64_with_bound(1 << 31, Bound::limbs(1)).unwrap();
//! assert!((&tight * 4).is_err());
//! ```

pub mod bigint;
pub mod bound;
mod convert;
mod div;
pub mod error;
pub mod factorial;
pub mod limbs;
mod ops;

pub use bigint::{BigInt, Sign};
pub use bound::Bound;
pub use error::{BigIntError, ParseErrorKind, Result};
pub use factorial::{factorial, product_range, product_range_sequential};
pub use limbs::MulAlgorithm;
