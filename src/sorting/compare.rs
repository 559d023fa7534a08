//! Signed comparison of arbitrary-precision ranking weights
//!
//! Ranking engines hand out weights built from bit fields (layer, variant,
//! position) that routinely exceed the range of native integers. Comparisons
//! are therefore done on `BigInt` and only the sign of the difference is kept.

use num_bigint::{BigInt, Sign};
use std::cmp::Ordering;

/// Map the sign of `value` to an ordering: negative is `Less`, zero is
/// `Equal`, positive is `Greater`.
pub fn sign(value: &BigInt) -> Ordering {
    match value.sign() {
        Sign::Minus => Ordering::Less,
        Sign::NoSign => Ordering::Equal,
        Sign::Plus => Ordering::Greater,
    }
}

/// Order two weights by the sign of `a - b`.
pub fn compare_weights(a: &BigInt, b: &BigInt) -> Ordering {
    sign(&(a - b))
}
