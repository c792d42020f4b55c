//! Euclidean greatest common divisor.

use num_bigint::BigUint;
use num_traits::Zero;

/// `gcd(a, 0) = a`, otherwise `gcd(b, a mod b)`.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let rem = &a % &b;
        a = b;
        b = rem;
    }
    a
}
