//! Modular arithmetic over ℤ/pℤ on arbitrary-precision integers

use crate::error::{Error, Result};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Multiplicative inverse of `a` modulo `p`
///
/// Iterative extended Euclid carrying `(remainder, coefficient)` pairs.
/// Fails with [`Error::NoInverseExists`] when `gcd(a, p) != 1`, which
/// covers `a ≡ 0 (mod p)` and every non-unit of a composite modulus.
pub fn mod_inverse(a: &BigUint, p: &BigUint) -> Result<BigUint> {
    if p.is_zero() {
        return Err(Error::param("modulus", "must be non-zero"));
    }
    let modulus = BigInt::from(p.clone());

    let (mut old_r, mut r) = (BigInt::from(a % p), modulus.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());

    while !r.is_zero() {
        let q = &old_r / &r;

        let next_r = &old_r - &q * &r;
        old_r = core::mem::replace(&mut r, next_r);

        let next_s = &old_s - &q * &s;
        old_s = core::mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        return Err(Error::NoInverseExists);
    }

    // mod_floor against a positive modulus is never negative
    let (_, magnitude) = old_s.mod_floor(&modulus).into_parts();
    Ok(magnitude)
}

/// (a + b) mod p
pub(crate) fn add(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    (a + b) % p
}

/// (a - b) mod p, normalized into [0, p)
pub(crate) fn sub(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    let a = a % p;
    let b = b % p;
    if a >= b {
        a - b
    } else {
        p - (b - a)
    }
}

/// (a · b) mod p
pub(crate) fn mul(a: &BigUint, b: &BigUint, p: &BigUint) -> BigUint {
    (a * b) % p
}

/// p - a mod p
pub(crate) fn neg(a: &BigUint, p: &BigUint) -> BigUint {
    sub(&BigUint::zero(), a, p)
}
