//! Elliptic Curve Primitives
//!
//! Group arithmetic on short Weierstrass curves y² = x³ + ax + b over 𝔽ₚ
//! with arbitrary-precision coordinates. Curves of any size share one
//! implementation; domain parameters come from `curvecrypt-params` or
//! from the caller.
//!
//! The arithmetic is affine and variable-time. It reproduces the textbook
//! group law exactly, including its failure modes, rather than hiding
//! them behind projective formulas.

mod arith;
mod curve;
mod point;

pub use arith::mod_inverse;
pub use curve::FiniteFieldCurve;
pub use point::{Point, POINT_UNCOMPRESSED_PREFIX};

use crate::error::{validate, Error, Result};
use num_bigint::{BigUint, RandBigInt};
use num_traits::{Num, One};
use rand::{CryptoRng, RngCore};

/// Parse a big-endian hexadecimal domain parameter
pub fn parse_hex(name: &'static str, hex: &str) -> Result<BigUint> {
    BigUint::from_str_radix(hex, 16)
        .map_err(|_| Error::param(name, "not a valid hexadecimal integer"))
}

/// Draw a scalar uniformly from `[1, n - 1]`
pub fn random_scalar<R: CryptoRng + RngCore>(rng: &mut R, n: &BigUint) -> Result<BigUint> {
    validate::parameter(*n > BigUint::one(), "group order", "must be at least 2")?;
    Ok(rng.gen_biguint_range(&BigUint::one(), n))
}

/// Minimal big-endian width, in bytes, that holds every value below `modulus`
pub fn byte_width(modulus: &BigUint) -> usize {
    // bits() of a u64 count always fits in usize on supported targets
    (modulus.bits() as usize).div_ceil(8).max(1)
}

/// Big-endian encoding of `value`, left-padded with zeros to `width` bytes
pub fn to_fixed_be(context: &'static str, value: &BigUint, width: usize) -> Result<Vec<u8>> {
    let raw = value.to_bytes_be();
    if raw.len() > width {
        return Err(Error::Length {
            context,
            expected: width,
            actual: raw.len(),
        });
    }
    let mut out = vec![0u8; width - raw.len()];
    out.extend_from_slice(&raw);
    Ok(out)
}
