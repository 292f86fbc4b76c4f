//! Curve points as an explicit identity / affine variant

use crate::error::{Error, Result};
use crate::ec::to_fixed_be;
use num_bigint::BigUint;

/// Leading byte of an uncompressed affine encoding: 0x04 ∥ x ∥ y
pub const POINT_UNCOMPRESSED_PREFIX: u8 = 0x04;

/// A point of the curve group
///
/// The point at infinity is its own variant, so every consumer has to
/// handle it explicitly.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Point {
    /// The identity element (point at infinity)
    Identity,
    /// An affine point (x, y)
    Affine {
        /// x-coordinate
        x: BigUint,
        /// y-coordinate
        y: BigUint,
    },
}

impl Point {
    /// The identity (point at infinity)
    pub fn identity() -> Self {
        Point::Identity
    }

    /// Affine point from raw coordinates
    ///
    /// No curve check happens here; use
    /// [`FiniteFieldCurve::point`](crate::ec::FiniteFieldCurve::point) for a
    /// validated point.
    pub fn affine(x: impl Into<BigUint>, y: impl Into<BigUint>) -> Self {
        Point::Affine {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Is this the identity point?
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// x-coordinate, `None` for the identity
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Point::Identity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// y-coordinate, `None` for the identity
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Point::Identity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }

    /// Serialize with coordinates of `width` bytes
    ///
    /// Affine points encode as 0x04 ∥ x ∥ y, the identity as `1 + 2·width`
    /// zero bytes, so both encodings have the same length.
    pub fn to_bytes(&self, width: usize) -> Result<Vec<u8>> {
        match self {
            Point::Identity => Ok(vec![0u8; 1 + 2 * width]),
            Point::Affine { x, y } => {
                let mut out = Vec::with_capacity(1 + 2 * width);
                out.push(POINT_UNCOMPRESSED_PREFIX);
                out.extend_from_slice(&to_fixed_be("point x-coordinate", x, width)?);
                out.extend_from_slice(&to_fixed_be("point y-coordinate", y, width)?);
                Ok(out)
            }
        }
    }

    /// Structural decoding of [`Point::to_bytes`] output
    ///
    /// The coordinate width is inferred from the length. Curve membership
    /// is not checked; see
    /// [`FiniteFieldCurve::decode_point`](crate::ec::FiniteFieldCurve::decode_point).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < 3 || bytes.len() % 2 == 0 {
            return Err(Error::param("point encoding", "unexpected length"));
        }
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Point::Identity);
        }
        if bytes[0] != POINT_UNCOMPRESSED_PREFIX {
            return Err(Error::param(
                "point encoding",
                "invalid prefix for uncompressed point",
            ));
        }
        let width = (bytes.len() - 1) / 2;
        let (x, y) = bytes[1..].split_at(width);
        Ok(Point::Affine {
            x: BigUint::from_bytes_be(x),
            y: BigUint::from_bytes_be(y),
        })
    }
}

impl core::fmt::Display for Point {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Point::Identity => write!(f, "O"),
            Point::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}
