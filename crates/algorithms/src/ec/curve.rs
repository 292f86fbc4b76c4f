//! Short Weierstrass curve y² = x³ + ax + b over 𝔽ₚ

use crate::ec::arith::{self, mod_inverse};
use crate::ec::{byte_width, parse_hex, Point};
use crate::error::{validate, Error, Result};
use curvecrypt_params::traditional::curves::CurveDomainParams;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;
use tracing::debug;

/// Curve arithmetic engine for fixed parameters `a`, `b`, `p`
///
/// Immutable once built; share it behind an `Arc` rather than rebuilding
/// it per operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FiniteFieldCurve {
    a: BigUint,
    b: BigUint,
    p: BigUint,
    field_size: usize,
}

impl FiniteFieldCurve {
    /// Build a curve, rejecting singular parameters
    ///
    /// `a` and `b` are reduced modulo `p`. Primality of `p` is not checked;
    /// a composite modulus surfaces later as [`Error::NoInverseExists`].
    /// With `p = 1` every discriminant vanishes, so that modulus is singular.
    pub fn new(a: BigUint, b: BigUint, p: BigUint) -> Result<Self> {
        validate::parameter(!p.is_zero(), "curve modulus", "must be non-zero")?;

        let a = a % &p;
        let b = b % &p;

        // 4a³ + 27b²
        let a3 = arith::mul(&arith::mul(&a, &a, &p), &a, &p);
        let b2 = arith::mul(&b, &b, &p);
        let discriminant = arith::add(
            &arith::mul(&BigUint::from(4u8), &a3, &p),
            &arith::mul(&BigUint::from(27u8), &b2, &p),
            &p,
        );
        if discriminant.is_zero() {
            return Err(Error::SingularCurve);
        }

        let field_size = byte_width(&p);
        debug!(bits = p.bits(), field_size, "constructed prime field curve");
        Ok(Self { a, b, p, field_size })
    }

    /// Build the curve part of a domain parameter preset
    pub fn from_domain_params(params: &CurveDomainParams) -> Result<Self> {
        Self::new(
            parse_hex("curve coefficient a", params.a)?,
            parse_hex("curve coefficient b", params.b)?,
            parse_hex("curve modulus", params.p)?,
        )
    }

    /// Coefficient a, reduced modulo p
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient b, reduced modulo p
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Field modulus p
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Width in bytes of one encoded coordinate
    pub fn field_size(&self) -> usize {
        self.field_size
    }

    /// Length in bytes of an encoded point
    pub fn point_size(&self) -> usize {
        1 + 2 * self.field_size
    }

    /// Check that (x, y) satisfies y² ≡ x³ + ax + b (mod p)
    pub fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        let p = &self.p;
        let lhs = arith::mul(y, y, p);
        let x3 = arith::mul(&arith::mul(x, x, p), x, p);
        let rhs = arith::add(&arith::add(&x3, &arith::mul(&self.a, x, p), p), &self.b, p);
        lhs == rhs
    }

    /// Point-level membership; the identity always belongs to the group
    pub fn contains(&self, point: &Point) -> bool {
        match point {
            Point::Identity => true,
            Point::Affine { x, y } => self.is_on_curve(x, y),
        }
    }

    /// Validated affine point with coordinates reduced into [0, p)
    pub fn point(&self, x: BigUint, y: BigUint) -> Result<Point> {
        let x = x % &self.p;
        let y = y % &self.p;
        if !self.is_on_curve(&x, &y) {
            return Err(Error::PointNotOnCurve {
                context: "affine coordinates",
            });
        }
        Ok(Point::Affine { x, y })
    }

    /// Additive inverse: (x, -y mod p)
    pub fn negate(&self, point: &Point) -> Point {
        match point {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::Affine {
                x: x % &self.p,
                y: arith::neg(y, &self.p),
            },
        }
    }

    /// Group law P + Q in affine coordinates
    ///
    /// Doubling a point with `2y ≡ 0 (mod p)` fails with
    /// [`Error::ZeroDenominator`] instead of returning the identity.
    pub fn point_addition(&self, lhs: &Point, rhs: &Point) -> Result<Point> {
        let p = &self.p;
        let (x1, y1, x2, y2) = match (lhs, rhs) {
            (Point::Identity, _) => return Ok(rhs.clone()),
            (_, Point::Identity) => return Ok(lhs.clone()),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => {
                (x1 % p, y1 % p, x2 % p, y2 % p)
            }
        };

        if x1 == x2 && y1 != y2 {
            return Ok(Point::Identity);
        }

        let slope = if x1 == x2 {
            // m = (3x₁² + a) / 2y₁
            let denominator = arith::mul(&BigUint::from(2u8), &y1, p);
            if denominator.is_zero() {
                return Err(Error::ZeroDenominator {
                    operation: "point doubling",
                });
            }
            let numerator = arith::add(
                &arith::mul(&BigUint::from(3u8), &arith::mul(&x1, &x1, p), p),
                &self.a,
                p,
            );
            arith::mul(&numerator, &mod_inverse(&denominator, p)?, p)
        } else {
            // m = (y₂ - y₁) / (x₂ - x₁)
            let denominator = arith::sub(&x2, &x1, p);
            if denominator.is_zero() {
                return Err(Error::ZeroDenominator {
                    operation: "point addition",
                });
            }
            let numerator = arith::sub(&y2, &y1, p);
            arith::mul(&numerator, &mod_inverse(&denominator, p)?, p)
        };

        // x₃ = m² - x₁ - x₂, y₃ = m(x₁ - x₃) - y₁
        let x3 = arith::sub(&arith::sub(&arith::mul(&slope, &slope, p), &x1, p), &x2, p);
        let y3 = arith::sub(&arith::mul(&slope, &arith::sub(&x1, &x3, p), p), &y1, p);

        Ok(Point::Affine { x: x3, y: y3 })
    }

    /// 2P
    pub fn point_doubling(&self, point: &Point) -> Result<Point> {
        self.point_addition(point, point)
    }

    /// k·P by least-significant-bit first double-and-add
    ///
    /// The running addend is not doubled after the top bit of `k`, so a
    /// product is only rejected when one of the doublings it actually
    /// needs is undefined.
    pub fn scalar_multiplication(&self, k: &BigUint, point: &Point) -> Result<Point> {
        let mut result = Point::Identity;
        let mut addend = point.clone();
        let mut k = k.clone();

        while !k.is_zero() {
            if k.is_odd() {
                result = self.point_addition(&result, &addend)?;
            }
            k >>= 1u32;
            if !k.is_zero() {
                addend = self.point_doubling(&addend)?;
            }
        }

        Ok(result)
    }

    /// Canonical fixed-width encoding of a point of this curve
    pub fn encode_point(&self, point: &Point) -> Result<Vec<u8>> {
        point.to_bytes(self.field_size)
    }

    /// Decode a point and check that it lies on this curve
    pub fn decode_point(&self, bytes: &[u8]) -> Result<Point> {
        validate::length("encoded point", bytes.len(), self.point_size())?;
        let point = Point::from_bytes(bytes)?;
        if let Point::Affine { x, y } = &point {
            validate::parameter(
                x < &self.p && y < &self.p,
                "encoded point",
                "coordinate not reduced modulo p",
            )?;
        }
        if !self.contains(&point) {
            return Err(Error::PointNotOnCurve {
                context: "decoded point",
            });
        }
        Ok(point)
    }
}
