//! Group parameters shared by every ECIES operation

use curvecrypt_algorithms::ec::{byte_width, parse_hex};
use curvecrypt_algorithms::error::{validate, Error as PrimitiveError};
use curvecrypt_algorithms::{FiniteFieldCurve, Point};
use curvecrypt_params::traditional::curves::CurveDomainParams;
use num_bigint::BigUint;
use tracing::debug;

use crate::error::Result;

/// Curve, base point `G` and its claimed order `n`
///
/// `G` is checked to lie on the curve and `n` to be at least 2. Whether
/// `n` really is the order of `G` is only checked by
/// [`validate_group_order`](Self::validate_group_order).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EciesDomain {
    curve: FiniteFieldCurve,
    generator: Point,
    order: BigUint,
    scalar_size: usize,
}

impl EciesDomain {
    /// Bundle a curve with its base point and order
    pub fn new(curve: FiniteFieldCurve, generator: Point, order: BigUint) -> Result<Self> {
        let generator = match generator {
            Point::Identity => {
                return Err(PrimitiveError::param("base point", "must not be the identity").into())
            }
            Point::Affine { x, y } => curve.point(x, y).map_err(|_| {
                PrimitiveError::PointNotOnCurve {
                    context: "base point",
                }
            })?,
        };
        validate::parameter(order > BigUint::from(1u8), "group order", "must be at least 2")?;
        // One length byte carries the encoded ephemeral key in an envelope
        validate::parameter(
            curve.point_size() <= usize::from(u8::MAX),
            "curve modulus",
            "too large for the envelope encoding",
        )?;

        let scalar_size = byte_width(&order);
        debug!(
            field_size = curve.field_size(),
            scalar_size,
            order_bits = order.bits(),
            "constructed ECIES domain"
        );
        Ok(Self {
            curve,
            generator,
            order,
            scalar_size,
        })
    }

    /// Parse a compile-time preset
    pub fn from_params(params: &CurveDomainParams) -> Result<Self> {
        let curve = FiniteFieldCurve::from_domain_params(params)?;
        let generator = Point::affine(
            parse_hex("base point x", params.g_x)?,
            parse_hex("base point y", params.g_y)?,
        );
        let order = parse_hex("group order", params.n)?;
        debug!(preset = params.name, "loading domain preset");
        Self::new(curve, generator, order)
    }

    /// Check that `n·G` is the identity
    pub fn validate_group_order(&self) -> Result<()> {
        let product = self
            .curve
            .scalar_multiplication(&self.order, &self.generator)?;
        validate::parameter(
            product.is_identity(),
            "group order",
            "n·G is not the identity",
        )?;
        Ok(())
    }

    /// The underlying curve
    pub fn curve(&self) -> &FiniteFieldCurve {
        &self.curve
    }

    /// Base point G
    pub fn generator(&self) -> &Point {
        &self.generator
    }

    /// Order n of the base point
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// Width in bytes of an encoded secret scalar
    pub fn scalar_size(&self) -> usize {
        self.scalar_size
    }
}
