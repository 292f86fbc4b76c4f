//! ECIES key types

use curvecrypt_algorithms::ec::to_fixed_be;
use curvecrypt_algorithms::{FiniteFieldCurve, Point};
use curvecrypt_api::error::{Error as ApiError, Result as ApiResult};
use curvecrypt_api::{Serialize, SerializeSecret};
use num_bigint::BigUint;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{Error, Result};

/// Public key for ECIES. Stores the point with its canonical encoding.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EciesPublicKey {
    point: Point,
    encoded: Vec<u8>,
}

impl EciesPublicKey {
    pub(crate) fn from_point(curve: &FiniteFieldCurve, point: Point) -> Result<Self> {
        let encoded = curve.encode_point(&point)?;
        Ok(Self { point, encoded })
    }

    pub(crate) fn from_parts(point: Point, encoded: Vec<u8>) -> Self {
        Self { point, encoded }
    }

    /// The public point Q
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Canonical encoding of the point
    pub fn as_bytes(&self) -> &[u8] {
        &self.encoded
    }
}

impl AsRef<[u8]> for EciesPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.encoded
    }
}

impl Serialize for EciesPublicKey {
    /// Structural decoding only; curve membership is checked when the key is
    /// used, or up front with [`Ecies::public_key_from_bytes`](super::Ecies::public_key_from_bytes).
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        let point = Point::from_bytes(bytes)?;
        Ok(Self::from_parts(point, bytes.to_vec()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.encoded.clone()
    }
}

/// Secret key for ECIES. Stores the big-endian scalar, zero-padded to the
/// width of the group order.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct EciesSecretKey(Vec<u8>);

impl EciesSecretKey {
    pub(crate) fn from_scalar(scalar: &BigUint, width: usize) -> Result<Self> {
        Ok(Self(to_fixed_be("secret scalar", scalar, width)?))
    }

    /// The scalar d. The returned integer is not wiped on drop.
    pub(crate) fn scalar(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }
}

impl AsRef<[u8]> for EciesSecretKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl core::fmt::Debug for EciesSecretKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("EciesSecretKey([REDACTED])")
    }
}

impl SerializeSecret for EciesSecretKey {
    /// Rejects empty and zero scalars; the upper bound `d < n` is checked
    /// against a domain on use.
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        if bytes.is_empty() {
            return Err(ApiError::from(Error::InvalidKey("empty secret scalar")));
        }
        if bytes.iter().all(|&b| b == 0) {
            return Err(ApiError::from(Error::InvalidKey("secret scalar is zero")));
        }
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.clone())
    }
}
