//! Short Weierstrass curve domain parameters
//!
//! Every value is a big-endian hexadecimal string so that curves of any
//! size share one representation.

/// Domain parameters for y² = x³ + ax + b over 𝔽ₚ with base point G of order n
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveDomainParams {
    /// Human readable curve name
    pub name: &'static str,
    /// Field modulus p
    pub p: &'static str,
    /// Coefficient a
    pub a: &'static str,
    /// Coefficient b
    pub b: &'static str,
    /// Base point x-coordinate
    pub g_x: &'static str,
    /// Base point y-coordinate
    pub g_y: &'static str,
    /// Order of the base point
    pub n: &'static str,
}

/// Small teaching curve y² = x³ + 2x + 3 over 𝔽₉₇, G = (3, 6) of order 5
///
/// Far too small for any real use; it exists so that the whole group can
/// be enumerated in tests.
pub const TOY_CURVE_P97: CurveDomainParams = CurveDomainParams {
    name: "toy-p97",
    p: "61",
    a: "02",
    b: "03",
    g_x: "03",
    g_y: "06",
    n: "05",
};

/// SEC 2 secp256k1
pub const SECP256K1: CurveDomainParams = CurveDomainParams {
    name: "secp256k1",
    p: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
    a: "00",
    b: "07",
    g_x: "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
    g_y: "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
    n: "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
};
