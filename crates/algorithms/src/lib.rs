//! Cryptographic primitives for the curvecrypt library
//!
//! This crate provides the arithmetic engine of the library, group
//! operations on short Weierstrass curves over a prime field, together
//! with the thin symmetric layer the hybrid scheme is built from:
//!
//! - [`ec`]: modular inverse, curve validation, point addition and
//!   doubling, scalar multiplication and point encoding
//! - [`block`]: AES-128 block cipher driven in CBC mode with PKCS#7 padding
//! - [`hash`]: SHA-256
//! - [`mac`]: HMAC-SHA-256 with constant-time verification

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic curve arithmetic
pub mod ec;
pub use ec::{FiniteFieldCurve, Point};

// Block cipher and modes
pub mod block;
pub use block::{Aes128, BlockCipher, Cbc};

// Hash function
pub mod hash;
pub use hash::Sha256;

// MAC
pub mod mac;
pub use mac::HmacSha256;
