//! Public Key Encryption (PKE) schemes for the curvecrypt library.
//!
//! The only scheme is ECIES over a [`FiniteFieldCurve`]: an ephemeral
//! Diffie-Hellman agreement against the recipient's public point, SHA-256
//! key derivation, AES-128-CBC and an HMAC-SHA-256 tag over IV‖ciphertext.
//!
//! [`FiniteFieldCurve`]: curvecrypt_algorithms::FiniteFieldCurve

#![forbid(unsafe_code)]

pub mod ecies;
pub mod error;

// Re-export key items
pub use ecies::{DerivedKeys, Ecies, EciesDomain, EciesPublicKey, EciesSecretKey, Envelope};
pub use error::{Error, Result};
