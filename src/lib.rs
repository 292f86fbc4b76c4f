//! # curvecrypt
//!
//! Elliptic curve arithmetic over prime fields and an ECIES hybrid
//! encryption scheme built on it.
//!
//! ## Usage
//!
//! ```
//! use curvecrypt::prelude::*;
//! use curvecrypt::params::traditional::curves::TOY_CURVE_P97;
//! use rand::rngs::OsRng;
//!
//! let ecies = Ecies::from_params(&TOY_CURVE_P97).unwrap();
//! let mut rng = OsRng;
//!
//! let (secret, public) = ecies.key_generation(&mut rng).unwrap();
//! let envelope = ecies.encrypt(b"Hello, ECC!", &public, &mut rng).unwrap();
//! assert_eq!(ecies.decrypt(&envelope, &secret).unwrap(), b"Hello, ECC!");
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `serde`: `Serialize`/`Deserialize` for points, keys and envelopes
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`curvecrypt-api`]: Error type and public traits
//! - [`curvecrypt-internal`]: Constant-time helpers
//! - [`curvecrypt-params`]: Curve presets and size constants
//! - [`curvecrypt-algorithms`]: Curve arithmetic, AES-CBC, SHA-256, HMAC
//! - [`curvecrypt-pke`]: ECIES
//!
//! The library emits `tracing` events but never installs a subscriber.
//!
//! [`curvecrypt-api`]: curvecrypt_api
//! [`curvecrypt-internal`]: curvecrypt_internal
//! [`curvecrypt-params`]: curvecrypt_params
//! [`curvecrypt-algorithms`]: curvecrypt_algorithms
//! [`curvecrypt-pke`]: curvecrypt_pke

pub use curvecrypt_algorithms as algorithms;
pub use curvecrypt_api as api;
pub use curvecrypt_internal as internal;
pub use curvecrypt_params as params;
pub use curvecrypt_pke as pke;

/// Common imports for curvecrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{HybridEncryption, Serialize, SerializeSecret};

    // Curve arithmetic
    pub use crate::algorithms::ec::mod_inverse;
    pub use crate::algorithms::{FiniteFieldCurve, Point};

    // ECIES
    pub use crate::pke::{Ecies, EciesDomain, EciesPublicKey, EciesSecretKey, Envelope};

    // Re-export the integer and RNG types used in signatures
    pub use num_bigint::BigUint;
    pub use rand::{CryptoRng, RngCore};
    pub use zeroize::Zeroize;
}
