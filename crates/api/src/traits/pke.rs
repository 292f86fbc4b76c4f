//! Trait definition for hybrid public key encryption schemes.

use crate::error::Result;
use crate::traits::serialize::{Serialize, SerializeSecret};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for hybrid (key agreement + symmetric) public key encryption.
///
/// Unlike a fixed-curve scheme, an implementor is an instance bound to its
/// domain parameters, so every operation takes `&self`.
pub trait HybridEncryption {
    /// Public key type for the scheme.
    type PublicKey: Serialize + Clone;

    /// Secret key type for the scheme.
    type SecretKey: SerializeSecret + Zeroize;

    /// Everything the recipient needs to decrypt.
    type Envelope: Serialize + Clone;

    /// Returns the algorithm name.
    fn name(&self) -> &'static str;

    /// Generates a new key pair.
    fn keypair<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Encrypts `plaintext` for the holder of `pk_recipient`.
    ///
    /// # Arguments
    /// * `pk_recipient` - The recipient's public key.
    /// * `plaintext` - The message to encrypt.
    /// * `rng` - A cryptographically secure random number generator.
    fn seal<R: RngCore + CryptoRng>(
        &self,
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        rng: &mut R,
    ) -> Result<Self::Envelope>;

    /// Authenticates and decrypts an envelope with the recipient's secret key.
    ///
    /// Returns the original plaintext only if authentication succeeds.
    fn open(&self, sk_recipient: &Self::SecretKey, envelope: &Self::Envelope) -> Result<Vec<u8>>;
}
