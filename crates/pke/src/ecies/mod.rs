//! Elliptic Curve Integrated Encryption Scheme (ECIES)
//!
//! Encryption draws an ephemeral scalar `k`, publishes `R = k·G` and
//! derives symmetric keys from the shared point `S = k·Q`. The recipient
//! recovers the same point as `S = d·R`.
//!
//! Key derivation hashes the canonical encoding of `S` with SHA-256 and
//! splits the digest into an AES-128 key (first half) and an HMAC key
//! (second half). The message is encrypted with AES-128-CBC under a fresh
//! random IV, and the tag is HMAC-SHA-256 over IV‖ciphertext. Decryption
//! checks the tag in constant time before touching the ciphertext.

mod domain;
mod envelope;
mod keys;

pub use domain::EciesDomain;
pub use envelope::Envelope;
pub use keys::{EciesPublicKey, EciesSecretKey};

use std::sync::Arc;

use curvecrypt_algorithms::ec::random_scalar;
use curvecrypt_algorithms::error::{validate, Error as PrimitiveError};
use curvecrypt_algorithms::{Aes128, Cbc, HmacSha256, Point, Sha256};
use curvecrypt_api::error::Result as ApiResult;
use curvecrypt_api::HybridEncryption;
use curvecrypt_params::traditional::curves::CurveDomainParams;
use curvecrypt_params::utils::hash::SHA256_OUTPUT_SIZE;
use curvecrypt_params::utils::symmetric::{AES128_KEY_SIZE, AES_BLOCK_SIZE, CBC_IV_SIZE};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace, trace_span, warn};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{Error, Result};

/// Size of the HMAC key taken from the KDF output
pub const MAC_KEY_SIZE: usize = SHA256_OUTPUT_SIZE - AES128_KEY_SIZE;

/// Symmetric keys derived from a shared point, wiped on drop
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct DerivedKeys {
    encryption_key: [u8; AES128_KEY_SIZE],
    mac_key: [u8; MAC_KEY_SIZE],
}

impl DerivedKeys {
    /// AES-128 key
    pub fn encryption_key(&self) -> &[u8; AES128_KEY_SIZE] {
        &self.encryption_key
    }

    /// HMAC-SHA-256 key
    pub fn mac_key(&self) -> &[u8; MAC_KEY_SIZE] {
        &self.mac_key
    }
}

impl core::fmt::Debug for DerivedKeys {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("DerivedKeys { .. }")
    }
}

/// ECIES bound to one shared, immutable domain
#[derive(Clone, Debug)]
pub struct Ecies {
    domain: Arc<EciesDomain>,
}

impl Ecies {
    /// Scheme name
    pub const NAME: &'static str = "ECIES-SHA256-AES128CBC-HMACSHA256";

    /// Scheme over `domain`
    pub fn new(domain: EciesDomain) -> Self {
        Self::with_shared_domain(Arc::new(domain))
    }

    /// Scheme over a domain already shared with other instances
    pub fn with_shared_domain(domain: Arc<EciesDomain>) -> Self {
        Self { domain }
    }

    /// Scheme over a compile-time preset
    pub fn from_params(params: &CurveDomainParams) -> Result<Self> {
        Ok(Self::new(EciesDomain::from_params(params)?))
    }

    /// The shared domain handle
    pub fn domain(&self) -> &Arc<EciesDomain> {
        &self.domain
    }

    /// Draw `d` uniformly from `[1, n-1]` and compute `Q = d·G`
    pub fn key_generation<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> Result<(EciesSecretKey, EciesPublicKey)> {
        let domain = &*self.domain;
        let d = random_scalar(rng, domain.order())?;
        let q = domain
            .curve()
            .scalar_multiplication(&d, domain.generator())?;

        let secret = EciesSecretKey::from_scalar(&d, domain.scalar_size())?;
        let public = EciesPublicKey::from_point(domain.curve(), q)?;
        debug!("generated ECIES key pair");
        Ok((secret, public))
    }

    /// Decode a public key and check it against this domain
    pub fn public_key_from_bytes(&self, bytes: &[u8]) -> Result<EciesPublicKey> {
        let curve = self.domain.curve();
        let point = curve.decode_point(bytes)?;
        let public = EciesPublicKey::from_point(curve, point)?;
        self.check_public_key(&public)?;
        Ok(public)
    }

    /// Decode a secret key and check `1 ≤ d < n`
    pub fn secret_key_from_bytes(&self, bytes: &[u8]) -> Result<EciesSecretKey> {
        validate::length("secret key", bytes.len(), self.domain.scalar_size())?;
        let d = BigUint::from_bytes_be(bytes);
        self.check_secret_scalar(&d)?;
        EciesSecretKey::from_scalar(&d, self.domain.scalar_size())
    }

    /// SHA-256 of the canonical encoding of `shared_point`, split in two
    pub fn derive_keys(&self, shared_point: &Point) -> Result<DerivedKeys> {
        let encoded = Zeroizing::new(
            self.domain
                .curve()
                .encode_point(shared_point)
                .map_err(|_| Error::KeyDerivationFailed("shared point does not fit the field"))?,
        );
        let digest = Zeroizing::new(Sha256::digest(&encoded));

        let mut keys = DerivedKeys {
            encryption_key: [0u8; AES128_KEY_SIZE],
            mac_key: [0u8; MAC_KEY_SIZE],
        };
        keys.encryption_key.copy_from_slice(&digest[..AES128_KEY_SIZE]);
        keys.mac_key.copy_from_slice(&digest[AES128_KEY_SIZE..]);
        Ok(keys)
    }

    /// Encrypt `message` for the holder of `recipient`
    ///
    /// The recipient key is validated before any randomness is drawn. The
    /// RNG then supplies the ephemeral scalar followed by the IV.
    pub fn encrypt<R: RngCore + CryptoRng>(
        &self,
        message: &[u8],
        recipient: &EciesPublicKey,
        rng: &mut R,
    ) -> Result<Envelope> {
        let _span = trace_span!("ecies encrypt", message_len = message.len()).entered();

        self.check_public_key(recipient)?;
        validate::parameter(
            message.len() < u32::MAX as usize - AES_BLOCK_SIZE,
            "message",
            "too long for the envelope encoding",
        )?;

        let domain = &*self.domain;
        let curve = domain.curve();

        let k = random_scalar(rng, domain.order())?;
        let ephemeral = curve.scalar_multiplication(&k, domain.generator())?;
        let shared = curve.scalar_multiplication(&k, recipient.point())?;
        if shared.is_identity() {
            return Err(Error::KeyDerivationFailed("shared point is the identity"));
        }
        let keys = self.derive_keys(&shared)?;

        let mut iv = [0u8; CBC_IV_SIZE];
        rng.fill_bytes(&mut iv);

        let ciphertext =
            Cbc::new(Aes128::new(keys.encryption_key()), &iv)?.encrypt_padded(message)?;
        let tag = HmacSha256::mac_parts(keys.mac_key(), &[&iv, &ciphertext])?;

        trace!(ciphertext_len = ciphertext.len(), "sealed envelope");
        Ok(Envelope {
            ephemeral_public_key: EciesPublicKey::from_point(curve, ephemeral)?,
            iv: iv.to_vec(),
            ciphertext,
            tag,
        })
    }

    /// Verify and decrypt `envelope` with the recipient's secret key
    ///
    /// `R` must be a non-identity curve point in its canonical encoding. A
    /// tag mismatch fails with [`Error::AuthenticationFailed`] before the
    /// ciphertext is decrypted.
    pub fn decrypt(&self, envelope: &Envelope, recipient: &EciesSecretKey) -> Result<Vec<u8>> {
        let _span =
            trace_span!("ecies decrypt", ciphertext_len = envelope.ciphertext.len()).entered();

        let d = recipient.scalar();
        self.check_secret_scalar(&d)?;

        let curve = self.domain.curve();
        let ephemeral = envelope.ephemeral_public_key.point();
        if !self.is_canonical(&envelope.ephemeral_public_key) {
            return Err(Error::InvalidEnvelope("ephemeral key encoding"));
        }
        if !curve.contains(ephemeral) {
            return Err(PrimitiveError::PointNotOnCurve {
                context: "ephemeral public key",
            }
            .into());
        }
        if ephemeral.is_identity() {
            return Err(Error::InvalidEnvelope("ephemeral key is the identity"));
        }
        if envelope.iv.len() != CBC_IV_SIZE {
            return Err(Error::InvalidEnvelope("IV length"));
        }

        let shared = curve.scalar_multiplication(&d, ephemeral)?;
        if shared.is_identity() {
            return Err(Error::KeyDerivationFailed("shared point is the identity"));
        }
        let keys = self.derive_keys(&shared)?;

        if let Err(err) = HmacSha256::verify_parts(
            keys.mac_key(),
            &[&envelope.iv, &envelope.ciphertext],
            &envelope.tag,
        ) {
            warn!("ECIES tag verification failed");
            return Err(err.into());
        }

        let plaintext = Cbc::new(Aes128::new(keys.encryption_key()), &envelope.iv)?
            .decrypt_padded(&envelope.ciphertext)?;
        trace!(plaintext_len = plaintext.len(), "opened envelope");
        Ok(plaintext)
    }

    fn check_public_key(&self, public: &EciesPublicKey) -> Result<()> {
        match public.point() {
            Point::Identity => Err(Error::InvalidKey("public key is the identity")),
            _ if !self.is_canonical(public) => {
                Err(Error::InvalidKey("public key encoding is not canonical"))
            }
            point if !self.domain.curve().contains(point) => {
                Err(Error::InvalidKey("public key is not on the curve"))
            }
            _ => Ok(()),
        }
    }

    /// Field-width encoding with coordinates reduced modulo `p`
    fn is_canonical(&self, key: &EciesPublicKey) -> bool {
        let curve = self.domain.curve();
        let reduced = match key.point() {
            Point::Identity => true,
            Point::Affine { x, y } => x < curve.p() && y < curve.p(),
        };
        reduced
            && curve
                .encode_point(key.point())
                .map_or(false, |encoded| encoded == key.as_bytes())
    }

    fn check_secret_scalar(&self, d: &BigUint) -> Result<()> {
        if d.is_zero() || d >= self.domain.order() {
            return Err(Error::InvalidKey("secret scalar out of range"));
        }
        Ok(())
    }
}

impl HybridEncryption for Ecies {
    type PublicKey = EciesPublicKey;
    type SecretKey = EciesSecretKey;
    type Envelope = Envelope;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn keypair<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> ApiResult<(Self::PublicKey, Self::SecretKey)> {
        let (secret, public) = self.key_generation(rng)?;
        Ok((public, secret))
    }

    fn seal<R: RngCore + CryptoRng>(
        &self,
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        rng: &mut R,
    ) -> ApiResult<Self::Envelope> {
        Ok(self.encrypt(plaintext, pk_recipient, rng)?)
    }

    fn open(&self, sk_recipient: &Self::SecretKey, envelope: &Self::Envelope) -> ApiResult<Vec<u8>> {
        Ok(self.decrypt(envelope, sk_recipient)?)
    }
}
