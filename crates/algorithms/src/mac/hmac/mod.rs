//! HMAC-SHA-256 (RFC 2104) over the `hmac` crate
//!
//! Tag verification goes through the constant-time comparison of
//! `curvecrypt-internal`, so a mismatch takes the same time wherever the
//! first differing byte is.

use ::hmac::{Hmac, Mac};
use curvecrypt_internal::constant_time::ct_eq;
use curvecrypt_params::utils::hash::HMAC_SHA256_TAG_SIZE;
use zeroize::Zeroize;

use crate::error::{validate, Error, Result};

type Inner = Hmac<sha2::Sha256>;

/// Streaming HMAC-SHA-256
#[derive(Clone)]
pub struct HmacSha256 {
    inner: Inner,
}

impl HmacSha256 {
    /// Tag size in bytes
    pub const TAG_SIZE: usize = HMAC_SHA256_TAG_SIZE;

    const ALGORITHM: &'static str = "HMAC-SHA256";

    /// Create a new HMAC instance from `key`
    pub fn new(key: &[u8]) -> Result<Self> {
        let inner = Inner::new_from_slice(key).map_err(|_| Error::param("hmac key", "rejected"))?;
        Ok(Self { inner })
    }

    /// Feed additional `data` into the MAC
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Finalise and return the tag
    pub fn finalize(self) -> [u8; HMAC_SHA256_TAG_SIZE] {
        let mut tag = [0u8; HMAC_SHA256_TAG_SIZE];
        tag.copy_from_slice(&self.inner.finalize().into_bytes());
        tag
    }

    /// Tag over the concatenation of `parts`
    pub fn mac_parts(key: &[u8], parts: &[&[u8]]) -> Result<[u8; HMAC_SHA256_TAG_SIZE]> {
        let mut mac = Self::new(key)?;
        for part in parts {
            mac.update(part);
        }
        Ok(mac.finalize())
    }

    /// Recompute the tag over `parts` and compare it to `tag` in constant time
    pub fn verify_parts(key: &[u8], parts: &[&[u8]], tag: &[u8]) -> Result<()> {
        validate::length("HMAC tag", tag.len(), Self::TAG_SIZE)?;
        let mut expected = Self::mac_parts(key, parts)?;
        let ok = ct_eq(expected, tag);
        expected.zeroize();
        validate::authentication(ok, Self::ALGORITHM)
    }
}

#[cfg(test)]
mod tests;
