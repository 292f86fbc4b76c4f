//! ECIES envelope and its byte format
//!
//! Format on wire:
//! `R_len (1 byte) || R || IV_len (1 byte) || IV || C_len (4 bytes, BE) || C || T (32 bytes)`

use curvecrypt_algorithms::Point;
use curvecrypt_api::error::{Error as ApiError, Result as ApiResult};
use curvecrypt_api::Serialize;
use curvecrypt_params::utils::hash::HMAC_SHA256_TAG_SIZE;
use curvecrypt_params::utils::symmetric::CBC_IV_SIZE;

use super::keys::EciesPublicKey;
use crate::error::{Error, Result};

/// Everything the recipient needs to decrypt: `(R, iv, ciphertext, tag)`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Envelope {
    pub(crate) ephemeral_public_key: EciesPublicKey,
    pub(crate) iv: Vec<u8>,
    pub(crate) ciphertext: Vec<u8>,
    pub(crate) tag: [u8; HMAC_SHA256_TAG_SIZE],
}

impl Envelope {
    /// Ephemeral public point R = k·G
    pub fn ephemeral_public_key(&self) -> &EciesPublicKey {
        &self.ephemeral_public_key
    }

    /// CBC initialization vector
    pub fn iv(&self) -> &[u8] {
        &self.iv
    }

    /// AES-128-CBC ciphertext, PKCS#7 padded
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// HMAC-SHA-256 over IV‖ciphertext
    pub fn tag(&self) -> &[u8; HMAC_SHA256_TAG_SIZE] {
        &self.tag
    }

    /// Encoded length in bytes
    pub fn encoded_len(&self) -> usize {
        1 + self.ephemeral_public_key.as_bytes().len()
            + 1
            + self.iv.len()
            + 4
            + self.ciphertext.len()
            + HMAC_SHA256_TAG_SIZE
    }

    fn encode(&self) -> Vec<u8> {
        let r = self.ephemeral_public_key.as_bytes();
        debug_assert!(r.len() <= usize::from(u8::MAX));
        debug_assert!(self.iv.len() <= usize::from(u8::MAX));
        debug_assert!(u32::try_from(self.ciphertext.len()).is_ok());

        let mut out = Vec::with_capacity(self.encoded_len());
        out.push(r.len() as u8);
        out.extend_from_slice(r);
        out.push(self.iv.len() as u8);
        out.extend_from_slice(&self.iv);
        out.extend_from_slice(&(self.ciphertext.len() as u32).to_be_bytes());
        out.extend_from_slice(&self.ciphertext);
        out.extend_from_slice(&self.tag);
        out
    }

    /// Parse the wire format; every length is checked before it is used
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let mut reader = Reader { bytes, pos: 0 };

        let r_len = usize::from(reader.take(1, "ephemeral key length truncated")?[0]);
        let r_bytes = reader.take(r_len, "ephemeral key truncated")?;
        let point = Point::from_bytes(r_bytes)
            .map_err(|_| Error::InvalidEnvelope("ephemeral key encoding"))?;

        let iv_len = usize::from(reader.take(1, "IV length truncated")?[0]);
        if iv_len != CBC_IV_SIZE {
            return Err(Error::InvalidEnvelope("IV length"));
        }
        let iv = reader.take(iv_len, "IV truncated")?.to_vec();

        let len_bytes: [u8; 4] = reader
            .take(4, "ciphertext length truncated")?
            .try_into()
            .map_err(|_| Error::InvalidEnvelope("ciphertext length truncated"))?;
        let c_len = u32::from_be_bytes(len_bytes) as usize;
        let ciphertext = reader.take(c_len, "ciphertext truncated")?.to_vec();

        let tag: [u8; HMAC_SHA256_TAG_SIZE] = reader
            .take(HMAC_SHA256_TAG_SIZE, "tag truncated")?
            .try_into()
            .map_err(|_| Error::InvalidEnvelope("tag truncated"))?;

        if reader.pos != bytes.len() {
            return Err(Error::InvalidEnvelope("trailing data"));
        }

        Ok(Self {
            ephemeral_public_key: EciesPublicKey::from_parts(point, r_bytes.to_vec()),
            iv,
            ciphertext,
            tag,
        })
    }
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, len: usize, what: &'static str) -> Result<&'a [u8]> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.bytes.len())
            .ok_or(Error::InvalidEnvelope(what))?;
        let bytes = self.bytes;
        let out = &bytes[self.pos..end];
        self.pos = end;
        Ok(out)
    }
}

impl Serialize for Envelope {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        Self::decode(bytes).map_err(ApiError::from)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.encode()
    }
}
