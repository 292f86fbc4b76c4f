//! AES-128 adapter over the `aes` crate

use ::aes::cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};
use curvecrypt_params::utils::symmetric::{AES128_KEY_SIZE, AES_BLOCK_SIZE};

use super::BlockCipher;
use crate::error::{validate, Result};

/// AES-128 block cipher
///
/// The expanded key schedule is wiped on drop by the underlying
/// implementation.
#[derive(Clone)]
pub struct Aes128 {
    inner: ::aes::Aes128,
}

impl Aes128 {
    /// Key the cipher
    pub fn new(key: &[u8; AES128_KEY_SIZE]) -> Self {
        Self {
            inner: ::aes::Aes128::new(GenericArray::from_slice(key)),
        }
    }

    /// Key the cipher from a slice, checking its length
    pub fn from_slice(key: &[u8]) -> Result<Self> {
        validate::length("AES-128 key", key.len(), AES128_KEY_SIZE)?;
        Ok(Self {
            inner: ::aes::Aes128::new(GenericArray::from_slice(key)),
        })
    }
}

impl BlockCipher for Aes128 {
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-128"
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;
        self.inner.encrypt_block(GenericArray::from_mut_slice(block));
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;
        self.inner.decrypt_block(GenericArray::from_mut_slice(block));
        Ok(())
    }
}

impl core::fmt::Debug for Aes128 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Aes128 { .. }")
    }
}
