//! Cipher Block Chaining (CBC) mode implementation
//!
//! Each plaintext block is XORed with the previous ciphertext block before
//! encryption; the first block is XORed with the initialization vector.
//! Follows NIST SP 800-38A. The padded entry points add PKCS#7 so that
//! messages of any length can be processed.

use zeroize::Zeroize;

use super::super::padding::{pkcs7_pad, pkcs7_unpad};
use super::super::BlockCipher;
use crate::error::{validate, Error, Result};

/// CBC mode over a keyed block cipher with a fixed IV
#[derive(Clone)]
pub struct Cbc<B: BlockCipher> {
    cipher: B,
    iv: Vec<u8>,
}

impl<B: BlockCipher> Cbc<B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    ///
    /// The IV must be exactly one block long.
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        validate::length("CBC initialization vector", iv.len(), B::BLOCK_SIZE)?;
        Ok(Self {
            cipher,
            iv: iv.to_vec(),
        })
    }

    /// The initialization vector this instance chains from
    pub fn iv(&self) -> &[u8] {
        &self.iv
    }

    /// Encrypts block-aligned plaintext without padding
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::BLOCK_SIZE;
        check_aligned("CBC plaintext", plaintext.len(), block_size)?;

        let mut ciphertext = plaintext.to_vec();
        let mut prev_block = self.iv.clone();

        for block in ciphertext.chunks_mut(block_size) {
            xor_in_place(block, &prev_block);
            self.cipher.encrypt_block(block)?;
            prev_block.copy_from_slice(block);
        }

        Ok(ciphertext)
    }

    /// Decrypts block-aligned ciphertext without removing padding
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::BLOCK_SIZE;
        check_aligned("CBC ciphertext", ciphertext.len(), block_size)?;

        let mut plaintext = ciphertext.to_vec();
        let mut prev_block = self.iv.clone();

        for (block, current) in plaintext
            .chunks_mut(block_size)
            .zip(ciphertext.chunks(block_size))
        {
            self.cipher.decrypt_block(block)?;
            xor_in_place(block, &prev_block);
            prev_block.copy_from_slice(current);
        }

        Ok(plaintext)
    }

    /// PKCS#7-pads and encrypts a message of any length
    pub fn encrypt_padded(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut padded = pkcs7_pad(plaintext, B::BLOCK_SIZE);
        let ciphertext = self.encrypt(&padded);
        padded.zeroize();
        ciphertext
    }

    /// Decrypts and strips PKCS#7 padding
    ///
    /// Fails with [`Error::MalformedPadding`] if the recovered padding is
    /// invalid; no partial plaintext is returned in that case.
    pub fn decrypt_padded(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.is_empty() {
            return Err(Error::MalformedPadding { context: "CBC" });
        }
        let mut padded = self.decrypt(ciphertext)?;
        let result = pkcs7_unpad(&padded, B::BLOCK_SIZE).map(<[u8]>::to_vec);
        padded.zeroize();
        result
    }
}

fn check_aligned(context: &'static str, len: usize, block_size: usize) -> Result<()> {
    if len % block_size != 0 {
        return Err(Error::Length {
            context,
            expected: (len / block_size + 1) * block_size,
            actual: len,
        });
    }
    Ok(())
}

fn xor_in_place(block: &mut [u8], mask: &[u8]) {
    for (b, m) in block.iter_mut().zip(mask) {
        *b ^= m;
    }
}

#[cfg(test)]
mod tests;
