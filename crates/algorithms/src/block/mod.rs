//! Block cipher layer
//!
//! The raw AES permutation comes from the `aes` crate; chaining and
//! padding are implemented here on top of the [`BlockCipher`] trait.

pub mod aes;
pub mod modes;
pub mod padding;

// Re-exports
pub use self::aes::Aes128;
pub use modes::cbc::Cbc;

use crate::error::Result;

/// A keyed block permutation
pub trait BlockCipher {
    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Algorithm name
    fn name() -> &'static str;

    /// Encrypt one block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypt one block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;
}
