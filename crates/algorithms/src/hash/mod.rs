//! SHA-256 adapter over the `sha2` crate

use curvecrypt_params::utils::hash::SHA256_OUTPUT_SIZE;
use sha2::Digest;

/// SHA-256 hash function
#[derive(Clone, Default)]
pub struct Sha256 {
    inner: sha2::Sha256,
}

impl Sha256 {
    /// Output size in bytes
    pub const OUTPUT_SIZE: usize = SHA256_OUTPUT_SIZE;

    /// Fresh hashing state
    pub fn new() -> Self {
        Self::default()
    }

    /// Absorb more input
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Finish and return the digest
    pub fn finalize(self) -> [u8; SHA256_OUTPUT_SIZE] {
        let mut out = [0u8; SHA256_OUTPUT_SIZE];
        out.copy_from_slice(&self.inner.finalize());
        out
    }

    /// One-shot digest of `data`
    pub fn digest(data: &[u8]) -> [u8; SHA256_OUTPUT_SIZE] {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_abc() {
        assert_eq!(
            hex::encode(Sha256::digest(b"abc")),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_sha256_incremental_matches_oneshot() {
        let mut hasher = Sha256::new();
        hasher.update(b"Hello, ");
        hasher.update(b"ECC!");
        assert_eq!(hasher.finalize(), Sha256::digest(b"Hello, ECC!"));
    }
}
