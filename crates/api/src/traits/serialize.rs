//! Byte encodings for keys and envelopes

use crate::Result;
use zeroize::Zeroizing;

/// Public values with a canonical byte encoding
pub trait Serialize: Sized {
    /// Decode from `bytes`. Structural checks only; domain membership is
    /// left to the scheme that consumes the value.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Canonical encoding
    fn to_bytes(&self) -> Vec<u8>;
}

/// Secret values whose encoding must not outlive its use
pub trait SerializeSecret: Sized {
    /// Decode from `bytes`; the caller owns wiping its input buffer
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Encoding wrapped so that it is wiped when dropped
    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>>;
}
