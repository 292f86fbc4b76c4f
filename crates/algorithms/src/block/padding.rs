//! PKCS#7 padding (RFC 5652, section 6.3)

use crate::error::{Error, Result};

/// Append 1..=block_size bytes, each equal to the pad length
pub fn pkcs7_pad(data: &[u8], block_size: usize) -> Vec<u8> {
    let pad_len = block_size - data.len() % block_size;
    let mut out = Vec::with_capacity(data.len() + pad_len);
    out.extend_from_slice(data);
    // pad_len <= block_size <= 255 for every cipher used here
    out.resize(data.len() + pad_len, pad_len as u8);
    out
}

/// Strip PKCS#7 padding, rejecting anything malformed
pub fn pkcs7_unpad(data: &[u8], block_size: usize) -> Result<&[u8]> {
    let malformed = Error::MalformedPadding { context: "PKCS#7" };

    if data.is_empty() || data.len() % block_size != 0 {
        return Err(malformed);
    }
    let pad_len = data[data.len() - 1] as usize;
    if pad_len == 0 || pad_len > block_size {
        return Err(malformed);
    }
    let (body, padding) = data.split_at(data.len() - pad_len);
    if padding.iter().any(|&b| b as usize != pad_len) {
        return Err(malformed);
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_lengths() {
        assert_eq!(pkcs7_pad(b"", 16), vec![16u8; 16]);
        assert_eq!(pkcs7_pad(&[0xAA; 15], 16)[15], 0x01);
        assert_eq!(pkcs7_pad(&[0xAA; 16], 16).len(), 32);
        assert_eq!(pkcs7_pad(b"Hello, ECC!", 16).len(), 16);
    }

    #[test]
    fn test_unpad_inverts_pad() {
        for len in 0..40 {
            let data = vec![0x5Au8; len];
            let padded = pkcs7_pad(&data, 16);
            assert_eq!(pkcs7_unpad(&padded, 16).unwrap(), data.as_slice());
        }
    }

    #[test]
    fn test_unpad_rejects_malformed() {
        let malformed = Err(Error::MalformedPadding { context: "PKCS#7" });
        assert_eq!(pkcs7_unpad(&[], 16), malformed);
        assert_eq!(pkcs7_unpad(&[1u8; 15], 16), malformed);
        assert_eq!(pkcs7_unpad(&[0u8; 16], 16), malformed);
        assert_eq!(pkcs7_unpad(&[17u8; 16], 16), malformed);

        let mut bad = pkcs7_pad(b"abc", 16);
        bad[10] ^= 0x01; // inside the 13 bytes of padding
        assert_eq!(pkcs7_unpad(&bad, 16), malformed);
    }
}
