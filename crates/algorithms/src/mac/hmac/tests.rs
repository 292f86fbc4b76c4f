use super::*;

// RFC 4231, test case 2
#[test]
fn test_hmac_sha256_rfc4231_case2() {
    let tag = HmacSha256::mac_parts(b"Jefe", &[b"what do ya want for nothing?"]).unwrap();
    assert_eq!(
        hex::encode(tag),
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
    );
}

#[test]
fn test_hmac_parts_equal_concatenation() {
    let key = [0x0bu8; 16];
    let split = HmacSha256::mac_parts(&key, &[b"iv-bytes", b"ciphertext"]).unwrap();
    let whole = HmacSha256::mac_parts(&key, &[b"iv-bytesciphertext"]).unwrap();
    assert_eq!(split, whole);
}

#[test]
fn test_hmac_verify() {
    let key = [0x42u8; 16];
    let mut tag = HmacSha256::mac_parts(&key, &[b"data"]).unwrap();
    assert!(HmacSha256::verify_parts(&key, &[b"data"], &tag).is_ok());

    tag[0] ^= 0x80;
    assert_eq!(
        HmacSha256::verify_parts(&key, &[b"data"], &tag),
        Err(Error::Authentication {
            algorithm: "HMAC-SHA256"
        })
    );
}

#[test]
fn test_hmac_verify_rejects_truncated_tag() {
    let key = [0x42u8; 16];
    let tag = HmacSha256::mac_parts(&key, &[b"data"]).unwrap();
    assert!(matches!(
        HmacSha256::verify_parts(&key, &[b"data"], &tag[..16]),
        Err(Error::Length { .. })
    ));
}
