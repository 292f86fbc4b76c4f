use super::*;

#[test]
fn test_error_conversion() {
    let err = Error::param("curve modulus", "must be non-zero");
    match CoreError::from(err) {
        CoreError::InvalidParameter { message, .. } => {
            assert!(message.contains("curve modulus"));
        }
        other => panic!("Expected InvalidParameter error, got {:?}", other),
    }

    let err = Error::Length {
        context: "CBC ciphertext",
        expected: 32,
        actual: 17,
    };
    match CoreError::from(err) {
        CoreError::InvalidLength {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "CBC ciphertext");
            assert_eq!(expected, 32);
            assert_eq!(actual, 17);
        }
        other => panic!("Expected InvalidLength error, got {:?}", other),
    }

    let err = Error::Authentication {
        algorithm: "HMAC-SHA256",
    };
    assert!(matches!(
        CoreError::from(err),
        CoreError::AuthenticationFailed {
            context: "HMAC-SHA256",
            ..
        }
    ));
}

#[test]
fn test_curve_error_kinds_stay_distinct() {
    assert_ne!(Error::SingularCurve, Error::NoInverseExists);
    assert_ne!(
        Error::ZeroDenominator {
            operation: "point doubling"
        },
        Error::NoInverseExists
    );
    assert_eq!(
        Error::ZeroDenominator {
            operation: "point doubling"
        }
        .to_string(),
        "Zero denominator in point doubling"
    );
}

#[test]
fn test_validation_functions() {
    assert!(validate::parameter(true, "test", "should pass").is_ok());
    match validate::parameter(false, "test", "should fail").unwrap_err() {
        Error::Parameter { name, reason } => {
            assert_eq!(name, "test");
            assert_eq!(reason, "should fail");
        }
        other => panic!("Expected Parameter error, got {:?}", other),
    }

    assert!(validate::length("buffer", 32, 32).is_ok());
    assert_eq!(
        validate::length("buffer", 16, 32).unwrap_err(),
        Error::Length {
            context: "buffer",
            expected: 32,
            actual: 16
        }
    );

    assert!(validate::authentication(true, "HMAC").is_ok());
    assert_eq!(
        validate::authentication(false, "HMAC").unwrap_err(),
        Error::Authentication { algorithm: "HMAC" }
    );
}
