//! Error handling for PKE operations.

use curvecrypt_algorithms::error::Error as PrimitiveError;
use curvecrypt_api::error::Error as CoreError;
use thiserror::Error as ThisError;

/// Error type for PKE operations.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Failure inside the curve arithmetic or a symmetric primitive
    #[error("PKE primitive error: {0}")]
    Primitive(PrimitiveError),

    /// The envelope tag did not verify; nothing was decrypted
    #[error("PKE authentication failed: MAC mismatch")]
    AuthenticationFailed,

    /// The tag verified but the decrypted padding was invalid
    #[error("PKE decryption failed: malformed padding")]
    MalformedPadding,

    /// Envelope bytes or fields are structurally wrong
    #[error("Invalid PKE envelope: {0}")]
    InvalidEnvelope(&'static str),

    /// Symmetric keys could not be derived from the shared point
    #[error("PKE key derivation failed: {0}")]
    KeyDerivationFailed(&'static str),

    /// A key does not belong to the domain it is used with
    #[error("Invalid PKE key: {0}")]
    InvalidKey(&'static str),
}

// Authentication and padding failures surface as their own kinds so
// callers never have to look inside `Primitive` for them.
impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        match err {
            PrimitiveError::Authentication { .. } => Error::AuthenticationFailed,
            PrimitiveError::MalformedPadding { .. } => Error::MalformedPadding,
            other => Error::Primitive(other),
        }
    }
}

// Conversion from PKE Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        let message = err.to_string();
        match err {
            Error::Primitive(e) => e.into(),
            Error::AuthenticationFailed => CoreError::AuthenticationFailed {
                context: "ECIES",
                message,
            },
            Error::MalformedPadding => CoreError::DecryptionFailed {
                context: "ECIES",
                message,
            },
            Error::InvalidEnvelope(_) => CoreError::InvalidCiphertext {
                context: "ECIES envelope",
                message,
            },
            Error::KeyDerivationFailed(_) => CoreError::Other {
                context: "ECIES KDF",
                message,
            },
            Error::InvalidKey(_) => CoreError::InvalidKey {
                context: "ECIES",
                message,
            },
        }
    }
}

/// Result type for PKE operations.
pub type Result<T> = core::result::Result<T, Error>;
