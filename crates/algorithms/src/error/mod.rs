//! Error handling for cryptographic primitives

use std::borrow::Cow;

use curvecrypt_api::Error as CoreError;
use thiserror::Error as ThisError;

/// The error type for cryptographic primitives
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Parameter validation error
    #[error("Invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    #[error("Invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Curve parameters satisfy 4a³ + 27b² ≡ 0 (mod p)
    #[error("Singular curve: 4a^3 + 27b^2 is zero modulo p")]
    SingularCurve,

    /// A point failed the curve equation check
    #[error("Point not on curve: {context}")]
    PointNotOnCurve {
        /// Where the point came from
        context: &'static str,
    },

    /// The slope denominator of the group law is not invertible
    #[error("Zero denominator in {operation}")]
    ZeroDenominator {
        /// Group operation that hit the zero denominator
        operation: &'static str,
    },

    /// The value shares a factor with the modulus
    #[error("No modular inverse exists")]
    NoInverseExists,

    /// PKCS#7 padding could not be removed
    #[error("Malformed padding in {context}")]
    MalformedPadding {
        /// Mode that found the bad padding
        context: &'static str,
    },

    /// Authentication failure (e.g., MAC tag verification)
    #[error("Authentication failed for {algorithm}")]
    Authentication {
        /// Algorithm that failed authentication
        algorithm: &'static str,
    },
}

// Add convenience helper
impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for cryptographic primitives operations
pub type Result<T> = core::result::Result<T, Error>;

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        let message = err.to_string();
        match err {
            Error::Parameter { .. } => CoreError::InvalidParameter {
                context: "primitives",
                message,
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::SingularCurve => CoreError::InvalidParameter {
                context: "curve parameters",
                message,
            },
            Error::PointNotOnCurve { context } => CoreError::InvalidKey { context, message },
            Error::ZeroDenominator { operation } => CoreError::ArithmeticError {
                context: operation,
                message,
            },
            Error::NoInverseExists => CoreError::ArithmeticError {
                context: "modular inverse",
                message,
            },
            Error::MalformedPadding { context } => CoreError::DecryptionFailed { context, message },
            Error::Authentication { algorithm } => CoreError::AuthenticationFailed {
                context: algorithm,
                message,
            },
        }
    }
}

// Include the validation submodule
pub mod validate;

#[cfg(test)]
mod tests;
