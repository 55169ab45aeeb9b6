//! Error types for WOTS operations.

use core::fmt;

/// Result type alias using [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during WOTS operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A scheme parameter was rejected during parameter derivation.
    InvalidParameter {
        /// Parameter name (`"n"` or `"w"`).
        name: &'static str,
        /// Rejected value.
        value: usize,
    },

    /// Invalid key length provided.
    InvalidKeyLength {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length provided.
        actual: usize,
    },

    /// Invalid signature length.
    InvalidSignatureLength {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length provided.
        actual: usize,
    },

    /// Signature verification failed.
    VerificationFailed,

    /// Parameter set not supported.
    UnsupportedParameterSet,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter { name, value } => {
                write!(f, "invalid parameter: {name} = {value}")
            }
            Error::InvalidKeyLength { expected, actual } => {
                write!(f, "invalid key length: expected {expected}, got {actual}")
            }
            Error::InvalidSignatureLength { expected, actual } => {
                write!(
                    f,
                    "invalid signature length: expected {expected}, got {actual}"
                )
            }
            Error::VerificationFailed => write!(f, "signature verification failed"),
            Error::UnsupportedParameterSet => write!(f, "unsupported parameter set"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::InvalidParameter { name: "w", value: 7 };
        assert_eq!(err.to_string(), "invalid parameter: w = 7");

        let err = Error::InvalidKeyLength {
            expected: 32,
            actual: 16,
        };
        assert_eq!(err.to_string(), "invalid key length: expected 32, got 16");

        assert_eq!(
            Error::VerificationFailed.to_string(),
            "signature verification failed"
        );
    }
}
