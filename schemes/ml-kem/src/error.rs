//! Error types for ML-KEM key handling.
//!
//! Key generation itself has no fallible paths: every internal
//! operation is a total function over fixed-size buffers. Errors only
//! arise when decoding externally supplied key bytes.

use std::fmt;

/// Errors that can occur when decoding ML-KEM keys from bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MlKemError {
    /// An input byte slice has the wrong length.
    InvalidLength {
        /// What was being decoded.
        context: &'static str,
        /// Expected byte count.
        expected: usize,
        /// Actual byte count received.
        actual: usize,
    },

    /// Decoding/unpacking failed.
    DecodingError {
        /// What was being decoded.
        context: &'static str,
    },
}

impl fmt::Display for MlKemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MlKemError::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "invalid length for {}: expected {} bytes, got {}",
                    context, expected, actual
                )
            }
            MlKemError::DecodingError { context } => {
                write!(f, "decoding error: {}", context)
            }
        }
    }
}

impl std::error::Error for MlKemError {}

/// Result type alias for ML-KEM operations.
pub type Result<T> = std::result::Result<T, MlKemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_length() {
        let err = MlKemError::InvalidLength {
            context: "public key",
            expected: 800,
            actual: 799,
        };
        assert_eq!(
            err.to_string(),
            "invalid length for public key: expected 800 bytes, got 799"
        );
    }

    #[test]
    fn test_display_decoding_error() {
        let err = MlKemError::DecodingError { context: "t1" };
        assert_eq!(err.to_string(), "decoding error: t1");
    }
}
