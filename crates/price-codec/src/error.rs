//! Error types for key loading and the price codec.

use thiserror::Error;

use crate::crypto::{ENCODED_PRICE_LEN, IV_LEN, WIRE_LEN};

/// Errors produced while decoding key material.
///
/// The variant records which of the two keys was malformed so that callers
/// can report the right one; the underlying base64 failure is the source.
#[derive(Debug, Error)]
pub enum KeyError {
    /// The integrity key is not valid base64 under the selected engine.
    #[error("could not decode price integrity key")]
    Integrity(#[source] base64::DecodeError),

    /// The encryption key is not valid base64 under the selected engine.
    #[error("could not decode price encryption key")]
    Encryption(#[source] base64::DecodeError),
}

/// Errors produced by price encryption and decryption.
///
/// Every failure is terminal for the attempt: the codec never retries and
/// never substitutes a default price.
#[derive(Debug, Error)]
pub enum PriceError {
    /// The integrity or encryption key is empty.
    #[error("encryption and integrity keys are required")]
    EmptyKey,

    /// The initialization vector has the wrong length.
    #[error("initialization vector must be {IV_LEN} bytes, got {got}")]
    InvalidIvLength {
        /// Length of the vector actually supplied.
        got: usize,
    },

    /// The encoded price string has the wrong length.
    #[error("encoded price must be {ENCODED_PRICE_LEN} characters, got {got}")]
    WrongEncodedLength {
        /// Length of the string actually supplied.
        got: usize,
    },

    /// The encoded price is not valid unpadded URL-safe base64.
    #[error("encoded price is not valid base64")]
    Base64(#[source] base64::DecodeError),

    /// The decoded buffer is not a well-formed wire buffer.
    #[error("decoded price must be {WIRE_LEN} bytes, got {got}")]
    WrongDecodedLength {
        /// Length of the decoded buffer.
        got: usize,
    },

    /// The integrity tag did not verify.
    ///
    /// Opaque by contract: a wrong key pair and an altered payload are
    /// reported identically.
    #[error("price integrity is not valid")]
    Integrity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_error_names_the_failing_key() {
        let integrity = KeyError::Integrity(base64::DecodeError::InvalidPadding);
        let encryption = KeyError::Encryption(base64::DecodeError::InvalidPadding);
        assert!(integrity.to_string().contains("integrity key"));
        assert!(encryption.to_string().contains("encryption key"));
    }

    #[test]
    fn length_errors_carry_both_lengths() {
        let e = PriceError::WrongEncodedLength { got: 3 };
        assert!(e.to_string().contains("38"));
        assert!(e.to_string().contains('3'));
    }

    #[test]
    fn integrity_error_is_opaque() {
        let msg = PriceError::Integrity.to_string();
        assert_eq!(msg, "price integrity is not valid");
        assert!(!msg.contains("key"));
        assert!(!msg.contains("tamper"));
    }
}
