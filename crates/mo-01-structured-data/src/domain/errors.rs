//! # Structured Data Errors
//!
//! Error types for encoding, account parsing, signing and signer recovery.

use thiserror::Error;

/// Errors raised while serializing a structured value.
///
/// Encoding is total for well-formed values; every variant here names the
/// malformed piece of input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncodingError {
    /// A string-ascii value contains a byte outside the printable ASCII range
    #[error("Non-ASCII byte 0x{byte:02x} at index {index}")]
    NonAscii { index: usize, byte: u8 },

    /// A tuple field name is empty, too long, or uses invalid characters
    #[error("Invalid tuple field name: {0:?}")]
    InvalidFieldName(String),

    /// The same field name appears twice in one tuple
    #[error("Duplicate tuple field: {0:?}")]
    DuplicateField(String),

    /// A length prefix does not fit in 32 bits
    #[error("Payload too long: {len} bytes exceeds {max}")]
    LengthOverflow { len: usize, max: usize },

    /// A contract name violates the naming rules
    #[error("Invalid contract name: {0:?}")]
    InvalidContractName(String),

    /// A numeric literal does not fit the fixed 128-bit width
    #[error("Unsigned integer out of range: {0}")]
    UIntOutOfRange(String),
}

/// Errors raised while parsing or validating an account identity.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AddressError {
    /// Address does not start with `S`
    #[error("Address must start with 'S': {0}")]
    MissingPrefix(String),

    /// A character outside the c32 alphabet was found
    #[error("Invalid c32 character {0:?}")]
    InvalidCharacter(char),

    /// Version byte must be below 32
    #[error("Invalid address version: {0}")]
    InvalidVersion(u8),

    /// Decoded payload has the wrong size
    #[error("Invalid address length: expected 24 bytes, got {0}")]
    InvalidLength(usize),

    /// Checksum does not match the payload
    #[error("Address checksum mismatch")]
    ChecksumMismatch,

    /// Contract-qualified part is malformed
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

/// Errors raised by signing and signer recovery.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// The private key is malformed or out of range
    #[error("Invalid private key")]
    InvalidKey,

    /// The public key is not a valid compressed secp256k1 point
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// The signature does not have exactly 65 bytes
    #[error("Invalid signature length: expected 65 bytes, got {0}")]
    InvalidLength(usize),

    /// Hex input could not be decoded
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Recovery indicator outside 0..=3
    #[error("Invalid recovery ID: {0}")]
    InvalidRecoveryId(u8),

    /// r or s is zero or not below the curve order, or s is in the high half
    #[error("Signature scalar out of range")]
    ScalarOutOfRange,

    /// Public key recovery failed (e.g. r is not an x-coordinate on the curve)
    #[error("Failed to recover public key")]
    RecoveryFailed,

    /// The value to be signed could not be serialized
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}

impl SignatureError {
    /// Whether this error stems from the signature itself rather than the
    /// key or the signed value.
    pub fn is_invalid_signature(&self) -> bool {
        matches!(
            self,
            SignatureError::InvalidLength(_)
                | SignatureError::InvalidHex(_)
                | SignatureError::InvalidRecoveryId(_)
                | SignatureError::ScalarOutOfRange
                | SignatureError::RecoveryFailed
        )
    }
}
