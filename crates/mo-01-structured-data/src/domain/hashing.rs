//! # Digest Composition
//!
//! Domain hash, message hash and the final signing digest:
//!
//! ```text
//! domain_hash    = SHA256(serialize(domain tuple))
//! message_hash   = SHA256(serialize(value))
//! signing_digest = SHA256(PREFIX ‖ domain_hash ‖ message_hash)
//! ```

use super::entities::{Domain, Hash};
use super::errors::EncodingError;
use super::value::StructuredValue;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Fixed protocol prefix of every signing digest ("SIP018").
pub const STRUCTURED_DATA_PREFIX: [u8; 6] = [0x53, 0x49, 0x50, 0x30, 0x31, 0x38];

/// SHA-256 of `data`.
pub fn sha256(data: &[u8]) -> Hash {
    Sha256::digest(data).into()
}

/// RIPEMD-160 of SHA-256 of `data`.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(Sha256::digest(data)).into()
}

/// First four bytes of the double SHA-256 of `version ‖ payload`.
pub(crate) fn checksum4(version: u8, payload: &[u8]) -> [u8; 4] {
    let mut hasher = Sha256::new();
    hasher.update([version]);
    hasher.update(payload);
    let twice = Sha256::digest(hasher.finalize());
    let mut out = [0u8; 4];
    out.copy_from_slice(&twice[..4]);
    out
}

/// Hash of the serialized domain tuple.
pub fn domain_hash(domain: &Domain) -> Result<Hash, EncodingError> {
    message_hash(&domain.to_structured_value())
}

/// Hash of a serialized structured value.
pub fn message_hash(value: &StructuredValue) -> Result<Hash, EncodingError> {
    Ok(sha256(&value.serialize()?))
}

/// Final digest signed by the owner.
pub fn signing_digest(domain_hash: &Hash, message_hash: &Hash) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(STRUCTURED_DATA_PREFIX);
    hasher.update(domain_hash);
    hasher.update(message_hash);
    hasher.finalize().into()
}

/// Signing digest of `value` under `domain_hash`.
pub fn structured_data_digest(
    domain_hash: &Hash,
    value: &StructuredValue,
) -> Result<Hash, EncodingError> {
    Ok(signing_digest(domain_hash, &message_hash(value)?))
}
