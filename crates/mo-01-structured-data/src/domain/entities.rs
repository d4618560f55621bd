//! # Domain Entities
//!
//! Signing domains, compressed public keys and 65-byte recoverable
//! signatures, plus the request/result types used for batch verification.

use super::errors::SignatureError;
use super::principal::AccountId;
use super::value::StructuredValue;
use k256::ecdsa::VerifyingKey;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// 32-byte digest.
pub type Hash = [u8; 32];

/// Chain identifier of the main network.
pub const CHAIN_ID_MAINNET: u32 = 1;
/// Chain identifier of the test network.
pub const CHAIN_ID_TESTNET: u32 = 0x8000_0000;

/// Encode bytes as `0x`-prefixed lowercase hex.
pub fn to_prefixed_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Decode hex with or without a `0x` prefix.
pub fn from_prefixed_hex(s: &str) -> Result<Vec<u8>, SignatureError> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    hex::decode(digits).map_err(|e| SignatureError::InvalidHex(e.to_string()))
}

// =============================================================================
// Signing domain
// =============================================================================

/// Application and network context a signature is bound to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Domain {
    /// Application name
    pub name: String,
    /// Application version
    pub version: String,
    /// Network chain identifier
    pub chain_id: u32,
}

impl Domain {
    /// Create a new signing domain.
    pub fn new(name: impl Into<String>, version: impl Into<String>, chain_id: u32) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            chain_id,
        }
    }

    /// The domain tuple, fields in the wire order `chain-id`, `name`, `version`.
    ///
    /// Existing signers emit tuple fields in this order; any other order
    /// yields a different domain hash.
    pub fn to_structured_value(&self) -> StructuredValue {
        StructuredValue::tuple([
            ("chain-id", StructuredValue::uint(self.chain_id as u128)),
            ("name", StructuredValue::ascii(self.name.clone())),
            ("version", StructuredValue::ascii(self.version.clone())),
        ])
    }
}

// =============================================================================
// secp256k1 public key
// =============================================================================

/// Compressed secp256k1 public key (33 bytes).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PublicKey([u8; 33]);

impl PublicKey {
    /// Create from compressed bytes (33 bytes, starting with 0x02 or 0x03).
    pub fn from_bytes(bytes: [u8; 33]) -> Result<Self, SignatureError> {
        // Validate it's a valid compressed point
        VerifyingKey::from_sec1_bytes(&bytes).map_err(|_| SignatureError::InvalidPublicKey)?;
        Ok(Self(bytes))
    }

    /// Create from a slice that must hold exactly 33 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SignatureError> {
        let array: [u8; 33] = bytes
            .try_into()
            .map_err(|_| SignatureError::InvalidPublicKey)?;
        Self::from_bytes(array)
    }

    /// Parse from hex, with or without `0x`.
    pub fn from_hex(s: &str) -> Result<Self, SignatureError> {
        Self::from_slice(&from_prefixed_hex(s)?)
    }

    pub(crate) fn from_verifying_key(key: &VerifyingKey) -> Self {
        let encoded = key.to_encoded_point(true);
        let mut bytes = [0u8; 33];
        bytes.copy_from_slice(encoded.as_bytes());
        Self(bytes)
    }

    /// Raw compressed bytes.
    pub fn as_bytes(&self) -> &[u8; 33] {
        &self.0
    }

    /// Account controlled by this key under `version`.
    pub fn to_account(&self, version: u8) -> Result<AccountId, super::errors::AddressError> {
        AccountId::from_public_key(version, self)
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", hex::encode(self.0))
    }
}

impl FromStr for PublicKey {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

// =============================================================================
// Recoverable signature
// =============================================================================

/// Recoverable ECDSA signature in wire order: `r ‖ s ‖ v` (65 bytes).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecoverableSignature([u8; 65]);

impl RecoverableSignature {
    /// Wire length in bytes.
    pub const LEN: usize = 65;

    /// Wrap bytes already in `r ‖ s ‖ v` order.
    pub fn from_bytes(bytes: [u8; 65]) -> Self {
        Self(bytes)
    }

    /// Wrap a slice that must hold exactly 65 bytes in `r ‖ s ‖ v` order.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SignatureError> {
        let array: [u8; 65] = bytes
            .try_into()
            .map_err(|_| SignatureError::InvalidLength(bytes.len()))?;
        Ok(Self(array))
    }

    /// Convert from the signer's native `v ‖ r ‖ s` layout.
    pub fn from_native(native: [u8; 65]) -> Self {
        let mut wire = [0u8; 65];
        wire[..64].copy_from_slice(&native[1..]);
        wire[64] = native[0];
        Self(wire)
    }

    /// The native `v ‖ r ‖ s` layout.
    pub fn to_native(&self) -> [u8; 65] {
        let mut native = [0u8; 65];
        native[0] = self.0[64];
        native[1..].copy_from_slice(&self.0[..64]);
        native
    }

    /// Parse `0x`-prefixed (or bare) hex.
    pub fn from_hex(s: &str) -> Result<Self, SignatureError> {
        Self::from_slice(&from_prefixed_hex(s)?)
    }

    /// `0x`-prefixed hex wire form.
    pub fn to_hex(&self) -> String {
        to_prefixed_hex(&self.0)
    }

    /// R component.
    pub fn r(&self) -> &[u8] {
        &self.0[..32]
    }

    /// S component.
    pub fn s(&self) -> &[u8] {
        &self.0[32..64]
    }

    /// R ‖ S (64 bytes).
    pub fn rs(&self) -> &[u8] {
        &self.0[..64]
    }

    /// Recovery indicator.
    pub fn recovery_id(&self) -> u8 {
        self.0[64]
    }

    /// Raw wire bytes.
    pub fn as_bytes(&self) -> &[u8; 65] {
        &self.0
    }
}

impl fmt::Display for RecoverableSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for RecoverableSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecoverableSignature({})", self.to_hex())
    }
}

impl FromStr for RecoverableSignature {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for RecoverableSignature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RecoverableSignature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

// =============================================================================
// Verification Request/Result Types
// =============================================================================

/// Expected signer of a digest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExpectedSigner {
    /// Compare the derived account identity
    Account(AccountId),
    /// Compare the raw recovered public key (legacy mode)
    PublicKey(PublicKey),
}

/// Request to verify one signature.
#[derive(Clone, Debug)]
pub struct VerificationRequest {
    /// The signing digest
    pub digest: Hash,
    /// The signature to verify
    pub signature: RecoverableSignature,
    /// Who must have produced it
    pub expected: ExpectedSigner,
}

/// Result of batch verification.
#[derive(Clone, Debug)]
pub struct BatchVerificationResult {
    /// Per-request outcome, in request order
    pub results: Vec<bool>,
    /// Whether all verifications passed
    pub all_valid: bool,
    /// Count of valid signatures
    pub valid_count: usize,
}

impl BatchVerificationResult {
    /// Create a batch result from individual results.
    pub fn from_results(results: Vec<bool>) -> Self {
        let valid_count = results.iter().filter(|r| **r).count();
        Self {
            all_valid: valid_count == results.len(),
            valid_count,
            results,
        }
    }

    /// Count of invalid signatures.
    pub fn invalid_count(&self) -> usize {
        self.results.len() - self.valid_count
    }
}
