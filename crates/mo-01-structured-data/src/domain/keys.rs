//! # Private Keys
//!
//! secp256k1 signing keys. The secret scalar is held by `k256::SigningKey`,
//! which clears it on drop; intermediate buffers are zeroized here.

use super::entities::PublicKey;
use super::errors::{AddressError, SignatureError};
use super::principal::AccountId;
use k256::ecdsa::SigningKey;
use std::fmt;
use zeroize::{Zeroize, Zeroizing};

/// Trailing marker on 33-byte keys that request compressed public keys.
const COMPRESSED_MARKER: u8 = 0x01;

/// secp256k1 private key.
#[derive(Clone)]
pub struct PrivateKey {
    signing_key: SigningKey,
}

impl PrivateKey {
    /// Generate random key.
    pub fn generate() -> Self {
        let signing_key = SigningKey::random(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Create from secret key bytes (32 bytes).
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, SignatureError> {
        let mut bytes = bytes;
        let result = SigningKey::from_slice(&bytes).map_err(|_| SignatureError::InvalidKey);
        bytes.zeroize();
        Ok(Self {
            signing_key: result?,
        })
    }

    /// Parse hex (optional `0x`): 32 bytes, or 33 bytes ending in `0x01`.
    pub fn from_hex(s: &str) -> Result<Self, SignatureError> {
        let digits = s.trim();
        let digits = digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
            .unwrap_or(digits);
        let raw = Zeroizing::new(hex::decode(digits).map_err(|_| SignatureError::InvalidKey)?);

        let secret = match raw.len() {
            32 => &raw[..],
            33 if raw[32] == COMPRESSED_MARKER => &raw[..32],
            _ => return Err(SignatureError::InvalidKey),
        };
        let signing_key = SigningKey::from_slice(secret).map_err(|_| SignatureError::InvalidKey)?;
        Ok(Self { signing_key })
    }

    /// Compressed public key (33 bytes).
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_verifying_key(self.signing_key.verifying_key())
    }

    /// Account controlled by this key under `version`.
    pub fn account(&self, version: u8) -> Result<AccountId, AddressError> {
        AccountId::from_public_key(version, &self.public_key())
    }

    pub(crate) fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public_key", &self.public_key())
            .finish_non_exhaustive()
    }
}
