//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.

use crate::domain::entities::{
    BatchVerificationResult, Domain, ExpectedSigner, Hash, PublicKey, RecoverableSignature,
    VerificationRequest,
};
use crate::domain::errors::{EncodingError, SignatureError};
use crate::domain::keys::PrivateKey;
use crate::domain::principal::AccountId;
use crate::domain::value::StructuredValue;

/// Structured data signing and verification API.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait StructuredDataApi: Send + Sync {
    // =========================================================================
    // Hashing
    // =========================================================================

    /// Hash of the serialized domain tuple.
    fn domain_hash(&self, domain: &Domain) -> Result<Hash, EncodingError>;

    /// Hash of a serialized structured value.
    fn message_hash(&self, value: &StructuredValue) -> Result<Hash, EncodingError>;

    /// Digest that is actually signed for `value` under `domain_hash`.
    fn signing_digest(
        &self,
        domain_hash: &Hash,
        value: &StructuredValue,
    ) -> Result<Hash, EncodingError>;

    // =========================================================================
    // Signing
    // =========================================================================

    /// Sign `value` under `domain_hash`, returning the wire (RSV) form.
    fn sign(
        &self,
        private_key: &PrivateKey,
        domain_hash: &Hash,
        value: &StructuredValue,
    ) -> Result<RecoverableSignature, SignatureError>;

    // =========================================================================
    // Recovery
    // =========================================================================

    /// Recover the signer's public key.
    fn recover(
        &self,
        digest: &Hash,
        signature: &RecoverableSignature,
    ) -> Result<PublicKey, SignatureError>;

    /// Account-mode verification. Never errors.
    fn verify_as_account(
        &self,
        digest: &Hash,
        signature: &RecoverableSignature,
        expected: &AccountId,
    ) -> bool;

    /// Legacy raw-public-key verification. Never errors.
    fn verify_as_public_key(
        &self,
        digest: &Hash,
        signature: &RecoverableSignature,
        expected: &PublicKey,
    ) -> bool;

    /// Verify against precomputed domain and message hashes.
    fn verify_signed_structured_data(
        &self,
        domain_hash: &Hash,
        message_hash: &Hash,
        signature: &RecoverableSignature,
        signer: &ExpectedSigner,
    ) -> bool;

    /// Verify independent requests in parallel.
    fn batch_verify(&self, requests: &[VerificationRequest]) -> BatchVerificationResult;
}
