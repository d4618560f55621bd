//! # Structured Data Service
//!
//! Application service layer that implements the `StructuredDataApi` trait
//! by delegating to the domain layer.

use crate::domain::ecdsa;
use crate::domain::entities::{
    BatchVerificationResult, Domain, ExpectedSigner, Hash, PublicKey, RecoverableSignature,
    VerificationRequest,
};
use crate::domain::errors::{EncodingError, SignatureError};
use crate::domain::hashing;
use crate::domain::keys::PrivateKey;
use crate::domain::principal::AccountId;
use crate::domain::value::StructuredValue;
use crate::ports::inbound::StructuredDataApi;
use tracing::debug;

/// Structured Data Service.
///
/// Stateless; every hash is computed from its explicit inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredDataService;

impl StructuredDataService {
    /// Create a new service.
    pub fn new() -> Self {
        Self
    }
}

impl StructuredDataApi for StructuredDataService {
    fn domain_hash(&self, domain: &Domain) -> Result<Hash, EncodingError> {
        hashing::domain_hash(domain)
    }

    fn message_hash(&self, value: &StructuredValue) -> Result<Hash, EncodingError> {
        hashing::message_hash(value)
    }

    fn signing_digest(
        &self,
        domain_hash: &Hash,
        value: &StructuredValue,
    ) -> Result<Hash, EncodingError> {
        hashing::structured_data_digest(domain_hash, value)
    }

    fn sign(
        &self,
        private_key: &PrivateKey,
        domain_hash: &Hash,
        value: &StructuredValue,
    ) -> Result<RecoverableSignature, SignatureError> {
        let signature = ecdsa::sign(private_key, domain_hash, value)?;
        debug!(signer = %private_key.public_key(), "Signed structured data");
        Ok(signature)
    }

    fn recover(
        &self,
        digest: &Hash,
        signature: &RecoverableSignature,
    ) -> Result<PublicKey, SignatureError> {
        ecdsa::recover(digest, signature)
    }

    fn verify_as_account(
        &self,
        digest: &Hash,
        signature: &RecoverableSignature,
        expected: &AccountId,
    ) -> bool {
        ecdsa::verify_as_account(digest, signature, expected)
    }

    fn verify_as_public_key(
        &self,
        digest: &Hash,
        signature: &RecoverableSignature,
        expected: &PublicKey,
    ) -> bool {
        ecdsa::verify_as_public_key(digest, signature, expected)
    }

    fn verify_signed_structured_data(
        &self,
        domain_hash: &Hash,
        message_hash: &Hash,
        signature: &RecoverableSignature,
        signer: &ExpectedSigner,
    ) -> bool {
        ecdsa::verify_signed_structured_data(domain_hash, message_hash, signature, signer)
    }

    fn batch_verify(&self, requests: &[VerificationRequest]) -> BatchVerificationResult {
        ecdsa::batch_verify(requests)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::principal::VERSION_TESTNET_SINGLESIG;

    #[test]
    fn test_service_round_trip_through_trait_object() {
        let api: Box<dyn StructuredDataApi> = Box::new(StructuredDataService::new());
        let key = PrivateKey::generate();
        let domain = Domain::new("Money Orders", "1.0.0", 1);
        let value = StructuredValue::ascii("Hello World");

        let dh = api.domain_hash(&domain).unwrap();
        let sig = api.sign(&key, &dh, &value).unwrap();
        let digest = api.signing_digest(&dh, &value).unwrap();

        assert_eq!(api.recover(&digest, &sig).unwrap(), key.public_key());
        assert!(api.verify_as_account(
            &digest,
            &sig,
            &key.account(VERSION_TESTNET_SINGLESIG).unwrap()
        ));
        assert!(api.verify_signed_structured_data(
            &dh,
            &api.message_hash(&value).unwrap(),
            &sig,
            &ExpectedSigner::PublicKey(key.public_key()),
        ));
    }

    #[test]
    fn test_service_reports_encoding_errors() {
        let service = StructuredDataService::new();
        let key = PrivateKey::generate();
        let err = service
            .sign(&key, &[0u8; 32], &StructuredValue::ascii("caf\u{e9}"))
            .unwrap_err();
        assert!(matches!(err, SignatureError::Encoding(EncodingError::NonAscii { .. })));
    }
}
