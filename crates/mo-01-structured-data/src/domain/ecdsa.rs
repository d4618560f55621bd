//! # Recoverable ECDSA (secp256k1)
//!
//! Signing of structured-data digests and signer recovery.
//!
//! ## Security Notes
//!
//! - RFC 6979 deterministic nonces, low-S normalized output
//! - R and S must be in [1, n-1]; high-S signatures are rejected on recovery
//! - Identity comparison uses `subtle` constant-time equality
//! - Verification never panics: every failure collapses to `false`

use super::entities::{
    BatchVerificationResult, ExpectedSigner, Hash, PublicKey, RecoverableSignature,
    VerificationRequest,
};
use super::errors::SignatureError;
use super::hashing::{signing_digest, structured_data_digest};
use super::keys::PrivateKey;
use super::principal::AccountId;
use super::value::StructuredValue;
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use subtle::ConstantTimeEq;
use tracing::debug;

// =============================================================================
// SIGNING
// =============================================================================

/// Sign an already composed signing digest.
pub fn sign_digest(
    private_key: &PrivateKey,
    digest: &Hash,
) -> Result<RecoverableSignature, SignatureError> {
    let (signature, recovery_id) = private_key
        .signing_key()
        .sign_prehash_recoverable(digest)
        .map_err(|_| SignatureError::InvalidKey)?;

    // Native layout puts the recovery byte first
    let mut native = [0u8; 65];
    native[0] = recovery_id.to_byte();
    native[1..].copy_from_slice(&signature.to_bytes());

    Ok(RecoverableSignature::from_native(native))
}

/// Sign `value` under the domain identified by `domain_hash`.
pub fn sign(
    private_key: &PrivateKey,
    domain_hash: &Hash,
    value: &StructuredValue,
) -> Result<RecoverableSignature, SignatureError> {
    let digest = structured_data_digest(domain_hash, value)?;
    sign_digest(private_key, &digest)
}

// =============================================================================
// RECOVERY
// =============================================================================

/// Recover the compressed public key that produced `signature` over `digest`.
pub fn recover(digest: &Hash, signature: &RecoverableSignature) -> Result<PublicKey, SignatureError> {
    let v = signature.recovery_id();
    let recovery_id = RecoveryId::from_byte(v).ok_or(SignatureError::InvalidRecoveryId(v))?;

    // Rejects r or s equal to zero or not below the curve order
    let sig =
        Signature::from_slice(signature.rs()).map_err(|_| SignatureError::ScalarOutOfRange)?;

    // Malleability: only the low-S form is accepted
    if sig.normalize_s().is_some() {
        return Err(SignatureError::ScalarOutOfRange);
    }

    let key = VerifyingKey::recover_from_prehash(digest, &sig, recovery_id)
        .map_err(|_| SignatureError::RecoveryFailed)?;

    Ok(PublicKey::from_verifying_key(&key))
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Whether `signature` over `digest` was produced by the key behind `expected`.
///
/// Only the hash160 is compared. The recovered key is hashed under
/// `expected`'s own version byte, so the same key matches its account on
/// every network; callers bound to one network check `expected.version()`
/// themselves. A contract-qualified account never matches.
pub fn verify_as_account(
    digest: &Hash,
    signature: &RecoverableSignature,
    expected: &AccountId,
) -> bool {
    if expected.is_contract() {
        return false;
    }

    let recovered = match recover(digest, signature) {
        Ok(key) => key,
        Err(e) => {
            debug!(error = %e, "Signer recovery failed");
            return false;
        }
    };

    match AccountId::from_public_key(expected.version(), &recovered) {
        Ok(derived) => bool::from(derived.hash160()[..].ct_eq(&expected.hash160()[..])),
        Err(_) => false,
    }
}

/// Whether `signature` over `digest` was produced by exactly `expected`.
pub fn verify_as_public_key(
    digest: &Hash,
    signature: &RecoverableSignature,
    expected: &PublicKey,
) -> bool {
    match recover(digest, signature) {
        Ok(recovered) => bool::from(recovered.as_bytes()[..].ct_eq(&expected.as_bytes()[..])),
        Err(e) => {
            debug!(error = %e, "Signer recovery failed");
            false
        }
    }
}

/// Verify against precomputed domain and message hashes.
pub fn verify_signed_structured_data(
    domain_hash: &Hash,
    message_hash: &Hash,
    signature: &RecoverableSignature,
    signer: &ExpectedSigner,
) -> bool {
    let digest = signing_digest(domain_hash, message_hash);
    verify_digest(&digest, signature, signer)
}

/// Verify a digest against either kind of expected signer.
pub fn verify_digest(digest: &Hash, signature: &RecoverableSignature, signer: &ExpectedSigner) -> bool {
    match signer {
        ExpectedSigner::Account(account) => verify_as_account(digest, signature, account),
        ExpectedSigner::PublicKey(key) => verify_as_public_key(digest, signature, key),
    }
}

/// Batch verify independent requests in parallel.
pub fn batch_verify(requests: &[VerificationRequest]) -> BatchVerificationResult {
    use rayon::prelude::*;

    let results: Vec<bool> = requests
        .par_iter()
        .map(|req| verify_digest(&req.digest, &req.signature, &req.expected))
        .collect();

    BatchVerificationResult::from_results(results)
}
