//! # Structured Data Signing (MO-01)
//!
//! Canonical encoding, domain-separated hashing and recoverable secp256k1
//! signatures for structured values.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure encoding and cryptographic logic, no I/O
//! - **Ports Layer** (`ports/`): Trait definitions for the inbound API
//! - **Service Layer** (`service.rs`): Wires domain logic to ports
//!
//! ## Digest Composition
//!
//! ```text
//! signing_digest = SHA256("SIP018" ‖ SHA256(domain tuple) ‖ SHA256(value))
//! ```
//!
//! ## Security Notes
//!
//! - **Wire format**: signatures are 65 bytes `r ‖ s ‖ v`
//! - **Malleability**: signatures with high S values are rejected
//! - **Field order**: tuple fields are encoded in declaration order, never sorted
//!
//! ## Example
//!
//! ```
//! use mo_01_structured_data::{domain_hash, ecdsa, Domain, PrivateKey, StructuredValue};
//!
//! let key = PrivateKey::generate();
//! let dh = domain_hash(&Domain::new("Money Orders", "1.0.0", 1)).unwrap();
//! let value = StructuredValue::ascii("Hello World");
//! let signature = ecdsa::sign(&key, &dh, &value).unwrap();
//! assert_eq!(signature.as_bytes().len(), 65);
//! ```

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::ecdsa;
pub use domain::entities::{
    from_prefixed_hex, to_prefixed_hex, BatchVerificationResult, Domain, ExpectedSigner, Hash,
    PublicKey, RecoverableSignature, VerificationRequest, CHAIN_ID_MAINNET, CHAIN_ID_TESTNET,
};
pub use domain::errors::{AddressError, EncodingError, SignatureError};
pub use domain::hashing::{
    domain_hash, hash160, message_hash, sha256, signing_digest, structured_data_digest,
    STRUCTURED_DATA_PREFIX,
};
pub use domain::keys::PrivateKey;
pub use domain::principal::{
    AccountId, ContractName, Network, VERSION_MAINNET_MULTISIG, VERSION_MAINNET_SINGLESIG,
    VERSION_TESTNET_MULTISIG, VERSION_TESTNET_SINGLESIG,
};
pub use domain::value::StructuredValue;
pub use ports::inbound::StructuredDataApi;
pub use service::StructuredDataService;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
