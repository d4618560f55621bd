//! Shared keys, accounts and authorizer builders.

use mo_01_structured_data::{ecdsa, AccountId, PrivateKey, RecoverableSignature};
use mo_02_money_orders::{
    EscrowAuthorizer, EscrowOwner, InMemoryEventLog, InMemoryLedger, InMemoryOrderStore,
    MoneyOrder, MoneyOrderApi, MoneyOrderConfig,
};

/// Owner key used throughout the suite. Never use it for real funds.
pub const OWNER_KEY: &str = "753b7cc01a1a2e86221266a154af739463fce51219d97e4f856cd7200c3bd2a601";

/// Recipient key used throughout the suite.
pub const RECIPIENT_KEY: &str =
    "7287ba251d44a4d3fd9276c88ce34c5c52a038955511cccaf77e61068649c17801";

/// Testnet address of the recipient key.
pub const RECIPIENT_TESTNET: &str = "ST1SJ3DTE5DN7X54YDH5D64R3BCB6A2AG2ZQ8YPD5";

/// Authorizer wired to the in-memory adapters.
pub type MemoryAuthorizer = EscrowAuthorizer<InMemoryLedger, InMemoryOrderStore, InMemoryEventLog>;

/// Parse the owner key.
pub fn owner_key() -> PrivateKey {
    PrivateKey::from_hex(OWNER_KEY).expect("owner key")
}

/// Parse the recipient key.
pub fn recipient_key() -> PrivateKey {
    PrivateKey::from_hex(RECIPIENT_KEY).expect("recipient key")
}

/// Owner with both account and public key, under `config`'s network.
pub fn owner(config: &MoneyOrderConfig) -> EscrowOwner {
    EscrowOwner::from_public_key(config.account_version(), owner_key().public_key())
        .expect("owner account")
}

/// Recipient account under `config`'s network.
pub fn recipient(config: &MoneyOrderConfig) -> AccountId {
    recipient_key()
        .account(config.account_version())
        .expect("recipient account")
}

/// Authorizer with `escrow` deposited for the owner.
pub fn authorizer(config: MoneyOrderConfig, escrow: u128) -> MemoryAuthorizer {
    let owner = owner(&config);
    let auth = EscrowAuthorizer::new(
        config,
        InMemoryLedger::new(),
        InMemoryOrderStore::new(),
        InMemoryEventLog::new(),
    )
    .expect("authorizer");
    auth.deposit(&owner.account, escrow).expect("deposit");
    auth
}

/// Owner signature over `order` for `auth`'s domain.
pub fn sign(auth: &MemoryAuthorizer, key: &PrivateKey, order: &MoneyOrder) -> RecoverableSignature {
    ecdsa::sign(key, &auth.domain_hash(), &order.to_structured_value()).expect("sign")
}
