//! # Domain Entities
//!
//! Money orders, their lifecycle state and the escrow owner identity.

use mo_01_structured_data::{AccountId, PublicKey, StructuredValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who receives the funds, and by extension how the owner's signature is checked.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipientRef {
    /// Standard or contract-qualified account
    Account(AccountId),
    /// Raw compressed public key (legacy mode)
    PublicKey(PublicKey),
}

impl RecipientRef {
    /// Verification mode implied by the recipient form.
    pub fn mode(&self) -> VerificationMode {
        match self {
            RecipientRef::Account(_) => VerificationMode::Account,
            RecipientRef::PublicKey(_) => VerificationMode::PublicKey,
        }
    }

    /// Encoded recipient field: a principal, or the 33 key bytes as a buffer.
    pub fn to_structured_value(&self) -> StructuredValue {
        match self {
            RecipientRef::Account(account) => StructuredValue::principal(account.clone()),
            RecipientRef::PublicKey(key) => StructuredValue::buffer(key.as_bytes().to_vec()),
        }
    }
}

impl fmt::Display for RecipientRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipientRef::Account(account) => write!(f, "{account}"),
            RecipientRef::PublicKey(key) => write!(f, "{key}"),
        }
    }
}

impl From<AccountId> for RecipientRef {
    fn from(account: AccountId) -> Self {
        RecipientRef::Account(account)
    }
}

impl From<PublicKey> for RecipientRef {
    fn from(key: PublicKey) -> Self {
        RecipientRef::PublicKey(key)
    }
}

/// Signature verification mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationMode {
    /// Compare derived account identities
    Account,
    /// Compare raw public keys
    PublicKey,
}

impl VerificationMode {
    /// Stable label used in logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationMode::Account => "account",
            VerificationMode::PublicKey => "public_key",
        }
    }
}

/// A signed instruction to pay `amount` to `recipient` once.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoneyOrder {
    /// Amount to transfer
    pub amount: u128,
    /// Recipient of the funds
    pub recipient: RecipientRef,
    /// Disambiguates otherwise identical orders
    pub salt: u128,
}

impl MoneyOrder {
    /// Create a new order.
    pub fn new(amount: u128, recipient: impl Into<RecipientRef>, salt: u128) -> Self {
        Self {
            amount,
            recipient: recipient.into(),
            salt,
        }
    }

    /// Natural key of this order.
    pub fn key(&self) -> OrderKey {
        OrderKey {
            amount: self.amount,
            recipient: self.recipient.clone(),
            salt: self.salt,
        }
    }

    /// Verification mode implied by the recipient.
    pub fn verification_mode(&self) -> VerificationMode {
        self.recipient.mode()
    }

    /// The signed message: `{amount, recipient, salt}` in that field order.
    pub fn to_structured_value(&self) -> StructuredValue {
        StructuredValue::tuple([
            ("amount", StructuredValue::uint(self.amount)),
            ("recipient", self.recipient.to_structured_value()),
            ("salt", StructuredValue::uint(self.salt)),
        ])
    }
}

/// The `(amount, recipient, salt)` triple identifying an order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderKey {
    /// Amount
    pub amount: u128,
    /// Recipient
    pub recipient: RecipientRef,
    /// Salt
    pub salt: u128,
}

impl fmt::Display for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.amount, self.recipient, self.salt)
    }
}

/// Lifecycle state of an order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Not yet executed or cancelled (also the state of unknown orders)
    #[default]
    Pending,
    /// Funds transferred
    Executed,
    /// Withdrawn by the owner
    Cancelled,
}

impl OrderStatus {
    /// Whether no further transition is possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Executed | OrderStatus::Cancelled)
    }

    /// Check if transition to new state is valid.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Executed)
                | (OrderStatus::Pending, OrderStatus::Cancelled)
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Executed => "executed",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// Stored lifecycle record. Absence means `Pending`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Current state
    pub status: OrderStatus,
}

impl OrderRecord {
    /// Record of an executed order.
    pub fn executed() -> Self {
        Self {
            status: OrderStatus::Executed,
        }
    }

    /// Record of a cancelled order.
    pub fn cancelled() -> Self {
        Self {
            status: OrderStatus::Cancelled,
        }
    }
}

/// Identity that funds the escrow and signs orders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscrowOwner {
    /// Account holding the escrow balance
    pub account: AccountId,
    /// Raw key, required to verify legacy-mode orders
    pub public_key: Option<PublicKey>,
}

impl EscrowOwner {
    /// Owner known only by account.
    pub fn new(account: AccountId) -> Self {
        Self {
            account,
            public_key: None,
        }
    }

    /// Owner derived from its public key under `version`.
    pub fn from_public_key(
        version: u8,
        public_key: PublicKey,
    ) -> Result<Self, mo_01_structured_data::AddressError> {
        Ok(Self {
            account: AccountId::from_public_key(version, &public_key)?,
            public_key: Some(public_key),
        })
    }

    /// Attach the raw public key.
    pub fn with_public_key(mut self, public_key: PublicKey) -> Self {
        self.public_key = Some(public_key);
        self
    }
}
