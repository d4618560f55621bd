//! # Outbound Ports
//!
//! Traits for external dependencies (ledger, order storage, event sink).

use crate::domain::{LedgerError, MoneyOrderEvent, OrderKey, OrderRecord, StorageError};
use mo_01_structured_data::AccountId;

/// Ledger holding account balances - outbound port.
///
/// The authorizer never mutates balances except through this trait.
pub trait LedgerGateway: Send + Sync {
    /// Current balance (zero for unknown accounts).
    fn get_balance(&self, account: &AccountId) -> Result<u128, LedgerError>;

    /// Move `amount` from `from` to `to`, all or nothing.
    fn transfer(&self, from: &AccountId, to: &AccountId, amount: u128) -> Result<(), LedgerError>;

    /// Credit `amount` to `owner`.
    fn deposit(&self, owner: &AccountId, amount: u128) -> Result<(), LedgerError>;
}

/// Key-value store of order records - outbound port.
pub trait OrderStore: Send + Sync {
    /// Record for `key`, if any.
    fn get(&self, key: &OrderKey) -> Result<Option<OrderRecord>, StorageError>;

    /// Insert or replace the record for `key`.
    fn put(&self, key: OrderKey, record: OrderRecord) -> Result<(), StorageError>;

    /// Drop the record for `key`.
    fn remove(&self, key: &OrderKey) -> Result<(), StorageError>;
}

/// Sink for committed events - outbound port.
///
/// Publishing cannot fail; implementations buffer or drop on their own.
pub trait EventPublisher: Send + Sync {
    /// Publish one event.
    fn publish(&self, event: MoneyOrderEvent);
}
