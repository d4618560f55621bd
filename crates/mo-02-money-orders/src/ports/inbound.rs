//! # Inbound Ports
//!
//! Money order API - driving port.

use crate::domain::{EscrowOwner, MoneyOrder, MoneyOrderError, OrderStatus};
use mo_01_structured_data::{AccountId, Hash, RecoverableSignature};

/// Money order API.
///
/// Every call completes synchronously with a definitive result.
pub trait MoneyOrderApi: Send + Sync {
    /// Execute a signed order once, moving `order.amount` out of the owner's escrow.
    fn execute(
        &self,
        order: &MoneyOrder,
        signature: &RecoverableSignature,
        owner: &EscrowOwner,
    ) -> Result<(), MoneyOrderError>;

    /// Cancel a pending order. Only `owner` may call; repeating is a no-op.
    fn cancel(
        &self,
        order: &MoneyOrder,
        caller: &AccountId,
        owner: &AccountId,
    ) -> Result<(), MoneyOrderError>;

    /// Credit the owner's escrow.
    fn deposit(&self, owner: &AccountId, amount: u128) -> Result<(), MoneyOrderError>;

    /// Current lifecycle state of an order.
    fn status(&self, order: &MoneyOrder) -> Result<OrderStatus, MoneyOrderError>;

    /// Ledger balance of an account.
    fn balance(&self, account: &AccountId) -> Result<u128, MoneyOrderError>;

    /// Hash of the signing domain in use.
    fn domain_hash(&self) -> Hash;
}
