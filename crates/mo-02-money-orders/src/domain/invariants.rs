//! # Domain Invariants
//!
//! Authorization rules checked by the escrow authorizer.

use super::entities::{OrderRecord, OrderStatus};
use super::errors::MoneyOrderError;
use mo_01_structured_data::AccountId;

/// Invariant: an order moves only along the status transition table.
///
/// Terminal orders never transition again; executed and cancelled orders
/// share one rejection.
pub fn invariant_transition(current: OrderStatus, next: OrderStatus) -> Result<(), MoneyOrderError> {
    if !current.can_transition_to(next) {
        return Err(MoneyOrderError::AlreadyExecuted(current));
    }
    Ok(())
}

/// Invariant: only the owner cancels.
pub fn invariant_owner(caller: &AccountId, owner: &AccountId) -> Result<(), MoneyOrderError> {
    if caller != owner {
        return Err(MoneyOrderError::NotOwner);
    }
    Ok(())
}

/// Invariant: the escrow covers the order.
pub fn invariant_sufficient_balance(balance: u128, required: u128) -> Result<(), MoneyOrderError> {
    if balance < required {
        return Err(MoneyOrderError::InsufficientFunds { balance, required });
    }
    Ok(())
}

/// Current status, treating absence as `Pending`.
pub fn status_of(record: Option<&OrderRecord>) -> OrderStatus {
    record.map(|r| r.status).unwrap_or_default()
}
