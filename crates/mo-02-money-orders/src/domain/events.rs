//! # Domain Events
//!
//! Events published after a committed state transition.

use super::entities::MoneyOrder;
use mo_01_structured_data::AccountId;
use serde::{Deserialize, Serialize};

/// Money order event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MoneyOrderEvent {
    /// Order executed and funds moved.
    TransferExecuted {
        /// The executed order
        order: MoneyOrder,
        /// Debited escrow account
        from: AccountId,
        /// Credited account
        to: AccountId,
        /// Amount moved
        amount: u128,
    },
    /// Order withdrawn by its owner.
    OrderCancelled {
        /// The cancelled order
        order: MoneyOrder,
        /// Owner that cancelled it
        by: AccountId,
    },
}

impl MoneyOrderEvent {
    /// Short event name.
    pub fn name(&self) -> &'static str {
        match self {
            MoneyOrderEvent::TransferExecuted { .. } => "transfer_executed",
            MoneyOrderEvent::OrderCancelled { .. } => "order_cancelled",
        }
    }

    /// The order this event is about.
    pub fn order(&self) -> &MoneyOrder {
        match self {
            MoneyOrderEvent::TransferExecuted { order, .. }
            | MoneyOrderEvent::OrderCancelled { order, .. } => order,
        }
    }
}
