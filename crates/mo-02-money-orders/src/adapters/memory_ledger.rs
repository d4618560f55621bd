//! In-Memory Ledger Adapter
//!
//! Implements `LedgerGateway` over a balance map.

use crate::domain::LedgerError;
use crate::ports::outbound::LedgerGateway;
use mo_01_structured_data::AccountId;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// In-memory ledger.
#[derive(Default)]
pub struct InMemoryLedger {
    balances: RwLock<HashMap<AccountId, u128>>,
    /// Simulated outage: every transfer fails while set.
    unavailable: AtomicBool,
}

impl InMemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger with opening balances.
    pub fn with_balances(balances: impl IntoIterator<Item = (AccountId, u128)>) -> Self {
        Self {
            balances: RwLock::new(balances.into_iter().collect()),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Toggle the simulated outage.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Sum of all balances.
    pub fn total(&self) -> u128 {
        self.balances.read().values().sum()
    }
}

impl LedgerGateway for InMemoryLedger {
    fn get_balance(&self, account: &AccountId) -> Result<u128, LedgerError> {
        Ok(self.balances.read().get(account).copied().unwrap_or(0))
    }

    fn transfer(&self, from: &AccountId, to: &AccountId, amount: u128) -> Result<(), LedgerError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(LedgerError::Unavailable("transfers suspended".to_string()));
        }

        let mut balances = self.balances.write();
        let available = balances.get(from).copied().unwrap_or(0);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                account: from.clone(),
                available,
                requested: amount,
            });
        }
        if from == to {
            return Ok(());
        }

        let credited = balances
            .get(to)
            .copied()
            .unwrap_or(0)
            .checked_add(amount)
            .ok_or_else(|| LedgerError::Overflow(to.clone()))?;

        balances.insert(from.clone(), available - amount);
        balances.insert(to.clone(), credited);

        debug!(%from, %to, amount = %amount, "Ledger transfer applied");
        Ok(())
    }

    fn deposit(&self, owner: &AccountId, amount: u128) -> Result<(), LedgerError> {
        let mut balances = self.balances.write();
        let balance = balances.entry(owner.clone()).or_insert(0);
        *balance = balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::Overflow(owner.clone()))?;
        Ok(())
    }
}
