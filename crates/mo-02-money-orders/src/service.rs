//! # Escrow Authorizer Service
//!
//! Application service that implements `MoneyOrderApi`.
//!
//! ## Execute sequence
//!
//! Under the order key's stripe lock:
//! 1. terminal gate (`Executed` or `Cancelled` → `AlreadyExecuted`)
//! 2. signature check in the mode the recipient selects
//! 3. escrow balance check
//! 4. write `Executed`, transfer, publish `TransferExecuted`
//!
//! A failed transfer removes the record again, so the order stays `Pending`.
//! A transfer that overdraws (the escrow was drained by a concurrent order
//! from the same owner) is reported as `InsufficientFunds`.

use crate::domain::{
    invariant_owner, invariant_sufficient_balance, invariant_transition, status_of, EscrowOwner,
    LedgerError, MoneyOrder, MoneyOrderConfig, MoneyOrderError, MoneyOrderEvent, OrderKey,
    OrderRecord, OrderStatus, RecipientRef,
};
use crate::locks::StripedLocks;
use crate::ports::inbound::MoneyOrderApi;
use crate::ports::outbound::{EventPublisher, LedgerGateway, OrderStore};
use mo_01_structured_data::{
    ecdsa, structured_data_digest, AccountId, Hash, RecoverableSignature,
};
use money_telemetry::metrics::{
    record_rejection, record_verification, EXECUTE_DURATION, ORDERS_CANCELLED, ORDERS_EXECUTED,
    TRANSFERRED_AMOUNT,
};
use money_telemetry::{log_order_event, metric_inc, time_histogram};
use tracing::{debug, info, warn};

/// Escrow authorizer.
///
/// Generic over its outbound ports so tests and deployments inject their own
/// ledger, store and event sink.
pub struct EscrowAuthorizer<L, S, E> {
    config: MoneyOrderConfig,
    domain_hash: Hash,
    ledger: L,
    store: S,
    events: E,
    locks: StripedLocks,
}

impl<L, S, E> EscrowAuthorizer<L, S, E>
where
    L: LedgerGateway,
    S: OrderStore,
    E: EventPublisher,
{
    /// Create an authorizer; the domain hash is computed once here.
    pub fn new(
        config: MoneyOrderConfig,
        ledger: L,
        store: S,
        events: E,
    ) -> Result<Self, MoneyOrderError> {
        let domain_hash = config.domain_hash()?;
        debug!(
            domain = %config.domain_name,
            version = %config.domain_version,
            chain_id = config.chain_id,
            "Escrow authorizer ready"
        );
        Ok(Self {
            config,
            domain_hash,
            ledger,
            store,
            events,
            locks: StripedLocks::default(),
        })
    }

    /// Replace the lock pool.
    pub fn with_locks(mut self, locks: StripedLocks) -> Self {
        self.locks = locks;
        self
    }

    /// Configuration in use.
    pub fn config(&self) -> &MoneyOrderConfig {
        &self.config
    }

    /// Ledger adapter.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Order store adapter.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Event sink.
    pub fn events(&self) -> &E {
        &self.events
    }

    /// Digest the owner signs for `order`.
    pub fn order_digest(&self, order: &MoneyOrder) -> Result<Hash, MoneyOrderError> {
        Ok(structured_data_digest(
            &self.domain_hash,
            &order.to_structured_value(),
        )?)
    }

    /// Account credited by `recipient`.
    pub fn recipient_account(&self, recipient: &RecipientRef) -> Result<AccountId, MoneyOrderError> {
        match recipient {
            RecipientRef::Account(account) => Ok(account.clone()),
            RecipientRef::PublicKey(key) => {
                Ok(AccountId::from_public_key(self.config.account_version(), key)?)
            }
        }
    }

    fn verify(
        &self,
        order: &MoneyOrder,
        signature: &RecoverableSignature,
        owner: &EscrowOwner,
    ) -> Result<(), MoneyOrderError> {
        let digest = self.order_digest(order)?;
        let mode = order.verification_mode();

        let valid = match &order.recipient {
            RecipientRef::Account(_) if owner.account.version() != self.config.account_version() => {
                debug!(owner = %owner.account, "Owner account is on another network");
                false
            }
            RecipientRef::Account(_) => ecdsa::verify_as_account(&digest, signature, &owner.account),
            RecipientRef::PublicKey(_) => match &owner.public_key {
                Some(key) => ecdsa::verify_as_public_key(&digest, signature, key),
                None => {
                    debug!(owner = %owner.account, "Legacy order but owner has no public key");
                    false
                }
            },
        };

        record_verification(mode.as_str(), valid);
        if !valid {
            return Err(MoneyOrderError::InvalidSignature);
        }
        Ok(())
    }

    fn execute_locked(
        &self,
        key: &OrderKey,
        order: &MoneyOrder,
        signature: &RecoverableSignature,
        owner: &EscrowOwner,
    ) -> Result<AccountId, MoneyOrderError> {
        let current = status_of(self.store.get(key)?.as_ref());
        invariant_transition(current, OrderStatus::Executed)?;

        self.verify(order, signature, owner)?;

        let balance = self.ledger.get_balance(&owner.account)?;
        invariant_sufficient_balance(balance, order.amount)?;

        let to = self.recipient_account(&order.recipient)?;

        self.store.put(key.clone(), OrderRecord::executed())?;
        if let Err(e) = self.ledger.transfer(&owner.account, &to, order.amount) {
            self.store.remove(key)?;
            // Another order from the same owner may have drained the escrow
            // since the balance check; that is still an insufficient-funds
            // rejection.
            return Err(match e {
                LedgerError::InsufficientBalance {
                    available,
                    requested,
                    ..
                } => MoneyOrderError::InsufficientFunds {
                    balance: available,
                    required: requested,
                },
                other => other.into(),
            });
        }

        self.events.publish(MoneyOrderEvent::TransferExecuted {
            order: order.clone(),
            from: owner.account.clone(),
            to: to.clone(),
            amount: order.amount,
        });
        Ok(to)
    }

    /// Returns whether a transition happened.
    fn cancel_locked(
        &self,
        key: &OrderKey,
        order: &MoneyOrder,
        owner: &AccountId,
    ) -> Result<bool, MoneyOrderError> {
        match status_of(self.store.get(key)?.as_ref()) {
            OrderStatus::Cancelled => Ok(false),
            current => {
                invariant_transition(current, OrderStatus::Cancelled)?;
                self.store.put(key.clone(), OrderRecord::cancelled())?;
                self.events.publish(MoneyOrderEvent::OrderCancelled {
                    order: order.clone(),
                    by: owner.clone(),
                });
                Ok(true)
            }
        }
    }

    fn rejected(&self, operation: &str, key: &OrderKey, error: MoneyOrderError) -> MoneyOrderError {
        record_rejection(error.reason());
        match error.code() {
            Some(code) => warn!(%operation, order_key = %key, %code, %error, "Order rejected"),
            None => warn!(%operation, order_key = %key, %error, "Order operation failed"),
        }
        error
    }
}

impl<L, S, E> MoneyOrderApi for EscrowAuthorizer<L, S, E>
where
    L: LedgerGateway,
    S: OrderStore,
    E: EventPublisher,
{
    fn execute(
        &self,
        order: &MoneyOrder,
        signature: &RecoverableSignature,
        owner: &EscrowOwner,
    ) -> Result<(), MoneyOrderError> {
        let _timer = time_histogram!(EXECUTE_DURATION);
        let key = order.key();

        let result = {
            let _guard = self.locks.lock(&key);
            self.execute_locked(&key, order, signature, owner)
        };

        match result {
            Ok(to) => {
                metric_inc!(ORDERS_EXECUTED);
                TRANSFERRED_AMOUNT.inc_by(order.amount as f64);
                info!(
                    order_key = %key,
                    from = %owner.account,
                    %to,
                    amount = %order.amount,
                    mode = order.verification_mode().as_str(),
                    "Money order executed"
                );
                Ok(())
            }
            Err(e) => Err(self.rejected("execute", &key, e)),
        }
    }

    fn cancel(
        &self,
        order: &MoneyOrder,
        caller: &AccountId,
        owner: &AccountId,
    ) -> Result<(), MoneyOrderError> {
        let key = order.key();

        let result = invariant_owner(caller, owner).and_then(|()| {
            let _guard = self.locks.lock(&key);
            self.cancel_locked(&key, order, owner)
        });

        match result {
            Ok(true) => {
                metric_inc!(ORDERS_CANCELLED);
                log_order_event!(info, "Money order cancelled", key, by = %caller);
                Ok(())
            }
            Ok(false) => {
                log_order_event!(debug, "Money order already cancelled", key);
                Ok(())
            }
            Err(e) => Err(self.rejected("cancel", &key, e)),
        }
    }

    fn deposit(&self, owner: &AccountId, amount: u128) -> Result<(), MoneyOrderError> {
        self.ledger.deposit(owner, amount)?;
        debug!(%owner, amount = %amount, "Escrow deposit");
        Ok(())
    }

    fn status(&self, order: &MoneyOrder) -> Result<OrderStatus, MoneyOrderError> {
        let key = order.key();
        let _guard = self.locks.lock(&key);
        Ok(status_of(self.store.get(&key)?.as_ref()))
    }

    fn balance(&self, account: &AccountId) -> Result<u128, MoneyOrderError> {
        Ok(self.ledger.get_balance(account)?)
    }

    fn domain_hash(&self) -> Hash {
        self.domain_hash
    }
}
