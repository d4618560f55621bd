//! # Money Orders (MO-02)
//!
//! Escrow authorizer for owner-signed money orders.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! An owner escrows a balance and hands out signed orders
//! `{amount, recipient, salt}`. Anyone holding an order and its signature can
//! execute it once; the owner can cancel it while it is still pending.
//!
//! ## Order Lifecycle
//!
//! ```text
//! [Pending] ──execute──→ [Executed]
//!     │
//!     └──cancel──→ [Cancelled]
//! ```
//!
//! Both end states are terminal.
//!
//! ## Error Codes
//!
//! | Code | Error |
//! |------|-------|
//! | u1 | Insufficient funds |
//! | u100 | Caller is not the owner |
//! | u101 | Invalid signature |
//! | u102 | Already executed or cancelled |
//!
//! ## Module Structure
//!
//! ```text
//! mo-02-money-orders/
//! ├── domain/     # MoneyOrder, OrderStatus, events, errors, invariants
//! ├── ports/      # MoneyOrderApi, LedgerGateway, OrderStore, EventPublisher
//! ├── adapters/   # In-memory ledger, store and event log
//! ├── locks.rs    # Per-order striped locks
//! └── service.rs  # EscrowAuthorizer
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod locks;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{InMemoryEventLog, InMemoryLedger, InMemoryOrderStore};
pub use domain::{
    invariant_owner, invariant_sufficient_balance, invariant_transition, status_of,
    ConfigError, EscrowOwner, ErrorCode, LedgerError, MoneyOrder, MoneyOrderConfig,
    MoneyOrderError, MoneyOrderEvent, OrderKey, OrderRecord, OrderStatus, RecipientRef,
    StorageError, VerificationMode,
};
pub use locks::StripedLocks;
pub use ports::{EventPublisher, LedgerGateway, MoneyOrderApi, OrderStore};
pub use service::EscrowAuthorizer;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
