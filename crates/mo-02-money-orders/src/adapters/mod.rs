//! # Adapters
//!
//! In-memory implementations of the outbound ports.

pub mod event_log;
pub mod memory_ledger;
pub mod memory_store;

pub use event_log::InMemoryEventLog;
pub use memory_ledger::InMemoryLedger;
pub use memory_store::InMemoryOrderStore;
