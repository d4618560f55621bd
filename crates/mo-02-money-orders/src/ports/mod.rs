//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that external callers use
//! - **Outbound (Driven)**: Ledger, order store and event sink

pub mod inbound;
pub mod outbound;

pub use inbound::MoneyOrderApi;
pub use outbound::{EventPublisher, LedgerGateway, OrderStore};
