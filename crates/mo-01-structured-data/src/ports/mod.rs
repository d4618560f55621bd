//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that external callers use
//!
//! Signing and recovery need no outbound dependencies.

pub mod inbound;
