//! # Domain Module
//!
//! Core domain types for money order authorization.

pub mod config;
pub mod entities;
pub mod errors;
pub mod events;
pub mod invariants;

pub use config::*;
pub use entities::*;
pub use errors::*;
pub use events::*;
pub use invariants::*;
