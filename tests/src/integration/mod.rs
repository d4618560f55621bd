//! # Integration Scenarios
//!
//! Cross-crate flows: signatures produced with the structured data crate are
//! accepted or rejected by the escrow authorizer.

pub mod concurrency;
pub mod end_to_end;
pub mod legacy;
pub mod properties;
