//! # Money Orders Benchmarks
//!
//! Criterion bodies; `benches/money_order_benchmarks.rs` registers them.

pub mod mo_01_signing;
pub mod mo_02_execute;
