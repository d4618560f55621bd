//! # Money Orders Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── benchmarks/       # Criterion benchmark bodies
//! │   ├── mo_01_signing.rs
//! │   └── mo_02_execute.rs
//! │
//! └── integration/      # Cross-crate scenarios
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p mo-tests
//!
//! # By category
//! cargo test -p mo-tests integration::
//!
//! # Benchmarks
//! cargo bench -p mo-tests
//! ```

#![allow(dead_code)]

pub mod benchmarks;
pub mod fixtures;
pub mod integration;
