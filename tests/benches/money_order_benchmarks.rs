//! # Money Orders Benchmarks
//!
//! | Group | Measures |
//! |-------|----------|
//! | mo-01-structured-data | digest, sign, recover, batch verify |
//! | mo-02-money-orders | execute throughput, terminal-gate rejection |

use criterion::{criterion_group, criterion_main};
use mo_tests::benchmarks::{mo_01_signing::bench_structured_data, mo_02_execute::bench_execute};

criterion_group!(benches, bench_structured_data, bench_execute);
criterion_main!(benches);
