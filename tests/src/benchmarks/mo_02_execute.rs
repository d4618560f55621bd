//! # MO-02 Escrow Benchmarks
//!
//! Full execute path (lock, recover, balance, commit) against the in-memory
//! adapters. Each iteration uses a fresh salt so no call hits the terminal
//! gate.

use crate::fixtures;
use criterion::{black_box, BatchSize, Criterion};
use mo_02_money_orders::{MoneyOrder, MoneyOrderApi, MoneyOrderConfig};
use std::time::Duration;

/// Register the execute benchmarks.
pub fn bench_execute(c: &mut Criterion) {
    let mut group = c.benchmark_group("mo-02-money-orders");
    group.measurement_time(Duration::from_secs(5));

    let config = MoneyOrderConfig::default();
    let owner = fixtures::owner(&config);
    let recipient = fixtures::recipient(&config);
    let key = fixtures::owner_key();
    let auth = fixtures::authorizer(config, u128::MAX / 2);
    let mut salt = 0u128;

    group.bench_function("execute", |b| {
        b.iter_batched(
            || {
                salt += 1;
                let order = MoneyOrder::new(1, recipient.clone(), salt);
                let signature = fixtures::sign(&auth, &key, &order);
                (order, signature)
            },
            |(order, signature)| black_box(auth.execute(&order, &signature, &owner)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("rejected_already_executed", |b| {
        let order = MoneyOrder::new(1, recipient.clone(), 0);
        let signature = fixtures::sign(&auth, &key, &order);
        let _ = auth.execute(&order, &signature, &owner);
        b.iter(|| black_box(auth.execute(&order, &signature, &owner)))
    });

    group.finish();
}
