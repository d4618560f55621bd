//! # MO-01 Structured Data Benchmarks
//!
//! - Signing digest composition
//! - Recoverable signing
//! - Signer recovery and account comparison
//! - Parallel batch verification

use crate::fixtures;
use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use mo_01_structured_data::{
    ecdsa, structured_data_digest, Domain, ExpectedSigner, PrivateKey, StructuredValue,
    VerificationRequest, VERSION_MAINNET_SINGLESIG,
};
use mo_02_money_orders::MoneyOrder;
use std::time::Duration;

fn order_value(salt: u128) -> StructuredValue {
    let recipient = fixtures::recipient_key()
        .account(VERSION_MAINNET_SINGLESIG)
        .expect("recipient");
    MoneyOrder::new(50, recipient, salt).to_structured_value()
}

/// Register the signing and recovery benchmarks.
pub fn bench_structured_data(c: &mut Criterion) {
    let mut group = c.benchmark_group("mo-01-structured-data");
    group.measurement_time(Duration::from_secs(5));

    let key = fixtures::owner_key();
    let account = key.account(VERSION_MAINNET_SINGLESIG).expect("account");
    let dh = mo_01_structured_data::domain_hash(&Domain::new("Money Orders", "1.0.0", 1))
        .expect("domain");
    let value = order_value(1);
    let digest = structured_data_digest(&dh, &value).expect("digest");
    let signature = ecdsa::sign_digest(&key, &digest).expect("sign");

    group.bench_function("digest", |b| {
        b.iter(|| black_box(structured_data_digest(&dh, black_box(&value))))
    });
    group.bench_function("sign", |b| {
        b.iter(|| black_box(ecdsa::sign_digest(&key, black_box(&digest))))
    });
    group.bench_function("recover", |b| {
        b.iter(|| black_box(ecdsa::recover(black_box(&digest), &signature)))
    });
    group.bench_function("verify_as_account", |b| {
        b.iter(|| black_box(ecdsa::verify_as_account(&digest, &signature, &account)))
    });

    for size in [10usize, 100, 500] {
        let requests: Vec<_> = (0..size)
            .map(|i| {
                let signer = PrivateKey::generate();
                let digest = structured_data_digest(&dh, &order_value(i as u128)).expect("digest");
                VerificationRequest {
                    digest,
                    signature: ecdsa::sign_digest(&signer, &digest).expect("sign"),
                    expected: ExpectedSigner::PublicKey(signer.public_key()),
                }
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("batch_verify", size), &requests, |b, reqs| {
            b.iter(|| black_box(ecdsa::batch_verify(reqs)))
        });
    }

    group.finish();
}
