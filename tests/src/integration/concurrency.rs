//! # Concurrent Access
//!
//! Many threads racing on one order key must still observe at-most-once
//! execution, and cancel/execute races must end in exactly one terminal state.

#[cfg(test)]
mod tests {
    use crate::fixtures;
    use mo_02_money_orders::{
        ErrorCode, MoneyOrder, MoneyOrderApi, MoneyOrderConfig, OrderStatus,
    };
    use std::sync::{Arc, Barrier};
    use std::thread;

    const THREADS: usize = 8;

    #[test]
    fn test_parallel_execute_same_order_once() {
        let config = MoneyOrderConfig::default();
        let owner = fixtures::owner(&config);
        let recipient = fixtures::recipient(&config);
        let auth = Arc::new(fixtures::authorizer(config, 1_000));

        let order = MoneyOrder::new(50, recipient.clone(), 1);
        let signature = fixtures::sign(&auth, &fixtures::owner_key(), &order);
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let auth = Arc::clone(&auth);
                let barrier = Arc::clone(&barrier);
                let order = order.clone();
                let owner = owner.clone();
                thread::spawn(move || {
                    barrier.wait();
                    auth.execute(&order, &signature, &owner)
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let successes = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1);
        for err in results.into_iter().filter_map(Result::err) {
            assert_eq!(err.code(), Some(ErrorCode::AlreadyExecuted));
        }

        assert_eq!(auth.balance(&recipient).unwrap(), 50);
        assert_eq!(auth.balance(&owner.account).unwrap(), 950);
        assert_eq!(auth.events().len(), 1);
    }

    #[test]
    fn test_parallel_distinct_orders_conserve_balance() {
        let config = MoneyOrderConfig::default();
        let owner = fixtures::owner(&config);
        let recipient = fixtures::recipient(&config);
        let auth = Arc::new(fixtures::authorizer(config, 1_000));
        let key = fixtures::owner_key();

        // 40 orders of 30 exceed the escrow; only 33 can settle
        let orders: Vec<_> = (0..40u128)
            .map(|salt| {
                let order = MoneyOrder::new(30, recipient.clone(), salt);
                let sig = fixtures::sign(&auth, &key, &order);
                (order, sig)
            })
            .collect();

        let results: Vec<_> = thread::scope(|s| {
            let handles: Vec<_> = orders
                .chunks(5)
                .map(|chunk| {
                    let auth = &auth;
                    let owner = &owner;
                    s.spawn(move || {
                        chunk
                            .iter()
                            .map(|(order, sig)| auth.execute(order, sig, owner))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().expect("worker panicked"))
                .collect()
        });

        let settled = results.iter().filter(|r| r.is_ok()).count();
        let underfunded = results
            .iter()
            .filter(|r| matches!(r, Err(e) if e.code() == Some(ErrorCode::InsufficientFunds)))
            .count();
        assert_eq!(settled, 33);
        assert_eq!(underfunded, 7);

        assert_eq!(auth.balance(&recipient).unwrap(), 33 * 30);
        assert_eq!(auth.balance(&owner.account).unwrap(), 10);
        assert_eq!(auth.ledger().total(), 1_000);
        assert_eq!(auth.store().count(OrderStatus::Executed), 33);
    }

    #[test]
    fn test_cancel_execute_race_single_outcome() {
        for salt in 0..20u128 {
            let config = MoneyOrderConfig::default();
            let owner = fixtures::owner(&config);
            let auth = Arc::new(fixtures::authorizer(config.clone(), 100));
            let order = MoneyOrder::new(50, fixtures::recipient(&config), salt);
            let signature = fixtures::sign(&auth, &fixtures::owner_key(), &order);
            let barrier = Barrier::new(2);

            let (executed, cancelled) = thread::scope(|s| {
                let exec = s.spawn(|| {
                    barrier.wait();
                    auth.execute(&order, &signature, &owner)
                });
                let cancel = s.spawn(|| {
                    barrier.wait();
                    auth.cancel(&order, &owner.account, &owner.account)
                });
                (exec.join().unwrap(), cancel.join().unwrap())
            });

            match auth.status(&order).unwrap() {
                OrderStatus::Executed => {
                    assert!(executed.is_ok());
                    assert_eq!(
                        cancelled.unwrap_err().code(),
                        Some(ErrorCode::AlreadyExecuted)
                    );
                    assert_eq!(auth.balance(&owner.account).unwrap(), 50);
                }
                OrderStatus::Cancelled => {
                    assert!(cancelled.is_ok());
                    assert_eq!(
                        executed.unwrap_err().code(),
                        Some(ErrorCode::AlreadyExecuted)
                    );
                    assert_eq!(auth.balance(&owner.account).unwrap(), 100);
                }
                OrderStatus::Pending => panic!("race left order pending"),
            }
        }
    }
}
