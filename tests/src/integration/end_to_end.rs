//! # End-to-End Flows
//!
//! Sign → execute → settle against the in-memory adapters, including the
//! reference scenario on the "Money Orders" 1.0.0 mainnet domain.

#[cfg(test)]
mod tests {
    use crate::fixtures::{self, RECIPIENT_TESTNET};
    use mo_01_structured_data::{hash160, AccountId, StructuredValue};
    use mo_02_money_orders::{
        ErrorCode, MoneyOrder, MoneyOrderApi, MoneyOrderConfig, MoneyOrderError,
        MoneyOrderEvent, OrderStatus,
    };

    // =============================================================================
    // REFERENCE SCENARIO
    // =============================================================================

    #[test]
    fn test_reference_scenario_executes_exactly_once() {
        let config = MoneyOrderConfig::default();
        let owner = fixtures::owner(&config);
        let recipient: AccountId = RECIPIENT_TESTNET.parse().unwrap();
        let auth = fixtures::authorizer(config, 100);

        let order = MoneyOrder::new(50, recipient.clone(), 1);
        let signature = fixtures::sign(&auth, &fixtures::owner_key(), &order);
        assert_eq!(
            signature.to_hex(),
            "0x98b2a5e2b40461a6cb3eb477eba9daf1babf95a56bd95ba075dc8671c241c770\
             372c250b8bebdd6ee681ef02571419ec60c8a81a23cb167219e46dfb549d78bd00"
        );

        auth.execute(&order, &signature, &owner).unwrap();
        assert_eq!(auth.balance(&owner.account).unwrap(), 50);
        assert_eq!(auth.balance(&recipient).unwrap(), 50);

        let err = auth.execute(&order, &signature, &owner).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::AlreadyExecuted));
        assert_eq!(auth.balance(&owner.account).unwrap(), 50);
        assert_eq!(auth.balance(&recipient).unwrap(), 50);
    }

    #[test]
    fn test_event_stream_matches_ledger() {
        let config = MoneyOrderConfig::default();
        let owner = fixtures::owner(&config);
        let recipient = fixtures::recipient(&config);
        let auth = fixtures::authorizer(config, 1_000);
        let key = fixtures::owner_key();

        let executed = MoneyOrder::new(300, recipient.clone(), 1);
        let cancelled = MoneyOrder::new(300, recipient.clone(), 2);
        auth.execute(&executed, &fixtures::sign(&auth, &key, &executed), &owner)
            .unwrap();
        auth.cancel(&cancelled, &owner.account, &owner.account).unwrap();

        let events = auth.events().events();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            &events[0],
            MoneyOrderEvent::TransferExecuted { amount: 300, to, .. } if *to == recipient
        ));
        assert!(matches!(&events[1], MoneyOrderEvent::OrderCancelled { .. }));
        assert_eq!(auth.ledger().total(), 1_000);
    }

    // =============================================================================
    // AUTHORIZATION ORDERING
    // =============================================================================

    #[test]
    fn test_funds_and_signature_checks_independent() {
        let config = MoneyOrderConfig::default();
        let owner = fixtures::owner(&config);
        let recipient = fixtures::recipient(&config);

        // Valid signature, empty escrow
        let poor = fixtures::authorizer(config.clone(), 0);
        let order = MoneyOrder::new(50, recipient.clone(), 1);
        let good_sig = fixtures::sign(&poor, &fixtures::owner_key(), &order);
        assert_eq!(
            poor.execute(&order, &good_sig, &owner).unwrap_err().code(),
            Some(ErrorCode::InsufficientFunds)
        );

        // Funded escrow, foreign signature
        let rich = fixtures::authorizer(config, 1_000);
        let bad_sig = fixtures::sign(&rich, &fixtures::recipient_key(), &order);
        assert_eq!(
            rich.execute(&order, &bad_sig, &owner).unwrap_err().code(),
            Some(ErrorCode::InvalidSignature)
        );
    }

    #[test]
    fn test_cancel_gates_execute() {
        let config = MoneyOrderConfig::default();
        let owner = fixtures::owner(&config);
        let auth = fixtures::authorizer(config.clone(), 100);
        let order = MoneyOrder::new(50, fixtures::recipient(&config), 1);

        auth.cancel(&order, &owner.account, &owner.account).unwrap();
        let err = auth
            .execute(&order, &fixtures::sign(&auth, &fixtures::owner_key(), &order), &owner)
            .unwrap_err();
        assert_eq!(err, MoneyOrderError::AlreadyExecuted(OrderStatus::Cancelled));
        assert_eq!(auth.balance(&owner.account).unwrap(), 100);
    }

    #[test]
    fn test_stranger_cannot_cancel() {
        let config = MoneyOrderConfig::default();
        let owner = fixtures::owner(&config);
        let stranger = fixtures::recipient(&config);
        let auth = fixtures::authorizer(config, 100);
        let order = MoneyOrder::new(50, stranger.clone(), 1);

        assert_eq!(
            auth.cancel(&order, &stranger, &owner.account).unwrap_err(),
            MoneyOrderError::NotOwner
        );
        assert_eq!(auth.status(&order).unwrap(), OrderStatus::Pending);
    }

    // =============================================================================
    // NETWORK SEPARATION
    // =============================================================================

    #[test]
    fn test_mainnet_signature_rejected_on_testnet() {
        let mainnet = MoneyOrderConfig::default();
        let testnet = MoneyOrderConfig::testnet();
        let main_auth = fixtures::authorizer(mainnet.clone(), 100);
        let test_auth = fixtures::authorizer(testnet.clone(), 100);

        let order = MoneyOrder::new(50, fixtures::recipient(&mainnet), 1);
        let signature = fixtures::sign(&main_auth, &fixtures::owner_key(), &order);

        assert_eq!(
            test_auth
                .execute(&order, &signature, &fixtures::owner(&testnet))
                .unwrap_err(),
            MoneyOrderError::InvalidSignature
        );
        main_auth
            .execute(&order, &signature, &fixtures::owner(&mainnet))
            .unwrap();
    }

    #[test]
    fn test_order_value_shape() {
        let recipient: AccountId = RECIPIENT_TESTNET.parse().unwrap();
        assert_eq!(
            recipient.hash160(),
            &hash160(&fixtures::recipient_key().public_key().as_bytes()[..])
        );
        let value = MoneyOrder::new(50, recipient.clone(), 1).to_structured_value();
        let expected = StructuredValue::tuple([
            ("amount", StructuredValue::uint(50)),
            ("recipient", StructuredValue::principal(recipient)),
            ("salt", StructuredValue::uint(1)),
        ]);
        assert_eq!(value, expected);
    }
}
