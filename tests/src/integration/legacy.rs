//! # Legacy Mode
//!
//! Orders whose recipient is a raw public key are verified against the
//! owner's public key rather than its account.

#[cfg(test)]
mod tests {
    use crate::fixtures;
    use mo_01_structured_data::{ecdsa, message_hash, structured_data_digest, RecoverableSignature};
    use mo_02_money_orders::{
        EscrowOwner, MoneyOrder, MoneyOrderApi, MoneyOrderConfig, MoneyOrderError, OrderStatus,
        VerificationMode,
    };

    const LEGACY_SIGNATURE: &str = "0x232d481a910f439bbd2166e823c724d8751d8ba27bfb358f8d5911ce81d63c70\
                                    5bba0816ad0c0da1341d04b9f7790d7eb51406f69b829da26288d377a84acf5d00";

    fn legacy_order() -> MoneyOrder {
        MoneyOrder::new(50, fixtures::recipient_key().public_key(), 1)
    }

    #[test]
    fn test_legacy_vectors() {
        let order = legacy_order();
        assert_eq!(order.verification_mode(), VerificationMode::PublicKey);
        assert_eq!(
            hex::encode(message_hash(&order.to_structured_value()).unwrap()),
            "b3de1efe40a832b2fdc7c90899d7afe88c557183c1efa55c53ce5e3c51e867b6"
        );

        let auth = fixtures::authorizer(MoneyOrderConfig::default(), 0);
        assert_eq!(
            hex::encode(auth.order_digest(&order).unwrap()),
            "1b5058a84b6e917d20db3983fd0474785f49bff21a496874554da0893a1c6313"
        );
        assert_eq!(
            fixtures::sign(&auth, &fixtures::owner_key(), &order).to_hex(),
            LEGACY_SIGNATURE
        );
    }

    #[test]
    fn test_legacy_execute_with_published_signature() {
        let config = MoneyOrderConfig::default();
        let owner = fixtures::owner(&config);
        let recipient = fixtures::recipient(&config);
        let auth = fixtures::authorizer(config, 80);
        let signature: RecoverableSignature = LEGACY_SIGNATURE.parse().unwrap();

        auth.execute(&legacy_order(), &signature, &owner).unwrap();
        assert_eq!(auth.balance(&recipient).unwrap(), 50);
        assert_eq!(auth.balance(&owner.account).unwrap(), 30);
        assert_eq!(auth.status(&legacy_order()).unwrap(), OrderStatus::Executed);
    }

    #[test]
    fn test_legacy_without_owner_key_rejected() {
        let config = MoneyOrderConfig::default();
        let owner = EscrowOwner::new(fixtures::owner(&config).account);
        let auth = fixtures::authorizer(config, 80);
        let signature: RecoverableSignature = LEGACY_SIGNATURE.parse().unwrap();

        assert_eq!(
            auth.execute(&legacy_order(), &signature, &owner).unwrap_err(),
            MoneyOrderError::InvalidSignature
        );
        assert_eq!(auth.status(&legacy_order()).unwrap(), OrderStatus::Pending);
    }

    #[test]
    fn test_legacy_tamper_is_false() {
        let auth = fixtures::authorizer(MoneyOrderConfig::default(), 0);
        let order = legacy_order();
        let digest = structured_data_digest(&auth.domain_hash(), &order.to_structured_value())
            .unwrap();
        let owner_key = fixtures::owner_key().public_key();
        let signature: RecoverableSignature = LEGACY_SIGNATURE.parse().unwrap();
        assert!(ecdsa::verify_as_public_key(&digest, &signature, &owner_key));

        for byte in 0..64 {
            let mut bytes = *signature.as_bytes();
            bytes[byte] ^= 0x01;
            let tampered = RecoverableSignature::from_bytes(bytes);
            assert!(!ecdsa::verify_as_public_key(&digest, &tampered, &owner_key));
        }
    }

    #[test]
    fn test_account_and_legacy_orders_are_distinct() {
        let config = MoneyOrderConfig::default();
        let owner = fixtures::owner(&config);
        let auth = fixtures::authorizer(config.clone(), 100);
        let key = fixtures::owner_key();

        let legacy = legacy_order();
        let account = MoneyOrder::new(50, fixtures::recipient(&config), 1);
        assert_ne!(legacy.key(), account.key());

        auth.execute(&legacy, &fixtures::sign(&auth, &key, &legacy), &owner)
            .unwrap();
        auth.execute(&account, &fixtures::sign(&auth, &key, &account), &owner)
            .unwrap();
        assert_eq!(auth.balance(&owner.account).unwrap(), 0);
    }
}
