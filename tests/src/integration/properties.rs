//! # Cross-Crate Properties
//!
//! Randomized checks over fresh keys, amounts and salts.

#[cfg(test)]
mod tests {
    use crate::fixtures;
    use mo_01_structured_data::{ecdsa, Domain, PrivateKey, StructuredValue, VERSION_TESTNET_SINGLESIG};
    use mo_02_money_orders::{ErrorCode, EscrowOwner, MoneyOrder, MoneyOrderApi, MoneyOrderConfig};
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn prop_fresh_owner_executes_once(amount in 1u128..1_000_000, salt: u128) {
            let config = MoneyOrderConfig::default();
            let key = PrivateKey::generate();
            let owner = EscrowOwner::from_public_key(config.account_version(), key.public_key())
                .unwrap();
            let auth = fixtures::authorizer(config.clone(), 0);
            auth.deposit(&owner.account, amount).unwrap();

            let order = MoneyOrder::new(amount, fixtures::recipient(&config), salt);
            let signature = fixtures::sign(&auth, &key, &order);

            prop_assert!(auth.execute(&order, &signature, &owner).is_ok());
            prop_assert_eq!(
                auth.execute(&order, &signature, &owner).unwrap_err().code(),
                Some(ErrorCode::AlreadyExecuted)
            );
            prop_assert_eq!(auth.balance(&owner.account).unwrap(), 0);
        }

        #[test]
        fn prop_ascii_round_trip(message in "[ -~]{0,64}", chain_id: u32) {
            let key = PrivateKey::generate();
            let account = key.account(VERSION_TESTNET_SINGLESIG).unwrap();
            let dh = mo_01_structured_data::domain_hash(&Domain::new("Test App", "1.0.0", chain_id))
                .unwrap();
            let value = StructuredValue::ascii(message);
            let signature = ecdsa::sign(&key, &dh, &value).unwrap();
            let digest = mo_01_structured_data::structured_data_digest(&dh, &value).unwrap();

            prop_assert!(ecdsa::verify_as_account(&digest, &signature, &account));
            prop_assert!(!ecdsa::verify_as_account(
                &digest,
                &signature,
                &fixtures::recipient_key().account(VERSION_TESTNET_SINGLESIG).unwrap()
            ));
        }
    }
}
