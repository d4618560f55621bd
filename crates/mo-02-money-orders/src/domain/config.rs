//! # Authorizer Configuration
//!
//! Signing domain and network settings, read from the environment.

use super::errors::ConfigError;
use mo_01_structured_data::{domain_hash, Domain, EncodingError, Hash, Network, CHAIN_ID_MAINNET};
use serde::{Deserialize, Serialize};
use std::env;

/// Default application name in the signing domain.
pub const DEFAULT_DOMAIN_NAME: &str = "Money Orders";
/// Default application version in the signing domain.
pub const DEFAULT_DOMAIN_VERSION: &str = "1.0.0";

/// Escrow authorizer configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyOrderConfig {
    /// Application name
    pub domain_name: String,
    /// Application version
    pub domain_version: String,
    /// Chain identifier
    pub chain_id: u32,
    /// Network whose version byte is used for derived accounts
    pub network: Network,
}

impl Default for MoneyOrderConfig {
    fn default() -> Self {
        Self {
            domain_name: DEFAULT_DOMAIN_NAME.to_string(),
            domain_version: DEFAULT_DOMAIN_VERSION.to_string(),
            chain_id: CHAIN_ID_MAINNET,
            network: Network::Mainnet,
        }
    }
}

impl MoneyOrderConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `MO_DOMAIN_NAME`: Domain name (default: Money Orders)
    /// - `MO_DOMAIN_VERSION`: Domain version (default: 1.0.0)
    /// - `MO_NETWORK`: `mainnet` or `testnet` (default: mainnet)
    /// - `MO_CHAIN_ID`: Chain id, decimal or `0x` hex (default: the network's)
    pub fn from_env() -> Result<Self, ConfigError> {
        let network = match env::var("MO_NETWORK") {
            Ok(value) => value.parse::<Network>().map_err(|_| ConfigError {
                variable: "MO_NETWORK",
                value,
            })?,
            Err(_) => Network::Mainnet,
        };

        let chain_id = match env::var("MO_CHAIN_ID") {
            Ok(value) => parse_chain_id(&value).ok_or(ConfigError {
                variable: "MO_CHAIN_ID",
                value,
            })?,
            Err(_) => network.chain_id(),
        };

        Ok(Self {
            domain_name: env::var("MO_DOMAIN_NAME")
                .unwrap_or_else(|_| DEFAULT_DOMAIN_NAME.to_string()),
            domain_version: env::var("MO_DOMAIN_VERSION")
                .unwrap_or_else(|_| DEFAULT_DOMAIN_VERSION.to_string()),
            chain_id,
            network,
        })
    }

    /// Configuration for a test network deployment.
    pub fn testnet() -> Self {
        Self {
            chain_id: Network::Testnet.chain_id(),
            network: Network::Testnet,
            ..Self::default()
        }
    }

    /// The signing domain.
    pub fn domain(&self) -> Domain {
        Domain::new(
            self.domain_name.clone(),
            self.domain_version.clone(),
            self.chain_id,
        )
    }

    /// Hash of the signing domain.
    pub fn domain_hash(&self) -> Result<Hash, EncodingError> {
        domain_hash(&self.domain())
    }

    /// Version byte for accounts derived from public keys.
    pub fn account_version(&self) -> u8 {
        self.network.singlesig_version()
    }
}

/// Parse a chain id written in decimal or `0x` hex.
pub fn parse_chain_id(value: &str) -> Option<u32> {
    let value = value.trim();
    match value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
        Some(digits) => u32::from_str_radix(digits, 16).ok(),
        None => value.parse().ok(),
    }
}
