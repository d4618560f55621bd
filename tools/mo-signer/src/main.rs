//! MO-Signer: sign structured data and money orders from the command line.
//!
//! ## Usage
//!
//! ```bash
//! # Account-mode order
//! mo-signer sign-order <key> ST1SJ3DTE5DN7X54YDH5D64R3BCB6A2AG2ZQ8YPD5 100 1
//!
//! # Legacy order (recipient given as compressed public key)
//! mo-signer sign-order <key> 03cd2cfdbd2ad9332828a7a13ef62cb999e063421c708e863a7ffed71fb61c88c9 100 1
//!
//! # Arbitrary ASCII message
//! mo-signer sign-ascii <key> "Hello World" "Test App" 1
//! ```
//!
//! DO NOT USE REAL SEED PHRASES OR PRIVATE KEYS.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use mo_01_structured_data::{Domain, Network};
use mo_02_money_orders::{MoneyOrder, MoneyOrderConfig};
use money_telemetry::{init_telemetry, TelemetryConfig};

use mo_signer::{
    parse_chain_id, parse_private_key, parse_recipient, render_ascii, render_order, sign_ascii,
    sign_order,
};

/// Money order signer
#[derive(Parser, Debug)]
#[command(name = "mo-signer")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Domain name
    #[arg(long, global = true, default_value = "Money Orders")]
    domain_name: String,

    /// Domain version
    #[arg(long, global = true, default_value = "1.0.0")]
    domain_version: String,

    /// Domain chain id (decimal or 0x hex)
    #[arg(long, global = true, default_value = "1")]
    chain_id: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign a money order; a 66 hex character recipient selects legacy mode
    SignOrder {
        /// Owner private key (hex)
        private_key: String,
        /// Recipient account or compressed public key
        recipient: String,
        /// Amount
        amount: u128,
        /// Salt
        salt: u128,
        /// Print only the signature
        #[arg(short, long)]
        quiet: bool,
    },
    /// Sign an ASCII string under an ad-hoc domain
    SignAscii {
        /// Signer private key (hex)
        private_key: String,
        /// Message
        message: String,
        /// Domain name
        domain_name: String,
        /// Chain id (decimal or 0x hex)
        chain_id: String,
    },
    /// Print the account controlled by a key
    Address {
        /// Private key (hex)
        private_key: String,
        /// Use the testnet version byte
        #[arg(long)]
        testnet: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Diagnostics go to stderr; stdout carries only results
    let telemetry = TelemetryConfig {
        service_name: "mo-signer".to_string(),
        ..TelemetryConfig::from_env()
    };
    init_telemetry(&telemetry).context("failed to initialize telemetry")?;

    println!("{}", run(args)?);
    Ok(())
}

fn run(args: Args) -> Result<String> {
    match args.command {
        Command::SignOrder {
            private_key,
            recipient,
            amount,
            salt,
            quiet,
        } => {
            let config = MoneyOrderConfig {
                domain_name: args.domain_name,
                domain_version: args.domain_version,
                chain_id: parse_chain_id(&args.chain_id)?,
                ..MoneyOrderConfig::default()
            };
            let key = parse_private_key(&private_key)?;
            let order = MoneyOrder::new(amount, parse_recipient(&recipient)?, salt);
            debug!(order_key = %order.key(), "Signing money order");

            let signature = sign_order(&config, &key, &order)?;
            Ok(if quiet {
                signature.to_string()
            } else {
                render_order(&order, &signature)
            })
        }
        Command::SignAscii {
            private_key,
            message,
            domain_name,
            chain_id,
        } => {
            let key = parse_private_key(&private_key)?;
            let domain = Domain::new(domain_name, args.domain_version, parse_chain_id(&chain_id)?);
            Ok(render_ascii(&sign_ascii(&key, &message, &domain)?))
        }
        Command::Address {
            private_key,
            testnet,
        } => {
            let network = if testnet {
                Network::Testnet
            } else {
                Network::Mainnet
            };
            let key = parse_private_key(&private_key)?;
            let account = key
                .account(network.singlesig_version())
                .context("cannot derive account")?;
            Ok(account.to_string())
        }
    }
}
