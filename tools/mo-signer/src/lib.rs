//! MO-Signer: structured data and money order signing helpers.
//!
//! The binary in `main.rs` is a thin clap front end over these functions.
//!
//! Never pass real private keys on the command line.

use anyhow::{bail, Context, Result};
use mo_01_structured_data::{
    domain_hash, ecdsa, message_hash, AccountId, Domain, Hash, PrivateKey, PublicKey,
    RecoverableSignature, StructuredValue,
};
use mo_02_money_orders::{MoneyOrder, MoneyOrderConfig, RecipientRef};

/// Hex length of a compressed public key.
const PUBLIC_KEY_HEX_LEN: usize = 66;

/// Parse a recipient: 66 hex characters select legacy mode, anything else
/// must be an account.
pub fn parse_recipient(input: &str) -> Result<RecipientRef> {
    let input = input.trim();
    if input.len() == PUBLIC_KEY_HEX_LEN && input.bytes().all(|b| b.is_ascii_hexdigit()) {
        let key = PublicKey::from_hex(input).context("invalid recipient public key")?;
        return Ok(RecipientRef::PublicKey(key));
    }
    let account: AccountId = input
        .parse()
        .with_context(|| format!("invalid recipient account {input:?}"))?;
    Ok(RecipientRef::Account(account))
}

/// Parse a private key given as hex.
pub fn parse_private_key(input: &str) -> Result<PrivateKey> {
    PrivateKey::from_hex(input).context("invalid private key")
}

/// Sign `order` under the domain in `config`.
pub fn sign_order(
    config: &MoneyOrderConfig,
    key: &PrivateKey,
    order: &MoneyOrder,
) -> Result<RecoverableSignature> {
    let dh = config.domain_hash().context("domain cannot be encoded")?;
    ecdsa::sign(key, &dh, &order.to_structured_value()).context("signing failed")
}

/// Output of `sign-ascii`.
#[derive(Debug, Clone)]
pub struct AsciiSignature {
    /// Hash of the domain tuple
    pub domain_hash: Hash,
    /// Hash of the serialized message
    pub message_hash: Hash,
    /// Recoverable signature
    pub signature: RecoverableSignature,
}

/// Sign an ASCII string under `domain`.
pub fn sign_ascii(key: &PrivateKey, message: &str, domain: &Domain) -> Result<AsciiSignature> {
    let value = StructuredValue::ascii(message);
    let dh = domain_hash(domain).context("domain cannot be encoded")?;
    let mh = message_hash(&value).context("message is not printable ASCII")?;
    let signature = ecdsa::sign(key, &dh, &value).context("signing failed")?;
    Ok(AsciiSignature {
        domain_hash: dh,
        message_hash: mh,
        signature,
    })
}

/// Chain id as decimal or `0x` hex.
pub fn parse_chain_id(input: &str) -> Result<u32> {
    match mo_02_money_orders::domain::parse_chain_id(input) {
        Some(id) => Ok(id),
        None => bail!("invalid chain id {input:?}"),
    }
}

/// Human-readable report for a signed order, with execute and cancel hints.
pub fn render_order(order: &MoneyOrder, signature: &RecoverableSignature) -> String {
    let recipient = match &order.recipient {
        RecipientRef::Account(account) => format!("'{account}"),
        RecipientRef::PublicKey(key) => format!("0x{key}"),
    };
    let tuple = format!(
        "{{amount: u{}, recipient: {recipient}, salt: u{}}}",
        order.amount, order.salt
    );

    let mut out = String::new();
    if matches!(order.recipient, RecipientRef::PublicKey(_)) {
        out.push_str("LEGACY MODE: the owner must be registered with its public key.\n\n");
    }
    out.push_str(&format!("Signature:\n{signature}\n\n"));
    out.push_str(&format!("Execute this money order with:\nexecute {tuple} {signature}\n\n"));
    out.push_str(&format!("Or cancel it as the owner with:\ncancel {tuple}"));
    out
}

/// Report for `sign-ascii`.
pub fn render_ascii(signed: &AsciiSignature) -> String {
    format!(
        "Domain hash:\n{}\n\nStructured data hash:\n{}\n\nSignature:\n{}",
        hex::encode(signed.domain_hash),
        hex::encode(signed.message_hash),
        signed.signature
    )
}
