//! # Account Identities
//!
//! An account identity is a network version byte plus the hash160 of a
//! compressed public key, optionally qualified with a contract name.
//! The textual form is c32check (`SP…`, `ST…`), contract-qualified
//! identities append `.contract-name`.

use super::entities::PublicKey;
use super::errors::{AddressError, EncodingError};
use super::hashing::{checksum4, hash160};
use super::value::tags;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Mainnet single-signature version (`SP…`).
pub const VERSION_MAINNET_SINGLESIG: u8 = 22;
/// Mainnet multi-signature version (`SM…`).
pub const VERSION_MAINNET_MULTISIG: u8 = 20;
/// Testnet single-signature version (`ST…`).
pub const VERSION_TESTNET_SINGLESIG: u8 = 26;
/// Testnet multi-signature version (`SN…`).
pub const VERSION_TESTNET_MULTISIG: u8 = 21;

/// Maximum contract name length.
pub const MAX_CONTRACT_NAME_LEN: usize = 40;

const C32_ALPHABET: &[u8; 32] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ";

/// Network an account identity belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Production network
    Mainnet,
    /// Test network
    Testnet,
}

impl Network {
    /// Single-signature address version byte.
    pub fn singlesig_version(self) -> u8 {
        match self {
            Network::Mainnet => VERSION_MAINNET_SINGLESIG,
            Network::Testnet => VERSION_TESTNET_SINGLESIG,
        }
    }

    /// Chain identifier used in signing domains.
    pub fn chain_id(self) -> u32 {
        match self {
            Network::Mainnet => super::entities::CHAIN_ID_MAINNET,
            Network::Testnet => super::entities::CHAIN_ID_TESTNET,
        }
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            other => Err(format!("unknown network: {other}")),
        }
    }
}

/// Validated contract name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContractName(String);

impl ContractName {
    /// Validate a contract name: 1..=40 chars, leading letter, then
    /// letters, digits, `-` or `_`.
    pub fn new(name: impl Into<String>) -> Result<Self, EncodingError> {
        let name = name.into();
        let mut chars = name.chars();
        let valid_first = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
        let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid_first || !valid_rest || name.len() > MAX_CONTRACT_NAME_LEN {
            return Err(EncodingError::InvalidContractName(name));
        }
        Ok(Self(name))
    }

    /// Name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContractName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Account identity, standard or contract-qualified.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId {
    version: u8,
    hash160: [u8; 20],
    contract_name: Option<ContractName>,
}

impl AccountId {
    /// Standard account from a version byte and a 20-byte hash.
    pub fn new(version: u8, hash160: [u8; 20]) -> Result<Self, AddressError> {
        if version >= 32 {
            return Err(AddressError::InvalidVersion(version));
        }
        Ok(Self {
            version,
            hash160,
            contract_name: None,
        })
    }

    /// Account controlled by `public_key` on the network `version` names.
    pub fn from_public_key(version: u8, public_key: &PublicKey) -> Result<Self, AddressError> {
        Self::new(version, hash160(public_key.as_bytes()))
    }

    /// Qualify this account with a contract name.
    pub fn with_contract(mut self, name: ContractName) -> Self {
        self.contract_name = Some(name);
        self
    }

    /// Network version byte.
    pub fn version(&self) -> u8 {
        self.version
    }

    /// 20-byte public key hash.
    pub fn hash160(&self) -> &[u8; 20] {
        &self.hash160
    }

    /// Contract name, for contract-qualified identities.
    pub fn contract_name(&self) -> Option<&ContractName> {
        self.contract_name.as_ref()
    }

    /// The standard account without any contract qualifier.
    pub fn standard(&self) -> AccountId {
        Self {
            version: self.version,
            hash160: self.hash160,
            contract_name: None,
        }
    }

    /// Whether this identity is contract-qualified.
    pub fn is_contract(&self) -> bool {
        self.contract_name.is_some()
    }

    /// Canonical encoding as a principal value.
    pub(crate) fn serialize_into(&self, out: &mut Vec<u8>) -> Result<(), EncodingError> {
        match &self.contract_name {
            None => {
                out.push(tags::STANDARD_PRINCIPAL);
                out.push(self.version);
                out.extend_from_slice(&self.hash160);
            }
            Some(name) => {
                out.push(tags::CONTRACT_PRINCIPAL);
                out.push(self.version);
                out.extend_from_slice(&self.hash160);
                // ContractName guarantees 1..=40 bytes
                out.push(name.as_str().len() as u8);
                out.extend_from_slice(name.as_str().as_bytes());
            }
        }
        Ok(())
    }

    /// c32check address of the standard account part.
    pub fn address(&self) -> String {
        let mut payload = Vec::with_capacity(24);
        payload.extend_from_slice(&self.hash160);
        payload.extend_from_slice(&checksum4(self.version, &self.hash160));

        let mut address = String::with_capacity(41);
        address.push('S');
        address.push(C32_ALPHABET[self.version as usize] as char);
        address.push_str(&c32_encode(&payload));
        address
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.contract_name {
            None => f.write_str(&self.address()),
            Some(name) => write!(f, "{}.{}", self.address(), name),
        }
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({self})")
    }
}

impl FromStr for AccountId {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (address, contract) = match s.split_once('.') {
            Some((address, contract)) => (address, Some(ContractName::new(contract)?)),
            None => (s, None),
        };

        let body = address
            .strip_prefix('S')
            .ok_or_else(|| AddressError::MissingPrefix(address.to_string()))?;
        let mut chars = body.chars();
        let version_char = chars
            .next()
            .ok_or_else(|| AddressError::MissingPrefix(address.to_string()))?;
        let version = c32_value(version_char)?;

        let payload = c32_decode(chars.as_str())?;
        if payload.len() != 24 {
            return Err(AddressError::InvalidLength(payload.len()));
        }
        let mut hash160 = [0u8; 20];
        hash160.copy_from_slice(&payload[..20]);
        if checksum4(version, &hash160) != payload[20..] {
            return Err(AddressError::ChecksumMismatch);
        }

        let account = AccountId::new(version, hash160)?;
        Ok(match contract {
            Some(name) => account.with_contract(name),
            None => account,
        })
    }
}

impl Serialize for AccountId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

// =============================================================================
// c32 (Crockford base32) codec
// =============================================================================
//
// c32check address: 'S', the version as one c32 digit, then
// c32(hash160 || checksum4) where checksum4 is the first four bytes of
// SHA256(SHA256(version || hash160)). Digits are produced from the least
// significant end, and leading zero bytes map one-to-one onto leading '0's.

/// Encode bytes as big-endian base32; each leading zero byte becomes one `0`.
fn c32_encode(data: &[u8]) -> String {
    let mut digits: Vec<u8> = Vec::with_capacity(data.len() * 8 / 5 + 1);
    let mut carry: u16 = 0;
    let mut carry_bits = 0u32;

    for &byte in data.iter().rev() {
        carry |= (byte as u16) << carry_bits;
        carry_bits += 8;
        while carry_bits >= 5 {
            digits.push(C32_ALPHABET[(carry & 0x1f) as usize]);
            carry >>= 5;
            carry_bits -= 5;
        }
    }
    if carry_bits > 0 {
        digits.push(C32_ALPHABET[(carry & 0x1f) as usize]);
    }

    while digits.last() == Some(&b'0') {
        digits.pop();
    }
    let leading_zeros = data.iter().take_while(|b| **b == 0).count();
    digits.extend(std::iter::repeat(b'0').take(leading_zeros));

    digits.iter().rev().map(|d| *d as char).collect()
}

fn c32_decode(input: &str) -> Result<Vec<u8>, AddressError> {
    let mut bytes: Vec<u8> = Vec::with_capacity(input.len() * 5 / 8 + 1);
    let mut carry: u16 = 0;
    let mut carry_bits = 0u32;

    for c in input.chars().rev() {
        carry |= (c32_value(c)? as u16) << carry_bits;
        carry_bits += 5;
        if carry_bits >= 8 {
            bytes.push((carry & 0xff) as u8);
            carry >>= 8;
            carry_bits -= 8;
        }
    }
    if carry_bits > 0 {
        bytes.push((carry & 0xff) as u8);
    }

    while bytes.last() == Some(&0) {
        bytes.pop();
    }
    let leading_zeros = input
        .chars()
        .take_while(|c| c32_value(*c).is_ok_and(|v| v == 0))
        .count();
    bytes.extend(std::iter::repeat(0u8).take(leading_zeros));

    bytes.reverse();
    Ok(bytes)
}

/// Value of a c32 digit; accepts lowercase and the Crockford aliases.
fn c32_value(c: char) -> Result<u8, AddressError> {
    let normalized = match c.to_ascii_uppercase() {
        'O' => '0',
        'I' | 'L' => '1',
        other => other,
    };
    C32_ALPHABET
        .iter()
        .position(|a| *a as char == normalized)
        .map(|p| p as u8)
        .ok_or(AddressError::InvalidCharacter(c))
}
