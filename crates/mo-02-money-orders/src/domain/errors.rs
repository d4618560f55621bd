//! # Domain Errors
//!
//! Error types for money order authorization.

use super::entities::OrderStatus;
use mo_01_structured_data::{AccountId, AddressError, EncodingError};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Stable numeric codes for policy rejections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum ErrorCode {
    /// Escrow balance below the order amount
    InsufficientFunds = 1,
    /// Caller is not the escrow owner
    NotOwner = 100,
    /// Signature does not verify against the owner
    InvalidSignature = 101,
    /// Order already executed or cancelled
    AlreadyExecuted = 102,
}

impl ErrorCode {
    /// Numeric value.
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    /// Look up a code by its numeric value.
    pub fn from_u32(code: u32) -> Option<Self> {
        match code {
            1 => Some(ErrorCode::InsufficientFunds),
            100 => Some(ErrorCode::NotOwner),
            101 => Some(ErrorCode::InvalidSignature),
            102 => Some(ErrorCode::AlreadyExecuted),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "u{}", self.as_u32())
    }
}

/// Errors reported by the external ledger.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// Debit larger than the available balance
    #[error("Insufficient balance in {account}: available {available}, requested {requested}")]
    InsufficientBalance {
        /// Debited account
        account: AccountId,
        /// Balance at the time of the call
        available: u128,
        /// Requested amount
        requested: u128,
    },

    /// Credit would overflow the balance
    #[error("Balance overflow for {0}")]
    Overflow(AccountId),

    /// Ledger could not be reached or refused the call
    #[error("Ledger unavailable: {0}")]
    Unavailable(String),
}

/// Errors reported by the order store.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    /// Store could not be reached
    #[error("Order store unavailable: {0}")]
    Unavailable(String),
}

/// Invalid configuration value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid value {value:?} for {variable}")]
pub struct ConfigError {
    /// Environment variable name
    pub variable: &'static str,
    /// Rejected value
    pub value: String,
}

/// Money order errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoneyOrderError {
    /// Escrow balance below the order amount.
    #[error("Insufficient funds: balance {balance}, required {required}")]
    InsufficientFunds {
        /// Owner balance
        balance: u128,
        /// Order amount
        required: u128,
    },

    /// Caller is not the escrow owner.
    #[error("Caller is not the owner")]
    NotOwner,

    /// Signature does not verify against the owner.
    #[error("Invalid signature")]
    InvalidSignature,

    /// Order already reached a terminal state.
    #[error("Order already {0}")]
    AlreadyExecuted(OrderStatus),

    /// Ledger failure, propagated unchanged.
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// Order store failure.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Order could not be encoded.
    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),

    /// Recipient account could not be derived.
    #[error("Address error: {0}")]
    Address(#[from] AddressError),
}

impl MoneyOrderError {
    /// Stable code for policy rejections, `None` for infrastructure failures.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            MoneyOrderError::InsufficientFunds { .. } => Some(ErrorCode::InsufficientFunds),
            MoneyOrderError::NotOwner => Some(ErrorCode::NotOwner),
            MoneyOrderError::InvalidSignature => Some(ErrorCode::InvalidSignature),
            MoneyOrderError::AlreadyExecuted(_) => Some(ErrorCode::AlreadyExecuted),
            MoneyOrderError::Ledger(_)
            | MoneyOrderError::Storage(_)
            | MoneyOrderError::Encoding(_)
            | MoneyOrderError::Address(_) => None,
        }
    }

    /// Metric label.
    pub fn reason(&self) -> &'static str {
        match self {
            MoneyOrderError::InsufficientFunds { .. } => "insufficient_funds",
            MoneyOrderError::NotOwner => "not_owner",
            MoneyOrderError::InvalidSignature => "invalid_signature",
            MoneyOrderError::AlreadyExecuted(_) => "already_executed",
            MoneyOrderError::Ledger(_) => "ledger",
            MoneyOrderError::Storage(_) => "storage",
            MoneyOrderError::Encoding(_) | MoneyOrderError::Address(_) => "encoding",
        }
    }
}
