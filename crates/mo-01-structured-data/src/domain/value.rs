//! # Structured Values
//!
//! Closed tagged union of signable values and their canonical byte encoding.
//!
//! The encoding is the Clarity consensus serialization: a one-byte type tag
//! followed by a fixed-width or length-prefixed payload. Tuple fields are
//! written in declaration order; nothing is sorted, so the order chosen by
//! the caller is part of what a signature commits to.

use super::errors::EncodingError;
use super::principal::AccountId;

/// Type tags of the wire encoding.
pub mod tags {
    pub const INT: u8 = 0x00;
    pub const UINT: u8 = 0x01;
    pub const BUFFER: u8 = 0x02;
    pub const BOOL_TRUE: u8 = 0x03;
    pub const BOOL_FALSE: u8 = 0x04;
    pub const STANDARD_PRINCIPAL: u8 = 0x05;
    pub const CONTRACT_PRINCIPAL: u8 = 0x06;
    pub const OPTIONAL_NONE: u8 = 0x09;
    pub const OPTIONAL_SOME: u8 = 0x0a;
    pub const LIST: u8 = 0x0b;
    pub const TUPLE: u8 = 0x0c;
    pub const STRING_ASCII: u8 = 0x0d;
    pub const STRING_UTF8: u8 = 0x0e;
}

/// Maximum length of a tuple field name.
pub const MAX_FIELD_NAME_LEN: usize = 128;

/// Maximum payload length representable by a 32-bit length prefix.
const MAX_PAYLOAD_LEN: usize = u32::MAX as usize;

/// A typed, possibly nested value with a deterministic byte encoding.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum StructuredValue {
    /// Signed 128-bit integer
    Int(i128),
    /// Unsigned 128-bit integer
    UInt(u128),
    /// Boolean
    Bool(bool),
    /// Account identity, standard or contract-qualified
    Principal(AccountId),
    /// Raw bytes
    Buffer(Vec<u8>),
    /// Printable ASCII string
    AsciiString(String),
    /// UTF-8 string
    Utf8String(String),
    /// Optional value
    Optional(Option<Box<StructuredValue>>),
    /// Homogeneous sequence
    List(Vec<StructuredValue>),
    /// Named fields in declaration order
    Tuple(Vec<(String, StructuredValue)>),
}

impl StructuredValue {
    /// Unsigned integer.
    pub fn uint(value: u128) -> Self {
        Self::UInt(value)
    }

    /// Unsigned integer parsed from a decimal literal.
    ///
    /// Literals wider than 128 bits fail with `UIntOutOfRange`.
    pub fn uint_from_decimal(literal: &str) -> Result<Self, EncodingError> {
        let trimmed = literal.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(EncodingError::UIntOutOfRange(literal.to_string()));
        }
        trimmed
            .parse::<u128>()
            .map(Self::UInt)
            .map_err(|_| EncodingError::UIntOutOfRange(literal.to_string()))
    }

    /// Signed integer.
    pub fn int(value: i128) -> Self {
        Self::Int(value)
    }

    /// Boolean.
    pub fn bool(value: bool) -> Self {
        Self::Bool(value)
    }

    /// Account identity.
    pub fn principal(account: AccountId) -> Self {
        Self::Principal(account)
    }

    /// Raw bytes.
    pub fn buffer(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Buffer(bytes.into())
    }

    /// ASCII string. Validity is checked when the value is serialized.
    pub fn ascii(text: impl Into<String>) -> Self {
        Self::AsciiString(text.into())
    }

    /// UTF-8 string.
    pub fn utf8(text: impl Into<String>) -> Self {
        Self::Utf8String(text.into())
    }

    /// Present optional.
    pub fn some(value: StructuredValue) -> Self {
        Self::Optional(Some(Box::new(value)))
    }

    /// Absent optional.
    pub fn none() -> Self {
        Self::Optional(None)
    }

    /// List of values.
    pub fn list(items: impl IntoIterator<Item = StructuredValue>) -> Self {
        Self::List(items.into_iter().collect())
    }

    /// Tuple whose fields keep the order in which they are given.
    pub fn tuple<K: Into<String>>(fields: impl IntoIterator<Item = (K, StructuredValue)>) -> Self {
        Self::Tuple(
            fields
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
    }

    /// Look up a tuple field by name.
    pub fn field(&self, name: &str) -> Option<&StructuredValue> {
        match self {
            Self::Tuple(fields) => fields.iter().find(|(n, _)| n == name).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Canonical byte encoding.
    pub fn serialize(&self) -> Result<Vec<u8>, EncodingError> {
        let mut out = Vec::new();
        self.serialize_into(&mut out)?;
        Ok(out)
    }

    /// Append the canonical encoding to `out`.
    ///
    /// On error `out` may hold a partial encoding and must be discarded.
    pub fn serialize_into(&self, out: &mut Vec<u8>) -> Result<(), EncodingError> {
        match self {
            Self::Int(value) => {
                out.push(tags::INT);
                out.extend_from_slice(&value.to_be_bytes());
            }
            Self::UInt(value) => {
                out.push(tags::UINT);
                out.extend_from_slice(&value.to_be_bytes());
            }
            Self::Bool(true) => out.push(tags::BOOL_TRUE),
            Self::Bool(false) => out.push(tags::BOOL_FALSE),
            Self::Principal(account) => account.serialize_into(out)?,
            Self::Buffer(bytes) => {
                out.push(tags::BUFFER);
                write_len_prefixed(out, bytes)?;
            }
            Self::AsciiString(text) => {
                if let Some((index, byte)) = text
                    .bytes()
                    .enumerate()
                    .find(|(_, b)| !is_clarity_ascii(*b))
                {
                    return Err(EncodingError::NonAscii { index, byte });
                }
                out.push(tags::STRING_ASCII);
                write_len_prefixed(out, text.as_bytes())?;
            }
            Self::Utf8String(text) => {
                out.push(tags::STRING_UTF8);
                write_len_prefixed(out, text.as_bytes())?;
            }
            Self::Optional(None) => out.push(tags::OPTIONAL_NONE),
            Self::Optional(Some(inner)) => {
                out.push(tags::OPTIONAL_SOME);
                inner.serialize_into(out)?;
            }
            Self::List(items) => {
                out.push(tags::LIST);
                write_u32_len(out, items.len())?;
                for item in items {
                    item.serialize_into(out)?;
                }
            }
            Self::Tuple(fields) => {
                out.push(tags::TUPLE);
                write_u32_len(out, fields.len())?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    validate_field_name(name)?;
                    if fields[..i].iter().any(|(prior, _)| prior == name) {
                        return Err(EncodingError::DuplicateField(name.clone()));
                    }
                    // Validated above: 1..=128 bytes
                    out.push(name.len() as u8);
                    out.extend_from_slice(name.as_bytes());
                    value.serialize_into(out)?;
                }
            }
        }
        Ok(())
    }
}

impl From<u128> for StructuredValue {
    fn from(value: u128) -> Self {
        Self::UInt(value)
    }
}

impl From<AccountId> for StructuredValue {
    fn from(account: AccountId) -> Self {
        Self::Principal(account)
    }
}

impl From<bool> for StructuredValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Printable ASCII plus the whitespace escapes Clarity accepts.
fn is_clarity_ascii(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7e | b'\t' | b'\n' | b'\r')
}

fn write_u32_len(out: &mut Vec<u8>, len: usize) -> Result<(), EncodingError> {
    if len > MAX_PAYLOAD_LEN {
        return Err(EncodingError::LengthOverflow {
            len,
            max: MAX_PAYLOAD_LEN,
        });
    }
    out.extend_from_slice(&(len as u32).to_be_bytes());
    Ok(())
}

fn write_len_prefixed(out: &mut Vec<u8>, bytes: &[u8]) -> Result<(), EncodingError> {
    write_u32_len(out, bytes.len())?;
    out.extend_from_slice(bytes);
    Ok(())
}

/// Clarity names: a leading letter, then letters, digits and `-_!?+<>=/*`.
fn validate_field_name(name: &str) -> Result<(), EncodingError> {
    let mut chars = name.chars();
    let valid_first = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || "-_!?+<>=/*".contains(c));
    if !valid_first || !valid_rest || name.len() > MAX_FIELD_NAME_LEN {
        return Err(EncodingError::InvalidFieldName(name.to_string()));
    }
    Ok(())
}
