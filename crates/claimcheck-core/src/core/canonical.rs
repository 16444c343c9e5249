// crates/claimcheck-core/src/core/canonical.rs
// ============================================================================
// Module: Claimcheck Canonical Values
// Description: JSON-like value model with a deterministic canonical serializer.
// Purpose: Produce stable canonical bytes used for content hashing and equality.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Every equality decision in Claimcheck reduces to comparing canonical bytes.
//! [`CanonicalValue`] models the supported value shapes as an exhaustive sum
//! type, and [`canonical_json`] emits the one deterministic compact encoding:
//! mapping keys sorted ascending by UTF-8 byte value, sequence order
//! preserved, no insignificant whitespace, non-ASCII characters emitted
//! literally, and the integer/float distinction of the source preserved.
//!
//! Canonicalization is total for every representable value except non-finite
//! floats, which are rejected with [`CanonicalizeError::UnsupportedType`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde_json::Value;
use thiserror::Error;

// ============================================================================
// SECTION: Canonical Value Model
// ============================================================================

/// Numeric value preserving the integer/float distinction of its source.
///
/// The distinction is hash-significant: `1` and `1.0` canonicalize to
/// different byte sequences and therefore different content hashes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanonicalNumber {
    /// Signed integer value.
    Int(i64),
    /// Unsigned integer value outside the signed range.
    Uint(u64),
    /// Floating-point value; must be finite to canonicalize.
    Float(f64),
}

/// JSON-like value accepted by the canonical serializer.
///
/// Mapping keys are unique and iterate in ascending UTF-8 byte order by
/// construction. Sequences preserve input order exactly.
#[derive(Debug, Clone, PartialEq)]
pub enum CanonicalValue {
    /// Null value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(CanonicalNumber),
    /// UTF-8 string value.
    Text(String),
    /// Ordered sequence of values.
    Sequence(Vec<CanonicalValue>),
    /// Key-sorted mapping of string keys to values.
    Mapping(BTreeMap<String, CanonicalValue>),
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while producing canonical bytes.
#[derive(Debug, Error)]
pub enum CanonicalizeError {
    /// Value lies outside the canonical value model.
    #[error("unsupported value for canonical serialization: {0}")]
    UnsupportedType(String),
}

// ============================================================================
// SECTION: Canonical Serialization
// ============================================================================

/// Serializes a value into its canonical compact JSON string.
///
/// The output is idempotent under re-canonicalization: parsing the result
/// back into a [`CanonicalValue`] and serializing again yields identical
/// bytes.
///
/// # Errors
///
/// Returns [`CanonicalizeError::UnsupportedType`] for non-finite floats.
pub fn canonical_json(value: &CanonicalValue) -> Result<String, CanonicalizeError> {
    let mut out = String::new();
    write_value(value, &mut out)?;
    Ok(out)
}

/// Serializes a value into canonical bytes for hashing.
///
/// # Errors
///
/// Returns [`CanonicalizeError::UnsupportedType`] for non-finite floats.
pub fn canonicalize(value: &CanonicalValue) -> Result<Vec<u8>, CanonicalizeError> {
    canonical_json(value).map(String::into_bytes)
}

/// Recursively writes a value in canonical form.
fn write_value(value: &CanonicalValue, out: &mut String) -> Result<(), CanonicalizeError> {
    match value {
        CanonicalValue::Null => out.push_str("null"),
        CanonicalValue::Bool(true) => out.push_str("true"),
        CanonicalValue::Bool(false) => out.push_str("false"),
        CanonicalValue::Number(number) => write_number(number, out)?,
        CanonicalValue::Text(text) => write_text(text, out),
        CanonicalValue::Sequence(items) => {
            out.push('[');
            for (position, item) in items.iter().enumerate() {
                if position > 0 {
                    out.push(',');
                }
                write_value(item, out)?;
            }
            out.push(']');
        }
        CanonicalValue::Mapping(entries) => {
            out.push('{');
            for (position, (key, entry)) in entries.iter().enumerate() {
                if position > 0 {
                    out.push(',');
                }
                write_text(key, out);
                out.push(':');
                write_value(entry, out)?;
            }
            out.push('}');
        }
    }
    Ok(())
}

/// Writes a number, preserving the integer/float distinction.
fn write_number(number: &CanonicalNumber, out: &mut String) -> Result<(), CanonicalizeError> {
    match number {
        CanonicalNumber::Int(value) => out.push_str(&value.to_string()),
        CanonicalNumber::Uint(value) => out.push_str(&value.to_string()),
        CanonicalNumber::Float(value) => {
            let parsed = serde_json::Number::from_f64(*value).ok_or_else(|| {
                CanonicalizeError::UnsupportedType(format!("non-finite float {value}"))
            })?;
            out.push_str(&parsed.to_string());
        }
    }
    Ok(())
}

/// Writes a string with minimal escaping; non-ASCII is emitted literally.
fn write_text(text: &str, out: &mut String) {
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            ch if (ch as u32) < 0x20 => {
                let code = ch as u32;
                out.push_str(&format!("\\u{code:04x}"));
            }
            ch => out.push(ch),
        }
    }
    out.push('"');
}

// ============================================================================
// SECTION: JSON Bridging
// ============================================================================

impl CanonicalValue {
    /// Converts the value into a `serde_json` value.
    ///
    /// # Errors
    ///
    /// Returns [`CanonicalizeError::UnsupportedType`] for non-finite floats,
    /// which have no JSON representation.
    pub fn to_json(&self) -> Result<Value, CanonicalizeError> {
        match self {
            Self::Null => Ok(Value::Null),
            Self::Bool(value) => Ok(Value::Bool(*value)),
            Self::Number(number) => number.to_json_number().map(Value::Number),
            Self::Text(text) => Ok(Value::String(text.clone())),
            Self::Sequence(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(item.to_json()?);
                }
                Ok(Value::Array(out))
            }
            Self::Mapping(entries) => {
                let mut out = serde_json::Map::with_capacity(entries.len());
                for (key, entry) in entries {
                    out.insert(key.clone(), entry.to_json()?);
                }
                Ok(Value::Object(out))
            }
        }
    }
}

impl CanonicalNumber {
    /// Converts the number into a `serde_json` number.
    ///
    /// # Errors
    ///
    /// Returns [`CanonicalizeError::UnsupportedType`] for non-finite floats.
    pub fn to_json_number(&self) -> Result<serde_json::Number, CanonicalizeError> {
        match self {
            Self::Int(value) => Ok(serde_json::Number::from(*value)),
            Self::Uint(value) => Ok(serde_json::Number::from(*value)),
            Self::Float(value) => serde_json::Number::from_f64(*value).ok_or_else(|| {
                CanonicalizeError::UnsupportedType(format!("non-finite float {value}"))
            }),
        }
    }
}

impl From<&serde_json::Number> for CanonicalNumber {
    fn from(value: &serde_json::Number) -> Self {
        if let Some(int) = value.as_i64() {
            Self::Int(int)
        } else if let Some(uint) = value.as_u64() {
            Self::Uint(uint)
        } else {
            // serde_json numbers are always finite; a NaN fallback fails
            // closed at canonicalization time.
            Self::Float(value.as_f64().unwrap_or(f64::NAN))
        }
    }
}

impl From<Value> for CanonicalValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(flag) => Self::Bool(flag),
            Value::Number(number) => Self::Number(CanonicalNumber::from(&number)),
            Value::String(text) => Self::Text(text),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Object(entries) => {
                Self::Mapping(entries.into_iter().map(|(key, entry)| (key, Self::from(entry))).collect())
            }
        }
    }
}

impl Serialize for CanonicalValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Number(number) => match number {
                CanonicalNumber::Int(value) => serializer.serialize_i64(*value),
                CanonicalNumber::Uint(value) => serializer.serialize_u64(*value),
                CanonicalNumber::Float(value) => serializer.serialize_f64(*value),
            },
            Self::Text(text) => serializer.serialize_str(text),
            Self::Sequence(items) => serializer.collect_seq(items),
            Self::Mapping(entries) => serializer.collect_map(entries),
        }
    }
}

impl<'de> Deserialize<'de> for CanonicalValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from)
    }
}
