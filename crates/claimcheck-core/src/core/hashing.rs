// crates/claimcheck-core/src/core/hashing.rs
// ============================================================================
// Module: Claimcheck Content Hashing
// Description: SHA-256 content hashes over canonical bytes and raw text.
// Purpose: Provide the content-addressable identity used as an equality proxy.
// Dependencies: crate::core::canonical, sha2
// ============================================================================

//! ## Overview
//! Structured values are hashed over their canonical byte encoding, so two
//! values share a hash exactly when they are structurally equal under the
//! canonical value model. Documents are hashed over raw UTF-8 text instead;
//! their identity is the extracted text itself, not a JSON rendering of it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use sha2::Digest;
use sha2::Sha256;

use crate::core::canonical::CanonicalValue;
use crate::core::canonical::CanonicalizeError;
use crate::core::canonical::canonicalize;

// ============================================================================
// SECTION: Content Hash
// ============================================================================

/// Content hash represented as 64 lowercase hex characters (SHA-256).
///
/// Equality of two hashes is the system-wide proxy for content equality of
/// the hashed values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    /// Wraps an externally supplied hash string.
    ///
    /// No validation is performed; a malformed value simply never compares
    /// equal to a computed hash.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Creates a hash from raw digest bytes.
    #[must_use]
    pub fn from_digest(bytes: &[u8]) -> Self {
        Self(hex_encode(bytes))
    }

    /// Returns the hash as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// SECTION: Hashing Functions
// ============================================================================

/// Computes the content hash of a structured value via canonical bytes.
///
/// # Errors
///
/// Returns [`CanonicalizeError::UnsupportedType`] when the value cannot be
/// canonicalized.
pub fn content_hash(value: &CanonicalValue) -> Result<ContentHash, CanonicalizeError> {
    let bytes = canonicalize(value)?;
    Ok(hash_bytes(&bytes))
}

/// Computes the content hash of raw document text over its UTF-8 bytes.
#[must_use]
pub fn content_hash_of_text(text: &str) -> ContentHash {
    hash_bytes(text.as_bytes())
}

/// Hashes raw bytes with SHA-256.
fn hash_bytes(bytes: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    ContentHash::from_digest(&digest)
}

// ============================================================================
// SECTION: Hex Encoding
// ============================================================================

/// Encodes bytes as a lowercase hex string.
fn hex_encode(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(HEX[(byte >> 4) as usize] as char);
        out.push(HEX[(byte & 0x0f) as usize] as char);
    }
    out
}
