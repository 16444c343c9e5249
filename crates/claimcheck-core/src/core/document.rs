// crates/claimcheck-core/src/core/document.rs
// ============================================================================
// Module: Claimcheck Canonical Document
// Description: Extracted document text bound to its content hash.
// Purpose: Provide the immutable reference text that claims cite against.
// Dependencies: crate::core::hashing, serde
// ============================================================================

//! ## Overview
//! A canonical document pairs extracted text with the hash of that text.
//! Text extraction itself happens upstream; the core only requires that the
//! text is final when the document is constructed. Documents are immutable
//! for the lifetime of the run that produced them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::hashing::ContentHash;
use crate::core::hashing::content_hash_of_text;

// ============================================================================
// SECTION: Canonical Document
// ============================================================================

/// Number of leading codepoints exposed as the reviewer-facing sample.
const SAMPLE_CODEPOINTS: usize = 200;

/// Canonical document text with its content-addressable identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalDocument {
    /// Extracted, cleaned document text.
    text: String,
    /// SHA-256 hash of the text bytes.
    drhash: ContentHash,
}

impl CanonicalDocument {
    /// Creates a document from extracted text, computing its hash.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let drhash = content_hash_of_text(&text);
        Self {
            text,
            drhash,
        }
    }

    /// Returns the canonical text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the content hash of the canonical text.
    #[must_use]
    pub const fn drhash(&self) -> &ContentHash {
        &self.drhash
    }

    /// Returns the leading sample of the text (first 200 codepoints).
    #[must_use]
    pub fn sample(&self) -> &str {
        match self.text.char_indices().nth(SAMPLE_CODEPOINTS) {
            Some((byte_offset, _)) => &self.text[..byte_offset],
            None => &self.text,
        }
    }
}
