// crates/claimcheck-core/src/core/decision.rs
// ============================================================================
// Module: Claimcheck Decision Records
// Description: Auditable decision records with content-derived identifiers.
// Purpose: Provide stable decision identity and the canonical signing form.
// Dependencies: crate::core::{canonical, hashing}, serde
// ============================================================================

//! ## Overview
//! A decision record captures a reviewable action (canon proposal, acceptance)
//! with a stable identifier derived from its content hash. Identity derivation
//! is pure; storage and review workflow live behind the runtime composer and
//! its store handle. Timestamps are always caller-supplied; the core never
//! reads wall-clock time.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::core::canonical::CanonicalValue;
use crate::core::canonical::CanonicalizeError;
use crate::core::canonical::canonical_json;
use crate::core::hashing::ContentHash;
use crate::core::hashing::content_hash;

// ============================================================================
// SECTION: Record Identity
// ============================================================================

/// Number of leading hex characters retained for record identifiers.
const RECORD_ID_HEX_CHARS: usize = 16;

/// Stable identifier for a decision record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Creates a new record identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Derives the stable record identifier for a decision's identifying content.
///
/// The identifier is the first 16 hex characters of the content hash of
/// `{type, proposal, timestamp, author}`. Collisions are treated as
/// astronomically unlikely; there is no retry or re-derivation.
///
/// # Errors
///
/// Returns [`CanonicalizeError`] when the proposal cannot be canonicalized.
pub fn compose_record_id(
    decision_type: &str,
    proposal: &CanonicalValue,
    timestamp: &str,
    author: &str,
) -> Result<RecordId, CanonicalizeError> {
    let mut content = BTreeMap::new();
    content.insert("type".to_string(), CanonicalValue::Text(decision_type.to_string()));
    content.insert("proposal".to_string(), proposal.clone());
    content.insert("timestamp".to_string(), CanonicalValue::Text(timestamp.to_string()));
    content.insert("author".to_string(), CanonicalValue::Text(author.to_string()));
    let hash = content_hash(&CanonicalValue::Mapping(content))?;
    let id: String = hash.as_str().chars().take(RECORD_ID_HEX_CHARS).collect();
    Ok(RecordId::new(id))
}

// ============================================================================
// SECTION: Review Status
// ============================================================================

/// Review state of a stored decision record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    /// Awaiting reviewer action.
    PendingReview,
    /// Approved by a reviewer.
    Approved,
    /// Rejected by a reviewer.
    Rejected,
}

// ============================================================================
// SECTION: Decision Record
// ============================================================================

/// Auditable decision record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// Content-derived record identifier.
    pub record_id: RecordId,
    /// Decision type tag (`canon_proposal`, `acceptance`, ...).
    pub decision_type: String,
    /// Caller-supplied ISO-8601 timestamp.
    pub timestamp: String,
    /// Decision author or authority.
    pub author: String,
    /// Proposed change or decision payload.
    pub proposal: CanonicalValue,
    /// Free-form justification for the decision.
    pub rationale: String,
    /// Current review status.
    pub status: DecisionStatus,
    /// Reviewer who resolved the record, once reviewed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewer: Option<String>,
    /// Reviewer note; carries the rejection reason for rejected records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_note: Option<String>,
    /// Caller-supplied review timestamp, once reviewed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_time: Option<String>,
}

impl DecisionRecord {
    /// Returns the canonical JSON form of the record.
    ///
    /// Signing helpers must sign exactly these bytes; re-serializing through
    /// any other encoder would change the hash.
    ///
    /// # Errors
    ///
    /// Returns [`CanonicalizeError`] when the record cannot be canonicalized.
    pub fn canonical_json(&self) -> Result<String, CanonicalizeError> {
        let value = serde_json::to_value(self)
            .map_err(|err| CanonicalizeError::UnsupportedType(err.to_string()))?;
        canonical_json(&CanonicalValue::from(value))
    }

    /// Computes the content hash of the record's canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`CanonicalizeError`] when the record cannot be canonicalized.
    pub fn canonical_hash(&self) -> Result<ContentHash, CanonicalizeError> {
        let value = serde_json::to_value(self)
            .map_err(|err| CanonicalizeError::UnsupportedType(err.to_string()))?;
        content_hash(&CanonicalValue::from(value))
    }
}
