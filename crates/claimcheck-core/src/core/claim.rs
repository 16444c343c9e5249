// crates/claimcheck-core/src/core/claim.rs
// ============================================================================
// Module: Claimcheck Claim Model
// Description: Model-generated claim records, cited spans, and provenance scores.
// Purpose: Define the untrusted claim shape consumed read-only by validation.
// Dependencies: crate::core::hashing, serde
// ============================================================================

//! ## Overview
//! Claim records arrive from an external model-execution step and are never
//! mutated by the core. The types here define the structural schema; the
//! semantic invariants (ranges, tolerances, span offsets, hash binding) are
//! enforced by the runtime validator.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::hashing::ContentHash;

// ============================================================================
// SECTION: Verdict
// ============================================================================

/// Claim verdict reported by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Claim is supported by the document.
    Match,
    /// Claim is partially supported.
    WeakMatch,
    /// Claim is not supported.
    NoMatch,
}

// ============================================================================
// SECTION: Cited Spans
// ============================================================================

/// Cited substring of a canonical document with integrity metadata.
///
/// Offsets are codepoint indices into the canonical text, not byte offsets.
/// `start` is inclusive and `end` exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Exact substring claimed from the canonical text.
    pub text: String,
    /// Start offset in codepoints (inclusive).
    pub start: usize,
    /// End offset in codepoints (exclusive).
    pub end: usize,
    /// Hash of the canonical text this span cites.
    pub drhash: ContentHash,
    /// Whether the span came from main document content.
    pub main_content_match: bool,
    /// Optional surrounding context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Optional source URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

// ============================================================================
// SECTION: Provenance Scores
// ============================================================================

/// Supporting source with an authority weighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportingSource {
    /// Source URL.
    pub url: String,
    /// Authority score for the source.
    pub authority_score: f64,
}

/// Decomposed provenance confidence components.
///
/// `final_score` (serialized as `final`) is the authoritative composite; the
/// record-level `confidence` must agree with it within the validator's
/// tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceBreakdown {
    /// Base match score.
    pub match_base: f64,
    /// Bonus for spans found in main content.
    pub main_content_bonus: f64,
    /// Bonus for corroboration across sources.
    pub multisource_bonus: f64,
    /// Boost from source authority.
    pub authority_boost: f64,
    /// Signed integrity adjustment.
    pub integrity_adjust: f64,
    /// Final composed score.
    #[serde(rename = "final")]
    pub final_score: f64,
}

// ============================================================================
// SECTION: Claim Record
// ============================================================================

/// Untrusted, model-generated claim about a canonical document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRecord {
    /// Claim verdict.
    pub verdict: Verdict,
    /// Cited spans supporting the verdict.
    pub spans: Vec<Span>,
    /// Provenance score breakdown.
    pub provenance: ProvenanceBreakdown,
    /// Top-level confidence; must agree with `provenance.final`.
    pub confidence: f64,
    /// Hash of the canonical document the claim is about.
    pub document_ref: ContentHash,
    /// Names of checks the producer performed.
    pub checks_performed: Vec<String>,
    /// Internal step trace buckets.
    pub trace: Vec<i64>,
    /// Sigma score in `0..=12`.
    pub sigma: u8,
    /// Optional corroborating sources.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub supporting_sources: Vec<SupportingSource>,
}
