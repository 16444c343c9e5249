// crates/claimcheck-core/src/runtime/validator.rs
// ============================================================================
// Module: Claimcheck Strict Validation
// Description: Span and claim validation against canonical document text.
// Purpose: Decide deterministically whether a claim is faithful to a document.
// Dependencies: crate::core, serde_json
// ============================================================================

//! ## Overview
//! Validation is a single deterministic pass with no retries. Checks run in a
//! fixed order and short-circuit on the first failure, so the error surface is
//! small and reproducible. Span offsets are codepoint indices into the
//! canonical text; byte-indexed strings are converted explicitly. Every error
//! exposes a stable machine-parseable reason code via `code()` alongside the
//! human-readable detail.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use thiserror::Error;

use crate::core::ClaimRecord;
use crate::core::ContentHash;
use crate::core::Span;
use crate::core::content_hash_of_text;

// ============================================================================
// SECTION: Validation Constants
// ============================================================================

/// Tolerance between declared confidence and the composed final score,
/// applied after rounding both to 3 decimal places.
const PROVENANCE_TOLERANCE: f64 = 0.002;

/// Upper bound for confidence-like scores.
const SCORE_CAP: f64 = 0.995;

/// Maximum sigma value.
const SIGMA_MAX: u8 = 12;

// ============================================================================
// SECTION: Span Errors
// ============================================================================

/// Span validation errors, in check order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpanError {
    /// End offset precedes start offset.
    #[error("span range invalid: start={start}, end={end}")]
    InvalidRange {
        /// Claimed start offset.
        start: usize,
        /// Claimed end offset.
        end: usize,
    },
    /// Span extends past the end of the canonical text.
    #[error("span out of bounds: start={start}, end={end}, len={len}")]
    OutOfBounds {
        /// Claimed start offset.
        start: usize,
        /// Claimed end offset.
        end: usize,
        /// Codepoint length of the canonical text.
        len: usize,
    },
    /// Claimed text does not match the slice at the claimed offsets.
    #[error("span text mismatch: expected '{expected}', got '{actual}'")]
    TextMismatch {
        /// Text claimed by the span.
        expected: String,
        /// Text actually present at the claimed offsets.
        actual: String,
    },
    /// Span's document hash does not match the canonical text hash.
    #[error("span drhash mismatch: expected={expected}, got={actual}")]
    DrhashMismatch {
        /// Hash of the canonical text.
        expected: ContentHash,
        /// Hash carried by the span.
        actual: ContentHash,
    },
}

impl SpanError {
    /// Returns the stable machine-parseable reason code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidRange {
                ..
            } => "span_invalid_range",
            Self::OutOfBounds {
                ..
            } => "span_out_of_bounds",
            Self::TextMismatch {
                ..
            } => "span_text_mismatch",
            Self::DrhashMismatch {
                ..
            } => "span_drhash_mismatch",
        }
    }
}

// ============================================================================
// SECTION: Claim Errors
// ============================================================================

/// Claim validation errors, in check order.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Record failed the structural schema gate.
    #[error("schema violation: {0}")]
    SchemaViolation(String),
    /// Declared confidence disagrees with the composed final score.
    #[error("provenance mismatch: confidence={confidence}, final={final_score}")]
    ProvenanceMismatch {
        /// Declared confidence, rounded to 3 decimals.
        confidence: f64,
        /// Composed final score, rounded to 3 decimals.
        final_score: f64,
    },
    /// A provenance component or confidence value is outside its bounds.
    #[error("provenance out of range: {field}={value}")]
    ProvenanceOutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// Offending value.
        value: f64,
    },
    /// Record's document hash does not match the canonical text hash.
    #[error("drhash mismatch: expected={expected}, got={actual}")]
    DrhashMismatch {
        /// Hash of the canonical text.
        expected: ContentHash,
        /// Hash carried by the record.
        actual: ContentHash,
    },
    /// A cited span failed validation.
    #[error("span {index}: {source}")]
    Span {
        /// Zero-based index of the failing span.
        index: usize,
        /// Underlying span error.
        source: SpanError,
    },
}

impl ValidationError {
    /// Returns the stable machine-parseable reason code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::SchemaViolation(_) => "schema_violation",
            Self::ProvenanceMismatch {
                ..
            } => "provenance_mismatch",
            Self::ProvenanceOutOfRange {
                ..
            } => "provenance_out_of_range",
            Self::DrhashMismatch {
                ..
            } => "drhash_mismatch",
            Self::Span {
                source, ..
            } => source.code(),
        }
    }
}

// ============================================================================
// SECTION: Span Validation
// ============================================================================

/// Validates a cited span against canonical document text.
///
/// Checks run in order and short-circuit on the first failure: offset
/// ordering, bounds against the codepoint length, exact slice equality, and
/// the hash binding to the document.
///
/// # Errors
///
/// Returns the first failing [`SpanError`].
pub fn validate_span(span: &Span, canonical_text: &str) -> Result<(), SpanError> {
    if span.end < span.start {
        return Err(SpanError::InvalidRange {
            start: span.start,
            end: span.end,
        });
    }

    let len = canonical_text.chars().count();
    if span.end > len {
        return Err(SpanError::OutOfBounds {
            start: span.start,
            end: span.end,
            len,
        });
    }

    let out_of_bounds = || SpanError::OutOfBounds {
        start: span.start,
        end: span.end,
        len,
    };
    let start_byte = codepoint_to_byte(canonical_text, span.start).ok_or_else(out_of_bounds)?;
    let end_byte = codepoint_to_byte(canonical_text, span.end).ok_or_else(out_of_bounds)?;
    let actual = &canonical_text[start_byte..end_byte];
    if actual != span.text {
        return Err(SpanError::TextMismatch {
            expected: span.text.clone(),
            actual: actual.to_string(),
        });
    }

    let expected = content_hash_of_text(canonical_text);
    if span.drhash != expected {
        return Err(SpanError::DrhashMismatch {
            expected,
            actual: span.drhash.clone(),
        });
    }

    Ok(())
}

/// Converts a codepoint index into a byte offset, if in bounds.
fn codepoint_to_byte(text: &str, index: usize) -> Option<usize> {
    let mut seen = 0usize;
    for (byte_offset, _) in text.char_indices() {
        if seen == index {
            return Some(byte_offset);
        }
        seen += 1;
    }
    (seen == index).then_some(text.len())
}

// ============================================================================
// SECTION: Claim Validation
// ============================================================================

/// Validates a claim record against canonical document text.
///
/// Check order: structural residue the type system cannot express (sigma
/// bound), confidence/final tolerance, component ranges, document hash, then
/// each span in order. The first failure aborts the pass.
///
/// # Errors
///
/// Returns the first failing [`ValidationError`].
pub fn validate_claim(record: &ClaimRecord, canonical_text: &str) -> Result<(), ValidationError> {
    if record.sigma > SIGMA_MAX {
        return Err(ValidationError::SchemaViolation(format!(
            "sigma {} exceeds maximum {SIGMA_MAX}",
            record.sigma
        )));
    }

    let confidence = round3(record.confidence);
    let final_score = round3(record.provenance.final_score);
    if (confidence - final_score).abs() > PROVENANCE_TOLERANCE {
        return Err(ValidationError::ProvenanceMismatch {
            confidence,
            final_score,
        });
    }

    let breakdown = &record.provenance;
    check_range("confidence", record.confidence, 0.0, SCORE_CAP)?;
    check_range("match_base", breakdown.match_base, 0.0, SCORE_CAP)?;
    check_range("main_content_bonus", breakdown.main_content_bonus, 0.0, SCORE_CAP)?;
    check_range("integrity_adjust", breakdown.integrity_adjust, -1.0, 1.0)?;
    check_range("multisource_bonus", breakdown.multisource_bonus, 0.0, SCORE_CAP)?;
    check_range("authority_boost", breakdown.authority_boost, 0.0, SCORE_CAP)?;
    check_range("final", breakdown.final_score, 0.0, SCORE_CAP)?;

    let expected = content_hash_of_text(canonical_text);
    if record.document_ref != expected {
        return Err(ValidationError::DrhashMismatch {
            expected,
            actual: record.document_ref.clone(),
        });
    }

    for (index, span) in record.spans.iter().enumerate() {
        validate_span(span, canonical_text).map_err(|source| ValidationError::Span {
            index,
            source,
        })?;
    }

    Ok(())
}

/// Parses untrusted JSON through the structural gate, then validates.
///
/// Structural failures (missing fields, wrong types, negative offsets) are
/// reported as [`ValidationError::SchemaViolation`] and short-circuit every
/// semantic check.
///
/// # Errors
///
/// Returns the first failing [`ValidationError`].
pub fn validate_claim_json(
    value: &Value,
    canonical_text: &str,
) -> Result<ClaimRecord, ValidationError> {
    let record: ClaimRecord = serde_json::from_value(value.clone())
        .map_err(|err| ValidationError::SchemaViolation(err.to_string()))?;
    validate_claim(&record, canonical_text)?;
    Ok(record)
}

/// Rounds a score to 3 decimal places.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Checks a score against its documented closed interval.
fn check_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::ProvenanceOutOfRange {
            field,
            value,
        })
    }
}
