// crates/claimcheck-core/tests/claim_validation.rs
// ============================================================================
// Module: Claim Validation Tests
// Description: Tests for the strict claim validator.
// ============================================================================
//! ## Overview
//! Validates the structural gate, confidence tolerance, component range
//! bounds, document hash binding, and per-span failure reporting.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use claimcheck_core::ClaimRecord;
use claimcheck_core::ProvenanceBreakdown;
use claimcheck_core::Span;
use claimcheck_core::SpanError;
use claimcheck_core::ValidationError;
use claimcheck_core::Verdict;
use claimcheck_core::content_hash_of_text;
use claimcheck_core::validate_claim;
use claimcheck_core::validate_claim_json;
use serde_json::json;

/// Canonical text fixture shared across tests.
const TEXT: &str = "This is a test document.";

/// Builds a valid claim over the shared fixture.
fn base_claim() -> ClaimRecord {
    ClaimRecord {
        verdict: Verdict::Match,
        spans: vec![Span {
            text: "test".to_string(),
            start: 10,
            end: 14,
            drhash: content_hash_of_text(TEXT),
            main_content_match: true,
            context: None,
            source_url: None,
        }],
        provenance: ProvenanceBreakdown {
            match_base: 0.8,
            main_content_bonus: 0.05,
            multisource_bonus: 0.0,
            authority_boost: 0.05,
            integrity_adjust: 0.0,
            final_score: 0.9,
        },
        confidence: 0.9,
        document_ref: content_hash_of_text(TEXT),
        checks_performed: vec!["span_offsets".to_string()],
        trace: vec![1, 2, 3],
        sigma: 7,
        supporting_sources: Vec::new(),
    }
}

// ============================================================================
// SECTION: Valid Claims
// ============================================================================

/// Tests a consistent claim validates.
#[test]
fn test_valid_claim() {
    assert_eq!(validate_claim(&base_claim(), TEXT), Ok(()));
}

/// Tests a claim with no spans validates.
#[test]
fn test_claim_without_spans_valid() {
    let mut claim = base_claim();
    claim.spans.clear();
    assert_eq!(validate_claim(&claim, TEXT), Ok(()));
}

// ============================================================================
// SECTION: Confidence Tolerance
// ============================================================================

/// Tests exact agreement between confidence and the final score.
#[test]
fn test_confidence_matches_final() {
    let mut claim = base_claim();
    claim.confidence = 0.900;
    claim.provenance.final_score = 0.900;
    assert_eq!(validate_claim(&claim, TEXT), Ok(()));
}

/// Tests a genuinely different confidence is rejected.
#[test]
fn test_confidence_mismatch_rejected() {
    let mut claim = base_claim();
    claim.confidence = 0.500;
    claim.provenance.final_score = 0.100;
    let result = validate_claim(&claim, TEXT);
    assert!(matches!(result, Err(ValidationError::ProvenanceMismatch { .. })));
}

/// Tests rounding noise within the tolerance is accepted.
#[test]
fn test_confidence_within_tolerance() {
    let mut claim = base_claim();
    claim.confidence = 0.9005;
    claim.provenance.final_score = 0.899;
    assert_eq!(validate_claim(&claim, TEXT), Ok(()));
}

// ============================================================================
// SECTION: Range Bounds
// ============================================================================

/// Tests the final score cap is inclusive.
#[test]
fn test_final_score_cap_inclusive() {
    let mut claim = base_claim();
    claim.confidence = 0.995;
    claim.provenance.final_score = 0.995;
    assert_eq!(validate_claim(&claim, TEXT), Ok(()));
}

/// Tests a final score past the cap is rejected as out of range.
#[test]
fn test_final_score_past_cap_rejected() {
    let mut claim = base_claim();
    claim.confidence = 0.995;
    claim.provenance.final_score = 0.996;
    let result = validate_claim(&claim, TEXT);
    assert_eq!(
        result,
        Err(ValidationError::ProvenanceOutOfRange {
            field: "final",
            value: 0.996
        })
    );
}

/// Tests both integrity adjustment boundaries are valid.
#[test]
fn test_integrity_adjust_boundaries() {
    for boundary in [-1.0, 1.0] {
        let mut claim = base_claim();
        claim.provenance.integrity_adjust = boundary;
        assert_eq!(validate_claim(&claim, TEXT), Ok(()));
    }
}

/// Tests component scores share the confidence cap.
#[test]
fn test_component_past_cap_rejected() {
    let mut claim = base_claim();
    claim.provenance.match_base = 0.996;
    let result = validate_claim(&claim, TEXT);
    assert_eq!(
        result,
        Err(ValidationError::ProvenanceOutOfRange {
            field: "match_base",
            value: 0.996
        })
    );
}

/// Tests a negative component is rejected.
#[test]
fn test_negative_component_rejected() {
    let mut claim = base_claim();
    claim.provenance.authority_boost = -0.1;
    let result = validate_claim(&claim, TEXT);
    assert!(matches!(
        result,
        Err(ValidationError::ProvenanceOutOfRange { field: "authority_boost", .. })
    ));
}

// ============================================================================
// SECTION: Document Hash Binding
// ============================================================================

/// Tests a claim about a different document is rejected.
#[test]
fn test_document_ref_mismatch() {
    let mut claim = base_claim();
    claim.document_ref = content_hash_of_text("some other document");
    let result = validate_claim(&claim, TEXT);
    assert!(matches!(result, Err(ValidationError::DrhashMismatch { .. })));
}

// ============================================================================
// SECTION: Span Reporting
// ============================================================================

/// Tests the failing span index is carried in the error.
#[test]
fn test_failing_span_index_reported() {
    let mut claim = base_claim();
    claim.spans.push(Span {
        text: "bogus".to_string(),
        start: 0,
        end: 5,
        drhash: content_hash_of_text(TEXT),
        main_content_match: false,
        context: None,
        source_url: None,
    });
    let result = validate_claim(&claim, TEXT);
    assert!(matches!(
        result,
        Err(ValidationError::Span {
            index: 1,
            source: SpanError::TextMismatch { .. }
        })
    ));
}

// ============================================================================
// SECTION: Structural Gate
// ============================================================================

/// Builds a valid claim as untrusted JSON.
fn base_claim_json() -> serde_json::Value {
    let hash = content_hash_of_text(TEXT);
    json!({
        "verdict": "match",
        "spans": [{
            "text": "test",
            "start": 10,
            "end": 14,
            "drhash": hash.as_str(),
            "main_content_match": true
        }],
        "provenance": {
            "match_base": 0.8,
            "main_content_bonus": 0.05,
            "multisource_bonus": 0.0,
            "authority_boost": 0.05,
            "integrity_adjust": 0.0,
            "final": 0.9
        },
        "confidence": 0.9,
        "document_ref": hash.as_str(),
        "checks_performed": ["span_offsets"],
        "trace": [1, 2, 3],
        "sigma": 7
    })
}

/// Tests well-formed JSON passes the structural gate and validates.
#[test]
fn test_untrusted_json_validates() {
    let record = validate_claim_json(&base_claim_json(), TEXT).unwrap();
    assert_eq!(record.verdict, Verdict::Match);
    assert_eq!(record.sigma, 7);
}

/// Tests a missing required field fails the structural gate.
#[test]
fn test_missing_field_is_schema_violation() {
    let mut value = base_claim_json();
    value.as_object_mut().unwrap().remove("confidence");
    let result = validate_claim_json(&value, TEXT);
    assert!(matches!(result, Err(ValidationError::SchemaViolation(_))));
}

/// Tests a negative span offset fails the structural gate.
#[test]
fn test_negative_offset_is_schema_violation() {
    let mut value = base_claim_json();
    value["spans"][0]["start"] = json!(-1);
    let result = validate_claim_json(&value, TEXT);
    assert!(matches!(result, Err(ValidationError::SchemaViolation(_))));
}

/// Tests an unknown verdict string fails the structural gate.
#[test]
fn test_unknown_verdict_is_schema_violation() {
    let mut value = base_claim_json();
    value["verdict"] = json!("definitely");
    let result = validate_claim_json(&value, TEXT);
    assert!(matches!(result, Err(ValidationError::SchemaViolation(_))));
}

/// Tests the structural gate short-circuits semantic checks.
#[test]
fn test_structural_gate_short_circuits() {
    let mut value = base_claim_json();
    value.as_object_mut().unwrap().remove("spans");
    value["confidence"] = json!(5.0);
    let result = validate_claim_json(&value, TEXT);
    assert!(matches!(result, Err(ValidationError::SchemaViolation(_))));
}

/// Tests a sigma value past its bound is a schema violation.
#[test]
fn test_sigma_bound() {
    let mut claim = base_claim();
    claim.sigma = 13;
    let result = validate_claim(&claim, TEXT);
    assert!(matches!(result, Err(ValidationError::SchemaViolation(_))));
}

// ============================================================================
// SECTION: Reason Codes
// ============================================================================

/// Tests claim errors expose stable machine-parseable codes.
#[test]
fn test_validation_error_codes() {
    let mut mismatch = base_claim();
    mismatch.confidence = 0.5;
    mismatch.provenance.final_score = 0.1;
    assert_eq!(validate_claim(&mismatch, TEXT).unwrap_err().code(), "provenance_mismatch");

    let mut out_of_range = base_claim();
    out_of_range.provenance.match_base = 2.0;
    assert_eq!(validate_claim(&out_of_range, TEXT).unwrap_err().code(), "provenance_out_of_range");

    let mut stale = base_claim();
    stale.document_ref = content_hash_of_text("other");
    assert_eq!(validate_claim(&stale, TEXT).unwrap_err().code(), "drhash_mismatch");

    let mut bad_span = base_claim();
    bad_span.spans[0].end = 999;
    assert_eq!(validate_claim(&bad_span, TEXT).unwrap_err().code(), "span_out_of_bounds");
}
