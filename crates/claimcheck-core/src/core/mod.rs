// crates/claimcheck-core/src/core/mod.rs
// ============================================================================
// Module: Claimcheck Core Types
// Description: Canonical value model, hashing, documents, claims, decisions.
// Purpose: Provide stable, serializable types shared by all runtime checks.
// Dependencies: serde, serde_json, sha2
// ============================================================================

//! ## Overview
//! Core types are pure data plus pure derivations: canonical serialization,
//! content hashing, and decision identity. All runtime behavior (validation,
//! consensus, composition) builds on these without adding state.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod canonical;
pub mod claim;
pub mod decision;
pub mod document;
pub mod hashing;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use canonical::CanonicalNumber;
pub use canonical::CanonicalValue;
pub use canonical::CanonicalizeError;
pub use canonical::canonical_json;
pub use canonical::canonicalize;
pub use claim::ClaimRecord;
pub use claim::ProvenanceBreakdown;
pub use claim::Span;
pub use claim::SupportingSource;
pub use claim::Verdict;
pub use decision::DecisionRecord;
pub use decision::DecisionStatus;
pub use decision::RecordId;
pub use decision::compose_record_id;
pub use document::CanonicalDocument;
pub use hashing::ContentHash;
pub use hashing::content_hash;
pub use hashing::content_hash_of_text;
