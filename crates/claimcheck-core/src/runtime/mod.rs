// crates/claimcheck-core/src/runtime/mod.rs
// ============================================================================
// Module: Claimcheck Runtime
// Description: Validation, consensus, and decision composition over core types.
// Purpose: Execute the deterministic checks that gate untrusted claims.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Runtime modules are pure and synchronous: validation and consensus take
//! immutable inputs and produce new outputs with no shared mutable state. The
//! composer is the one stateful seam, and its state lives entirely behind the
//! store handle its host supplies.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod composer;
pub mod consensus;
pub mod store;
pub mod validator;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use composer::ComposeError;
pub use composer::DecisionComposer;
pub use consensus::ConsensusResult;
pub use consensus::Discrepancy;
pub use consensus::ExecutionOutput;
pub use consensus::compare_executions;
pub use store::InMemoryDecisionStore;
pub use validator::SpanError;
pub use validator::ValidationError;
pub use validator::validate_claim;
pub use validator::validate_claim_json;
pub use validator::validate_span;
