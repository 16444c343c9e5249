// crates/claimcheck-core/src/runtime/composer.rs
// ============================================================================
// Module: Claimcheck Decision Composer
// Description: Composition and review workflow for decision records.
// Purpose: Build decision records over an explicit store handle.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! The composer owns no record state of its own: every record it builds is
//! written through the [`DecisionStore`] handle supplied at construction.
//! Identity derivation stays in the pure core; this module only assembles
//! record content and drives review status transitions.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use thiserror::Error;

use crate::core::CanonicalValue;
use crate::core::CanonicalizeError;
use crate::core::DecisionRecord;
use crate::core::DecisionStatus;
use crate::core::RecordId;
use crate::core::compose_record_id;
use crate::core::content_hash;
use crate::interfaces::DecisionStore;
use crate::interfaces::StoreError;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while composing or reviewing decision records.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// Proposal content could not be canonicalized.
    #[error("failed to canonicalize proposal: {0}")]
    Canonicalize(#[from] CanonicalizeError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Review transition attempted on an already-resolved record.
    #[error("decision record already resolved: {0}")]
    AlreadyResolved(RecordId),
}

// ============================================================================
// SECTION: Decision Composer
// ============================================================================

/// Composes decision records and drives their review workflow.
#[derive(Debug, Clone)]
pub struct DecisionComposer<S> {
    /// Backing decision record store.
    store: S,
}

impl<S: DecisionStore> DecisionComposer<S> {
    /// Creates a composer over the given store handle.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self {
            store,
        }
    }

    /// Returns the backing store handle.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Composes a proposal to update the canonical specification.
    ///
    /// The proposal embeds the current canon's content hash so reviewers can
    /// detect stale proposals. The record starts in pending review.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError`] when canonicalization or the store insert
    /// fails.
    pub fn compose_canon_proposal(
        &self,
        current_canon: &CanonicalValue,
        proposed_change: CanonicalValue,
        rationale: impl Into<String>,
        author: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Result<DecisionRecord, ComposeError> {
        let canon_hash = content_hash(current_canon)?;
        let mut proposal = BTreeMap::new();
        proposal
            .insert("current_canon_hash".to_string(), CanonicalValue::Text(canon_hash.as_str().to_string()));
        proposal.insert("proposed_change".to_string(), proposed_change);
        proposal.insert("change_type".to_string(), CanonicalValue::Text("canon_update".to_string()));

        let record = self.build_record(
            "canon_proposal",
            CanonicalValue::Mapping(proposal),
            rationale.into(),
            author.into(),
            timestamp.into(),
            DecisionStatus::PendingReview,
        )?;
        self.store.insert(&record)?;
        Ok(record)
    }

    /// Composes an acceptance decision for a completed job result.
    ///
    /// The proposal embeds the result's content hash and the policy version
    /// applied. Acceptance records are stored already resolved.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError`] when canonicalization or the store insert
    /// fails.
    pub fn compose_acceptance(
        &self,
        job_id: &str,
        job_result: &CanonicalValue,
        policy_version: &str,
        rationale: impl Into<String>,
        author: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Result<DecisionRecord, ComposeError> {
        let result_hash = content_hash(job_result)?;
        let mut proposal = BTreeMap::new();
        proposal.insert("job_id".to_string(), CanonicalValue::Text(job_id.to_string()));
        proposal
            .insert("result_hash".to_string(), CanonicalValue::Text(result_hash.as_str().to_string()));
        proposal
            .insert("acceptance_status".to_string(), CanonicalValue::Text("accepted".to_string()));
        proposal
            .insert("policy_version".to_string(), CanonicalValue::Text(policy_version.to_string()));

        let record = self.build_record(
            "acceptance",
            CanonicalValue::Mapping(proposal),
            rationale.into(),
            author.into(),
            timestamp.into(),
            DecisionStatus::Approved,
        )?;
        self.store.insert(&record)?;
        Ok(record)
    }

    /// Lists records awaiting review.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::Store`] on backend failure.
    pub fn pending_reviews(&self) -> Result<Vec<DecisionRecord>, ComposeError> {
        Ok(self.store.list_by_status(DecisionStatus::PendingReview)?)
    }

    /// Approves a pending record.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::AlreadyResolved`] when the record is not
    /// pending, [`StoreError::NotFound`] when the identifier is unknown, or
    /// [`ComposeError::Store`] on backend failure.
    pub fn approve_review(
        &self,
        record_id: &RecordId,
        reviewer: impl Into<String>,
        review_time: impl Into<String>,
    ) -> Result<DecisionRecord, ComposeError> {
        self.resolve_review(record_id, DecisionStatus::Approved, reviewer.into(), None, review_time.into())
    }

    /// Rejects a pending record with a reason.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::AlreadyResolved`] when the record is not
    /// pending, [`StoreError::NotFound`] when the identifier is unknown, or
    /// [`ComposeError::Store`] on backend failure.
    pub fn reject_review(
        &self,
        record_id: &RecordId,
        reviewer: impl Into<String>,
        reason: impl Into<String>,
        review_time: impl Into<String>,
    ) -> Result<DecisionRecord, ComposeError> {
        self.resolve_review(
            record_id,
            DecisionStatus::Rejected,
            reviewer.into(),
            Some(reason.into()),
            review_time.into(),
        )
    }

    /// Builds a record with its content-derived identifier.
    fn build_record(
        &self,
        decision_type: &str,
        proposal: CanonicalValue,
        rationale: String,
        author: String,
        timestamp: String,
        status: DecisionStatus,
    ) -> Result<DecisionRecord, ComposeError> {
        let record_id = compose_record_id(decision_type, &proposal, &timestamp, &author)?;
        Ok(DecisionRecord {
            record_id,
            decision_type: decision_type.to_string(),
            timestamp,
            author,
            proposal,
            rationale,
            status,
            reviewer: None,
            review_note: None,
            review_time: None,
        })
    }

    /// Applies a review transition to a pending record.
    fn resolve_review(
        &self,
        record_id: &RecordId,
        status: DecisionStatus,
        reviewer: String,
        review_note: Option<String>,
        review_time: String,
    ) -> Result<DecisionRecord, ComposeError> {
        let Some(mut record) = self.store.get(record_id)? else {
            return Err(ComposeError::Store(StoreError::NotFound(record_id.to_string())));
        };
        if record.status != DecisionStatus::PendingReview {
            return Err(ComposeError::AlreadyResolved(record_id.clone()));
        }
        record.status = status;
        record.reviewer = Some(reviewer);
        record.review_note = review_note;
        record.review_time = Some(review_time);
        self.store.update(&record)?;
        Ok(record)
    }
}
