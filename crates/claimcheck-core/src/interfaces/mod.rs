// crates/claimcheck-core/src/interfaces/mod.rs
// ============================================================================
// Module: Claimcheck Interfaces
// Description: Backend-agnostic storage contract for decision records.
// Purpose: Keep the core free of I/O while letting hosts plug in persistence.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The core never reads from or writes to any store directly. Hosts provide a
//! [`DecisionStore`] implementation; the runtime composer drives it through
//! this trait. Implementations must be deterministic and report failures
//! rather than swallowing them.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::DecisionRecord;
use crate::core::DecisionStatus;
use crate::core::RecordId;

// ============================================================================
// SECTION: Store Errors
// ============================================================================

/// Decision store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend storage failure.
    #[error("store error: {0}")]
    Store(String),
    /// Record identifier already present.
    #[error("decision record already exists: {0}")]
    Conflict(String),
    /// Record identifier not present.
    #[error("decision record not found: {0}")]
    NotFound(String),
}

// ============================================================================
// SECTION: Decision Store
// ============================================================================

/// Keyed storage for decision records.
pub trait DecisionStore {
    /// Inserts a new record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Conflict`] when the record identifier is already
    /// present, or [`StoreError::Store`] on backend failure.
    fn insert(&self, record: &DecisionRecord) -> Result<(), StoreError>;

    /// Loads a record by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Store`] on backend failure.
    fn get(&self, record_id: &RecordId) -> Result<Option<DecisionRecord>, StoreError>;

    /// Lists records with the given status, ordered by record identifier.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Store`] on backend failure.
    fn list_by_status(&self, status: DecisionStatus) -> Result<Vec<DecisionRecord>, StoreError>;

    /// Replaces an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when the record identifier is absent,
    /// or [`StoreError::Store`] on backend failure.
    fn update(&self, record: &DecisionRecord) -> Result<(), StoreError>;
}
