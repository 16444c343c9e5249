// crates/claimcheck-core/src/runtime/store.rs
// ============================================================================
// Module: Claimcheck In-Memory Store
// Description: Simple in-memory decision record store for tests and local use.
// Purpose: Provide a deterministic store implementation without external deps.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! This module provides a simple in-memory implementation of
//! [`DecisionStore`] for tests and local demos. It is not intended for
//! production use.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;

use crate::core::DecisionRecord;
use crate::core::DecisionStatus;
use crate::core::RecordId;
use crate::interfaces::DecisionStore;
use crate::interfaces::StoreError;

// ============================================================================
// SECTION: In-Memory Store
// ============================================================================

/// In-memory decision record store for tests and examples.
#[derive(Debug, Default, Clone)]
pub struct InMemoryDecisionStore {
    /// Record map protected by a mutex, keyed by record identifier.
    records: Arc<Mutex<BTreeMap<String, DecisionRecord>>>,
}

impl InMemoryDecisionStore {
    /// Creates a new in-memory decision store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }
}

impl DecisionStore for InMemoryDecisionStore {
    fn insert(&self, record: &DecisionRecord) -> Result<(), StoreError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| StoreError::Store("decision store mutex poisoned".to_string()))?;
        let key = record.record_id.as_str().to_string();
        if guard.contains_key(&key) {
            return Err(StoreError::Conflict(key));
        }
        guard.insert(key, record.clone());
        Ok(())
    }

    fn get(&self, record_id: &RecordId) -> Result<Option<DecisionRecord>, StoreError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| StoreError::Store("decision store mutex poisoned".to_string()))?;
        Ok(guard.get(record_id.as_str()).cloned())
    }

    fn list_by_status(&self, status: DecisionStatus) -> Result<Vec<DecisionRecord>, StoreError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| StoreError::Store("decision store mutex poisoned".to_string()))?;
        Ok(guard.values().filter(|record| record.status == status).cloned().collect())
    }

    fn update(&self, record: &DecisionRecord) -> Result<(), StoreError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| StoreError::Store("decision store mutex poisoned".to_string()))?;
        let key = record.record_id.as_str().to_string();
        if !guard.contains_key(&key) {
            return Err(StoreError::NotFound(key));
        }
        guard.insert(key, record.clone());
        Ok(())
    }
}
