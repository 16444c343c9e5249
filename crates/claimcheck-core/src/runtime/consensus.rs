// crates/claimcheck-core/src/runtime/consensus.rs
// ============================================================================
// Module: Claimcheck Consensus Comparator
// Description: Agreement detection across independent execution outputs.
// Purpose: Decide unanimity via content hashes and report full disagreements.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Consensus requires unanimity among all successfully-hashed executions;
//! there is no majority vote. Executions whose outputs cannot be hashed are
//! non-participants: they are reported per-index but neither confirm nor
//! break agreement. On divergence every hashed execution is recorded, not
//! just the outliers, so a reviewer can inspect the full disagreement set.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::CanonicalValue;
use crate::core::ContentHash;
use crate::core::content_hash;

// ============================================================================
// SECTION: Execution Outputs
// ============================================================================

/// Output payload of one independent execution of a logical job.
///
/// The payload is opaque to consensus; only its content hash participates in
/// the comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionOutput {
    /// JSON-like output payload.
    pub outputs: CanonicalValue,
}

impl From<CanonicalValue> for ExecutionOutput {
    fn from(outputs: CanonicalValue) -> Self {
        Self {
            outputs,
        }
    }
}

// ============================================================================
// SECTION: Consensus Results
// ============================================================================

/// Per-execution discrepancy entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discrepancy {
    /// Original index of the execution.
    pub index: usize,
    /// Content hash of the output, when hashing succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<ContentHash>,
    /// Raw output payload, when hashing succeeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<CanonicalValue>,
    /// Hashing failure detail, when hashing failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of comparing independent execution outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusResult {
    /// Whether the successfully-hashed executions agree unanimously.
    pub agreed: bool,
    /// Agreed output payload, when agreement was reached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_output: Option<CanonicalValue>,
    /// Per-execution discrepancy entries, in original index order with
    /// hashing failures listed first.
    pub discrepancies: Vec<Discrepancy>,
}

// ============================================================================
// SECTION: Comparison
// ============================================================================

/// Compares independent execution outputs for consensus.
///
/// Zero executions yield `agreed = false` with no discrepancies (nothing to
/// agree on, which is distinct from disagreement). A single execution is
/// trivially agreed without hashing. For two or more, agreement holds iff the
/// set of successfully-hashed outputs is non-empty and unanimous.
#[must_use]
pub fn compare_executions(executions: &[ExecutionOutput]) -> ConsensusResult {
    if executions.is_empty() {
        return ConsensusResult {
            agreed: false,
            canonical_output: None,
            discrepancies: Vec::new(),
        };
    }

    if let [only] = executions {
        return ConsensusResult {
            agreed: true,
            canonical_output: Some(only.outputs.clone()),
            discrepancies: Vec::new(),
        };
    }

    let mut failures = Vec::new();
    let mut hashed: Vec<(usize, ContentHash)> = Vec::new();
    for (index, execution) in executions.iter().enumerate() {
        match content_hash(&execution.outputs) {
            Ok(hash) => hashed.push((index, hash)),
            Err(err) => failures.push(Discrepancy {
                index,
                hash: None,
                detail: None,
                error: Some(err.to_string()),
            }),
        }
    }

    if let Some((first_index, first_hash)) = hashed.first()
        && hashed.iter().all(|(_, hash)| hash == first_hash)
    {
        return ConsensusResult {
            agreed: true,
            canonical_output: executions.get(*first_index).map(|exec| exec.outputs.clone()),
            discrepancies: failures,
        };
    }

    let mut discrepancies = failures;
    for (index, hash) in hashed {
        discrepancies.push(Discrepancy {
            index,
            hash: Some(hash),
            detail: executions.get(index).map(|exec| exec.outputs.clone()),
            error: None,
        });
    }

    ConsensusResult {
        agreed: false,
        canonical_output: None,
        discrepancies,
    }
}
