//! Calculation history ledger
//!
//! Append-only, chronological record of completed calculations. Only
//! Success, Overflow and Underflow results are stored; domain errors
//! represent invalid input rather than a completed calculation and are
//! returned to the caller without being recorded.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{CalcError, Result};
use crate::types::{CalculationRequest, CalculationResult};

/// One recorded calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    /// Sequence index, starting at 1
    pub index: u64,
    pub request: CalculationRequest,
    pub result: CalculationResult,
    pub recorded_at: DateTime<Utc>,
}

/// In-memory history ledger
///
/// `record` holds the write lock across index assignment and push, so
/// indices stay contiguous under concurrent callers. `list` clones under the
/// read lock and never observes a half-finished append.
#[derive(Debug, Default)]
pub struct HistoryLedger {
    entries: RwLock<Vec<HistoryEntry>>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed calculation
    ///
    /// # Returns
    /// * `Some(index)` - Sequence index of the new entry
    /// * `None` - Result was a domain error and was not recorded
    pub fn record(&self, request: CalculationRequest, result: CalculationResult) -> Option<u64> {
        if !result.status().is_recordable() {
            return None;
        }

        let mut entries = self.entries.write();
        let index = entries.len() as u64 + 1;
        entries.push(HistoryEntry {
            index,
            request,
            result,
            recorded_at: Utc::now(),
        });

        debug!(index = index, status = %result.status(), "History entry recorded");
        Some(index)
    }

    /// Snapshot of all entries in chronological order
    pub fn list(&self) -> Vec<HistoryEntry> {
        self.entries.read().clone()
    }

    /// Clear all entries; numbering restarts at 1
    pub fn reset(&self) {
        let mut entries = self.entries.write();
        let cleared = entries.len();
        entries.clear();
        info!(cleared = cleared, "History reset");
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Most recent entry
    pub fn last(&self) -> Option<HistoryEntry> {
        self.entries.read().last().cloned()
    }

    /// Serialize a snapshot as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        let snapshot = self.list();
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| CalcError::serialization(format!("Failed to serialize history: {}", e)))
    }
}
