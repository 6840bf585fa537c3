//! Bounded in-memory history of recent analyses.
//!
//! Appending and trimming happen under one lock, so concurrent handlers can
//! never push the buffer past [`HISTORY_CAPACITY`] or lose a record to a
//! racing eviction.

use chrono::{DateTime, Utc};
use cyclesense_advisor::{Analysis, UserObservation};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

/// Maximum number of records kept.
pub const HISTORY_CAPACITY: usize = 20;

/// Number of records the history endpoint returns.
pub const HISTORY_PAGE_SIZE: usize = 10;

const ANALYSIS_ID_LEN: usize = 8;

// ============================================================================
// AnalysisId
// ============================================================================

/// Short random token identifying a stored analysis.
///
/// The first eight hex digits of a UUID v4.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisId(String);

impl AnalysisId {
    /// Creates a new random ID.
    pub fn new() -> Self {
        let mut token = Uuid::new_v4().simple().to_string();
        token.truncate(ANALYSIS_ID_LEN);
        Self(token)
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AnalysisId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AnalysisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// AnalysisRecord
// ============================================================================

/// One stored analysis with the input it was computed from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    /// Record ID.
    pub id: AnalysisId,
    /// The observation as received.
    pub user_data: UserObservation,
    /// The analysis result.
    pub analysis: Analysis,
    /// When the analysis completed.
    pub timestamp: DateTime<Utc>,
}

impl AnalysisRecord {
    /// Stamps a new record with a fresh ID and the current time.
    pub fn new(user_data: UserObservation, analysis: Analysis) -> Self {
        Self {
            id: AnalysisId::new(),
            user_data,
            analysis,
            timestamp: Utc::now(),
        }
    }
}

// ============================================================================
// AnalysisHistory
// ============================================================================

/// FIFO buffer of the most recent [`HISTORY_CAPACITY`] records.
#[derive(Debug, Default)]
pub struct AnalysisHistory {
    records: Mutex<VecDeque<AnalysisRecord>>,
}

impl AnalysisHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self {
            records: Mutex::new(VecDeque::with_capacity(HISTORY_CAPACITY)),
        }
    }

    // Every critical section leaves the deque consistent; poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, VecDeque<AnalysisRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends a record, evicting and returning the oldest one when full.
    pub fn push(&self, record: AnalysisRecord) -> Option<AnalysisRecord> {
        let mut records = self.lock();
        records.push_back(record);
        if records.len() > HISTORY_CAPACITY {
            records.pop_front()
        } else {
            None
        }
    }

    /// The last `n` records, oldest first.
    pub fn recent(&self, n: usize) -> Vec<AnalysisRecord> {
        let records = self.lock();
        let skip = records.len().saturating_sub(n);
        records.iter().skip(skip).cloned().collect()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cyclesense_advisor::Advisor;
    use proptest::prelude::*;
    use std::sync::Arc;

    fn record(pain_level: i64) -> AnalysisRecord {
        let obs = UserObservation::new("luteal", pain_level);
        let analysis = Advisor::load().analyze(&obs).unwrap();
        AnalysisRecord::new(obs, analysis)
    }

    #[test]
    fn test_analysis_id_shape() {
        let id = AnalysisId::new();
        assert_eq!(id.as_str().len(), 8);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(AnalysisId::new(), AnalysisId::new());
    }

    #[test]
    fn test_analysis_id_serializes_as_string() {
        let id = AnalysisId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }

    #[test]
    fn test_push_below_capacity() {
        let history = AnalysisHistory::new();
        assert!(history.is_empty());
        assert!(history.push(record(1)).is_none());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_evicts_oldest_first() {
        let history = AnalysisHistory::new();
        let first = record(0);
        let first_id = first.id.clone();
        history.push(first);
        for pain in 1..HISTORY_CAPACITY as i64 {
            assert!(history.push(record(pain)).is_none());
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);

        let evicted = history.push(record(99)).unwrap();
        assert_eq!(evicted.id, first_id);
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.recent(1)[0].user_data.pain_level, 99);
    }

    #[test]
    fn test_recent_returns_tail_oldest_first() {
        let history = AnalysisHistory::new();
        for pain in 0..15 {
            history.push(record(pain));
        }
        let recent = history.recent(HISTORY_PAGE_SIZE);
        let pains: Vec<i64> = recent.iter().map(|r| r.user_data.pain_level).collect();
        assert_eq!(pains, (5..15).collect::<Vec<_>>());

        assert_eq!(history.recent(100).len(), 15);
    }

    #[test]
    fn test_concurrent_pushes_respect_capacity() {
        let history = Arc::new(AnalysisHistory::new());
        let template = record(3);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let history = Arc::clone(&history);
                let template = template.clone();
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        history.push(template.clone());
                        assert!(history.len() <= HISTORY_CAPACITY);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
    }

    proptest! {
        #[test]
        fn test_never_exceeds_capacity(pushes in 0usize..60) {
            let history = AnalysisHistory::new();
            let template = record(5);
            for _ in 0..pushes {
                history.push(template.clone());
                prop_assert!(history.len() <= HISTORY_CAPACITY);
            }
            prop_assert_eq!(history.len(), pushes.min(HISTORY_CAPACITY));
        }
    }
}
