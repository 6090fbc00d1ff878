//! Transition log for vending machines.
//!
//! Provides immutable tracking of the transitions a machine takes over time.
//! The log is diagnostics only; it never leaves memory.

use super::state::{Operation, VendingState};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single state transition.
///
/// Records are immutable values: a move from one state to another, caused by
/// a named operation, at a specific point in time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state being transitioned from
    pub from: VendingState,
    /// The state being transitioned to
    pub to: VendingState,
    /// The operation that caused the transition
    pub operation: Operation,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of a machine's transitions.
///
/// The log is immutable: [`record`](TransitionLog::record) returns a new
/// log with the transition appended, leaving the original unchanged.
///
/// # Example
///
/// ```rust
/// use vendo::{Operation, TransitionLog, TransitionRecord, VendingState};
/// use chrono::Utc;
///
/// let log = TransitionLog::new();
/// let log = log.record(TransitionRecord {
///     from: VendingState::NoItem,
///     to: VendingState::HasItem,
///     operation: Operation::AddItem,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.len(), 1);
/// assert_eq!(
///     log.path(),
///     vec![VendingState::NoItem, VendingState::HasItem]
/// );
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitionLog {
    records: Vec<TransitionRecord>,
}

impl TransitionLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new log.
    ///
    /// This is a pure function; it does not mutate the existing log.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// All recorded transitions, oldest first.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    /// The most recent transition, if any.
    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.last()
    }

    /// The path of states traversed: the first record's `from` state
    /// followed by the `to` state of every record. Empty for an empty log.
    pub fn path(&self) -> Vec<VendingState> {
        let Some(first) = self.records.first() else {
            return Vec::new();
        };
        let mut path = Vec::with_capacity(self.records.len() + 1);
        path.push(first.from);
        path.extend(self.records.iter().map(|r| r.to));
        path
    }

    /// Number of recorded transitions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the log holds no transitions.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(from: VendingState, to: VendingState, operation: Operation) -> TransitionRecord {
        TransitionRecord {
            from,
            to,
            operation,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn empty_log_has_empty_path() {
        let log = TransitionLog::new();
        assert!(log.is_empty());
        assert!(log.path().is_empty());
        assert!(log.last().is_none());
    }

    #[test]
    fn record_returns_new_log_leaving_original_unchanged() {
        let log = TransitionLog::new();
        let new_log = log.record(transition(
            VendingState::NoItem,
            VendingState::HasItem,
            Operation::AddItem,
        ));

        assert_eq!(log.len(), 0);
        assert_eq!(new_log.len(), 1);
    }

    #[test]
    fn path_starts_from_initial_state() {
        let log = TransitionLog::new()
            .record(transition(
                VendingState::HasItem,
                VendingState::ItemRequested,
                Operation::RequestItem,
            ))
            .record(transition(
                VendingState::ItemRequested,
                VendingState::HasMoney,
                Operation::InsertMoney,
            ));

        assert_eq!(
            log.path(),
            vec![
                VendingState::HasItem,
                VendingState::ItemRequested,
                VendingState::HasMoney,
            ]
        );
    }

    #[test]
    fn last_returns_most_recent_record() {
        let log = TransitionLog::new()
            .record(transition(
                VendingState::NoItem,
                VendingState::HasItem,
                Operation::AddItem,
            ))
            .record(transition(
                VendingState::HasItem,
                VendingState::ItemRequested,
                Operation::RequestItem,
            ));

        let last = log.last().unwrap();
        assert_eq!(last.operation, Operation::RequestItem);
        assert_eq!(last.to, VendingState::ItemRequested);
    }

    #[test]
    fn log_serializes_correctly() {
        let log = TransitionLog::new().record(transition(
            VendingState::NoItem,
            VendingState::HasItem,
            Operation::AddItem,
        ));

        let json = serde_json::to_string(&log).unwrap();
        let deserialized: TransitionLog = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.path(), log.path());
    }
}
