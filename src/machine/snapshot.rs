//! Point-in-time machine snapshots for diagnostics.

use crate::core::VendingState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Serializable view of a machine at one instant.
///
/// Snapshots are read-only diagnostics; they carry no transition rules and
/// cannot be loaded back into a machine.
///
/// # Example
///
/// ```rust
/// use vendo::VendingMachine;
///
/// let machine = VendingMachine::new(10, 2).unwrap();
/// let json = machine.snapshot().to_json().unwrap();
/// assert!(json.contains("\"HasItem\""));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Identity of the machine the snapshot was taken from
    pub id: Uuid,

    /// State at the time of the snapshot
    pub state: VendingState,

    /// Units in stock
    pub item_count: u32,

    /// Item price
    pub item_price: u32,

    /// Transitions taken so far
    pub transitions: usize,

    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,
}

impl Snapshot {
    /// Render the snapshot as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
