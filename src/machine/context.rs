//! The vending machine context.

use crate::core::{Operation, TransitionLog, TransitionRecord, VendError, VendingState};
use crate::machine::builder::BuildError;
use crate::machine::ops::{Inventory, StateOps, StepOutcome};
use crate::machine::snapshot::Snapshot;
use chrono::Utc;
use uuid::Uuid;

/// A single-item vending machine driven by the state pattern.
///
/// The machine owns the shared fields (stock count, item price) and the
/// current [`VendingState`]; every public operation is delegated to the
/// active state's rules and its result returned unchanged. Transitions are
/// applied only here; callers can observe the state but never set it.
///
/// Operations are synchronous and complete immediately. The machine assumes
/// a single caller; wrap it in a lock if it must be shared across threads.
///
/// # Example
///
/// ```rust
/// use vendo::{VendError, VendingMachine, VendingState};
///
/// let mut machine = VendingMachine::new(10, 1).unwrap();
/// assert_eq!(machine.state(), VendingState::HasItem);
///
/// machine.request_item().unwrap();
///
/// // Requesting twice is rejected and nothing changes.
/// assert_eq!(machine.request_item(), Err(VendError::AlreadyRequested));
/// assert_eq!(machine.state(), VendingState::ItemRequested);
///
/// machine.insert_money(10).unwrap();
/// machine.dispense_item().unwrap();
/// assert_eq!(machine.item_count(), 0);
/// assert_eq!(machine.state(), VendingState::NoItem);
/// ```
#[derive(Clone, Debug)]
pub struct VendingMachine {
    id: Uuid,
    state: VendingState,
    inventory: Inventory,
    log: TransitionLog,
}

impl VendingMachine {
    /// Create a machine selling one item type at `item_price`, pre-loaded
    /// with `initial_stock` units.
    ///
    /// The machine starts in `HasItem` when stock is positive, `NoItem`
    /// otherwise. Fails with [`BuildError::InvalidPrice`] for a zero price.
    pub fn new(item_price: u32, initial_stock: u32) -> Result<Self, BuildError> {
        if item_price == 0 {
            return Err(BuildError::InvalidPrice { price: item_price });
        }

        let state = if initial_stock > 0 {
            VendingState::HasItem
        } else {
            VendingState::NoItem
        };

        Ok(Self {
            id: Uuid::new_v4(),
            state,
            inventory: Inventory {
                item_count: initial_stock,
                item_price,
            },
            log: TransitionLog::new(),
        })
    }

    /// Select the item, starting a vend transaction.
    pub fn request_item(&mut self) -> Result<(), VendError> {
        self.step(Operation::RequestItem, |ops, inv| ops.request_item(inv))
    }

    /// Restock the machine with `count` units.
    pub fn add_item(&mut self, count: i64) -> Result<(), VendError> {
        self.step(Operation::AddItem, move |ops, inv| ops.add_item(inv, count))
    }

    /// Pay for the selected item.
    pub fn insert_money(&mut self, amount: i64) -> Result<(), VendError> {
        self.step(Operation::InsertMoney, move |ops, inv| {
            ops.insert_money(inv, amount)
        })
    }

    /// Dispense the paid-for item, completing the transaction.
    pub fn dispense_item(&mut self) -> Result<(), VendError> {
        self.step(Operation::DispenseItem, |ops, inv| ops.dispense_item(inv))
    }

    /// Current state.
    pub fn state(&self) -> VendingState {
        self.state
    }

    /// Units currently in stock.
    pub fn item_count(&self) -> u32 {
        self.inventory.item_count
    }

    /// Price of the item. Fixed at construction.
    pub fn item_price(&self) -> u32 {
        self.inventory.item_price
    }

    /// This machine's identity, for diagnostics.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Every transition this machine has taken.
    pub fn log(&self) -> &TransitionLog {
        &self.log
    }

    /// A serializable point-in-time view of the machine.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            id: self.id,
            state: self.state,
            item_count: self.inventory.item_count,
            item_price: self.inventory.item_price,
            transitions: self.log.len(),
            taken_at: Utc::now(),
        }
    }

    /// Run one operation against the active state's rules and apply any
    /// resulting transition.
    fn step<F>(&mut self, operation: Operation, f: F) -> Result<(), VendError>
    where
        F: FnOnce(&'static dyn StateOps, &mut Inventory) -> StepOutcome,
    {
        let outcome = f(self.state.ops(), &mut self.inventory);
        if let Some(next) = outcome.next {
            self.set_state(operation, next);
        }
        outcome.result
    }

    /// Replace the current state, recording the transition. Only reachable
    /// from the states' own rules via [`step`](Self::step).
    fn set_state(&mut self, operation: Operation, to: VendingState) {
        self.log = self.log.record(TransitionRecord {
            from: self.state,
            to,
            operation,
            timestamp: Utc::now(),
        });
        self.state = to;
    }
}
