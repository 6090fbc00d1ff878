//! The vending machine's state and operation vocabulary.
//!
//! The machine cycles through exactly four phases. They form a closed sum
//! type rather than an open trait hierarchy, so every dispatch site is
//! checked for exhaustiveness by the compiler.

use serde::{Deserialize, Serialize};

/// The phase a vending machine is currently in.
///
/// Variants carry no data of their own; all shared fields (stock, price)
/// live on the owning [`VendingMachine`](crate::machine::VendingMachine).
/// The machine starts in `HasItem` when constructed with stock, `NoItem`
/// otherwise, and cycles indefinitely; there is no terminal state.
///
/// # Example
///
/// ```rust
/// use vendo::VendingState;
///
/// let state = VendingState::ItemRequested;
/// assert_eq!(state.name(), "ItemRequested");
/// assert!(state.in_transaction());
/// assert!(!state.accepts_stock());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum VendingState {
    /// No stock; only restocking is accepted.
    NoItem,
    /// Stock available; waiting for a customer to select the item.
    HasItem,
    /// Item selected; waiting for payment.
    ItemRequested,
    /// Payment accepted; waiting for the item to be dispensed.
    HasMoney,
}

impl VendingState {
    /// The state's name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NoItem => "NoItem",
            Self::HasItem => "HasItem",
            Self::ItemRequested => "ItemRequested",
            Self::HasMoney => "HasMoney",
        }
    }

    /// Whether a vend transaction is in progress.
    ///
    /// Stock changes are forbidden while this holds.
    pub fn in_transaction(&self) -> bool {
        matches!(self, Self::ItemRequested | Self::HasMoney)
    }

    /// Whether this phase accepts restocking via `add_item`.
    pub fn accepts_stock(&self) -> bool {
        matches!(self, Self::NoItem | Self::HasItem)
    }
}

/// One of the four operations every state must answer.
///
/// Used by [`TransitionRecord`](crate::core::TransitionRecord) to name the
/// operation that caused a transition.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Operation {
    RequestItem,
    AddItem,
    InsertMoney,
    DispenseItem,
}

impl Operation {
    /// The operation's name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RequestItem => "request_item",
            Self::AddItem => "add_item",
            Self::InsertMoney => "insert_money",
            Self::DispenseItem => "dispense_item",
        }
    }
}
