//! Vendo: a state-pattern vending machine core
//!
//! Vendo models a single-item vending machine as a closed state machine with
//! four phases: `NoItem`, `HasItem`, `ItemRequested` and `HasMoney`. Each
//! phase implements the same four operations (request item, add stock,
//! insert money, dispense item) with phase-specific legality rules, and the
//! [`VendingMachine`](machine::VendingMachine) context delegates every call
//! to the active phase.
//!
//! All rule violations are expected, user-correctable conditions: operations
//! return [`VendError`](crate::core::VendError) instead of panicking, and a
//! failed operation never changes the machine's state, stock or price.
//!
//! # Core Concepts
//!
//! - **State**: the [`VendingState`](crate::core::VendingState) sum type
//!   with exactly four variants, matched exhaustively
//! - **Context**: the [`VendingMachine`](machine::VendingMachine) that owns
//!   the shared stock and price fields and applies transitions
//! - **History**: immutable [`TransitionLog`](crate::core::TransitionLog)
//!   tracking of every transition the machine takes
//!
//! # Example
//!
//! ```rust
//! use vendo::{VendingMachine, VendingState};
//!
//! let mut machine = VendingMachine::new(10, 0).unwrap();
//! assert_eq!(machine.state(), VendingState::NoItem);
//!
//! machine.add_item(1).unwrap();
//! machine.request_item().unwrap();
//!
//! // Underpayment is rejected and reports the required price.
//! let err = machine.insert_money(5).unwrap_err();
//! assert_eq!(err.to_string(), "inserted money is less, please insert 10");
//!
//! machine.insert_money(10).unwrap();
//! machine.dispense_item().unwrap();
//! assert_eq!(machine.state(), VendingState::NoItem);
//! ```

pub mod core;
pub mod hierarchy;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{Operation, TransitionLog, TransitionRecord, VendError, VendingState};
pub use crate::machine::{BuildError, MachineBuilder, Snapshot, VendingMachine};
