//! Core vending machine vocabulary.
//!
//! This module contains the pure core of the machine:
//! - The closed [`VendingState`] sum type and the [`Operation`] names
//! - The [`VendError`] business-rule taxonomy
//! - Immutable [`TransitionLog`] tracking
//!
//! Nothing in this module mutates machine fields or performs I/O; the
//! imperative shell lives in [`crate::machine`].

mod error;
mod history;
mod state;

pub use error::VendError;
pub use history::{TransitionLog, TransitionRecord};
pub use state::{Operation, VendingState};
