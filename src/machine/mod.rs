//! The vending machine context and its per-state behavior.
//!
//! [`VendingMachine`] is the imperative shell: it owns the shared stock and
//! price fields, delegates each operation to the behavior of the current
//! [`VendingState`](crate::core::VendingState), and is the only place
//! transitions are applied. The per-state legality rules themselves live in
//! stateless variant implementations of a common capability trait.

mod builder;
mod context;
mod ops;
mod snapshot;

pub use builder::{BuildError, MachineBuilder};
pub use context::VendingMachine;
pub use snapshot::Snapshot;
