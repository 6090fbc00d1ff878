//! Builder for constructing vending machines.

use crate::machine::context::VendingMachine;
use thiserror::Error;

/// Errors that can occur when constructing a machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Item price not specified. Call .item_price(price) before .build()")]
    MissingPrice,

    #[error("Item price must be positive, got {price}")]
    InvalidPrice { price: u32 },
}

/// Builder for constructing a [`VendingMachine`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use vendo::{MachineBuilder, VendingState};
///
/// let machine = MachineBuilder::new()
///     .item_price(10)
///     .initial_stock(5)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.state(), VendingState::HasItem);
/// assert_eq!(machine.item_count(), 5);
/// ```
#[derive(Debug, Default)]
pub struct MachineBuilder {
    item_price: Option<u32>,
    initial_stock: u32,
}

impl MachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the item price (required, must be positive).
    pub fn item_price(mut self, price: u32) -> Self {
        self.item_price = Some(price);
        self
    }

    /// Set the initial stock (optional, defaults to empty).
    pub fn initial_stock(mut self, stock: u32) -> Self {
        self.initial_stock = stock;
        self
    }

    /// Build the machine.
    /// Returns an error if the price is missing or zero.
    pub fn build(self) -> Result<VendingMachine, BuildError> {
        let price = self.item_price.ok_or(BuildError::MissingPrice)?;
        VendingMachine::new(price, self.initial_stock)
    }
}
