//! Business-rule errors for vending machine operations.
//!
//! Every variant is an expected, user-correctable condition. Operations
//! never panic for rule violations; they return one of these and leave the
//! machine's state, stock and price untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A rejected vending machine operation.
///
/// # Example
///
/// ```rust
/// use vendo::{VendError, VendingMachine};
///
/// let mut machine = VendingMachine::new(25, 1).unwrap();
/// machine.request_item().unwrap();
///
/// let err = machine.insert_money(10).unwrap_err();
/// assert_eq!(err, VendError::InsufficientMoney { required: 25 });
/// assert_eq!(err.to_string(), "inserted money is less, please insert 25");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Error, Serialize, Deserialize)]
pub enum VendError {
    /// No stock is available for the attempted operation.
    #[error("item out of stock")]
    OutOfStock,

    /// `add_item` was called with a zero or negative count.
    #[error("invalid count: {count}")]
    InvalidCount { count: i64 },

    /// `request_item` was called while an item is already selected.
    #[error("item already requested")]
    AlreadyRequested,

    /// Stock or selection changes were attempted mid-transaction.
    #[error("item dispense in progress")]
    DispenseInProgress,

    /// Payment was below the item price; `required` is the full price.
    #[error("inserted money is less, please insert {required}")]
    InsufficientMoney { required: u32 },

    /// Money was inserted twice for the same transaction.
    #[error("money already inserted")]
    AlreadyPaid,

    /// Payment or dispensing was attempted before selecting an item.
    #[error("please select item first")]
    ItemNotSelected,

    /// Dispensing was attempted before payment.
    #[error("please insert money first")]
    NoMoneyInserted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_money_reports_required_price() {
        let err = VendError::InsufficientMoney { required: 10 };
        assert_eq!(err.to_string(), "inserted money is less, please insert 10");
    }

    #[test]
    fn invalid_count_reports_rejected_count() {
        let err = VendError::InvalidCount { count: -3 };
        assert_eq!(err.to_string(), "invalid count: -3");
    }

    #[test]
    fn display_messages_are_stable() {
        assert_eq!(VendError::OutOfStock.to_string(), "item out of stock");
        assert_eq!(
            VendError::AlreadyRequested.to_string(),
            "item already requested"
        );
        assert_eq!(
            VendError::DispenseInProgress.to_string(),
            "item dispense in progress"
        );
        assert_eq!(VendError::AlreadyPaid.to_string(), "money already inserted");
        assert_eq!(
            VendError::ItemNotSelected.to_string(),
            "please select item first"
        );
        assert_eq!(
            VendError::NoMoneyInserted.to_string(),
            "please insert money first"
        );
    }

    #[test]
    fn errors_are_comparable_and_cloneable() {
        let err = VendError::InsufficientMoney { required: 5 };
        assert_eq!(err.clone(), err);
        assert_ne!(err, VendError::InsufficientMoney { required: 6 });
    }
}
