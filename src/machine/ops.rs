//! Per-state operation rules.
//!
//! Each of the four states implements the same capability set with its own
//! legality rules. Variants are stateless unit structs; they read and update
//! the machine's shared fields through a borrowed [`Inventory`] and report
//! an optional next state through [`StepOutcome`]. Transitions are applied
//! by the context, never here.

use crate::core::{VendError, VendingState};

/// The machine's shared mutable fields.
///
/// Owned by the context; variants only ever see a borrow, so no variant can
/// outlive or independently manage the machine's lifecycle.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Inventory {
    pub item_count: u32,
    pub item_price: u32,
}

/// What one operation attempt produced: an optional transition target plus
/// the business result handed back to the caller.
pub(crate) struct StepOutcome {
    pub next: Option<VendingState>,
    pub result: Result<(), VendError>,
}

impl StepOutcome {
    /// Succeed without transitioning.
    fn stay() -> Self {
        Self {
            next: None,
            result: Ok(()),
        }
    }

    /// Succeed and transition to `to`.
    fn advance(to: VendingState) -> Self {
        Self {
            next: Some(to),
            result: Ok(()),
        }
    }

    /// Fail without transitioning.
    fn reject(err: VendError) -> Self {
        Self {
            next: None,
            result: Err(err),
        }
    }

    /// Fail but still transition. Only the HasItem stock re-sync uses this.
    fn resync(to: VendingState, err: VendError) -> Self {
        Self {
            next: Some(to),
            result: Err(err),
        }
    }
}

/// Add `count` units of stock. Counts must be positive, representable as a
/// stock quantity, and leave the total within range; anything else is
/// rejected as `InvalidCount` with the stock untouched.
fn add_stock(inv: &mut Inventory, count: i64) -> Result<(), VendError> {
    let units = match u32::try_from(count) {
        Ok(units) if units > 0 => units,
        _ => return Err(VendError::InvalidCount { count }),
    };
    inv.item_count = inv
        .item_count
        .checked_add(units)
        .ok_or(VendError::InvalidCount { count })?;
    Ok(())
}

/// The capability set every state must answer.
///
/// Signatures are identical across variants; only the legality rules differ.
pub(crate) trait StateOps {
    fn request_item(&self, inv: &mut Inventory) -> StepOutcome;
    fn add_item(&self, inv: &mut Inventory, count: i64) -> StepOutcome;
    fn insert_money(&self, inv: &mut Inventory, amount: i64) -> StepOutcome;
    fn dispense_item(&self, inv: &mut Inventory) -> StepOutcome;
}

impl VendingState {
    /// Behavior of the current state. Variants carry no instance data, so a
    /// static dispatch table suffices.
    pub(crate) fn ops(self) -> &'static dyn StateOps {
        match self {
            Self::NoItem => &NoItemState,
            Self::HasItem => &HasItemState,
            Self::ItemRequested => &ItemRequestedState,
            Self::HasMoney => &HasMoneyState,
        }
    }
}

/// No stock: everything except restocking is rejected.
struct NoItemState;

impl StateOps for NoItemState {
    fn request_item(&self, _inv: &mut Inventory) -> StepOutcome {
        StepOutcome::reject(VendError::OutOfStock)
    }

    fn add_item(&self, inv: &mut Inventory, count: i64) -> StepOutcome {
        match add_stock(inv, count) {
            Ok(()) => StepOutcome::advance(VendingState::HasItem),
            Err(err) => StepOutcome::reject(err),
        }
    }

    fn insert_money(&self, _inv: &mut Inventory, _amount: i64) -> StepOutcome {
        StepOutcome::reject(VendError::OutOfStock)
    }

    fn dispense_item(&self, _inv: &mut Inventory) -> StepOutcome {
        StepOutcome::reject(VendError::OutOfStock)
    }
}

/// Stock available: selection starts a transaction, restocking is allowed.
struct HasItemState;

impl StateOps for HasItemState {
    fn request_item(&self, inv: &mut Inventory) -> StepOutcome {
        if inv.item_count == 0 {
            // Stock drifted out from under us; fail and re-sync to NoItem.
            return StepOutcome::resync(VendingState::NoItem, VendError::OutOfStock);
        }
        StepOutcome::advance(VendingState::ItemRequested)
    }

    fn add_item(&self, inv: &mut Inventory, count: i64) -> StepOutcome {
        match add_stock(inv, count) {
            Ok(()) => StepOutcome::stay(),
            Err(err) => StepOutcome::reject(err),
        }
    }

    fn insert_money(&self, _inv: &mut Inventory, _amount: i64) -> StepOutcome {
        StepOutcome::reject(VendError::ItemNotSelected)
    }

    fn dispense_item(&self, _inv: &mut Inventory) -> StepOutcome {
        StepOutcome::reject(VendError::ItemNotSelected)
    }
}

/// Item selected: only payment advances the transaction.
struct ItemRequestedState;

impl StateOps for ItemRequestedState {
    fn request_item(&self, _inv: &mut Inventory) -> StepOutcome {
        StepOutcome::reject(VendError::AlreadyRequested)
    }

    fn add_item(&self, _inv: &mut Inventory, _count: i64) -> StepOutcome {
        StepOutcome::reject(VendError::DispenseInProgress)
    }

    fn insert_money(&self, inv: &mut Inventory, amount: i64) -> StepOutcome {
        if amount < i64::from(inv.item_price) {
            return StepOutcome::reject(VendError::InsufficientMoney {
                required: inv.item_price,
            });
        }
        StepOutcome::advance(VendingState::HasMoney)
    }

    fn dispense_item(&self, _inv: &mut Inventory) -> StepOutcome {
        StepOutcome::reject(VendError::NoMoneyInserted)
    }
}

/// Paid: only dispensing completes the transaction.
struct HasMoneyState;

impl StateOps for HasMoneyState {
    fn request_item(&self, _inv: &mut Inventory) -> StepOutcome {
        StepOutcome::reject(VendError::DispenseInProgress)
    }

    fn add_item(&self, _inv: &mut Inventory, _count: i64) -> StepOutcome {
        StepOutcome::reject(VendError::DispenseInProgress)
    }

    fn insert_money(&self, _inv: &mut Inventory, _amount: i64) -> StepOutcome {
        StepOutcome::reject(VendError::AlreadyPaid)
    }

    fn dispense_item(&self, inv: &mut Inventory) -> StepOutcome {
        // HasMoney is only reachable with stock on hand; stock is frozen
        // for the duration of the transaction.
        inv.item_count -= 1;
        if inv.item_count == 0 {
            StepOutcome::advance(VendingState::NoItem)
        } else {
            StepOutcome::advance(VendingState::HasItem)
        }
    }
}
