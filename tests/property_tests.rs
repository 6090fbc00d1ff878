//! Property-based tests for the vending machine.
//!
//! These tests use proptest to verify the machine's invariants hold across
//! many randomly generated operation sequences.

use proptest::prelude::*;
use vendo::{VendingMachine, VendingState};

/// One externally drivable operation.
#[derive(Clone, Debug)]
enum Op {
    Request,
    Add(i64),
    Insert(i64),
    Dispense,
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Request),
        (-5i64..20).prop_map(Op::Add),
        // Extreme restocks: wider than the stock counter or overflowing it.
        prop_oneof![
            Just(i64::from(u32::MAX)),
            Just(1i64 << 32),
            Just(i64::MAX),
            Just(i64::MIN),
        ]
        .prop_map(Op::Add),
        (0i64..50).prop_map(Op::Insert),
        Just(Op::Dispense),
    ]
}

fn apply(machine: &mut VendingMachine, op: &Op) -> Result<(), vendo::VendError> {
    match op {
        Op::Request => machine.request_item(),
        Op::Add(count) => machine.add_item(*count),
        Op::Insert(amount) => machine.insert_money(*amount),
        Op::Dispense => machine.dispense_item(),
    }
}

proptest! {
    /// A failed operation never changes state, stock or price.
    #[test]
    fn failures_leave_machine_unchanged(
        price in 1u32..50,
        stock in 0u32..10,
        ops in proptest::collection::vec(arbitrary_op(), 1..40),
    ) {
        let mut machine = VendingMachine::new(price, stock).unwrap();

        for op in &ops {
            let before_state = machine.state();
            let before_count = machine.item_count();
            let before_price = machine.item_price();

            if apply(&mut machine, op).is_err() {
                prop_assert_eq!(machine.state(), before_state);
                prop_assert_eq!(machine.item_count(), before_count);
                prop_assert_eq!(machine.item_price(), before_price);
            }
        }
    }

    /// The price is fixed at construction, whatever happens afterwards.
    #[test]
    fn price_never_changes(
        price in 1u32..50,
        stock in 0u32..10,
        ops in proptest::collection::vec(arbitrary_op(), 0..40),
    ) {
        let mut machine = VendingMachine::new(price, stock).unwrap();

        for op in &ops {
            let _ = apply(&mut machine, op);
            prop_assert_eq!(machine.item_price(), price);
        }
    }

    /// Payment in ItemRequested succeeds exactly when it covers the price.
    #[test]
    fn payment_succeeds_iff_it_covers_the_price(
        price in 1u32..100,
        stock in 1u32..10,
        amount in 0i64..200,
    ) {
        let mut machine = VendingMachine::new(price, stock).unwrap();
        machine.request_item().unwrap();

        let result = machine.insert_money(amount);
        if amount >= i64::from(price) {
            prop_assert!(result.is_ok());
            prop_assert_eq!(machine.state(), VendingState::HasMoney);
        } else {
            let err = result.unwrap_err();
            prop_assert_eq!(
                err,
                vendo::VendError::InsufficientMoney { required: price }
            );
            prop_assert_eq!(machine.state(), VendingState::ItemRequested);
        }
    }

    /// Dispensing removes exactly one unit and picks the next state by the
    /// remaining stock.
    #[test]
    fn dispense_decrements_once_and_routes_by_stock(
        price in 1u32..50,
        stock in 1u32..10,
    ) {
        let mut machine = VendingMachine::new(price, stock).unwrap();
        machine.request_item().unwrap();
        machine.insert_money(i64::from(price)).unwrap();

        machine.dispense_item().unwrap();

        prop_assert_eq!(machine.item_count(), stock - 1);
        if stock == 1 {
            prop_assert_eq!(machine.state(), VendingState::NoItem);
        } else {
            prop_assert_eq!(machine.state(), VendingState::HasItem);
        }
    }

    /// Restocking with a non-positive count always fails without touching
    /// the stock.
    #[test]
    fn non_positive_restock_never_mutates(
        price in 1u32..50,
        stock in 0u32..10,
        count in -20i64..=0,
    ) {
        let mut machine = VendingMachine::new(price, stock).unwrap();

        let result = machine.add_item(count);

        prop_assert!(result.is_err());
        prop_assert_eq!(machine.item_count(), stock);
    }

    /// The transition log's path always starts and ends consistently with
    /// the observable state.
    #[test]
    fn log_path_ends_at_current_state(
        price in 1u32..50,
        stock in 0u32..10,
        ops in proptest::collection::vec(arbitrary_op(), 1..40),
    ) {
        let mut machine = VendingMachine::new(price, stock).unwrap();

        for op in &ops {
            let _ = apply(&mut machine, op);
        }

        if let Some(last) = machine.log().path().last() {
            prop_assert_eq!(*last, machine.state());
        }
    }
}
