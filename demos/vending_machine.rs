//! Vending Machine Walkthrough
//!
//! This demo drives one machine through a complete vend cycle, including
//! the rejections a real customer would hit along the way.
//!
//! Run with: cargo run --example vending_machine

use vendo::{MachineBuilder, VendError, VendingMachine};

fn show(label: &str, result: Result<(), VendError>, machine: &VendingMachine) {
    match result {
        Ok(()) => println!("{label}: ok -> {} (stock {})", machine.state().name(), machine.item_count()),
        Err(err) => println!("{label}: rejected -> {err}"),
    }
}

fn main() {
    println!("=== Vending Machine ===\n");

    let mut machine = MachineBuilder::new()
        .item_price(10)
        .build()
        .expect("price is positive");

    println!(
        "Machine {} created: price {}, empty, state {}\n",
        machine.id(),
        machine.item_price(),
        machine.state().name()
    );

    // Nothing works while the machine is empty.
    show("request (empty)", machine.request_item(), &machine);
    show("pay (empty)", machine.insert_money(10), &machine);

    // Restock, then walk the happy path with one detour.
    show("restock 1", machine.add_item(1), &machine);
    show("request", machine.request_item(), &machine);
    show("pay 5", machine.insert_money(5), &machine);
    show("pay 10", machine.insert_money(10), &machine);
    show("dispense", machine.dispense_item(), &machine);

    println!("\nTransitions taken:");
    for record in machine.log().records() {
        println!(
            "  {} -> {} via {}",
            record.from.name(),
            record.to.name(),
            record.operation.name()
        );
    }

    println!("\nSnapshot:");
    println!("{}", machine.snapshot().to_json().expect("snapshot serializes"));
}
