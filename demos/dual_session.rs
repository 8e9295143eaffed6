//! Dual Calculator Session
//!
//! This demo drives both calculators through a short session and prints
//! each display and record after every step.
//!
//! Key concepts:
//! - Inputs are routed to one side at a time
//! - A result can be cross-fed into the other side as a committed value
//! - The most recent cross-feed can be withdrawn
//!
//! Run with: RUST_LOG=bicalc=debug cargo run --example dual_session

use bicalc::core::{InputItem, Operator};
use bicalc::dual::{CrossFeed, DualCalculator, Side};
use tracing_subscriber::EnvFilter;

fn show(calc: &DualCalculator, step: &str) {
    println!("{step}");
    for side in [Side::Primary, Side::Secondary] {
        println!(
            "  {:<9} display: {:>12}   record: {}",
            format!("{side:?}"),
            calc.output(side),
            calc.record(side)
        );
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Dual Calculator Session ===\n");

    let mut calc = DualCalculator::new();

    for item in [
        InputItem::Digit(8),
        InputItem::Digit(9),
        InputItem::Operator(Operator::Multiply),
        InputItem::Digit(1),
        InputItem::Digit(5),
        InputItem::Operator(Operator::Equals),
    ] {
        calc.apply(Side::Primary, item);
    }
    show(&calc, "Primary: 89 x 15 =");

    calc.apply(Side::Secondary, InputItem::Digit(2));
    calc.apply(Side::Secondary, InputItem::Operator(Operator::Divide));
    show(&calc, "Secondary: 2 ÷");

    calc.push_cross_feed(CrossFeed::PrimaryToSecondary);
    show(&calc, "Cross-feed primary -> secondary");

    calc.undo_last_cross_feed();
    show(&calc, "Undo cross-feed");

    calc.push_cross_feed(CrossFeed::PrimaryToSecondary);
    calc.apply(Side::Secondary, InputItem::Operator(Operator::Equals));
    show(&calc, "Cross-feed again, then =");

    println!("=== Session Complete ===");
}
