//! End-to-end keypress scripts against the dual calculator.

use bicalc::core::{keypad, CalculatorState, Command, InputItem, Operator};
use bicalc::dual::{CrossFeed, DualCalculator, Side};

/// Translate a key script such as `"89x15="` into inputs.
///
/// `c` is AC, `n` is +/-, `%` is percent, `/` is divide.
fn keys(script: &str) -> Vec<InputItem> {
    script
        .chars()
        .map(|ch| match ch {
            '0'..='9' => InputItem::Digit(ch as u8 - b'0'),
            '.' => InputItem::DecimalPoint,
            '+' => InputItem::Operator(Operator::Add),
            '-' => InputItem::Operator(Operator::Subtract),
            'x' => InputItem::Operator(Operator::Multiply),
            '/' => InputItem::Operator(Operator::Divide),
            '=' => InputItem::Operator(Operator::Equals),
            'c' => InputItem::Command(Command::Clear),
            'n' => InputItem::Command(Command::Negate),
            '%' => InputItem::Command(Command::Percent),
            other => panic!("unknown key {other:?}"),
        })
        .collect()
}

fn press(calc: &mut DualCalculator, side: Side, script: &str) {
    for item in keys(script) {
        calc.apply(side, item);
    }
}

#[test]
fn pressing_every_keypad_button_in_order() {
    let mut calc = DualCalculator::new();
    for item in keypad().into_iter().flatten() {
        calc.apply(Side::Primary, item);
    }

    // AC, +/-, % leave 0; 0÷789, x456 and -123 chain to -123; then +0. =
    assert_eq!(
        calc.state(Side::Primary),
        &CalculatorState::LeftDone("-123".to_string())
    );
    assert_eq!(calc.output(Side::Primary), "-123");
    assert_eq!(calc.record(Side::Primary), "-123+0=-123");
}

#[test]
fn large_products_survive_display_and_cross_feed() {
    let mut calc = DualCalculator::new();
    press(&mut calc, Side::Primary, "999999999999999x999999999999999=");
    assert_eq!(
        calc.output(Side::Primary),
        "999,999,999,999,998,000,000,000,000,001"
    );

    calc.push_cross_feed(CrossFeed::PrimaryToSecondary);
    assert_eq!(
        calc.state(Side::Secondary),
        &CalculatorState::LeftDone("999999999999998000000000000001".to_string())
    );
}

#[test]
fn negative_fraction_crosses_over_intact() {
    let mut calc = DualCalculator::new();
    press(&mut calc, Side::Primary, "1234.5n");
    assert_eq!(calc.output(Side::Primary), "-1,234.5");

    calc.push_cross_feed(CrossFeed::PrimaryToSecondary);
    assert_eq!(calc.output(Side::Secondary), "-1,234.5");
    assert_eq!(
        calc.state(Side::Secondary),
        &CalculatorState::LeftDone("-1234.5".to_string())
    );
}

#[test]
fn record_trail_for_classic_session() {
    let mut calc = DualCalculator::new();

    press(&mut calc, Side::Primary, "89x15=");
    assert_eq!(calc.output(Side::Primary), "1,335");
    assert_eq!(calc.record(Side::Primary), "89x15=1,335");

    press(&mut calc, Side::Primary, "-35");
    assert_eq!(calc.output(Side::Primary), "35");
    assert_eq!(calc.record(Side::Primary), "1,335-35");

    press(&mut calc, Side::Primary, "=");
    assert_eq!(calc.output(Side::Primary), "1,300");
    assert_eq!(calc.record(Side::Primary), "1,335-35=1,300");
}

#[test]
fn typing_keeps_pending_zeros_visible() {
    let mut calc = DualCalculator::new();
    press(&mut calc, Side::Primary, "1000.50");
    assert_eq!(calc.output(Side::Primary), "1,000.50");

    press(&mut calc, Side::Primary, "+");
    assert_eq!(calc.output(Side::Primary), "1,000.5");
}

#[test]
fn negate_before_right_operand_starts_negative_zero() {
    let mut calc = DualCalculator::new();
    press(&mut calc, Side::Primary, "9xn");
    assert_eq!(calc.output(Side::Primary), "-0");

    press(&mut calc, Side::Primary, "3=");
    assert_eq!(calc.output(Side::Primary), "-27");
}

#[test]
fn error_recovers_on_next_input() {
    let mut calc = DualCalculator::new();
    press(&mut calc, Side::Secondary, "5/0=");
    assert_eq!(calc.output(Side::Secondary), "Error");
    assert_eq!(calc.state(Side::Secondary), &CalculatorState::Error);

    press(&mut calc, Side::Secondary, "7");
    assert_eq!(calc.output(Side::Secondary), "7");

    press(&mut calc, Side::Secondary, "c");
    assert_eq!(calc.output(Side::Secondary), "0");
    assert_eq!(calc.record(Side::Secondary), "");
}

#[test]
fn results_flow_between_calculators() {
    let mut calc = DualCalculator::new();

    // Primary works out a subtotal, secondary applies tax to it.
    press(&mut calc, Side::Primary, "120+80=");
    press(&mut calc, Side::Secondary, "1.08x");
    calc.push_cross_feed(CrossFeed::PrimaryToSecondary);
    press(&mut calc, Side::Secondary, "=");
    assert_eq!(calc.output(Side::Secondary), "216");
    assert_eq!(calc.record(Side::Secondary), "1.08x200=216");

    // And the taxed value comes back as the left operand of a new sum.
    calc.push_cross_feed(CrossFeed::SecondaryToPrimary);
    press(&mut calc, Side::Primary, "+4=");
    assert_eq!(calc.output(Side::Primary), "220");
}

#[test]
fn undo_withdraws_value_before_further_input() {
    let mut calc = DualCalculator::new();
    press(&mut calc, Side::Primary, "12");
    press(&mut calc, Side::Secondary, "3+");

    calc.push_cross_feed(CrossFeed::PrimaryToSecondary);
    assert_eq!(calc.output(Side::Secondary), "12");

    assert!(calc.undo_last_cross_feed());
    assert_eq!(calc.output(Side::Secondary), "3");
    assert_eq!(calc.record(Side::Secondary), "3+");

    press(&mut calc, Side::Secondary, "=");
    assert_eq!(calc.output(Side::Secondary), "6");
}

#[test]
fn cross_fed_value_ignores_further_digits() {
    let mut calc = DualCalculator::new();
    press(&mut calc, Side::Primary, "42");
    calc.push_cross_feed(CrossFeed::PrimaryToSecondary);

    press(&mut calc, Side::Secondary, "1");
    assert_eq!(calc.output(Side::Secondary), "1");
}
