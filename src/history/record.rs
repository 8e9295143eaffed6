//! Record strings derived by replaying an input log.
//!
//! A record is the human-readable trail shown above the display, such as
//! `89x15=1335`. It is recomputed from the log on every input rather than
//! kept alongside the state, so it can always be re-derived from the log.

use super::log::InputLog;
use crate::core::{BinaryOp, CalculatorState, InputItem, Operator};
use crate::number::NumberFormat;

/// Replay `log` from the initial state and emit statements.
///
/// A completed statement `<left><op><right>=<result>` is emitted whenever
/// an operator evaluates a pending binary operation. The last input also
/// emits the in-progress statement when it did not complete one. Inputs
/// that end in `Error` emit nothing, so the previous statement stands.
///
/// # Example
///
/// ```rust
/// use bicalc::core::{InputItem, Operator};
/// use bicalc::history::{build_record, InputLog};
/// use bicalc::number::NumberFormat;
///
/// let log = [
///     InputItem::Digit(2),
///     InputItem::Operator(Operator::Add),
///     InputItem::Digit(2),
///     InputItem::Operator(Operator::Multiply),
///     InputItem::Digit(3),
/// ]
/// .into_iter()
/// .fold(InputLog::new(), |log, item| log.record(item));
///
/// let statements = build_record(&log, &NumberFormat::default());
/// assert_eq!(statements, ["2+2=4", "4x3"]);
/// ```
pub fn build_record(log: &InputLog, format: &NumberFormat) -> Vec<String> {
    let inputs = log.inputs();
    let mut statements = Vec::new();
    let mut previous = CalculatorState::initial();

    for (index, item) in inputs.iter().enumerate() {
        let is_last = index + 1 == inputs.len();
        let current = previous.apply(item);

        let statement = match (item, &previous) {
            (
                InputItem::Operator(_),
                CalculatorState::LeftOpRightPending { left, op, right }
                | CalculatorState::LeftOpRightDone { left, op, right },
            ) => completed(left, *op, right, &current, format),
            (InputItem::Operator(Operator::Equals), CalculatorState::LeftOp { left, op }) => {
                completed(left, *op, left, &current, format)
            }
            _ if is_last => in_progress(&current, format),
            _ => None,
        };

        statements.extend(statement);
        previous = current;
    }

    statements
}

/// The statement a consumer shows: the last one emitted, or empty.
pub fn latest_record(log: &InputLog, format: &NumberFormat) -> String {
    build_record(log, format).pop().unwrap_or_default()
}

fn completed(
    left: &str,
    op: BinaryOp,
    right: &str,
    current: &CalculatorState,
    format: &NumberFormat,
) -> Option<String> {
    let result = current.left()?;
    Some(format!(
        "{}{}{}={}",
        format.finished(left),
        op.symbol(),
        format.finished(right),
        format.finished(result)
    ))
}

fn in_progress(current: &CalculatorState, format: &NumberFormat) -> Option<String> {
    let left = current.left()?;
    let mut statement = format.finished(left);
    if let Some(op) = current.op() {
        statement.push_str(op.symbol());
    }
    if let Some(right) = current.right() {
        statement.push_str(&format.finished(right));
    }
    Some(statement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Command;

    fn log_of(items: &[InputItem]) -> InputLog {
        items
            .iter()
            .cloned()
            .fold(InputLog::new(), |log, item| log.record(item))
    }

    fn record(items: &[InputItem]) -> Vec<String> {
        build_record(&log_of(items), &NumberFormat::default())
    }

    fn digits(number: &str) -> Vec<InputItem> {
        number
            .bytes()
            .map(|b| match b {
                b'.' => InputItem::DecimalPoint,
                _ => InputItem::Digit(b - b'0'),
            })
            .collect()
    }

    fn op(op: Operator) -> InputItem {
        InputItem::Operator(op)
    }

    #[test]
    fn seed_only_log_has_no_record() {
        assert!(build_record(&InputLog::new(), &NumberFormat::default()).is_empty());
        assert_eq!(latest_record(&InputLog::new(), &NumberFormat::default()), "");
    }

    #[test]
    fn completed_multiplication() {
        let mut items = digits("89");
        items.push(op(Operator::Multiply));
        items.extend(digits("15"));
        items.push(op(Operator::Equals));

        assert_eq!(record(&items), ["89x15=1,335"]);
    }

    #[test]
    fn in_progress_statement_for_last_input() {
        let mut items = digits("1234");
        assert_eq!(record(&items), ["1,234"]);

        items.push(op(Operator::Subtract));
        assert_eq!(record(&items), ["1,234-"]);

        items.extend(digits("5.50"));
        assert_eq!(record(&items), ["1,234-5.5"]);
    }

    #[test]
    fn chained_operator_completes_previous_statement() {
        let mut items = digits("2");
        items.push(op(Operator::Add));
        items.extend(digits("2"));
        items.push(op(Operator::Multiply));
        items.extend(digits("3"));
        items.push(op(Operator::Equals));

        assert_eq!(record(&items), ["2+2=4", "4x3=12"]);
    }

    #[test]
    fn equals_without_right_operand_repeats_left() {
        let mut items = digits("5");
        items.push(op(Operator::Add));
        items.push(op(Operator::Equals));

        assert_eq!(record(&items), ["5+5=10"]);
    }

    #[test]
    fn operator_change_shows_latest_operator() {
        let mut items = digits("7");
        items.push(op(Operator::Add));
        items.push(op(Operator::Divide));

        assert_eq!(record(&items), ["7÷"]);
    }

    #[test]
    fn error_keeps_previous_statement() {
        let mut items = digits("6");
        items.push(op(Operator::Multiply));
        items.extend(digits("2"));
        items.push(op(Operator::Divide));
        items.extend(digits("0"));
        items.push(op(Operator::Equals));

        let log = log_of(&items);
        assert_eq!(build_record(&log, &NumberFormat::default()), ["6x2=12"]);
        assert_eq!(latest_record(&log, &NumberFormat::default()), "6x2=12");
    }

    #[test]
    fn cross_feed_value_appears_as_right_operand() {
        let mut items = digits("2");
        items.push(op(Operator::Multiply));
        items.push(InputItem::CrossFeedValue("1234.5".to_string()));
        assert_eq!(record(&items), ["2x1,234.5"]);

        items.push(op(Operator::Equals));
        assert_eq!(record(&items), ["2x1,234.5=2,469"]);
    }

    #[test]
    fn percent_on_right_operand() {
        let mut items = digits("200");
        items.push(op(Operator::Add));
        items.extend(digits("10"));
        items.push(InputItem::Command(Command::Percent));
        assert_eq!(record(&items), ["200+0.1"]);

        items.push(op(Operator::Equals));
        assert_eq!(record(&items), ["200+0.1=200.1"]);
    }

    #[test]
    fn custom_format_is_used() {
        let format = NumberFormat::new(' ', 3).unwrap();
        let mut items = digits("1000");
        items.push(op(Operator::Add));
        items.push(op(Operator::Equals));

        assert_eq!(build_record(&log_of(&items), &format), ["1 000+1 000=2 000"]);
    }
}
