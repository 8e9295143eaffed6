//! Two calculators sharing one display surface.

use crate::core::{CalculatorState, InputItem, State};
use crate::history::{latest_record, InputLog};
use crate::number::NumberFormat;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which of the two calculators an operation targets.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Side {
    Primary,
    Secondary,
}

impl Side {
    /// The opposite calculator.
    pub fn other(self) -> Self {
        match self {
            Self::Primary => Self::Secondary,
            Self::Secondary => Self::Primary,
        }
    }
}

/// Direction of a cross-feed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum CrossFeed {
    PrimaryToSecondary,
    SecondaryToPrimary,
}

impl CrossFeed {
    /// Side whose display is read.
    pub fn source(self) -> Side {
        match self {
            Self::PrimaryToSecondary => Side::Primary,
            Self::SecondaryToPrimary => Side::Secondary,
        }
    }

    /// Side that receives the value.
    pub fn destination(self) -> Side {
        self.source().other()
    }
}

/// State, log, and record of one calculator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Pane {
    state: CalculatorState,
    log: InputLog,
    record: String,
}

impl Pane {
    fn apply(&mut self, item: InputItem, format: &NumberFormat) {
        self.state = self.state.apply(&item);
        if item.is_clear() {
            self.log = self.log.cleared();
            self.record.clear();
        } else {
            self.log = self.log.record(item);
            self.record = latest_record(&self.log, format);
        }
    }

    fn restore(&mut self, log: InputLog, format: &NumberFormat) {
        self.state = log.replay();
        self.record = latest_record(&log, format);
        self.log = log;
    }
}

/// Two independent calculators that can feed each other's results.
///
/// # Example
///
/// ```rust
/// use bicalc::core::{InputItem, Operator};
/// use bicalc::dual::{CrossFeed, DualCalculator, Side};
///
/// let mut calc = DualCalculator::new();
/// for item in [InputItem::Digit(1), InputItem::Digit(2), InputItem::Digit(0), InputItem::Digit(0)] {
///     calc.apply(Side::Primary, item);
/// }
/// calc.apply(Side::Secondary, InputItem::Digit(3));
/// calc.apply(Side::Secondary, InputItem::Operator(Operator::Multiply));
///
/// calc.push_cross_feed(CrossFeed::PrimaryToSecondary);
/// assert_eq!(calc.output(Side::Secondary), "1,200");
///
/// calc.apply(Side::Secondary, InputItem::Operator(Operator::Equals));
/// assert_eq!(calc.output(Side::Secondary), "3,600");
/// assert_eq!(calc.record(Side::Secondary), "3x1,200=3,600");
/// ```
#[derive(Clone, Debug, Default)]
pub struct DualCalculator {
    primary: Pane,
    secondary: Pane,
    format: NumberFormat,
    last_cross_feed: Option<Side>,
}

impl DualCalculator {
    /// Both calculators at "0" with default grouping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Both calculators at "0" using `format` for display and records.
    pub fn with_format(format: NumberFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    fn pane(&self, side: Side) -> &Pane {
        match side {
            Side::Primary => &self.primary,
            Side::Secondary => &self.secondary,
        }
    }

    /// Mutable pane for `side` together with the shared format.
    fn pane_mut(&mut self, side: Side) -> (&mut Pane, &NumberFormat) {
        let pane = match side {
            Side::Primary => &mut self.primary,
            Side::Secondary => &mut self.secondary,
        };
        (pane, &self.format)
    }

    /// Route an input to one calculator.
    ///
    /// `AC` resets that side's log to its seed and blanks its record; every
    /// other input is logged and the record recomputed.
    pub fn apply(&mut self, side: Side, item: InputItem) {
        let (pane, format) = self.pane_mut(side);
        pane.apply(item, format);
    }

    /// Feed the source side's displayed value into the destination side.
    ///
    /// The value lands committed on the destination, exactly as if it were
    /// an input there, and becomes the target of the next undo.
    pub fn push_cross_feed(&mut self, direction: CrossFeed) {
        let source = direction.source();
        let destination = direction.destination();
        let value = self.format.strip_grouping(&self.output(source));

        debug!(?source, ?destination, value = %value, "pushing cross-feed value");
        self.apply(destination, InputItem::CrossFeedValue(value));
        self.last_cross_feed = Some(destination);
    }

    /// Withdraw the most recent cross-fed value.
    ///
    /// Looks at the side that last received a cross-feed. If its last input
    /// is a cross-fed value, that input is removed, the side is rebuilt by
    /// replaying the rest of its log, and the next undo looks at the other
    /// side. Otherwise nothing changes. Returns whether a value was removed.
    pub fn undo_last_cross_feed(&mut self) -> bool {
        let Some(side) = self.last_cross_feed else {
            return false;
        };

        let (pane, format) = self.pane_mut(side);
        let Some(log) = pane.log.without_last_cross_feed() else {
            debug!(?side, "last input is not a cross-feed value, nothing to undo");
            return false;
        };

        pane.restore(log, format);
        debug!(?side, state = pane.state.name(), "withdrew cross-feed value");
        self.last_cross_feed = Some(side.other());
        true
    }

    /// Current state of one side.
    pub fn state(&self, side: Side) -> &CalculatorState {
        &self.pane(side).state
    }

    /// Current display string of one side.
    pub fn output(&self, side: Side) -> String {
        self.pane(side).state.output_with(&self.format)
    }

    /// Current record string of one side; empty after `AC`.
    pub fn record(&self, side: Side) -> &str {
        &self.pane(side).record
    }

    /// Input log of one side since its last `AC`.
    pub fn log(&self, side: Side) -> &InputLog {
        &self.pane(side).log
    }

    /// Side that most recently received a cross-feed, as tracked for undo.
    pub fn last_cross_feed_destination(&self) -> Option<Side> {
        self.last_cross_feed
    }

    /// Grouping used for displays and records.
    pub fn format(&self) -> &NumberFormat {
        &self.format
    }
}
