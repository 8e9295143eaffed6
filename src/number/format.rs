//! Display formatting for operands.
//!
//! Two display forms exist. The *pending* form is shown while an operand
//! is still being typed and keeps the fractional part verbatim, so a
//! trailing point or trailing zeros stay visible. The *finished* form is
//! shown once an operand is committed and trims that noise away.

use crate::number::decimal::parse_operand;
use crate::number::error::{CalcError, Result};
use serde::{Deserialize, Serialize};

/// Literal shown in place of a number that cannot be displayed.
pub const ERROR_DISPLAY: &str = "Error";

/// Digit grouping settings.
///
/// This is the only localisation the calculator supports. Hosts can load
/// it from JSON; missing fields fall back to `','` every `3` digits.
///
/// The separator must never be mistaken for part of a number, so the
/// decimal point, the minus sign, and ASCII digits are rejected.
///
/// # Example
///
/// ```rust
/// use bicalc::number::NumberFormat;
///
/// let format = NumberFormat::from_json(r#"{ "group_separator": "'" }"#).unwrap();
/// assert_eq!(format.group_size(), 3);
/// assert_eq!(format.finished("1234567"), "1'234'567");
///
/// assert!(NumberFormat::from_json(r#"{ "group_separator": "." }"#).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FormatConfig")]
pub struct NumberFormat {
    group_separator: char,
    group_size: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            group_separator: ',',
            group_size: 3,
        }
    }
}

/// Unvalidated form of [`NumberFormat`] as it appears in JSON.
#[derive(Deserialize)]
#[serde(default)]
struct FormatConfig {
    group_separator: char,
    group_size: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        let format = NumberFormat::default();
        Self {
            group_separator: format.group_separator,
            group_size: format.group_size,
        }
    }
}

impl TryFrom<FormatConfig> for NumberFormat {
    type Error = CalcError;

    fn try_from(config: FormatConfig) -> Result<Self> {
        Self::new(config.group_separator, config.group_size)
    }
}

/// An operand split into sign, integer digits, and optional fraction.
struct Parts<'a> {
    negative: bool,
    whole: &'a str,
    fraction: Option<&'a str>,
}

impl<'a> Parts<'a> {
    fn split(operand: &'a str) -> Self {
        let (negative, unsigned) = match operand.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, operand),
        };
        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (unsigned, None),
        };
        Self {
            negative,
            whole,
            fraction,
        }
    }
}

impl NumberFormat {
    /// Build a format, rejecting separators that collide with operand syntax.
    pub fn new(group_separator: char, group_size: usize) -> Result<Self> {
        if group_separator == '.' || group_separator == '-' || group_separator.is_ascii_digit() {
            return Err(CalcError::InvalidSeparator(group_separator));
        }
        Ok(Self {
            group_separator,
            group_size,
        })
    }

    /// Load a format from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Character inserted between digit groups.
    pub fn group_separator(&self) -> char {
        self.group_separator
    }

    /// Digits per group; zero disables grouping.
    pub fn group_size(&self) -> usize {
        self.group_size
    }

    /// Display form while the operand is still editable.
    ///
    /// ```rust
    /// use bicalc::number::NumberFormat;
    ///
    /// let format = NumberFormat::default();
    /// assert_eq!(format.pending("1234.50"), "1,234.50");
    /// assert_eq!(format.pending("1234."), "1,234.");
    /// ```
    pub fn pending(&self, operand: &str) -> String {
        if parse_operand(operand).is_err() {
            return ERROR_DISPLAY.to_string();
        }

        let parts = Parts::split(operand);
        let mut display = self.signed_whole(&parts);
        if let Some(fraction) = parts.fraction {
            display.push('.');
            display.push_str(fraction);
        }
        display
    }

    /// Display form after the operand is committed.
    ///
    /// ```rust
    /// use bicalc::number::NumberFormat;
    ///
    /// let format = NumberFormat::default();
    /// assert_eq!(format.finished("1234.50"), "1,234.5");
    /// assert_eq!(format.finished("1234."), "1,234");
    /// assert_eq!(format.finished(".5"), "0.5");
    /// ```
    pub fn finished(&self, operand: &str) -> String {
        if parse_operand(operand).is_err() {
            return ERROR_DISPLAY.to_string();
        }

        let parts = Parts::split(operand);
        let mut display = self.signed_whole(&parts);
        let fraction = parts.fraction.unwrap_or("").trim_end_matches('0');
        if !fraction.is_empty() {
            display.push('.');
            display.push_str(fraction);
        }
        display
    }

    /// Remove grouping separators from the integer part of a display string.
    ///
    /// The fraction after the first `.` is copied through untouched.
    pub fn strip_grouping(&self, display: &str) -> String {
        let (whole, fraction) = match display.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (display, None),
        };

        let mut stripped: String = whole
            .chars()
            .filter(|&ch| ch != self.group_separator)
            .collect();
        if let Some(fraction) = fraction {
            stripped.push('.');
            stripped.push_str(fraction);
        }
        stripped
    }

    fn signed_whole(&self, parts: &Parts<'_>) -> String {
        let whole = if parts.whole.is_empty() { "0" } else { parts.whole };
        let grouped = self.group(whole);
        if parts.negative {
            format!("-{grouped}")
        } else {
            grouped
        }
    }

    fn group(&self, digits: &str) -> String {
        if self.group_size == 0 {
            return digits.to_string();
        }

        let len = digits.len();
        let mut grouped = String::with_capacity(len + len / self.group_size);
        for (index, ch) in digits.chars().enumerate() {
            if index > 0 && (len - index) % self.group_size == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(ch);
        }
        grouped
    }
}

/// [`NumberFormat::pending`] with the default grouping.
pub fn pending_formatted(operand: &str) -> String {
    NumberFormat::default().pending(operand)
}

/// [`NumberFormat::finished`] with the default grouping.
pub fn finished_formatted(operand: &str) -> String {
    NumberFormat::default().finished(operand)
}
