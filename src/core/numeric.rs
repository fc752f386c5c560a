use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Rounding mode applied when reducing a value to a fixed decimal-place count.
///
/// `HalfUp` rounds midpoints away from zero; `Up` always rounds a non-zero
/// remainder away from zero; `Down` truncates toward zero. The money
/// formatter applies these to the absolute value of the input, so `Up`
/// behaves as a ceiling and `Down` as a floor on the magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    HalfUp,
    Up,
    Down,
}

impl RoundingMode {
    fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::Up => RoundingStrategy::AwayFromZero,
            RoundingMode::Down => RoundingStrategy::ToZero,
        }
    }
}

/// Round `value` to `places` decimal places under the given mode.
pub fn round_at(value: Decimal, places: u32, mode: RoundingMode) -> Decimal {
    value.round_dp_with_strategy(places, mode.strategy())
}

/// Split an already-rounded value into integer and fractional digit strings
/// at exactly `places` fractional digits (zero-padded on the right).
///
/// The fractional part is empty when `places` is zero.
pub fn fixed_parts(value: Decimal, places: u32) -> (String, String) {
    let mut scaled = value;
    scaled.rescale(places);
    let text = scaled.to_string();
    match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (text, String::new()),
    }
}

/// Group a digit string into clusters of 3 from the right, joined by `separator`.
///
/// No separator is emitted before the leading cluster.
///
/// # Examples
///
/// ```
/// use formata::core::numeric::group_thousands;
///
/// assert_eq!(group_thousands("1234567", "."), "1.234.567");
/// assert_eq!(group_thousands("321", ","), "321");
/// ```
pub fn group_thousands(digits: &str, separator: &str) -> String {
    if separator.is_empty() || digits.len() <= 3 {
        return digits.to_string();
    }
    let chars: Vec<char> = digits.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(*c);
    }
    grouped
}

/// A loosely-typed monetary input, as delivered by callers that may hold a
/// number, a user-entered string, or nothing at all.
///
/// Coercion applies the documented cleanup rules: keep digits, `-`, `.` and
/// `,` from text, swap commas for dots, then parse. Non-finite numbers and
/// unparseable text coerce to `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericInput {
    Number(f64),
    Text(String),
    Missing,
}

impl NumericInput {
    /// Coerce to a finite `f64`, or `None` when the input carries no usable value.
    pub fn coerce(&self) -> Option<f64> {
        match self {
            NumericInput::Number(n) if n.is_finite() => Some(*n),
            NumericInput::Number(_) => None,
            NumericInput::Missing => None,
            NumericInput::Text(s) => {
                let cleaned: String = s
                    .chars()
                    .filter(|c| c.is_ascii_digit() || matches!(c, '-' | '.' | ','))
                    .collect();
                let cleaned = cleaned.replace(',', ".");
                if cleaned.is_empty() {
                    return None;
                }
                cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
            }
        }
    }
}

impl From<f64> for NumericInput {
    fn from(n: f64) -> Self {
        NumericInput::Number(n)
    }
}

impl From<i64> for NumericInput {
    fn from(n: i64) -> Self {
        NumericInput::Number(n as f64)
    }
}

impl From<&str> for NumericInput {
    fn from(s: &str) -> Self {
        NumericInput::Text(s.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(s: String) -> Self {
        NumericInput::Text(s)
    }
}

impl From<Option<f64>> for NumericInput {
    fn from(n: Option<f64>) -> Self {
        match n {
            Some(v) => NumericInput::Number(v),
            None => NumericInput::Missing,
        }
    }
}

/// Convert a major-unit value (already validated finite) to integer minor
/// units, rounding half-away-from-zero at 2 decimal places.
pub fn major_to_cents(value: f64) -> Option<i64> {
    let decimal = Decimal::from_f64(value)?;
    let rounded = round_at(decimal, 2, RoundingMode::HalfUp);
    (rounded * Decimal::from(100)).to_i64()
}
