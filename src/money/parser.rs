use crate::core::money_config::{MoneyFormatConfig, SymbolPosition, SYMBOL_NONE};
use crate::core::numeric::major_to_cents;
use crate::money::formatter::{format_cents, MONEY_SENTINEL};
use regex::Regex;

/// Parse a formatted money string back to integer minor units (cents).
///
/// Strips the literal symbol (unless the config's symbol is the `"none"`
/// sentinel), all whitespace and every thousand separator, swaps the first
/// decimal separator for `.`, then parses. Empty or unparseable input
/// yields `None`.
///
/// Parsing always normalizes to 2-decimal cents with half-up rounding,
/// regardless of the `decimal_places` the config uses for display. This
/// asymmetry is deliberate: cents are the canonical machine representation
/// and are always scaled by 100.
///
/// # Examples
///
/// ```
/// use formata::core::money_config::MoneyFormatConfig;
/// use formata::money::parser::parse_money_to_cents;
///
/// let brl = MoneyFormatConfig {
///     symbol: "R$".to_string(),
///     thousand_separator: ".".to_string(),
///     decimal_separator: ",".to_string(),
///     ..MoneyFormatConfig::default()
/// };
/// assert_eq!(parse_money_to_cents("R$ 1.234,56", &brl), Some(123456));
/// assert_eq!(parse_money_to_cents("abc", &brl), None);
/// ```
pub fn parse_money_to_cents(text: &str, cfg: &MoneyFormatConfig) -> Option<i64> {
    if text.trim().is_empty() {
        return None;
    }
    let mut cleaned = text.to_string();
    if cfg.symbol != SYMBOL_NONE && !cfg.symbol.is_empty() {
        cleaned = cleaned.replace(&cfg.symbol, "");
    }
    cleaned.retain(|c| !c.is_whitespace());
    if !cfg.thousand_separator.is_empty() {
        cleaned = cleaned.replace(&cfg.thousand_separator, "");
    }
    if !cfg.decimal_separator.is_empty() && cfg.decimal_separator != "." {
        cleaned = cleaned.replacen(&cfg.decimal_separator, ".", 1);
    }
    if cleaned.is_empty() {
        return None;
    }
    let value: f64 = cleaned.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    major_to_cents(value)
}

/// Check whether `text` matches the shape this config formats into:
/// optional leading `-`, optional symbol (with optional space) at the
/// configured position, digits possibly grouped by the thousand separator,
/// optional decimal group. Empty or whitespace-only input is invalid.
pub fn validate_money(text: &str, cfg: &MoneyFormatConfig) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }
    match Regex::new(&money_shape_pattern(cfg)) {
        Ok(re) => re.is_match(trimmed),
        Err(_) => false,
    }
}

fn money_shape_pattern(cfg: &MoneyFormatConfig) -> String {
    let symbol = if cfg.symbol == SYMBOL_NONE {
        String::new()
    } else {
        regex::escape(&cfg.symbol)
    };
    let prefix = if !symbol.is_empty() && cfg.symbol_position == SymbolPosition::Prefix {
        format!("(?:{symbol}\\s?)?")
    } else {
        String::new()
    };
    let suffix = if !symbol.is_empty() && cfg.symbol_position == SymbolPosition::Suffix {
        format!("(?:\\s?{symbol})?")
    } else {
        String::new()
    };
    let thousand = regex::escape(&cfg.thousand_separator);
    let body = format!("[0-9{thousand}]+");
    let fraction = if cfg.decimal_places > 0 {
        let decimal = regex::escape(&cfg.decimal_separator);
        format!("(?:{decimal}[0-9]+)?")
    } else {
        String::new()
    };
    format!("^-?{prefix}{body}{fraction}{suffix}$")
}

/// Reformat a money string from one config's shape to another's.
///
/// Parses under `from_cfg`; a failed parse yields [`MONEY_SENTINEL`],
/// otherwise the cents are formatted under `to_cfg`.
pub fn convert_money(text: &str, from_cfg: &MoneyFormatConfig, to_cfg: &MoneyFormatConfig) -> String {
    match parse_money_to_cents(text, from_cfg) {
        Some(cents) => format_cents(cents, to_cfg),
        None => MONEY_SENTINEL.to_string(),
    }
}
