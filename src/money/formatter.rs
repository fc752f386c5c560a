use crate::core::money_config::{MoneyFormatConfig, SymbolPosition, SYMBOL_NONE};
use crate::core::numeric::{fixed_parts, group_thousands, round_at};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

/// Sentinel returned by money formatting (and string conversion) when the
/// input carries no formattable value. Callers treat this as the error
/// channel; these functions never panic on malformed input.
pub const MONEY_SENTINEL: &str = "-";

/// Format a major-unit amount under a config.
///
/// Non-finite input yields [`MONEY_SENTINEL`]. The sign is recorded first
/// and re-attached as a leading `-` outside the whole composed string, so
/// it stays outermost regardless of symbol position. The absolute value is
/// rounded to `decimal_places` under the configured mode, grouped in
/// clusters of 3, and joined to the symbol per position and spacing. A
/// symbol of `"none"` suppresses the symbol token entirely.
///
/// # Examples
///
/// ```
/// use formata::core::money_config::MoneyFormatConfig;
/// use formata::money::formatter::format_money;
///
/// let brl = MoneyFormatConfig {
///     symbol: "R$".to_string(),
///     thousand_separator: ".".to_string(),
///     decimal_separator: ",".to_string(),
///     ..MoneyFormatConfig::default()
/// };
/// assert_eq!(format_money(-9876.5, &brl), "-R$ 9.876,50");
/// assert_eq!(format_money(f64::NAN, &brl), "-");
/// ```
pub fn format_money(value: f64, cfg: &MoneyFormatConfig) -> String {
    if !value.is_finite() {
        return MONEY_SENTINEL.to_string();
    }
    let negative = value < 0.0;
    let Some(magnitude) = Decimal::from_f64(value.abs()) else {
        return MONEY_SENTINEL.to_string();
    };
    let rounded = round_at(magnitude, cfg.decimal_places, cfg.rounding);
    let (int_part, frac_part) = fixed_parts(rounded, cfg.decimal_places);
    let grouped = group_thousands(&int_part, &cfg.thousand_separator);

    let core = if cfg.decimal_places > 0 {
        format!("{}{}{}", grouped, cfg.decimal_separator, frac_part)
    } else {
        grouped
    };
    let composed = attach_symbol(&core, cfg);

    if negative {
        format!("-{composed}")
    } else {
        composed
    }
}

/// Format an integer minor-unit (cents) amount: divides by 100 and
/// delegates to [`format_money`].
pub fn format_cents(cents: i64, cfg: &MoneyFormatConfig) -> String {
    format_money(cents as f64 / 100.0, cfg)
}

fn attach_symbol(core: &str, cfg: &MoneyFormatConfig) -> String {
    if cfg.symbol == SYMBOL_NONE {
        return core.to_string();
    }
    let gap = if cfg.space_between_symbol { " " } else { "" };
    match cfg.symbol_position {
        SymbolPosition::Prefix => format!("{}{}{}", cfg.symbol, gap, core),
        SymbolPosition::Suffix => format!("{}{}{}", core, gap, cfg.symbol),
        SymbolPosition::None => core.to_string(),
    }
}
